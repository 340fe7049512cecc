//! HTML pages for the interactive mode

use crate::error::Result;
use crate::processing::analyzer::AnalysisResult;
use crate::processing::ranker::RankedBatch;
use askama::Template;
use axum::response::Html;

pub const PAGE_TITLE: &str = "📄 AI Resume Scanner - Batch Mode";

const STYLES: &str = r#"
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; line-height: 1.5; color: #333; max-width: 960px; margin: 0 auto; padding: 20px; background: #f8f9fa; }
.container { background: white; padding: 30px; border-radius: 8px; box-shadow: 0 2px 10px rgba(0,0,0,0.1); }
textarea { width: 100%; min-height: 200px; font-family: inherit; }
.error { background: #f8d7da; color: #721c24; padding: 10px 15px; border-radius: 6px; }
.success { background: #d4edda; color: #155724; padding: 10px 15px; border-radius: 6px; }
table { border-collapse: collapse; width: 100%; margin: 15px 0; }
th, td { border: 1px solid #dee2e6; padding: 6px 10px; text-align: left; vertical-align: top; }
th.sortable { cursor: pointer; background: #e9ecef; }
.panel { display: none; }
.panel.active { display: block; }
.advice { white-space: pre-wrap; background: #f8f9fa; padding: 15px; border-left: 4px solid #007acc; }
"#;

/// Upload form
#[derive(Template)]
#[template(
    source = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<title>{{ title }}</title>
<style>{{ styles|safe }}</style>
</head>
<body>
<div class="container">
<h1>{{ title }}</h1>
<form method="post" action="/analyze" enctype="multipart/form-data">
<p><label for="job_description">📝 Paste Job Description Here</label></p>
<textarea id="job_description" name="job_description"></textarea>
<p><label for="resumes">📂 Upload Resumes (PDF/DOCX)</label></p>
<input id="resumes" type="file" name="resumes" accept=".pdf,.docx" multiple>
<p><button type="submit">Analyze</button></p>
</form>
</div>
</body>
</html>"#,
    ext = "html"
)]
pub struct IndexPage {
    pub title: &'static str,
    pub styles: &'static str,
}

impl IndexPage {
    pub fn new() -> Self {
        Self {
            title: PAGE_TITLE,
            styles: STYLES,
        }
    }
}

impl Default for IndexPage {
    fn default() -> Self {
        Self::new()
    }
}

/// One ranked resume, pre-formatted for display
#[derive(Debug, Clone, PartialEq)]
pub struct ResultRow {
    pub resume: String,
    pub score: String,
    pub missing_keywords: Vec<String>,
    pub suggested_keywords: Vec<String>,
    pub advice: String,
}

impl From<&AnalysisResult> for ResultRow {
    fn from(result: &AnalysisResult) -> Self {
        let analysis = &result.analysis;
        Self {
            resume: result.resume.clone(),
            score: format!("{:.1}", analysis.match_score),
            missing_keywords: analysis.missing_keywords.as_slice().to_vec(),
            suggested_keywords: analysis.suggested_keywords.clone(),
            advice: analysis.advice.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SkippedRow {
    pub name: String,
    pub reason: String,
}

/// Ranking table, resume selector and per-resume detail panels
#[derive(Template)]
#[template(
    source = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<title>{{ title }}</title>
<style>{{ styles|safe }}</style>
</head>
<body>
<div class="container">
<h1>{{ title }}</h1>
<p class="success">✅ Resume Analysis Complete</p>

{% if rows.is_empty() %}<p class="error">None of the uploaded files could be analysed.</p>{% endif %}

<table id="ranking">
<thead><tr>
<th class="sortable" data-column="0" data-type="text">resume</th>
<th class="sortable" data-column="1" data-type="number">match_score</th>
</tr></thead>
<tbody>
{% for row in rows %}<tr><td>{{ row.resume }}</td><td>{{ row.score }}</td></tr>
{% endfor %}</tbody>
</table>

{% if !skipped.is_empty() %}
<h3>⚠️ Skipped</h3>
<ul>
{% for item in skipped %}<li>{{ item.name }}: {{ item.reason }}</li>
{% endfor %}</ul>
{% endif %}

{% if !rows.is_empty() %}
<p><label for="selector">📂 Select a Resume to View Details</label></p>
<select id="selector">
{% for row in rows %}<option value="panel-{{ loop.index0 }}">{{ row.resume }}</option>
{% endfor %}</select>

{% for row in rows %}
<div class="panel{% if loop.first %} active{% endif %}" id="panel-{{ loop.index0 }}">
<h3>🔍 Keywords Analysis</h3>
<table>
<thead><tr><th>Missing Keywords</th><th>Suggested Keywords</th></tr></thead>
<tbody><tr>
<td><ul>{% for keyword in row.missing_keywords %}<li>{{ keyword }}</li>{% endfor %}</ul></td>
<td><ul>{% for keyword in row.suggested_keywords %}<li>{{ keyword }}</li>{% endfor %}</ul></td>
</tr></tbody>
</table>
<h3>🤖 AI Advice</h3>
<div class="advice">{{ row.advice }}</div>
</div>
{% endfor %}
{% endif %}

<p><a href="/">Analyze another batch</a></p>
</div>
<script>
document.getElementById('selector')?.addEventListener('change', function (event) {
  document.querySelectorAll('.panel').forEach(function (panel) {
    panel.classList.toggle('active', panel.id === event.target.value);
  });
});
document.querySelectorAll('#ranking th.sortable').forEach(function (header) {
  var descending = header.dataset.type === 'number';
  header.addEventListener('click', function () {
    var body = document.querySelector('#ranking tbody');
    var column = Number(header.dataset.column);
    var numeric = header.dataset.type === 'number';
    var rows = Array.from(body.rows);
    rows.sort(function (a, b) {
      var x = a.cells[column].textContent;
      var y = b.cells[column].textContent;
      var order = numeric ? Number(x) - Number(y) : x.localeCompare(y);
      return descending ? -order : order;
    });
    descending = !descending;
    rows.forEach(function (row) { body.appendChild(row); });
  });
});
</script>
</body>
</html>"#,
    ext = "html"
)]
pub struct ResultsPage {
    pub title: &'static str,
    pub styles: &'static str,
    pub rows: Vec<ResultRow>,
    pub skipped: Vec<SkippedRow>,
}

impl ResultsPage {
    pub fn from_batch(batch: &RankedBatch) -> Self {
        Self {
            title: PAGE_TITLE,
            styles: STYLES,
            rows: batch.results.iter().map(ResultRow::from).collect(),
            skipped: batch
                .skipped
                .iter()
                .map(|s| SkippedRow {
                    name: s.name.clone(),
                    reason: s.reason.clone(),
                })
                .collect(),
        }
    }
}

/// Plain message page used for error responses
#[derive(Template)]
#[template(
    source = r#"<!DOCTYPE html>
<html lang="en">
<head><meta charset="UTF-8"><title>{{ title }}</title><style>{{ styles|safe }}</style></head>
<body><div class="container"><h1>{{ title }}</h1><p class="error">{{ message }}</p><p><a href="/">Back</a></p></div></body>
</html>"#,
    ext = "html"
)]
pub struct MessagePage {
    pub title: &'static str,
    pub styles: &'static str,
    pub message: String,
}

impl MessagePage {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            title: PAGE_TITLE,
            styles: STYLES,
            message: message.into(),
        }
    }
}

pub fn render<T: Template>(page: &T) -> Result<Html<String>> {
    Ok(Html(page.render()?))
}
