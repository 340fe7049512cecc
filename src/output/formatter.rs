//! Console report for batch mode

use crate::processing::analyzer::AnalysisResult;
use crate::processing::ranker::{RankedBatch, SkippedDocument};
use chrono::{DateTime, Local};
use colored::{Color, Colorize};

const SEPARATOR_WIDTH: usize = 50;

/// Plain-text ranking report, optionally coloured
pub struct ConsoleFormatter {
    use_colors: bool,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn score_color(score: f64) -> Color {
        match score {
            s if s >= 70.0 => Color::Green,
            s if s >= 40.0 => Color::Yellow,
            _ => Color::Red,
        }
    }

    /// Render the batch with the current local time in the footer
    pub fn format_batch(&self, batch: &RankedBatch) -> String {
        self.format_batch_at(batch, Local::now())
    }

    pub fn format_batch_at(&self, batch: &RankedBatch, generated_at: DateTime<Local>) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "\n{}\n\n",
            self.colorize("📊 **Resume Ranking Based on Match Score:**", Color::Blue)
        ));

        if batch.is_empty() {
            output.push_str("No resumes could be analysed.\n");
        }

        for (i, result) in batch.results.iter().enumerate() {
            output.push_str(&self.format_result(i + 1, result));
        }

        if !batch.skipped.is_empty() {
            output.push_str(&self.format_skipped(&batch.skipped));
        }

        output.push_str(&self.colorize(
            &format!("Generated {}\n", generated_at.format("%Y-%m-%d %H:%M:%S")),
            Color::BrightBlack,
        ));
        output
    }

    fn format_result(&self, rank: usize, result: &AnalysisResult) -> String {
        let analysis = &result.analysis;
        let score = format!("{:.1}%", analysis.match_score);

        let mut output = format!(
            "{}. {} - Score: {}\n",
            rank,
            result.resume,
            self.colorize(&score, Self::score_color(analysis.match_score))
        );
        output.push_str(&format!("   🔍 Missing: {}\n", analysis.missing_keywords.join(", ")));
        output.push_str(&format!("   🔹 Suggested: {}\n", analysis.suggested_keywords.join(", ")));
        output.push_str(&format!("   🤖 AI Advice: {}\n", analysis.advice));
        output.push_str(&"-".repeat(SEPARATOR_WIDTH));
        output.push('\n');
        output
    }

    fn format_skipped(&self, skipped: &[SkippedDocument]) -> String {
        let mut output = format!("\n{}\n", self.colorize("⚠️ Skipped:", Color::Yellow));
        for document in skipped {
            output.push_str(&format!("   • {}: {}\n", document.name, document.reason));
        }
        output.push('\n');
        output
    }
}
