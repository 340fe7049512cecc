//! Prompt templates for keyword suggestions and resume advice

use log::debug;

#[derive(Debug, Clone)]
pub struct PromptTemplates {
    pub keyword_suggestions: String,
    pub resume_advice: String,
}

impl Default for PromptTemplates {
    fn default() -> Self {
        Self {
            keyword_suggestions: KEYWORD_SUGGESTIONS_TEMPLATE.to_string(),
            resume_advice: RESUME_ADVICE_TEMPLATE.to_string(),
        }
    }
}

impl PromptTemplates {
    pub fn render_keyword_suggestions<S: AsRef<str>>(&self, missing_keywords: &[S], resume_keywords: &[S]) -> String {
        let prompt = self
            .keyword_suggestions
            .replace("{missing}", &join(missing_keywords))
            .replace("{resume}", &join(resume_keywords));

        debug!("Keyword suggestion prompt length: {}", prompt.len());
        prompt
    }

    pub fn render_resume_advice(&self, resume_text: &str, job_description: &str) -> String {
        // Job first: a resume containing the literal "{job}" must not be expanded.
        let prompt = self
            .resume_advice
            .replace("{job}", job_description)
            .replacen("{resume}", resume_text, 1);

        debug!("Advice prompt length: {}", prompt.len());
        prompt
    }
}

fn join<S: AsRef<str>>(items: &[S]) -> String {
    items.iter().map(|s| s.as_ref()).collect::<Vec<_>>().join(", ")
}

const KEYWORD_SUGGESTIONS_TEMPLATE: &str = "Missing Keywords: {missing}
Resume Keywords: {resume}

Suggest up to 10 keywords the candidate should add to the resume to cover the missing keywords. \
Wrap every suggested keyword in double asterisks, like **keyword**.";

const RESUME_ADVICE_TEMPLATE: &str = "Provide improvement suggestions for the following resume based on the job description:

Resume: {resume}

Job Description: {job}";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_suggestions_rendering() {
        let templates = PromptTemplates::default();
        let prompt = templates.render_keyword_suggestions(&["python", "sql"], &["java"]);

        assert!(prompt.starts_with("Missing Keywords: python, sql\nResume Keywords: java"));
        assert!(prompt.contains("**keyword**"));
    }

    #[test]
    fn test_resume_advice_rendering() {
        let templates = PromptTemplates::default();
        let prompt = templates.render_resume_advice("Java developer", "Python role");

        assert!(prompt.contains("Resume: Java developer"));
        assert!(prompt.contains("Job Description: Python role"));
        assert!(prompt.starts_with("Provide improvement suggestions"));
    }

    #[test]
    fn test_placeholders_in_inputs_are_left_alone() {
        let templates = PromptTemplates::default();
        let prompt = templates.render_resume_advice("I wrote {job} templates", "Role {resume}");

        assert!(prompt.contains("Resume: I wrote {job} templates"));
        assert!(prompt.contains("Job Description: Role {resume}"));
    }
}
