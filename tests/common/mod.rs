#![allow(dead_code)]

use async_trait::async_trait;
use resume_ranker::config::ProcessingConfig;
use resume_ranker::llm::{CompletionClient, LlmError};
use resume_ranker::processing::{BatchRanker, ResumeAnalyzer, StopWords};
use docx_rs::{Docx, Paragraph, Run};
use std::io::Cursor;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

pub const SCRIPTED_ADVICE: &str = "Lead with your most relevant project.";

/// In-process stand-in for the generative model
pub struct ScriptedClient {
    fail: bool,
    pub calls: AtomicUsize,
}

impl ScriptedClient {
    pub fn working() -> Self {
        Self {
            fail: false,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CompletionClient for ScriptedClient {
    async fn complete(&self, prompt: &str) -> Result<Option<String>, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(LlmError::Api {
                status: 503,
                message: "model overloaded".to_string(),
            });
        }
        if prompt.starts_with("Missing Keywords") {
            Ok(Some("Try **Docker** and **Kubernetes**.".to_string()))
        } else {
            Ok(Some(SCRIPTED_ADVICE.to_string()))
        }
    }

    fn model(&self) -> &str {
        "scripted"
    }
}

pub fn ranker(client: Arc<dyn CompletionClient>, max_concurrency: usize) -> BatchRanker {
    let processing = ProcessingConfig {
        max_concurrency,
        ..ProcessingConfig::default()
    };
    let analyzer = ResumeAnalyzer::new(Arc::new(StopWords::english()), client, &processing);
    BatchRanker::new(analyzer, processing.max_concurrency)
}

/// DOCX with one paragraph per line
pub fn docx_bytes(text: &str) -> Vec<u8> {
    let docx = text.lines().fold(Docx::new(), |docx, line| {
        docx.add_paragraph(Paragraph::new().add_run(Run::new().add_text(line)))
    });

    let mut buffer = Cursor::new(Vec::new());
    docx.build().pack(&mut buffer).unwrap();
    buffer.into_inner()
}

pub fn write_docx(dir: &Path, name: &str, text: &str) {
    std::fs::write(dir.join(name), docx_bytes(text)).unwrap();
}
