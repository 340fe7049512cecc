//! Text extraction from PDF and DOCX resumes

use crate::error::{Result, ResumeRankerError};
use docx_rs::{
    DocumentChild, Hyperlink, Insert, InsertChild, Paragraph, ParagraphChild, Run, RunChild, Table,
    TableCellContent, TableChild, TableRowChild,
};
use std::path::Path;
use tokio::fs;

pub trait TextExtractor {
    fn extract(&self, path: &Path) -> impl std::future::Future<Output = Result<String>> + Send;
}

pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await?;
        let display = path.display().to_string();

        // pdf-extract is synchronous and may panic on broken input; a panic
        // surfaces here as a JoinError.
        let text = tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&bytes))
            .await
            .map_err(|e| {
                ResumeRankerError::PdfExtraction(format!("PDF parser aborted on '{}': {}", display, e))
            })?
            .map_err(|e| {
                ResumeRankerError::PdfExtraction(format!("Failed to extract text from PDF '{}': {}", path.display(), e))
            })?;

        Ok(text.trim().to_string())
    }
}

pub struct DocxExtractor;

impl TextExtractor for DocxExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await?;
        let display = path.display().to_string();

        tokio::task::spawn_blocking(move || DocxExtractor.extract_from_bytes(&bytes))
            .await
            .map_err(|e| ResumeRankerError::DocxExtraction(format!("DOCX parser aborted on '{}': {}", display, e)))?
            .map_err(|e| match e {
                ResumeRankerError::DocxExtraction(msg) => ResumeRankerError::DocxExtraction(format!(
                    "Failed to extract text from DOCX '{}': {}",
                    path.display(),
                    msg
                )),
                other => other,
            })
    }
}

impl DocxExtractor {
    /// Body text: one line per paragraph, tabs and breaks kept, outer whitespace trimmed
    pub fn extract_from_bytes(&self, bytes: &[u8]) -> Result<String> {
        let docx = docx_rs::read_docx(bytes)
            .map_err(|e| ResumeRankerError::DocxExtraction(format!("Unable to read the DOCX document: {}", e)))?;

        let mut text = String::new();
        for child in &docx.document.children {
            collect_document_child(child, &mut text);
        }
        Ok(text.trim().to_string())
    }
}

fn collect_document_child(child: &DocumentChild, text: &mut String) {
    match child {
        DocumentChild::Paragraph(paragraph) => collect_paragraph(paragraph, text),
        DocumentChild::Table(table) => collect_table(table, text),
        _ => {}
    }
}

fn collect_paragraph(paragraph: &Paragraph, text: &mut String) {
    for child in &paragraph.children {
        append_paragraph_child(child, text);
    }
    text.push('\n');
}

fn collect_table(table: &Table, text: &mut String) {
    for row in &table.rows {
        let TableChild::TableRow(row) = row;
        for cell in &row.cells {
            let TableRowChild::TableCell(cell) = cell;
            for content in &cell.children {
                match content {
                    TableCellContent::Paragraph(paragraph) => collect_paragraph(paragraph, text),
                    TableCellContent::Table(inner) => collect_table(inner, text),
                    _ => {}
                }
            }
        }
    }
}

fn append_paragraph_child(child: &ParagraphChild, text: &mut String) {
    match child {
        ParagraphChild::Run(run) => append_run(run, text),
        ParagraphChild::Insert(insert) => append_insert(insert, text),
        ParagraphChild::Hyperlink(hyperlink) => append_hyperlink(hyperlink, text),
        _ => {}
    }
}

fn append_hyperlink(hyperlink: &Hyperlink, text: &mut String) {
    for child in &hyperlink.children {
        append_paragraph_child(child, text);
    }
}

fn append_insert(insert: &Insert, text: &mut String) {
    for child in &insert.children {
        if let InsertChild::Run(run) = child {
            append_run(run, text);
        }
    }
}

fn append_run(run: &Run, text: &mut String) {
    for child in &run.children {
        match child {
            RunChild::Text(t) => text.push_str(&t.text),
            RunChild::Tab(_) => text.push('\t'),
            RunChild::Break(_) => text.push('\n'),
            _ => {}
        }
    }
}
