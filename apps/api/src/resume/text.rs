//! Text Extractor — turns an uploaded PDF or DOCX into a plain text string.
//!
//! PDF pages are decoded one at a time so that a page without a text layer
//! contributes nothing instead of failing the whole document. DOCX bodies are
//! read with `docx-rs`, keeping only the paragraphs that sit directly in the
//! document body.

use std::io::Cursor;

use docx_rs::{read_docx, DocumentChild, ParagraphChild, RunChild};
use lopdf::Document as PdfDocument;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

pub const PDF_MIME: &str = "application/pdf";
pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

const DOCX_BODY_PART: &str = "word/document.xml";

/// Ceiling on the summed uncompressed size of every entry in a DOCX package.
/// The upload limit only bounds the compressed bytes.
pub const MAX_DOCX_INFLATED_BYTES: u64 = 32 * 1024 * 1024;

/// Raised only when a document cannot be read as its declared kind at all.
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("not a readable PDF: {0}")]
    Pdf(String),

    #[error("not a readable DOCX archive: {0}")]
    Archive(String),

    #[error("DOCX archive has no word/document.xml part")]
    MissingBody,

    #[error("malformed DOCX document: {0}")]
    Docx(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    Pdf,
    Docx,
}

impl DocumentKind {
    /// Resolves the kind from an upload's content type, falling back to the
    /// file extension when the content type is missing or generic.
    pub fn detect(content_type: Option<&str>, file_name: Option<&str>) -> Option<Self> {
        let by_mime = content_type.and_then(|ct| {
            let essence = ct.split(';').next().unwrap_or(ct).trim();
            if essence.eq_ignore_ascii_case(PDF_MIME) {
                Some(DocumentKind::Pdf)
            } else if essence.eq_ignore_ascii_case(DOCX_MIME) {
                Some(DocumentKind::Docx)
            } else {
                None
            }
        });

        by_mime.or_else(|| {
            let ext = file_name?.rsplit_once('.')?.1.to_ascii_lowercase();
            match ext.as_str() {
                "pdf" => Some(DocumentKind::Pdf),
                "docx" => Some(DocumentKind::Docx),
                _ => None,
            }
        })
    }
}

/// Extracts the plain text of a document held entirely in memory.
pub fn extract(bytes: &[u8], kind: DocumentKind) -> Result<String, ExtractionError> {
    match kind {
        DocumentKind::Pdf => extract_pdf(bytes),
        DocumentKind::Docx => extract_docx(bytes),
    }
}

fn extract_pdf(bytes: &[u8]) -> Result<String, ExtractionError> {
    let pdf = PdfDocument::load_mem(bytes).map_err(|e| ExtractionError::Pdf(e.to_string()))?;

    // get_pages is keyed by 1-based page number, so iteration is document order.
    let pages = pdf.get_pages();
    debug!("Extracting text from {} PDF page(s)", pages.len());

    let mut text = String::new();
    for page_number in pages.keys() {
        match pdf.extract_text(&[*page_number]) {
            Ok(page_text) => text.push_str(&page_text),
            Err(e) => warn!("PDF page {page_number} has no extractable text: {e}"),
        }
    }
    Ok(text)
}

fn extract_docx(bytes: &[u8]) -> Result<String, ExtractionError> {
    check_docx_package(bytes, MAX_DOCX_INFLATED_BYTES)?;

    let docx = read_docx(bytes).map_err(|e| ExtractionError::Docx(e.to_string()))?;

    // Only direct children of the body count. Tables and content controls
    // arrive as their own `DocumentChild` variants and are skipped.
    let paragraphs: Vec<String> = docx
        .document
        .children
        .iter()
        .filter_map(|child| match child {
            DocumentChild::Paragraph(paragraph) => Some(paragraph_text(&paragraph.children)),
            _ => None,
        })
        .collect();

    debug!("Extracted {} DOCX paragraph(s)", paragraphs.len());
    Ok(paragraphs.join("\n"))
}

/// Rejects packages that are not zips, lack a body part, or declare more
/// inflated bytes than `limit` across their entries.
fn check_docx_package(bytes: &[u8], limit: u64) -> Result<(), ExtractionError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))
        .map_err(|e| ExtractionError::Archive(e.to_string()))?;

    if archive.index_for_name(DOCX_BODY_PART).is_none() {
        return Err(ExtractionError::MissingBody);
    }

    let mut inflated: u64 = 0;
    for index in 0..archive.len() {
        let entry = archive
            .by_index_raw(index)
            .map_err(|e| ExtractionError::Archive(e.to_string()))?;
        inflated = inflated.saturating_add(entry.size());
        if inflated > limit {
            warn!(
                "DOCX entry {} pushes inflated size past {limit} bytes",
                entry.name()
            );
            return Err(ExtractionError::Archive(format!(
                "package inflates past {limit} bytes"
            )));
        }
    }
    Ok(())
}

fn paragraph_text(children: &[ParagraphChild]) -> String {
    let mut text = String::new();
    for child in children {
        match child {
            ParagraphChild::Run(run) => {
                for run_child in &run.children {
                    match run_child {
                        RunChild::Text(t) => text.push_str(&t.text),
                        RunChild::Tab(_) => text.push('\t'),
                        RunChild::Break(_) => text.push('\n'),
                        _ => {}
                    }
                }
            }
            ParagraphChild::Hyperlink(link) => text.push_str(&paragraph_text(&link.children)),
            _ => {}
        }
    }
    text
}
