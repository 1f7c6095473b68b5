//! Uploaded document handling.
//!
//! Uploads are classified by their leading bytes and decoded to text before
//! extraction. Word documents are read with `docx-rs`, PDFs with
//! `pdf-extract`, and anything else is treated as UTF-8 text.

use std::panic;

use docx_rs::{DocumentChild, Paragraph, ParagraphChild, RunChild};
use serde::{Deserialize, Serialize};

use crate::error::{ParseError, Result};
use crate::parser::extract;
use crate::types::{ExtractDefaults, QuestionRecord};

const PDF_MAGIC: &[u8] = b"%PDF";
const ZIP_MAGIC: &[u8] = b"PK\x03\x04";
/// Main part of a WordprocessingML package. Zip entry names are stored
/// uncompressed, so it can be found in the raw bytes.
const DOCX_MAIN_PART: &[u8] = b"word/document.xml";

/// Kind of uploaded document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    Txt,
    Docx,
    Pdf,
}

impl FileType {
    /// Detect the file type from its content, falling back to plain text.
    ///
    /// Zip archives other than Word documents (xlsx, epub, plain zip) are
    /// rejected rather than decoded as text.
    pub fn sniff(bytes: &[u8]) -> Result<Self> {
        if bytes.starts_with(PDF_MAGIC) {
            Ok(Self::Pdf)
        } else if bytes.starts_with(ZIP_MAGIC) {
            if contains(bytes, DOCX_MAIN_PART) {
                Ok(Self::Docx)
            } else {
                Err(ParseError::UnsupportedFileType {
                    file_type: "zip".to_string(),
                })
            }
        } else {
            Ok(Self::Txt)
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Txt => "txt",
            Self::Docx => "docx",
            Self::Pdf => "pdf",
        }
    }
}

/// Questions extracted from an upload, ready for review before import.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedDocument {
    pub questions: Vec<QuestionRecord>,
    pub file_type: FileType,
    pub filename: String,
}

/// Decode an upload and extract its questions.
pub fn parse_document(
    bytes: &[u8],
    filename: &str,
    defaults: &ExtractDefaults,
) -> Result<ParsedDocument> {
    let file_type = FileType::sniff(bytes)?;

    let text = match file_type {
        FileType::Txt => String::from_utf8_lossy(bytes).into_owned(),
        FileType::Docx => docx_text(bytes)?,
        FileType::Pdf => pdf_text(bytes)?,
    };

    Ok(ParsedDocument {
        questions: extract(&text, defaults),
        file_type,
        filename: filename.to_string(),
    })
}

/// Body paragraphs joined with newlines. Tables and images are skipped.
fn docx_text(bytes: &[u8]) -> Result<String> {
    let docx = docx_rs::read_docx(bytes).map_err(|e| unreadable(FileType::Docx, e))?;

    let paragraphs: Vec<String> = docx
        .document
        .children
        .iter()
        .filter_map(|child| match child {
            DocumentChild::Paragraph(para) => Some(paragraph_text(para)),
            _ => None,
        })
        .collect();

    Ok(paragraphs.join("\n"))
}

fn paragraph_text(para: &Paragraph) -> String {
    let mut text = String::new();
    for child in &para.children {
        if let ParagraphChild::Run(run) = child {
            for run_child in &run.children {
                if let RunChild::Text(t) = run_child {
                    text.push_str(&t.text);
                }
            }
        }
    }
    text
}

fn pdf_text(bytes: &[u8]) -> Result<String> {
    // pdf-extract panics on some malformed files.
    match panic::catch_unwind(|| pdf_extract::extract_text_from_mem(bytes)) {
        Ok(Ok(text)) => Ok(text),
        Ok(Err(e)) => Err(unreadable(FileType::Pdf, e)),
        Err(_) => Err(unreadable(FileType::Pdf, "malformed pdf")),
    }
}

fn unreadable(file_type: FileType, reason: impl ToString) -> ParseError {
    ParseError::UnreadableDocument {
        file_type: file_type.as_str().to_string(),
        reason: reason.to_string(),
    }
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|window| window == needle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Difficulty, Subject};
    use pretty_assertions::assert_eq;
    use std::io::Cursor;

    fn defaults() -> ExtractDefaults {
        ExtractDefaults::resolve(
            Some(Difficulty::Regional),
            Some(Subject::Science),
            Some("2022".to_string()),
        )
    }

    fn docx_bytes(paragraphs: &[&str]) -> Vec<u8> {
        let mut docx = docx_rs::Docx::new();
        for text in paragraphs {
            docx = docx.add_paragraph(
                docx_rs::Paragraph::new().add_run(docx_rs::Run::new().add_text(*text)),
            );
        }
        let mut buf = Cursor::new(Vec::new());
        docx.build().pack(&mut buf).unwrap();
        buf.into_inner()
    }

    fn pdf_bytes(lines: &[&str]) -> Vec<u8> {
        use lopdf::content::{Content, Operation};
        use lopdf::{dictionary, Document, Object, Stream};

        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Courier",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });

        let mut operations = Vec::new();
        for (i, line) in lines.iter().enumerate() {
            let y = 700 - 40 * i as i64;
            operations.push(Operation::new("BT", vec![]));
            operations.push(Operation::new("Tf", vec!["F1".into(), 14.into()]));
            operations.push(Operation::new("Td", vec![72.into(), y.into()]));
            operations.push(Operation::new("Tj", vec![Object::string_literal(*line)]));
            operations.push(Operation::new("ET", vec![]));
        }
        let content = Content { operations };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));

        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        let pages = dictionary! {
            "Type" => "Pages",
            "Kids" => vec![page_id.into()],
            "Count" => 1,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
        };
        doc.objects.insert(pages_id, Object::Dictionary(pages));
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut buf = Vec::new();
        doc.save_to(&mut buf).unwrap();
        buf
    }

    #[test]
    fn sniff_file_types() {
        assert_eq!(FileType::sniff(b"%PDF-1.7\n...").unwrap(), FileType::Pdf);
        assert_eq!(
            FileType::sniff(b"PK\x03\x04....word/document.xml").unwrap(),
            FileType::Docx
        );
        assert_eq!(FileType::sniff(b"1. Question").unwrap(), FileType::Txt);
        assert_eq!(FileType::sniff(b"").unwrap(), FileType::Txt);
    }

    #[test]
    fn sniff_rejects_other_zip_archives() {
        let result = FileType::sniff(b"PK\x03\x04....xl/workbook.xml");
        assert!(matches!(
            result,
            Err(ParseError::UnsupportedFileType { ref file_type }) if file_type == "zip"
        ));
    }

    #[test]
    fn parse_plain_text_upload() {
        let doc = parse_document(b"Q: What is H2O?\nA: Water", "chem.txt", &defaults()).unwrap();
        assert_eq!(doc.file_type, FileType::Txt);
        assert_eq!(doc.filename, "chem.txt");
        assert_eq!(doc.questions.len(), 1);
        assert_eq!(doc.questions[0].answer, "Water");
        assert_eq!(doc.questions[0].subject, Subject::Science);
        assert_eq!(doc.questions[0].difficulty, Difficulty::Regional);
    }

    #[test]
    fn invalid_utf8_is_decoded_lossily() {
        let doc = parse_document(b"Q: caf\xe9?\nA: yes", "bad.txt", &defaults()).unwrap();
        assert_eq!(doc.questions[0].text, "caf\u{fffd}?");
    }

    #[test]
    fn byte_order_mark_is_ignored() {
        let bytes = b"\xef\xbb\xbf1. What is 2+2?\nAnswer: 4\n2. Sky color?\nAnswer: Blue";
        let doc = parse_document(bytes, "notepad.txt", &defaults()).unwrap();
        let texts: Vec<&str> = doc.questions.iter().map(|q| q.text.as_str()).collect();
        assert_eq!(texts, vec!["What is 2+2?", "Sky color?"]);
        assert_eq!(doc.questions[0].answer, "4");
    }

    #[test]
    fn parse_docx_upload() {
        let bytes = docx_bytes(&[
            "1. What is 2+2?",
            "Answer: 4",
            "2. Who wrote Hamlet?",
            "Subject: language",
            "Answer: Shakespeare",
        ]);
        let doc = parse_document(&bytes, "set.docx", &defaults()).unwrap();

        assert_eq!(doc.file_type, FileType::Docx);
        assert_eq!(doc.questions.len(), 2);
        assert_eq!(doc.questions[0].text, "What is 2+2?");
        assert_eq!(doc.questions[0].answer, "4");
        assert_eq!(doc.questions[1].subject, Subject::Language);
        assert_eq!(doc.questions[1].answer, "Shakespeare");
    }

    #[test]
    fn parse_pdf_upload() {
        let bytes = pdf_bytes(&["Q: What is 2+2?", "A: 4"]);
        let doc = parse_document(&bytes, "set.pdf", &defaults()).unwrap();

        assert_eq!(doc.file_type, FileType::Pdf);
        assert_eq!(doc.questions.len(), 1);
        assert!(doc.questions[0].text.contains("What is 2+2?"));
    }

    #[test]
    fn reject_unreadable_documents() {
        let result = parse_document(b"%PDF-1.4 truncated", "set.pdf", &defaults());
        assert!(matches!(
            result,
            Err(ParseError::UnreadableDocument { ref file_type, .. }) if file_type == "pdf"
        ));

        let result = parse_document(b"PK\x03\x04 word/document.xml", "set.docx", &defaults());
        assert!(matches!(
            result,
            Err(ParseError::UnreadableDocument { ref file_type, .. }) if file_type == "docx"
        ));
    }

    #[test]
    fn parsed_document_uses_camel_case() {
        let doc = parse_document(b"", "empty.txt", &defaults()).unwrap();
        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(json["fileType"], "txt");
        assert!(json["questions"].as_array().unwrap().is_empty());
    }
}
