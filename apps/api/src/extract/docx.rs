use std::io::{Cursor, Read};

use quick_xml::events::Event;
use quick_xml::Reader;

use super::ExtractError;

const DOCUMENT_PART: &str = "word/document.xml";

/// Joins every paragraph of the main document part with `\n`.
pub(super) fn extract(bytes: &[u8]) -> Result<String, ExtractError> {
    let mut archive =
        zip::ZipArchive::new(Cursor::new(bytes)).map_err(|e| ExtractError::Docx(e.to_string()))?;
    let mut xml = String::new();
    archive
        .by_name(DOCUMENT_PART)
        .map_err(|e| ExtractError::Docx(format!("{DOCUMENT_PART}: {e}")))?
        .read_to_string(&mut xml)
        .map_err(|e| ExtractError::Docx(e.to_string()))?;

    let paragraphs = paragraphs(&xml)?;
    Ok(paragraphs.join("\n").trim().to_string())
}

/// Collects the text of each top-level `w:p`, including paragraphs in table
/// cells. Only `w:t` runs contribute text; `w:tab` and `w:br`/`w:cr` inside a
/// run become tab and newline.
///
/// Paragraphs nested in another paragraph (text boxes, shapes) are skipped,
/// as is the `mc:Fallback` copy Word writes next to every `mc:Choice`.
fn paragraphs(xml: &str) -> Result<Vec<String>, ExtractError> {
    let mut reader = Reader::from_str(xml);
    let mut out = Vec::new();
    let mut current = String::new();
    let mut depth = 0usize;
    let mut fallback = 0usize;
    let mut in_run = false;
    let mut in_text = false;

    loop {
        let event = reader
            .read_event()
            .map_err(|e| ExtractError::Docx(format!("malformed document.xml: {e}")))?;
        match event {
            Event::Start(e) if e.local_name().as_ref() == b"Fallback" => fallback += 1,
            Event::End(e) if e.local_name().as_ref() == b"Fallback" => {
                fallback = fallback.saturating_sub(1)
            }
            Event::Eof => break,
            _ if fallback > 0 => {}
            Event::Start(e) => match e.local_name().as_ref() {
                b"p" => depth += 1,
                b"r" if depth == 1 => in_run = true,
                b"t" if depth == 1 => in_text = true,
                _ => {}
            },
            Event::Empty(e) => match e.local_name().as_ref() {
                b"p" if depth == 0 => out.push(String::new()),
                b"tab" if in_run && depth == 1 => current.push('\t'),
                b"br" | b"cr" if in_run && depth == 1 => current.push('\n'),
                _ => {}
            },
            Event::Text(t) if in_text && depth == 1 => {
                let text = t
                    .unescape()
                    .map_err(|e| ExtractError::Docx(format!("malformed text run: {e}")))?;
                current.push_str(&text);
            }
            Event::End(e) => match e.local_name().as_ref() {
                b"p" => {
                    depth = depth.saturating_sub(1);
                    if depth == 0 {
                        out.push(std::mem::take(&mut current));
                    }
                }
                b"r" if depth == 1 => in_run = false,
                b"t" if depth == 1 => in_text = false,
                _ => {}
            },
            _ => {}
        }
    }

    Ok(out)
}
