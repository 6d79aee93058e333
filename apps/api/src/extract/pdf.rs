use super::ExtractError;

/// Pulls text page by page and concatenates it in page order.
pub(super) fn extract(bytes: &[u8]) -> Result<String, ExtractError> {
    let pages = pdf_extract::extract_text_from_mem_by_pages(bytes)
        .map_err(|e| ExtractError::Pdf(e.to_string()))?;
    Ok(join_pages(pages))
}

/// Pages with no extractable text contribute an empty string. pdf-extract
/// already ends each page's text with line breaks, so nothing is added
/// between pages; only the outer whitespace is trimmed.
fn join_pages<I>(pages: I) -> String
where
    I: IntoIterator,
    I::Item: Into<Option<String>>,
{
    pages
        .into_iter()
        .map(|page| page.into().unwrap_or_default())
        .collect::<String>()
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Minimal PDF with one page per entry, each showing its text in
    /// Helvetica. An empty entry gives a page with an empty content stream.
    fn pdf_with_pages(pages: &[&str]) -> Vec<u8> {
        let first_page = 4;
        let kids: Vec<String> = (0..pages.len())
            .map(|i| format!("{} 0 R", first_page + 2 * i))
            .collect();

        let mut objects = vec![
            "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
            format!("<< /Type /Pages /Kids [{}] /Count {} >>", kids.join(" "), pages.len()),
            "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica >>".to_string(),
        ];
        for (i, text) in pages.iter().enumerate() {
            let content = if text.is_empty() {
                String::new()
            } else {
                format!("BT /F1 12 Tf 72 720 Td ({text}) Tj ET")
            };
            objects.push(format!(
                "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] \
                 /Resources << /Font << /F1 3 0 R >> >> /Contents {} 0 R >>",
                first_page + 2 * i + 1
            ));
            objects.push(format!(
                "<< /Length {} >>\nstream\n{content}\nendstream",
                content.len()
            ));
        }

        let mut out = b"%PDF-1.4\n".to_vec();
        let mut offsets = Vec::with_capacity(objects.len());
        for (i, body) in objects.iter().enumerate() {
            offsets.push(out.len());
            out.extend_from_slice(format!("{} 0 obj\n{body}\nendobj\n", i + 1).as_bytes());
        }
        let xref = out.len();
        let mut table = format!("xref\n0 {}\n0000000000 65535 f \n", objects.len() + 1);
        for offset in offsets {
            table.push_str(&format!("{offset:010} 00000 n \n"));
        }
        table.push_str(&format!(
            "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{xref}\n%%EOF\n",
            objects.len() + 1
        ));
        out.extend_from_slice(table.as_bytes());
        out
    }

    #[test]
    fn test_extract_multi_page_pdf_in_order() {
        let text = extract(&pdf_with_pages(&["Alpha", "", "Gamma"])).unwrap();
        assert!(text.starts_with("Alpha"), "{text:?}");
        assert!(text.ends_with("Gamma"), "{text:?}");
        // the empty page adds no text, only the page breaks around it
        let between = &text["Alpha".len()..text.len() - "Gamma".len()];
        assert!(!between.is_empty(), "{text:?}");
        assert!(between.chars().all(char::is_whitespace), "{text:?}");
    }

    #[test]
    fn test_join_pages_keeps_order() {
        let pages = vec!["Page one. ".to_string(), "Page two.".to_string()];
        assert_eq!(join_pages(pages), "Page one. Page two.");
    }

    #[test]
    fn test_join_pages_unextractable_page_is_empty() {
        let pages = vec![Some("A".to_string()), None, Some("C".to_string())];
        assert_eq!(join_pages(pages), "AC");
    }

    #[test]
    fn test_join_pages_counts_every_page() {
        let pages: Vec<String> = (1..=4).map(|n| format!("[{n}]")).collect();
        assert_eq!(join_pages(pages), "[1][2][3][4]");
    }

    #[test]
    fn test_join_pages_trims_outer_whitespace() {
        let pages = vec!["\n\n  Summary".to_string(), String::new(), "Skills \n".to_string()];
        assert_eq!(join_pages(pages), "SummarySkills");
    }
}
