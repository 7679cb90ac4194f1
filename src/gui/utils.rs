use std::path::Path;

/// Whether `path` carries a `.pdf` extension, in any letter case
pub fn is_pdf(path: &Path) -> bool {
    path.extension()
        .map_or(false, |ext| ext.eq_ignore_ascii_case("pdf"))
}

/// Window title for the given document and zero-based page
pub fn window_title(document: &str, page: usize, page_count: usize) -> String {
    if document.is_empty() {
        format!("PDF Viewer ({}/{})", page + 1, page_count)
    } else {
        format!("PDF Viewer - {} ({}/{})", document, page + 1, page_count)
    }
}

/// Status line text for the given zero-based page
pub fn page_label(page: usize, page_count: usize) -> String {
    format!("Page {} of {}", page + 1, page_count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pdf_extension_is_case_insensitive() {
        assert!(is_pdf(Path::new("/tmp/Report.PDF")));
        assert!(is_pdf(Path::new("notes.pdf")));
        assert!(!is_pdf(Path::new("notes.txt")));
        assert!(!is_pdf(Path::new("pdf")));
    }

    #[test]
    fn labels_are_one_based() {
        assert_eq!(window_title("book.pdf", 0, 12), "PDF Viewer - book.pdf (1/12)");
        assert_eq!(window_title("", 2, 3), "PDF Viewer (3/3)");
        assert_eq!(page_label(11, 12), "Page 12 of 12");
    }
}
