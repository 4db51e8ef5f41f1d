/// Filter for the source-file open dialog, one line per language group.
///
/// FLTK format: "Description\tPattern\nDescription2\tPattern2". FLTK adds
/// its own "All Files (*)" option, so we don't include one.
pub fn source_files_filter() -> String {
    [
        "Python Files\t*.{py,pyw}",
        "Java Files\t*.java",
        "JavaScript Files\t*.{js,jsx,mjs}",
        "C/C++ Files\t*.{c,h,cpp,cc,cxx,hpp,hh}",
        "Web Files\t*.{html,htm,css}",
        "PHP Files\t*.php",
        "Ruby Files\t*.rb",
    ]
    .join("\n")
}

/// Filter for the HTML save dialog.
pub fn html_filter() -> &'static str {
    "*.{html,htm}"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_filter_format() {
        let filter = source_files_filter();
        assert!(filter.contains('\n'));
        assert!(filter.contains('\t'));
        assert!(filter.contains("Python Files"));
        assert!(filter.contains("C/C++ Files"));
        assert!(filter.contains("Ruby Files"));
    }

    #[test]
    fn test_source_filter_covers_every_language() {
        // Every selectable language should be openable through the dialog
        let filter = source_files_filter();
        for ext in ["py", "java", "js", "c", "cpp", "html", "css", "php", "rb"] {
            assert!(filter.contains(ext), "missing extension {}", ext);
        }
    }

    #[test]
    fn test_html_filter() {
        assert_eq!(html_filter(), "*.{html,htm}");
    }
}
