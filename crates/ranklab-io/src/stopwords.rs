//! Stopword list loading

use std::collections::HashSet;
use std::path::Path;

/// Load a stopword list: one word per line, lowercased. When the file is an
/// HTML page, only the text inside the first `<pre>...</pre>` block is used
/// (an unterminated `<pre>` consumes the rest of the file).
///
/// A missing or unreadable file degrades to an empty set with a warning —
/// stopwording is an optimization, not a correctness requirement.
pub fn load_stopwords(path: &Path) -> HashSet<String> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) => {
            tracing::warn!(
                "stopword file {} unavailable ({}); proceeding without stopwords",
                path.display(),
                err
            );
            return HashSet::new();
        }
    };

    let body = match content.find("<pre>") {
        Some(start) => {
            let rest = &content[start + "<pre>".len()..];
            match rest.find("</pre>") {
                Some(end) => &rest[..end],
                None => rest,
            }
        }
        None => content.as_str(),
    };

    body.lines()
        .map(|line| line.trim().to_lowercase())
        .filter(|word| !word.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_file(content: &str) -> (TempDir, std::path::PathBuf) {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("stopwords.html");
        std::fs::write(&path, content).unwrap();
        (temp, path)
    }

    #[test]
    fn test_plain_list() {
        let (_temp, path) = write_file("the\nAnd\n of \n");
        let words = load_stopwords(&path);
        assert_eq!(words.len(), 3);
        assert!(words.contains("the"));
        assert!(words.contains("and"));
        assert!(words.contains("of"));
    }

    #[test]
    fn test_extracts_pre_block_from_html() {
        let (_temp, path) = write_file(
            "<html><h1>List of Stopwords</h1><pre>\nthe\nof\n</pre><p>footer</p></html>",
        );
        let words = load_stopwords(&path);
        assert_eq!(words.len(), 2);
        assert!(words.contains("the"));
        assert!(!words.contains("footer"));
        assert!(!words.contains("<html><h1>list of stopwords</h1>"));
    }

    #[test]
    fn test_unterminated_pre_reads_to_end() {
        let (_temp, path) = write_file("<pre>\nthe\nof\n");
        let words = load_stopwords(&path);
        assert_eq!(words.len(), 2);
    }

    #[test]
    fn test_missing_file_degrades_to_empty_set() {
        let temp = TempDir::new().unwrap();
        let words = load_stopwords(&temp.path().join("absent.html"));
        assert!(words.is_empty());
    }
}
