//! Tests for the request parser.

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::{Path, PathBuf};
    use std::sync::atomic::{AtomicUsize, Ordering};

    use crate::parser::{
        is_valid_file, is_valid_method, is_valid_version, parse_request_in, Error, HttpVersion,
        Method, DEFAULT_DOCUMENT, PATH_LEN,
    };

    static NEXT_ROOT: AtomicUsize = AtomicUsize::new(0);

    // Fresh document root per test so tests can run in parallel
    fn doc_root() -> PathBuf {
        let id = NEXT_ROOT.fetch_add(1, Ordering::SeqCst);
        let root = std::env::temp_dir().join(format!(
            "microserve-parser-{}-{id}",
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&root);
        fs::create_dir_all(&root).unwrap();
        root
    }

    fn touch(root: &Path, name: &str, contents: &str) {
        fs::write(root.join(name), contents).unwrap();
    }

    #[test]
    fn test_parse_simple_get_request() {
        let root = doc_root();
        touch(&root, "hello.txt", "hello");

        let request = b"GET /hello.txt HTTP/1.1\r\nHost: example.com\r\n\r\n";
        let result = parse_request_in(request, &root).unwrap();
        assert_eq!(result.method, Method::GET);
        assert_eq!(result.version, HttpVersion::Http11);
        assert_eq!(result.path.as_str(), "hello.txt");
        assert_eq!(result.resolve(&root), root.join("hello.txt"));
    }

    #[test]
    fn test_empty_path_defaults_to_index() {
        let root = doc_root();
        touch(&root, DEFAULT_DOCUMENT, "<h1>home</h1>");

        let result = parse_request_in(b"GET / HTTP/1.1\r\n\r\n", &root).unwrap();
        assert_eq!(result.path.as_str(), "index.html");
    }

    #[test]
    fn test_empty_path_without_index_is_invalid_file() {
        let root = doc_root();
        let result = parse_request_in(b"GET / HTTP/1.1\r\n\r\n", &root);
        assert_eq!(result, Err(Error::InvalidFile("index.html".to_string())));
    }

    #[test]
    fn test_invalid_method() {
        let root = doc_root();
        touch(&root, "a.txt", "a");

        let result = parse_request_in(b"POST /a.txt HTTP/1.1\r\n\r\n", &root);
        assert!(matches!(result, Err(Error::InvalidMethod(ref m)) if m == "POST"));
    }

    #[test]
    fn test_method_is_case_sensitive() {
        let root = doc_root();
        touch(&root, "a.txt", "a");

        let result = parse_request_in(b"get /a.txt HTTP/1.1\r\n\r\n", &root);
        assert!(matches!(result, Err(Error::InvalidMethod(ref m)) if m == "get"));
    }

    #[test]
    fn test_long_method_is_truncated_before_validation() {
        let root = doc_root();
        let result = parse_request_in(b"GETTINGTHERE /a.txt HTTP/1.1\r\n\r\n", &root);
        assert!(matches!(result, Err(Error::InvalidMethod(ref m)) if m == "GETTING"));
    }

    #[test]
    fn test_method_checked_before_version() {
        let root = doc_root();
        let result = parse_request_in(b"DELETE /a.txt HTTP/9.9\r\n\r\n", &root);
        assert!(matches!(result, Err(Error::InvalidMethod(_))));
    }

    #[test]
    fn test_invalid_version() {
        let root = doc_root();
        touch(&root, "a.txt", "a");

        let result = parse_request_in(b"GET /a.txt HTTP/1.0\r\n\r\n", &root);
        assert!(matches!(result, Err(Error::InvalidVersion(ref v)) if v == "1.0"));
    }

    #[test]
    fn test_version_checked_before_file() {
        let root = doc_root();
        let result = parse_request_in(b"GET /missing.txt HTTP/2\r\n\r\n", &root);
        assert!(matches!(result, Err(Error::InvalidVersion(ref v)) if v == "2"));
    }

    #[test]
    fn test_missing_file() {
        let root = doc_root();
        let result = parse_request_in(b"GET /missing.txt HTTP/1.1\r\n\r\n", &root);
        assert!(matches!(result, Err(Error::InvalidFile(ref f)) if f == "missing.txt"));
    }

    #[test]
    fn test_nested_path() {
        let root = doc_root();
        fs::create_dir_all(root.join("docs")).unwrap();
        touch(&root, "docs/guide.txt", "guide");

        let result = parse_request_in(b"GET /docs/guide.txt HTTP/1.1\r\n\r\n", &root).unwrap();
        assert_eq!(result.path.as_str(), "docs/guide.txt");
    }

    #[test]
    fn test_long_path_is_truncated() {
        let root = doc_root();
        let long = "a".repeat(300);
        let raw = format!("GET /{long} HTTP/1.1\r\n\r\n");

        match parse_request_in(raw.as_bytes(), &root) {
            Err(Error::InvalidFile(path)) => assert_eq!(path.len(), PATH_LEN),
            other => panic!("expected InvalidFile, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_version_marker() {
        let root = doc_root();
        let result = parse_request_in(b"GET /a.txt\r\n\r\n", &root);
        assert!(matches!(result, Err(Error::MalformedRequest(_))));
    }

    #[test]
    fn test_missing_slash_before_version() {
        let root = doc_root();
        touch(&root, "a.txt", "a");

        let result = parse_request_in(b"GET a.txt HTTP/1.1\r\n\r\n", &root);
        assert!(matches!(result, Err(Error::MalformedRequest(_))));
    }

    #[test]
    fn test_missing_carriage_return() {
        let root = doc_root();
        let result = parse_request_in(b"GET /a.txt HTTP/1.1", &root);
        assert!(matches!(result, Err(Error::MalformedRequest(_))));
    }

    #[test]
    fn test_missing_space_after_method() {
        let root = doc_root();
        let result = parse_request_in(b"GET", &root);
        assert!(matches!(result, Err(Error::MalformedRequest(_))));
    }

    #[test]
    fn test_empty_request() {
        let root = doc_root();
        let result = parse_request_in(b"", &root);
        assert!(matches!(result, Err(Error::MalformedRequest(_))));
    }

    #[test]
    fn test_non_utf8_path() {
        let root = doc_root();
        let result = parse_request_in(b"GET /\xff\xfe HTTP/1.1\r\n\r\n", &root);
        assert!(matches!(result, Err(Error::MalformedRequest(_))));
    }

    #[test]
    fn test_request_display() {
        let root = doc_root();
        touch(&root, "a.txt", "a");

        let result = parse_request_in(b"GET /a.txt HTTP/1.1\r\n\r\n", &root).unwrap();
        assert_eq!(result.to_string(), "GET /a.txt HTTP/1.1");
    }

    #[test]
    fn test_validators() {
        assert!(is_valid_method("GET"));
        assert!(!is_valid_method("GET "));
        assert!(!is_valid_method("HEAD"));

        assert!(is_valid_version("1.1"));
        assert!(!is_valid_version("HTTP/1.1"));
        assert!(!is_valid_version("1.0"));

        let root = doc_root();
        touch(&root, "a.txt", "a");
        assert!(is_valid_file(&root.join("a.txt")));
        assert!(is_valid_file(&root));
        assert!(!is_valid_file(&root.join("b.txt")));
    }
}
