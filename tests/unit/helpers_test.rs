//! Tests for helper functions

use frame_budget::helpers::{
    class_names, delete_query_keys, is_desktop, log_query, parse_query, prefix_pattern,
    TextDownload,
};

#[test]
fn test_class_names_joins_non_empty() {
    assert_eq!(class_names(["a", "", "b"]), "a b");
    assert_eq!(frame_budget::class_names!("a", None, Some("c")), "a c");
}

#[test]
fn test_prefix_pattern_escapes() {
    assert_eq!(prefix_pattern("v1.0 (beta)"), r"^v1\.0 \(beta\)");
}

#[test]
fn test_is_desktop() {
    assert!(is_desktop("Mozilla/5.0 (Windows NT 10.0; Win64; x64) Chrome/120.0"));
    assert!(!is_desktop("Mozilla/5.0 (Windows Phone 10.0; Android 6.0.1) Edge/15"));
}

#[test]
fn test_query_helpers() {
    let query = "?user=ada&tab=settings&debug=1";
    let params = parse_query(query);
    assert_eq!(params.len(), 3);
    assert_eq!(params["user"], "ada");

    let trimmed = delete_query_keys(query, &["debug"]);
    assert!(!trimmed.contains_key("debug"));
    assert_eq!(trimmed["tab"], "settings");

    assert_eq!(log_query(query), 3);
}

#[test]
fn test_text_download_save() {
    let dir = tempfile::tempdir().unwrap();
    let download = TextDownload::new("report.txt", "ok");
    assert!(download.href().ends_with(",ok"));
    let path = download.save_to(dir.path()).unwrap();
    assert_eq!(std::fs::read_to_string(path).unwrap(), "ok");
}
