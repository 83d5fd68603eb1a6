use chronicles_core::journal::{Journal, JournalError, JournalOptions};
use chronicles_core::markdown::{MarkdownRenderer, RenderOptions};
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

#[test]
fn find_renders_the_matching_entry() {
    let tmp = tempdir().unwrap();
    write(tmp.path(), "2020/01/2020-01-02.md", "# Title\n\nHello **world**");
    write(tmp.path(), "2020/01/2020-01-03.md", "# Other");

    let doc = Journal::new(tmp.path()).find_by_date("2020-01-02").unwrap().unwrap();

    assert_eq!(doc.date_key.as_str(), "2020-01-02");
    assert_eq!(doc.raw, "# Title\n\nHello **world**");
    assert!(doc.html.contains("<h1>Title</h1>"));
    assert!(doc.html.contains("<strong>world</strong>"));
}

#[test]
fn query_without_date_is_not_found_and_reads_nothing() {
    let tmp = tempdir().unwrap();
    write(tmp.path(), "2020-01-02.md", "x");

    let journal = Journal::new(tmp.path());
    for query in ["", "today", "2020/01/02", "20200102"] {
        assert!(journal.find_by_date(query).unwrap().is_none(), "{query}");
    }
    assert!(!journal.is_populated());
}

#[test]
fn absent_date_is_not_found() {
    let tmp = tempdir().unwrap();
    write(tmp.path(), "2020-01-02.md", "x");

    let journal = Journal::new(tmp.path());
    assert!(journal.find_by_date("2099-01-01").unwrap().is_none());
    assert!(journal.is_populated());
}

#[test]
fn attachments_are_not_reachable_by_date() {
    let tmp = tempdir().unwrap();
    write(tmp.path(), "attachments/2099-09-09.md", "hidden");

    let journal = Journal::new(tmp.path());
    assert!(journal.find_by_date("2099-09-09").unwrap().is_none());
}

#[test]
fn first_date_in_query_is_used() {
    let tmp = tempdir().unwrap();
    write(tmp.path(), "2020-01-02.md", "first");
    write(tmp.path(), "2020-01-03.md", "second");

    let doc = Journal::new(tmp.path())
        .find_by_date("from 2020-01-02 to 2020-01-03")
        .unwrap()
        .unwrap();
    assert_eq!(doc.raw, "first");
}

#[test]
fn duplicate_dates_resolve_to_last_walked() {
    let tmp = tempdir().unwrap();
    write(tmp.path(), "a/2020-01-02.md", "from a");
    write(tmp.path(), "b/2020-01-02.md", "from b");

    let journal = Journal::new(tmp.path());
    let doc = journal.find_by_date("2020-01-02").unwrap().unwrap();

    assert_eq!(doc.raw, "from b");
    assert_eq!(journal.search().unwrap().count, 2);
}

#[test]
fn every_lookup_rereads_the_file() {
    let tmp = tempdir().unwrap();
    write(tmp.path(), "2020-01-02.md", "before");

    let journal = Journal::new(tmp.path());
    assert_eq!(journal.find_by_date("2020-01-02").unwrap().unwrap().raw, "before");

    write(tmp.path(), "2020-01-02.md", "after");
    assert_eq!(journal.find_by_date("2020-01-02").unwrap().unwrap().raw, "after");
}

#[test]
fn deleted_entry_is_a_read_error_and_index_survives() {
    let tmp = tempdir().unwrap();
    write(tmp.path(), "2020-01-02.md", "x");
    write(tmp.path(), "2020-01-03.md", "y");

    let journal = Journal::new(tmp.path());
    journal.search().unwrap();
    fs::remove_file(tmp.path().join("2020-01-02.md")).unwrap();

    let err = journal.find_by_date("2020-01-02").unwrap_err();
    assert!(matches!(err, JournalError::Read { .. }));
    assert!(!err.public_message().contains(&tmp.path().display().to_string()));

    assert_eq!(journal.search().unwrap().count, 2);
    assert!(journal.find_by_date("2020-01-03").unwrap().is_some());
}

#[test]
fn renderer_options_flow_through() {
    let tmp = tempdir().unwrap();
    write(tmp.path(), "2020-01-02.md", "<aside>note</aside>\n");

    let default = Journal::new(tmp.path());
    let html = default.find_by_date("2020-01-02").unwrap().unwrap().html;
    assert!(!html.contains("<aside>"));

    let renderer = MarkdownRenderer::with_options(RenderOptions { allow_raw_html: true });
    let permissive = Journal::with_options(tmp.path(), JournalOptions::default(), renderer);
    let html = permissive.find_by_date("2020-01-02").unwrap().unwrap().html;
    assert!(html.contains("<aside>note</aside>"));
}
