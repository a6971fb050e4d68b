//! File-backed input records, exercising the same read path the CLI uses.

use std::fs;

use typeahead::{complete, parse, render_plain, DEFAULT_LIMIT};

use super::common::KANA_RECORD;

#[test]
fn a_record_written_to_disk_completes_identically() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("session.in");
    fs::write(&path, KANA_RECORD).expect("Failed to write record");

    let raw = fs::read_to_string(&path).expect("Failed to read record");
    let from_file = parse(&raw).unwrap();
    let from_memory = parse(KANA_RECORD).unwrap();
    assert_eq!(from_file, from_memory);

    let results = complete(&from_file.vocabulary, &from_file.prefixes, DEFAULT_LIMIT);
    assert_eq!(
        render_plain(&results),
        "kanojo\nkare\nkorosu\nkaretachi\n\nkanojo\nkare\nkaretachi\n\nkare\nkaretachi\n\n"
    );
}

#[test]
fn windows_line_endings_parse_the_same() {
    let crlf = KANA_RECORD.replace('\n', "\r\n");
    assert_eq!(parse(&crlf).unwrap(), parse(KANA_RECORD).unwrap());
}
