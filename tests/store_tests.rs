use tip::models::record::Record;
use tip::store::LogStore;
use tip::utils::time::parse_timestamp;

mod common;
use common::{read_log, setup_record_file, write_log};

fn ts(s: &str) -> chrono::NaiveDateTime {
    parse_timestamp(s).expect("valid timestamp")
}

#[test]
fn test_append_then_read_all_round_trips() {
    let (_dir, path) = setup_record_file("append_read");
    let store = LogStore::new(&path);

    let start = Record::Start(ts("2024-01-15 09:00"));
    let note = Record::Note("fixed the build".to_string());

    store.append(&start).expect("append start");
    store.append(&note).expect("append note");

    let records = store.read_all().expect("read all");
    assert_eq!(records, vec![start, note.clone()]);
    assert_eq!(records.last(), Some(&note));
}

#[test]
fn test_missing_file_is_an_empty_log() {
    let (_dir, path) = setup_record_file("missing_store");
    let store = LogStore::new(&path);

    let records = store.read_all().expect("read all");
    assert!(records.is_empty());
}

#[test]
fn test_rewrite_replaces_contents_exactly() {
    let (_dir, path) = setup_record_file("rewrite");
    let store = LogStore::new(&path);

    store
        .append(&Record::Start(ts("2024-01-15 09:00")))
        .expect("append");
    store
        .append(&Record::Note("scratch".to_string()))
        .expect("append");

    let keep = Record::Archive {
        date: tip::utils::date::parse_date("2024-01-14").expect("valid date"),
        summary: "07:45 wrote design doc".to_string(),
    };
    store.rewrite(std::slice::from_ref(&keep)).expect("rewrite");

    // Exactly one line, newline-terminated, no stray blank line
    assert_eq!(
        read_log(&path),
        "ARCHIVE 2024-01-14 07:45 wrote design doc\n"
    );
    assert_eq!(store.read_all().expect("read all"), vec![keep]);
}

#[test]
fn test_blank_lines_are_skipped_on_read() {
    let (_dir, path) = setup_record_file("blank_lines");
    write_log(
        &path,
        &["START 2024-01-15 09:00", "", "STOP 2024-01-15 10:00", ""],
    );
    let store = LogStore::new(&path);

    let records = store.read_all().expect("read all");
    assert_eq!(records.len(), 2);
}

#[test]
fn test_unreadable_line_fails_read() {
    let (_dir, path) = setup_record_file("garbage");
    write_log(&path, &["START 2024-01-15 09:00", "GARBAGE here"]);
    let store = LogStore::new(&path);

    assert!(store.read_all().is_err());
}

#[test]
fn test_record_encoding_round_trips() {
    let records = [
        Record::Start(ts("2024-01-15 09:00")),
        Record::Stop(ts("2024-01-15 12:30")),
        Record::Note("reviewed PR".to_string()),
        Record::Archive {
            date: tip::utils::date::parse_date("2024-01-14").expect("valid date"),
            summary: "07:45 wrote design doc, reviewed PR".to_string(),
        },
        Record::Archive {
            date: tip::utils::date::parse_date("2024-01-13").expect("valid date"),
            summary: String::new(),
        },
    ];

    for record in &records {
        let decoded = Record::parse(&record.encode()).expect("parse encoded record");
        assert_eq!(&decoded, record);
    }
}
