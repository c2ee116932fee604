use tip::core::reducer::replay;
use tip::models::record::Record;
use tip::models::status::TimerStatus;
use tip::utils::time::parse_timestamp;

fn ts(s: &str) -> chrono::NaiveDateTime {
    parse_timestamp(s).expect("valid timestamp")
}

fn parse_lines(lines: &[&str]) -> Vec<Record> {
    lines
        .iter()
        .map(|l| Record::parse(l).expect("valid record line"))
        .collect()
}

#[test]
fn test_matched_pair_with_note() {
    let records = parse_lines(&[
        "START 2024-01-01 09:00",
        "NOTE did X",
        "STOP 2024-01-01 10:30",
    ]);
    let session = replay(&records, ts("2024-01-01 18:00"));

    assert_eq!(session.status, TimerStatus::Off);
    assert_eq!(session.elapsed_minutes, 90);
    assert_eq!(session.notes, vec!["did X".to_string()]);
    assert_eq!(
        session.first_start_date,
        tip::utils::date::parse_date("2024-01-01")
    );
}

#[test]
fn test_open_start_counts_up_to_now() {
    let records = parse_lines(&["START 2024-01-01 09:00"]);
    let session = replay(&records, ts("2024-01-01 09:15"));

    assert_eq!(session.status, TimerStatus::On);
    assert_eq!(session.elapsed_minutes, 15);
}

#[test]
fn test_stop_without_start_is_a_no_op() {
    let records = parse_lines(&["STOP 2024-01-01 10:00", "START 2024-01-01 11:00"]);
    let session = replay(&records, ts("2024-01-01 11:05"));

    assert_eq!(session.status, TimerStatus::On);
    assert_eq!(session.elapsed_minutes, 5);
}

#[test]
fn test_archive_resets_accumulation_scope() {
    let records = parse_lines(&[
        "START 2024-01-01 09:00",
        "NOTE old work",
        "STOP 2024-01-01 17:00",
        "ARCHIVE 2024-01-01 08:00 old work",
        "START 2024-01-02 09:00",
        "NOTE new work",
        "STOP 2024-01-02 09:30",
    ]);
    let session = replay(&records, ts("2024-01-02 18:00"));

    assert_eq!(session.status, TimerStatus::Off);
    assert_eq!(session.elapsed_minutes, 30);
    assert_eq!(session.notes, vec!["new work".to_string()]);
    assert_eq!(
        session.first_start_date,
        tip::utils::date::parse_date("2024-01-02")
    );
}

#[test]
fn test_replay_is_idempotent() {
    let records = parse_lines(&[
        "START 2024-01-01 09:00",
        "STOP 2024-01-01 10:00",
        "NOTE x",
        "START 2024-01-01 11:00",
    ]);
    let now = ts("2024-01-01 11:30");

    assert_eq!(replay(&records, now), replay(&records, now));
}

#[test]
fn test_matching_stop_never_decreases_elapsed() {
    let now = ts("2024-01-01 09:10");

    let open = parse_lines(&["START 2024-01-01 09:00"]);
    let before = replay(&open, now).elapsed_minutes;

    let closed = parse_lines(&["START 2024-01-01 09:00", "STOP 2024-01-01 09:30"]);
    let after = replay(&closed, now).elapsed_minutes;

    assert!(after >= before);
}

#[test]
fn test_multiple_pairs_accumulate() {
    let records = parse_lines(&[
        "START 2024-01-01 09:00",
        "STOP 2024-01-01 12:30",
        "START 2024-01-01 13:15",
        "STOP 2024-01-01 17:45",
    ]);
    let session = replay(&records, ts("2024-01-01 18:00"));

    assert_eq!(session.status, TimerStatus::Off);
    assert_eq!(session.elapsed_minutes, 210 + 270);
}

#[test]
fn test_empty_log_is_an_idle_session() {
    let session = replay(&[], ts("2024-01-01 09:00"));

    assert_eq!(session.status, TimerStatus::Off);
    assert_eq!(session.elapsed_minutes, 0);
    assert!(session.notes.is_empty());
    assert_eq!(session.first_start_date, None);
}
