use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};

use seoview::core::Report;
use seoview::demo::demo_report;
use seoview::state::{ReportState, state_path};

fn make_temp_home() -> PathBuf {
    static HOME_SEQ: AtomicU64 = AtomicU64::new(0);

    let temp = std::env::temp_dir();
    let seq = HOME_SEQ.fetch_add(1, Ordering::Relaxed);
    let uniq = format!("seoview-state-test-{}-{seq}", std::process::id());
    let home = temp.join(uniq);
    let _ = std::fs::remove_dir_all(&home);
    std::fs::create_dir_all(&home).expect("create home");
    home
}

#[test]
fn fresh_state_has_no_report_and_export_disabled() {
    let state = ReportState::new();
    assert!(state.current().is_none());
    assert!(!state.export_enabled());
}

#[test]
fn set_current_replaces_the_report_wholesale() {
    let mut state = ReportState::new();
    state.set_current(demo_report());
    assert!(state.export_enabled());
    assert_eq!(state.current(), Some(&demo_report()));

    let error_report = Report {
        error: Some("boom".to_string()),
        ..Report::default()
    };
    state.set_current(error_report.clone());
    assert!(!state.export_enabled());
    assert_eq!(state.current(), Some(&error_report));
}

#[test]
fn save_and_load_roundtrip_the_report() {
    let home = make_temp_home();

    let mut state = ReportState::new();
    state.set_current(demo_report());
    let path = state.save(&home).expect("save state");
    assert_eq!(path, state_path(&home));
    assert!(path.exists());

    let loaded = ReportState::load(&home).expect("load state");
    assert_eq!(loaded.current(), Some(&demo_report()));
    assert!(loaded.export_enabled());

    let _ = std::fs::remove_dir_all(&home);
}

#[test]
fn load_without_state_file_is_empty() {
    let home = make_temp_home();

    let loaded = ReportState::load(&home).expect("load state");
    assert!(loaded.current().is_none());
    assert!(!loaded.export_enabled());

    let _ = std::fs::remove_dir_all(&home);
}

#[test]
fn error_report_persists_and_stays_unexportable() {
    let home = make_temp_home();

    let mut state = ReportState::new();
    state.set_current(Report {
        error: Some("Invalid or blocked URL.".to_string()),
        ..Report::default()
    });
    state.save(&home).expect("save state");

    let loaded = ReportState::load(&home).expect("load state");
    assert!(loaded.current().is_some());
    assert!(!loaded.export_enabled());

    let _ = std::fs::remove_dir_all(&home);
}

#[test]
fn saving_an_empty_state_removes_the_file() {
    let home = make_temp_home();

    let mut state = ReportState::new();
    state.set_current(demo_report());
    state.save(&home).expect("save state");
    assert!(state_path(&home).exists());

    let empty = ReportState::new();
    empty.save(&home).expect("save empty state");
    assert!(!state_path(&home).exists());

    let _ = std::fs::remove_dir_all(&home);
}

#[test]
fn corrupt_state_file_is_a_load_error() {
    let home = make_temp_home();

    let path = state_path(&home);
    std::fs::create_dir_all(path.parent().expect("parent")).expect("mkdirs");
    std::fs::write(&path, b"not json").expect("write");

    assert!(ReportState::load(&home).is_err());

    let _ = std::fs::remove_dir_all(&home);
}
