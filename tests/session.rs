// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: GPL-3.0-only

use commitpad::config::Config;
use commitpad::domain::Message;
use commitpad::services::session::SessionStore;

#[test]
fn missing_snapshot_loads_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = SessionStore::new(dir.path().join("last_message"));
    assert_eq!(store.load(), Message::default());
}

#[test]
fn save_then_load_restores_both_fields() {
    let dir = tempfile::tempdir().unwrap();
    let store = SessionStore::new(dir.path().join("last_message"));
    let message = Message::new("Draft title", "First line\r\n\r\nSecond paragraph");

    store.save(&message);
    assert_eq!(store.load(), message);
}

#[test]
fn snapshot_layout_is_title_zero_body() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("last_message");
    SessionStore::new(&path).save(&Message::new("T", "B"));

    assert_eq!(std::fs::read(&path).unwrap(), b"T\0B");
}

#[test]
fn snapshot_without_separator_is_all_title() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("last_message");
    std::fs::write(&path, "just a title").unwrap();

    let message = SessionStore::new(&path).load();
    assert_eq!(message.title, "just a title");
    assert_eq!(message.body, "");
}

#[test]
fn only_first_zero_byte_separates() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("last_message");
    std::fs::write(&path, b"a\0b\0c").unwrap();

    let message = SessionStore::new(&path).load();
    assert_eq!(message.title, "a");
    assert_eq!(message.body, "b\0c");
}

#[test]
fn invalid_utf8_is_replaced() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("last_message");
    std::fs::write(&path, b"ti\xfftle\0body").unwrap();

    let message = SessionStore::new(&path).load();
    assert_eq!(message.title, "ti\u{fffd}tle");
    assert_eq!(message.body, "body");
}

#[test]
fn empty_message_overwrites_previous_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let store = SessionStore::new(dir.path().join("last_message"));

    store.save(&Message::new("Old", "old body"));
    store.save(&Message::default());
    assert_eq!(store.load(), Message::default());
}

#[test]
fn save_creates_missing_directories() {
    let dir = tempfile::tempdir().unwrap();
    let store = SessionStore::new(dir.path().join("nested/data/last_message"));

    store.save(&Message::new("Kept", ""));
    assert_eq!(store.load().title, "Kept");
}

#[test]
fn unwritable_location_is_ignored() {
    let file = tempfile::NamedTempFile::new().unwrap();
    // A path below a regular file can be neither created nor read
    let store = SessionStore::new(file.path().join("last_message"));

    store.save(&Message::new("Lost", "body"));
    assert_eq!(store.load(), Message::default());
}

#[test]
fn disabled_store_does_nothing() {
    let store = SessionStore::disabled();
    assert!(store.path().is_none());
    store.save(&Message::new("Ignored", ""));
    assert_eq!(store.load(), Message::default());
}

#[test]
fn config_path_overrides_default_location() {
    let config = Config {
        session_file: Some("/tmp/commitpad-test/last".into()),
        ..Config::default()
    };
    let store = SessionStore::from_config(&config);
    assert_eq!(
        store.path(),
        Some(std::path::Path::new("/tmp/commitpad-test/last"))
    );
}
