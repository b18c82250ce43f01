//! NotesLog public API property tests
//!
//! These exercise only the exposed methods so the on-disk entry layout can be
//! relied on by anything that reads the notes file directly.

use kiroku::NotesLog;
use proptest::prelude::*;
use proptest::test_runner::Config as ProptestConfig;
use tempfile::TempDir;

/// 保存対象となるトリム済み非空テキストの戦略
///
/// 改行を含む複数行テキストも生成する。区切り線と紛らわしい行は
/// レイアウト検証を単純に保つため除外する。
fn note_text() -> impl Strategy<Value = String> {
    proptest::collection::vec("[a-zA-Z0-9 ぁ-ん]{1,24}", 1..4)
        .prop_map(|lines| lines.join("\n"))
        .prop_map(|text| text.trim().to_string())
        .prop_filter("non-empty after trim", |text| !text.trim().is_empty())
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]

    #[test]
    fn append_adds_exactly_one_entry_with_given_body(texts in proptest::collection::vec(note_text(), 1..6)) {
        let dir = TempDir::new().unwrap();
        let notes = NotesLog::new(dir.path().join("notes.txt"));
        notes.ensure_initialized().unwrap();

        let mut previous = notes.read_all().unwrap();

        for text in &texts {
            notes.append_entry(text).unwrap();
            let current = notes.read_all().unwrap();

            // 追記専用：既存内容は先頭にそのまま残る
            prop_assert!(current.starts_with(&previous));

            // 追加分はタイムスタンプ行・本文・区切り線・空行のちょうど1エントリ
            let appended = &current[previous.len()..];
            let lines: Vec<&str> = appended.lines().collect();
            prop_assert!(lines[0].starts_with('[') && lines[0].ends_with(']'));
            let body_lines = text.lines().count();
            prop_assert_eq!(lines[1..1 + body_lines].join("\n"), text.clone());
            let separator = "-".repeat(50);
            prop_assert_eq!(lines[1 + body_lines], separator.as_str());
            prop_assert!(appended.ends_with("\n\n"));

            previous = current;
        }

        // エントリ数はタイムスタンプ行の数と一致する
        let final_content = notes.read_all().unwrap();
        let timestamp_lines = final_content
            .lines()
            .filter(|line| line.starts_with('[') && line.ends_with(']'))
            .count();
        prop_assert_eq!(timestamp_lines, texts.len());
    }

    #[test]
    fn export_round_trips_any_log(texts in proptest::collection::vec(note_text(), 0..4)) {
        let dir = TempDir::new().unwrap();
        let notes = NotesLog::new(dir.path().join("notes.txt"));
        notes.ensure_initialized().unwrap();

        for text in &texts {
            notes.append_entry(text).unwrap();
        }

        let dest = dir.path().join("export.txt");
        notes.export_to(&dest).unwrap();

        let original = std::fs::read(dir.path().join("notes.txt")).unwrap();
        let exported = std::fs::read(&dest).unwrap();
        prop_assert_eq!(original, exported);
    }
}
