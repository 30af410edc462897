use std::path::PathBuf;

use inkpad::app::Model;
use inkpad::bridge::EditorBridge;
use inkpad::config::{ConfigFlags, load_config_flags, parse_flag_tokens};
use inkpad::engine::EditCommand;

#[test]
fn test_config_file_parsing_ignores_comments_and_blank_lines() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".inkpadrc");
    let content = r#"
# comment
--no-chrome

--split 60

--preview
"#;
    std::fs::write(&path, content).unwrap();

    let flags = load_config_flags(&path).unwrap();
    assert!(flags.no_chrome);
    assert!(flags.preview);
    assert_eq!(flags.split, Some(60));
}

#[test]
fn test_cli_flags_override_file_flags() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".inkpadrc");
    std::fs::write(&path, "--split 40\n--no-chrome\n").unwrap();

    let file_flags = load_config_flags(&path).unwrap();
    let cli_args = vec![
        "inkpad".to_string(),
        "--split".to_string(),
        "70".to_string(),
        "--no-preview".to_string(),
    ];
    let cli_flags = parse_flag_tokens(&cli_args);

    let effective = file_flags.union(&cli_flags);
    assert!(effective.no_chrome, "file flags should remain enabled");
    assert!(!effective.preview_visible(), "cli flags should be applied");
    assert_eq!(effective.split, Some(70), "cli should override split");
}

#[test]
fn test_parse_flag_tokens_handles_equals_syntax() {
    let args = vec!["inkpad".to_string(), "--split=35".to_string()];
    let flags = parse_flag_tokens(&args);
    assert_eq!(flags.split, Some(35));
}

#[test]
fn test_config_union_merges_booleans() {
    let file = ConfigFlags {
        no_chrome: true,
        ..ConfigFlags::default()
    };
    let cli = ConfigFlags {
        no_preview: true,
        ..ConfigFlags::default()
    };
    let merged = file.union(&cli);
    assert!(merged.no_chrome);
    assert!(merged.no_preview);
    assert!(!merged.preview);
}

#[test]
fn test_picker_lists_parent_dirs_then_markdown_files() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir(dir.path().join("zeta")).unwrap();
    std::fs::create_dir(dir.path().join("Alpha")).unwrap();
    std::fs::write(dir.path().join("b.md"), "b").unwrap();
    std::fs::write(dir.path().join("A.markdown"), "a").unwrap();
    std::fs::write(dir.path().join("notes.txt"), "skip").unwrap();
    std::fs::write(dir.path().join(".hidden.md"), "skip").unwrap();

    let entries = Model::picker_entries_for(dir.path()).unwrap();
    let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["..", "Alpha", "zeta", "A.markdown", "b.md"]);
    assert!(entries[0].is_dir);
    assert!(!entries[4].is_dir);
}

#[test]
fn test_picker_parent_entry_points_one_level_up() {
    let dir = tempfile::tempdir().unwrap();
    let sub = dir.path().join("inner");
    std::fs::create_dir(&sub).unwrap();

    let entries = Model::picker_entries_for(&sub).unwrap();
    let canonical_parent = dir.path().canonicalize().unwrap();
    assert_eq!(entries[0].name, "..");
    assert_eq!(entries[0].path, canonical_parent);
}

#[test]
fn test_picker_on_missing_directory_fails() {
    let missing = PathBuf::from("/definitely/not/a/real/dir");
    assert!(Model::picker_entries_for(&missing).is_err());
}

#[test]
fn test_bridge_remount_discards_previous_edits() {
    let mut bridge = EditorBridge::unmounted();
    assert_eq!(bridge.content(), None);

    bridge.set_content("# one");
    bridge.dispatch(EditCommand::InsertChar('!'));
    let first_generation = bridge.generation();

    bridge.set_content("# two");
    assert!(bridge.generation() > first_generation);
    assert_eq!(bridge.content(), Some("# two".to_string()));
    assert!(!bridge.engine().unwrap().is_dirty());
}

#[test]
fn test_edit_session_round_trips_through_serialize() {
    let mut bridge = EditorBridge::unmounted();
    bridge.set_content("hello");
    bridge.dispatch(EditCommand::End);
    bridge.dispatch(EditCommand::Newline);
    for c in "world".chars() {
        bridge.dispatch(EditCommand::InsertChar(c));
    }
    assert_eq!(bridge.content(), Some("hello\nworld".to_string()));
}
