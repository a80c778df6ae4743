use super::*;
use tempfile::tempdir;

#[test]
fn parse_keybinding_with_modifiers() {
    assert_eq!(
        parse_keybinding("ctrl+q"),
        Some(Key::ctrl(KeyCode::Char('q')))
    );
    assert_eq!(
        parse_keybinding(" Alt + Enter "),
        Some(Key::alt(KeyCode::Enter))
    );
    assert_eq!(parse_keybinding("f5"), Some(Key::simple(KeyCode::F(5))));
    assert_eq!(parse_keybinding("f"), Some(Key::simple(KeyCode::Char('f'))));
    assert_eq!(parse_keybinding("space"), Some(Key::simple(KeyCode::Char(' '))));
}

#[test]
fn parse_keybinding_normalizes_uppercase_and_backtab() {
    assert_eq!(parse_keybinding("G"), Some(Key::shift(KeyCode::Char('g'))));
    assert_eq!(parse_keybinding("backtab"), Some(Key::shift(KeyCode::BackTab)));
}

#[test]
fn parse_keybinding_rejects_garbage() {
    assert_eq!(parse_keybinding(""), None);
    assert_eq!(parse_keybinding("ctrl+"), None);
    assert_eq!(parse_keybinding("ctrl+abc"), None);
    assert_eq!(parse_keybinding("fx"), None);
}

#[test]
fn settings_deserialize_fills_defaults() {
    let settings: Settings =
        serde_json::from_str(r#"{ "theme": { "delete_fg": "magenta" } }"#).unwrap();

    assert!(settings.keybindings.is_empty());
    assert_eq!(settings.theme.delete_fg.as_deref(), Some("magenta"));
    assert_eq!(settings.theme.title_fg.as_deref(), Some("cyan"));
}

#[test]
fn keybinding_rule_context_is_optional() {
    let settings: Settings = serde_json::from_str(
        r#"{ "keybindings": [ { "key": "ctrl+n", "command": "addItem" } ] }"#,
    )
    .unwrap();

    assert_eq!(settings.keybindings.len(), 1);
    assert_eq!(settings.keybindings[0].command, "addItem");
    assert!(settings.keybindings[0].context.is_none());
}

#[test]
fn write_default_settings_creates_file_once() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("settings.json");

    write_default_settings(&path).unwrap();
    let loaded = load_settings_from(&path).unwrap();
    assert_eq!(loaded.theme.delete_fg.as_deref(), Some("red"));

    std::fs::write(&path, r#"{ "theme": { "delete_fg": "yellow" } }"#).unwrap();
    write_default_settings(&path).unwrap();
    let loaded = load_settings_from(&path).unwrap();
    assert_eq!(loaded.theme.delete_fg.as_deref(), Some("yellow"));
}

#[test]
fn load_settings_from_invalid_or_missing_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    assert!(load_settings_from(&path).is_none());

    std::fs::write(&path, "{ not json").unwrap();
    assert!(load_settings_from(&path).is_none());
}
