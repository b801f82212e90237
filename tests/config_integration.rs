// SPDX-License-Identifier: MPL-2.0
use libris::config::{self, Config, DEFAULT_DEBOUNCE_MS, LOAD_WARNING_KEY};
use libris::i18n::I18n;
use libris::search::RacePolicy;
use std::fs;
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    fs::write(&path, "[general]\nlanguage = \"en-US\"\n")
        .expect("Failed to write initial config file");

    let loaded = config::load_from_path(&path).expect("Failed to load initial config");
    let i18n_en = I18n::new(None, &loaded);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");
    assert_eq!(i18n_en.tr("search-no-results"), "No results found");

    fs::write(&path, "[general]\nlanguage = \"fr\"\n").expect("Failed to write french config file");

    let loaded = config::load_from_path(&path).expect("Failed to load french config");
    let i18n_fr = I18n::new(None, &loaded);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");

    // The CLI flag beats the file.
    let i18n_cli = I18n::new(Some("en-US".to_string()), &loaded);
    assert_eq!(i18n_cli.current_locale().to_string(), "en-US");
}

#[test]
fn hand_written_settings_are_read() {
    let dir = tempdir().expect("temp dir");
    fs::write(
        dir.path().join("settings.toml"),
        r#"
[search]
endpoint = "http://library.local/"
debounce_ms = 450
race_policy = "latest-issued"

[notifications]
display_ms = 5000
max_visible = 3
"#,
    )
    .expect("write settings");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));

    assert!(warning.is_none());
    assert_eq!(loaded.search.endpoint.as_deref(), Some("http://library.local/"));
    assert_eq!(loaded.search.debounce().value(), 450);
    assert_eq!(loaded.search.race_policy, RacePolicy::LatestIssued);
    assert_eq!(loaded.notifications.timing().display(), Duration::from_millis(5000));
    assert_eq!(loaded.notifications.max_visible(), Some(3));
}

#[test]
fn missing_file_gives_defaults_silently() {
    let dir = tempdir().expect("temp dir");
    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));

    assert!(warning.is_none());
    assert_eq!(loaded.search.debounce().value(), DEFAULT_DEBOUNCE_MS);
    assert_eq!(loaded.search.race_policy, RacePolicy::LastArrival);
    assert_eq!(loaded.notifications.max_visible(), None);
}

#[test]
fn broken_file_gives_defaults_and_a_localized_warning() {
    let dir = tempdir().expect("temp dir");
    fs::write(dir.path().join("settings.toml"), "[notifications\ndisplay_ms = ")
        .expect("write settings");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));

    assert_eq!(loaded, Config::default());
    assert_eq!(warning.as_deref(), Some(LOAD_WARNING_KEY));

    let i18n = I18n::new(Some("en-US".to_string()), &loaded);
    assert!(!i18n.tr(LOAD_WARNING_KEY).starts_with("MISSING"));
}
