use std::path::{Path, PathBuf};

use super::*;
use crate::{resolve::LookupMode, test_support::capture_logs};

fn parse(text: &str) -> Settings {
    parse_loaded(text).settings
}

fn parse_loaded(text: &str) -> LoadedSettings {
    Settings::from_toml_str(text, Path::new("solidoc.toml")).expect("valid settings")
}

fn scratch_dir(label: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "solidoc-{label}-{}",
        std::time::SystemTime::now().duration_since(std::time::UNIX_EPOCH).expect("clock drift").as_nanos()
    ))
}

#[test]
fn empty_file_yields_defaults() {
    let settings = parse("");
    assert_eq!(settings, Settings::default());
    assert_eq!(settings.resolve.lookup_mode, LookupMode::Exhaustive);
    assert_eq!(settings.output.build_dir, PathBuf::from(DEFAULT_BUILD_DIR));
    assert_eq!(settings.messages.reference_separator, ",");
    assert_eq!(settings.logging.level, LogLevel::Info);
}

#[test]
fn parses_every_section() {
    let settings = parse(
        r#"
        [resolve]
        lookupMode = "firstBranch"

        [messages]
        overridden = "Überschrieben in: {0}"
        overriddenMarker = ""
        referenceSeparator = " | "

        [output]
        buildDir = "out/artifacts"
        template = "docs/template.md"
        includeAbi = false

        [logging]
        level = "debug"
        "#,
    );

    assert_eq!(settings.resolve.lookup_mode, LookupMode::FirstBranch);
    assert_eq!(settings.messages.overridden, "Überschrieben in: {0}");
    assert_eq!(settings.messages.overridden_marker, "");
    assert_eq!(settings.messages.reference_separator, " | ");
    assert_eq!(settings.messages.extends, MessageSettings::default().extends);
    assert_eq!(settings.output.build_dir, PathBuf::from("out/artifacts"));
    assert_eq!(settings.output.template, Some(PathBuf::from("docs/template.md")));
    assert!(!settings.output.include_abi);
    assert!(settings.output.write_index);
    assert_eq!(settings.logging.level, LogLevel::Debug);
}

#[test]
fn unknown_sections_and_keys_are_collected() {
    let loaded = parse_loaded(
        r#"
        [theme]
        color = "blue"

        [output]
        includeAbi = false
        pageSize = 3

        [resolve]
        mode = "firstBranch"
        "#,
    );
    assert!(!loaded.settings.output.include_abi);
    assert_eq!(loaded.settings.resolve, ResolveSettings::default());
    assert_eq!(loaded.ignored_keys, ["output.pageSize", "resolve.mode", "theme"]);
    assert_eq!(loaded.source.as_deref(), Some(Path::new("solidoc.toml")));
}

#[test]
fn misspelled_message_key_keeps_the_default() {
    let loaded = parse_loaded(
        r#"
        [messages]
        overridenMarker = "> "
        "#,
    );
    assert_eq!(loaded.settings.messages.overridden_marker, MessageSettings::default().overridden_marker);
    assert_eq!(loaded.ignored_keys, ["messages.overridenMarker"]);
}

#[test]
fn recognized_keys_are_not_reported() {
    let loaded = parse_loaded("[logging]\nlevel = \"debug\"\n\n[messages]\nlistSeparator = \" / \"\n");
    assert!(loaded.ignored_keys.is_empty());
}

#[test]
fn logging_section_sets_level_and_file() {
    let logging = parse("[logging]\nlevel = \"warning\"\nfile = \"logs/solidoc.log\"\n").logging;
    assert_eq!(logging.level, LogLevel::Warn);
    assert_eq!(logging.filter_directive(false), "solidoc=warn");
    assert_eq!(logging.filter_directive(true), "solidoc=debug");
    assert_eq!(
        logging.log_file(None, Path::new("/project")),
        Some(PathBuf::from("/project/logs/solidoc.log"))
    );
    assert_eq!(
        logging.log_file(Some(Path::new("/tmp/run.log")), Path::new("/project")),
        Some(PathBuf::from("/tmp/run.log"))
    );

    let trace = parse("[logging]\nlevel = \"trace\"\nfile = \"\"\n").logging;
    assert_eq!(trace.filter_directive(true), "solidoc=trace");
    assert_eq!(trace.log_file(None, Path::new("/project")), None);
}

#[test]
fn normalize_restores_broken_values() {
    let settings = parse(
        r#"
        [messages]
        extends = "Extends"
        derivedContracts = "Children: {0}"

        [output]
        buildDir = ""
        template = ""
        "#,
    );
    assert_eq!(settings.messages.extends, "Extends: {0}");
    assert_eq!(settings.messages.derived_contracts, "Children: {0}");
    assert_eq!(settings.output.build_dir, PathBuf::from(DEFAULT_BUILD_DIR));
    assert_eq!(settings.output.template, None);
}

#[test]
fn invalid_toml_reports_the_path() {
    let err = Settings::from_toml_str("[resolve\nlookupMode = 1", Path::new("bad.toml")).expect_err("invalid");
    assert!(matches!(err, Error::Toml { ref path, .. } if path == Path::new("bad.toml")));
    assert!(err.to_string().contains("bad.toml"));
}

#[test]
fn format_message_substitutes_placeholder() {
    assert_eq!(format_message("Extends: {0}", "[A](A.md)"), "Extends: [A](A.md)");
    assert_eq!(LogLevel::Warn.filter_directive(), "solidoc=warn");
}

#[test]
fn build_dir_is_resolved_against_project_root() {
    let settings = Settings::default();
    assert_eq!(settings.build_dir(Path::new("/project")), PathBuf::from("/project/build/contracts"));
}

#[tokio::test]
async fn load_falls_back_to_defaults_without_a_config_file() {
    let root = scratch_dir("config-missing");
    tokio::fs::create_dir_all(&root).await.expect("create root");

    let loaded = Settings::load(&root, None).await.expect("defaults");
    assert_eq!(loaded.settings, Settings::default());
    assert_eq!(loaded.source, None);
    assert!(loaded.ignored_keys.is_empty());

    let _ = tokio::fs::remove_dir_all(root).await;
}

#[tokio::test]
async fn load_reads_project_and_explicit_config() {
    let root = scratch_dir("config-present");
    tokio::fs::create_dir_all(&root).await.expect("create root");
    tokio::fs::write(root.join(CONFIG_FILE_NAME), "[logging]\nlevel = \"warn\"\n").await.expect("write config");
    let explicit = root.join("custom.toml");
    tokio::fs::write(&explicit, "[output]\nincludeAbi = false\n").await.expect("write custom");

    let from_root = Settings::load(&root, None).await.expect("project config").settings;
    assert_eq!(from_root.logging.level, LogLevel::Warn);

    let from_explicit = Settings::load(&root, Some(&explicit)).await.expect("explicit config").settings;
    assert_eq!(from_explicit.logging.level, LogLevel::Info);
    assert!(!from_explicit.output.include_abi);

    let missing = Settings::load(&root, Some(&root.join("nope.toml"))).await;
    assert!(matches!(missing, Err(Error::Io { .. })));

    let _ = tokio::fs::remove_dir_all(root).await;
}

#[test]
fn diagnostics_warn_about_every_ignored_key() {
    let loaded = parse_loaded("[bogus]\nx = 1\n\n[messages]\ntypo = 1\n");
    assert_eq!(loaded.ignored_keys, ["bogus", "messages.typo"]);

    let output = capture_logs(|| loaded.log_diagnostics());
    assert!(output.contains("Ignoring unknown config key `bogus` in solidoc.toml"));
    assert!(output.contains("Ignoring unknown config key `messages.typo` in solidoc.toml"));
}
