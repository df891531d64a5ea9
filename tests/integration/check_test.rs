use check_postqueue::commands::check::{run, CheckSettings};
use check_postqueue::core::categories::ExcludeCategories;
use check_postqueue::core::config::default_msg_categories;
use check_postqueue::core::monitor::CheckStatus;
use check_postqueue::core::queue_source::QueueSource;
use check_postqueue::error::{CheckError, Result};
use clap::{Arg, ArgAction, Command};
use std::collections::BTreeMap;
use std::io::Write;
use tempfile::NamedTempFile;

const POSTQUEUE_OUTPUT: &str = include_str!("../../testdata/postqueue_output.txt");

struct StaticSource(&'static str);

impl QueueSource for StaticSource {
    fn fetch(&self) -> Result<String> {
        Ok(self.0.to_string())
    }
}

struct FailingSource;

impl QueueSource for FailingSource {
    fn fetch(&self) -> Result<String> {
        Err(CheckError::CommandExecution {
            exit_code: Some(1),
            stdout: String::new(),
            stderr: "postqueue: fatal: open /etc/postfix/main.cf: No such file".to_string(),
        })
    }
}

// Mirror of the binary's flag surface, for settings-resolution tests
fn test_cli() -> Command {
    Command::new("check-postqueue")
        .arg(
            Arg::new("warning")
                .short('w')
                .long("warning")
                .value_parser(clap::value_parser!(i64))
                .default_value("100"),
        )
        .arg(
            Arg::new("critical")
                .short('c')
                .long("critical")
                .value_parser(clap::value_parser!(i64))
                .default_value("200"),
        )
        .arg(
            Arg::new("path")
                .long("path")
                .default_value("/usr/sbin/postqueue"),
        )
        .arg(Arg::new("config").long("config"))
        .arg(
            Arg::new("debug")
                .long("debug")
                .action(ArgAction::SetTrue),
        )
}

fn settings_with(pairs: &[(&str, &str)], warning: i64, critical: i64) -> CheckSettings {
    let patterns: BTreeMap<String, String> = pairs
        .iter()
        .map(|(label, pattern)| (label.to_string(), pattern.to_string()))
        .collect();
    CheckSettings {
        warning,
        critical,
        postqueue_path: "/usr/sbin/postqueue".to_string(),
        categories: ExcludeCategories::from_patterns(&patterns).unwrap(),
    }
}

#[test]
fn test_check_canonical_listing_is_ok_at_defaults() {
    let settings = settings_with(
        &[
            ("Connection refused", "Connection refused"),
            ("Connection timeout", "Connection timed out"),
            (
                "Helo command rejected",
                "Helo command rejected: Host not found",
            ),
            (
                "Over quota",
                "The email account that you tried to reach is over quota",
            ),
        ],
        100,
        200,
    );

    let result = run(&settings, &StaticSource(POSTQUEUE_OUTPUT)).unwrap();
    assert_eq!(result.status, CheckStatus::Ok);
    assert_eq!(result.message, "count: 5 (queue: 12, exclude: 7)");
}

#[test]
fn test_check_canonical_listing_warning_and_critical() {
    let warn = settings_with(&[("Connection timeout", "Connection timed out")], 3, 10);
    let result = run(&warn, &StaticSource(POSTQUEUE_OUTPUT)).unwrap();
    assert_eq!(result.status, CheckStatus::Warning);
    assert_eq!(result.message, "count: 8 (queue: 12, exclude: 4)");

    let crit = settings_with(&[("Connection timeout", "Connection timed out")], 3, 4);
    let result = run(&crit, &StaticSource(POSTQUEUE_OUTPUT)).unwrap();
    assert_eq!(result.status, CheckStatus::Critical);
}

#[test]
fn test_check_command_failure_carries_stderr() {
    let settings = settings_with(&[("Mailbox full", "Mailbox full")], 100, 200);
    let err = run(&settings, &FailingSource).unwrap_err();
    assert!(err.to_string().contains("No such file"));
}

#[test]
fn test_settings_from_default_flags() {
    let matches = test_cli().get_matches_from(["check-postqueue"]);
    let settings = CheckSettings::from_matches(&matches).unwrap();

    assert_eq!(settings.warning, 100);
    assert_eq!(settings.critical, 200);
    assert_eq!(settings.postqueue_path, "/usr/sbin/postqueue");
    assert_eq!(settings.categories.len(), default_msg_categories().len());
}

#[test]
fn test_settings_threshold_flags() {
    let matches = test_cli().get_matches_from(["check-postqueue", "-w", "3", "-c", "10"]);
    let settings = CheckSettings::from_matches(&matches).unwrap();

    assert_eq!(settings.warning, 3);
    assert_eq!(settings.critical, 10);
}

#[test]
fn test_settings_config_file_overrides() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
PostqueuePath = "/usr/bin/postqueue"

[ExcludeMsgCategories]
  "Mailbox full" = "Mailbox full"
"#
    )
    .unwrap();

    let matches = test_cli().get_matches_from([
        "check-postqueue",
        "--config",
        file.path().to_str().unwrap(),
    ]);
    let settings = CheckSettings::from_matches(&matches).unwrap();

    assert_eq!(settings.postqueue_path, "/usr/bin/postqueue");
    assert_eq!(settings.categories.len(), 1);
    assert_eq!(
        settings.categories.labels().collect::<Vec<_>>(),
        vec!["Mailbox full"]
    );
}

#[test]
fn test_settings_unreadable_config_is_fatal() {
    let matches = test_cli().get_matches_from([
        "check-postqueue",
        "--config",
        "/nonexistent/check_postqueue.toml",
    ]);
    assert!(matches!(
        CheckSettings::from_matches(&matches),
        Err(CheckError::Config(_))
    ));
}

#[test]
fn test_settings_empty_category_table_fails_validation() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "[ExcludeMsgCategories]\n").unwrap();

    let matches = test_cli().get_matches_from([
        "check-postqueue",
        "--config",
        file.path().to_str().unwrap(),
    ]);
    assert!(matches!(
        CheckSettings::from_matches(&matches),
        Err(CheckError::Validation(_))
    ));
}
