use check_postqueue::core::monitor::{CheckResult, CheckStatus, Monitor};

#[test]
fn test_default_thresholds_small_queue_is_ok() {
    assert_eq!(Monitor::new(100, 200).evaluate(5), CheckStatus::Ok);
}

#[test]
fn test_warning_threshold() {
    assert_eq!(Monitor::new(3, 10).evaluate(5), CheckStatus::Warning);
}

#[test]
fn test_critical_threshold() {
    assert_eq!(Monitor::new(3, 4).evaluate(5), CheckStatus::Critical);
}

#[test]
fn test_threshold_boundary_is_strict() {
    let monitor = Monitor::new(5, 10);
    assert_eq!(monitor.evaluate(5), CheckStatus::Ok);
    assert_eq!(monitor.evaluate(6), CheckStatus::Warning);
    assert_eq!(monitor.evaluate(10), CheckStatus::Warning);
    assert_eq!(monitor.evaluate(11), CheckStatus::Critical);
}

#[test]
fn test_disabled_thresholds_never_trigger() {
    assert_eq!(Monitor::new(0, 0).evaluate(10_000), CheckStatus::Ok);
}

#[test]
fn test_summary_reports_all_numbers() {
    let result = CheckResult::new(
        CheckStatus::Ok,
        "count: 5 (queue: 12, exclude: 7)".to_string(),
    );
    let summary = result.summary();
    assert!(summary.contains("Postqueue"));
    assert!(summary.contains("OK"));
    assert!(summary.contains("count: 5 (queue: 12, exclude: 7)"));
}
