mod common;

use common::{output, test_config, FakeRunner};
use pantheon_sync::error::SyncError;
use pantheon_sync::site::SiteReference;
use pantheon_sync::validate;
use tempfile::TempDir;

#[test]
fn test_validation_passes() {
    let temp_dir = TempDir::new().unwrap();
    let config = test_config(temp_dir.path());
    let runner = FakeRunner::happy();
    let site = SiteReference::new("example", "dev").unwrap();

    validate::run(&config, &runner, &site).unwrap();

    let calls = runner.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0].1, vec!["--version"]);
    assert_eq!(calls[1].1, vec!["site:info", "example"]);
}

#[test]
fn test_missing_terminus_stops_validation() {
    let temp_dir = TempDir::new().unwrap();
    let config = test_config(temp_dir.path());
    let runner = FakeRunner::new(|_, _| {
        Err(std::io::Error::new(std::io::ErrorKind::NotFound, "No such file or directory").into())
    });
    let site = SiteReference::new("example", "dev").unwrap();

    let err = validate::run(&config, &runner, &site).unwrap_err();
    assert!(matches!(err, SyncError::ToolNotFound { .. }));
    assert_eq!(err.code(), "PANTHEON_TERMINUS_NOT_FOUND");
    assert_eq!(runner.calls().len(), 1);
    assert!(!runner.called("terminus", "site:info"));
}

#[test]
fn test_failing_version_check_stops_validation() {
    let temp_dir = TempDir::new().unwrap();
    let config = test_config(temp_dir.path());
    let runner = FakeRunner::new(|_, _| Ok(output(127, "")));
    let site = SiteReference::new("example", "test").unwrap();

    let err = validate::run(&config, &runner, &site).unwrap_err();
    assert_eq!(err.code(), "PANTHEON_TERMINUS_NOT_FOUND");
    assert_eq!(runner.calls().len(), 1);
}

#[test]
fn test_inaccessible_site() {
    let temp_dir = TempDir::new().unwrap();
    let config = test_config(temp_dir.path());
    let runner = FakeRunner::new(|_, args| match args[0].as_str() {
        "--version" => Ok(output(0, "Terminus 3.6.0")),
        _ => Ok(output(1, "")),
    });
    let site = SiteReference::new("secret-site", "live").unwrap();

    let err = validate::run(&config, &runner, &site).unwrap_err();
    assert_eq!(err.code(), "PANTHEON_SITE_NOT_ACCESSIBLE");
    assert!(err.to_string().contains("secret-site"));
}

#[test]
fn test_invalid_environment_makes_no_calls() {
    let runner = FakeRunner::happy();

    let err = SiteReference::new("example", "stage").unwrap_err();
    assert_eq!(err.code(), "PANTHEON_INVALID_ENV");
    assert!(err.to_string().contains("stage"));
    assert!(runner.calls().is_empty());
}
