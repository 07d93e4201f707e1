use calver_release::boundary::BoundaryWarning;
use calver_release::cli::orchestration::{run_release_workflow_with, ReleaseWorkflowArgs};
use calver_release::config::Config;
use calver_release::domain::{TagPattern, YearMonth};
use calver_release::git::{MockPublisher, MockReleaseLister, PublishCommand};
use calver_release::ReleaseError;

const JUNE_24: YearMonth = YearMonth { year: 24, month: 6 };

fn args() -> ReleaseWorkflowArgs {
    ReleaseWorkflowArgs::from_config(&Config::default()).unwrap()
}

fn never_asked(_: &str) -> anyhow::Result<bool> {
    panic!("confirmation should not be requested");
}

#[test]
fn test_same_month_release_is_published() {
    let lister = MockReleaseLister::with_latest("24.06.1");
    let publisher = MockPublisher::new();

    let result = run_release_workflow_with(&args(), &lister, &publisher, JUNE_24, never_asked)
        .unwrap();

    assert_eq!(result.latest_tag, Some("24.06.1".to_string()));
    assert_eq!(result.tag, "24.06.2");
    assert!(result.published);
    assert_eq!(result.output, Some("published 24.06.2".to_string()));
    assert_eq!(
        publisher.published(),
        vec![PublishCommand::new("24.06.2", "origin", "main")]
    );
    assert!(result.warnings.is_empty());
}

#[test]
fn test_new_month_release_drops_minor() {
    let lister = MockReleaseLister::with_latest("23.02.5");
    let publisher = MockPublisher::new();

    let result = run_release_workflow_with(&args(), &lister, &publisher, JUNE_24, never_asked)
        .unwrap();

    assert_eq!(result.tag, "24.06");
}

#[test]
fn test_dry_run_does_not_publish() {
    let lister = MockReleaseLister::with_latest("24.06");
    let publisher = MockPublisher::new();
    let mut args = args();
    args.dry_run = true;

    let result =
        run_release_workflow_with(&args, &lister, &publisher, JUNE_24, never_asked).unwrap();

    assert_eq!(result.tag, "24.06.1");
    assert!(!result.published);
    assert_eq!(result.output, None);
    assert_eq!(
        result.command.to_string(),
        "git tag 24.06.1 && git push origin main 24.06.1"
    );
    assert!(publisher.published().is_empty());
}

#[test]
fn test_first_release_is_seeded() {
    let lister = MockReleaseLister::new();
    let publisher = MockPublisher::new();

    let result = run_release_workflow_with(&args(), &lister, &publisher, JUNE_24, never_asked)
        .unwrap();

    assert_eq!(result.latest_tag, None);
    assert_eq!(result.tag, "24.06");
    assert_eq!(
        result.warnings,
        vec![BoundaryWarning::NoPriorRelease {
            seed_tag: "24.06".to_string()
        }]
    );
    assert_eq!(publisher.published().len(), 1);
}

#[test]
fn test_first_release_without_seeding_fails() {
    let lister = MockReleaseLister::new();
    let publisher = MockPublisher::new();
    let mut args = args();
    args.seed_first_release = false;

    let err =
        run_release_workflow_with(&args, &lister, &publisher, JUNE_24, never_asked).unwrap_err();

    assert!(matches!(
        err.downcast_ref::<ReleaseError>(),
        Some(ReleaseError::NoPriorRelease)
    ));
    assert!(publisher.published().is_empty());
}

#[test]
fn test_malformed_latest_tag_fails_before_publishing() {
    let lister = MockReleaseLister::with_latest("release-2024");
    let publisher = MockPublisher::new();

    let err = run_release_workflow_with(&args(), &lister, &publisher, JUNE_24, never_asked)
        .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<ReleaseError>(),
        Some(ReleaseError::MalformedTag(_))
    ));
    assert!(publisher.published().is_empty());
}

#[test]
fn test_lister_failure_is_propagated() {
    let lister = MockReleaseLister::failing("gh: command not found");
    let publisher = MockPublisher::new();

    let err = run_release_workflow_with(&args(), &lister, &publisher, JUNE_24, never_asked)
        .unwrap_err();

    assert!(err.to_string().contains("latest release"));
    assert!(matches!(
        err.downcast_ref::<ReleaseError>(),
        Some(ReleaseError::ExternalTool { .. })
    ));
}

#[test]
fn test_publisher_failure_is_propagated() {
    let lister = MockReleaseLister::with_latest("24.06");
    let publisher = MockPublisher::failing("push rejected");

    let err = run_release_workflow_with(&args(), &lister, &publisher, JUNE_24, never_asked)
        .unwrap_err();

    assert!(err.to_string().contains("24.06.1"));
}

#[test]
fn test_tag_pattern_wraps_versions() {
    let lister = MockReleaseLister::with_latest("v24.06.3");
    let publisher = MockPublisher::new();
    let mut args = args();
    args.tag_pattern = TagPattern::new("v{version}").unwrap();
    args.remote = "upstream".to_string();
    args.branch = "release".to_string();

    let result =
        run_release_workflow_with(&args, &lister, &publisher, JUNE_24, never_asked).unwrap();

    assert_eq!(result.tag, "v24.06.4");
    assert_eq!(
        publisher.published(),
        vec![PublishCommand::new("v24.06.4", "upstream", "release")]
    );
}

#[test]
fn test_confirmation_declined_skips_publishing() {
    let lister = MockReleaseLister::with_latest("24.06");
    let publisher = MockPublisher::new();
    let mut args = args();
    args.confirm = true;

    let mut prompts = Vec::new();
    let result = run_release_workflow_with(&args, &lister, &publisher, JUNE_24, |prompt: &str| {
        prompts.push(prompt.to_string());
        Ok(false)
    })
    .unwrap();

    assert_eq!(prompts, vec!["Publish 24.06.1?".to_string()]);
    assert!(!result.published);
    assert!(publisher.published().is_empty());
}

#[test]
fn test_force_skips_confirmation() {
    let lister = MockReleaseLister::with_latest("24.06");
    let publisher = MockPublisher::new();
    let mut args = args();
    args.confirm = true;
    args.force = true;

    let result =
        run_release_workflow_with(&args, &lister, &publisher, JUNE_24, never_asked).unwrap();

    assert!(result.published);
}

#[test]
fn test_clock_behind_latest_tag_warns() {
    let lister = MockReleaseLister::with_latest("24.07.1");
    let publisher = MockPublisher::new();
    let mut args = args();
    args.dry_run = true;

    let result =
        run_release_workflow_with(&args, &lister, &publisher, JUNE_24, never_asked).unwrap();

    assert_eq!(result.tag, "24.06");
    assert!(matches!(
        result.warnings.as_slice(),
        [BoundaryWarning::ClockBehindLatestTag { .. }]
    ));
}

#[test]
fn test_negative_minor_is_incremented_with_warning() {
    let lister = MockReleaseLister::with_latest("24.06.-1");
    let publisher = MockPublisher::new();

    let result = run_release_workflow_with(&args(), &lister, &publisher, JUNE_24, never_asked)
        .unwrap();

    assert_eq!(result.tag, "24.06.0");
    assert_eq!(
        result.warnings,
        vec![BoundaryWarning::NonPositiveMinor {
            tag: "24.06.-1".to_string()
        }]
    );
    assert!(result.published);
}

#[test]
fn test_consecutive_releases_in_one_month() {
    let publisher = MockPublisher::new();
    let mut latest = "24.05.7".to_string();

    for expected in ["24.06", "24.06.1", "24.06.2", "24.06.3"] {
        let lister = MockReleaseLister::with_latest(latest.clone());
        let result =
            run_release_workflow_with(&args(), &lister, &publisher, JUNE_24, never_asked).unwrap();
        assert_eq!(result.tag, expected);
        latest = result.tag;
    }

    assert_eq!(publisher.published().len(), 4);
}
