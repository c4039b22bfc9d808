//! Tests for the `delete` workflow against a sandboxed filesystem.

#![allow(clippy::expect_used)]

use site_manager::application::services::site_create;
use site_manager::application::services::site_delete::{self, DeleteOutcome};
use site_manager::domain::SiteError;
use site_manager::infra::LocalFs;

use crate::helpers::Sandbox;
use crate::mocks::{FixedPrompter, NoTtyPrompter, RecordingReporter, RecordingRunner};

#[tokio::test]
async fn delete_declined_touches_nothing() {
    let sb = Sandbox::new("myapp", "127.0.0.1    myapp.test\n");
    let site = sb.site();
    std::fs::write(&site.config_path, "server {}").expect("config");
    let runner = RecordingRunner::succeeding();
    let prompter = FixedPrompter::no();
    let reporter = RecordingReporter::default();

    let outcome = site_delete::delete_site(&LocalFs, &runner, &prompter, &site, &reporter)
        .await
        .expect("delete");

    assert_eq!(outcome, DeleteOutcome::Cancelled);
    assert!(site.config_path.exists());
    assert_eq!(sb.hosts(), "127.0.0.1    myapp.test\n");
    assert_eq!(runner.call_count(), 0);
    assert!(reporter.contains("Deletion canceled."));
}

#[tokio::test]
async fn delete_asks_about_the_domain() {
    let sb = Sandbox::new("myapp", "");
    let prompter = FixedPrompter::no();

    site_delete::delete_site(
        &LocalFs,
        &RecordingRunner::succeeding(),
        &prompter,
        &sb.site(),
        &RecordingReporter::default(),
    )
    .await
    .expect("delete");

    assert_eq!(
        prompter.asked.borrow().as_slice(),
        ["Are you sure you want to delete the configuration for myapp.test?"]
    );
}

#[tokio::test]
async fn create_then_delete_restores_files_except_blank_line() {
    let original_hosts = "127.0.0.1 localhost\n";
    let sb = Sandbox::new("myapp", original_hosts);
    let site = sb.site();
    let runner = RecordingRunner::succeeding();

    site_create::create_site(&LocalFs, &runner, &site, &RecordingReporter::default())
        .await
        .expect("create");
    let outcome = site_delete::delete_site(
        &LocalFs,
        &runner,
        &FixedPrompter::yes(),
        &site,
        &RecordingReporter::default(),
    )
    .await
    .expect("delete");

    assert_eq!(outcome, DeleteOutcome::Deleted);
    assert!(!site.config_path.exists());
    assert!(std::fs::symlink_metadata(&site.enabled_link_path).is_err());
    assert_eq!(sb.hosts(), format!("{original_hosts}\n"));
    assert_eq!(runner.call_count(), 2);
}

#[tokio::test]
async fn delete_missing_artifacts_reports_not_found_and_still_restarts() {
    let sb = Sandbox::new("myapp", "192.168.1.1  other.test\n");
    let site = sb.site();
    let runner = RecordingRunner::succeeding();
    let reporter = RecordingReporter::default();

    let outcome =
        site_delete::delete_site(&LocalFs, &runner, &FixedPrompter::yes(), &site, &reporter)
            .await
            .expect("delete");

    assert_eq!(outcome, DeleteOutcome::Deleted);
    assert!(reporter.contains("Nginx config not found"));
    assert!(reporter.contains("Symlink not found"));
    assert!(reporter.contains("Domain not found in"));
    assert_eq!(reporter.warnings.get(), 3);
    assert_eq!(sb.hosts(), "192.168.1.1  other.test\n");
    assert_eq!(runner.call_count(), 1);
}

#[tokio::test]
async fn delete_removes_dangling_symlink() {
    let sb = Sandbox::new("myapp", "");
    let site = sb.site();
    std::os::unix::fs::symlink(&site.config_path, &site.enabled_link_path).expect("link");
    let reporter = RecordingReporter::default();

    site_delete::remove_symlink(&LocalFs, &site, &reporter).expect("remove");

    assert!(std::fs::symlink_metadata(&site.enabled_link_path).is_err());
    assert!(reporter.contains("Symlink deleted"));
}

#[test]
fn delete_leaves_regular_file_at_link_path() {
    let sb = Sandbox::new("myapp", "");
    let site = sb.site();
    std::fs::write(&site.enabled_link_path, "not a link").expect("file");
    let reporter = RecordingReporter::default();

    site_delete::remove_symlink(&LocalFs, &site, &reporter).expect("remove");

    assert!(site.enabled_link_path.exists());
    assert!(reporter.contains("Symlink not found"));
}

#[test]
fn delete_blanks_every_matching_hosts_line() {
    let sb = Sandbox::new("myapp", "a\n127.0.0.1    myapp.test\nb\n10.0.0.1 myapp.test\n");
    let site = sb.site();

    let removed =
        site_delete::remove_hosts_entry(&LocalFs, &site, &RecordingReporter::default())
            .expect("remove");

    assert!(removed);
    assert_eq!(sb.hosts(), "a\n\nb\n\n");
}

#[tokio::test]
async fn delete_prompt_failure_propagates_without_changes() {
    let sb = Sandbox::new("myapp", "127.0.0.1    myapp.test\n");
    let runner = RecordingRunner::succeeding();

    let result = site_delete::delete_site(
        &LocalFs,
        &runner,
        &NoTtyPrompter,
        &sb.site(),
        &RecordingReporter::default(),
    )
    .await;

    assert!(result.is_err());
    assert_eq!(sb.hosts(), "127.0.0.1    myapp.test\n");
    assert_eq!(runner.call_count(), 0);
}

#[tokio::test]
async fn delete_restart_failure_is_process_error() {
    let sb = Sandbox::new("myapp", "");
    let err = site_delete::delete_site(
        &LocalFs,
        &RecordingRunner::failing(3),
        &FixedPrompter::yes(),
        &sb.site(),
        &RecordingReporter::default(),
    )
    .await
    .expect_err("should fail");

    assert!(matches!(
        err.downcast_ref::<SiteError>(),
        Some(SiteError::Process { .. })
    ));
}

#[tokio::test]
async fn delete_removes_entry_from_hosts_file_with_non_utf8_bytes() {
    let sb = Sandbox::new(
        "myapp",
        b"127.0.0.1 localhost # caf\xe9\n127.0.0.1    myapp.test\n",
    );
    let runner = RecordingRunner::succeeding();

    let outcome = site_delete::delete_site(
        &LocalFs,
        &runner,
        &FixedPrompter::yes(),
        &sb.site(),
        &RecordingReporter::default(),
    )
    .await
    .expect("delete");

    assert_eq!(outcome, DeleteOutcome::Deleted);
    assert_eq!(sb.hosts_bytes(), b"127.0.0.1 localhost # caf\xe9\n\n");
    assert_eq!(runner.call_count(), 1);
}
