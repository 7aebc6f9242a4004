//! Tests for TagCheckService

use std::sync::Arc;

use rstest::rstest;
use secrecy::SecretString;

use phdq::application::services::{CheckOutcome, TagCheckService};
use phdq::application::{ApplicationError, CheckOptions, ServerOptions};
use phdq::infrastructure::HistorianError;
use phdq::util::testing::{init_test_setup, RecordedCall, RecordingHistorian};

fn options(tag: &str, port: u16) -> CheckOptions {
    CheckOptions {
        server: ServerOptions {
            hostname: "MALSHW1".into(),
            username: "operator".into(),
            password: SecretString::new("secret".into()),
            port,
        },
        tag: tag.into(),
    }
}

fn service(historian: &Arc<RecordingHistorian>) -> TagCheckService {
    TagCheckService::new(historian.clone())
}

#[test]
fn given_resolvable_tag_when_checking_then_reports_found_with_exit_zero() {
    // Arrange
    init_test_setup();
    let historian = Arc::new(
        RecordingHistorian::new().with_resolve_response(Ok("A.RL_AI7361.BATCH".into())),
    );

    // Act
    let outcome = service(&historian)
        .check(options("a.rl_ai7361.batch", 3000))
        .unwrap();

    // Assert
    assert_eq!(outcome.to_string(), "a.rl_ai7361.batch found");
    assert_eq!(outcome.exit_code(), 0);
    assert_eq!(
        outcome,
        CheckOutcome::Found {
            tag: "a.rl_ai7361.batch".into(),
            canonical: "A.RL_AI7361.BATCH".into(),
        }
    );
}

#[test]
fn given_empty_resolution_when_checking_then_reports_missing_with_exit_one() {
    let historian = Arc::new(RecordingHistorian::new().with_resolve_response(Ok(String::new())));

    let outcome = service(&historian).check(options("NOPE", 3000)).unwrap();

    assert_eq!(outcome.to_string(), "NOPE does not exist in system");
    assert_eq!(outcome.exit_code(), 1);
}

#[test]
fn given_connection_failure_when_checking_then_reports_details_with_exit_one() {
    let historian = Arc::new(
        RecordingHistorian::new()
            .with_resolve_response(Err(HistorianError::connection("host unreachable"))),
    );

    let outcome = service(&historian).check(options("T1", 3000)).unwrap();

    let line = outcome.to_string();
    assert!(line.starts_with("Server Connection Failed Check Details: "));
    assert!(line.ends_with("host unreachable"));
    assert_eq!(outcome.exit_code(), 1);
}

#[test]
fn given_query_failure_when_checking_then_error_propagates() {
    let historian = Arc::new(
        RecordingHistorian::new().with_resolve_response(Err(HistorianError::query("boom"))),
    );

    let err = service(&historian).check(options("T1", 3000)).unwrap_err();

    assert!(matches!(
        err,
        ApplicationError::Historian(HistorianError::Query { .. })
    ));
}

#[test]
fn given_check_then_resolves_exactly_once_with_tag_and_connection() {
    let historian = Arc::new(RecordingHistorian::new());

    service(&historian).check(options("T1", 3000)).unwrap();

    let calls = historian.calls();
    assert_eq!(calls.len(), 1);
    let RecordedCall::ResolveTagName { connection, tag } = &calls[0] else {
        panic!("expected resolve call, got {:?}", calls[0]);
    };
    assert_eq!(tag, "T1");
    assert_eq!(connection.hostname, "MALSHW1");
    assert_eq!(connection.username, "operator");
}

#[rstest]
#[case::default_port(3000, None)]
#[case::custom_port(3100, Some(3100))]
#[case::low_port(1, Some(1))]
fn given_port_when_checking_then_overrides_only_non_default(
    #[case] port: u16,
    #[case] expected: Option<u16>,
) {
    let historian = Arc::new(RecordingHistorian::new());

    service(&historian).check(options("T1", port)).unwrap();

    let RecordedCall::ResolveTagName { connection, .. } = &historian.calls()[0] else {
        panic!("expected resolve call");
    };
    assert_eq!(connection.port_override, expected);
}
