//! Tests for ReplayHistorian loaded from disk

use std::fs;
use std::path::{Path, PathBuf};

use secrecy::SecretString;
use tempfile::TempDir;

use phdq::domain::{QueryRequest, ServerConnection, Tag, Tags};
use phdq::infrastructure::historian::ReplayHistorian;
use phdq::infrastructure::traits::{HistorianClient, RealFileSystem};
use phdq::infrastructure::{HistorianError, InfraError};

const REPLAY: &str = r#"
[[server]]
hostname = "MALSHW1"
username = "operator"
password = "secret"

[[server.tag]]
name = "A.RL_AI7361.BATCH"
document = "<NewDataSet><Table><TagName>A.RL_AI7361.BATCH</TagName></Table></NewDataSet>"

[[server.tag]]
name = "FI101.PV"
document = "<NewDataSet><Table><TagName>FI101.PV</TagName></Table></NewDataSet>"
"#;

fn write_replay(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("replay.toml");
    fs::write(&path, content).expect("write replay file");
    path
}

fn operator() -> ServerConnection {
    ServerConnection::new("MALSHW1", "operator", SecretString::new("secret".into()))
}

fn query(names: &[&str]) -> QueryRequest {
    let tags: Tags = names.iter().map(|n| Tag::new(*n)).collect();
    QueryRequest::new(tags, "NOW-1D", "NOW", 0).unwrap()
}

#[test]
fn given_replay_file_when_fetching_known_tag_then_returns_recorded_document() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let path = write_replay(&temp, REPLAY);
    let historian = ReplayHistorian::load(&RealFileSystem, &path).unwrap();

    // Act
    let document = historian
        .fetch_row_data(&operator(), &query(&["a.rl_ai7361.batch"]))
        .unwrap();

    // Assert
    assert_eq!(
        document.xml(),
        "<NewDataSet><Table><TagName>A.RL_AI7361.BATCH</TagName></Table></NewDataSet>"
    );
    assert_eq!(historian.path(), path.as_path());
}

#[test]
fn given_several_tags_when_fetching_then_joins_documents_in_order() {
    let temp = TempDir::new().unwrap();
    let historian = ReplayHistorian::load(&RealFileSystem, &write_replay(&temp, REPLAY)).unwrap();

    let document = historian
        .fetch_row_data(&operator(), &query(&["FI101.PV", "A.RL_AI7361.BATCH"]))
        .unwrap();

    let lines: Vec<_> = document.xml().lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("FI101.PV"));
    assert!(lines[1].contains("A.RL_AI7361.BATCH"));
}

#[test]
fn given_unknown_tag_when_fetching_then_query_error() {
    let temp = TempDir::new().unwrap();
    let historian = ReplayHistorian::load(&RealFileSystem, &write_replay(&temp, REPLAY)).unwrap();

    let err = historian
        .fetch_row_data(&operator(), &query(&["MISSING"]))
        .unwrap_err();

    assert!(matches!(err, HistorianError::Query { .. }));
}

#[test]
fn given_unknown_tag_when_resolving_then_returns_empty_string() {
    let temp = TempDir::new().unwrap();
    let historian = ReplayHistorian::load(&RealFileSystem, &write_replay(&temp, REPLAY)).unwrap();

    let name = historian.resolve_tag_name(&operator(), "MISSING").unwrap();

    assert_eq!(name, "");
}

#[test]
fn given_known_tag_without_canonical_when_resolving_then_returns_recorded_name() {
    let temp = TempDir::new().unwrap();
    let historian = ReplayHistorian::load(&RealFileSystem, &write_replay(&temp, REPLAY)).unwrap();

    let name = historian.resolve_tag_name(&operator(), "fi101.pv").unwrap();

    assert_eq!(name, "FI101.PV");
}

#[test]
fn given_wrong_password_when_resolving_then_connection_error() {
    let temp = TempDir::new().unwrap();
    let historian = ReplayHistorian::load(&RealFileSystem, &write_replay(&temp, REPLAY)).unwrap();
    let conn = ServerConnection::new("MALSHW1", "operator", SecretString::new("wrong".into()));

    let err = historian.resolve_tag_name(&conn, "FI101.PV").unwrap_err();

    assert_eq!(
        err,
        HistorianError::connection("login failed for user 'operator' on MALSHW1")
    );
}

#[test]
fn given_unknown_host_when_fetching_then_connection_error() {
    let temp = TempDir::new().unwrap();
    let historian = ReplayHistorian::load(&RealFileSystem, &write_replay(&temp, REPLAY)).unwrap();
    let conn = ServerConnection::new("OTHER", "operator", SecretString::new("secret".into()));

    let err = historian
        .fetch_row_data(&conn, &query(&["FI101.PV"]))
        .unwrap_err();

    assert_eq!(
        err,
        HistorianError::connection("unable to connect to OTHER:3000")
    );
}

#[test]
fn given_missing_file_when_loading_then_io_error() {
    let err = ReplayHistorian::load(&RealFileSystem, Path::new("/nonexistent/replay.toml"))
        .unwrap_err();

    assert!(matches!(err, InfraError::Io { .. }));
}

#[test]
fn given_malformed_file_when_loading_then_replay_error() {
    let temp = TempDir::new().unwrap();
    let path = write_replay(&temp, "[[server]]\nhostname = 42\n");

    let err = ReplayHistorian::load(&RealFileSystem, &path).unwrap_err();

    assert!(matches!(err, InfraError::Replay { .. }));
}
