#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use orchestrator_server::config;

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
server:
  listen: "0.0.0.0:8080"
registry:
  id_spaec: 100 # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.client_code().http_status(), 400);
}

#[test]
fn ok_minimal_config() {
    let cfg = config::load_from_str("version: 1\n").expect("must parse");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.server.listen, "0.0.0.0:8080");
    assert_eq!(cfg.registry.id_space, 1_000_000);
}

#[test]
fn rejects_unknown_version() {
    let err = config::load_from_str("version: 2\n").expect_err("must fail");
    assert!(matches!(
        err,
        orchestrator_core::OrchestratorError::UnsupportedVersion
    ));
}

#[test]
fn rejects_bad_listen_and_tiny_id_space() {
    let bad_listen = "version: 1\nserver:\n  listen: \"not-an-addr\"\n";
    assert!(config::load_from_str(bad_listen).is_err());

    let tiny = "version: 1\nregistry:\n  id_space: 1\n";
    assert!(config::load_from_str(tiny).is_err());
}

#[test]
fn missing_file_falls_back_to_defaults() {
    let cfg = config::load_or_default("does/not/exist/orchestrator.yaml").unwrap();
    assert_eq!(cfg.server.listen_addr().unwrap().port(), 8080);
}
