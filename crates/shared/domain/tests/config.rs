use lipi_domain::config::{ApiConfig, NormalizerConfig, ServerConfig};
use lipi_domain::constants::{ENV_PREFIX, WELCOME_MESSAGE};
use serde_json::json;
use std::net::{IpAddr, Ipv4Addr};

#[test]
fn config_defaults_are_sane() {
    let server = ServerConfig::default();
    assert_eq!(server.address, IpAddr::V4(Ipv4Addr::UNSPECIFIED));
    assert_eq!(server.port, 4590);
    assert_eq!(server.request_timeout_secs, 30);
    assert_eq!(server.body_limit_bytes, 1_048_576);
    assert!(server.ssl.is_none());

    assert_eq!(NormalizerConfig::default().max_text_chars, 100_000);
}

#[test]
fn api_config_deserializes_partial_input() {
    let raw = json!({
        "server": { "address": "::", "port": 8080, "ssl": { "cert": "/etc/lipi/cert.pem" } },
        "normalizer": { "max_text_chars": 500 }
    });

    let cfg: ApiConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.server.port, 8080);
    assert_eq!(cfg.server.request_timeout_secs, 30);
    assert_eq!(cfg.normalizer.max_text_chars, 500);

    let ssl = cfg.server.ssl.as_ref().expect("ssl section");
    assert_eq!(ssl.cert, std::path::PathBuf::from("/etc/lipi/cert.pem"));
    assert_eq!(ssl.key, std::path::PathBuf::from("key.pem"));
}

#[test]
fn empty_document_yields_defaults() {
    let cfg: ApiConfig = serde_json::from_value(json!({})).expect("config deserialize");
    assert_eq!(cfg.server.port, 4590);
    assert_eq!(cfg.normalizer.max_text_chars, 100_000);
}

#[test]
fn mutation_copies_on_write() {
    let original = ApiConfig::default();
    let mut changed = original.clone();
    changed.server.port = 9000;

    assert_eq!(original.server.port, 4590);
    assert_eq!(changed.server.port, 9000);
}

#[test]
fn constants_are_stable() {
    assert_eq!(ENV_PREFIX, "LIPI");
    assert_eq!(WELCOME_MESSAGE, "Welcome to the Text Normalization API");
}
