use super::*;

#[test]
fn defaults_when_unset() {
    let cfg = ServerConfig::from_values(None, None).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.host.to_string(), DEFAULT_HOST);
    assert_eq!(cfg.addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let cfg = ServerConfig::from_values(Some("  "), Some("")).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.host.to_string(), DEFAULT_HOST);
}

#[test]
fn parses_overrides() {
    let cfg = ServerConfig::from_values(Some("127.0.0.1"), Some(" 8080 ")).unwrap();
    assert_eq!(cfg.addr().to_string(), "127.0.0.1:8080");
}

#[test]
fn accepts_ipv6_host() {
    let cfg = ServerConfig::from_values(Some("::1"), Some("9000")).unwrap();
    assert_eq!(cfg.addr().to_string(), "[::1]:9000");
}

#[test]
fn rejects_invalid_port() {
    let err = ServerConfig::from_values(None, Some("70000")).unwrap_err();
    assert_eq!(err, ConfigError::InvalidPort("70000".into()));
    assert_eq!(err.to_string(), "invalid PORT: 70000");
}

#[test]
fn rejects_non_numeric_port() {
    let err = ServerConfig::from_values(None, Some("http")).unwrap_err();
    assert_eq!(err, ConfigError::InvalidPort("http".into()));
}

#[test]
fn rejects_invalid_host() {
    let err = ServerConfig::from_values(Some("localhost"), None).unwrap_err();
    assert_eq!(err, ConfigError::InvalidHost("localhost".into()));
}
