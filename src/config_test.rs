use std::collections::HashMap;

use super::*;

fn config_from(pairs: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
    let map = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect::<HashMap<_, _>>();
    ServerConfig::from_lookup(|key| map.get(key).cloned())
}

#[test]
fn defaults_apply_when_unset() {
    let cfg = config_from(&[]).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.assets_dir, PathBuf::from(DEFAULT_ASSETS_DIR));
}

#[test]
fn overrides_are_parsed() {
    let cfg = config_from(&[("PORT", " 8080 "), ("ASSETS_DIR", "/srv/cmp/assets")]).unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.assets_dir, PathBuf::from("/srv/cmp/assets"));
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let cfg = config_from(&[("PORT", ""), ("ASSETS_DIR", "  ")]).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.assets_dir, PathBuf::from(DEFAULT_ASSETS_DIR));
}

#[test]
fn invalid_port_is_an_error() {
    for raw in ["http", "70000", "-1", "0"] {
        assert_eq!(
            config_from(&[("PORT", raw)]),
            Err(ConfigError::InvalidPort(raw.to_owned())),
            "{raw}"
        );
    }
}

#[test]
fn secrets_are_never_echoed() {
    assert_eq!(redact(""), "<unset>");
    assert_eq!(redact("sk-live-123"), "<redacted>");
}
