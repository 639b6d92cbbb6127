use super::*;

#[test]
fn defaults_bind_all_interfaces_on_3000() {
    let cfg = HostConfig::from_lookup(|_| None).unwrap();
    assert_eq!(cfg, HostConfig::default());
    assert_eq!(cfg.addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn reads_host_and_port() {
    let cfg = HostConfig::from_lookup(|key| match key {
        "HOST" => Some("127.0.0.1".to_owned()),
        "PORT" => Some(" 8080 ".to_owned()),
        _ => None,
    })
    .unwrap();
    assert_eq!(cfg.addr().to_string(), "127.0.0.1:8080");
}

#[test]
fn rejects_malformed_port() {
    let err = HostConfig::from_lookup(|key| (key == "PORT").then(|| "http".to_owned())).unwrap_err();
    assert_eq!(err, HostConfigError::Invalid { key: "PORT", value: "http".to_owned() });
}
