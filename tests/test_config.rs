use beacon::config::Config;

#[test]
fn test_empty_config_uses_defaults() {
    let cfg: Config = serde_yaml::from_str("{}").unwrap();

    assert_eq!(cfg.server.port, 8080);
    assert!(cfg.server.workers >= 1);
    assert!(cfg.tls.is_none());
}

#[test]
fn test_partial_server_section() {
    let cfg: Config = serde_yaml::from_str("server:\n  port: 9000\n").unwrap();

    assert_eq!(cfg.server.port, 9000);
    assert!(cfg.server.workers >= 1);
}

#[test]
fn test_tls_section_selects_tls() {
    let yaml = "
server:
  port: 8443
  workers: 2
tls:
  certificate: certs/chain.pem
  private_key: certs/key.pem
";
    let cfg: Config = serde_yaml::from_str(yaml).unwrap();

    let tls = cfg.tls.expect("tls section missing");
    assert_eq!(tls.certificate.to_str().unwrap(), "certs/chain.pem");
    assert_eq!(tls.private_key.to_str().unwrap(), "certs/key.pem");
    assert_eq!(cfg.server.workers, 2);
}
