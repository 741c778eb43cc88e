#[cfg(test)]
mod tests {
    use super::super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_defaults_use_static_mode() {
        let config = Config::default();
        assert_eq!(config.predictor.mode, PredictorMode::Static);
        assert_eq!(config.server.port, 3001);
        assert_eq!(config.session.cookie_name, "essentialai_session");
        assert!(config.predictor.timeout().is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config = Config::from_toml_str(
            r#"
            [predictor]
            mode = "remote"
            endpoint = "https://example.gradio.live/"
            timeout_secs = 15
            "#,
        )
        .unwrap();
        assert_eq!(config.predictor.mode, PredictorMode::Remote);
        assert_eq!(config.predictor.timeout(), Some(Duration::from_secs(15)));
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.session.ttl_minutes, 60);
    }

    #[test]
    fn test_unknown_mode_is_rejected() {
        let err = Config::from_toml_str("[predictor]\nmode = \"oracle\"\n");
        assert!(err.is_err());
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> = [
            ("ESSENTIALAI_PREDICT_URL", "http://localhost:7860/"),
            ("ESSENTIALAI_PREDICT_MODE", "Remote"),
            ("ESSENTIALAI_PORT", "8080"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_overrides(|k| vars.get(k).map(|v| v.to_string())).unwrap();
        assert_eq!(config.predictor.endpoint, "http://localhost:7860/");
        assert_eq!(config.predictor.mode, PredictorMode::Remote);
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
    }

    #[test]
    fn test_bad_port_override_fails() {
        let mut config = Config::default();
        let res = config.apply_overrides(|k| (k == "ESSENTIALAI_PORT").then(|| "eighty".to_string()));
        assert!(res.is_err());
    }

    #[test]
    fn test_remote_mode_requires_http_endpoint() {
        let mut config = Config::default();
        config.predictor.mode = PredictorMode::Remote;
        config.predictor.endpoint = "ftp://models.example.org/".to_string();
        assert!(config.validate().is_err());

        config.predictor.endpoint = "not a url".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_ttl_is_invalid() {
        let mut config = Config::default();
        config.session.ttl_minutes = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_huge_ttl_saturates() {
        let mut config = Config::default();
        config.session.ttl_minutes = u64::MAX;
        assert!(config.validate().is_ok());
        assert_eq!(config.session.ttl(), Duration::from_secs(u64::MAX));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[server]\nport = 4000\n\n[session]\nttl_minutes = 5").unwrap();
        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.server.port, 4000);
        assert_eq!(config.session.ttl(), Duration::from_secs(300));
    }

    #[test]
    fn test_load_from_missing_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Config::load_from(dir.path().join("nope.toml")).is_err());
    }
}
