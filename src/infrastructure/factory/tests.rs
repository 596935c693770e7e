//! Tests for factory functions.

use crate::infrastructure::config::settings::Config;
use crate::infrastructure::factory::{model, session};
use crate::testkit::config::isolated as config_with_key_file;

mod model_factory {
    use super::*;

    #[test]
    fn builds_gemini_client() {
        let client = model::build_model(&Config::default()).unwrap();
        assert_eq!(client.name(), "gemini");
    }

    #[test]
    fn rejects_invalid_base() {
        let mut config = Config::default();
        config.gemini.api_base = "::".into();
        assert!(model::build_model(&config).is_err());
    }

    #[test]
    fn analyzer_carries_analysis_config() {
        let mut config = Config::default();
        config.analysis.temperature = 0.7;
        let client = model::build_model(&config).unwrap();
        let analyzer = model::build_analyzer(&config, client);
        assert!((analyzer.config().temperature - 0.7).abs() < f64::EPSILON);
    }
}

mod session_factory {
    use super::*;

    #[test]
    fn selector_uses_configured_key_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("api_key");
        std::fs::write(&path, "stored-key").unwrap();

        let config = config_with_key_file(path);
        let selector = session::build_key_selector(&config).unwrap();
        assert_eq!(selector.name(), "key_file");
        assert!(selector.has_selected_key().unwrap());
    }

    #[test]
    fn gate_without_env_key_consults_key_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_with_key_file(dir.path().join("api_key"));
        if config.credential.env_key().is_some() {
            // API_KEY is set in this environment; the fallback would win.
            return;
        }

        let gate = session::build_credentials(&config, session::build_key_selector(&config));
        assert!(gate.has_selector());
        assert!(!gate.check().unwrap());

        std::fs::write(dir.path().join("api_key"), "stored-key").unwrap();
        assert!(gate.check().unwrap());
    }

    #[test]
    fn session_starts_idle() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_with_key_file(dir.path().join("api_key"));
        let session = session::build_session(&config).unwrap();

        let state = session.snapshot();
        assert!(!state.loading);
        assert!(state.result.is_none());
        assert!(state.error.is_none());
    }
}
