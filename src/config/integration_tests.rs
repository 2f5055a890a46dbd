// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

#[cfg(test)]
mod integration_tests {
    use std::io::Write;

    use crate::config::{load_and_validate_config, load_config, Registry, StreamMode};
    use crate::engine::{Strategy, StreamDriver};
    use crate::errors::ConfigError;

    fn temp_config(suffix: &str, content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    /// The shipped YAML example loads and validates
    #[test]
    fn test_example_yaml_loading() {
        let config = load_and_validate_config("configs/sttr.yaml").unwrap();

        assert_eq!(config.log_filter.as_deref(), Some("sttr=info"));
        assert_eq!(config.streaming.chunk_size, Some(8192));
        assert_eq!(config.streaming.mode, StreamMode::Preferred);
    }

    /// The shipped TOML example loads and validates
    #[test]
    fn test_example_toml_loading() {
        let config = load_and_validate_config("configs/sttr.toml").unwrap();

        assert_eq!(config.log_filter.as_deref(), Some("sttr=debug"));
        assert_eq!(config.streaming.chunk_size, Some(1024));
        assert_eq!(config.streaming.mode, StreamMode::Off);
    }

    #[test]
    fn test_yaml_and_toml_agree() {
        let yaml = temp_config(".yml", "streaming:\n  chunk_size: 16\n  mode: auto\n");
        let toml = temp_config(".toml", "[streaming]\nchunk_size = 16\nmode = \"auto\"\n");

        assert_eq!(
            load_config(yaml.path()).unwrap(),
            load_config(toml.path()).unwrap()
        );
    }

    #[test]
    fn test_empty_files_use_defaults() {
        for suffix in [".yaml", ".toml"] {
            let file = temp_config(suffix, "");
            let config = load_and_validate_config(file.path()).unwrap();
            assert_eq!(config, Default::default(), "{}", suffix);
        }
    }

    #[test]
    fn test_out_of_range_chunk_size_is_rejected() {
        let file = temp_config(".yaml", "streaming:\n  chunk_size: 0\n");
        assert!(load_config(file.path()).is_ok());

        let err = load_and_validate_config(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidChunkSize { requested: 0, .. }));
    }

    #[test]
    fn test_unsupported_and_missing_files() {
        let file = temp_config(".json", "{}");
        assert!(matches!(
            load_config(file.path()),
            Err(ConfigError::UnsupportedFormat(_))
        ));

        assert!(matches!(
            load_config("configs/does-not-exist.yaml"),
            Err(ConfigError::Io { .. })
        ));
    }

    #[test]
    fn test_malformed_files_surface_parser_errors() {
        let yaml = temp_config(".yaml", "streaming: [not, a, map]\n");
        assert!(matches!(load_config(yaml.path()), Err(ConfigError::Yaml(_))));

        let toml = temp_config(".toml", "[streaming]\nmode = \"sometimes\"\n");
        assert!(matches!(load_config(toml.path()), Err(ConfigError::Toml(_))));
    }

    /// Loaded options drive strategy selection
    #[tokio::test]
    async fn test_driver_built_from_loaded_options() {
        let registry = Registry::builtin();
        let upper = registry.lookup("upper").unwrap();

        let off = load_config("configs/sttr.toml").unwrap();
        let driver = StreamDriver::from_options(&off.streaming);
        assert_eq!(driver.select_strategy(upper), Strategy::Buffered);

        let preferred = load_config("configs/sttr.yaml").unwrap();
        let driver = StreamDriver::from_options(&preferred.streaming);
        assert_eq!(driver.select_strategy(upper), Strategy::Chunked);
        assert_eq!(
            driver.select_strategy(registry.lookup("count-words").unwrap()),
            Strategy::Buffered
        );

        let mut output = Vec::new();
        driver
            .run(upper, &b"config driven"[..], &mut output, &[])
            .await
            .unwrap();
        assert_eq!(output, b"CONFIG DRIVEN");
    }
}
