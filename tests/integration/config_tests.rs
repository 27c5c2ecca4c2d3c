//! Configuration integration tests
//!
//! Loading from YAML files and validation across all sections.

#[cfg(test)]
mod tests {
    use std::io::Write;
    use surf_spots::config::{Config, DatabaseConfig, Validate};
    use surf_spots::core::import::ValidationMode;
    use surf_spots::utils::error::SpotsError;
    use tempfile::NamedTempFile;

    fn yaml_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    // ==================== Loading ====================

    #[tokio::test]
    async fn test_empty_file_uses_defaults() {
        let file = yaml_file("{}\n");
        let config = Config::from_file(file.path()).await.unwrap();

        assert_eq!(config.import.batch_size, 500);
        assert_eq!(config.import.validation, ValidationMode::FailFast);
        assert_eq!(config.import.delimiter, ',');
        assert!(config.import.timeout_secs.is_none());
        assert!(config.geocoding.enabled);
        assert_eq!(config.logging.level, "info");
    }

    #[tokio::test]
    async fn test_partial_sections() {
        let file = yaml_file("import:\n  validation: collect_all\n");
        let config = Config::from_file(file.path()).await.unwrap();

        assert_eq!(config.import.validation, ValidationMode::CollectAll);
        assert_eq!(config.import.batch_size, 500);
    }

    #[tokio::test]
    async fn test_invalid_yaml() {
        let file = yaml_file("import: [not, a, map\n");
        let err = Config::from_file(file.path()).await.unwrap_err();
        assert!(matches!(err, SpotsError::Config(_)));
    }

    #[tokio::test]
    async fn test_unknown_validation_mode() {
        let file = yaml_file("import:\n  validation: lenient\n");
        assert!(Config::from_file(file.path()).await.is_err());
    }

    // ==================== Validation ====================

    #[test]
    fn test_postgres_allows_larger_batches_than_sqlite() {
        let mut config = Config::default();
        config.import.batch_size = 5000;

        config.database.url = "sqlite::memory:".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("Import config error"));

        config.database = DatabaseConfig::from_parts("localhost", 5432, "surfer", "pw", "spots");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_unsupported_database() {
        let mut config = Config::default();
        config.database.url = "mysql://localhost/spots".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("Database config error"));
    }

    #[test]
    fn test_rejects_bad_geocoding_url() {
        let mut config = Config::default();
        config.geocoding.base_url = "not a url".to_string();
        assert!(config.geocoding.validate().is_err());
        assert!(config.validate().is_err());

        config.geocoding.enabled = false;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_zero_timeout() {
        let mut config = Config::default();
        config.import.timeout_secs = Some(0);
        assert!(config.validate().is_err());
    }
}
