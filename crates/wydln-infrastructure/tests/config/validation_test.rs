//! Configuration Validation Tests

use figment::Jail;
use wydln_domain::Error;
use wydln_infrastructure::config::ConfigLoader;

#[test]
fn test_empty_server_name_is_rejected() {
    Jail::expect_with(|jail| {
        jail.create_file("wydln.toml", "[server]\nname = \"  \"\n")?;

        let err = ConfigLoader::new().load().unwrap_err();
        assert!(matches!(err, Error::Configuration { .. }));
        assert!(err.to_string().contains("Server name"));
        Ok(())
    });
}

#[test]
fn test_invalid_log_level_is_rejected() {
    Jail::expect_with(|jail| {
        jail.set_env("WYDLN_LOGGING__LEVEL", "chatty");

        let err = ConfigLoader::new().load().unwrap_err();
        assert!(err.to_string().contains("Invalid log level"));
        Ok(())
    });
}

#[test]
fn test_malformed_value_is_a_configuration_error() {
    Jail::expect_with(|jail| {
        jail.create_file("wydln.toml", "[logging]\njson_format = \"sometimes\"\n")?;

        let err = ConfigLoader::new().load().unwrap_err();
        assert!(matches!(err, Error::Configuration { .. }));
        Ok(())
    });
}
