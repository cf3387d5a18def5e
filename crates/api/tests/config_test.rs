use pretty_assertions::assert_eq;
use timetable_api::config::ApiConfig;
use tracing::Level;

#[test]
fn test_server_addr_formatting() {
    let config = ApiConfig {
        host: "127.0.0.1".to_string(),
        port: 8080,
        database_url: "postgres://localhost/timetable".to_string(),
        log_level: Level::INFO,
        cors_origins: None,
        request_timeout: 30,
    };

    assert_eq!(config.server_addr(), "127.0.0.1:8080");
}
