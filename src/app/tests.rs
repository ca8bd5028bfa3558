//! Application Shell Tests
//!
//! ## Test Scopes
//! - **Config**: Flag parsing, `.env` loading, derived addresses and timeouts, log levels.
//! - **Startup**: Loading the input file and serving it over a real socket.

#[cfg(test)]
mod tests {
    use crate::app::config::{load_dotenv_from, parse_log_level, Config};
    use crate::app::server::App;
    use clap::Parser;
    use std::io::Write;
    use std::time::Duration;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::{TcpListener, TcpStream};
    use tracing::Level;

    fn config_for(input: &std::path::Path) -> Config {
        Config::try_parse_from([
            "index-lookup",
            "--host",
            "127.0.0.1",
            "--port",
            "0",
            "--input-file-name",
            input.to_str().unwrap(),
        ])
        .unwrap()
    }

    // ============================================================
    // CONFIG TESTS
    // ============================================================

    #[test]
    fn test_flags_override_defaults() {
        let config = Config::try_parse_from([
            "index-lookup",
            "--port",
            "9000",
            "--host",
            "127.0.0.1",
            "--log-level",
            "debug",
            "--input-file-name",
            "data/values.txt",
            "--search-timeout-ms",
            "250",
        ])
        .unwrap();

        assert_eq!(config.bind_addr().to_string(), "127.0.0.1:9000");
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.input_file_name.to_str(), Some("data/values.txt"));
        assert_eq!(config.search_timeout(), Some(Duration::from_millis(250)));
    }

    #[test]
    fn test_zero_timeout_disables_deadline() {
        let config =
            Config::try_parse_from(["index-lookup", "--search-timeout-ms", "0"]).unwrap();
        assert_eq!(config.search_timeout(), None);
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        assert!(Config::try_parse_from(["index-lookup", "--port", "http"]).is_err());
    }

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(parse_log_level("DEBUG"), Some(Level::DEBUG));
        assert_eq!(parse_log_level("info"), Some(Level::INFO));
        assert_eq!(parse_log_level("Warn"), Some(Level::WARN));
        assert_eq!(parse_log_level("ERROR"), Some(Level::ERROR));
        assert_eq!(parse_log_level("verbose"), None);
        assert_eq!(parse_log_level(""), None);
    }

    #[test]
    fn test_dotenv_file_fills_environment() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "INDEX_LOOKUP_DOTENV_CHECK=from-file").unwrap();

        assert!(load_dotenv_from(file.path()).unwrap());
        assert_eq!(
            std::env::var("INDEX_LOOKUP_DOTENV_CHECK").as_deref(),
            Ok("from-file")
        );
    }

    #[test]
    fn test_missing_dotenv_file_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        assert!(!load_dotenv_from(&dir.path().join(".env")).unwrap());
    }

    #[test]
    fn test_malformed_dotenv_file_is_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "NOT A VALID LINE").unwrap();

        let err = load_dotenv_from(file.path()).unwrap_err();
        assert!(err.to_string().contains(file.path().to_str().unwrap()));
    }

    // ============================================================
    // STARTUP TESTS
    // ============================================================

    #[test]
    fn test_load_indices_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "10\n20\n30").unwrap();

        let app = App::new(config_for(file.path()));
        let indices = app.load_indices().unwrap();

        assert_eq!(indices.values(), &[10, 20, 30]);
    }

    #[test]
    fn test_load_indices_error_names_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "10\nnot-a-number").unwrap();

        let app = App::new(config_for(file.path()));
        let err = app.load_indices().unwrap_err();

        assert!(err.to_string().contains(file.path().to_str().unwrap()));
    }

    #[tokio::test]
    async fn test_serves_loaded_indices() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "1000\n1100\n1200\n1300").unwrap();

        let app = App::new(config_for(file.path()));
        let indices = app.load_indices().unwrap();
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let (stop_tx, stop_rx) = tokio::sync::oneshot::channel::<()>();
        let server = tokio::spawn(app.serve(listener, indices, async move {
            let _ = stop_rx.await;
        }));

        let mut stream = TcpStream::connect(addr).await.unwrap();
        stream
            .write_all(b"GET /endpoint/1200 HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n")
            .await
            .unwrap();
        let mut response = String::new();
        stream.read_to_string(&mut response).await.unwrap();

        assert!(response.starts_with("HTTP/1.1 200"), "{}", response);
        assert!(response.ends_with(r#"{"index":2,"value":1200}"#), "{}", response);

        stop_tx.send(()).unwrap();
        server.await.unwrap().unwrap();
    }
}
