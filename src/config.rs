use crate::error::{config_error, env_error, AppResult};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::net::SocketAddr;
use std::path::Path;
use url::Url;

/// Endpoint of the external parsing service
pub const DEFAULT_PARSE_SERVICE_URL: &str = "http://127.0.0.1:8000/parse-events";

/// Address the web server binds to
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

/// Config file read when `FLOWDATE_CONFIG` is not set
pub const DEFAULT_CONFIG_FILE: &str = "config/flowdate.toml";

/// Main configuration structure for the web server
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Socket address to listen on
    pub bind_addr: SocketAddr,
    /// Full URL of the parsing service's `/parse-events` endpoint
    pub parse_service_url: String,
    /// Directory served under `/assets`
    pub assets_dir: String,
    /// Locale for user-facing copy
    pub locale: String,
    /// Maximum number of live playground sessions
    pub max_sessions: usize,
    /// How long a form submission waits for the parse to settle before rendering
    pub render_grace_ms: u64,
}

/// Optional overrides read from the TOML config file
#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    bind_addr: Option<SocketAddr>,
    parse_service_url: Option<String>,
    assets_dir: Option<String>,
    locale: Option<String>,
    max_sessions: Option<usize>,
    render_grace_ms: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            parse_service_url: DEFAULT_PARSE_SERVICE_URL.to_string(),
            assets_dir: "assets".to_string(),
            locale: "en".to_string(),
            max_sessions: 1024,
            render_grace_ms: 1500,
        }
    }
}

impl Config {
    /// Load configuration from defaults, the config file and the environment
    pub fn load() -> AppResult<Self> {
        // Load .env file if it exists
        dotenv().ok();

        let mut config = Config::default();

        let file = env::var("FLOWDATE_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());
        if Path::new(&file).exists() {
            let content = fs::read_to_string(&file)?;
            config.apply_file(toml::from_str(&content)?);
        }

        config.apply_env()?;
        config.validate()?;

        Ok(config)
    }

    /// Parse a TOML document into a config, starting from defaults
    pub fn from_toml(content: &str) -> AppResult<Self> {
        let mut config = Config::default();
        config.apply_file(toml::from_str(content)?);
        config.validate()?;
        Ok(config)
    }

    fn apply_file(&mut self, file: FileConfig) {
        if let Some(bind_addr) = file.bind_addr {
            self.bind_addr = bind_addr;
        }
        if let Some(url) = file.parse_service_url {
            self.parse_service_url = url;
        }
        if let Some(dir) = file.assets_dir {
            self.assets_dir = dir;
        }
        if let Some(locale) = file.locale {
            self.locale = locale;
        }
        if let Some(max) = file.max_sessions {
            self.max_sessions = max;
        }
        if let Some(grace) = file.render_grace_ms {
            self.render_grace_ms = grace;
        }
    }

    fn apply_env(&mut self) -> AppResult<()> {
        if let Ok(bind) = env::var("FLOWDATE_BIND") {
            self.bind_addr = bind
                .parse()
                .map_err(|_| env_error("FLOWDATE_BIND", "expected host:port"))?;
        }

        // PORT only overrides the port, keeping the configured host
        if let Ok(port) = env::var("PORT") {
            let port = port
                .parse::<u16>()
                .map_err(|_| env_error("PORT", "expected a port number"))?;
            self.bind_addr.set_port(port);
        }

        if let Ok(url) = env::var("FLOWDATE_PARSE_URL") {
            self.parse_service_url = url;
        }
        if let Ok(dir) = env::var("FLOWDATE_ASSETS_DIR") {
            self.assets_dir = dir;
        }
        if let Ok(locale) = env::var("FLOWDATE_LOCALE") {
            self.locale = locale;
        }
        if let Ok(max) = env::var("FLOWDATE_MAX_SESSIONS") {
            self.max_sessions = max
                .parse()
                .map_err(|_| env_error("FLOWDATE_MAX_SESSIONS", "expected a positive integer"))?;
        }
        if let Ok(grace) = env::var("FLOWDATE_RENDER_GRACE_MS") {
            self.render_grace_ms = grace
                .parse()
                .map_err(|_| env_error("FLOWDATE_RENDER_GRACE_MS", "expected milliseconds"))?;
        }

        Ok(())
    }

    fn validate(&self) -> AppResult<()> {
        self.parse_service_url()?;
        if self.max_sessions == 0 {
            return Err(config_error("max_sessions must be at least 1"));
        }
        Ok(())
    }

    /// The parsing endpoint as a URL
    pub fn parse_service_url(&self) -> AppResult<Url> {
        let url = Url::parse(&self.parse_service_url).map_err(|e| {
            config_error(&format!("Invalid parse service URL {}: {}", self.parse_service_url, e))
        })?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(config_error(&format!("Unsupported parse service scheme: {}", other))),
        }
    }
}
