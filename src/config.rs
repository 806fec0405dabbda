use serde::Deserialize;
use std::net::SocketAddr;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub resources: ResourcesConfig,
    pub performance: PerformanceConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

/// Where static content comes from.
#[derive(Debug, Deserialize, Clone)]
pub struct ResourcesConfig {
    /// Directory served to clients, resolved against the working directory.
    pub root: String,
    /// File names tried, in order, when a request targets a directory.
    pub index_files: Vec<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PerformanceConfig {
    /// Keep-alive is enabled when nonzero.
    pub keep_alive_timeout: u64,
    pub read_timeout: u64,
    pub write_timeout: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub access_log: bool,
}

impl Config {
    /// Load configuration from an optional `config.toml` over built-in
    /// defaults. The defaults describe the stock deployment: port 3008 on
    /// all interfaces, serving `./public`, quiet except for the startup
    /// line. No environment variables or CLI flags are consulted.
    pub fn load() -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name("config").required(false))
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3008)?
            .set_default("resources.root", "public")?
            .set_default("resources.index_files", vec!["index.html".to_string()])?
            .set_default("performance.keep_alive_timeout", 75)?
            .set_default("performance.read_timeout", 30)?
            .set_default("performance.write_timeout", 30)?
            .set_default("logging.access_log", false)?
            .build()?;

        settings.try_deserialize()
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid listen address: {e}"))
    }
}

/// Immutable per-process state shared across connections.
pub struct AppState {
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self { config }
    }
}
