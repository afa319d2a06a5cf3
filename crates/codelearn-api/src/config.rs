//! API server configuration.

use clap::Parser;

/// Port used when neither `--port` nor the `PORT` environment variable is set.
pub const DEFAULT_PORT: u16 = 5000;

/// Learn to Code API server command line arguments.
#[derive(Debug, Parser)]
#[command(name = "codelearn-api")]
#[command(about = "HTTP/REST API server for the Learn to Code platform")]
#[command(version)]
pub struct Args {
    /// Port to listen on. Falls back to the PORT environment variable.
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Address to bind to.
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,
}

/// API server configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
}

impl From<&Args> for ApiConfig {
    fn from(args: &Args) -> Self {
        Self {
            host: args.host.clone(),
            port: resolve_port(args.port, std::env::var("PORT").ok().as_deref()),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ApiConfig {
    /// Socket address string to bind the listener to.
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Resolve the listen port: CLI flag, then PORT environment variable,
/// then the default.
fn resolve_port(flag: Option<u16>, env: Option<&str>) -> u16 {
    flag.or_else(|| env.and_then(|value| value.parse().ok()))
        .unwrap_or(DEFAULT_PORT)
}
