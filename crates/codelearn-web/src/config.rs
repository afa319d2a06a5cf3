//! Web server configuration.

use clap::Parser;

/// Learn to Code web frontend command line arguments.
#[derive(Debug, Parser)]
#[command(name = "codelearn-web")]
#[command(about = "Learn to Code - web frontend server")]
#[command(version)]
pub struct Args {
    /// Port to listen on
    #[arg(short, long, default_value_t = 3000)]
    pub port: u16,

    /// Address to bind to (localhost only by default)
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Don't open browser automatically
    #[arg(long, default_value_t = false)]
    pub no_open: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

/// Web server configuration.
#[derive(Debug, Clone)]
pub struct WebConfig {
    pub host: String,
    pub port: u16,
    pub open_browser: bool,
}

impl From<Args> for WebConfig {
    fn from(args: Args) -> Self {
        Self {
            host: args.host,
            port: args.port,
            open_browser: !args.no_open,
        }
    }
}

impl WebConfig {
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn base_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_addresses() {
        let config = WebConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
            open_browser: true,
        };
        assert_eq!(config.listen_addr(), "127.0.0.1:3000");
        assert_eq!(config.base_url(), "http://127.0.0.1:3000");
    }

    #[test]
    fn test_no_open_flag() {
        let args = Args::parse_from(["codelearn-web", "--no-open"]);
        let config = WebConfig::from(args);
        assert!(!config.open_browser);
        assert_eq!(config.port, 3000);
    }
}
