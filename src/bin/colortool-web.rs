//! ColorTool Web Server Binary
//!
//! Serves the converter as a small JSON API.
//!
//! # Usage
//!
//! ```bash
//! # Start with default settings (127.0.0.1:3001)
//! colortool-web
//!
//! # Listen on all interfaces, port 8080
//! colortool-web --host 0.0.0.0 --port 8080
//! ```

use std::net::{IpAddr, SocketAddr};

use clap::Parser;
use tracing::warn;

use colortool::config::Config;
use colortool::{logging, web};

/// ColorTool Web Server - JSON API for color conversion and contrast
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value = "3001")]
    port: u16,

    /// Host to bind to (IPv4 or IPv6)
    #[arg(long, default_value = "127.0.0.1")]
    host: IpAddr,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn listen_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    logging::init(args.verbose, "info");

    // Unreadable config falls back to defaults
    let config = Config::load().unwrap_or_else(|e| {
        warn!("Using default configuration: {e:#}");
        Config::default()
    });

    web::run_server(config, args.listen_addr()).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_listen_addr() {
        let args = Args::try_parse_from(["colortool-web"]).unwrap();
        assert_eq!(args.listen_addr().to_string(), "127.0.0.1:3001");
    }

    #[test]
    fn test_ipv6_host() {
        let args =
            Args::try_parse_from(["colortool-web", "--host", "::1", "--port", "8080"]).unwrap();
        assert_eq!(args.listen_addr().to_string(), "[::1]:8080");
    }

    #[test]
    fn test_invalid_host_rejected() {
        assert!(Args::try_parse_from(["colortool-web", "--host", "localhost:80"]).is_err());
    }
}
