//! CLI argument definitions using clap
//!
//! Commands:
//! - quotebook serve [--host <host>] [--port <port>] [database flags]
//! - quotebook ping [database flags]
//!
//! Every flag falls back to an environment variable.

use clap::{Args, Parser, Subcommand};
use sqlx::postgres::PgSslMode;

use crate::http_server::config::{DEFAULT_HOST, DEFAULT_PORT};
use crate::http_server::HttpServerConfig;
use crate::store::config::parse_ssl_mode;
use crate::store::DatabaseConfig;

/// quotebook - browse and curate a quotes collection
#[derive(Parser, Debug)]
#[command(name = "quotebook")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Serve the web application
    Serve(ServeArgs),

    /// Connect to the database, run one query and exit
    Ping(DatabaseArgs),
}

/// Database connection flags
#[derive(Args, Debug, Clone)]
pub struct DatabaseArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DB_URL")]
    pub database_url: String,

    /// TLS mode: disable, allow, prefer, require, verify-ca, verify-full
    #[arg(long, env = "DB_SSL_MODE", default_value = "prefer", value_parser = parse_ssl_mode)]
    pub ssl_mode: PgSslMode,

    /// Maximum pooled connections
    #[arg(long, env = "DB_MAX_CONNECTIONS", default_value_t = 5)]
    pub max_connections: u32,
}

impl DatabaseArgs {
    pub fn to_config(&self) -> DatabaseConfig {
        DatabaseConfig {
            url: self.database_url.clone(),
            ssl_mode: self.ssl_mode,
            max_connections: self.max_connections,
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct ServeArgs {
    #[command(flatten)]
    pub database: DatabaseArgs,

    /// Address to bind
    #[arg(long, env = "HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,
}

impl ServeArgs {
    pub fn http_config(&self) -> HttpServerConfig {
        HttpServerConfig {
            host: self.host.clone(),
            port: self.port,
        }
    }
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
