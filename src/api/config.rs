use clap::{Args, Parser, Subcommand};
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "crm_server", version, about = "CRM GraphQL server and maintenance jobs")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Serve the GraphQL API
    Serve(ServeConfig),
    /// Append a liveness line and probe the `hello` query
    Heartbeat {
        #[command(flatten)]
        client: ClientConfig,
        #[arg(long, env = "CRM_HEARTBEAT_LOG", default_value = "/tmp/crm_heartbeat_log.txt")]
        log_file: PathBuf,
    },
    /// Run `updateLowStockProducts` and log every restocked product
    Restock {
        #[command(flatten)]
        client: ClientConfig,
        #[arg(long, env = "CRM_RESTOCK_LOG", default_value = "/tmp/low_stock_updates_log.txt")]
        log_file: PathBuf,
    },
    /// Log a reminder for every order placed in the last week
    Reminders {
        #[command(flatten)]
        client: ClientConfig,
        #[arg(long, env = "CRM_REMINDER_LOG", default_value = "/tmp/order_reminders_log.txt")]
        log_file: PathBuf,
        #[arg(long, default_value_t = 7)]
        days: i64,
    },
}

#[derive(Debug, Clone, Args)]
pub struct ServeConfig {
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: String,
    #[arg(long, env = "CRM_BIND_ADDR", default_value = "127.0.0.1:8000")]
    pub bind_addr: SocketAddr,
}

#[derive(Debug, Clone, Args)]
pub struct ClientConfig {
    /// GraphQL endpoint the job talks to
    #[arg(long, env = "CRM_GRAPHQL_ENDPOINT", default_value = "http://localhost:8000/graphql")]
    pub endpoint: String,
}
