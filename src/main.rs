use clap::Parser;
use crm_server_lib::api::config::{Cli, Command, ServeConfig};
use crm_server_lib::api::graphql::build_schema;
use crm_server_lib::api::server;
use crm_server_lib::data::database::Database;
use crm_server_lib::jobs::client::HttpCrmClient;
use crm_server_lib::jobs::reminders::REMINDERS_PROCESSED_MESSAGE;
use crm_server_lib::jobs::{heartbeat, reminders, restock};
use crm_server_lib::services::CrmServices;
use crm_server_lib::utils::clock::{Clock, SystemClock};
use std::error::Error;
use std::process::ExitCode;

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(false)
        .try_init();
}

async fn serve(config: ServeConfig) -> Result<(), Box<dyn Error>> {
    let db = Database::new(&config.database_url)?;
    let schema = build_schema(CrmServices::from_database(db));

    server::start(config.bind_addr, schema).await?;
    Ok(())
}

async fn run(command: Command) -> Result<(), Box<dyn Error>> {
    let clock = SystemClock;

    match command {
        Command::Serve(config) => serve(config).await?,
        Command::Heartbeat { client, log_file } => {
            let client = HttpCrmClient::new(client.endpoint);
            heartbeat::run(&client, &log_file, clock.now()).await?;
        }
        Command::Restock { client, log_file } => {
            let client = HttpCrmClient::new(client.endpoint);
            let report = restock::run(&client, &log_file, clock.now()).await?;
            println!("{}", report.message);
        }
        Command::Reminders {
            client,
            log_file,
            days,
        } => {
            let client = HttpCrmClient::new(client.endpoint);
            reminders::run(&client, &log_file, clock.now(), days).await?;
            println!("{}", REMINDERS_PROCESSED_MESSAGE);
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    init_logging();

    let cli = Cli::parse();
    match run(cli.command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
