// src/main.rs
//
// Command line front end for the facility directory.

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use facility_lib::{
    api::{self, ApiResponse},
    models::{FindNearestRequest, NumericInput, RegisterRequest},
    repository::{FacilityRepository, InMemoryFacilityRepository, PostgresFacilityRepository},
    utils::{
        db_connect::{connect, get_pool_status, DbConfig},
        env::load_env,
    },
    ProximityRanker, RegistrationService,
};
use log::{debug, info};

const EXIT_STORAGE_FAILURE: u8 = 1;
const EXIT_VALIDATION_FAILURE: u8 = 2;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Use a throwaway in-memory directory instead of PostgreSQL
    #[arg(long, global = true)]
    in_memory: bool,

    #[command(subcommand)]
    command: Command,
}

// Values are taken as raw text so the validator reports bad input, not clap.
#[derive(Subcommand)]
enum Command {
    /// Add a facility to the directory
    Register {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        address: Option<String>,
        #[arg(long, allow_hyphen_values = true)]
        latitude: Option<String>,
        #[arg(long, allow_hyphen_values = true)]
        longitude: Option<String>,
    },
    /// List facilities nearest to a point
    Nearest {
        #[arg(long, allow_hyphen_values = true)]
        latitude: Option<String>,
        #[arg(long, allow_hyphen_values = true)]
        longitude: Option<String>,
        /// Maximum number of results (1-100, default 10)
        #[arg(long, allow_hyphen_values = true)]
        limit: Option<String>,
    },
    /// Print a liveness message
    Status,
    /// Create the facilities table if it is missing
    InitSchema,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    env_logger::init();
    load_env();
    let cli = Cli::parse();

    if let Command::Status = cli.command {
        println!("{}", api::status_message());
        return Ok(ExitCode::SUCCESS);
    }

    let repository: Arc<dyn FacilityRepository> = if cli.in_memory {
        info!("Using in-memory facility repository; nothing will be persisted");
        Arc::new(InMemoryFacilityRepository::new())
    } else {
        let db_config = DbConfig::from_env();
        db_config.log_config();
        let pool = connect(&db_config)
            .await
            .context("Failed to connect to database")?;
        let (connections, idle) = get_pool_status(&pool);
        debug!("DB pool: {} connections, {} idle", connections, idle);

        let postgres = PostgresFacilityRepository::new(pool);
        if let Command::InitSchema = cli.command {
            postgres.ensure_schema().await?;
            return Ok(ExitCode::SUCCESS);
        }
        Arc::new(postgres)
    };

    let response = match cli.command {
        Command::Register {
            name,
            address,
            latitude,
            longitude,
        } => {
            let service = RegistrationService::new(repository);
            let request = RegisterRequest {
                name,
                address,
                latitude: latitude.map(NumericInput::Text),
                longitude: longitude.map(NumericInput::Text),
            };
            api::handle_register(&service, &request).await
        }
        Command::Nearest {
            latitude,
            longitude,
            limit,
        } => {
            let ranker = ProximityRanker::new(repository);
            let request = FindNearestRequest {
                latitude: latitude.map(NumericInput::Text),
                longitude: longitude.map(NumericInput::Text),
                limit: limit.map(NumericInput::Text),
            };
            api::handle_find_nearest(&ranker, &request).await
        }
        Command::InitSchema => {
            info!("init-schema has nothing to do for the in-memory repository");
            return Ok(ExitCode::SUCCESS);
        }
        Command::Status => return Ok(ExitCode::SUCCESS),
    };

    print_response(&response)
}

fn print_response(response: &ApiResponse) -> Result<ExitCode> {
    let rendered =
        serde_json::to_string_pretty(&response.body).context("Failed to render response")?;
    if response.is_success() {
        println!("{}", rendered);
        return Ok(ExitCode::SUCCESS);
    }
    eprintln!("{}", rendered);
    let code = if response.status == api::responses::STATUS_BAD_REQUEST {
        EXIT_VALIDATION_FAILURE
    } else {
        EXIT_STORAGE_FAILURE
    };
    Ok(ExitCode::from(code))
}
