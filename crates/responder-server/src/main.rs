mod commands;
mod telemetry;

use clap::{Parser, Subcommand};
use responder_server::config::{DEFAULT_HOST, DEFAULT_PORT, DEFAULT_STORAGE_FILE};
use responder_server::ServerConfig;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "responder", about = "Question and answer HTTP service", version)]
struct Cli {
    /// Path of the JSON question document
    #[arg(long, global = true, env = "RESPONDER_STORAGE_FILE", default_value = DEFAULT_STORAGE_FILE)]
    storage_file: PathBuf,

    /// Emit logs as JSON lines
    #[arg(long, global = true, env = "RESPONDER_LOG_JSON")]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an empty question document
    Init,

    /// Serve the HTTP API
    Serve {
        /// Address to bind
        #[arg(long, env = "RESPONDER_HOST", default_value = DEFAULT_HOST)]
        host: String,

        /// Port to listen on
        #[arg(short, long, env = "RESPONDER_PORT", default_value_t = DEFAULT_PORT)]
        port: u16,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    telemetry::init_tracing(cli.log_json);

    match cli.command {
        Commands::Init => commands::init::run(&cli.storage_file),
        Commands::Serve { host, port } => {
            let config = ServerConfig {
                host,
                port,
                storage_file: cli.storage_file,
            };
            actix_web::rt::System::new().block_on(commands::serve::run(config))
        }
    }
}
