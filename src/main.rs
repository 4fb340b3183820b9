use chrono::Utc;
use clap::Parser;
use statushound::adapter::{PracticumClient, TelegramMessenger};
use statushound::cli::{self, CheckCommand, Cli, Commands};
use statushound::config::Config;
use statushound::error::Result;
use statushound::poller::Poller;
use tokio::signal;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    let args = Cli::parse();

    init_logging();

    // Missing credentials must never reach the retry loop.
    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Запуск программы невозможен: {e}");
            std::process::exit(1);
        }
    };

    match args.command.unwrap_or(Commands::Run) {
        Commands::Run => run(config).await,
        Commands::Check(CheckCommand::Telegram) => exit_on_error(cli::check_telegram(&config).await),
        Commands::Check(CheckCommand::Api) => exit_on_error(cli::check_api(&config).await),
    }
}

async fn run(config: Config) {
    info!("statushound starting");

    let api = PracticumClient::new(&config.practicum_token);
    let messenger = TelegramMessenger::new(&config.telegram_token, config.telegram_chat_id);
    let mut poller = Poller::new(api, messenger, Utc::now().timestamp());

    tokio::select! {
        _ = poller.run() => {}
        _ = signal::ctrl_c() => {
            info!("shutdown signal received");
        }
    }

    info!("statushound stopped");
}

fn exit_on_error(result: Result<()>) {
    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("statushound=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
