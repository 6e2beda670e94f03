use clap::Parser;
use contact_book::prelude::{AppError, command::Cli, run_app};
use dotenv::dotenv;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), AppError> {
    dotenv().ok();

    // Logs go to stderr; stdout belongs to the menu.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    run_app(cli)
}
