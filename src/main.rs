//! gotohp - CLI entry point.

use std::process::ExitCode;

use tracing_subscriber::{fmt, EnvFilter};

use gotohp::{
    cli::{parse_args, Cli, Command},
    commands,
    error::{exit_codes, Result},
    output::print_error,
};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = match parse_args(std::env::args_os()) {
        Ok(cli) => cli,
        Err(exit) => {
            if exit.is_success() {
                print!("{}", exit.message);
            } else {
                eprint!("{}", exit.message);
            }
            return ExitCode::from(exit.code as u8);
        }
    };

    // Set up logging
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_filter()));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(cli).await {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(e) => {
            print_error(&e.to_string());
            ExitCode::from(exit_codes::FAILURE as u8)
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config_path = cli.config.as_deref();

    match cli.command {
        Command::Upload(args) => commands::upload::run(args, config_path).await,
        Command::Download(args) => commands::download::run(args, config_path).await,
        Command::GetUrls(args) => commands::get_urls::run(args, config_path).await,
        Command::Thumbnail(args) => commands::thumbnail::run(args, config_path).await,
        Command::Credentials { command } => commands::credentials::run(command, config_path),
        Command::Version => {
            println!("gotohp v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}
