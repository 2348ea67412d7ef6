use anyhow::{anyhow, Result};
use clap::Parser;
use domainics::cli::Cli;
use domainics::{convert, Config};
use env_logger::Env;
use log::{error, info};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref());

    let default_level = if cli.verbose {
        "debug".to_string()
    } else {
        config
            .as_ref()
            .ok()
            .and_then(|c| c.logging.level.clone())
            .unwrap_or_else(|| "info".to_string())
    };

    // Initialize logging with custom format
    env_logger::Builder::from_env(Env::default().default_filter_or(default_level))
        .format(|buf, record| {
            use chrono::Local;
            use std::io::Write;
            writeln!(
                buf,
                "{} [{}] {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .init();

    match config.and_then(|config| run(cli, config)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli, config: Config) -> Result<()> {
    let input = config
        .resolve_input(cli.input)
        .ok_or_else(|| anyhow!("No input CSV given; pass INPUT or set paths.input in the config"))?;
    let output = config.resolve_output(cli.output, &input);

    info!("Starting domain expiration export");
    let summary = convert(&input, &output)?;
    println!("Wrote {} events to {}", summary.events, output.display());
    Ok(())
}
