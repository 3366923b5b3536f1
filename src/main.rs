use clap::Parser;
use tracing::debug;

use traderiser::adapter::inbound::cli::command::{Cli, Commands, ConfigCommand};
use traderiser::adapter::inbound::cli::output::{self, OutputConfig};
use traderiser::adapter::inbound::cli::{config, select};
use traderiser::error::Result;
use traderiser::infrastructure::config::settings::Config;

fn main() {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();
    output::configure(OutputConfig::new(cli.json));

    if let Err(e) = run(cli) {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let path = cli.config.as_deref();

    // `config validate` reports its own load errors.
    if let Commands::Config(ConfigCommand::Validate) = cli.command {
        return config::execute_validate(path);
    }

    let settings = match path {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    settings.init_logging();
    debug!(config = ?path, "traderiser starting");

    match &cli.command {
        Commands::Select(args) => select::execute(&settings, args),
        Commands::Fallback => {
            select::execute_fallback();
            Ok(())
        }
        Commands::Config(ConfigCommand::Show) => config::execute_show(&settings, path),
        Commands::Config(ConfigCommand::Validate) => config::execute_validate(path),
    }
}
