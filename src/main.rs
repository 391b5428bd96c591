use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use resplit::cli::{handle_config_command, handle_split_command, ConfigArgs, SplitArgs};
use resplit::config::{paths::ResplitPaths, settings::Settings};
use resplit::import::TEMPLATE;

#[derive(Parser)]
#[command(
    name = "resplit",
    version,
    about = "Terminal-based receipt splitting calculator",
    long_about = "resplit splits a restaurant receipt between you and up to four \
                  friends. Assign each item to a party or share it by percentage; \
                  tax and tip are apportioned in proportion to what each party \
                  ordered."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Split a receipt from an items CSV file
    Split(SplitArgs),

    /// Print a sample items CSV
    Template {
        /// Write the template to a file instead of stdout
        output: Option<PathBuf>,
    },

    /// Show or update configuration
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = ResplitPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Commands::Split(args) => {
            handle_split_command(&settings, args)?;
        }
        Commands::Template { output } => match output {
            Some(path) => {
                std::fs::write(&path, TEMPLATE)?;
                println!("Template written to: {}", path.display());
            }
            None => print!("{}", TEMPLATE),
        },
        Commands::Config(args) => {
            handle_config_command(&paths, &mut settings, args)?;
        }
    }

    Ok(())
}
