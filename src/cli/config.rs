//! CLI command for configuration
//!
//! Shows the active settings and paths, and updates persisted preferences.

use clap::Args;

use crate::config::{ResplitPaths, Settings};
use crate::error::{ResplitError, ResplitResult};

/// Arguments for the config command
#[derive(Args, Debug, Default)]
pub struct ConfigArgs {
    /// Set the currency symbol
    #[arg(long)]
    pub currency: Option<String>,

    /// Set the default participant initials (comma-separated)
    #[arg(long)]
    pub initials: Option<String>,

    /// Set the default tip percentage
    #[arg(long)]
    pub tip_percent: Option<f64>,
}

impl ConfigArgs {
    fn has_updates(&self) -> bool {
        self.currency.is_some() || self.initials.is_some() || self.tip_percent.is_some()
    }
}

/// Handle the config command
pub fn handle_config_command(
    paths: &ResplitPaths,
    settings: &mut Settings,
    args: ConfigArgs,
) -> ResplitResult<()> {
    if args.has_updates() {
        apply_updates(settings, &args)?;
        settings.save(paths)?;
        println!("Settings saved.");
        println!();
    }

    println!("Configuration file: {}", paths.settings_file().display());
    println!("Currency symbol:    {}", settings.currency_symbol);
    println!(
        "Default initials:   {}",
        if settings.participant_initials.is_empty() {
            "(none)".to_string()
        } else {
            settings.participant_initials.join(", ")
        }
    );
    println!("Default tip:        {}%", settings.default_tip_percent);

    Ok(())
}

fn apply_updates(settings: &mut Settings, args: &ConfigArgs) -> ResplitResult<()> {
    if let Some(currency) = &args.currency {
        if currency.is_empty() {
            return Err(ResplitError::Validation(
                "Currency symbol cannot be empty".into(),
            ));
        }
        settings.currency_symbol = currency.clone();
    }

    if let Some(initials) = &args.initials {
        settings.participant_initials = initials
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
    }

    if let Some(percent) = args.tip_percent {
        if !(0.0..=100.0).contains(&percent) {
            return Err(ResplitError::Validation(format!(
                "Tip percentage {} is out of range",
                percent
            )));
        }
        settings.default_tip_percent = percent;
    }

    Ok(())
}
