//! CLI command for splitting a receipt
//!
//! Reads an items CSV, computes the settlement, prints the breakdown, and
//! optionally writes CSV/JSON exports.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use clap::Args;

use crate::config::Settings;
use crate::display::{format_item_list, format_settlement};
use crate::engine::{settle, subtotal_base, TipEntry};
use crate::error::{ResplitError, ResplitResult};
use crate::export::{export_settlement_json, export_summary_csv};
use crate::import::read_items_file;
use crate::models::{Adjustment, Money, ParticipantSet};

/// Maximum number of participants besides the payer
pub const MAX_PARTICIPANTS: u8 = 4;

/// Arguments for the split command
#[derive(Args, Debug)]
pub struct SplitArgs {
    /// Items CSV file (columns: name,price,owner)
    pub items: PathBuf,

    /// Number of participants besides you (0-4)
    #[arg(short = 'n', long, value_parser = clap::value_parser!(u8).range(0..=MAX_PARTICIPANTS as i64))]
    pub participants: Option<u8>,

    /// Comma-separated participant initials (e.g. "AB,CD")
    #[arg(short, long)]
    pub initials: Option<String>,

    /// Tax amount (e.g. 2.00)
    #[arg(long)]
    pub tax: Option<String>,

    /// Tip amount (e.g. 3.50)
    #[arg(long, conflicts_with = "tip_percent")]
    pub tip: Option<String>,

    /// Tip as a percentage of the item subtotal; without a value, the
    /// configured default percentage is used
    #[arg(long, num_args = 0..=1)]
    pub tip_percent: Option<Option<f64>>,

    /// Whether the tax is included in the totals
    #[arg(long, action = clap::ArgAction::Set, default_value_t = true)]
    pub include_tax: bool,

    /// Whether the tip is included in the totals
    #[arg(long, action = clap::ArgAction::Set, default_value_t = true)]
    pub include_tip: bool,

    /// Write the summary CSV to this path
    #[arg(long)]
    pub export_csv: Option<PathBuf>,

    /// Write the settlement JSON to this path
    #[arg(long)]
    pub export_json: Option<PathBuf>,
}

/// Handle the split command
pub fn handle_split_command(settings: &Settings, args: SplitArgs) -> ResplitResult<()> {
    let items = read_items_file(&args.items)?;
    let participants = resolve_participants(settings, &args)?;
    let adjustment = resolve_adjustment(settings, &args, &items, &participants)?;

    let settlement = settle(&items, &participants, &adjustment)?;

    print!(
        "{}",
        format_item_list(&items, &participants, &settings.currency_symbol)
    );
    println!();
    print!(
        "{}",
        format_settlement(&settlement, &participants, &settings.currency_symbol)
    );

    if let Some(path) = &args.export_csv {
        let mut writer = BufWriter::new(create_output(path)?);
        export_summary_csv(&items, &participants, &settlement, &mut writer)?;
        println!("Summary exported to: {}", path.display());
    }

    if let Some(path) = &args.export_json {
        let mut writer = BufWriter::new(create_output(path)?);
        export_settlement_json(&items, &participants, &settlement, &mut writer)?;
        println!("Settlement exported to: {}", path.display());
    }

    Ok(())
}

fn create_output(path: &PathBuf) -> ResplitResult<File> {
    File::create(path).map_err(|e| {
        ResplitError::Export(format!("Failed to create file {}: {}", path.display(), e))
    })
}

/// Resolve the participant set from arguments and settings.
///
/// Precedence: explicit `--initials` wins; otherwise `--participants` takes
/// initials from settings (padded with defaults); otherwise the configured
/// initials alone; otherwise a single participant.
fn resolve_participants(settings: &Settings, args: &SplitArgs) -> ResplitResult<ParticipantSet> {
    if let Some(raw) = &args.initials {
        let initials: Vec<String> = raw
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        if initials.is_empty() || initials.len() > usize::from(MAX_PARTICIPANTS) {
            return Err(ResplitError::Validation(format!(
                "Expected between 1 and {} initials, got {}",
                MAX_PARTICIPANTS,
                initials.len()
            )));
        }
        if let Some(count) = args.participants {
            if usize::from(count) != initials.len() {
                return Err(ResplitError::Validation(format!(
                    "--participants {} does not match {} initials",
                    count,
                    initials.len()
                )));
            }
        }
        return Ok(ParticipantSet::from_initials(initials));
    }

    let count = args
        .participants
        .unwrap_or_else(|| (settings.participant_initials.len() as u8).clamp(1, MAX_PARTICIPANTS));

    // Participants beyond the configured initials get the fallback labels
    let initials: Vec<String> = (0..usize::from(count))
        .map(|i| {
            settings
                .participant_initials
                .get(i)
                .cloned()
                .unwrap_or_default()
        })
        .collect();
    Ok(ParticipantSet::from_initials(initials))
}

fn resolve_adjustment(
    settings: &Settings,
    args: &SplitArgs,
    items: &[crate::models::LineItem],
    participants: &ParticipantSet,
) -> ResplitResult<Adjustment> {
    let tax = match &args.tax {
        Some(raw) => parse_amount(raw, "--tax")?,
        None => Money::zero(),
    };

    let tip = match (&args.tip, &args.tip_percent) {
        (Some(raw), _) => parse_amount(raw, "--tip")?,
        (None, Some(maybe_percent)) => {
            let percent = maybe_percent.unwrap_or(settings.default_tip_percent);
            if !(0.0..=100.0).contains(&percent) {
                return Err(ResplitError::Validation(format!(
                    "Tip percentage {} is out of range",
                    percent
                )));
            }
            let base = subtotal_base(items, participants)?;
            let mut entry = TipEntry::default();
            entry.set_percent(percent, base);
            entry.amount
        }
        (None, None) => Money::zero(),
    };

    Ok(Adjustment {
        tax,
        tip,
        include_tax: args.include_tax,
        include_tip: args.include_tip,
    })
}

fn parse_amount(raw: &str, flag: &str) -> ResplitResult<Money> {
    let amount = Money::parse(raw)
        .map_err(|e| ResplitError::Validation(format!("Bad {} value '{}': {}", flag, raw, e)))?;
    if amount.is_negative() {
        return Err(ResplitError::Validation(format!(
            "{} cannot be negative",
            flag
        )));
    }
    Ok(amount)
}
