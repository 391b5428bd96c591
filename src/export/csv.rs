//! CSV export
//!
//! Produces the shareable receipt summary: one row per item with its
//! assignment label, then a summary block with each party's final total.
//! Item name and label cells are always quoted with embedded quotes doubled,
//! so names containing commas or quotes survive a round trip through any
//! spreadsheet tool.

use std::io::Write;

use crate::engine::Settlement;
use crate::error::{ResplitError, ResplitResult};
use crate::models::{Contributor, LineItem, Owner, ParticipantSet, ShareMap};

/// Export items and the settlement summary to CSV
pub fn export_summary_csv<W: Write>(
    items: &[LineItem],
    participants: &ParticipantSet,
    settlement: &Settlement,
    writer: &mut W,
) -> ResplitResult<()> {
    let to_export = |e: std::io::Error| ResplitError::Export(e.to_string());

    writeln!(writer, "Item,Price,Assigned To").map_err(to_export)?;

    for item in items {
        writeln!(
            writer,
            "{},{},{}",
            quote_csv(&item.name),
            item.price,
            quote_csv(&owner_label(&item.owner, participants))
        )
        .map_err(to_export)?;
    }

    writeln!(writer).map_err(to_export)?;
    writeln!(writer, "Summary:").map_err(to_export)?;
    writeln!(
        writer,
        "{},{}",
        quote_csv("Your Total"),
        settlement.payer.total
    )
    .map_err(to_export)?;
    for (idx, party) in participants.indices().zip(&settlement.participants) {
        writeln!(
            writer,
            "{},{}",
            quote_csv(&format!("{}'s Total", participants.name(idx))),
            party.total
        )
        .map_err(to_export)?;
    }

    Ok(())
}

/// Human-readable assignment label for an item
pub fn owner_label(owner: &Owner, participants: &ParticipantSet) -> String {
    match owner {
        Owner::Unassigned => "Unassigned".to_string(),
        Owner::Payer => "You".to_string(),
        Owner::Participant(idx) => participants.label(*idx),
        Owner::Shared(shares) => shared_label(shares, participants),
    }
}

fn shared_label(shares: &ShareMap, participants: &ParticipantSet) -> String {
    // An empty map means the default equal split at the current count
    let effective;
    let shares = if shares.is_empty() {
        effective = ShareMap::equal_split(participants.count());
        &effective
    } else {
        shares
    };

    let parts: Vec<String> = shares
        .iter()
        .map(|(who, percent)| {
            let name = match who {
                Contributor::Payer => "You".to_string(),
                Contributor::Participant(idx) => participants.label(idx),
            };
            format!("{}: {:.1}%", name, percent)
        })
        .collect();
    format!("Shared ({})", parts.join(", "))
}

/// Quote a CSV cell, doubling embedded quotes
fn quote_csv(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}
