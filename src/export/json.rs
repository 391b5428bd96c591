//! JSON export
//!
//! Machine-readable settlement dump with schema versioning. Amounts are
//! emitted as decimal strings ("12.99") so consumers do not have to know the
//! cent representation.

use std::io::Write;

use serde::Serialize;

use crate::engine::Settlement;
use crate::error::{ResplitError, ResplitResult};
use crate::models::{LineItem, ParticipantSet};

use super::csv::owner_label;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full settlement export structure
#[derive(Debug, Clone, Serialize)]
pub struct JsonExport {
    /// Schema version for compatibility checking
    pub schema_version: String,
    /// Application version that created the export
    pub app_version: String,
    /// All items with their assignment labels
    pub items: Vec<ItemExport>,
    /// Per-party breakdowns, payer first
    pub parties: Vec<PartyExport>,
    /// Sum of every party's total
    pub grand_total: String,
}

/// One exported item row
#[derive(Debug, Clone, Serialize)]
pub struct ItemExport {
    pub name: String,
    pub price: String,
    pub assigned_to: String,
}

/// One party's exported breakdown
#[derive(Debug, Clone, Serialize)]
pub struct PartyExport {
    pub label: String,
    pub subtotal: String,
    pub tax: String,
    pub tip: String,
    pub total: String,
}

impl JsonExport {
    /// Build the export structure from the current split
    pub fn new(items: &[LineItem], participants: &ParticipantSet, settlement: &Settlement) -> Self {
        let item_rows = items
            .iter()
            .map(|item| ItemExport {
                name: item.name.clone(),
                price: item.price.to_string(),
                assigned_to: owner_label(&item.owner, participants),
            })
            .collect();

        let mut parties = vec![PartyExport {
            label: "You".to_string(),
            subtotal: settlement.payer.subtotal.to_string(),
            tax: settlement.payer.tax.to_string(),
            tip: settlement.payer.tip.to_string(),
            total: settlement.payer.total.to_string(),
        }];
        for (idx, party) in participants.indices().zip(&settlement.participants) {
            parties.push(PartyExport {
                label: participants.name(idx),
                subtotal: party.subtotal.to_string(),
                tax: party.tax.to_string(),
                tip: party.tip.to_string(),
                total: party.total.to_string(),
            });
        }

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            items: item_rows,
            parties,
            grand_total: settlement.grand_total.to_string(),
        }
    }
}

/// Export the settlement as pretty-printed JSON
pub fn export_settlement_json<W: Write>(
    items: &[LineItem],
    participants: &ParticipantSet,
    settlement: &Settlement,
    writer: &mut W,
) -> ResplitResult<()> {
    let export = JsonExport::new(items, participants, settlement);
    serde_json::to_writer_pretty(&mut *writer, &export)?;
    writeln!(writer).map_err(|e| ResplitError::Export(e.to_string()))?;
    Ok(())
}
