//! Settlement display formatting
//!
//! Formats the item list and the per-party breakdown for terminal output.

use crate::engine::Settlement;
use crate::export::csv::owner_label;
use crate::models::{LineItem, ParticipantSet};

/// Format the item list with assignments as a table
pub fn format_item_list(
    items: &[LineItem],
    participants: &ParticipantSet,
    currency: &str,
) -> String {
    if items.is_empty() {
        return "No items.".to_string();
    }

    let name_width = items
        .iter()
        .map(|i| i.name.len())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<name_width$}  {:>10}  {}\n",
        "Item",
        "Price",
        "Assigned To",
        name_width = name_width,
    ));
    output.push_str(&format!(
        "{:-<name_width$}  {:->10}  {:-<30}\n",
        "",
        "",
        "",
        name_width = name_width,
    ));

    for item in items {
        output.push_str(&format!(
            "{:<name_width$}  {:>10}  {}\n",
            item.name,
            item.price.format_with_symbol(currency),
            owner_label(&item.owner, participants),
            name_width = name_width,
        ));
    }

    output
}

/// Format the per-party settlement breakdown as a table
pub fn format_settlement(
    settlement: &Settlement,
    participants: &ParticipantSet,
    currency: &str,
) -> String {
    let labels: Vec<String> = std::iter::once("You".to_string())
        .chain(participants.indices().map(|idx| participants.label(idx)))
        .collect();

    let party_width = labels.iter().map(|l| l.len()).max().unwrap_or(5).max(5);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<party_width$}  {:>10}  {:>10}  {:>10}  {:>10}\n",
        "Party",
        "Subtotal",
        "Tax",
        "Tip",
        "Total",
        party_width = party_width,
    ));
    output.push_str(&format!(
        "{:-<party_width$}  {:->10}  {:->10}  {:->10}  {:->10}\n",
        "",
        "",
        "",
        "",
        "",
        party_width = party_width,
    ));

    let rows = std::iter::once(&settlement.payer).chain(&settlement.participants);
    for (label, party) in labels.iter().zip(rows) {
        output.push_str(&format!(
            "{:<party_width$}  {:>10}  {:>10}  {:>10}  {:>10}\n",
            label,
            party.subtotal.format_with_symbol(currency),
            party.tax.format_with_symbol(currency),
            party.tip.format_with_symbol(currency),
            party.total.format_with_symbol(currency),
            party_width = party_width,
        ));
    }

    output.push_str(&format!(
        "\nGrand total: {}\n",
        settlement.grand_total.format_with_symbol(currency)
    ));

    output
}
