//! Item CSV import
//!
//! Stands in for the capture/extraction step of the original product: the
//! items a receipt scanner would have produced are read from a CSV file with
//! columns `name,price[,owner]`.
//!
//! Owner syntax:
//! - empty or `unassigned`
//! - `me` (also `mine`, `payer`, `you`)
//! - `p1`..`p4` (also `friend1`..)
//! - `shared` for an equal split
//! - `shared:me=60,p2=40` for explicit percentages

use std::io::Read;
use std::path::Path;

use crate::error::{ResplitError, ResplitResult};
use crate::models::{Contributor, LineItem, Money, Owner, ParticipantIdx, ShareMap};

/// Sample items file printed by `resplit template`
pub const TEMPLATE: &str = "\
name,price,owner
Burger,12.99,me
Fries,4.99,p1
Soda,2.49,shared
Appetizer,8.99,shared:me=60,p1=40
Dessert,7.99,
";

/// Read line items from an items CSV file
pub fn read_items_file(path: &Path) -> ResplitResult<Vec<LineItem>> {
    let file = std::fs::File::open(path)
        .map_err(|e| ResplitError::Import(format!("Failed to open {}: {}", path.display(), e)))?;
    read_items(file)
}

/// Read line items from any CSV reader
pub fn read_items<R: Read>(reader: R) -> ResplitResult<Vec<LineItem>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut items = Vec::new();
    for (row, record) in csv_reader.records().enumerate() {
        let record = record?;
        let line = row + 2; // 1-based, after the header

        let name = record
            .get(0)
            .ok_or_else(|| ResplitError::Import(format!("Line {}: missing item name", line)))?
            .trim();
        if name.is_empty() {
            return Err(ResplitError::Import(format!(
                "Line {}: empty item name",
                line
            )));
        }

        let price_field = record
            .get(1)
            .ok_or_else(|| ResplitError::Import(format!("Line {}: missing price", line)))?;
        let price = Money::parse(price_field)
            .map_err(|e| ResplitError::Import(format!("Line {}: {}", line, e)))?;
        if price.is_negative() {
            return Err(ResplitError::Import(format!(
                "Line {}: negative price {}",
                line, price
            )));
        }

        // Shared splits contain commas, so an explicit split spills into
        // extra columns; stitch them back together.
        let owner_field = if record.len() > 2 {
            record.iter().skip(2).collect::<Vec<_>>().join(",")
        } else {
            String::new()
        };
        let owner = parse_owner(&owner_field)
            .map_err(|e| ResplitError::Import(format!("Line {}: {}", line, e)))?;

        items.push(LineItem::with_owner(name, price, owner));
    }

    Ok(items)
}

/// Parse an owner label from the items CSV
pub fn parse_owner(s: &str) -> ResplitResult<Owner> {
    let s = s.trim();
    if s.is_empty() {
        return Ok(Owner::Unassigned);
    }

    let lower = s.to_ascii_lowercase();
    match lower.as_str() {
        "unassigned" => return Ok(Owner::Unassigned),
        "me" | "mine" | "payer" | "you" => return Ok(Owner::Payer),
        "shared" => return Ok(Owner::Shared(ShareMap::new())),
        _ => {}
    }

    if let Some(spec) = lower.strip_prefix("shared:") {
        return Ok(Owner::Shared(parse_shares(spec)?));
    }

    if let Some(idx) = parse_participant(&lower) {
        return Ok(Owner::Participant(idx));
    }

    Err(ResplitError::Validation(format!(
        "Unknown owner label '{}'",
        s
    )))
}

fn parse_participant(s: &str) -> Option<ParticipantIdx> {
    let digits = s.strip_prefix('p').or_else(|| s.strip_prefix("friend"))?;
    let index: u8 = digits.parse().ok()?;
    ParticipantIdx::new(index)
}

fn parse_shares(spec: &str) -> ResplitResult<ShareMap> {
    let mut shares = ShareMap::new();
    for part in spec.split(',') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        let (who, percent) = part.split_once('=').ok_or_else(|| {
            ResplitError::Validation(format!("Share '{}' is not of the form who=percent", part))
        })?;

        let contributor = match who.trim() {
            "me" | "mine" | "payer" | "you" => Contributor::Payer,
            other => Contributor::Participant(parse_participant(other).ok_or_else(|| {
                ResplitError::Validation(format!("Unknown share contributor '{}'", other))
            })?),
        };

        let percent: f64 = percent
            .trim()
            .parse()
            .map_err(|_| ResplitError::Validation(format!("Bad percentage '{}'", percent)))?;

        shares.insert(contributor, percent);
    }

    if shares.is_empty() {
        return Err(ResplitError::Validation(
            "Explicit share list is empty".into(),
        ));
    }
    Ok(shares)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pidx(i: u8) -> ParticipantIdx {
        ParticipantIdx::new(i).unwrap()
    }

    #[test]
    fn test_read_template() {
        let items = read_items(TEMPLATE.as_bytes()).unwrap();
        assert_eq!(items.len(), 5);

        assert_eq!(items[0].name, "Burger");
        assert_eq!(items[0].price.cents(), 1299);
        assert_eq!(items[0].owner, Owner::Payer);

        assert_eq!(items[1].owner, Owner::Participant(pidx(1)));
        assert_eq!(items[2].owner, Owner::Shared(ShareMap::new()));

        match &items[3].owner {
            Owner::Shared(shares) => {
                assert_eq!(shares.share_of(Contributor::Payer), 60.0);
                assert_eq!(shares.share_of(Contributor::Participant(pidx(1))), 40.0);
            }
            other => panic!("expected explicit shares, got {:?}", other),
        }

        assert_eq!(items[4].owner, Owner::Unassigned);
    }

    #[test]
    fn test_quoted_names_survive() {
        let csv = "name,price,owner\n\"Bob's \"\"Special\"\"\",9.99,me\n";
        let items = read_items(csv.as_bytes()).unwrap();
        assert_eq!(items[0].name, "Bob's \"Special\"");
    }

    #[test]
    fn test_rejects_negative_price() {
        let csv = "name,price,owner\nRefund,-2.00,me\n";
        let err = read_items(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, ResplitError::Import(_)));
        assert!(err.to_string().contains("negative price"));
    }

    #[test]
    fn test_rejects_bad_price() {
        let csv = "name,price,owner\nBurger,lots,me\n";
        assert!(read_items(csv.as_bytes()).is_err());
    }

    #[test]
    fn test_rejects_empty_name() {
        let csv = "name,price,owner\n,4.99,me\n";
        assert!(read_items(csv.as_bytes()).is_err());
    }

    #[test]
    fn test_rejects_unknown_owner() {
        let err = parse_owner("friendzone").unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_owner_aliases() {
        assert_eq!(parse_owner("MINE").unwrap(), Owner::Payer);
        assert_eq!(parse_owner("you").unwrap(), Owner::Payer);
        assert_eq!(parse_owner("friend2").unwrap(), Owner::Participant(pidx(2)));
        assert_eq!(parse_owner("Unassigned").unwrap(), Owner::Unassigned);
    }

    #[test]
    fn test_p_zero_is_rejected() {
        assert!(parse_owner("p0").is_err());
    }

    #[test]
    fn test_explicit_shares_tolerate_any_sum() {
        // 80 + 80 = 160: stored as-is, the engine copes
        match parse_owner("shared:me=80,p1=80").unwrap() {
            Owner::Shared(shares) => assert_eq!(shares.total(), 160.0),
            other => panic!("expected shares, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_share_list_is_rejected() {
        assert!(parse_owner("shared:").is_err());
        assert!(parse_owner("shared:me").is_err());
    }
}
