// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! CSV parsing for room inventory bootstrap.
//!
//! Lets operators replace the built-in seed inventory with their own
//! room list at startup. Parsing is strict: a defective row names its
//! row number and aborts the load, since a hotel cannot open with half a
//! catalog.

use csv::StringRecord;
use std::collections::HashMap;
use stay_reserve_domain::{Money, Room, RoomId};
use thiserror::Error;

/// Errors raised while reading an inventory CSV.
#[derive(Debug, Error)]
pub enum InventoryImportError {
    /// The CSV could not be read at all.
    #[error("failed to read inventory CSV: {0}")]
    Read(#[from] csv::Error),
    /// A required column is missing from the header row.
    #[error("inventory CSV is missing required column '{header}'")]
    MissingHeader {
        /// The absent column name.
        header: String,
    },
    /// A data row could not be parsed.
    #[error("inventory CSV row {row}: {reason}")]
    InvalidRow {
        /// The row number (1-based, excluding header).
        row: usize,
        /// Description of the defect.
        reason: String,
    },
}

/// Required CSV column headers (case-insensitive, normalized).
const REQUIRED_HEADERS: &[&str] = &[
    "id",
    "name",
    "short_description",
    "description",
    "price_cents",
    "capacity",
    "size_sqm",
    "bed_type",
    "featured",
    "available",
    "images",
    "amenities",
];

/// Normalizes a CSV header string for case-insensitive, whitespace-tolerant matching.
fn normalize_header(header: &str) -> String {
    header.trim().to_lowercase().replace(' ', "_")
}

/// Validates that all required headers are present in the CSV.
fn validate_headers(headers: &StringRecord) -> Result<HashMap<String, usize>, InventoryImportError> {
    let mut header_map: HashMap<String, usize> = HashMap::new();

    for (idx, header) in headers.iter().enumerate() {
        header_map.insert(normalize_header(header), idx);
    }

    for required in REQUIRED_HEADERS {
        if !header_map.contains_key(*required) {
            return Err(InventoryImportError::MissingHeader {
                header: (*required).to_string(),
            });
        }
    }

    Ok(header_map)
}

fn field<'a>(
    record: &'a StringRecord,
    header_map: &HashMap<String, usize>,
    name: &str,
    row: usize,
) -> Result<&'a str, InventoryImportError> {
    header_map
        .get(name)
        .and_then(|idx| record.get(*idx))
        .map(str::trim)
        .ok_or_else(|| InventoryImportError::InvalidRow {
            row,
            reason: format!("missing value for '{name}'"),
        })
}

fn parse_number<T: std::str::FromStr>(
    value: &str,
    name: &str,
    row: usize,
) -> Result<T, InventoryImportError> {
    value
        .parse::<T>()
        .map_err(|_| InventoryImportError::InvalidRow {
            row,
            reason: format!("'{value}' is not a valid {name}"),
        })
}

fn parse_flag(value: &str, name: &str, row: usize) -> Result<bool, InventoryImportError> {
    match value.to_lowercase().as_str() {
        "true" | "yes" | "1" => Ok(true),
        "false" | "no" | "0" => Ok(false),
        other => Err(InventoryImportError::InvalidRow {
            row,
            reason: format!("'{other}' is not a valid {name} flag"),
        }),
    }
}

/// Splits a `;`-separated list field, dropping empty segments.
fn parse_list(value: &str) -> Vec<String> {
    value
        .split(';')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Reads a room inventory from CSV.
///
/// Expected columns: `id`, `name`, `short_description`, `description`,
/// `price_cents`, `capacity`, `size_sqm`, `bed_type`, `featured`,
/// `available`, `images`, `amenities`. The two list columns are
/// `;`-separated. Rows come back in file order, which becomes catalog
/// order.
///
/// # Errors
///
/// Returns an error if the CSV cannot be read, a required column is
/// missing, or any row fails to parse.
pub fn read_inventory_csv<R: std::io::Read>(reader: R) -> Result<Vec<Room>, InventoryImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let header_map: HashMap<String, usize> = validate_headers(csv_reader.headers()?)?;

    let mut rooms: Vec<Room> = Vec::new();
    for (index, record) in csv_reader.records().enumerate() {
        let record: StringRecord = record?;
        let row: usize = index + 1;

        let room: Room = Room::new(
            RoomId::new(field(&record, &header_map, "id", row)?),
            field(&record, &header_map, "name", row)?.to_owned(),
            field(&record, &header_map, "description", row)?.to_owned(),
            field(&record, &header_map, "short_description", row)?.to_owned(),
            Money::from_cents(parse_number(
                field(&record, &header_map, "price_cents", row)?,
                "price",
                row,
            )?),
            parse_number(
                field(&record, &header_map, "capacity", row)?,
                "capacity",
                row,
            )?,
            parse_list(field(&record, &header_map, "images", row)?),
            parse_list(field(&record, &header_map, "amenities", row)?),
            parse_number(
                field(&record, &header_map, "size_sqm", row)?,
                "floor area",
                row,
            )?,
            field(&record, &header_map, "bed_type", row)?.to_owned(),
            parse_flag(
                field(&record, &header_map, "featured", row)?,
                "featured",
                row,
            )?,
            parse_flag(
                field(&record, &header_map, "available", row)?,
                "available",
                row,
            )?,
        );
        rooms.push(room);
    }

    tracing::debug!(count = rooms.len(), "inventory CSV parsed");
    Ok(rooms)
}
