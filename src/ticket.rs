//! The ticket record accepted by the pipeline.
//!
//! Input arrives as one JSON object. Required fields are checked for presence
//! first (in a fixed order) and only then for shape, so the reported error
//! always names the first absent field.

use crate::error::TicketError;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

pub const FIELD_ID: &str = "id";
pub const FIELD_EMAIL: &str = "email";
pub const FIELD_EVENT_NAME: &str = "eventName";
pub const FIELD_PURCHASE_DATE: &str = "purchaseDate";
pub const FIELD_PRICE: &str = "price";

/// Long-form rendering used on the printed ticket, e.g. `March 15, 2024 at 02:30 PM`.
pub const DISPLAY_DATE_FORMAT: &str = "%B %d, %Y at %I:%M %p";

const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

/// A validated ticket, immutable for the duration of one generation run.
#[derive(Debug, Clone, PartialEq)]
pub struct TicketRecord {
    pub id: String,
    pub event_name: String,
    pub email: String,
    pub purchase_date: PurchaseDate,
    pub price: f64,
}

impl TicketRecord {
    /// Parses and validates a ticket from its serialized JSON form.
    pub fn from_json(input: &str) -> Result<Self, TicketError> {
        let fields: Map<String, Value> =
            serde_json::from_str(input).map_err(TicketError::MalformedInput)?;
        Self::from_fields(&fields)
    }

    /// Validates a ticket from an already-parsed JSON value.
    pub fn from_value(value: Value) -> Result<Self, TicketError> {
        let fields: Map<String, Value> =
            serde_json::from_value(value).map_err(TicketError::MalformedInput)?;
        Self::from_fields(&fields)
    }

    fn from_fields(fields: &Map<String, Value>) -> Result<Self, TicketError> {
        let id = required(fields, FIELD_ID)?;
        let email = required(fields, FIELD_EMAIL)?;
        let event_name = required(fields, FIELD_EVENT_NAME)?;
        let purchase_date = required(fields, FIELD_PURCHASE_DATE)?;
        let price = required(fields, FIELD_PRICE)?;

        let id = as_text(id, FIELD_ID)?;
        validate_id(id)?;

        Ok(Self {
            id: id.to_string(),
            email: as_text(email, FIELD_EMAIL)?.to_string(),
            event_name: as_text(event_name, FIELD_EVENT_NAME)?.to_string(),
            purchase_date: PurchaseDate::parse(as_text(purchase_date, FIELD_PURCHASE_DATE)?)?,
            price: parse_price(price)?,
        })
    }

    /// The price with a currency prefix and two decimal places, e.g. `LKR 1500.00`.
    pub fn formatted_price(&self, currency_prefix: &str) -> String {
        format!("{} {:.2}", currency_prefix, self.price)
    }
}

fn required<'a>(fields: &'a Map<String, Value>, name: &'static str) -> Result<&'a Value, TicketError> {
    match fields.get(name) {
        None | Some(Value::Null) => Err(TicketError::MissingField(name)),
        Some(value) => Ok(value),
    }
}

fn as_text<'a>(value: &'a Value, name: &'static str) -> Result<&'a str, TicketError> {
    value
        .as_str()
        .ok_or_else(|| TicketError::invalid(name, format!("expected a string, got {}", value)))
}

/// Ticket identifiers end up in file names, so anything that could escape the
/// scoped directory is rejected.
pub fn validate_id(id: &str) -> Result<(), TicketError> {
    if id.trim().is_empty() {
        return Err(TicketError::invalid(FIELD_ID, "must not be empty"));
    }
    if id.contains(['/', '\\']) || id.contains("..") {
        return Err(TicketError::invalid(FIELD_ID, "must not contain path separators or '..'"));
    }
    if id.chars().any(char::is_control) {
        return Err(TicketError::invalid(FIELD_ID, "must not contain control characters"));
    }
    Ok(())
}

fn parse_price(value: &Value) -> Result<f64, TicketError> {
    let price = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .ok_or_else(|| TicketError::invalid(FIELD_PRICE, format!("expected a number, got {}", value)))?;

    if !price.is_finite() || price < 0.0 {
        return Err(TicketError::invalid(FIELD_PRICE, "must be a non-negative finite number"));
    }
    Ok(price)
}

/// The moment a ticket was bought, kept in the offset it was supplied in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PurchaseDate(DateTime<FixedOffset>);

impl PurchaseDate {
    /// Parses an ISO-8601 style timestamp. A trailing `Z` is read as UTC;
    /// timestamps without an offset are taken as UTC.
    pub fn parse(input: &str) -> Result<Self, TicketError> {
        input.parse().map_err(|source| TicketError::InvalidDate {
            value: input.to_string(),
            source,
        })
    }

    /// Human-readable form printed on the ticket.
    pub fn display_string(&self) -> String {
        self.0.format(DISPLAY_DATE_FORMAT).to_string()
    }
}

impl FromStr for PurchaseDate {
    type Err = chrono::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let rfc3339_err = match DateTime::parse_from_rfc3339(trimmed) {
            Ok(dt) => return Ok(Self(dt)),
            Err(e) => e,
        };

        for format in NAIVE_DATETIME_FORMATS {
            if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, format) {
                return Ok(Self(naive.and_utc().fixed_offset()));
            }
        }

        if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
            && let Some(midnight) = date.and_hms_opt(0, 0, 0)
        {
            return Ok(Self(midnight.and_utc().fixed_offset()));
        }

        Err(rfc3339_err)
    }
}

impl fmt::Display for PurchaseDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_string())
    }
}
