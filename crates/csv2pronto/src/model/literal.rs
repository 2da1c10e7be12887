//! Typed literal construction from raw row values.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use thiserror::Error;

use super::ontology::standard;
use super::term::Literal;

/// XSD datatypes the mapping uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LiteralKind {
    Boolean,
    Integer,
    Float,
    Double,
    DateTime,
    String,
    AnyUri,
}

impl LiteralKind {
    pub fn datatype(self) -> &'static str {
        match self {
            LiteralKind::Boolean => standard::XSD_BOOLEAN,
            LiteralKind::Integer => standard::XSD_INTEGER,
            LiteralKind::Float => standard::XSD_FLOAT,
            LiteralKind::Double => standard::XSD_DOUBLE,
            LiteralKind::DateTime => standard::XSD_DATE_TIME,
            LiteralKind::String => standard::XSD_STRING,
            LiteralKind::AnyUri => standard::XSD_ANY_URI,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            LiteralKind::Boolean => "boolean",
            LiteralKind::Integer => "integer",
            LiteralKind::Float => "float",
            LiteralKind::Double => "double",
            LiteralKind::DateTime => "dateTime",
            LiteralKind::String => "string",
            LiteralKind::AnyUri => "anyURI",
        }
    }
}

/// A raw value that does not fit the requested datatype.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{value:?} is not a valid xsd:{}", kind.name())]
pub struct LiteralError {
    pub kind: LiteralKind,
    pub value: String,
}

/// Build a literal of `kind` from a raw row value.
///
/// `None` yields the null literal, which the graph never stores.
pub fn typed(kind: LiteralKind, raw: Option<&str>) -> Result<Literal, LiteralError> {
    let Some(raw) = raw else {
        return Ok(Literal::null(kind.datatype()));
    };

    let invalid = || LiteralError {
        kind,
        value: raw.to_string(),
    };

    let lexical = match kind {
        LiteralKind::Boolean => parse_bool(raw).ok_or_else(invalid)?.to_string(),
        LiteralKind::Integer => raw.trim().parse::<i64>().map_err(|_| invalid())?.to_string(),
        LiteralKind::Float | LiteralKind::Double => {
            let trimmed = raw.trim();
            match trimmed.parse::<f64>() {
                Ok(v) if v.is_finite() => trimmed.to_string(),
                _ => return Err(invalid()),
            }
        }
        LiteralKind::DateTime => parse_datetime(raw).ok_or_else(invalid)?,
        LiteralKind::String | LiteralKind::AnyUri => raw.to_string(),
    };

    Ok(Literal::new(lexical, kind.datatype()))
}

/// Shorthand for string literals, which cannot fail.
pub fn string(raw: Option<&str>) -> Literal {
    match raw {
        Some(value) => Literal::new(value.to_string(), standard::XSD_STRING),
        None => Literal::null(standard::XSD_STRING),
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "true" | "t" | "1" | "1.0" | "yes" | "si" | "sí" => Some(true),
        "false" | "f" | "0" | "0.0" | "no" => Some(false),
        _ => None,
    }
}

/// Parse a loosely formatted date/time into the canonical `xsd:dateTime` form.
fn parse_datetime(raw: &str) -> Option<String> {
    let clean = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(clean) {
        return Some(dt.to_rfc3339());
    }

    let offset_formats = [
        "%Y-%m-%d %H:%M:%S%.f%z", // 2021-05-03 14:30:00-0300
        "%Y-%m-%dT%H:%M:%S%.f%z", // 2021-05-03T14:30:00.5+0000
        "%Y-%m-%d %H:%M:%S%.f%:z", // 2021-05-03 14:30:00-03:00
    ];
    for format in &offset_formats {
        if let Ok(dt) = DateTime::parse_from_str(clean, format) {
            return Some(dt.to_rfc3339());
        }
    }

    let datetime_formats = [
        "%Y-%m-%d %H:%M:%S%.f", // 2021-05-03 14:30:00.123
        "%Y-%m-%dT%H:%M:%S%.f", // 2021-05-03T14:30:00
        "%Y-%m-%d %H:%M",       // 2021-05-03 14:30
        "%Y-%m-%dT%H:%M",       // 2021-05-03T14:30
        "%d/%m/%Y %H:%M:%S",    // 03/05/2021 14:30:00
        "%d/%m/%Y %H:%M",       // 03/05/2021 14:30
        "%Y/%m/%d %H:%M:%S",    // 2021/05/03 14:30:00
    ];
    for format in &datetime_formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(clean, format) {
            return Some(canonical(dt));
        }
    }

    for format in &["%Y-%m-%d", "%d/%m/%Y", "%Y/%m/%d"] {
        if let Ok(date) = NaiveDate::parse_from_str(clean, format) {
            return date.and_hms_opt(0, 0, 0).map(canonical);
        }
    }

    None
}

fn canonical(dt: NaiveDateTime) -> String {
    dt.format("%Y-%m-%dT%H:%M:%S%.f").to_string()
}
