//! # Header Date
//!
//! Formato estilo RFC 1123 en UTC, por ejemplo `Wed, 21 Jul 2021 14:03:02 UTC`.
//! Se calcula en cada conexión, nunca se cachea.

use chrono::{DateTime, Utc};

const DATE_FORMAT: &str = "%a, %d %b %Y %H:%M:%S UTC";

/// Formatea un instante para el header `Date`
pub fn http_date(at: DateTime<Utc>) -> String {
    at.format(DATE_FORMAT).to_string()
}

/// Timestamp actual para el header `Date`
pub fn now() -> String {
    http_date(Utc::now())
}
