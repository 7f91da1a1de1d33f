//! WHOIS data parsing and conversion.

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use whois_service::{ParsedWhoisData, WhoisResponse};

use super::raw::parse_raw_fields;
use super::types::{WhoisRecord, WhoisValue};

/// Converts a whois-service response into a serialization-safe record.
///
/// Parsed fields win; fields recognized in the raw text only fill gaps.
pub(crate) fn convert_response(response: &WhoisResponse) -> WhoisRecord {
    let mut fields = vec![
        ("domain_name", Some(WhoisValue::from(response.domain.as_str()))),
        ("whois_server", Some(WhoisValue::from(response.whois_server.as_str()))),
    ];
    if let Some(parsed) = &response.parsed_data {
        fields.extend(parsed_fields(parsed));
    }
    merge_record(fields, &response.raw_data)
}

/// Keys filled from the request itself rather than from the registry answer.
const ECHO_KEYS: &[&str] = &["domain_name", "whois_server"];

/// Registry replies for names that are not registered.
static NOT_FOUND_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?im)^\s*(no match for|not found|no data found|no entries found|domain not found|status:\s*free)",
    )
    .expect("not-found pattern is a valid regex")
});

/// True when the registry answered without any registration data.
///
/// That is the case when the record holds nothing beyond the echoed request
/// fields, or when the raw reply carries a not-found marker and neither a
/// registrar nor a creation date was recovered.
pub(crate) fn is_unregistered(record: &WhoisRecord, raw_text: &str) -> bool {
    let has_registry_fields = record.keys().any(|k| !ECHO_KEYS.contains(&k.as_str()));
    if !has_registry_fields {
        return true;
    }
    let has_core_fields = record.contains_key("registrar") || record.contains_key("creation_date");
    !has_core_fields && NOT_FOUND_RE.is_match(raw_text)
}

/// Flattens whois-service ParsedWhoisData into named record fields.
fn parsed_fields(parsed: &ParsedWhoisData) -> Vec<(&'static str, Option<WhoisValue>)> {
    let text = |v: &Option<String>| v.as_deref().map(WhoisValue::from);
    let date = |v: &Option<String>| v.as_deref().map(|s| WhoisValue::Text(normalize_date(s)));
    let list = |v: &Vec<String>| Some(WhoisValue::list(v.iter().cloned()));

    vec![
        ("registrar", text(&parsed.registrar)),
        ("creation_date", date(&parsed.creation_date)),
        ("expiration_date", date(&parsed.expiration_date)),
        ("updated_date", date(&parsed.updated_date)),
        ("name_servers", list(&parsed.name_servers)),
        ("status", list(&parsed.status)),
        ("registrant_name", text(&parsed.registrant_name)),
        ("registrant_email", text(&parsed.registrant_email)),
        ("admin_email", text(&parsed.admin_email)),
        ("tech_email", text(&parsed.tech_email)),
    ]
}

/// Builds the record from explicit fields plus whatever the raw text adds.
///
/// Absent, blank and empty-list values are dropped.
pub(crate) fn merge_record<'a, I>(fields: I, raw_text: &str) -> WhoisRecord
where
    I: IntoIterator<Item = (&'a str, Option<WhoisValue>)>,
{
    let mut record = WhoisRecord::new();

    for (key, value) in fields {
        let Some(value) = value else { continue };
        let value = match value {
            WhoisValue::Text(s) => WhoisValue::Text(s.trim().to_string()),
            list => list,
        };
        if !value.is_empty() {
            record.insert(key.to_string(), value);
        }
    }

    for (key, value) in parse_raw_fields(raw_text) {
        record.entry(key).or_insert(value);
    }

    record
}

/// Re-emits a WHOIS date as RFC 3339 when it can be parsed; otherwise
/// returns the input unchanged.
pub(crate) fn normalize_date(date_str: &str) -> String {
    let trimmed = date_str.trim();
    parse_date_string(trimmed)
        .or_else(|| {
            DateTime::parse_from_rfc3339(trimmed)
                .ok()
                .map(|dt| dt.with_timezone(&Utc))
        })
        .map(|dt| dt.to_rfc3339())
        .unwrap_or_else(|| trimmed.to_string())
}

/// Attempts to parse a date string in various formats
fn parse_date_string(date_str: &str) -> Option<DateTime<Utc>> {
    // Try common WHOIS date formats
    let formats = [
        "%Y-%m-%dT%H:%M:%S%.fZ",
        "%Y-%m-%dT%H:%M:%SZ",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d",
        "%d-%b-%Y",
        "%d/%m/%Y",
    ];

    for format in &formats {
        if let Ok(naive_dt) = chrono::NaiveDateTime::parse_from_str(date_str, format) {
            return Some(naive_dt.and_utc());
        }
        if let Ok(naive_date) = chrono::NaiveDate::parse_from_str(date_str, format) {
            return Some(naive_date.and_hms_opt(0, 0, 0)?.and_utc());
        }
    }

    None
}
