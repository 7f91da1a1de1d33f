//! Contact detail extraction from WHOIS records.
//!
//! A fixed allowlist of WHOIS fields is scanned and each value is put in
//! exactly one bucket by the first matching rule in [`RULES`].

use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::whois::WhoisRecord;

/// Fields that may carry contact details, in scan order.
pub const FIELDS_TO_CHECK: &[&str] = &[
    "registrant_name",
    "registrant_email",
    "registrant_phone",
    "registrant_address",
    "registrant_city",
    "registrant_state",
    "registrant_country",
    "registrant_postal_code",
    "admin_name",
    "admin_email",
    "admin_phone",
    "tech_name",
    "tech_email",
    "tech_phone",
    "billing_name",
    "billing_email",
    "billing_phone",
    "registrar",
    "org",
    "organization",
];

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}\b")
        .expect("email pattern is a valid regex")
});

static PHONE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[\+]?[1-9]?[\d\s\-\(\)]{7,15}").expect("phone pattern is a valid regex")
});

/// Contact details found in a WHOIS record.
///
/// Each list is deduplicated and free of empty entries. Order is not
/// meaningful (entries come out sorted).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedInfo {
    pub emails: Vec<String>,
    pub names: Vec<String>,
    pub phones: Vec<String>,
    pub addresses: Vec<String>,
    pub organizations: Vec<String>,
}

/// Output bucket of a classification rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Bucket {
    Emails,
    Names,
    Phones,
    Organizations,
    Addresses,
}

/// How a matched value is turned into bucket entries.
#[derive(Clone, Copy)]
enum Capture {
    /// Every match of the pattern
    Matches(fn() -> &'static Regex),
    /// The value itself
    Raw,
}

/// One classification rule: if `applies(field, value)`, the value goes to `bucket`.
struct Rule {
    applies: fn(&str, &str) -> bool,
    bucket: Bucket,
    capture: Capture,
}

fn field_has_any(field: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| field.contains(n))
}

/// Ordered classification rules; the first match wins.
static RULES: &[Rule] = &[
    Rule {
        applies: |field, value| field.contains("email") || value.contains('@'),
        bucket: Bucket::Emails,
        capture: Capture::Matches(|| &*EMAIL_RE),
    },
    Rule {
        applies: |field, value| field.contains("name") && !value.contains('@'),
        bucket: Bucket::Names,
        capture: Capture::Raw,
    },
    Rule {
        applies: |field, _| field.contains("phone"),
        bucket: Bucket::Phones,
        capture: Capture::Matches(|| &*PHONE_RE),
    },
    Rule {
        applies: |field, _| field_has_any(field, &["org", "registrar"]),
        bucket: Bucket::Organizations,
        capture: Capture::Raw,
    },
    Rule {
        applies: |field, _| field_has_any(field, &["address", "city", "state", "country"]),
        bucket: Bucket::Addresses,
        capture: Capture::Raw,
    },
];

fn rule_for(field: &str, value: &str) -> Option<&'static Rule> {
    RULES.iter().find(|rule| (rule.applies)(field, value))
}

/// Picks the bucket for a field/value pair, if any rule matches.
#[cfg(test)]
fn classify(field: &str, value: &str) -> Option<Bucket> {
    rule_for(field, value).map(|rule| rule.bucket)
}

/// Scans the allowlisted fields of `record` and buckets their values.
pub fn extract_info(record: &WhoisRecord) -> ExtractedInfo {
    let mut emails = BTreeSet::new();
    let mut names = BTreeSet::new();
    let mut phones = BTreeSet::new();
    let mut addresses = BTreeSet::new();
    let mut organizations = BTreeSet::new();

    for field in FIELDS_TO_CHECK {
        let Some(value) = record.get(*field) else {
            continue;
        };
        // Lists contribute their first entry only
        let Some(value) = value.first() else {
            continue;
        };
        if value.is_empty() {
            continue;
        }

        let Some(rule) = rule_for(field, value) else {
            continue;
        };

        let target = match rule.bucket {
            Bucket::Emails => &mut emails,
            Bucket::Names => &mut names,
            Bucket::Phones => &mut phones,
            Bucket::Organizations => &mut organizations,
            Bucket::Addresses => &mut addresses,
        };

        match rule.capture {
            Capture::Matches(pattern) => {
                target.extend(pattern().find_iter(value).map(|m| m.as_str().to_string()));
            }
            Capture::Raw => {
                target.insert(value.to_string());
            }
        }
    }

    let finish = |set: BTreeSet<String>| -> Vec<String> {
        set.into_iter().filter(|s| !s.trim().is_empty()).collect()
    };

    ExtractedInfo {
        emails: finish(emails),
        names: finish(names),
        phones: finish(phones),
        addresses: finish(addresses),
        organizations: finish(organizations),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::whois::WhoisValue;
    use std::collections::HashSet;

    fn record(fields: &[(&str, &str)]) -> WhoisRecord {
        fields
            .iter()
            .map(|(k, v)| (k.to_string(), WhoisValue::from(*v)))
            .collect()
    }

    fn as_set(items: &[String]) -> HashSet<&str> {
        items.iter().map(String::as_str).collect()
    }

    #[test]
    fn test_email_field() {
        let info = extract_info(&record(&[("registrant_email", "a@b.com")]));
        assert_eq!(info.emails, vec!["a@b.com"]);
        assert!(info.names.is_empty());
        assert!(info.phones.is_empty());
        assert!(info.addresses.is_empty());
        assert!(info.organizations.is_empty());
    }

    #[test]
    fn test_name_field() {
        let info = extract_info(&record(&[("registrant_name", "John Doe")]));
        assert_eq!(info.names, vec!["John Doe"]);
    }

    #[test]
    fn test_phone_field() {
        let info = extract_info(&record(&[("tech_phone", "+1 555-123-4567")]));
        assert!(!info.phones.is_empty());
        assert!(info.phones.iter().all(|p| PHONE_RE.is_match(p)));
        assert!(info.phones.iter().any(|p| p.contains("555")));
    }

    #[test]
    fn test_duplicate_emails_collapse() {
        let info = extract_info(&record(&[
            ("registrant_email", "dup@example.com"),
            ("admin_email", "dup@example.com"),
            ("tech_email", "other@example.com"),
        ]));
        assert_eq!(
            as_set(&info.emails),
            HashSet::from(["dup@example.com", "other@example.com"])
        );
        assert_eq!(info.emails.len(), 2);
    }

    #[test]
    fn test_at_sign_in_name_field_goes_to_emails() {
        // Rule (a) wins on the value even when the field is a name
        let info = extract_info(&record(&[("admin_name", "contact: ops@example.org")]));
        assert_eq!(info.emails, vec!["ops@example.org"]);
        assert!(info.names.is_empty());
    }

    #[test]
    fn test_email_field_without_match_yields_nothing() {
        let info = extract_info(&record(&[("registrant_email", "REDACTED FOR PRIVACY")]));
        assert!(info.emails.is_empty());
        assert!(info.names.is_empty());
    }

    #[test]
    fn test_organizations_and_addresses() {
        let info = extract_info(&record(&[
            ("registrar", "Example Registrar, Inc."),
            ("org", "Example Org"),
            ("organization", "Example Org"),
            ("registrant_city", "Springfield"),
            ("registrant_country", "US"),
            ("registrant_address", "1 Main St"),
            ("registrant_state", "IL"),
        ]));
        assert_eq!(
            as_set(&info.organizations),
            HashSet::from(["Example Registrar, Inc.", "Example Org"])
        );
        assert_eq!(
            as_set(&info.addresses),
            HashSet::from(["Springfield", "US", "1 Main St", "IL"])
        );
    }

    #[test]
    fn test_postal_code_matches_no_rule() {
        let info = extract_info(&record(&[("registrant_postal_code", "62701")]));
        assert_eq!(info, ExtractedInfo::default());
    }

    #[test]
    fn test_fields_outside_allowlist_ignored() {
        let info = extract_info(&record(&[
            ("emails", "abuse@registrar.com"),
            ("name_servers", "ns1.example.com"),
        ]));
        assert_eq!(info, ExtractedInfo::default());
    }

    #[test]
    fn test_list_value_uses_first_entry() {
        let mut rec = WhoisRecord::new();
        rec.insert(
            "registrant_address".to_string(),
            WhoisValue::list(["1 Main St", "Suite 2"]),
        );
        rec.insert("tech_name".to_string(), WhoisValue::List(Vec::new()));
        let info = extract_info(&rec);
        assert_eq!(info.addresses, vec!["1 Main St"]);
        assert!(info.names.is_empty());
    }

    #[test]
    fn test_empty_values_skipped() {
        let info = extract_info(&record(&[("registrant_name", ""), ("registrar", "")]));
        assert_eq!(info, ExtractedInfo::default());
    }

    #[test]
    fn test_classify_priority() {
        assert_eq!(classify("registrant_email", "a@b.com"), Some(Bucket::Emails));
        assert_eq!(classify("registrar", "x@y.com"), Some(Bucket::Emails));
        assert_eq!(classify("billing_name", "Jane"), Some(Bucket::Names));
        assert_eq!(classify("admin_phone", "+1.555"), Some(Bucket::Phones));
        assert_eq!(classify("organization", "Acme"), Some(Bucket::Organizations));
        assert_eq!(classify("registrant_state", "IL"), Some(Bucket::Addresses));
        assert_eq!(classify("registrant_postal_code", "62701"), None);
    }

    #[test]
    fn test_serialized_keys() {
        let json = serde_json::to_value(ExtractedInfo::default()).unwrap();
        for key in ["emails", "names", "phones", "addresses", "organizations"] {
            assert!(json[key].is_array(), "missing key {key}");
        }
    }
}
