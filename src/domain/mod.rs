//! Domain normalization and validation.
//!
//! Key functions:
//! - `clean_domain()` - Reduces a URL or host string to a bare lowercase domain
//! - `is_valid_domain()` - Checks a cleaned domain against the accepted shape

use once_cell::sync::Lazy;
use regex::Regex;

static SCHEME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^https?://").expect("scheme pattern is a valid regex")
});

static WWW_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^www\.").expect("www pattern is a valid regex"));

/// One or more labels of 1-63 alphanumerics/hyphens (no hyphen at either
/// end), followed by an alphabetic TLD of at least two letters.
static DOMAIN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?\.)+[a-zA-Z]{2,}$")
        .expect("domain pattern is a valid regex")
});

/// Cleans a URL or domain into a bare lowercase domain.
///
/// Steps, in order: strip an `http://`/`https://` scheme, strip a leading
/// `www.`, drop everything from the first `/`, drop everything from the
/// first `:`, lowercase.
///
/// Never fails; the result may still be malformed and must be checked with
/// [`is_valid_domain`].
///
/// # Examples
///
/// ```
/// use domain_osint::domain::clean_domain;
///
/// assert_eq!(clean_domain("HTTPS://www.Example.com:443/x"), "example.com");
/// ```
pub fn clean_domain(input: &str) -> String {
    let trimmed = input.trim();
    let without_scheme = SCHEME_RE.replace(trimmed, "");
    let without_www = WWW_RE.replace(&without_scheme, "");

    let host = without_www.split('/').next().unwrap_or_default();
    let host = host.split(':').next().unwrap_or_default();

    host.to_lowercase()
}

/// Returns true if `domain` has the `label(.label)+` shape accepted for lookup.
pub fn is_valid_domain(domain: &str) -> bool {
    DOMAIN_RE.is_match(domain)
}
