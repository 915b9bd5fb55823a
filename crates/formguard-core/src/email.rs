//! Email shape validation

use once_cell::sync::Lazy;
use regex::Regex;

// Email shape regex, anchored at both ends. The final segment accepts runs
// of 2-4 alphanumerics repeated, so any alphanumeric tail of length >= 2
// passes. Compatibility constraint: `+` in the local part and
// single-character TLDs are rejected; do not tighten or loosen the pattern.
static EMAIL_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([a-zA-Z0-9_.-])+@(([a-zA-Z0-9-])+\.)+([a-zA-Z0-9]{2,4})+$").unwrap()
});

/// Validate email shape (returns true if valid, false if not)
///
/// This is a syntactic check only. It does not verify that the domain
/// resolves or that the mailbox exists.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_SHAPE.is_match(email)
}
