//! # Identity / Address Module
//!
//! Account-facing validation and formatting: emails, passwords, names,
//! zip codes, and delivery-address display resolution.
//!
//! Signup is restricted to the university community, so the email checks
//! come in two layers: a general shape check, then a strict suffix match
//! against the institutional domain allow-list.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

// =============================================================================
// Email Validation
// =============================================================================

/// Domains whose mailboxes may register.
///
/// The organization's root domain plus its known school subdomains. This
/// is a fixed business rule, compiled in rather than configured.
pub const INSTITUTIONAL_EMAIL_SUFFIXES: &[&str] = &[
    "upenn.edu",
    "wharton.upenn.edu",
    "seas.upenn.edu",
    "sas.upenn.edu",
    "nursing.upenn.edu",
];

/// General email shape check: local part, `@`, dotted domain, no
/// whitespace anywhere. Not an RFC parser; the backend's auth provider
/// does the authoritative verification by actually sending mail.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    // domain needs a dot with something on both sides
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// True iff the address belongs to the institution.
///
/// Matching is by exact suffix: the allow-listed domain must be the whole
/// domain (preceded by `@`) or a parent of it (preceded by `.`).
/// Substring containment is NOT enough — `student@evil-upenn.edu` and
/// `user@upenn.edu.fake.com` both fail.
///
/// ```rust
/// use pennmart_core::identity::is_institutional_email;
///
/// assert!(is_institutional_email("student@wharton.upenn.edu"));
/// assert!(!is_institutional_email("user@upenn.edu.fake.com"));
/// ```
pub fn is_institutional_email(email: &str) -> bool {
    if !is_valid_email(email) {
        return false;
    }
    let lower = email.to_lowercase();
    INSTITUTIONAL_EMAIL_SUFFIXES.iter().any(|suffix| {
        lower
            .strip_suffix(suffix)
            .is_some_and(|head| head.ends_with('@') || head.ends_with('.'))
    })
}

// =============================================================================
// Password Validation
// =============================================================================

/// A password rule that was not met.
///
/// Every rule is checked independently so the signup form can show the
/// full list at once instead of revealing one failure per attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum PasswordRule {
    #[error("password must be at least 8 characters")]
    MinLength,
    #[error("password must contain an uppercase letter")]
    Uppercase,
    #[error("password must contain a lowercase letter")]
    Lowercase,
    #[error("password must contain a number")]
    Digit,
}

/// Outcome of [`validate_password`]: the collected rule violations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PasswordValidation {
    pub violations: Vec<PasswordRule>,
}

impl PasswordValidation {
    /// Valid iff no rule was violated.
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Checks all password rules, collecting every violation.
pub fn validate_password(password: &str) -> PasswordValidation {
    let mut violations = Vec::new();

    if password.chars().count() < 8 {
        violations.push(PasswordRule::MinLength);
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        violations.push(PasswordRule::Uppercase);
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        violations.push(PasswordRule::Lowercase);
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        violations.push(PasswordRule::Digit);
    }

    PasswordValidation { violations }
}

// =============================================================================
// Names
// =============================================================================

/// A display name needs at least two characters after trimming.
pub fn is_valid_name(name: &str) -> bool {
    name.trim().chars().count() >= 2
}

/// Joins first and last name with a single space, trimming both.
pub fn format_display_name(first: &str, last: &str) -> String {
    let first = first.trim();
    let last = last.trim();
    match (first.is_empty(), last.is_empty()) {
        (true, true) => String::new(),
        (false, true) => first.to_string(),
        (true, false) => last.to_string(),
        (false, false) => format!("{first} {last}"),
    }
}

/// Uppercased initials for the avatar placeholder.
///
/// A missing name part contributes nothing — no placeholder character.
pub fn initials(first: &str, last: &str) -> String {
    let mut out = String::new();
    for part in [first, last] {
        if let Some(c) = part.trim().chars().next() {
            out.extend(c.to_uppercase());
        }
    }
    out
}

// =============================================================================
// Zip Codes
// =============================================================================

/// `NNNNN` or `NNNNN-NNNN`, nothing else.
pub fn is_valid_zip_code(zip: &str) -> bool {
    let bytes = zip.as_bytes();
    match bytes.len() {
        5 => bytes.iter().all(u8::is_ascii_digit),
        10 => {
            bytes[5] == b'-'
                && bytes[..5].iter().all(u8::is_ascii_digit)
                && bytes[6..].iter().all(u8::is_ascii_digit)
        }
        _ => false,
    }
}

// =============================================================================
// Address
// =============================================================================

/// A saved delivery address.
///
/// Campus addresses are usually a building plus room; off-campus ones are
/// a street address. Backend records frequently leave fields blank, so
/// every text field is optional and display resolution has a fallback
/// chain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Address {
    pub building_name: Option<String>,
    pub room_number: Option<String>,
    pub street_address: Option<String>,
    /// User-chosen nickname like "Home" or "Lab".
    pub label: Option<String>,
    pub is_default: bool,
}

/// A field counts as present only if it holds non-blank text.
fn non_blank(field: &Option<String>) -> Option<&str> {
    field
        .as_deref()
        .map(str::trim)
        .filter(|text| !text.is_empty())
}

impl Address {
    /// Resolves the one line of text shown for this address.
    ///
    /// Strict priority, first match wins:
    /// 1. building name, with `", room"` appended when a room is present
    /// 2. street address, verbatim
    /// 3. label, verbatim
    /// 4. the literal `"Address"`
    ///
    /// ```rust
    /// use pennmart_core::identity::Address;
    ///
    /// let addr = Address {
    ///     building_name: Some("Rodin College House".to_string()),
    ///     street_address: Some("3901 Locust Walk".to_string()),
    ///     ..Address::default()
    /// };
    /// // building name wins even when a street address is also present
    /// assert_eq!(addr.display_text(), "Rodin College House");
    /// ```
    pub fn display_text(&self) -> String {
        if let Some(building) = non_blank(&self.building_name) {
            return match non_blank(&self.room_number) {
                Some(room) => format!("{building}, {room}"),
                None => building.to_string(),
            };
        }
        if let Some(street) = non_blank(&self.street_address) {
            return street.to_string();
        }
        if let Some(label) = non_blank(&self.label) {
            return label.to_string();
        }
        "Address".to_string()
    }

    /// A dasher can actually find this address: it names a building or a
    /// street. A label alone is not enough.
    pub fn is_usable(&self) -> bool {
        non_blank(&self.building_name).is_some() || non_blank(&self.street_address).is_some()
    }
}

/// Picks the address checkout preselects: the first one flagged default,
/// else the first saved address, else none.
pub fn default_address(addresses: &[Address]) -> Option<&Address> {
    addresses
        .iter()
        .find(|a| a.is_default)
        .or_else(|| addresses.first())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_shape() {
        assert!(is_valid_email("student@upenn.edu"));
        assert!(is_valid_email("first.last@mail.example.com"));

        assert!(!is_valid_email("no-at-sign.edu"));
        assert!(!is_valid_email("@upenn.edu"));
        assert!(!is_valid_email("student@nodot"));
        assert!(!is_valid_email("student@.edu"));
        assert!(!is_valid_email("student@upenn."));
        assert!(!is_valid_email("stu dent@upenn.edu"));
        assert!(!is_valid_email("a@@b.com"));
    }

    #[test]
    fn test_institutional_email_accepts_root_and_subdomains() {
        assert!(is_institutional_email("student@upenn.edu"));
        assert!(is_institutional_email("student@wharton.upenn.edu"));
        assert!(is_institutional_email("Student@SEAS.UPENN.EDU"));
    }

    #[test]
    fn test_institutional_email_rejects_lookalikes() {
        // suffix matching, not substring containment
        assert!(!is_institutional_email("student@evil-upenn.edu"));
        assert!(!is_institutional_email("user@upenn.edu.fake.com"));
        assert!(!is_institutional_email("user@gmail.com"));
        assert!(!is_institutional_email("upenn.edu"));
    }

    #[test]
    fn test_password_collects_all_violations() {
        let result = validate_password("short");
        assert!(!result.is_valid());
        assert_eq!(
            result.violations,
            vec![
                PasswordRule::MinLength,
                PasswordRule::Uppercase,
                PasswordRule::Digit,
            ]
        );

        let result = validate_password("");
        assert_eq!(result.violations.len(), 4);
    }

    #[test]
    fn test_password_valid() {
        let result = validate_password("Locust38th");
        assert!(result.is_valid());
        assert!(result.violations.is_empty());
    }

    #[test]
    fn test_password_single_missing_rule() {
        assert_eq!(
            validate_password("alllowercase1").violations,
            vec![PasswordRule::Uppercase]
        );
        assert_eq!(
            validate_password("NoDigitsHere").violations,
            vec![PasswordRule::Digit]
        );
    }

    #[test]
    fn test_name_validation() {
        assert!(is_valid_name("Jo"));
        assert!(is_valid_name("  Jo  "));
        assert!(!is_valid_name("J"));
        assert!(!is_valid_name("   "));
    }

    #[test]
    fn test_display_name_and_initials() {
        assert_eq!(format_display_name("  Ada ", " Lovelace "), "Ada Lovelace");
        assert_eq!(format_display_name("Ada", ""), "Ada");
        assert_eq!(format_display_name("", ""), "");

        assert_eq!(initials("ada", "lovelace"), "AL");
        assert_eq!(initials("Ada", ""), "A");
        assert_eq!(initials("", ""), "");
    }

    #[test]
    fn test_zip_codes() {
        assert!(is_valid_zip_code("19104"));
        assert!(is_valid_zip_code("19104-6243"));

        assert!(!is_valid_zip_code("1910"));
        assert!(!is_valid_zip_code("191045"));
        assert!(!is_valid_zip_code("19104-624"));
        assert!(!is_valid_zip_code("19104 6243"));
        assert!(!is_valid_zip_code("1910a"));
        assert!(!is_valid_zip_code(""));
    }

    #[test]
    fn test_address_display_priority() {
        let full = Address {
            building_name: Some("Rodin College House".to_string()),
            room_number: Some("Room 1012".to_string()),
            street_address: Some("3901 Locust Walk".to_string()),
            label: Some("Home".to_string()),
            is_default: false,
        };
        assert_eq!(full.display_text(), "Rodin College House, Room 1012");

        let building_only = Address {
            building_name: Some("Rodin College House".to_string()),
            street_address: Some("3901 Locust Walk".to_string()),
            ..Address::default()
        };
        // building name takes priority over street even when both present
        assert_eq!(building_only.display_text(), "Rodin College House");

        let street = Address {
            street_address: Some("3901 Locust Walk".to_string()),
            ..Address::default()
        };
        assert_eq!(street.display_text(), "3901 Locust Walk");

        let label = Address {
            label: Some("Home".to_string()),
            ..Address::default()
        };
        assert_eq!(label.display_text(), "Home");

        assert_eq!(Address::default().display_text(), "Address");
    }

    #[test]
    fn test_blank_fields_count_as_absent() {
        let addr = Address {
            building_name: Some("   ".to_string()),
            street_address: Some("3901 Locust Walk".to_string()),
            ..Address::default()
        };
        assert_eq!(addr.display_text(), "3901 Locust Walk");
    }

    #[test]
    fn test_address_usability() {
        let street = Address {
            street_address: Some("3901 Locust Walk".to_string()),
            ..Address::default()
        };
        assert!(street.is_usable());

        let label_only = Address {
            label: Some("Home".to_string()),
            ..Address::default()
        };
        assert!(!label_only.is_usable());
    }

    #[test]
    fn test_default_address_selection() {
        let a = Address {
            label: Some("A".to_string()),
            ..Address::default()
        };
        let b = Address {
            label: Some("B".to_string()),
            is_default: true,
            ..Address::default()
        };

        // first flagged default wins
        let ab = [a.clone(), b.clone()];
        let picked = default_address(&ab).unwrap();
        assert_eq!(picked.label.as_deref(), Some("B"));

        // none flagged: first in list
        let a_only = [a.clone()];
        let picked = default_address(&a_only).unwrap();
        assert_eq!(picked.label.as_deref(), Some("A"));

        // empty list: nothing to pick
        assert!(default_address(&[]).is_none());
    }
}
