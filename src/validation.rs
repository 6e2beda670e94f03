//! Field predicates for contact data.
//!
//! Every predicate is total over `&str` and only ever answers yes or no.

use once_cell::sync::Lazy;
use regex::Regex;

// Letters and spaces, at least one character.
static NAME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z ]+$").expect("valid name regex"));

// Digits with an optional leading plus. The empty string is accepted.
static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\+?[0-9]*$").expect("valid phone regex"));

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\w.-]+@[\w.-]+\.\w+$").expect("valid email regex"));

pub fn valid_name(name: &str) -> bool {
    NAME_RE.is_match(name)
}

pub fn valid_phone(phone: &str) -> bool {
    PHONE_RE.is_match(phone)
}

pub fn valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// The four fields of a contact, each with its own rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    FirstName,
    LastName,
    PhoneNumber,
    Email,
}

impl Field {
    pub const ALL: [Field; 4] = [
        Field::FirstName,
        Field::LastName,
        Field::PhoneNumber,
        Field::Email,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Field::FirstName => "First name",
            Field::LastName => "Last name",
            Field::PhoneNumber => "Phone number",
            Field::Email => "Email",
        }
    }

    pub fn requirement(&self) -> &'static str {
        match self {
            Field::FirstName => "Invalid first name. Only letters and spaces are allowed.",
            Field::LastName => "Invalid last name. Only letters and spaces are allowed.",
            Field::PhoneNumber => {
                "Invalid phone number. Only numbers and optionally a plus sign are allowed."
            }
            Field::Email => "Invalid email. Please enter a valid email address.",
        }
    }

    pub fn is_valid(&self, value: &str) -> bool {
        match self {
            Field::FirstName | Field::LastName => valid_name(value),
            Field::PhoneNumber => valid_phone(value),
            Field::Email => valid_email(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_letters_and_spaces() {
        assert!(valid_name("John"));
        assert!(valid_name("Mary Ann"));
        assert!(valid_name(" "));

        assert!(!valid_name(""));
        assert!(!valid_name("John3"));
        assert!(!valid_name("O'Brien"));
        assert!(!valid_name("Anne-Marie"));
        assert!(!valid_name("Zoë"));
        assert!(!valid_name("John\t"));
    }

    #[test]
    fn phone_allows_optional_leading_plus() {
        assert!(valid_phone("+1234567890"));
        assert!(valid_phone("0801234"));
        assert!(valid_phone("+"));
        assert!(valid_phone(""));

        assert!(!valid_phone("12+34"));
        assert!(!valid_phone("++1"));
        assert!(!valid_phone("555-1234"));
        assert!(!valid_phone("ABC"));
    }

    #[test]
    fn email_needs_a_dotted_domain() {
        assert!(valid_email("john@x.com"));
        assert!(valid_email("john.doe@example.co.uk"));
        assert!(valid_email("first-last_1@sub-domain.org"));

        assert!(!valid_email(""));
        assert!(!valid_email("foo@bar"));
        assert!(!valid_email("@x.com"));
        assert!(!valid_email("john@.x"));
        assert!(!valid_email("john x@x.com"));
        assert!(!valid_email("john@x.com."));
        assert!(!valid_email("john+tag@x.com"));
    }

    #[test]
    fn field_dispatches_to_its_predicate() {
        assert!(Field::FirstName.is_valid("Jane"));
        assert!(!Field::LastName.is_valid("R0e"));
        assert!(Field::PhoneNumber.is_valid(""));
        assert!(!Field::Email.is_valid("jane"));
    }
}
