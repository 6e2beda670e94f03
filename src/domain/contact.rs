use std::fmt;

use serde::{Deserialize, Serialize};

use crate::validation::Field;

/// One entry of the contact book.
///
/// Field order here is the key order written to disk.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Contact {
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub email: String,
}

impl Contact {
    pub fn new(first_name: &str, last_name: &str, phone_number: &str, email: &str) -> Self {
        Contact {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            phone_number: phone_number.to_string(),
            email: email.to_string(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::PhoneNumber => &self.phone_number,
            Field::Email => &self.email,
        }
    }

    fn get_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
            Field::PhoneNumber => &mut self.phone_number,
            Field::Email => &mut self.email,
        }
    }

    /// First field that fails its rule, if any.
    pub fn invalid_field(&self) -> Option<Field> {
        Field::ALL
            .into_iter()
            .find(|field| !field.is_valid(self.get(*field)))
    }

    /// Exact four-field match against any contact in the list.
    pub fn already_exist<'a, I>(&self, contactlist: I) -> bool
    where
        I: IntoIterator<Item = &'a Contact>,
    {
        contactlist.into_iter().any(|cont| cont == self)
    }

    /// Contact produced by applying `updates` on top of this one.
    pub fn updated_with(&self, updates: &FieldUpdates) -> Contact {
        let mut contact = self.clone();
        for field in Field::ALL {
            if let Some(value) = updates.get(field) {
                *contact.get_mut(field) = value.to_string();
            }
        }
        contact
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}, Phone: {}, Email: {}",
            self.first_name, self.last_name, self.phone_number, self.email
        )
    }
}

/// Replacement values for a modify. A field left `None` (or blank) keeps its
/// current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldUpdates {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
}

impl FieldUpdates {
    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
            Field::PhoneNumber => &mut self.phone_number,
            Field::Email => &mut self.email,
        };
        *slot = Some(value);
    }

    /// The new value for `field`, treating an empty string as "keep".
    pub fn get(&self, field: Field) -> Option<&str> {
        let slot = match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::PhoneNumber => &self.phone_number,
            Field::Email => &self.email,
        };
        slot.as_deref().filter(|value| !value.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        Field::ALL.into_iter().all(|field| self.get(field).is_none())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn john() -> Contact {
        Contact::new("John", "Doe", "+15551234", "john@x.com")
    }

    #[test]
    fn display_matches_listing_format() {
        assert_eq!(
            john().to_string(),
            "John Doe, Phone: +15551234, Email: john@x.com"
        );
    }

    #[test]
    fn duplicate_needs_all_four_fields() {
        let list = vec![john()];

        assert!(john().already_exist(&list));
        assert!(!Contact::new("John", "Doe", "+15551234", "john@y.com").already_exist(&list));
        assert!(!Contact::new("john", "Doe", "+15551234", "john@x.com").already_exist(&list));
    }

    #[test]
    fn blank_update_keeps_current_value() {
        let mut updates = FieldUpdates::default();
        updates.set(Field::PhoneNumber, "+4400".to_string());
        updates.set(Field::Email, String::new());

        let updated = john().updated_with(&updates);

        assert_eq!(updated, Contact::new("John", "Doe", "+4400", "john@x.com"));
        assert!(!updates.is_empty());
        assert!(FieldUpdates::default().is_empty());
    }

    #[test]
    fn reports_first_invalid_field() {
        assert_eq!(john().invalid_field(), None);
        assert_eq!(
            Contact::new("John", "D0e", "abc", "john@x.com").invalid_field(),
            Some(Field::LastName)
        );
        assert_eq!(
            Contact::new("John", "Doe", "", "nope").invalid_field(),
            Some(Field::Email)
        );
    }

    #[test]
    fn serializes_keys_in_declared_order() -> Result<(), serde_json::Error> {
        let json = serde_json::to_string(&john())?;

        assert_eq!(
            json,
            r#"{"first_name":"John","last_name":"Doe","phone_number":"+15551234","email":"john@x.com"}"#
        );
        Ok(())
    }
}
