use crate::domain::contact::Contact;

/// Whether `query` occurs in any field of `contact`.
///
/// Names and email compare case-insensitively; the phone number is matched
/// against its raw text. An empty query matches everything.
pub fn matches(query: &str, contact: &Contact) -> bool {
    let query = query.to_lowercase();

    contact.first_name.to_lowercase().contains(&query)
        || contact.last_name.to_lowercase().contains(&query)
        || contact.phone_number.contains(&query)
        || contact.email.to_lowercase().contains(&query)
}

/// Positions of matching contacts, in list order.
pub fn search_positions(query: &str, contact_list: &[Contact]) -> Vec<usize> {
    contact_list
        .iter()
        .enumerate()
        .filter(|(_, contact)| matches(query, contact))
        .map(|(idx, _)| idx)
        .collect()
}

pub fn search<'a>(query: &str, contact_list: &'a [Contact]) -> Vec<&'a Contact> {
    contact_list
        .iter()
        .filter(|contact| matches(query, contact))
        .collect()
}
