use crate::block::tokenizer::FieldMap;
use crate::domain::{decode_discord, format_phone, is_valid_email, strip_at, Contact};

/// Builds a [`Contact`] from aggregated fields.
///
/// This never returns `None` today: a map without recognized keys yields a
/// blank record. A missing name is represented as an empty string.
pub fn build_contact(map: &FieldMap) -> Option<Contact> {
    let names = map.values("name");
    let (name, nickname) = match names.split_first() {
        Some((first, rest)) => (first.clone(), rest.to_vec()),
        None => (String::new(), Vec::new()),
    };

    let birthday = map.values("birthday").first().cloned().unwrap_or_default();
    let phone = map.values("phone").to_vec();
    let email = map.values("email").to_vec();
    let insta = map.values("insta").to_vec();
    let discord = map
        .values("discord")
        .iter()
        .map(|raw| decode_discord(raw))
        .collect();

    let mut contact = Contact {
        name,
        nickname,
        birthday,
        phone,
        email,
        insta,
        discord,
    };

    contact.phone = contact.phone.iter().map(|raw| format_phone(raw)).collect();
    contact.email.retain(|value| is_valid_email(value));
    contact.insta = contact
        .insta
        .iter()
        .map(|raw| strip_at(raw).to_string())
        .collect();

    Some(contact)
}
