use super::{format_card, format_cards, format_contact, format_fields};
use contact_card_core::{parse_block, tokenize, Contact, ContactCard, DiscordHandle, RenderOptions};
use chrono::NaiveDate;

fn card_for(lines: &[&str]) -> ContactCard {
    let contact = parse_block(lines.iter().copied()).expect("contact");
    let today = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
    ContactCard::build(&contact, &RenderOptions::default(), today)
}

#[test]
fn format_card_lists_name_then_fields() {
    let card = card_for(&["name: Jane, Janie", "phone: 5551234567", "discord: jane"]);
    assert_eq!(
        format_card(&card),
        "Jane\n  Nickname: Janie\n  📞 +1 (555) 123-4567  <tel:+1 (555) 123-4567>\n  💬 +1 (555) 123-4567  <sms:+1 (555) 123-4567>\n  🎮 jane\n"
    );
}

#[test]
fn format_card_marks_empty_cards() {
    let card = card_for(&["color: teal"]);
    assert_eq!(format_card(&card), "(empty contact)\n");
}

#[test]
fn format_cards_separates_with_blank_line() {
    let joined = format_cards(&["A\n".to_string(), "B\n".to_string()]);
    assert_eq!(joined, "A\n\nB\n");
}

#[test]
fn format_contact_shows_channel_ids() {
    let contact = Contact {
        name: "Jane".to_string(),
        discord: vec![DiscordHandle::with_channel("jane", "42")],
        ..Contact::default()
    };
    assert_eq!(format_contact(&contact), "name: Jane\ndiscord: jane (42)\n");
}

#[test]
fn format_fields_keeps_empty_entries() {
    let fields = tokenize(["email:", "Name: Jane, Janie"]);
    assert_eq!(format_fields(&fields), "email:\nname: Jane, Janie\n");
}
