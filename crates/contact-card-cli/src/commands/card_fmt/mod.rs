use contact_card_core::{CardField, CardSink, Contact, ContactCard, FieldMap};

#[cfg(test)]
mod tests;

const EMPTY_CARD: &str = "(empty contact)";

/// Writes a card as indented plain text, one element per line.
#[derive(Debug, Default)]
pub(crate) struct TextSink {
    out: String,
}

impl TextSink {
    pub(crate) fn finish(self) -> String {
        self.out
    }
}

impl CardSink for TextSink {
    fn name(&mut self, name: &str) {
        self.out.push_str(name);
        self.out.push('\n');
    }

    fn field(&mut self, field: &CardField) {
        self.out.push_str("  ");
        if let Some(icon) = field.kind.icon() {
            self.out.push_str(icon);
            self.out.push(' ');
        }
        self.out.push_str(&field.text);
        if let Some(href) = &field.href {
            self.out.push_str("  <");
            self.out.push_str(href);
            self.out.push('>');
        }
        self.out.push('\n');
    }
}

pub(crate) fn format_card(card: &ContactCard) -> String {
    let mut sink = TextSink::default();
    card.render_into(&mut sink);
    let out = sink.finish();
    if out.is_empty() {
        format!("{EMPTY_CARD}\n")
    } else {
        out
    }
}

pub(crate) fn format_cards(cards: &[String]) -> String {
    cards.join("\n")
}

pub(crate) fn format_contact(contact: &Contact) -> String {
    let mut lines = Vec::new();
    if !contact.name.is_empty() {
        lines.push(format!("name: {}", contact.name));
    }
    push_list(&mut lines, "nickname", &contact.nickname);
    if !contact.birthday.is_empty() {
        lines.push(format!("birthday: {}", contact.birthday));
    }
    push_list(&mut lines, "phone", &contact.phone);
    push_list(&mut lines, "email", &contact.email);
    push_list(&mut lines, "insta", &contact.insta);
    for discord in &contact.discord {
        match &discord.channel_id {
            Some(channel_id) => lines.push(format!("discord: {} ({channel_id})", discord.handle)),
            None => lines.push(format!("discord: {}", discord.handle)),
        }
    }

    if lines.is_empty() {
        return format!("{EMPTY_CARD}\n");
    }
    lines.push(String::new());
    lines.join("\n")
}

pub(crate) fn format_fields(fields: &FieldMap) -> String {
    let mut out = String::new();
    for (key, values) in fields {
        if values.is_empty() {
            out.push_str(&format!("{key}:\n"));
        } else {
            out.push_str(&format!("{key}: {}\n", values.join(", ")));
        }
    }
    out
}

fn push_list(lines: &mut Vec<String>, label: &str, values: &[String]) {
    for value in values {
        lines.push(format!("{label}: {value}"));
    }
}
