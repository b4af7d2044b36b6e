//! Host-independent card model: a contact laid out as text and link elements.

pub mod links;

pub use links::DiscordTarget;

use crate::domain::Contact;
use crate::rules::{calculate_age, format_birthday, BirthdayFormat};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Display options passed to the renderer; no ambient settings are read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderOptions {
    pub birthday: BirthdayFormat,
    pub discord: DiscordTarget,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Nickname,
    Birthday,
    Call,
    Message,
    Email,
    Instagram,
    Discord,
}

impl FieldKind {
    pub fn icon(self) -> Option<&'static str> {
        match self {
            FieldKind::Nickname | FieldKind::Birthday => None,
            FieldKind::Call => Some("📞"),
            FieldKind::Message => Some("💬"),
            FieldKind::Email => Some("📧"),
            FieldKind::Instagram => Some("📷"),
            FieldKind::Discord => Some("🎮"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardField {
    pub kind: FieldKind,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

impl CardField {
    fn text(kind: FieldKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            href: None,
        }
    }

    fn link(kind: FieldKind, text: impl Into<String>, href: String) -> Self {
        Self {
            kind,
            text: text.into(),
            href: Some(href),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactCard {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub fields: Vec<CardField>,
}

/// Receives the elements of a card in display order.
pub trait CardSink {
    fn name(&mut self, name: &str);
    fn field(&mut self, field: &CardField);
}

impl ContactCard {
    /// Lays out `contact`; `today` is the reference date for the age suffix.
    ///
    /// The ` (N years old)` suffix is only added for positive ages, so a
    /// birthday later than `today` shows the date alone.
    pub fn build(contact: &Contact, options: &RenderOptions, today: NaiveDate) -> Self {
        let mut fields = Vec::new();

        if !contact.nickname.is_empty() {
            let label = if contact.nickname.len() > 1 {
                "Nicknames"
            } else {
                "Nickname"
            };
            fields.push(CardField::text(
                FieldKind::Nickname,
                format!("{label}: {}", contact.nickname.join(", ")),
            ));
        }

        if !contact.birthday.is_empty() {
            let shown = format_birthday(&contact.birthday, &options.birthday)
                .unwrap_or_else(|| contact.birthday.clone());
            let age = match calculate_age(&contact.birthday, today) {
                Some(age) if age > 0 => format!(" ({age} years old)"),
                _ => String::new(),
            };
            fields.push(CardField::text(
                FieldKind::Birthday,
                format!("Birthday: {shown}{age}"),
            ));
        }

        for phone in &contact.phone {
            fields.push(CardField::link(
                FieldKind::Call,
                phone.as_str(),
                links::tel_href(phone),
            ));
            fields.push(CardField::link(
                FieldKind::Message,
                phone.as_str(),
                links::sms_href(phone),
            ));
        }

        for email in &contact.email {
            fields.push(CardField::link(
                FieldKind::Email,
                email.as_str(),
                links::mailto_href(email),
            ));
        }

        for insta in &contact.insta {
            fields.push(CardField::link(
                FieldKind::Instagram,
                format!("@{insta}"),
                links::instagram_href(insta),
            ));
        }

        for discord in &contact.discord {
            let field = match &discord.channel_id {
                Some(channel_id) => CardField::link(
                    FieldKind::Discord,
                    discord.handle.as_str(),
                    links::discord_dm_href(channel_id, options.discord),
                ),
                None => CardField::text(FieldKind::Discord, discord.handle.as_str()),
            };
            fields.push(field);
        }

        let name = (!contact.name.is_empty()).then(|| contact.name.clone());
        Self { name, fields }
    }

    pub fn render_into<S: CardSink + ?Sized>(&self, sink: &mut S) {
        if let Some(name) = &self.name {
            sink.name(name);
        }
        for field in &self.fields {
            sink.field(field);
        }
    }
}
