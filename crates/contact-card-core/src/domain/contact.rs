use serde::{Deserialize, Serialize};

/// A contact record built from one `contact` block.
///
/// Absent fields are represented by empty strings and empty lists, so a
/// block with no recognized keys still yields a (blank) record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    pub nickname: Vec<String>,
    pub birthday: String,
    pub phone: Vec<String>,
    pub email: Vec<String>,
    pub insta: Vec<String>,
    pub discord: Vec<DiscordHandle>,
}

impl Contact {
    pub fn is_blank(&self) -> bool {
        self.name.is_empty()
            && self.nickname.is_empty()
            && self.birthday.is_empty()
            && self.phone.is_empty()
            && self.email.is_empty()
            && self.insta.is_empty()
            && self.discord.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscordHandle {
    pub handle: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<String>,
}

impl DiscordHandle {
    pub fn new(handle: impl Into<String>) -> Self {
        Self {
            handle: handle.into(),
            channel_id: None,
        }
    }

    pub fn with_channel(handle: impl Into<String>, channel_id: impl Into<String>) -> Self {
        Self {
            handle: handle.into(),
            channel_id: Some(channel_id.into()),
        }
    }
}
