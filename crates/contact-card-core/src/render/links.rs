use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

const DISCORD_CLIENT_BASE: &str = "discord://";
const DISCORD_WEB_BASE: &str = "https://discord.com";

/// Where Discord DM links should open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiscordTarget {
    #[default]
    Client,
    Web,
}

impl DiscordTarget {
    pub fn from_client_flag(client: bool) -> Self {
        if client {
            DiscordTarget::Client
        } else {
            DiscordTarget::Web
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DiscordTarget::Client => "client",
            DiscordTarget::Web => "web",
        }
    }

    fn base(self) -> &'static str {
        match self {
            DiscordTarget::Client => DISCORD_CLIENT_BASE,
            DiscordTarget::Web => DISCORD_WEB_BASE,
        }
    }
}

impl FromStr for DiscordTarget {
    type Err = CoreError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "client" | "app" => Ok(DiscordTarget::Client),
            "web" | "browser" => Ok(DiscordTarget::Web),
            _ => Err(CoreError::InvalidDiscordTarget(raw.to_string())),
        }
    }
}

pub fn tel_href(phone: &str) -> String {
    format!("tel:{phone}")
}

pub fn sms_href(phone: &str) -> String {
    format!("sms:{phone}")
}

pub fn mailto_href(email: &str) -> String {
    format!("mailto:{email}")
}

pub fn instagram_href(handle: &str) -> String {
    format!("https://www.instagram.com/{handle}/")
}

pub fn discord_dm_href(channel_id: &str, target: DiscordTarget) -> String {
    format!("{}/channels/@me/{channel_id}", target.base())
}
