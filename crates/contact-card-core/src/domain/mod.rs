pub mod contact;
pub mod email;
pub mod handle;
pub mod phone;

pub use contact::{Contact, DiscordHandle};
pub use email::is_valid_email;
pub use handle::{decode_discord, strip_at};
pub use phone::format_phone;
