pub mod block;
pub mod domain;
pub mod error;
pub mod render;
pub mod rules;
pub mod time;

pub use block::{block_lines, build_contact, parse_block, tokenize, FieldMap};
pub use domain::*;
pub use error::CoreError;
pub use render::{CardField, CardSink, ContactCard, DiscordTarget, FieldKind, RenderOptions};
pub use rules::*;
