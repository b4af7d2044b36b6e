//! Parsing of `contact` block bodies into [`Contact`](crate::Contact) records.

pub mod builder;
pub mod tokenizer;

pub use builder::build_contact;
pub use tokenizer::{tokenize, FieldMap};

use crate::domain::Contact;

/// Runs both parsing stages over the lines of one block.
pub fn parse_block<I, S>(lines: I) -> Option<Contact>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    build_contact(&tokenize(lines))
}

/// Splits a raw block body into the trimmed, non-empty lines the tokenizer expects.
pub fn block_lines(body: &str) -> Vec<&str> {
    body.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}
