use crate::commands::card_fmt::{format_contact, format_fields};
use crate::commands::{print_json, print_text, Context};
use crate::error::not_found;
use crate::util::{read_input, source_label};
use anyhow::Result;
use clap::Args;
use contact_card_core::{block_lines, build_contact, tokenize};
use std::path::PathBuf;
use tracing::debug;

#[derive(Debug, Args)]
pub struct ParseArgs {
    /// File holding a block body; reads stdin when omitted or `-`
    pub path: Option<PathBuf>,
    /// Print the aggregated fields instead of the contact record
    #[arg(long)]
    pub fields: bool,
}

pub fn parse(ctx: &Context<'_>, args: ParseArgs) -> Result<()> {
    let body = read_input(args.path.as_deref())?;
    let lines = block_lines(&body);
    let fields = tokenize(&lines);
    debug!(
        source = %source_label(args.path.as_deref()),
        lines = lines.len(),
        keys = fields.len(),
        "block tokenized"
    );

    if args.fields {
        if ctx.json {
            return print_json(&fields);
        }
        return print_text(&format_fields(&fields));
    }

    let contact = build_contact(&fields).ok_or_else(|| not_found("no contact in input"))?;
    if ctx.json {
        print_json(&contact)
    } else {
        print_text(&format_contact(&contact))
    }
}
