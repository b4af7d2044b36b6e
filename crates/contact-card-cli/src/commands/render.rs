use crate::commands::card_fmt::{format_card, format_cards};
use crate::commands::{print_json, print_text, Context};
use crate::error::not_found;
use crate::scan::find_contact_blocks;
use crate::util::{parse_date, read_input, source_label};
use anyhow::Result;
use clap::Args;
use contact_card_core::time::local_today;
use contact_card_core::{
    block_lines, parse_block, Contact, ContactCard, DayStyle, DiscordTarget, MonthStyle,
    RenderOptions, YearStyle,
};
use serde::Serialize;
use std::path::PathBuf;
use tracing::{debug, warn};

#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Markdown document to scan; reads stdin when omitted or `-`
    pub path: Option<PathBuf>,
    /// Reference date for ages (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub today: Option<String>,
    #[arg(long, value_name = "STYLE")]
    pub day: Option<DayStyle>,
    #[arg(long, value_name = "STYLE")]
    pub month: Option<MonthStyle>,
    #[arg(long, value_name = "STYLE")]
    pub year: Option<YearStyle>,
    /// Open Discord links in the client or on the web
    #[arg(long, value_name = "TARGET")]
    pub discord: Option<DiscordTarget>,
}

#[derive(Debug, Serialize)]
struct RenderedBlock {
    line: usize,
    contact: Contact,
    card: ContactCard,
}

pub fn render(ctx: &Context<'_>, args: RenderArgs) -> Result<()> {
    let options = render_options(ctx, &args);
    debug!(
        day = options.birthday.day.as_str(),
        month = options.birthday.month.as_str(),
        year = options.birthday.year.as_str(),
        discord = options.discord.as_str(),
        "render options"
    );
    let today = match args.today.as_deref() {
        Some(raw) => parse_date(raw)?,
        None => local_today(),
    };

    let document = read_input(args.path.as_deref())?;
    let source = source_label(args.path.as_deref());
    let blocks = find_contact_blocks(&document);
    if blocks.is_empty() {
        return Err(not_found(format!("no contact blocks in {source}")));
    }
    debug!(source = %source, count = blocks.len(), "contact blocks found");

    let mut rendered = Vec::with_capacity(blocks.len());
    for block in blocks {
        let lines = block_lines(&block.body);
        let Some(contact) = parse_block(&lines) else {
            warn!(line = block.line, "contact block produced no record");
            continue;
        };
        if contact.is_blank() {
            warn!(line = block.line, "contact block has no recognized fields");
        } else {
            debug!(line = block.line, lines = lines.len(), name = %contact.name, "contact parsed");
        }
        let card = ContactCard::build(&contact, &options, today);
        rendered.push(RenderedBlock {
            line: block.line,
            contact,
            card,
        });
    }

    if ctx.json {
        return print_json(&rendered);
    }

    let cards: Vec<String> = rendered.iter().map(|block| format_card(&block.card)).collect();
    print_text(&format_cards(&cards))
}

fn render_options(ctx: &Context<'_>, args: &RenderArgs) -> RenderOptions {
    let mut options = ctx.config.render_options();
    if let Some(day) = args.day {
        options.birthday.day = day;
    }
    if let Some(month) = args.month {
        options.birthday.month = month;
    }
    if let Some(year) = args.year {
        options.birthday.year = year;
    }
    if let Some(discord) = args.discord {
        options.discord = discord;
    }
    options
}
