use anyhow::{Context as _, Result};
use chrono::NaiveDate;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

use crate::error::invalid_input;

/// Reads a file, or stdin when the path is absent or `-`.
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if !is_stdin(path) => {
            fs::read_to_string(path).with_context(|| format!("read {}", path.display()))
        }
        _ => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .with_context(|| "read stdin")?;
            Ok(buf)
        }
    }
}

pub fn source_label(path: Option<&Path>) -> String {
    match path {
        Some(path) if !is_stdin(path) => path.display().to_string(),
        _ => "stdin".to_string(),
    }
}

pub fn parse_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| invalid_input("invalid date format: expected YYYY-MM-DD"))
}

fn is_stdin(path: &Path) -> bool {
    path == Path::new("-")
}
