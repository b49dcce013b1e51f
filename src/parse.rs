//! Line-oriented resolv.conf scanning.
//!
//! This is not a full `resolv.conf(5)` grammar. Each extractor looks for
//! lines starting with its keyword once comments and surrounding whitespace
//! have been removed, and treats the rest of the line as the value.

use crate::error::{Error, Result};
use std::net::IpAddr;

/// Starts a comment that runs to the end of the line.
pub const COMMENT_MARKER: &str = "#";

const NAMESERVER_KEY: &str = "nameserver";
const OPTION_KEY: &str = "option";
const OPTIONS_KEY: &str = "options";
const SEARCH_KEY: &str = "search";

/// Splits `input` on `\n`, cuts each line at the first `marker` and trims it.
///
/// Line count and order are preserved: blank and comment-only lines come
/// back as empty strings.
#[must_use]
pub fn strip_comments<'a>(input: &'a str, marker: &str) -> Vec<&'a str> {
    input
        .split('\n')
        .map(|line| line.find(marker).map_or(line, |idx| &line[..idx]).trim())
        .collect()
}

/// Returns every nameserver address in file order.
///
/// # Errors
///
/// Returns [`Error::InvalidNameserver`] for the first `nameserver` line
/// whose value is not an IPv4 or IPv6 literal.
pub fn nameservers(input: &str) -> Result<Vec<IpAddr>> {
    let mut nameservers = Vec::new();
    for (idx, line) in strip_comments(input, COMMENT_MARKER).into_iter().enumerate() {
        let Some(rest) = line.strip_prefix(NAMESERVER_KEY) else {
            continue;
        };

        let value = rest.trim();
        let ip = value.parse::<IpAddr>().map_err(|_| Error::InvalidNameserver {
            line: idx + 1,
            value: value.to_string(),
        })?;
        nameservers.push(ip);
    }
    Ok(nameservers)
}

/// Returns the value of every `option`/`options` line in file order.
///
/// Values are kept verbatim. Callers that want "last line wins" should take
/// the final entry.
#[must_use]
pub fn options(input: &str) -> Vec<String> {
    strip_comments(input, COMMENT_MARKER)
        .into_iter()
        .filter(|line| line.starts_with(OPTION_KEY))
        .map(|line| {
            line.strip_prefix(OPTIONS_KEY)
                .or_else(|| line.strip_prefix(OPTION_KEY))
                .unwrap_or(line)
                .trim()
                .to_string()
        })
        .collect()
}

/// Returns the domains of every `search` line, flattened in file order.
#[must_use]
pub fn search_domains(input: &str) -> Vec<String> {
    strip_comments(input, COMMENT_MARKER)
        .into_iter()
        .filter_map(|line| line.strip_prefix(SEARCH_KEY))
        .flat_map(str::split_whitespace)
        .map(str::to_string)
        .collect()
}
