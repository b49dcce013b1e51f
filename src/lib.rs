//! # resolvconf
//!
//! Locate, parse and hash the host `resolv.conf` for container DNS setup.
//!
//! On hosts running a local stub resolver (systemd-resolved), the
//! nameserver in `/etc/resolv.conf` is a loopback address that a container
//! cannot reach. This crate detects that case once per process and points
//! callers at the stub's upstream list instead.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! // Detects the right file, reads it, hashes it.
//! let conf = resolvconf::get_default()?;
//!
//! for ns in conf.nameservers() {
//!     println!("nameserver {ns}");
//! }
//!
//! // Compare against a later read to detect changes.
//! let hash = conf.hash().to_owned();
//! ```
//!
//! ## Parsing
//!
//! The parser is line-prefix based, not a full `resolv.conf(5)` grammar:
//!
//! - `nameserver <ip>` lines must hold an IPv4 or IPv6 literal, otherwise
//!   the whole read fails with [`Error::InvalidNameserver`];
//! - `option`/`options` values are returned verbatim, one entry per line;
//! - `search` lines contribute their domains in order;
//! - `#` starts a comment, also after content on the same line.

#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod parse;
pub mod path;

pub use config::{ResolvConf, hash, read};
pub use error::{Error, Result};
pub use path::{ALTERNATE_PATH, DEFAULT_PATH, PathResolver, path};

/// Reads the resolv.conf selected by [`path()`].
///
/// # Errors
///
/// Same as [`read`].
pub fn get_default() -> Result<ResolvConf> {
    read(path())
}
