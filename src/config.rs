//! resolv.conf snapshot.

use crate::error::{Error, Result};
use crate::parse;
use sha2::{Digest, Sha256};
use std::net::IpAddr;
use std::path::Path;

/// Prefix of every hash produced by [`hash`].
const HASH_PREFIX: &str = "sha256:";

/// An immutable view of a resolv.conf file at the moment it was read.
///
/// # Example
///
/// ```
/// use resolvconf::ResolvConf;
///
/// let conf = ResolvConf::parse(b"nameserver 8.8.8.8\n# comment\noption ndots:0\n".to_vec())?;
///
/// assert_eq!(conf.nameservers(), ["8.8.8.8".parse::<std::net::IpAddr>()?]);
/// assert_eq!(conf.options(), ["ndots:0"]);
/// assert!(conf.hash().starts_with("sha256:"));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvConf {
    content: Vec<u8>,
    hash: String,
    nameservers: Vec<IpAddr>,
    options: Vec<String>,
    search: Vec<String>,
}

impl ResolvConf {
    /// Hashes and parses raw file content.
    ///
    /// Invalid UTF-8 is replaced before parsing; the hash always covers the
    /// original bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidNameserver`] if a `nameserver` line holds
    /// something other than an IP address, or [`Error::Hash`] if hashing
    /// fails.
    pub fn parse(content: Vec<u8>) -> Result<Self> {
        let hash = hash(&content)?;

        let text = String::from_utf8_lossy(&content);
        let nameservers = parse::nameservers(&text)?;
        let options = parse::options(&text);
        let search = parse::search_domains(&text);

        Ok(Self {
            content,
            hash,
            nameservers,
            options,
            search,
        })
    }

    /// Raw file bytes.
    #[must_use]
    pub fn content(&self) -> &[u8] {
        &self.content
    }

    /// Content hash in `sha256:<hex>` form.
    #[must_use]
    pub fn hash(&self) -> &str {
        &self.hash
    }

    /// Nameserver addresses in file order.
    #[must_use]
    pub fn nameservers(&self) -> &[IpAddr] {
        &self.nameservers
    }

    /// Option values in file order, verbatim.
    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Search domains in file order.
    #[must_use]
    pub fn search(&self) -> &[String] {
        &self.search
    }

    /// Consumes the snapshot, returning the raw bytes.
    #[must_use]
    pub fn into_content(self) -> Vec<u8> {
        self.content
    }
}

/// Reads and parses the resolv.conf at `path`.
///
/// Nothing is cached: every call re-reads the file.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read, plus any error from
/// [`ResolvConf::parse`].
pub fn read(path: impl AsRef<Path>) -> Result<ResolvConf> {
    let path = path.as_ref();
    let content = std::fs::read(path)?;
    let conf = ResolvConf::parse(content)?;

    tracing::debug!(
        path = %path.display(),
        hash = %conf.hash,
        nameservers = conf.nameservers.len(),
        "Read resolv.conf"
    );
    Ok(conf)
}

/// Computes `sha256:<64 lowercase hex chars>` over `data`.
///
/// # Errors
///
/// Returns [`Error::Hash`] if streaming into the hasher fails.
pub fn hash(mut data: &[u8]) -> Result<String> {
    let mut hasher = Sha256::new();
    std::io::copy(&mut data, &mut hasher).map_err(Error::Hash)?;
    Ok(format!("{HASH_PREFIX}{}", hex::encode(hasher.finalize())))
}
