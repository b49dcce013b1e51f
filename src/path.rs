//! Detection of the authoritative resolv.conf path.
//!
//! When `/etc/resolv.conf` lists a single loopback nameserver, the host is
//! assumed to delegate DNS to a local stub resolver such as
//! systemd-resolved. That address is unreachable from inside a container, so
//! the upstream list generated by the stub at
//! `/run/systemd/resolve/resolv.conf` is used instead.

use crate::parse;
use std::net::IpAddr;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Default resolv.conf location.
pub const DEFAULT_PATH: &str = "/etc/resolv.conf";

/// resolv.conf maintained by systemd-resolved with the real upstream servers.
pub const ALTERNATE_PATH: &str = "/run/systemd/resolve/resolv.conf";

/// Chooses between a default and an alternate resolv.conf, once.
///
/// # Lifecycle
///
/// The first call to [`resolve`](Self::resolve) reads the default file and
/// makes the decision. Every later call, from any thread, returns the same
/// path without touching the filesystem. Concurrent first callers block
/// until the decision is made.
///
/// # Errors
///
/// None are reported. If the default file cannot be read or parsed, the
/// default path is chosen; the same failure surfaces when the caller reads
/// it.
///
/// # Example
///
/// ```rust,ignore
/// use resolvconf::PathResolver;
///
/// let resolver = PathResolver::with_paths("/tmp/resolv.conf", "/tmp/upstream.conf");
/// let conf = resolvconf::read(resolver.resolve())?;
/// ```
#[derive(Debug)]
pub struct PathResolver {
    default_path: PathBuf,
    alternate_path: PathBuf,
    resolved: OnceLock<PathBuf>,
}

impl PathResolver {
    /// Creates a resolver for [`DEFAULT_PATH`] and [`ALTERNATE_PATH`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_paths(DEFAULT_PATH, ALTERNATE_PATH)
    }

    /// Creates a resolver for custom candidate paths (useful for testing).
    #[must_use]
    pub fn with_paths(default_path: impl Into<PathBuf>, alternate_path: impl Into<PathBuf>) -> Self {
        Self {
            default_path: default_path.into(),
            alternate_path: alternate_path.into(),
            resolved: OnceLock::new(),
        }
    }

    /// Returns the path probed for a stub resolver.
    #[must_use]
    pub fn default_path(&self) -> &Path {
        &self.default_path
    }

    /// Returns the path used when a stub resolver is detected.
    #[must_use]
    pub fn alternate_path(&self) -> &Path {
        &self.alternate_path
    }

    /// Returns the authoritative path, detecting it on first use.
    #[must_use]
    pub fn resolve(&self) -> &Path {
        self.resolved.get_or_init(|| self.detect())
    }

    fn detect(&self) -> PathBuf {
        let path = if self.uses_stub_resolver() {
            &self.alternate_path
        } else {
            &self.default_path
        };

        tracing::info!(
            path = %path.display(),
            probed = %self.default_path.display(),
            "Selected resolv.conf"
        );
        path.clone()
    }

    fn uses_stub_resolver(&self) -> bool {
        let content = match std::fs::read(&self.default_path) {
            Ok(content) => content,
            Err(e) => {
                tracing::debug!(
                    path = %self.default_path.display(),
                    error = %e,
                    "Cannot read resolv.conf, keeping default"
                );
                return false;
            }
        };

        match parse::nameservers(&String::from_utf8_lossy(&content)) {
            Ok(nameservers) => is_single_loopback(&nameservers),
            Err(e) => {
                tracing::debug!(
                    path = %self.default_path.display(),
                    error = %e,
                    "Cannot parse resolv.conf, keeping default"
                );
                false
            }
        }
    }
}

impl Default for PathResolver {
    fn default() -> Self {
        Self::new()
    }
}

static SYSTEM: OnceLock<PathResolver> = OnceLock::new();

/// Returns the resolv.conf path this process should use.
///
/// Detection runs once per process; see [`PathResolver`].
#[must_use]
pub fn path() -> &'static Path {
    SYSTEM.get_or_init(PathResolver::new).resolve()
}

/// `true` for exactly one nameserver on a loopback address.
fn is_single_loopback(nameservers: &[IpAddr]) -> bool {
    matches!(nameservers, [ip] if ip.to_canonical().is_loopback())
}
