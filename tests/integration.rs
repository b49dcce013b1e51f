//! Integration tests for `resolvconf`.
//!
//! Tests marked `#[ignore]` depend on the host's resolver setup:
//!
//! ```bash
//! cargo test -- --ignored
//! ```

use resolvconf::{Error, PathResolver, ResolvConf};
use sha2::{Digest, Sha256};
use std::net::IpAddr;
use std::path::Path;

// ---------------------------------------------------------------------------
// Tempdir tests
// ---------------------------------------------------------------------------

fn write(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn stub_resolver_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let default = write(dir.path(), "resolv.conf", "nameserver 127.0.0.53\noptions edns0 trust-ad\n");
    let upstream = write(
        dir.path(),
        "upstream.conf",
        "nameserver 192.168.1.1\nnameserver 2001:4860:4860::8888\nsearch home.arpa\n",
    );

    let resolver = PathResolver::with_paths(&default, &upstream);
    assert_eq!(resolver.resolve(), upstream.as_path());

    let conf = resolvconf::read(resolver.resolve()).unwrap();
    assert_eq!(
        conf.nameservers(),
        [
            "192.168.1.1".parse::<IpAddr>().unwrap(),
            "2001:4860:4860::8888".parse::<IpAddr>().unwrap(),
        ]
    );
    assert_eq!(conf.search(), ["home.arpa"]);
}

#[test]
fn sample_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(dir.path(), "resolv.conf", "nameserver 8.8.8.8\n# comment\noption ndots:0");

    let conf = resolvconf::read(&path).unwrap();
    assert_eq!(conf.nameservers(), ["8.8.8.8".parse::<IpAddr>().unwrap()]);
    assert_eq!(conf.options(), ["ndots:0"]);
}

#[test]
fn no_nameservers() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(dir.path(), "resolv.conf", "# generated\n\nsearch example.com\n");

    let conf = resolvconf::read(&path).unwrap();
    assert!(conf.nameservers().is_empty());
}

#[test]
fn invalid_nameserver_identifies_line() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(
        dir.path(),
        "resolv.conf",
        "nameserver 1.1.1.1\n# comment\nnameserver 1.1.1.1.1\n",
    );

    let err = resolvconf::read(&path).unwrap_err();
    assert!(matches!(
        &err,
        Error::InvalidNameserver { line: 3, value } if value == "1.1.1.1.1"
    ));
    assert!(err.to_string().contains("line 3"));
}

#[test]
fn hash_matches_raw_bytes() {
    let dir = tempfile::tempdir().unwrap();
    let content = "nameserver 10.0.0.1 \t# router\n\n";
    let path = write(dir.path(), "resolv.conf", content);

    let conf = resolvconf::read(&path).unwrap();
    let expected = format!("sha256:{}", hex::encode(Sha256::digest(content.as_bytes())));
    assert_eq!(conf.hash(), expected);
    assert_eq!(conf.content(), content.as_bytes());

    // Same parsed data, different bytes.
    write(dir.path(), "resolv.conf", "nameserver 10.0.0.1\n");
    let changed = resolvconf::read(&path).unwrap();
    assert_eq!(changed.nameservers(), conf.nameservers());
    assert_ne!(changed.hash(), conf.hash());
}

#[test]
fn repeated_reads_are_equal() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(dir.path(), "resolv.conf", "nameserver 9.9.9.9\noptions rotate\n");

    let a = resolvconf::read(&path).unwrap();
    let b = resolvconf::read(&path).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.hash(), b.hash());
}

#[test]
fn missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let default = dir.path().join("resolv.conf");
    let resolver = PathResolver::with_paths(&default, dir.path().join("upstream.conf"));

    assert_eq!(resolver.resolve(), default.as_path());
    let err = resolvconf::read(resolver.resolve()).unwrap_err();
    assert!(err.is_not_found());
    assert!(!err.is_parse_error());
}

#[test]
fn concurrent_resolve_agrees() {
    let dir = tempfile::tempdir().unwrap();
    let default = write(dir.path(), "resolv.conf", "nameserver 127.0.0.53\n");
    let resolver = PathResolver::with_paths(&default, dir.path().join("upstream.conf"));

    let results: Vec<_> = std::thread::scope(|s| {
        let handles: Vec<_> = (0..8)
            .map(|_| s.spawn(|| resolver.resolve().to_path_buf()))
            .collect();

        // Once decided, file changes are invisible.
        std::fs::write(&default, "nameserver 8.8.8.8\n").unwrap();

        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    let decided = resolver.resolve();
    assert!(results.iter().all(|p| p.as_path() == decided));
    assert_eq!(resolver.resolve(), decided);
}

#[test]
fn parse_in_memory() {
    let conf = ResolvConf::parse(b"nameserver fe80::1\noption ndots:1\noption ndots:2\n".to_vec())
        .unwrap();
    assert_eq!(conf.options(), ["ndots:1", "ndots:2"]);
    assert_eq!(conf.options().last().map(String::as_str), Some("ndots:2"));
}

// ---------------------------------------------------------------------------
// Host-dependent tests
// ---------------------------------------------------------------------------

#[test]
#[ignore = "reads the host resolver configuration"]
fn host_default() {
    let path = resolvconf::path();
    assert!(path == Path::new(resolvconf::DEFAULT_PATH) || path == Path::new(resolvconf::ALTERNATE_PATH));

    let conf = resolvconf::get_default().unwrap();
    assert!(conf.hash().starts_with("sha256:"));
    assert_eq!(resolvconf::path(), path);
}
