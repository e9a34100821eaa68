//! Dependency name to package name mapping.
//!
//! The mapping is a naming heuristic for Debian-style development packages,
//! not a lookup against any package index.

use std::collections::BTreeMap;

/// Dependency name to guessed package name, keyed by dependency name.
pub type PackageMapping = BTreeMap<String, String>;

/// Guess the development package for a dependency name.
///
/// ```
/// use tarball_helper::resolver::guess_package;
///
/// assert_eq!(guess_package("OpenSSL"), "libopenssl-dev");
/// ```
pub fn guess_package(name: &str) -> String {
    format!("lib{}-dev", name.to_lowercase())
}

/// Map every dependency name to its guessed package.
pub fn suggest_packages<I, S>(names: I) -> PackageMapping
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    names
        .into_iter()
        .map(|name| {
            let name = name.as_ref();
            (name.to_string(), guess_package(name))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guess_lowercases_and_wraps() {
        assert_eq!(guess_package("OpenSSL"), "libopenssl-dev");
        assert_eq!(guess_package("ZLIB"), "libzlib-dev");
        assert_eq!(guess_package("zlib"), "libzlib-dev");
    }

    #[test]
    fn guess_keeps_existing_lib_prefix() {
        assert_eq!(guess_package("libcurl"), "liblibcurl-dev");
    }

    #[test]
    fn guess_accepts_any_string() {
        assert_eq!(guess_package(""), "lib-dev");
        assert_eq!(guess_package("gtk+-3.0"), "libgtk+-3.0-dev");
    }

    #[test]
    fn guess_is_case_insensitive_in_input() {
        for variant in ["openssl", "OPENSSL", "OpenSsl"] {
            assert_eq!(guess_package(variant), "libopenssl-dev");
        }
    }

    #[test]
    fn suggest_maps_every_name() {
        let mapping = suggest_packages(["OpenSSL", "ZLIB"]);
        assert_eq!(mapping.len(), 2);
        assert_eq!(mapping["OpenSSL"], "libopenssl-dev");
        assert_eq!(mapping["ZLIB"], "libzlib-dev");
    }

    #[test]
    fn suggest_collapses_repeated_names() {
        let mapping = suggest_packages(vec!["zlib".to_string(), "zlib".to_string()]);
        assert_eq!(mapping.len(), 1);
    }

    #[test]
    fn suggest_is_deterministic() {
        let first = suggest_packages(["Foo", "bar"]);
        let second = suggest_packages(["Foo", "bar"]);
        assert_eq!(first, second);
    }

    #[test]
    fn suggest_empty() {
        assert!(suggest_packages(Vec::<String>::new()).is_empty());
    }
}
