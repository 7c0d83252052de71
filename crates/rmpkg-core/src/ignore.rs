//! Ignore set: filename suffixes supplied with `--ignore`.

use std::path::{Component, Path};

/// Ordered list of suffixes; a path is ignored if it ends with any of them.
///
/// Order and duplicates are kept as given. Matching is plain string suffix
/// matching on the `/`-separated relative path, so `dat` ignores both
/// `bin/bt.dat` and `bin/enc.dat`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IgnoreSet {
    suffixes: Vec<String>,
}

impl IgnoreSet {
    pub fn new(suffixes: Vec<String>) -> Self {
        Self { suffixes }
    }

    pub fn suffixes(&self) -> &[String] {
        &self.suffixes
    }

    pub fn is_empty(&self) -> bool {
        self.suffixes.is_empty()
    }

    /// True if `relative_path` ends with any suffix in the set.
    pub fn matches(&self, relative_path: &str) -> bool {
        self.suffixes.iter().any(|s| relative_path.ends_with(s.as_str()))
    }
}

impl<S: Into<String>> FromIterator<S> for IgnoreSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}

/// Renders a relative path with `/` separators regardless of host OS.
pub fn slash_path(relative: &Path) -> String {
    relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn empty_set_matches_nothing() {
        let set = IgnoreSet::default();
        assert!(set.is_empty());
        assert!(!set.matches("ragemp-server.exe"));
    }

    #[test]
    fn suffix_matching() {
        let set: IgnoreSet = ["b.txt", ".dll"].into_iter().collect();
        assert!(set.matches("b.txt"));
        assert!(set.matches("sub/b.txt"));
        assert!(set.matches("BugTrap-x64.dll"));
        assert!(!set.matches("a.txt"));
        assert!(!set.matches("b.txt.bak"));
    }

    #[test]
    fn every_suffix_is_checked() {
        // Later suffixes must be consulted regardless of how many paths are tested.
        let set: IgnoreSet = ["one", "two", "three", "conf.json"].into_iter().collect();
        assert!(set.matches("dotnet/settings/conf.json"));
    }

    #[test]
    fn order_and_duplicates_preserved() {
        let set = IgnoreSet::new(vec!["x".into(), "y".into(), "x".into()]);
        assert_eq!(set.suffixes(), &["x", "y", "x"]);
    }

    #[test]
    fn slash_path_uses_forward_slashes() {
        let set: IgnoreSet = ["bin/enc.dat"].into_iter().collect();
        let rel: PathBuf = ["bin", "enc.dat"].iter().collect();
        assert!(set.matches(&slash_path(&rel)));
        assert_eq!(slash_path(Path::new("./bin/enc.dat")), "bin/enc.dat");
    }
}
