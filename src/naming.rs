//! Project name validation and normalization.

use std::str::FromStr;

/// Where a sanitized name is going to be used.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Scope {
    /// Package and file names: hyphens are kept.
    #[default]
    File,
    /// Filesystem directory names: hyphens become underscores.
    Directory,
}

impl FromStr for Scope {
    type Err = std::convert::Infallible;

    // Anything that is not "directory" falls back to the file scope.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "directory" => Scope::Directory,
            _ => Scope::File,
        })
    }
}

/// Returns `true` when `name` starts with an ASCII letter and only contains
/// ASCII letters, digits, `-` or `_`.
pub fn validate(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        }
        _ => false,
    }
}

pub fn sanitize(scope: Scope, name: &str) -> String {
    match scope {
        Scope::Directory => name.replace('-', "_").to_lowercase(),
        Scope::File => name.to_lowercase(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_well_formed_names() {
        for name in ["a", "my-app", "My_App2", "serverless-api_v2", "Z9-_"] {
            assert!(validate(name), "{name} should be accepted");
        }
    }

    #[test]
    fn rejects_bad_leading_characters() {
        for name in ["2bad", "-app", "_app", "", " app"] {
            assert!(!validate(name), "{name:?} should be rejected");
        }
    }

    #[test]
    fn rejects_disallowed_symbols() {
        for name in ["my app", "my.app", "my/app", "app!", "caf\u{e9}", "a\tb", "@org"] {
            assert!(!validate(name), "{name:?} should be rejected");
        }
    }

    #[test]
    fn directory_scope_replaces_every_hyphen() {
        let sanitized = sanitize(Scope::Directory, "My-Cool-App");
        assert_eq!(sanitized, "my_cool_app");
        assert!(!sanitized.contains('-'));
    }

    #[test]
    fn file_scope_only_lowercases() {
        assert_eq!(sanitize(Scope::File, "My-Cool_App"), "my-cool_app");
    }

    #[test]
    fn sanitize_is_idempotent() {
        for scope in [Scope::File, Scope::Directory] {
            for name in ["my-app", "MY_APP", "a-b-c-D"] {
                let once = sanitize(scope, name);
                assert_eq!(sanitize(scope, &once), once);
            }
        }
    }

    #[test]
    fn scope_parses_with_file_default() {
        assert_eq!("directory".parse::<Scope>().unwrap(), Scope::Directory);
        assert_eq!("file".parse::<Scope>().unwrap(), Scope::File);
        assert_eq!("whatever".parse::<Scope>().unwrap(), Scope::File);
        assert_eq!(Scope::default(), Scope::File);
    }
}
