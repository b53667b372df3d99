// Copyright 2019 Arnau Siches
//
// Licensed under the MIT license <LICENSE or http://opensource.org/licenses/MIT>.
// This file may not be copied, modified, or distributed except
// according to those terms.

use crate::error::{HalError, Result};
use std::fmt::{self, Display};

/// Trims the leading and trailing white space (as defined by Unicode) of the
/// given string.
///
/// Fails with `HalError::EmptyName` when nothing is left.
///
/// ```
/// use hal::name::normalize;
///
/// assert_eq!(normalize("  self ").unwrap(), "self");
/// assert!(normalize(" \t").is_err());
/// ```
pub fn normalize(raw: &str) -> Result<String> {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return Err(HalError::EmptyName);
    }

    Ok(trimmed.to_string())
}

/// A validated, non-empty relation name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RelationName(String);

impl RelationName {
    pub fn new(raw: &str) -> Result<RelationName> {
        normalize(raw).map(RelationName)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Replaces the name. The current name is kept if the new one is empty.
    pub fn rename(&mut self, raw: &str) -> Result<()> {
        self.0 = normalize(raw)?;

        Ok(())
    }

    /// Lower-case form used to compare relation names.
    pub fn folded(&self) -> String {
        self.0.to_lowercase()
    }
}

impl AsRef<str> for RelationName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for RelationName {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_both_ends() {
        let actual = normalize(" another test ").expect("Expect a valid name");

        assert_eq!(actual, "another test");
    }

    #[test]
    fn padding_is_irrelevant() {
        for name in &["test", "ea:orders", "http://example.org/rels/x"] {
            let padded = format!(" {} ", name);

            assert_eq!(
                normalize(&padded).expect("Expect a valid name"),
                normalize(name).expect("Expect a valid name")
            );
        }
    }

    #[test]
    fn unicode_whitespace() {
        let actual = normalize("\u{2003}next\u{00A0}\n").expect("Expect a valid name");

        assert_eq!(actual, "next");
    }

    #[test]
    fn empty() {
        assert!(matches!(normalize(""), Err(HalError::EmptyName)));
        assert!(matches!(normalize("   "), Err(HalError::EmptyName)));
    }

    #[test]
    fn rename_keeps_name_on_failure() {
        let mut name = RelationName::new("Leonardo").expect("Expect a valid name");

        assert!(name.rename(" ").is_err());
        assert_eq!(name.as_str(), "Leonardo");

        name.rename(" Donatello").expect("Expect a valid name");
        assert_eq!(name.as_str(), "Donatello");
    }

    #[test]
    fn folded() {
        let name = RelationName::new("Self").expect("Expect a valid name");

        assert_eq!(name.folded(), "self");
        assert_eq!(name.to_string(), "Self");
    }
}
