// Copyright 2019 Arnau Siches
//
// Licensed under the MIT license <LICENSE or http://opensource.org/licenses/MIT>.
// This file may not be copied, modified, or distributed except
// according to those terms.

//! Relation types as described in section 8.2 of the HAL specification and
//! section 4 of RFC5988.

use crate::curie::Curie;
use crate::error::Result;
use crate::name::RelationName;
use crate::registered::RegisteredRel;
use std::fmt::{self, Display};
use std::str::FromStr;
use url::Url;

/// Anything that names a relation type.
///
/// Relation names are compared case-insensitively (RFC5988 section 4.2), so
/// lookups use `folded_name`.
pub trait Rel {
    fn name(&self) -> &str;

    fn folded_name(&self) -> String {
        self.name().to_lowercase()
    }
}

impl Rel for str {
    fn name(&self) -> &str {
        self.trim()
    }
}

impl Rel for String {
    fn name(&self) -> &str {
        self.trim()
    }
}

impl Rel for RegisteredRel {
    fn name(&self) -> &str {
        self.as_str()
    }
}

/// An Extension Relation Type.
///
/// It SHOULD be a URI or a name using the CURIE syntax (`prefix:reference`)
/// but any non-empty string is accepted.
///
/// ```
/// use hal::rel::{CustomRel, Rel};
///
/// let rel = CustomRel::new(" ea:basket ").unwrap();
///
/// assert_eq!(rel.name(), "ea:basket");
/// assert_eq!(rel.curie().unwrap().prefix(), "ea");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CustomRel {
    name: RelationName,
}

impl CustomRel {
    pub fn new(name: &str) -> Result<CustomRel> {
        Ok(CustomRel {
            name: RelationName::new(name)?,
        })
    }

    pub fn set_name(&mut self, name: &str) -> Result<()> {
        self.name.rename(name)
    }

    /// Whether the name is an absolute URI with a host, e.g.
    /// `http://example.org/rels/widgets`.
    pub fn is_uri(&self) -> bool {
        Url::parse(self.name.as_str())
            .map(|url| url.has_host())
            .unwrap_or(false)
    }

    /// The name as a CURIE, unless it is a URI.
    pub fn curie(&self) -> Option<Curie> {
        if self.is_uri() {
            return None;
        }

        Curie::parse(self.name.as_str()).ok()
    }
}

impl Rel for CustomRel {
    fn name(&self) -> &str {
        self.name.as_str()
    }
}

impl Display for CustomRel {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "{}", self.name)
    }
}

/// Either a registered or an extension relation type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Relation {
    Registered(RegisteredRel),
    Custom(CustomRel),
}

impl Relation {
    /// Classifies a raw relation name.
    ///
    /// Registered names match regardless of case; anything else becomes a
    /// custom relation keeping its original spelling.
    ///
    /// ```
    /// use hal::rel::Relation;
    /// use hal::registered::RegisteredRel;
    ///
    /// let rel = Relation::parse("Next").unwrap();
    ///
    /// assert_eq!(rel, Relation::Registered(RegisteredRel::Next));
    /// ```
    pub fn parse(raw: &str) -> Result<Relation> {
        let name = RelationName::new(raw)?;

        match RegisteredRel::lookup(&name.folded()) {
            Ok(rel) => Ok(Relation::Registered(rel)),
            Err(_) => Ok(Relation::Custom(CustomRel { name })),
        }
    }

    pub fn is_registered(&self) -> bool {
        match self {
            Relation::Registered(_) => true,
            _ => false,
        }
    }
}

impl Rel for Relation {
    fn name(&self) -> &str {
        match self {
            Relation::Registered(rel) => rel.name(),
            Relation::Custom(rel) => rel.name(),
        }
    }
}

impl FromStr for Relation {
    type Err = crate::error::HalError;

    fn from_str(s: &str) -> Result<Relation> {
        Relation::parse(s)
    }
}

impl From<RegisteredRel> for Relation {
    fn from(rel: RegisteredRel) -> Relation {
        Relation::Registered(rel)
    }
}

impl From<CustomRel> for Relation {
    fn from(rel: CustomRel) -> Relation {
        Relation::Custom(rel)
    }
}

impl Display for Relation {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "{}", self.name())
    }
}
