// Copyright 2019 Arnau Siches
//
// Licensed under the MIT license <LICENSE or http://opensource.org/licenses/MIT>.
// This file may not be copied, modified, or distributed except
// according to those terms.

use crate::error::{HalError, Result};
use crate::name::normalize;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::convert::TryFrom;
use std::fmt::{self, Display};
use tracing::{debug, warn};
use url::Url;

/// The Link Object described in section 5 of the JSON Hypertext Application
/// Language draft.
///
/// `href` is either a URI (RFC3986) or a URI Template (RFC6570). Every other
/// property is optional and empty (or `false`) when unset.
///
/// ```
/// use hal::link::{Link, LinkOptions};
///
/// let link = Link::new(
///     "/orders{?id}",
///     LinkOptions {
///         templated: true,
///         ..LinkOptions::default()
///     },
/// )
/// .unwrap();
///
/// assert_eq!(link.to_string(), "(href=/orders{?id}, temlpated=true)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>", into = "LinkWire")]
pub struct Link {
    href: String,
    templated: bool,
    media_type: String,
    deprecation: String,
    name: String,
    profile: String,
    title: String,
    hreflang: String,
}

/// The optional properties of a Link.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkOptions {
    /// `true` when `href` is a URI Template.
    pub templated: bool,
    /// Hint of the media type expected when dereferencing the target.
    pub media_type: String,
    /// URL documenting the deprecation of the link.
    pub deprecation: String,
    /// Secondary key to select links sharing the same relation type.
    pub name: String,
    /// Profile URI of the target resource.
    pub profile: String,
    /// Human-readable label.
    pub title: String,
    /// Language of the target resource.
    pub hreflang: String,
}

/// JSON representation of a Link. The media type travels as `type`.
///
/// Only decoded from a JSON object; see `TryFrom<Map<String, Value>>`.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct LinkWire {
    href: String,
    #[serde(skip_serializing_if = "is_false")]
    templated: bool,
    #[serde(rename = "type", skip_serializing_if = "String::is_empty")]
    media_type: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    deprecation: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    profile: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    title: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    hreflang: String,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl TryFrom<LinkWire> for Link {
    type Error = HalError;

    fn try_from(wire: LinkWire) -> Result<Link> {
        Link::new(
            &wire.href,
            LinkOptions {
                templated: wire.templated,
                media_type: wire.media_type,
                deprecation: wire.deprecation,
                name: wire.name,
                profile: wire.profile,
                title: wire.title,
                hreflang: wire.hreflang,
            },
        )
    }
}

impl TryFrom<Map<String, Value>> for Link {
    type Error = HalError;

    fn try_from(object: Map<String, Value>) -> Result<Link> {
        let wire: LinkWire = serde_json::from_value(Value::Object(object))?;

        Link::try_from(wire)
    }
}

impl From<Link> for LinkWire {
    fn from(link: Link) -> LinkWire {
        LinkWire {
            href: link.href,
            templated: link.templated,
            media_type: link.media_type,
            deprecation: link.deprecation,
            name: link.name,
            profile: link.profile,
            title: link.title,
            hreflang: link.hreflang,
        }
    }
}

impl Link {
    pub fn new(href: &str, options: LinkOptions) -> Result<Link> {
        let href = normalize(href)?;

        Ok(Link {
            href,
            templated: options.templated,
            media_type: options.media_type,
            deprecation: options.deprecation,
            name: options.name,
            profile: options.profile,
            title: options.title,
            hreflang: options.hreflang,
        })
    }

    /// Builds a Link from its JSON representation.
    ///
    /// Missing properties are left unset but `href` must be present.
    pub fn from_json(data: &[u8]) -> Result<Link> {
        let object: Map<String, Value> = serde_json::from_slice(data).map_err(|err| {
            debug!(error = %err, "unable to decode link");
            HalError::Decode(err)
        })?;

        Link::try_from(object)
    }

    /// The JSON representation of the Link, without the unset properties.
    pub fn to_json(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }

    pub fn href(&self) -> &str {
        &self.href
    }

    pub fn templated(&self) -> bool {
        self.templated
    }

    pub fn media_type(&self) -> &str {
        &self.media_type
    }

    pub fn deprecation(&self) -> &str {
        &self.deprecation
    }

    pub fn is_deprecated(&self) -> bool {
        !self.deprecation.is_empty()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn profile(&self) -> &str {
        &self.profile
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn hreflang(&self) -> &str {
        &self.hreflang
    }

    /// Replaces `href`. The current value is kept if the new one is empty.
    pub fn set_href(&mut self, href: &str) -> Result<()> {
        self.href = normalize(href)?;

        Ok(())
    }

    pub fn set_templated(&mut self, templated: bool) {
        self.templated = templated;
    }

    pub fn set_media_type(&mut self, media_type: impl Into<String>) {
        self.media_type = media_type.into();
    }

    pub fn set_deprecation(&mut self, deprecation: impl Into<String>) {
        self.deprecation = deprecation.into();
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_profile(&mut self, profile: impl Into<String>) {
        self.profile = profile.into();
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_hreflang(&mut self, hreflang: impl Into<String>) {
        self.hreflang = hreflang.into();
    }

    /// Resolves `href` against `base`.
    ///
    /// URI Templates are refused: they must be expanded before use.
    pub fn target(&self, base: &Url) -> Result<Url> {
        if self.templated {
            return Err(HalError::TemplatedHref(self.href.clone()));
        }

        if self.is_deprecated() {
            warn!(
                href = %self.href,
                deprecation = %self.deprecation,
                "resolving a deprecated link"
            );
        }

        base.join(&self.href).map_err(HalError::InvalidHref)
    }
}

impl Display for Link {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(
            formatter,
            "(href={}, temlpated={}",
            self.href, self.templated
        )?;

        let optionals = [
            ("type", &self.media_type),
            ("deprecation", &self.deprecation),
            ("name", &self.name),
            ("profile", &self.profile),
            ("title", &self.title),
            ("hreflang", &self.hreflang),
        ];

        for (key, value) in optionals.iter().filter(|(_, value)| !value.is_empty()) {
            write!(formatter, ", {}={}", key, value)?;
        }

        write!(formatter, ")")
    }
}
