// Copyright 2019 Arnau Siches
//
// Licensed under the MIT license <LICENSE or http://opensource.org/licenses/MIT>.
// This file may not be copied, modified, or distributed except
// according to those terms.

use crate::error::{HalError, Result};
use crate::link::Link;
use crate::registered::RegisteredRel;
use crate::rel::Rel;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::convert::TryFrom;
use std::collections::BTreeMap;
use tracing::{debug, trace};

/// The Resource Object described in section 4 of the JSON Hypertext
/// Application Language draft.
///
/// Links and embedded resources are grouped by relation type. A relation
/// may hold a single value or several; both are stored as a list.
///
/// Relation types are looked up in a case-insensitive fashion:
///
/// > When extension relation types are compared, they MUST be compared as
/// > strings [...] in a case-insensitive fashion.
///
/// See RFC5988 section 4.2.
///
/// ```
/// use hal::link::{Link, LinkOptions};
/// use hal::resource::Resource;
///
/// let mut resource = Resource::default();
/// resource.add_link("self", Link::new("/orders", LinkOptions::default()).unwrap());
///
/// assert_eq!(resource.link("SELF").unwrap().href(), "/orders");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>", into = "ResourceWire")]
pub struct Resource {
    state: Vec<String>,
    links: BTreeMap<String, Vec<Link>>,
    embedded_resources: BTreeMap<String, Vec<Resource>>,
}

/// A relation value, either alone or in an array.
#[derive(Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub(crate) enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> From<OneOrMany<T>> for Vec<T> {
    fn from(value: OneOrMany<T>) -> Vec<T> {
        match value {
            OneOrMany::One(item) => vec![item],
            OneOrMany::Many(items) => items,
        }
    }
}

impl<T> From<Vec<T>> for OneOrMany<T> {
    fn from(mut items: Vec<T>) -> OneOrMany<T> {
        if items.len() == 1 {
            if let Some(item) = items.pop() {
                return OneOrMany::One(item);
            }
        }

        OneOrMany::Many(items)
    }
}

/// Only decoded from a JSON object; see `TryFrom<Map<String, Value>>`.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct ResourceWire {
    state: Vec<String>,
    links: BTreeMap<String, OneOrMany<Link>>,
    embedded_resources: BTreeMap<String, OneOrMany<Resource>>,
}

impl From<ResourceWire> for Resource {
    fn from(wire: ResourceWire) -> Resource {
        assemble(
            wire.state,
            wire.links
                .into_iter()
                .map(|(rel, links)| (rel, Vec::from(links))),
            wire.embedded_resources
                .into_iter()
                .map(|(rel, embedded)| (rel, Vec::from(embedded))),
        )
    }
}

impl TryFrom<Map<String, Value>> for Resource {
    type Error = HalError;

    fn try_from(object: Map<String, Value>) -> Result<Resource> {
        let wire: ResourceWire = serde_json::from_value(Value::Object(object))?;

        Ok(Resource::from(wire))
    }
}

/// Builds a resource merging relations that only differ in case.
fn assemble(
    state: Vec<String>,
    links: impl IntoIterator<Item = (String, Vec<Link>)>,
    embedded_resources: impl IntoIterator<Item = (String, Vec<Resource>)>,
) -> Resource {
    let mut resource = Resource {
        state,
        ..Resource::default()
    };

    for (rel, links) in links {
        for link in links {
            resource.add_link(&rel, link);
        }
    }

    for (rel, embedded) in embedded_resources {
        for embedded_resource in embedded {
            resource.add_embedded_resource(&rel, embedded_resource);
        }
    }

    resource
}

impl From<Resource> for ResourceWire {
    fn from(resource: Resource) -> ResourceWire {
        ResourceWire {
            state: resource.state,
            links: resource
                .links
                .into_iter()
                .map(|(rel, links)| (rel, links.into()))
                .collect(),
            embedded_resources: resource
                .embedded_resources
                .into_iter()
                .map(|(rel, embedded)| (rel, embedded.into()))
                .collect(),
        }
    }
}

/// Looks for the given relation name in a case-insensitive fashion and
/// returns the position of the first match.
///
/// ```
/// use hal::resource::find_by_rel;
///
/// assert_eq!(find_by_rel(&["Self", "Next"], "self").unwrap(), 0);
/// assert!(find_by_rel(&["About"], "self").is_err());
/// ```
pub fn find_by_rel<S: AsRef<str>>(table: &[S], rel: &str) -> Result<usize> {
    let rel = rel.to_lowercase();

    match table
        .iter()
        .position(|name| name.as_ref().to_lowercase() == rel)
    {
        Some(index) => {
            trace!(rel = %rel, index, "relation found");
            Ok(index)
        }
        None => {
            debug!(rel = %rel, "relation not found");
            Err(HalError::RelNotFound(rel))
        }
    }
}

fn position<V>(table: &BTreeMap<String, V>, rel: &str) -> Result<usize> {
    let names: Vec<&str> = table.keys().map(String::as_str).collect();

    find_by_rel(names.as_slice(), rel)
}

fn get<'a, V>(table: &'a BTreeMap<String, V>, rel: &str) -> Result<&'a V> {
    let index = position(table, rel)?;

    table
        .values()
        .nth(index)
        .ok_or_else(|| HalError::RelNotFound(rel.to_string()))
}

/// Appends to the relation matching `rel`, or starts a new one named `rel`.
fn append<V>(table: &mut BTreeMap<String, Vec<V>>, rel: &str, value: V) {
    let index = position(table, rel).ok();

    match index.and_then(|index| table.values_mut().nth(index)) {
        Some(values) => values.push(value),
        None => {
            table.insert(rel.to_string(), vec![value]);
        }
    }
}

fn unique<'a, T>(values: &'a [T], rel: &str) -> Result<&'a T> {
    match values {
        [value] => Ok(value),
        [] => Err(HalError::RelNotFound(rel.to_string())),
        _ => Err(HalError::NotUnique(rel.to_string())),
    }
}

impl Resource {
    /// Creates a resource with state, links and embedded resources.
    ///
    /// None of them can be empty, nor any of their relations; start from
    /// `Resource::default()` to build a resource step by step. Relations only
    /// differing in case are merged.
    pub fn new(
        state: Vec<String>,
        links: BTreeMap<String, Vec<Link>>,
        embedded_resources: BTreeMap<String, Vec<Resource>>,
    ) -> Result<Resource> {
        if state.is_empty()
            || links.is_empty()
            || embedded_resources.is_empty()
            || links.values().any(Vec::is_empty)
            || embedded_resources.values().any(Vec::is_empty)
        {
            return Err(HalError::MissingParams);
        }

        Ok(assemble(state, links, embedded_resources))
    }

    /// Builds a Resource from its JSON representation:
    /// `{"state": [..], "links": {..}, "embeddedResources": {..}}`.
    ///
    /// Every member is optional. Use `Resource::from_hal` for
    /// `application/hal+json` documents.
    pub fn from_json(data: &[u8]) -> Result<Resource> {
        let object: Map<String, Value> = serde_json::from_slice(data).map_err(|err| {
            debug!(error = %err, "unable to decode resource");
            HalError::Decode(err)
        })?;

        Resource::try_from(object)
    }

    pub fn to_json(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }

    /// All the properties of the resource (`_links` and `_embedded` not
    /// included).
    pub fn state(&self) -> &[String] {
        &self.state
    }

    pub fn push_state(&mut self, property: impl Into<String>) {
        self.state.push(property.into());
    }

    /// All the links directly available in the resource, by relation type.
    ///
    /// There is no guarantee as to the order of the relations.
    pub fn all_links(&self) -> &BTreeMap<String, Vec<Link>> {
        &self.links
    }

    /// Finds a unique link by its relation type.
    pub fn link<R: Rel + ?Sized>(&self, rel: &R) -> Result<&Link> {
        unique(self.links(rel)?, rel.name())
    }

    /// Finds all the links sharing the given relation type, in the order they
    /// were added.
    pub fn links<R: Rel + ?Sized>(&self, rel: &R) -> Result<&[Link]> {
        get(&self.links, rel.name()).map(Vec::as_slice)
    }

    /// Finds the link of the given relation type using `name` as secondary
    /// key.
    pub fn link_by_name<R: Rel + ?Sized>(&self, rel: &R, name: &str) -> Result<&Link> {
        self.links(rel)?
            .iter()
            .find(|link| link.name() == name)
            .ok_or_else(|| {
                debug!(rel = rel.name(), name, "no link with this name");
                HalError::RelNotFound(format!("{} (name={})", rel.name(), name))
            })
    }

    /// Finds the `curies` link declaring the given CURIE prefix.
    pub fn curie(&self, prefix: &str) -> Result<&Link> {
        self.link_by_name(&RegisteredRel::Curies, prefix)
    }

    /// Adds a link under the given relation type.
    ///
    /// Relation types matching an existing one case-insensitively share its
    /// entry.
    pub fn add_link<R: Rel + ?Sized>(&mut self, rel: &R, link: Link) {
        append(&mut self.links, rel.name(), link);
    }

    /// All the embedded resources, by relation type.
    pub fn all_embedded_resources(&self) -> Result<&BTreeMap<String, Vec<Resource>>> {
        if self.embedded_resources.is_empty() {
            return Err(HalError::NoEmbedded);
        }

        Ok(&self.embedded_resources)
    }

    /// Finds a unique embedded resource by its relation type.
    pub fn embedded_resource<R: Rel + ?Sized>(&self, rel: &R) -> Result<&Resource> {
        unique(self.embedded_resources(rel)?, rel.name())
    }

    /// Finds all the embedded resources sharing the given relation type, in
    /// the order they were added.
    pub fn embedded_resources<R: Rel + ?Sized>(&self, rel: &R) -> Result<&[Resource]> {
        get(&self.embedded_resources, rel.name()).map(Vec::as_slice)
    }

    pub fn add_embedded_resource<R: Rel + ?Sized>(&mut self, rel: &R, resource: Resource) {
        append(&mut self.embedded_resources, rel.name(), resource);
    }
}
