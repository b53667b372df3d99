// Copyright 2019 Arnau Siches
//
// Licensed under the MIT license <LICENSE or http://opensource.org/licenses/MIT>.
// This file may not be copied, modified, or distributed except
// according to those terms.

//! `application/hal+json` documents.

use crate::error::{HalError, Result};
use crate::link::Link;
use crate::resource::{OneOrMany, Resource};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use tracing::debug;

/// Reserved property holding the links of a resource.
pub const LINKS: &str = "_links";

/// Reserved property holding the embedded resources of a resource.
pub const EMBEDDED: &str = "_embedded";

impl Resource {
    /// Builds a Resource from a HAL document.
    ///
    /// Every top-level property other than `_links` and `_embedded` becomes a
    /// state entry, in document order, written as the JSON member it comes
    /// from (`"name":value`).
    ///
    /// ```
    /// use hal::resource::Resource;
    ///
    /// let resource = Resource::from_hal(br#"{
    ///     "_links": {"self": {"href": "/orders/1"}},
    ///     "total": 30,
    ///     "currency": "EUR"
    /// }"#).unwrap();
    ///
    /// assert_eq!(resource.state(), &[r#""total":30"#, r#""currency":"EUR""#]);
    /// assert_eq!(resource.link("self").unwrap().href(), "/orders/1");
    /// ```
    pub fn from_hal(data: &[u8]) -> Result<Resource> {
        let object: Map<String, Value> = serde_json::from_slice(data).map_err(|err| {
            debug!(error = %err, "unable to decode HAL document");
            HalError::Decode(err)
        })?;

        from_object(object)
    }

    /// The state entries as a JSON object, for property-level access.
    ///
    /// Fails when an entry is not a `"name":value` member.
    pub fn properties(&self) -> Result<Map<String, Value>> {
        let mut properties = Map::new();

        for entry in self.state() {
            let member: Map<String, Value> = serde_json::from_str(&format!("{{{}}}", entry))?;
            properties.extend(member);
        }

        Ok(properties)
    }
}

fn from_object(object: Map<String, Value>) -> Result<Resource> {
    let mut resource = Resource::default();

    for (key, value) in object {
        match key.as_str() {
            LINKS => {
                let links: BTreeMap<String, OneOrMany<Link>> = serde_json::from_value(value)?;

                for (rel, links) in links {
                    for link in Vec::from(links) {
                        resource.add_link(&rel, link);
                    }
                }
            }

            EMBEDDED => {
                let embedded: BTreeMap<String, OneOrMany<Map<String, Value>>> =
                    serde_json::from_value(value)?;

                for (rel, objects) in embedded {
                    for object in Vec::from(objects) {
                        resource.add_embedded_resource(&rel, from_object(object)?);
                    }
                }
            }

            _ => resource.push_state(format!("{}:{}", Value::String(key), value)),
        }
    }

    Ok(resource)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::link::LinkOptions;
    use crate::rel::CustomRel;
    use serde_json::json;

    const ORDERS: &[u8] = br#"{
        "_links": {
            "self": {"href": "/orders"},
            "next": {"href": "/orders?page=2"},
            "find": {"href": "/orders{?id}", "templated": true},
            "curies": [{"name": "ea", "href": "http://example.com/docs/rels/{rel}", "templated": true}]
        },
        "_embedded": {
            "ea:order": [{
                "_links": {
                    "self": {"href": "/orders/123"},
                    "ea:basket": {"href": "/baskets/98712"}
                },
                "total": 30.0,
                "currency": "USD",
                "status": "shipped"
            }, {
                "_links": {"self": {"href": "/orders/124"}},
                "total": 20.0,
                "currency": "USD",
                "status": "processing"
            }]
        },
        "currentlyProcessing": 14,
        "shippedToday": 20
    }"#;

    #[test]
    fn state_in_document_order() {
        let resource = Resource::from_hal(ORDERS).expect("Expect a valid document");

        assert_eq!(
            resource.state(),
            &[
                r#""currentlyProcessing":14"#.to_string(),
                r#""shippedToday":20"#.to_string()
            ][..]
        );
    }

    #[test]
    fn links() {
        let resource = Resource::from_hal(ORDERS).expect("Expect a valid document");

        assert_eq!(resource.all_links().len(), 4);
        assert_eq!(resource.link("next").unwrap().href(), "/orders?page=2");
        assert!(resource.link("find").unwrap().templated());
        assert_eq!(
            resource.curie("ea").unwrap().href(),
            "http://example.com/docs/rels/{rel}"
        );
    }

    #[test]
    fn embedded() {
        let resource = Resource::from_hal(ORDERS).expect("Expect a valid document");
        let rel = CustomRel::new("EA:Order").expect("Expect a valid rel");

        let orders = resource.embedded_resources(&rel).expect("Expect orders");

        assert_eq!(orders.len(), 2);
        assert_eq!(orders[0].link("ea:basket").unwrap().href(), "/baskets/98712");
        assert_eq!(
            orders[1].state(),
            &[
                r#""total":20.0"#.to_string(),
                r#""currency":"USD""#.to_string(),
                r#""status":"processing""#.to_string()
            ][..]
        );
        assert!(orders[1].all_embedded_resources().is_err());
    }

    #[test]
    fn properties() {
        let resource = Resource::from_hal(ORDERS).expect("Expect a valid document");
        let order = &resource.embedded_resources("ea:order").unwrap()[0];

        let actual = order.properties().expect("Expect valid properties");

        assert_eq!(actual.get("status"), Some(&json!("shipped")));
        assert_eq!(actual.get("total"), Some(&json!(30.0)));
        assert_eq!(
            actual.keys().collect::<Vec<_>>(),
            vec!["total", "currency", "status"]
        );
    }

    #[test]
    fn opaque_properties() {
        let mut resource = Resource::default();
        resource.push_state("not a member");

        assert!(matches!(resource.properties(), Err(HalError::Decode(_))));
    }

    #[test]
    fn state_only() {
        let resource = Resource::from_hal(br#"{"name": "alone"}"#).expect("Expect a valid document");

        assert!(resource.all_links().is_empty());
        assert!(resource.all_embedded_resources().is_err());
        assert_eq!(resource.state(), &[r#""name":"alone""#.to_string()][..]);
    }

    #[test]
    fn keys_are_escaped() {
        let resource = Resource::from_hal(br#"{"say \"hi\"": [1, {"a": null}]}"#)
            .expect("Expect a valid document");

        assert_eq!(
            resource.state(),
            &[r#""say \"hi\"":[1,{"a":null}]"#.to_string()][..]
        );
        assert_eq!(
            resource.properties().unwrap().get("say \"hi\""),
            Some(&json!([1, {"a": null}]))
        );
    }

    #[test]
    fn not_an_object() {
        let inputs: Vec<&[u8]> = vec![
            b"[]",
            b"\"hal\"",
            br#"{"_links": []}"#,
            br#"{"_links": {"self": {}}}"#,
            br#"{"_links": {"self": ["/x"]}}"#,
            br#"{"_links": {"self": ["/x", true]}}"#,
            br#"{"_embedded": {"item": [["x"]]}}"#,
        ];

        for input in inputs {
            assert!(matches!(Resource::from_hal(input), Err(HalError::Decode(_))));
        }
    }

    #[test]
    fn same_model_as_from_json() {
        let hal = Resource::from_hal(br#"{"_links": {"self": {"href": "/a", "title": "A"}}, "x": 1}"#)
            .expect("Expect a valid document");

        let mut expected = Resource::default();
        expected.push_state(r#""x":1"#);
        expected.add_link(
            "self",
            Link::new(
                "/a",
                LinkOptions {
                    title: "A".into(),
                    ..LinkOptions::default()
                },
            )
            .expect("Expect a valid link"),
        );

        assert_eq!(hal, expected);
    }
}
