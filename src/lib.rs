// Copyright 2019 Arnau Siches
//
// Licensed under the MIT license <LICENSE or http://opensource.org/licenses/MIT>.
// This file may not be copied, modified, or distributed except
// according to those terms.

//! A data model for the JSON Hypertext Application Language (HAL).
//!
//! See <https://tools.ietf.org/html/draft-kelly-json-hal-07>.

#[macro_use]
extern crate failure;

extern crate pest;
#[macro_use]
extern crate pest_derive;

pub mod curie;
pub mod document;
pub mod error;
pub mod link;
pub mod name;
pub mod registered;
pub mod rel;
pub mod request;
pub mod resource;

pub use error::{HalError, Result};
pub use link::{Link, LinkOptions};
pub use registered::RegisteredRel;
pub use rel::{CustomRel, Rel, Relation};
pub use request::{Method, Request, Requester};
pub use resource::Resource;
