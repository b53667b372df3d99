//! Error types and utilities.

use crate::curie::Rule;

/// Either `Ok(T)` or `Err(HalError)`.
pub type Result<T> = ::std::result::Result<T, HalError>;

/// Everything that can go wrong while building or querying a HAL value.
#[derive(Debug, Fail)]
pub enum HalError {
    /// A required identifier (relation name, href) is empty once trimmed.
    #[fail(display = "The name can't be empty")]
    EmptyName,

    /// The input is not valid JSON or does not have the expected shape.
    #[fail(display = "Invalid JSON document: {}", _0)]
    Decode(#[cause] serde_json::Error),

    /// `Resource::new` was given an empty collection.
    #[fail(display = "State, links and embedded resources must all be provided")]
    MissingParams,

    #[fail(display = "The relation {} has not been found", _0)]
    RelNotFound(String),

    /// More than one value is stored under a relation expected to be unique.
    #[fail(display = "The relation {} is not unique", _0)]
    NotUnique(String),

    #[fail(display = "There is no embedded resource")]
    NoEmbedded,

    #[fail(
        display = "Method must be one of GET, POST, PUT, PATCH or DELETE but given {}",
        _0
    )]
    InvalidMethod(String),

    #[fail(display = "{} is not a valid CURIE", _0)]
    InvalidCurie(String),

    /// Given invalid `Rule` variant to `from_rule`
    #[fail(display = "Expected a rule of type {} but given {} instead", _0, _1)]
    InvalidRule(Rule, Rule),

    /// A URI Template can't be resolved without expanding it first.
    #[fail(display = "The href {} is a URI Template", _0)]
    TemplatedHref(String),

    #[fail(display = "Invalid href: {}", _0)]
    InvalidHref(#[cause] url::ParseError),
}

impl From<serde_json::Error> for HalError {
    fn from(err: serde_json::Error) -> HalError {
        HalError::Decode(err)
    }
}
