use crate::error::{HalError, Result};
use pest::{iterators::Pair, Parser};
use std::fmt::{self, Display};

#[derive(Parser)]
#[grammar = "curie.pest"]
pub struct CurieParser;

impl Display for Rule {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "{:?}", self)
    }
}

/// A Compact URI (`prefix:reference`).
///
/// HAL uses CURIEs to shorten custom link relations; the prefix is declared
/// by a `curies` link named after it.
///
/// ```
/// use hal::curie::Curie;
///
/// let curie = Curie::parse("ea:basket").unwrap();
///
/// assert_eq!(curie.prefix(), "ea");
/// assert_eq!(curie.reference(), "basket");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Curie {
    prefix: String,
    reference: String,
}

impl Curie {
    pub fn new(prefix: impl Into<String>, reference: impl Into<String>) -> Curie {
        Curie {
            prefix: prefix.into(),
            reference: reference.into(),
        }
    }

    pub fn parse(input: &str) -> Result<Curie> {
        let rule = CurieParser::parse(Rule::curie, input)
            .map_err(|_| HalError::InvalidCurie(input.to_string()))?
            .next()
            .ok_or_else(|| HalError::InvalidCurie(input.to_string()))?;

        Curie::from_rule(rule)
    }

    pub fn from_rule(pair: Pair<Rule>) -> Result<Curie> {
        if pair.as_rule() != Rule::curie {
            return Err(HalError::InvalidRule(Rule::curie, pair.as_rule()));
        }

        let mut prefix = String::new();
        let mut reference = String::new();

        for inner_pair in pair.into_inner() {
            match inner_pair.as_rule() {
                Rule::prefix => prefix.push_str(inner_pair.as_str()),

                Rule::reference => reference.push_str(inner_pair.as_str()),

                Rule::EOI => (),

                _ => unreachable!(),
            }
        }

        Ok(Curie { prefix, reference })
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn reference(&self) -> &str {
        &self.reference
    }
}

impl Display for Curie {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "{}:{}", self.prefix, self.reference)
    }
}
