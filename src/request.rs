// Copyright 2019 Arnau Siches
//
// Licensed under the MIT license <LICENSE or http://opensource.org/licenses/MIT>.
// This file may not be copied, modified, or distributed except
// according to those terms.

use crate::error::{HalError, Result};
use percent_encoding::{utf8_percent_encode, PATH_SEGMENT_ENCODE_SET};
use std::fmt::{self, Display};
use std::str::FromStr;
use tracing::debug;

/// The HTTP methods a request can use.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

impl FromStr for Method {
    type Err = HalError;

    /// Parses a method name regardless of its case.
    fn from_str(s: &str) -> Result<Method> {
        match &s.to_uppercase()[..] {
            "GET" => Ok(Method::Get),
            "POST" => Ok(Method::Post),
            "PUT" => Ok(Method::Put),
            "PATCH" => Ok(Method::Patch),
            "DELETE" => Ok(Method::Delete),
            _ => {
                debug!(method = s, "unsupported method");
                Err(HalError::InvalidMethod(s.to_string()))
            }
        }
    }
}

impl Display for Method {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "{}", self.as_str())
    }
}

/// What an HTTP layer needs to know to send a request.
pub trait Requester {
    fn method(&self) -> Method;

    /// The values of the variables contained in the URL template.
    fn url_variables(&self) -> &[String];

    fn message_body(&self) -> &str;

    fn headers(&self) -> &str;
}

/// A request to be sent by an HTTP layer.
///
/// ```
/// use hal::request::{Method, Request, Requester};
///
/// let request = Request::new("patch", vec!["42".into()], "{}", "").unwrap();
///
/// assert_eq!(request.method(), Method::Patch);
/// assert_eq!(request.method().to_string(), "PATCH");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    method: Method,
    url_variables: Vec<String>,
    message_body: String,
    headers: String,
}

impl Request {
    pub fn new(
        method: &str,
        url_variables: Vec<String>,
        message_body: impl Into<String>,
        headers: impl Into<String>,
    ) -> Result<Request> {
        Ok(Request {
            method: method.parse()?,
            url_variables,
            message_body: message_body.into(),
            headers: headers.into(),
        })
    }

    /// The URL variables percent-encoded to be used as path segments.
    pub fn encoded_url_variables(&self) -> Vec<String> {
        self.url_variables
            .iter()
            .map(|variable| utf8_percent_encode(variable, PATH_SEGMENT_ENCODE_SET).to_string())
            .collect()
    }
}

impl Requester for Request {
    fn method(&self) -> Method {
        self.method
    }

    fn url_variables(&self) -> &[String] {
        &self.url_variables
    }

    fn message_body(&self) -> &str {
        &self.message_body
    }

    fn headers(&self) -> &str {
        &self.headers
    }
}
