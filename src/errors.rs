use std::fmt;

use reqwest::{StatusCode, blocking::Response};
use serde::Deserialize;
use thiserror::Error;

use crate::response::ApiResponse;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum DomainError {
    #[error("unable to parse domain {0:?}")]
    Parse(String),
    #[error("domain {0:?} doesn't have a root")]
    MissingRoot(String),
}

/// A single error reported by the Namecheap API.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RemoteError {
    #[serde(rename = "@Number", default)]
    pub number: String,
    #[serde(rename = "$text", default)]
    pub message: String,
}

impl fmt::Display for RemoteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.message, self.number)
    }
}

#[derive(Error, Debug)]
#[error("Namecheap API error: {status} - {}", join_errors(.errors))]
pub struct ApiError {
    status: StatusCode,
    errors: Vec<RemoteError>,
}

fn join_errors(errors: &[RemoteError]) -> String {
    if errors.is_empty() {
        return "no error details given".to_string();
    }
    errors
        .iter()
        .map(RemoteError::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ApiError {
    pub(crate) fn new(status: StatusCode, errors: Vec<RemoteError>) -> Self {
        Self { status, errors }
    }

    pub(crate) fn from_response(resp: Response) -> Self {
        let status = resp.status();
        let text = resp
            .text()
            .unwrap_or_else(|e| format!("unable to read response body: {e}"));

        let errors = match ApiResponse::from_xml(&text) {
            Ok(envelope) if !envelope.errors().is_empty() => envelope.errors().to_vec(),
            Ok(_) => vec![RemoteError {
                number: status.as_str().to_string(),
                message: text,
            }],
            Err(e) => vec![RemoteError {
                number: status.as_str().to_string(),
                message: format!("unable to get error message from {text:?}: {e}"),
            }],
        };

        Self { status, errors }
    }

    /// The HTTP status the error arrived with.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// The errors reported by the API, in document order.
    pub fn errors(&self) -> &[RemoteError] {
        &self.errors
    }
}

#[derive(Error, Debug)]
pub enum ClientError {
    #[error(transparent)]
    Namecheap(#[from] ApiError),
    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),
    #[error(transparent)]
    Xml(#[from] quick_xml::DeError),
    #[error("response to {0} has no result")]
    MissingResult(&'static str),
}

#[derive(Error, Debug)]
pub enum ClientBuilderError {
    #[error("missing field: {0}")]
    MissingField(String),
    #[error(transparent)]
    UrlParse(#[from] url::ParseError),
}
