use reqwest::StatusCode;
use serde::Deserialize;

use crate::dns::{
    DomainDnsGetHostsResult, DomainDnsGetListResult, DomainDnsSetCustomResult,
    DomainDnsSetDefaultResult, DomainDnsSetHostsResult,
};
use crate::{ApiError, RemoteError};

const STATUS_OK: &str = "OK";

/// Decoded `<ApiResponse>` document returned by the Namecheap API.
#[derive(Debug, Deserialize)]
pub struct ApiResponse {
    #[serde(rename = "@Status")]
    status: String,
    #[serde(rename = "Errors", default)]
    errors: Errors,
    #[serde(rename = "RequestedCommand")]
    requested_command: Option<String>,
    #[serde(rename = "CommandResponse")]
    command_response: Option<CommandResponse>,
}

#[derive(Debug, Default, Deserialize)]
struct Errors {
    #[serde(rename = "Error", default)]
    list: Vec<RemoteError>,
}

/// The command specific part of a response.
///
/// Only the field belonging to the command that was sent is populated.
#[derive(Debug, Default, Deserialize)]
pub struct CommandResponse {
    #[serde(rename = "@Type")]
    pub command: Option<String>,
    #[serde(rename = "DomainDNSGetHostsResult")]
    pub domain_dns_hosts: Option<DomainDnsGetHostsResult>,
    #[serde(rename = "DomainDNSGetListResult")]
    pub domain_dns_nameservers: Option<DomainDnsGetListResult>,
    #[serde(rename = "DomainDNSSetDefaultResult")]
    pub domain_dns_set_default: Option<DomainDnsSetDefaultResult>,
    #[serde(rename = "DomainDNSSetHostsResult")]
    pub domain_dns_set_hosts: Option<DomainDnsSetHostsResult>,
    #[serde(rename = "DomainDNSSetCustomResult")]
    pub domain_dns_set_custom: Option<DomainDnsSetCustomResult>,
}

impl ApiResponse {
    /// Decodes a response document.
    pub fn from_xml(xml: &str) -> Result<Self, quick_xml::DeError> {
        quick_xml::de::from_str(xml)
    }

    /// Whether the API reported the command as successful.
    pub fn is_ok(&self) -> bool {
        self.status == STATUS_OK
    }

    /// The `Status` attribute of the response, `OK` on success.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// The errors listed in the response, in document order.
    pub fn errors(&self) -> &[RemoteError] {
        &self.errors.list
    }

    /// The command the API says it ran, as the API spells it.
    pub fn requested_command(&self) -> Option<&str> {
        self.requested_command.as_deref()
    }

    /// The command specific part of the response, if there is one.
    pub fn command_response(&self) -> Option<&CommandResponse> {
        self.command_response.as_ref()
    }

    /// Consumes the response, returning its command specific part.
    pub fn into_command_response(self) -> Option<CommandResponse> {
        self.command_response
    }

    /// Turns a response with an error status into an [ApiError].
    ///
    /// The API reports command failures with HTTP 200, so the error carries that status.
    pub fn into_result(self) -> Result<Self, ApiError> {
        if self.is_ok() {
            Ok(self)
        } else {
            Err(ApiError::new(StatusCode::OK, self.errors.list))
        }
    }
}
