//! The `namecheap.domains.dns` command group.

use serde::Deserialize;

use crate::record::Host;
use crate::{ApiRequest, Client, ClientError, Transport};

const DOMAINS_DNS_GET_HOSTS: &str = "namecheap.domains.dns.getHosts";
const DOMAINS_DNS_GET_LIST: &str = "namecheap.domains.dns.getList";
const DOMAINS_DNS_SET_DEFAULT: &str = "namecheap.domains.dns.setDefault";
const DOMAINS_DNS_SET_HOSTS: &str = "namecheap.domains.dns.setHosts";
const DOMAINS_DNS_SET_CUSTOM: &str = "namecheap.domains.dns.setCustom";

/// The host records of a domain.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DomainDnsGetHostsResult {
    #[serde(rename = "@Domain")]
    pub domain: String,
    #[serde(rename = "@IsUsingOurDNS", default)]
    pub is_using_our_dns: bool,
    #[serde(rename = "host", default)]
    pub hosts: Vec<Host>,
}

/// The nameservers of a domain.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DomainDnsGetListResult {
    #[serde(rename = "@Domain")]
    pub domain: String,
    #[serde(rename = "@IsUsingOurDNS", default)]
    pub is_using_our_dns: bool,
    #[serde(rename = "Nameserver", default)]
    pub nameservers: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DomainDnsSetDefaultResult {
    #[serde(rename = "@Domain")]
    pub domain: String,
    #[serde(rename = "@IsSuccess", default)]
    pub is_success: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DomainDnsSetHostsResult {
    #[serde(rename = "@Domain")]
    pub domain: String,
    #[serde(rename = "@IsSuccess", default)]
    pub is_success: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DomainDnsSetCustomResult {
    #[serde(rename = "@Domain")]
    pub domain: String,
    #[serde(rename = "@Update", default)]
    pub update: bool,
}

/// Returns a request for the given command with the domain parameters set.
fn domain_request(command: &'static str, sld: &str, tld: &str) -> ApiRequest {
    ApiRequest::new(command).add("SLD", sld).add("TLD", tld)
}

/// Adds the numbered parameters describing each host, counting from 1.
///
/// MX hosts additionally get an `MXPref` parameter and set `EmailType` to `MX`.
fn add_hosts(request: ApiRequest, hosts: &[Host]) -> ApiRequest {
    hosts
        .iter()
        .zip(1..)
        .fold(request, |request, (host, i)| {
            let request = request
                .add(&format!("HostName{i}"), &host.name)
                .add(&format!("RecordType{i}"), host.record_type.as_str())
                .add(&format!("Address{i}"), &host.address)
                .add(&format!("TTL{i}"), host.ttl);
            if host.is_mx() {
                request
                    .add(&format!("MXPref{i}"), host.mx_pref)
                    .add("EmailType", "MX")
            } else {
                request
            }
        })
}

impl<T: Transport> Client<T> {
    /// Retrieves the host records of the domain `sld`.`tld`.
    pub fn domains_dns_get_hosts(
        &self,
        sld: &str,
        tld: &str,
    ) -> Result<DomainDnsGetHostsResult, ClientError> {
        let request = domain_request(DOMAINS_DNS_GET_HOSTS, sld, tld);

        self.transport()
            .execute(&request)?
            .into_command_response()
            .and_then(|r| r.domain_dns_hosts)
            .ok_or(ClientError::MissingResult(DOMAINS_DNS_GET_HOSTS))
    }

    /// Retrieves the nameservers the domain `sld`.`tld` is using.
    pub fn domains_dns_get_list(
        &self,
        sld: &str,
        tld: &str,
    ) -> Result<DomainDnsGetListResult, ClientError> {
        let request = domain_request(DOMAINS_DNS_GET_LIST, sld, tld);

        self.transport()
            .execute(&request)?
            .into_command_response()
            .and_then(|r| r.domain_dns_nameservers)
            .ok_or(ClientError::MissingResult(DOMAINS_DNS_GET_LIST))
    }

    /// Switches the domain back to Namecheap's default nameservers.
    ///
    /// `_hosts` is accepted for compatibility but is not sent; the command only
    /// takes the domain.
    pub fn domains_dns_set_default(
        &self,
        sld: &str,
        tld: &str,
        _hosts: &[Host],
    ) -> Result<DomainDnsSetDefaultResult, ClientError> {
        let request = domain_request(DOMAINS_DNS_SET_DEFAULT, sld, tld);

        self.transport()
            .execute(&request)?
            .into_command_response()
            .and_then(|r| r.domain_dns_set_default)
            .ok_or(ClientError::MissingResult(DOMAINS_DNS_SET_DEFAULT))
    }

    /// Replaces all the host records of the domain with `hosts`.
    ///
    /// If more than one MX record is given, `EmailType` is still only sent once.
    pub fn domains_dns_set_hosts(
        &self,
        sld: &str,
        tld: &str,
        hosts: &[Host],
    ) -> Result<DomainDnsSetHostsResult, ClientError> {
        let request = add_hosts(domain_request(DOMAINS_DNS_SET_HOSTS, sld, tld), hosts);

        self.transport()
            .execute(&request)?
            .into_command_response()
            .and_then(|r| r.domain_dns_set_hosts)
            .ok_or(ClientError::MissingResult(DOMAINS_DNS_SET_HOSTS))
    }

    /// Points the domain at custom nameservers.
    ///
    /// `nameservers` is a comma-separated list, e.g. `ns1.example.net,ns2.example.net`.
    pub fn domains_dns_set_custom(
        &self,
        sld: &str,
        tld: &str,
        nameservers: &str,
    ) -> Result<DomainDnsSetCustomResult, ClientError> {
        let request =
            domain_request(DOMAINS_DNS_SET_CUSTOM, sld, tld).add("Nameservers", nameservers);

        self.transport()
            .execute(&request)?
            .into_command_response()
            .and_then(|r| r.domain_dns_set_custom)
            .ok_or(ClientError::MissingResult(DOMAINS_DNS_SET_CUSTOM))
    }
}
