//! Type-safe DNS host record.

use std::str::FromStr;

use serde::Deserialize;
use strum_macros::EnumString;

/// Possible types a host record can have.
///
/// Tokens the API sends that aren't listed here are kept as they are in
/// [`RecordType::Other`], so they survive being read and written back.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Hash, EnumString)]
#[serde(from = "String")]
#[strum(serialize_all = "UPPERCASE")]
pub enum RecordType {
    A,
    Aaaa,
    Alias,
    Caa,
    Cname,
    Mx,
    Mxe,
    Ns,
    Txt,
    Url,
    Url301,
    Frame,
    #[strum(default)]
    Other(String),
}

impl RecordType {
    /// Gets the string representation of the type, as the API expects it.
    pub fn as_str(&self) -> &str {
        match self {
            RecordType::A => "A",
            RecordType::Aaaa => "AAAA",
            RecordType::Alias => "ALIAS",
            RecordType::Caa => "CAA",
            RecordType::Cname => "CNAME",
            RecordType::Mx => "MX",
            RecordType::Mxe => "MXE",
            RecordType::Ns => "NS",
            RecordType::Txt => "TXT",
            RecordType::Url => "URL",
            RecordType::Url301 => "URL301",
            RecordType::Frame => "FRAME",
            RecordType::Other(token) => token,
        }
    }
}

impl From<String> for RecordType {
    fn from(value: String) -> Self {
        RecordType::from_str(&value).unwrap_or(RecordType::Other(value))
    }
}

/// A host record of a domain using Namecheap's DNS.
///
/// `mx_pref` is only sent to the API when `record_type` is [`RecordType::Mx`].
///
/// # Examples
///
/// ```
/// use namecheap::record::{Host, RecordType};
///
/// let mail = Host::new("mail", RecordType::Mx, "mail.example.com", 3600).with_mx_pref(10);
///
/// assert_eq!(mail.record_type.as_str(), "MX");
/// assert_eq!(mail.mx_pref, 10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Host {
    #[serde(rename = "@HostId", default)]
    pub id: i64,
    #[serde(rename = "@Name")]
    pub name: String,
    #[serde(rename = "@Type")]
    pub record_type: RecordType,
    #[serde(rename = "@Address")]
    pub address: String,
    #[serde(rename = "@MXPref", default)]
    pub mx_pref: u16,
    #[serde(rename = "@TTL", default)]
    pub ttl: u32,
}

impl Host {
    /// Creates a host record that hasn't been assigned an ID yet.
    pub fn new(name: &str, record_type: RecordType, address: &str, ttl: u32) -> Self {
        Self {
            id: 0,
            name: name.to_string(),
            record_type,
            address: address.to_string(),
            mx_pref: 0,
            ttl,
        }
    }

    /// Sets the mail preference.
    pub fn with_mx_pref(mut self, mx_pref: u16) -> Self {
        self.mx_pref = mx_pref;
        self
    }

    /// Whether this is an MX record, the only type that carries a mail preference.
    pub fn is_mx(&self) -> bool {
        self.record_type == RecordType::Mx
    }
}
