//! # Simple and type-safe client for the DNS commands of the Namecheap API.
//!
//! Implements a blocking client for the `namecheap.domains.dns` commands of the
//! [Namecheap API]: reading and replacing host records, and switching between
//! Namecheap's and custom nameservers.
//!
//! ## Examples
//!
//! ```no_run
//! use namecheap::record::{Host, RecordType};
//! use namecheap::{Client, split_sld_tld};
//!
//! let client = Client::builder()
//!     .api_user("<APIUSER>")
//!     .api_key("<APIKEY>")
//!     .client_ip("203.0.113.7".parse().unwrap())
//!     .sandbox(true)
//!     .build()
//!     .unwrap();
//!
//! let (sld, tld) = split_sld_tld("www.example.com").unwrap();
//! let current = client.domains_dns_get_hosts(&sld, &tld).unwrap();
//!
//! let mut hosts = current.hosts;
//! hosts.push(Host::new("mail", RecordType::Mx, "mail.example.com", 3600).with_mx_pref(10));
//! client.domains_dns_set_hosts(&sld, &tld, &hosts).unwrap();
//! ```
//!
//! [Namecheap API]: https://www.namecheap.com/support/api/intro/

mod client;
pub mod dns;
mod errors;
pub mod record;
mod request;
mod response;
mod transport;
mod utils;

pub use client::*;
pub use errors::*;
pub use request::*;
pub use response::*;
pub use transport::*;
pub use utils::*;
