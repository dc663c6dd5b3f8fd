use std::collections::BTreeMap;

use reqwest::Method;

/// A single command to send to the Namecheap API.
///
/// Parameters are keyed by name. Adding a parameter that is already present
/// replaces its value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    command: &'static str,
    method: Method,
    params: BTreeMap<String, String>,
}

impl ApiRequest {
    /// Creates a new POST request for the given command, with no parameters.
    pub fn new(command: &'static str) -> Self {
        Self {
            command,
            method: Method::POST,
            params: BTreeMap::new(),
        }
    }

    /// Sets the HTTP method used to send the request.
    pub fn with_method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Adds the given key-value pair.
    pub fn add<T: ToString>(mut self, key: &str, value: T) -> Self {
        self.params.insert(key.to_string(), value.to_string());
        self
    }

    /// The name of the command, e.g. `namecheap.domains.dns.getHosts`.
    pub fn command(&self) -> &'static str {
        self.command
    }

    /// The HTTP method the request is sent with.
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Gets the value of a parameter, if it is set.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    /// Iterates over the parameters, ordered by key.
    pub fn params(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// The number of parameters.
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Whether the request has no parameters.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_request_is_empty_post() {
        let request = ApiRequest::new("namecheap.domains.dns.getList");
        assert_eq!(request.command(), "namecheap.domains.dns.getList");
        assert_eq!(request.method(), &Method::POST);
        assert!(request.is_empty());
    }

    #[test]
    fn add_overwrites_existing_key() {
        let request = ApiRequest::new("cmd")
            .add("EmailType", "MX")
            .add("TTL1", 1800)
            .add("EmailType", "MXE");

        assert_eq!(request.len(), 2);
        assert_eq!(request.get("EmailType"), Some("MXE"));
        assert_eq!(request.get("TTL1"), Some("1800"));
    }

    #[test]
    fn params_are_ordered_by_key() {
        let request = ApiRequest::new("cmd").add("TLD", "com").add("SLD", "example");

        assert_eq!(
            request.params().collect::<Vec<_>>(),
            vec![("SLD", "example"), ("TLD", "com")]
        );
    }

    #[test]
    fn with_method_changes_method() {
        let request = ApiRequest::new("cmd").with_method(Method::GET);
        assert_eq!(request.method(), &Method::GET);
    }
}
