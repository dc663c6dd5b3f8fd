use std::net::IpAddr;

use url::Url;

use crate::{ClientBuilderError, Credentials, HttpTransport, Transport};

const PRODUCTION_ENDPOINT: &str = "https://api.namecheap.com/xml.response";
const SANDBOX_ENDPOINT: &str = "https://api.sandbox.namecheap.com/xml.response";

/// Builder for a [Client] that handles default values.
pub struct ClientBuilder {
    endpoint: Option<Url>,
    sandbox: bool,
    api_user: Option<String>,
    api_key: Option<String>,
    username: Option<String>,
    client_ip: Option<IpAddr>,
    http_client: Option<reqwest::blocking::Client>,
}

impl ClientBuilder {
    fn new() -> Self {
        Self {
            endpoint: None,
            sandbox: false,
            api_user: None,
            api_key: None,
            username: None,
            client_ip: None,
            http_client: None,
        }
    }

    /// Sets the API endpoint to the one given.
    ///
    /// An explicit endpoint takes precedence over [ClientBuilder::sandbox].
    pub fn endpoint(mut self, endpoint: &Url) -> Self {
        self.endpoint = Some(endpoint.clone());
        self
    }

    /// In the case that `endpoint` is the Some variant, sets the API endpoint to it.
    pub fn endpoint_if_some(mut self, endpoint: Option<&Url>) -> Self {
        if let Some(endpoint) = endpoint {
            self.endpoint = Some(endpoint.clone());
        }
        self
    }

    /// Uses the sandbox endpoint instead of the production one.
    pub fn sandbox(mut self, sandbox: bool) -> Self {
        self.sandbox = sandbox;
        self
    }

    /// Sets the API user to the one given.
    pub fn api_user(mut self, api_user: &str) -> Self {
        self.api_user = Some(api_user.to_string());
        self
    }

    /// Sets the API key to the one given.
    pub fn api_key(mut self, api_key: &str) -> Self {
        self.api_key = Some(api_key.to_string());
        self
    }

    /// Sets the username the commands act on behalf of.
    ///
    /// Defaults to the API user.
    pub fn username(mut self, username: &str) -> Self {
        self.username = Some(username.to_string());
        self
    }

    /// Sets the whitelisted IP address the requests are sent from.
    pub fn client_ip(mut self, client_ip: IpAddr) -> Self {
        self.client_ip = Some(client_ip);
        self
    }

    /// Uses the given HTTP client, for example one with timeouts configured.
    pub fn http_client(mut self, http_client: reqwest::blocking::Client) -> Self {
        self.http_client = Some(http_client);
        self
    }

    /// Builds a [Client] from the builder.
    ///
    /// In the case that no API endpoint is set, the production endpoint of
    /// `https://api.namecheap.com/xml.response` is used, or the sandbox one
    /// if [ClientBuilder::sandbox] was enabled.
    ///
    /// # Errors
    /// - `MissingField` if a required field isn't added to the builder.
    /// - `UrlParse` if the default API endpoint fails to parse. This shouldn't happen.
    pub fn build(self) -> Result<Client, ClientBuilderError> {
        let endpoint = match self.endpoint {
            Some(endpoint) => endpoint,
            None if self.sandbox => SANDBOX_ENDPOINT.parse()?,
            None => PRODUCTION_ENDPOINT.parse()?,
        };
        let api_user = self
            .api_user
            .ok_or_else(|| ClientBuilderError::MissingField("api_user".to_string()))?;
        let api_key = self
            .api_key
            .ok_or_else(|| ClientBuilderError::MissingField("api_key".to_string()))?;
        let client_ip = self
            .client_ip
            .ok_or_else(|| ClientBuilderError::MissingField("client_ip".to_string()))?;
        let username = self.username.unwrap_or_else(|| api_user.clone());

        let credentials = Credentials {
            api_user,
            api_key,
            username,
            client_ip,
        };
        let http_client = self.http_client.unwrap_or_default();

        Ok(Client::new(HttpTransport::new(
            &endpoint,
            credentials,
            http_client,
        )))
    }
}

/// API client.
///
/// The DNS commands are implemented in the [dns](crate::dns) module.
pub struct Client<T = HttpTransport> {
    transport: T,
}

impl Client {
    /// Returns a builder for a Client talking to the API over HTTP.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }
}

impl<T: Transport> Client<T> {
    /// Creates a new Client that sends its requests through the given transport.
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Returns the transport the requests are sent through.
    pub fn transport(&self) -> &T {
        &self.transport
    }
}
