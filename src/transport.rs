use std::collections::BTreeMap;
use std::fmt;
use std::net::IpAddr;

use log::{debug, warn};
use reqwest::{Method, StatusCode};
use url::Url;

use crate::{ApiError, ApiRequest, ApiResponse, ClientError};

/// Sends requests to the Namecheap API and decodes the response envelope.
///
/// Implementations are expected to turn responses carrying an error status
/// into an `Err`, so a returned [ApiResponse] is always a successful one.
pub trait Transport {
    /// Sends the request, returning the decoded successful response.
    fn execute(&self, request: &ApiRequest) -> Result<ApiResponse, ClientError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn execute(&self, request: &ApiRequest) -> Result<ApiResponse, ClientError> {
        (**self).execute(request)
    }
}

/// The global parameters that authorize every request.
#[derive(Clone)]
pub struct Credentials {
    pub api_user: String,
    pub api_key: String,
    pub username: String,
    pub client_ip: IpAddr,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_user", &self.api_user)
            .field("api_key", &"<redacted>")
            .field("username", &self.username)
            .field("client_ip", &self.client_ip)
            .finish()
    }
}

/// [Transport] that talks to the API over HTTP.
#[derive(Debug)]
pub struct HttpTransport {
    endpoint: Url,
    credentials: Credentials,
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    /// Creates a transport sending requests to `endpoint` with `client`.
    pub fn new(endpoint: &Url, credentials: Credentials, client: reqwest::blocking::Client) -> Self {
        Self {
            endpoint: endpoint.clone(),
            credentials,
            client,
        }
    }

    /// The URL the requests are sent to.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Builds the form for a request.
    ///
    /// The authorization fields and the command always win over request
    /// parameters of the same name.
    fn form<'a>(&'a self, request: &'a ApiRequest) -> BTreeMap<&'a str, String> {
        let mut form: BTreeMap<&str, String> = request
            .params()
            .map(|(k, v)| (k, v.to_string()))
            .collect();
        form.insert("ApiUser", self.credentials.api_user.clone());
        form.insert("ApiKey", self.credentials.api_key.clone());
        form.insert("UserName", self.credentials.username.clone());
        form.insert("ClientIp", self.credentials.client_ip.to_string());
        form.insert("Command", request.command().to_string());
        form
    }
}

impl Transport for HttpTransport {
    fn execute(&self, request: &ApiRequest) -> Result<ApiResponse, ClientError> {
        let form = self.form(request);
        debug!(
            "sending {} {} with {} parameters",
            request.method(),
            request.command(),
            request.len()
        );

        let builder = if *request.method() == Method::GET {
            self.client.get(self.endpoint.clone()).query(&form)
        } else {
            self.client
                .request(request.method().clone(), self.endpoint.clone())
                .form(&form)
        };
        let resp = builder.send()?;
        debug!("{} returned {}", request.command(), resp.status());
        if resp.status() != StatusCode::OK {
            return Err(ClientError::Namecheap(ApiError::from_response(resp)));
        }

        let envelope = ApiResponse::from_xml(&resp.text()?)?;
        if !envelope.is_ok() {
            warn!(
                "{} failed with status {}: {:?}",
                request.command(),
                envelope.status(),
                envelope.errors()
            );
        }
        Ok(envelope.into_result()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_string_contains, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const SET_CUSTOM_OK: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<ApiResponse Status="OK" xmlns="http://api.namecheap.com/xml.response">
  <Errors />
  <RequestedCommand>namecheap.domains.dns.setCustom</RequestedCommand>
  <CommandResponse Type="namecheap.domains.dns.setCustom">
    <DomainDNSSetCustomResult Domain="example.com" Update="true" />
  </CommandResponse>
</ApiResponse>"#;

    const NOT_FOUND: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<ApiResponse Status="ERROR" xmlns="http://api.namecheap.com/xml.response">
  <Errors>
    <Error Number="2019166">Domain not found</Error>
  </Errors>
</ApiResponse>"#;

    fn transport(uri: &str) -> HttpTransport {
        let endpoint: Url = format!("{uri}/xml.response").parse().unwrap();
        let credentials = Credentials {
            api_user: "apiuser".to_string(),
            api_key: "secret".to_string(),
            username: "someone".to_string(),
            client_ip: "127.0.0.1".parse().unwrap(),
        };
        HttpTransport::new(&endpoint, credentials, reqwest::blocking::Client::new())
    }

    /// Runs the blocking transport off the async test runtime.
    ///
    /// The blocking client owns a runtime of its own, so it is created and
    /// dropped inside the blocking task too.
    async fn execute(
        server: &MockServer,
        request: ApiRequest,
    ) -> Result<ApiResponse, ClientError> {
        let uri = server.uri();
        tokio::task::spawn_blocking(move || transport(&uri).execute(&request))
            .await
            .unwrap()
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn posts_form_with_auth_and_command() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/xml.response"))
            .and(body_string_contains("ApiUser=apiuser"))
            .and(body_string_contains("ApiKey=secret"))
            .and(body_string_contains("UserName=someone"))
            .and(body_string_contains("ClientIp=127.0.0.1"))
            .and(body_string_contains("Command=namecheap.domains.dns.setCustom"))
            .and(body_string_contains("SLD=example"))
            .and(body_string_contains("Nameservers=ns1.example.net%2Cns2.example.net"))
            .respond_with(ResponseTemplate::new(200).set_body_string(SET_CUSTOM_OK))
            .expect(1)
            .mount(&server)
            .await;

        let request = ApiRequest::new("namecheap.domains.dns.setCustom")
            .add("SLD", "example")
            .add("TLD", "com")
            .add("Nameservers", "ns1.example.net,ns2.example.net");
        let resp = execute(&server, request).await.unwrap();

        let result = resp
            .into_command_response()
            .unwrap()
            .domain_dns_set_custom
            .unwrap();
        assert_eq!(result.domain, "example.com");
        assert!(result.update);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn get_sends_query_string() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/xml.response"))
            .and(query_param("Command", "namecheap.domains.dns.setCustom"))
            .and(query_param("TLD", "com"))
            .respond_with(ResponseTemplate::new(200).set_body_string(SET_CUSTOM_OK))
            .expect(1)
            .mount(&server)
            .await;

        let request = ApiRequest::new("namecheap.domains.dns.setCustom")
            .with_method(Method::GET)
            .add("TLD", "com");
        assert!(execute(&server, request).await.is_ok());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn request_params_cannot_override_auth() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(body_string_contains("ApiUser=apiuser"))
            .respond_with(ResponseTemplate::new(200).set_body_string(SET_CUSTOM_OK))
            .expect(1)
            .mount(&server)
            .await;

        let request = ApiRequest::new("namecheap.domains.dns.setCustom").add("ApiUser", "intruder");
        assert!(execute(&server, request).await.is_ok());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn error_status_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string(NOT_FOUND))
            .mount(&server)
            .await;

        let request = ApiRequest::new("namecheap.domains.dns.getHosts");
        match execute(&server, request).await {
            Err(ClientError::Namecheap(err)) => {
                assert_eq!(err.errors()[0].number, "2019166");
                assert_eq!(err.errors()[0].message, "Domain not found");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn non_200_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
            .mount(&server)
            .await;

        let request = ApiRequest::new("namecheap.domains.dns.getHosts");
        match execute(&server, request).await {
            Err(ClientError::Namecheap(err)) => {
                assert_eq!(err.status(), StatusCode::SERVICE_UNAVAILABLE);
                assert_eq!(err.errors().len(), 1);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn malformed_body_is_an_xml_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let request = ApiRequest::new("namecheap.domains.dns.getHosts");
        assert!(matches!(
            execute(&server, request).await,
            Err(ClientError::Xml(_))
        ));
    }

    #[test]
    fn debug_hides_api_key() {
        let credentials = Credentials {
            api_user: "apiuser".to_string(),
            api_key: "secret".to_string(),
            username: "apiuser".to_string(),
            client_ip: "127.0.0.1".parse().unwrap(),
        };
        assert!(!format!("{credentials:?}").contains("secret"));
    }
}
