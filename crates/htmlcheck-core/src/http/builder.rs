//! Construction of checker requests from validate options

use reqwest::header::{CONTENT_TYPE, USER_AGENT as USER_AGENT_HEADER};
use reqwest::{Client, Request};
use url::Url;

use crate::error::{Error, Result};
use crate::types::ValidateRequest;

/// Client identifier sent with every checker request
pub const USER_AGENT: &str = concat!(
    "htmlcheck/",
    env!("CARGO_PKG_VERSION"),
    " ~ github.com/htmlcheck/htmlcheck"
);

/// Content type for document uploads
const HTML_CONTENT_TYPE: &str = "text/html; encoding=utf-8";

/// Builds outbound HTTP requests for the checker endpoint
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    client: Client,
}

impl RequestBuilder {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Build the outbound request: a POST carrying the document body when
    /// input text is available, otherwise a GET with a `doc` query
    /// parameter naming the page for the checker to fetch. Both carry the
    /// `out` parameter and the client identifier header.
    pub fn build(&self, request: &ValidateRequest, input_html: Option<&str>) -> Result<Request> {
        let check_url = Url::parse(&request.check_url).map_err(|e| Error::Configuration {
            message: format!("invalid checkUrl \"{}\": {}", request.check_url, e),
        })?;
        let builder = match input_html {
            Some(body) => self
                .client
                .post(check_url)
                .header(CONTENT_TYPE, HTML_CONTENT_TYPE)
                .body(body.to_string()),
            None => {
                let website = request.website.as_deref().unwrap_or_default();
                self.client.get(check_url).query(&[("doc", website)])
            }
        };
        builder
            .header(USER_AGENT_HEADER, USER_AGENT)
            .query(&[("out", request.output.as_str())])
            .build()
            .map_err(|e| Error::HttpRequest {
                message: format!("failed to build checker request: {}", e),
                source: Some(anyhow::Error::new(e)),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::OutputFormat;
    use reqwest::Method;

    fn query_pairs(request: &Request) -> Vec<(String, String)> {
        request
            .url()
            .query_pairs()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_document_upload_is_a_post() {
        let builder = RequestBuilder::new(Client::new());
        let options = ValidateRequest::html("<!doctype html>");
        let request = builder
            .build(&options, options.html.as_deref())
            .unwrap();

        assert_eq!(request.method(), &Method::POST);
        assert_eq!(
            request.headers().get(CONTENT_TYPE).unwrap(),
            HTML_CONTENT_TYPE
        );
        assert_eq!(
            request.body().and_then(|b| b.as_bytes()),
            Some("<!doctype html>".as_bytes())
        );
        assert!(query_pairs(&request).contains(&("out".to_string(), "json".to_string())));
    }

    #[test]
    fn test_website_check_is_a_get() {
        let builder = RequestBuilder::new(Client::new());
        let options = ValidateRequest::website("https://example.org/");
        let request = builder.build(&options, None).unwrap();

        assert_eq!(request.method(), &Method::GET);
        let pairs = query_pairs(&request);
        assert!(pairs.contains(&("doc".to_string(), "https://example.org/".to_string())));
        assert!(pairs.contains(&("out".to_string(), "json".to_string())));
        assert!(request.body().is_none());
    }

    #[test]
    fn test_html_output_format_is_forwarded() {
        let builder = RequestBuilder::new(Client::new());
        let mut options = ValidateRequest::website("https://example.org/");
        options.output = OutputFormat::Html;
        let request = builder.build(&options, None).unwrap();
        assert!(query_pairs(&request).contains(&("out".to_string(), "html".to_string())));
    }

    #[test]
    fn test_endpoint_override() {
        let builder = RequestBuilder::new(Client::new());
        let mut options = ValidateRequest::html("<p>hi</p>");
        options.check_url = "https://checker.example.net/nu/".to_string();
        let request = builder
            .build(&options, options.html.as_deref())
            .unwrap();
        assert_eq!(request.url().host_str(), Some("checker.example.net"));
        assert_eq!(request.url().path(), "/nu/");
    }

    #[test]
    fn test_user_agent_identifies_the_client() {
        let builder = RequestBuilder::new(Client::new());
        let options = ValidateRequest::html("<p>hi</p>");
        let request = builder
            .build(&options, options.html.as_deref())
            .unwrap();
        let agent = request.headers().get(USER_AGENT_HEADER).unwrap();
        assert!(agent.to_str().unwrap().starts_with("htmlcheck/"));
    }

    #[test]
    fn test_invalid_endpoint_is_a_configuration_error() {
        let builder = RequestBuilder::new(Client::new());
        let mut options = ValidateRequest::html("<p>hi</p>");
        options.check_url = "not a url".to_string();
        let err = builder
            .build(&options, options.html.as_deref())
            .unwrap_err();
        assert!(matches!(err, Error::Configuration { .. }));
    }
}
