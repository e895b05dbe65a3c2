//! Upstream HTTP client and generic request executor.
//!
//! One [`ApiClient`] is shared by every tool. It owns the base URL and a
//! `reqwest::Client` whose default headers carry `Accept` and, when
//! configured, the Basic `Authorization` credential. [`ApiClient::execute`]
//! performs the single round trip behind every tool call.

use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use rmcp::model::JsonObject;
use serde_json::{Map, Value};
use tracing::{debug, instrument, warn};

use crate::core::config::ApiConfig;
use crate::core::{Error, Result};

use super::endpoint::EndpointDefinition;
use super::error::ToolError;

/// Shared client for the upstream REST API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Build a client for the configured API.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        if let Some(ref credential) = config.basic_auth {
            let mut value = HeaderValue::from_str(&format!("Basic {credential}"))
                .map_err(|_| Error::config("Invalid Basic credential format"))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
        })
    }

    /// Full request URL for `endpoint` with `args` substituted.
    pub fn url_for(
        &self,
        endpoint: &EndpointDefinition,
        args: &JsonObject,
    ) -> std::result::Result<String, ToolError> {
        Ok(format!("{}{}", self.base_url, endpoint.render_path(args)?))
    }

    /// Execute one request against `endpoint` and return the result text.
    ///
    /// Arguments are validated before anything touches the network. On
    /// success the body is re-emitted as pretty JSON when it is a JSON
    /// object, or returned verbatim otherwise.
    #[instrument(skip_all, fields(tool = endpoint.name, method = %endpoint.method))]
    pub async fn execute(
        &self,
        endpoint: &EndpointDefinition,
        args: &JsonObject,
    ) -> std::result::Result<String, ToolError> {
        endpoint.validate(args)?;

        let url = self.url_for(endpoint, args)?;
        debug!("{} {}", endpoint.method, url);

        let mut builder = self.http.request(endpoint.method.into(), &url);
        if let Some(body) = endpoint.build_body(args) {
            builder = builder.json(&body);
        }
        let request = builder
            .build()
            .map_err(|e| ToolError::request_build(e.to_string()))?;

        let response = self
            .http
            .execute(request)
            .await
            .map_err(|e| ToolError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ToolError::ResponseRead(e.to_string()))?;

        debug!(status = status.as_u16(), bytes = body.len(), "Response received");

        if status.as_u16() >= 400 {
            warn!(status = status.as_u16(), "Upstream API returned an error status");
            return Err(ToolError::Api(body));
        }

        Ok(format_response(body))
    }
}

/// Pretty-print a JSON object body, falling back to the raw text.
pub fn format_response(body: String) -> String {
    match serde_json::from_str::<Map<String, Value>>(&body) {
        Ok(object) => serde_json::to_string_pretty(&object).unwrap_or(body),
        Err(_) => body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::endpoint::{HttpMethod, ParamSpec};
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, Request, ResponseTemplate};

    const GET_CONTACT: EndpointDefinition = EndpointDefinition {
        name: "get_contact",
        description: "Get a contact",
        method: HttpMethod::Get,
        template: "/lists/{list_id}/contacts/{contact_id}",
        params: &[
            ParamSpec::path("list_id", "List"),
            ParamSpec::path("contact_id", "Contact"),
        ],
    };

    const HISTORY: EndpointDefinition = EndpointDefinition {
        name: "get_fax_history",
        description: "History",
        method: HttpMethod::Get,
        template: "/fax/history?date_from={date_from}&date_to={date_to}&q={q}&order_by={order_by}",
        params: &[
            ParamSpec::query("date_from", "From"),
            ParamSpec::query("date_to", "To"),
            ParamSpec::query("q", "Query"),
            ParamSpec::query("order_by", "Order"),
        ],
    };

    const UPDATE_RULE: EndpointDefinition = EndpointDefinition {
        name: "put_rule",
        description: "Update a rule",
        method: HttpMethod::Put,
        template: "/automations/fax/receipts/{rule_id}",
        params: &[
            ParamSpec::path("rule_id", "Rule"),
            ParamSpec::body("rule_name", "Name").required(),
            ParamSpec::body("enabled", "Enabled"),
        ],
    };

    const CANCEL_ALL: EndpointDefinition = EndpointDefinition {
        name: "put_cancel_all",
        description: "Cancel",
        method: HttpMethod::Put,
        template: "/mms/cancel-all",
        params: &[],
    };

    fn args(value: Value) -> JsonObject {
        value.as_object().cloned().unwrap()
    }

    fn client_for(server: &MockServer, basic_auth: Option<&str>) -> ApiClient {
        let config = ApiConfig::new(server.uri(), basic_auth.map(str::to_string));
        ApiClient::new(&config).unwrap()
    }

    #[tokio::test]
    async fn test_get_pretty_prints_json_object() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/lists/7/contacts/99"))
            .and(header("Accept", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"{"http_code":200,"data":{"contact_id":99,"first_name":"Ada"}}"#,
            ))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server, None);
        let text = client
            .execute(&GET_CONTACT, &args(json!({"list_id": "7", "contact_id": "99"})))
            .await
            .unwrap();

        assert!(text.contains('\n'), "expected pretty-printed output");
        let parsed: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(
            parsed,
            json!({"http_code": 200, "data": {"contact_id": 99, "first_name": "Ada"}})
        );
    }

    #[tokio::test]
    async fn test_basic_auth_header_sent() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/lists/1/contacts/2"))
            .and(header("Authorization", "Basic dXNlcjprZXk="))
            .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server, Some("dXNlcjprZXk="));
        let result = client
            .execute(&GET_CONTACT, &args(json!({"list_id": "1", "contact_id": "2"})))
            .await;
        assert_eq!(result.unwrap(), "{}");
    }

    #[tokio::test]
    async fn test_no_authorization_without_credential() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
            .mount(&server)
            .await;

        let client = client_for(&server, None);
        client
            .execute(&GET_CONTACT, &args(json!({"list_id": "1", "contact_id": "2"})))
            .await
            .unwrap();

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
        assert!(!requests[0].headers.contains_key("authorization"));
    }

    #[tokio::test]
    async fn test_query_parameters_substituted_positionally() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/fax/history"))
            .and(query_param("date_from", "A"))
            .and(query_param("date_to", "B"))
            .and(query_param("q", "C"))
            .and(query_param("order_by", "D"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"ok":true}"#))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server, None);
        let call_args = args(json!({"date_from": "A", "date_to": "B", "q": "C", "order_by": "D"}));

        assert_eq!(
            client.url_for(&HISTORY, &call_args).unwrap(),
            format!("{}/fax/history?date_from=A&date_to=B&q=C&order_by=D", server.uri())
        );
        client.execute(&HISTORY, &call_args).await.unwrap();

        let requests = server.received_requests().await.unwrap();
        assert_eq!(
            requests[0].url.query(),
            Some("date_from=A&date_to=B&q=C&order_by=D")
        );
    }

    #[tokio::test]
    async fn test_put_body_forwards_non_path_arguments() {
        let server = MockServer::start().await;

        Mock::given(method("PUT"))
            .and(path("/automations/fax/receipts/12"))
            .and(header("Content-Type", "application/json"))
            .and(body_json(json!({
                "rule_name": "Forward",
                "enabled": "1",
                "match_type": "0"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"updated":true}"#))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server, None);
        let text = client
            .execute(
                &UPDATE_RULE,
                &args(json!({
                    "rule_id": "12",
                    "rule_name": "Forward",
                    "enabled": "1",
                    "match_type": "0"
                })),
            )
            .await
            .unwrap();
        assert!(text.contains("\"updated\": true"));
    }

    #[tokio::test]
    async fn test_put_without_body_params_sends_empty_body() {
        let server = MockServer::start().await;

        Mock::given(method("PUT"))
            .and(path("/mms/cancel-all"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"done":1}"#))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server, None);
        client.execute(&CANCEL_ALL, &JsonObject::new()).await.unwrap();

        let requests: Vec<Request> = server.received_requests().await.unwrap();
        assert!(requests[0].body.is_empty());
    }

    #[tokio::test]
    async fn test_error_status_returns_raw_body() {
        let server = MockServer::start().await;

        let upstream = r#"{"http_code":404,"response_code":"NOT_FOUND","response_msg":"Contact not found."}"#;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404).set_body_string(upstream))
            .mount(&server)
            .await;

        let client = client_for(&server, None);
        let err = client
            .execute(&GET_CONTACT, &args(json!({"list_id": "1", "contact_id": "2"})))
            .await
            .unwrap_err();

        match err {
            ToolError::Api(ref body) => assert_eq!(body, upstream),
            ref other => panic!("Expected Api error, got {other:?}"),
        }
        assert_eq!(err.to_string(), format!("API error: {upstream}"));
    }

    #[tokio::test]
    async fn test_non_json_body_returned_verbatim() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("plain  text\nbody"))
            .mount(&server)
            .await;

        let client = client_for(&server, None);
        let text = client
            .execute(&GET_CONTACT, &args(json!({"list_id": "1", "contact_id": "2"})))
            .await
            .unwrap();
        assert_eq!(text, "plain  text\nbody");
    }

    #[tokio::test]
    async fn test_missing_argument_issues_no_request() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
            .expect(0)
            .mount(&server)
            .await;

        let client = client_for(&server, None);
        let err = client
            .execute(&GET_CONTACT, &args(json!({"list_id": "1"})))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Missing required parameter: contact_id");
    }

    #[tokio::test]
    async fn test_transport_failure() {
        // Nothing listens on port 9 of the loopback interface.
        let config = ApiConfig::new("http://127.0.0.1:9", None);
        let client = ApiClient::new(&config).unwrap();

        let err = client
            .execute(&CANCEL_ALL, &JsonObject::new())
            .await
            .unwrap_err();
        assert!(matches!(err, ToolError::Transport(_)));
        assert!(err.to_string().starts_with("Request failed: "));
    }

    #[tokio::test]
    async fn test_unparseable_url_fails_request_build() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        // Unterminated IPv6 host: the URL cannot be parsed.
        let client = ApiClient::new(&ApiConfig::new("http://[::1", None)).unwrap();
        let err = client
            .execute(&GET_CONTACT, &args(json!({"list_id": "1", "contact_id": "2"})))
            .await
            .unwrap_err();

        assert!(matches!(err, ToolError::RequestBuild(_)), "{err:?}");
        assert!(err.to_string().starts_with("Failed to create request: "));
        assert!(server.received_requests().await.unwrap().is_empty());
    }

    #[test]
    fn test_invalid_credential_rejected() {
        let config = ApiConfig::new("http://localhost", Some("bad\nvalue".to_string()));
        assert!(ApiClient::new(&config).is_err());
    }

    #[test]
    fn test_format_response() {
        assert_eq!(
            format_response(r#"{"a":2,"b":[1]}"#.into()),
            "{\n  \"a\": 2,\n  \"b\": [\n    1\n  ]\n}"
        );
        assert_eq!(format_response("[1,2]".into()), "[1,2]");
        assert_eq!(format_response("not json".into()), "not json");
    }
}
