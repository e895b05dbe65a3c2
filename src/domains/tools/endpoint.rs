//! Declarative endpoint model.
//!
//! Every ClickSend tool is described by a static [`EndpointDefinition`]:
//! an HTTP method, a URL template with `{name}` placeholders, and an ordered
//! list of [`ParamSpec`]s. This module turns a definition plus a set of
//! invocation arguments into the pieces of one upstream request.

use std::fmt;

use rmcp::model::JsonObject;
use serde_json::{Map, Value};

use super::error::ToolError;

/// HTTP methods used by the upstream API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    /// Whether this method may carry a JSON request body.
    pub fn is_mutating(self) -> bool {
        !matches!(self, Self::Get)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// JSON type accepted for a parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    String,
    Array,
}

impl ParamKind {
    /// JSON Schema type name.
    pub fn schema_type(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Array => "array",
        }
    }

    fn accepts(self, value: &Value) -> bool {
        match self {
            Self::String => value.is_string(),
            Self::Array => value.is_array(),
        }
    }
}

/// Where a parameter ends up in the outgoing request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamLocation {
    /// Substituted into the path part of the URL template.
    Path,
    /// Substituted into the query part of the URL template.
    Query,
    /// Marshalled into the JSON request body.
    Body,
}

impl ParamLocation {
    pub fn is_templated(self) -> bool {
        matches!(self, Self::Path | Self::Query)
    }
}

/// A single declared tool parameter.
#[derive(Debug, Clone, Copy)]
pub struct ParamSpec {
    pub name: &'static str,
    pub kind: ParamKind,
    pub location: ParamLocation,
    pub required: bool,
    pub description: &'static str,
}

impl ParamSpec {
    pub const fn path(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            kind: ParamKind::String,
            location: ParamLocation::Path,
            required: true,
            description,
        }
    }

    pub const fn query(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            kind: ParamKind::String,
            location: ParamLocation::Query,
            required: true,
            description,
        }
    }

    /// Optional string body field.
    pub const fn body(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            kind: ParamKind::String,
            location: ParamLocation::Body,
            required: false,
            description,
        }
    }

    /// Optional array body field.
    pub const fn body_array(name: &'static str, description: &'static str) -> Self {
        Self {
            kind: ParamKind::Array,
            ..Self::body(name, description)
        }
    }

    pub const fn required(self) -> Self {
        Self {
            required: true,
            ..self
        }
    }
}

/// Static description of one upstream endpoint exposed as a tool.
#[derive(Debug)]
pub struct EndpointDefinition {
    /// Tool name as registered in MCP.
    pub name: &'static str,
    /// Tool description shown to clients.
    pub description: &'static str,
    pub method: HttpMethod,
    /// URL template appended to the base URL. `{name}` placeholders are
    /// replaced verbatim with the matching argument.
    pub template: &'static str,
    pub params: &'static [ParamSpec],
}

impl EndpointDefinition {
    fn body_params(&self) -> impl Iterator<Item = &ParamSpec> {
        self.params
            .iter()
            .filter(|p| p.location == ParamLocation::Body)
    }

    /// Whether requests to this endpoint carry a JSON body.
    pub fn has_body(&self) -> bool {
        self.method.is_mutating() && self.body_params().next().is_some()
    }

    /// Build the JSON Schema advertised as the tool's input schema.
    pub fn input_schema(&self) -> JsonObject {
        let mut properties = Map::new();
        for param in self.params {
            let mut property = Map::new();
            property.insert("type".into(), param.kind.schema_type().into());
            property.insert("description".into(), param.description.into());
            properties.insert(param.name.into(), Value::Object(property));
        }

        let required: Vec<Value> = self
            .params
            .iter()
            .filter(|p| p.required)
            .map(|p| Value::from(p.name))
            .collect();

        let mut schema = Map::new();
        schema.insert("type".into(), "object".into());
        schema.insert("properties".into(), Value::Object(properties));
        if !required.is_empty() {
            schema.insert("required".into(), Value::Array(required));
        }
        schema
    }

    /// Check arguments against the declared parameters.
    ///
    /// Required parameters must be present and non-null. Any declared
    /// parameter that is supplied must match its kind. Undeclared arguments
    /// are not checked; they are forwarded in the body.
    pub fn validate(&self, args: &JsonObject) -> Result<(), ToolError> {
        for param in self.params {
            match args.get(param.name) {
                None | Some(Value::Null) if param.required => {
                    return Err(ToolError::missing_parameter(param.name));
                }
                None | Some(Value::Null) => {}
                Some(value) if !param.kind.accepts(value) => {
                    return Err(ToolError::invalid_parameter(param.name));
                }
                Some(_) => {}
            }
        }
        Ok(())
    }

    /// Render the URL template (path plus any query string) for `args`.
    ///
    /// Values are substituted as-is, without percent-encoding.
    pub fn render_path(&self, args: &JsonObject) -> Result<String, ToolError> {
        let mut rendered = String::with_capacity(self.template.len());
        let mut rest = self.template;

        while let Some(start) = rest.find('{') {
            let end = rest[start..]
                .find('}')
                .map(|offset| start + offset)
                .ok_or_else(|| {
                    ToolError::request_build(format!("unterminated placeholder in {}", self.template))
                })?;

            rendered.push_str(&rest[..start]);
            let name = &rest[start + 1..end];
            let value = args
                .get(name)
                .ok_or_else(|| ToolError::missing_parameter(name))?
                .as_str()
                .ok_or_else(|| ToolError::invalid_parameter(name))?;
            rendered.push_str(value);
            rest = &rest[end + 1..];
        }

        rendered.push_str(rest);
        Ok(rendered)
    }

    /// Marshal the request body: every argument not consumed by a URL
    /// placeholder, undeclared ones included.
    ///
    /// Returns `None` for endpoints that send no body.
    pub fn build_body(&self, args: &JsonObject) -> Option<JsonObject> {
        if !self.has_body() {
            return None;
        }

        let templated = self.placeholders();
        let body = args
            .iter()
            .filter(|(name, _)| !templated.contains(&name.as_str()))
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect();
        Some(body)
    }

    /// Placeholder names appearing in the URL template, in order.
    pub fn placeholders(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        let mut rest = self.template;
        while let Some(start) = rest.find('{') {
            let Some(len) = rest[start..].find('}') else {
                break;
            };
            names.push(&rest[start + 1..start + len]);
            rest = &rest[start + len + 1..];
        }
        names
    }
}
