//! Country reference data.

use crate::domains::tools::endpoint::{EndpointDefinition, HttpMethod};

pub static ENDPOINTS: &[EndpointDefinition] = &[EndpointDefinition {
    name: "get_countries",
    description: "Get all Countries",
    method: HttpMethod::Get,
    template: "/countries",
    params: &[],
}];
