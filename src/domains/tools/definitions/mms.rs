//! MMS endpoints.

use crate::domains::tools::endpoint::{EndpointDefinition, HttpMethod};

pub static ENDPOINTS: &[EndpointDefinition] = &[EndpointDefinition {
    name: "put_mms_cancel-all",
    description: "Cancel All MMS",
    method: HttpMethod::Put,
    template: "/mms/cancel-all",
    params: &[],
}];
