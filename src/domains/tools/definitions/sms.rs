//! SMS endpoints.

use crate::domains::tools::endpoint::{EndpointDefinition, HttpMethod, ParamSpec};

pub static ENDPOINTS: &[EndpointDefinition] = &[
    EndpointDefinition {
        name: "put_sms_message_id_cancel",
        description: "Cancel a Scheduled Message",
        method: HttpMethod::Put,
        template: "/sms/{message_id}/cancel",
        params: &[ParamSpec::path(
            "message_id",
            "B7CE432193CD-0753597B7293 (string, required) - The message ID you want to cancel.",
        )],
    },
    EndpointDefinition {
        name: "get_sms_inbound_outbound_message_id",
        description: "Get Specific Inbound - Pull",
        method: HttpMethod::Get,
        template: "/sms/inbound/{outbound_message_id}",
        params: &[ParamSpec::path(
            "outbound_message_id",
            "Message ID of the original outbound message, to which the inbound message is a reply. \
             Must be a valid GUID.",
        )],
    },
];
