//! Voice endpoints.

use crate::domains::tools::endpoint::{EndpointDefinition, HttpMethod, ParamSpec};

pub static ENDPOINTS: &[EndpointDefinition] = &[
    EndpointDefinition {
        name: "get_voice_receipts_message_id",
        description: "Get Specific Voice Receipt",
        method: HttpMethod::Get,
        template: "/voice/receipts/{message_id}",
        params: &[ParamSpec::path(
            "message_id",
            "3055-45F1-9B79-F2C43509FD16 (string, required) - The voice receipt message id.",
        )],
    },
    EndpointDefinition {
        name: "get_voice_history",
        description: "Get Voice History",
        method: HttpMethod::Get,
        template: "/voice/history?date_from={date_from}&date_to={date_to}",
        params: &[
            ParamSpec::query("date_from", "Timestamp (from) used to show records by date."),
            ParamSpec::query("date_to", "Timestamp (to) used to show recrods by date."),
        ],
    },
    EndpointDefinition {
        name: "put_voice_receipts-read",
        description: "Marked Voice Receipts as Read",
        method: HttpMethod::Put,
        template: "/voice/receipts-read?date_before={date_before}",
        params: &[ParamSpec::query(
            "date_before",
            "An optional [unix timestamp](http://help.clicksend.com/what-is-a-unix-timestamp) - \
             mark all as read before this timestamp. If not given, all receipts will be marked as read.",
        )],
    },
];
