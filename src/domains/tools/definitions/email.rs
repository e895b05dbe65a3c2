//! Email marketing and transactional email endpoints.

use crate::domains::tools::endpoint::{EndpointDefinition, HttpMethod, ParamSpec};

pub static ENDPOINTS: &[EndpointDefinition] = &[
    EndpointDefinition {
        name: "put_email_address-verify_email_address_id_verify_activation_token",
        description: "Verify Allowed Email Address",
        method: HttpMethod::Put,
        template: "/email/address-verify/{email_address_id}/verify/{activation_token}",
        params: &[
            ParamSpec::path("email_address_id", "The email address id you want to access."),
            ParamSpec::path(
                "activation_token",
                "6E8B-4FDB-99A7-7ED08DF97BCC (required, string) - Your activation token.",
            ),
        ],
    },
    EndpointDefinition {
        name: "post_email_receipts",
        description: "Add a Test Delivery Receipt",
        method: HttpMethod::Post,
        template: "/email/receipts",
        params: &[ParamSpec::body(
            "url",
            "Input parameter: Your URL if using the push option or 'poll' if using the pull option.",
        )
        .required()],
    },
];
