//! Subaccount endpoints.

use crate::domains::tools::endpoint::{EndpointDefinition, HttpMethod, ParamSpec};

pub static ENDPOINTS: &[EndpointDefinition] = &[EndpointDefinition {
    name: "put_subaccounts_subaccount_id",
    description: "Update a specific subaccount",
    method: HttpMethod::Put,
    template: "/subaccounts/{subaccount_id}",
    params: &[
        ParamSpec::path("subaccount_id", "The subaccount ID you want to access."),
        ParamSpec::body("first_name", "Input parameter: Your firstname."),
        ParamSpec::body(
            "phone_number",
            "Input parameter: Your phone number in E.164 format.",
        ),
        ParamSpec::body(
            "access_settings",
            "Input parameter: Your access settings flag value, must be 1 or 0.",
        ),
        ParamSpec::body("email", "Input parameter: Your new email."),
        ParamSpec::body(
            "access_contacts",
            "Input parameter: Your access contacts flag value, must be 1 or 0.",
        ),
        ParamSpec::body(
            "access_users",
            "Input parameter: Your access users flag value, must be 1 or 0.",
        ),
        ParamSpec::body(
            "access_billing",
            "Input parameter: Your access billing flag value, must be 1 or 0.",
        ),
        ParamSpec::body("last_name", "Input parameter: Your lastname."),
        ParamSpec::body("password", "Input parameter: Your new password."),
        ParamSpec::body(
            "share_campaigns",
            "Input parameter: Your share campaigns flag value, must be 1 or 0.",
        ),
        ParamSpec::body(
            "access_reporting",
            "Input parameter: Your access reporting flag value, must be 1 or 0.",
        ),
    ],
}];
