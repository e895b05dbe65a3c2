//! Reseller settings and reseller account endpoints.

use crate::domains::tools::endpoint::{EndpointDefinition, HttpMethod, ParamSpec};

pub static ENDPOINTS: &[EndpointDefinition] = &[
    EndpointDefinition {
        name: "put_reseller",
        description: "Update Reseller Setting",
        method: HttpMethod::Put,
        template: "/reseller",
        params: &[
            ParamSpec::body("logo_url_dark", "Input parameter: Logo URL (dark)").required(),
            ParamSpec::body("subdomain", "Input parameter: Subdomain.").required(),
            ParamSpec::body("company_name", "Input parameter: Company name.").required(),
            ParamSpec::body(
                "default_margin_numbers",
                "Input parameter: Default margin numbers.",
            )
            .required(),
            ParamSpec::body("trial_balance", "Input parameter: Trial balance.").required(),
            ParamSpec::body("logo_url_light", "Input parameter: Logo URL (light)").required(),
            ParamSpec::body("colour_navigation", "Input parameter: Colour navigation.").required(),
            ParamSpec::body("default_margin", "Input parameter: Default margin.").required(),
            ParamSpec::body(
                "allow_public_signups",
                "Input parameter: Allow public signups.",
            )
            .required(),
        ],
    },
    EndpointDefinition {
        name: "post_reseller_accounts",
        description: "Create Reseller Account",
        method: HttpMethod::Post,
        template: "/reseller/accounts",
        params: &[
            ParamSpec::body("user_email", "Input parameter: Your email.").required(),
            ParamSpec::body("user_first_name", "Input parameter: Your first name.").required(),
            ParamSpec::body("user_last_name", "Input parameter: Your last name.").required(),
            ParamSpec::body(
                "user_phone",
                "Input parameter: Your phone number in E.164 format.",
            )
            .required(),
            ParamSpec::body("username", "Input parameter: Your username.").required(),
            ParamSpec::body("account_name", "Input parameter: Your delivery to value.").required(),
            ParamSpec::body("country", "Input parameter: Client country.").required(),
            ParamSpec::body("password", "Input parameter: Your password.").required(),
        ],
    },
];
