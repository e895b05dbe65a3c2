//! Post letter endpoints.

use crate::domains::tools::endpoint::{EndpointDefinition, HttpMethod, ParamSpec};

pub static ENDPOINTS: &[EndpointDefinition] = &[
    EndpointDefinition {
        name: "post_post_letters_send",
        description: "Send Post Letter",
        method: HttpMethod::Post,
        template: "/post/letters/send",
        params: &[
            ParamSpec::body("file_url", "Input parameter: Your URL to your PDF file.").required(),
            ParamSpec::body(
                "priority_post",
                "Input parameter: Is it priority? 0 = Not Priority, 1 = Priority.",
            ),
            ParamSpec::body_array("recipients", "Input parameter: Your recipients."),
            ParamSpec::body(
                "template_used",
                "Input parameter: Whether you used our template or not \
                 ([More Info](http://help.clicksend.com/13996-Post/post-letter-template)).",
            ),
            ParamSpec::body(
                "colour",
                "Input parameter: Is it in colour? 0 = Black and White, 1 = Colour.",
            ),
            ParamSpec::body(
                "duplex",
                "Input parameter: Is it in duplex? 0 = Simplex, 1 = Duplex.",
            ),
        ],
    },
    EndpointDefinition {
        name: "put_post_return-addresses_return_address_id",
        description: "Update Post Return Address",
        method: HttpMethod::Put,
        template: "/post/return-addresses/{return_address_id}",
        params: &[
            ParamSpec::path("return_address_id", "Your return address id."),
            ParamSpec::body("address_name", "Input parameter: Your address name.").required(),
            ParamSpec::body(
                "address_postal_code",
                "Input parameter: Your address postal code.",
            )
            .required(),
            ParamSpec::body("address_state", "Input parameter: Your address state.").required(),
            ParamSpec::body("address_city", "Input parameter: Your address city.").required(),
            ParamSpec::body(
                "address_country",
                "Input parameter: Two-letter country code defined in ISO 3166.",
            )
            .required(),
            ParamSpec::body("address_line_1", "Input parameter: Your address line 1.").required(),
            ParamSpec::body("address_line_2", "Input parameter: Your address line 2."),
        ],
    },
];
