//! Contact list endpoints.

use crate::domains::tools::endpoint::{EndpointDefinition, HttpMethod, ParamSpec};

pub static ENDPOINTS: &[EndpointDefinition] = &[
    EndpointDefinition {
        name: "post_lists_list_id_contacts",
        description: "Create a new contact",
        method: HttpMethod::Post,
        template: "/lists/{list_id}/contacts",
        params: &[
            ParamSpec::path(
                "list_id",
                "Your contact list id where your contact be associated.",
            ),
            ParamSpec::body("last_name", "Input parameter: Contact lastname."),
            ParamSpec::body("custom_4", "Input parameter: Contact custom 4 text."),
            ParamSpec::body("email", "Input parameter: Contact email."),
            ParamSpec::body(
                "address_country",
                "Input parameter: Contact two-letter country code defined in ISO 3166.",
            ),
            ParamSpec::body("address_postal_code", "Input parameter: Contact postal code."),
            ParamSpec::body("custom_1", "Input parameter: Contact custom 1 text."),
            ParamSpec::body("custom_2", "Input parameter: Contact custom 2 text."),
            ParamSpec::body("organization_name", "Input parameter: Your organization name."),
            ParamSpec::body("address_line_2", "Input parameter: Contact address line 2."),
            ParamSpec::body("address_state", "Input parameter: Contact state."),
            ParamSpec::body("first_name", "Input parameter: Contact firstname."),
            ParamSpec::body("custom_3", "Input parameter: Contact custom 3 text."),
            ParamSpec::body("fax_number", "Input parameter: Contact fax number."),
            ParamSpec::body(
                "phone_number",
                "Input parameter: Contact phone number in E.164 format.",
            )
            .required(),
            ParamSpec::body("address_city", "Input parameter: Contact city."),
            ParamSpec::body("address_line_1", "Input parameter: Contact address line 1."),
        ],
    },
    EndpointDefinition {
        name: "get_lists_list_id_contacts_contact_id",
        description: "Get a specific contact",
        method: HttpMethod::Get,
        template: "/lists/{list_id}/contacts/{contact_id}",
        params: &[
            ParamSpec::path("list_id", "Your contact list id you want to access."),
            ParamSpec::path("contact_id", "Your contact id you want to access."),
        ],
    },
    EndpointDefinition {
        name: "put_lists_from_list_id_contacts_contact_id_to_list_id",
        description: "Transfer a Contact",
        method: HttpMethod::Put,
        template: "/lists/{from_list_id}/contacts/{contact_id}/{to_list_id}",
        params: &[
            ParamSpec::path("from_list_id", "From list id."),
            ParamSpec::path("contact_id", "Contact ID."),
            ParamSpec::path("to_list_id", "To list id."),
        ],
    },
];
