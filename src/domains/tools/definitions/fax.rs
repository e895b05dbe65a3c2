//! Fax endpoints.

use crate::domains::tools::endpoint::{EndpointDefinition, HttpMethod, ParamSpec};

pub static ENDPOINTS: &[EndpointDefinition] = &[
    EndpointDefinition {
        name: "get_fax_history",
        description: "Get Fax History",
        method: HttpMethod::Get,
        template: "/fax/history?date_from={date_from}&date_to={date_to}&q={q}&order_by={order_by}",
        params: &[
            ParamSpec::query(
                "date_from",
                "Customize result by setting from date (timestsamp)",
            ),
            ParamSpec::query("date_to", "Customize result by setting to date (timestamp)"),
            ParamSpec::query("q", "Custom query"),
            ParamSpec::query("order_by", "Order result by"),
        ],
    },
    EndpointDefinition {
        name: "post_fax_send",
        description: "Send Fax",
        method: HttpMethod::Post,
        template: "/fax/send",
        params: &[
            ParamSpec::body_array("messages", "Input parameter: Your messages.").required(),
            ParamSpec::body(
                "source",
                "Input parameter: Your method of sending e.g. 'wordpress', 'php', 'c#'.",
            ),
            ParamSpec::body(
                "from_email",
                "Input parameter: An email address where the reply should be emailed to.",
            ),
            ParamSpec::body(
                "to",
                "Input parameter: Recipient number in E.164 format or local format \
                 ([more info](https://help.clicksend.com/SMS/what-format-does-the-recipient-phone-number-need-to-be-in)).",
            )
            .required(),
            ParamSpec::body("country", "Input parameter: Recipient country."),
            ParamSpec::body("file_url", "Input parameter: Your URL to your PDF file.").required(),
            ParamSpec::body(
                "list_id",
                "Input parameter: Your list ID if sending to a whole list. Can be used instead of 'to'.",
            ),
            ParamSpec::body(
                "custom_string",
                "Input parameter: Your reference. Will be passed back with all replies and delivery reports.",
            ),
            ParamSpec::body(
                "from",
                "Input parameter: Your sender id. Must be a valid fax number.",
            ),
            ParamSpec::body(
                "schedule",
                "Input parameter: Leave blank for immediate delivery. Your schedule time as a \
                 [unix timestamp](http://help.clicksend.com/what-is-a-unix-timestamp).",
            ),
        ],
    },
];
