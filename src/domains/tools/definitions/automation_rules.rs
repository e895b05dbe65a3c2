//! Automation rule endpoints (SMS receipts, fax inbound, fax receipts).

use crate::domains::tools::endpoint::{EndpointDefinition, HttpMethod, ParamSpec};

pub static ENDPOINTS: &[EndpointDefinition] = &[
    EndpointDefinition {
        name: "delete_automations_sms_receipts_receipt_rule_id",
        description: "Delete a rule",
        method: HttpMethod::Delete,
        template: "/automations/sms/receipts/{receipt_rule_id}",
        params: &[ParamSpec::path("receipt_rule_id", "Receipt Rule ID.")],
    },
    EndpointDefinition {
        name: "put_automations_fax_inbound_inbound_rule_id",
        description: "Update a rule",
        method: HttpMethod::Put,
        template: "/automations/fax/inbound/{inbound_rule_id}",
        params: &[
            ParamSpec::path("inbound_rule_id", "Fax inbound rule id"),
            ParamSpec::body("rule_name", "Input parameter: Rule Name").required(),
            ParamSpec::body("action", "Input parameter: Action").required(),
            ParamSpec::body("action_address", "Input parameter: Action Address").required(),
            ParamSpec::body("dedicated_number", "Input parameter: Decicated Number").required(),
            ParamSpec::body("enabled", "Input parameter: Enable").required(),
        ],
    },
    EndpointDefinition {
        name: "put_automations_fax_receipts_rule_id",
        description: "Update a Rule",
        method: HttpMethod::Put,
        template: "/automations/fax/receipts/{rule_id}",
        params: &[
            ParamSpec::path("rule_id", "The email receipt rule id you want to access."),
            ParamSpec::body("action", "Input parameter: Action."),
            ParamSpec::body("action_address", "Input parameter: Action Address."),
            ParamSpec::body("enabled", "Input parameter: Enabled."),
            ParamSpec::body("match_type", "Input parameter: Match Type. 0=All reports."),
            ParamSpec::body("rule_name", "Input parameter: Rule Name."),
        ],
    },
];
