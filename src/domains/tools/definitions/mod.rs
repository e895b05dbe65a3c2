//! Tool definitions module.
//!
//! The declarative endpoint table, one module per API category. Adding a
//! tool means adding an [`EndpointDefinition`] to the matching module; the
//! registry and router pick it up from [`all`].

pub mod automation_rules;
pub mod contacts;
pub mod countries;
pub mod email;
pub mod fax;
pub mod mms;
pub mod numbers;
pub mod post;
pub mod pricing;
pub mod reseller;
pub mod sms;
pub mod subaccounts;
pub mod voice;

use super::endpoint::EndpointDefinition;

/// Every endpoint exposed as a tool, grouped by category.
pub fn all() -> impl Iterator<Item = &'static EndpointDefinition> {
    [
        automation_rules::ENDPOINTS,
        contacts::ENDPOINTS,
        countries::ENDPOINTS,
        email::ENDPOINTS,
        fax::ENDPOINTS,
        mms::ENDPOINTS,
        numbers::ENDPOINTS,
        post::ENDPOINTS,
        pricing::ENDPOINTS,
        reseller::ENDPOINTS,
        sms::ENDPOINTS,
        subaccounts::ENDPOINTS,
        voice::ENDPOINTS,
    ]
    .into_iter()
    .flatten()
}

/// Find an endpoint definition by tool name.
pub fn find(name: &str) -> Option<&'static EndpointDefinition> {
    all().find(|endpoint| endpoint.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::endpoint::{HttpMethod, ParamKind, ParamLocation};
    use rmcp::model::JsonObject;
    use serde_json::Value;
    use std::collections::HashSet;

    /// Arguments with every declared parameter set to `<name>-value`.
    fn full_args(endpoint: &EndpointDefinition) -> JsonObject {
        endpoint
            .params
            .iter()
            .map(|p| {
                let value = match p.kind {
                    ParamKind::String => Value::from(format!("{}-value", p.name)),
                    ParamKind::Array => Value::Array(vec![]),
                };
                (p.name.to_string(), value)
            })
            .collect()
    }

    #[test]
    fn test_endpoint_count() {
        assert_eq!(all().count(), 24);
    }

    #[test]
    fn test_names_are_unique() {
        let mut seen = HashSet::new();
        for endpoint in all() {
            assert!(seen.insert(endpoint.name), "duplicate tool {}", endpoint.name);
        }
    }

    #[test]
    fn test_placeholders_match_templated_params() {
        for endpoint in all() {
            let placeholders: HashSet<_> = endpoint.placeholders().into_iter().collect();
            let templated: HashSet<_> = endpoint
                .params
                .iter()
                .filter(|p| p.location.is_templated())
                .map(|p| p.name)
                .collect();
            assert_eq!(placeholders, templated, "mismatch in {}", endpoint.name);
        }
    }

    #[test]
    fn test_templated_params_are_required_strings() {
        for endpoint in all() {
            for param in endpoint.params.iter().filter(|p| p.location.is_templated()) {
                assert!(param.required, "{}.{}", endpoint.name, param.name);
                assert_eq!(param.kind, ParamKind::String, "{}.{}", endpoint.name, param.name);
            }
        }
    }

    #[test]
    fn test_body_params_only_on_mutating_methods() {
        for endpoint in all() {
            let has_body_params = endpoint
                .params
                .iter()
                .any(|p| p.location == ParamLocation::Body);
            if has_body_params {
                assert!(endpoint.method.is_mutating(), "{}", endpoint.name);
            }
        }
    }

    #[test]
    fn test_every_required_param_is_enforced() {
        for endpoint in all() {
            let args = full_args(endpoint);
            assert!(endpoint.validate(&args).is_ok(), "{}", endpoint.name);

            for param in endpoint.params.iter().filter(|p| p.required) {
                let mut partial = args.clone();
                partial.remove(param.name);
                let err = endpoint.validate(&partial).unwrap_err();
                assert_eq!(
                    err.to_string(),
                    format!("Missing required parameter: {}", param.name),
                    "{}",
                    endpoint.name
                );
            }
        }
    }

    #[test]
    fn test_fax_history_template() {
        let endpoint = find("get_fax_history").unwrap();
        let args: JsonObject = serde_json::from_str(
            r#"{"date_from":"A","date_to":"B","q":"C","order_by":"D"}"#,
        )
        .unwrap();
        assert_eq!(
            endpoint.render_path(&args).unwrap(),
            "/fax/history?date_from=A&date_to=B&q=C&order_by=D"
        );
    }

    #[test]
    fn test_numbers_search_template() {
        let endpoint = find("get_numbers_search_country").unwrap();
        let args: JsonObject =
            serde_json::from_str(r#"{"country":"AU","search":"61","search_type":"0"}"#).unwrap();
        assert_eq!(endpoint.render_path(&args).unwrap(), "/numbers/search/AU?61=1&0=2");
    }

    #[test]
    fn test_transfer_contact_has_no_body() {
        let endpoint = find("put_lists_from_list_id_contacts_contact_id_to_list_id").unwrap();
        assert_eq!(endpoint.method, HttpMethod::Put);
        assert!(endpoint.build_body(&full_args(endpoint)).is_none());
        assert_eq!(
            endpoint.render_path(&full_args(endpoint)).unwrap(),
            "/lists/from_list_id-value/contacts/contact_id-value/to_list_id-value"
        );
    }

    #[test]
    fn test_send_fax_body_forwards_every_argument() {
        let endpoint = find("post_fax_send").unwrap();
        let mut args = full_args(endpoint);
        args.insert("schedule_time".into(), Value::from("1700000000"));

        let body = endpoint.build_body(&args).unwrap();
        assert_eq!(body.len(), endpoint.params.len() + 1);
        assert!(body["messages"].is_array());
        assert_eq!(body["schedule_time"], "1700000000");
    }

    #[test]
    fn test_update_return_address_body_excludes_path_param() {
        let endpoint = find("put_post_return-addresses_return_address_id").unwrap();
        let body = endpoint.build_body(&full_args(endpoint)).unwrap();
        assert!(!body.contains_key("return_address_id"));
        assert_eq!(body["address_city"], "address_city-value");
    }

    #[test]
    fn test_find_unknown() {
        assert!(find("get_nothing").is_none());
    }
}
