//! Pricing endpoints.

use crate::domains::tools::endpoint::{EndpointDefinition, HttpMethod, ParamSpec};

pub static ENDPOINTS: &[EndpointDefinition] = &[EndpointDefinition {
    name: "get_pricing_country",
    description: "Get Country Pricing",
    method: HttpMethod::Get,
    template: "/pricing/{country}?currency={currency}",
    params: &[
        ParamSpec::path("country", "Two-letter representation of the country."),
        ParamSpec::query("currency", "Three-letter representation of the currency."),
    ],
}];
