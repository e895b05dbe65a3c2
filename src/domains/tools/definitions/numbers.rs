//! Dedicated number endpoints.

use crate::domains::tools::endpoint::{EndpointDefinition, HttpMethod, ParamSpec};

pub static ENDPOINTS: &[EndpointDefinition] = &[EndpointDefinition {
    name: "get_numbers_search_country",
    description: "Search Dedicated Numbers by Country",
    method: HttpMethod::Get,
    // The upstream template places `search` and `search_type` in key position.
    template: "/numbers/search/{country}?{search}=1&{search_type}=2",
    params: &[
        ParamSpec::path("country", "Your preferred country."),
        ParamSpec::query("search", "Your search pattern or query."),
        ParamSpec::query(
            "search_type",
            "Your strategy for searching, 0 = starts with, 1 = anywhere, 2 = ends with.",
        ),
    ],
}];
