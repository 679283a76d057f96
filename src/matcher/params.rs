use std::borrow::Cow;

use percent_encoding::percent_decode_str;

use crate::pattern::{CaptureList, RouteSegment};
use crate::registry::Route;
use crate::route::RouteTarget;
use crate::router::RouterOptions;
use crate::types::{RouteMatch, RouteParams};

/// Percent-decodes a captured value. Invalid UTF-8 sequences are replaced
/// rather than rejected.
pub(crate) fn decode_component(raw: &str) -> Cow<'_, str> {
    percent_decode_str(raw).decode_utf8_lossy()
}

/// Binds captures to placeholder names, merges static parameters underneath
/// them and resolves the controller/action pair.
pub(crate) fn bind_match(
    route: &Route,
    captures: CaptureList<'_>,
    options: &RouterOptions,
) -> RouteMatch {
    let static_params = route.static_params();
    let mut params = RouteParams::with_capacity(captures.len() + static_params.len());

    let names: Vec<&str> = route
        .pattern()
        .segments()
        .iter()
        .filter_map(|segment| match segment {
            RouteSegment::Placeholder(placeholder) => Some(placeholder.name.as_str()),
            RouteSegment::Literal(_) => None,
        })
        .collect();

    for (index, raw) in captures {
        let Some(name) = names.get(index) else {
            continue;
        };
        let value = if options.decode_params {
            decode_component(raw).into_owned()
        } else {
            raw.to_string()
        };
        params.insert((*name).to_string(), value);
    }

    // captured values take precedence over static ones
    for (key, value) in static_params {
        params
            .entry(key.clone())
            .or_insert_with(|| value.clone());
    }

    let (controller, action) = match route.target() {
        RouteTarget::Action { controller, action } => (controller.clone(), action.clone()),
        RouteTarget::Controller(controller) => (
            controller.clone(),
            param_or(&params, "action", &options.default_action),
        ),
        RouteTarget::Dynamic => (
            param_or(&params, "controller", &options.default_controller),
            param_or(&params, "action", &options.default_action),
        ),
    };

    RouteMatch {
        route_id: route.id(),
        route_name: route.name().map(str::to_string),
        controller,
        action,
        params,
    }
}

fn param_or(params: &RouteParams, key: &str, fallback: &str) -> String {
    params
        .get(key)
        .filter(|value| !value.is_empty())
        .map_or_else(|| fallback.to_string(), String::clone)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_percent_sequences() {
        assert_eq!(decode_component("hello%20world"), "hello world");
        assert_eq!(decode_component("caf%C3%A9"), "café");
        assert_eq!(decode_component("plain"), "plain");
    }

    #[test]
    fn invalid_utf8_is_replaced() {
        assert_eq!(decode_component("%FF"), "\u{FFFD}");
    }
}
