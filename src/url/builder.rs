use std::fmt;

use crate::pattern::{CompiledPattern, RouteSegment};
use crate::registry::Route;
use crate::route::RouteTarget;
use crate::router::RouterOptions;
use crate::table::RouteTable;

use super::{UrlError, UrlResult, encode_query_component, encode_segment};

/// How a caller identifies the route to build a URL for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteRef<'a> {
    Name(&'a str),
    Target { controller: &'a str, action: &'a str },
}

impl<'a> From<&'a str> for RouteRef<'a> {
    fn from(name: &'a str) -> Self {
        Self::Name(name)
    }
}

impl<'a> From<(&'a str, &'a str)> for RouteRef<'a> {
    fn from((controller, action): (&'a str, &'a str)) -> Self {
        Self::Target { controller, action }
    }
}

impl fmt::Display for RouteRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(name) => write!(f, "route '{name}'"),
            Self::Target { controller, action } => write!(f, "{controller}/{action}"),
        }
    }
}

/// Reverse-routes `route_ref` with `params`.
///
/// Placeholders are filled from `params` (last value wins for repeated keys)
/// and percent-encoded; an optional unit without a value is left out. Entries
/// no placeholder consumed become the query string, in the order given.
#[tracing::instrument(level = "trace", skip(table, route_ref, params), fields(route = %route_ref))]
pub fn build_url<I, K, V>(table: &RouteTable, route_ref: RouteRef<'_>, params: I) -> UrlResult<String>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let params: Vec<(K, V)> = params.into_iter().collect();
    let options = table.options();
    let route = resolve_route(table, route_ref)?;
    let pattern = route.pattern();

    let mut consumed = vec![false; params.len()];
    let mut substituted: Vec<Option<String>> = Vec::new();
    let mut path = String::with_capacity(pattern.source().len() + 16);
    let mut index = 0usize;

    for segment in pattern.segments() {
        let placeholder = match segment {
            RouteSegment::Literal(text) => {
                path.push_str(text);
                continue;
            }
            RouteSegment::Placeholder(placeholder) => placeholder,
        };
        let slot = index;
        index += 1;

        let mut value = None;
        for (position, (key, supplied)) in params.iter().enumerate() {
            if key.as_ref() == placeholder.name {
                consumed[position] = true;
                value = Some(supplied.as_ref());
            }
        }

        if let Some(injected) = injected_value(route_ref, &placeholder.name) {
            let omit = placeholder.optional
                && injected == fallback_for(route, &placeholder.name, options);
            value = if omit { None } else { Some(injected) };
        }

        match value.filter(|v| !v.is_empty()) {
            Some(raw) => {
                let encoded = encode_segment(raw);
                if !pattern.accepts(slot, &encoded) {
                    return Err(UrlError::ConstraintViolation {
                        pattern: pattern.source().to_string(),
                        param: placeholder.name.clone(),
                        value: raw.to_string(),
                    });
                }
                if placeholder.optional
                    && let Some(separator) = placeholder.separator
                {
                    path.push(separator);
                }
                path.push_str(&encoded);
                substituted.push(Some(encoded.into_owned()));
            }
            None if placeholder.optional => substituted.push(None),
            None => {
                return Err(UrlError::MissingParameter {
                    pattern: pattern.source().to_string(),
                    param: placeholder.name.clone(),
                });
            }
        }
    }

    if path.is_empty() {
        path.push('/');
    }

    if !binds_back(pattern, &path, &substituted) {
        return Err(UrlError::AmbiguousUrl {
            pattern: pattern.source().to_string(),
            url: path,
        });
    }

    let mut first = true;
    for ((key, value), used) in params.iter().zip(&consumed) {
        if *used {
            continue;
        }
        path.push(if first { '?' } else { '&' });
        first = false;
        path.push_str(&encode_query_component(key.as_ref()));
        path.push('=');
        path.push_str(&encode_query_component(value.as_ref()));
    }

    Ok(path)
}

/// Whether matching `path` against `pattern` captures exactly the values
/// that were substituted into it.
fn binds_back(pattern: &CompiledPattern, path: &str, substituted: &[Option<String>]) -> bool {
    let Some(captures) = pattern.captures(path) else {
        return false;
    };
    let mut bound: Vec<Option<&str>> = vec![None; substituted.len()];
    for (slot, raw) in captures {
        if let Some(entry) = bound.get_mut(slot) {
            *entry = Some(raw);
        }
    }
    bound
        .iter()
        .zip(substituted)
        .all(|(bound, expected)| *bound == expected.as_deref())
}

fn resolve_route<'t>(table: &'t RouteTable, route_ref: RouteRef<'_>) -> UrlResult<&'t Route> {
    match route_ref {
        RouteRef::Name(name) => {
            table
                .route_by_name(name)
                .ok_or_else(|| UrlError::UnknownRouteName {
                    name: name.to_string(),
                })
        }
        RouteRef::Target { controller, action } => table
            .routes()
            .iter()
            .find(|route| accepts_target(route, controller, action, table.options()))
            .ok_or_else(|| UrlError::NoRouteForTarget {
                controller: controller.to_string(),
                action: action.to_string(),
            }),
    }
}

fn injected_value<'a>(route_ref: RouteRef<'a>, name: &str) -> Option<&'a str> {
    match (route_ref, name) {
        (RouteRef::Target { controller, .. }, "controller") => Some(controller),
        (RouteRef::Target { action, .. }, "action") => Some(action),
        _ => None,
    }
}

/// Value a match on `route` binds to `key` when no placeholder supplies it.
fn fallback_for<'r>(route: &'r Route, key: &str, options: &'r RouterOptions) -> &'r str {
    route.spec().static_param(key).unwrap_or(match key {
        "controller" => options.default_controller.as_str(),
        _ => options.default_action.as_str(),
    })
}

/// Whether matching a URL of `route` can resolve to `controller`/`action`.
fn accepts_target(route: &Route, controller: &str, action: &str, options: &RouterOptions) -> bool {
    match route.target() {
        RouteTarget::Action {
            controller: fixed_controller,
            action: fixed_action,
        } => fixed_controller == controller && fixed_action == action,
        RouteTarget::Controller(fixed_controller) => {
            fixed_controller == controller && can_supply(route, "action", action, options)
        }
        RouteTarget::Dynamic => {
            can_supply(route, "controller", controller, options)
                && can_supply(route, "action", action, options)
        }
    }
}

fn can_supply(route: &Route, key: &str, value: &str, options: &RouterOptions) -> bool {
    let pattern = route.pattern();
    let fallback = fallback_for(route, key, options);
    match pattern
        .placeholders()
        .enumerate()
        .find(|(_, placeholder)| placeholder.name == key)
    {
        Some((slot, placeholder)) => {
            (placeholder.optional && value == fallback)
                || (!value.is_empty() && pattern.accepts(slot, &encode_segment(value)))
        }
        None => value == fallback,
    }
}
