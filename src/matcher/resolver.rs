use crate::pattern::CaptureList;
use crate::registry::Route;

/// Walks `routes` in registration order and returns the first one whose
/// compiled pattern matches the whole of `normalized`.
#[tracing::instrument(level = "trace", skip(routes), fields(path = %normalized, routes = routes.len() as u64))]
pub fn find_route<'r, 'p>(
    routes: &'r [Route],
    normalized: &'p str,
) -> Option<(&'r Route, CaptureList<'p>)> {
    for route in routes {
        if let Some(captures) = route.pattern().captures(normalized) {
            tracing::trace!(route_id = route.id(), pattern = %route.pattern().source(), "route matched");
            return Some((route, captures));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::RouteRegistry;
    use crate::route::{RouteSpec, RouteTarget};
    use crate::router::RouterOptions;

    fn table(patterns: &[&str]) -> crate::table::RouteTable {
        let mut registry = RouteRegistry::new(RouterOptions::default());
        for pattern in patterns {
            registry
                .insert(RouteSpec::new(*pattern, RouteTarget::Dynamic))
                .unwrap();
        }
        registry.into_table()
    }

    #[test]
    fn first_registered_route_wins() {
        let table = table(&["/news/{:id:\\d+}", "/news/{:action}"]);

        let (route, captures) = find_route(table.routes(), "/news/42").unwrap();
        assert_eq!(route.id(), 0);
        assert_eq!(captures.as_slice(), &[(0, "42")]);

        let (route, _) = find_route(table.routes(), "/news/list").unwrap();
        assert_eq!(route.id(), 1);
    }

    #[test]
    fn general_route_registered_first_shadows_specific_one() {
        let table = table(&["/news/{:action}", "/news/{:id:\\d+}"]);
        let (route, _) = find_route(table.routes(), "/news/42").unwrap();
        assert_eq!(route.id(), 0);
    }

    #[test]
    fn no_partial_matches() {
        let table = table(&["/news"]);
        assert!(find_route(table.routes(), "/news/extra").is_none());
        assert!(find_route(table.routes(), "/new").is_none());
    }
}
