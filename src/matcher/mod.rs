mod params;
mod route_matcher;

pub(crate) use params::captures_to_params;
pub use route_matcher::{RouteMatch, RouteMatcher};
