mod cache;
mod components;
mod fixed;
mod match_all;
mod options;
mod service;
mod snapshot;

pub use cache::DEFAULT_CACHE_CAPACITY;
pub use components::ComponentsLoader;
pub use fixed::FixedRouteOptions;
pub use match_all::MatchAll;
pub use options::{ManagerOptions, ManagerOptionsBuilder, ManagerOptionsError};
pub use service::{LoadState, RouteManager};
pub use snapshot::RouteSnapshot;
