pub mod builder;
pub mod definition;
pub mod enums;
pub mod errors;
pub mod manager;
pub mod matcher;
pub mod path;
pub mod pattern;
pub mod provider;
pub mod types;

pub use builder::{DefinitionBuilder, MergeStrategy, PARALLEL_ROUTES};
pub use definition::{DefinitionDetails, DefinitionFilterSpec, DefinitionInput, RouteDefinition};
pub use enums::{PagesType, RouteKind};
pub use errors::{LoadError, RouteError, RouteResult};
pub use manager::{
    ComponentsLoader, FixedRouteOptions, LoadState, ManagerOptions, ManagerOptionsBuilder,
    MatchAll, RouteManager, RouteSnapshot,
};
pub use matcher::{RouteMatch, RouteMatcher};
pub use provider::{
    DefinitionProvider, FilenameNormalizer, IdentityNormalizer, ManifestDefinitionProvider,
    ManifestLoader, PrefixNormalizer, StaticDefinitionProvider, StaticManifestLoader,
};
pub use types::{Manifest, ParamValue, RouteParams};
