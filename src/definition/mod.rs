mod filter;
pub mod page;
mod record;

pub use filter::DefinitionFilterSpec;
pub(crate) use filter::find_first;
pub use record::{DefinitionDetails, DefinitionInput, RouteDefinition};
