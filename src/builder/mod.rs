mod builder;
mod merge;

pub use builder::{DefinitionBuilder, MergeStrategy};
pub use merge::PARALLEL_ROUTES;

pub(crate) use builder::compare_definitions;
