mod definition_provider;
mod manifest;
mod manifest_provider;
pub mod predicates;
mod static_provider;

pub use definition_provider::DefinitionProvider;
pub use manifest::{
    APP_PATHS_MANIFEST, FilenameNormalizer, IdentityNormalizer, ManifestLoader, PAGES_MANIFEST,
    PrefixNormalizer, StaticManifestLoader,
};
pub use manifest_provider::ManifestDefinitionProvider;
pub use static_provider::StaticDefinitionProvider;
