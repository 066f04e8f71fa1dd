use hashbrown::HashMap as FastHashMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Page path to raw build artifact path, as emitted by the build.
pub type Manifest = BTreeMap<String, String>;

pub type RouteParams = FastHashMap<String, ParamValue>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Single(String),
    Multiple(Vec<String>),
}

impl ParamValue {
    pub fn as_single(&self) -> Option<&str> {
        match self {
            Self::Single(value) => Some(value.as_str()),
            Self::Multiple(_) => None,
        }
    }

    pub fn as_multiple(&self) -> Option<&[String]> {
        match self {
            Self::Single(_) => None,
            Self::Multiple(values) => Some(values.as_slice()),
        }
    }
}
