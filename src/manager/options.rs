use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::cache::DEFAULT_CACHE_CAPACITY;
use crate::path::NormalizationOptions;

const CACHE_CAPACITY_MAX: usize = 1 << 16;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManagerOptions {
    pub normalize_path: bool,
    pub allow_duplicate_slash: bool,
    pub strict_trailing_slash: bool,
    pub decode_percent: bool,
    pub cache_capacity: Option<usize>,
    pub debug: bool,
}

impl Default for ManagerOptions {
    fn default() -> Self {
        Self {
            normalize_path: true,
            allow_duplicate_slash: false,
            strict_trailing_slash: false,
            decode_percent: false,
            cache_capacity: None,
            debug: false,
        }
    }
}

impl ManagerOptions {
    pub fn builder() -> ManagerOptionsBuilder {
        ManagerOptionsBuilder::default()
    }

    pub fn validate(&self) -> Result<(), ManagerOptionsError> {
        if let Some(capacity) = self.cache_capacity
            && !(1..=CACHE_CAPACITY_MAX).contains(&capacity)
        {
            return Err(ManagerOptionsError::CacheCapacityOutOfRange {
                value: capacity,
                min: 1,
                max: CACHE_CAPACITY_MAX,
            });
        }
        if self.allow_duplicate_slash && !self.normalize_path {
            return Err(ManagerOptionsError::DuplicateSlashWithoutNormalization);
        }
        Ok(())
    }

    pub fn normalization(&self) -> NormalizationOptions {
        NormalizationOptions {
            decode_percent: self.decode_percent,
            normalize_path: self.normalize_path,
            allow_duplicate_slash: self.allow_duplicate_slash,
            strict_trailing_slash: self.strict_trailing_slash,
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct ManagerOptionsBuilder {
    options: ManagerOptions,
}

impl ManagerOptionsBuilder {
    pub fn normalize_path(mut self, value: bool) -> Self {
        self.options.normalize_path = value;
        self
    }

    pub fn allow_duplicate_slash(mut self, value: bool) -> Self {
        self.options.allow_duplicate_slash = value;
        self
    }

    pub fn strict_trailing_slash(mut self, value: bool) -> Self {
        self.options.strict_trailing_slash = value;
        self
    }

    pub fn decode_percent(mut self, value: bool) -> Self {
        self.options.decode_percent = value;
        self
    }

    pub fn cache_capacity(mut self, value: usize) -> Self {
        self.options.cache_capacity = Some(value);
        self
    }

    pub fn default_cache(mut self) -> Self {
        self.options.cache_capacity = Some(DEFAULT_CACHE_CAPACITY);
        self
    }

    pub fn debug(mut self, value: bool) -> Self {
        self.options.debug = value;
        self
    }

    pub fn build(self) -> Result<ManagerOptions, ManagerOptionsError> {
        let options = self.options;
        options.validate()?;
        Ok(options)
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ManagerOptionsError {
    #[error("cache capacity {value} is outside the supported range {min}..={max}")]
    CacheCapacityOutOfRange { value: usize, min: usize, max: usize },
    #[error("allow_duplicate_slash only applies when normalize_path is enabled")]
    DuplicateSlashWithoutNormalization,
}
