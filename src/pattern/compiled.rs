use regex::Regex;
use smallvec::SmallVec;

use super::lexer::{PatternSegment, parse_pathname};
use super::{PatternError, PatternResult};
use crate::matcher::captures_to_params;
use crate::types::RouteParams;

const SINGLE_SEGMENT: &str = "[^/]+";
const TRAILING_SEGMENTS: &str = "[^/]+(?:/[^/]+)*";

#[derive(Debug, Clone)]
pub enum CompiledPattern {
    Static(Box<str>),
    Dynamic(DynamicPattern),
}

impl CompiledPattern {
    pub fn source(&self) -> &str {
        match self {
            Self::Static(pathname) => pathname,
            Self::Dynamic(dynamic) => &dynamic.source,
        }
    }

    pub fn is_dynamic(&self) -> bool {
        matches!(self, Self::Dynamic(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ParamSlot {
    pub name: String,
    pub repeat: bool,
}

#[derive(Debug, Clone)]
pub struct DynamicPattern {
    source: Box<str>,
    regex: Regex,
    slots: SmallVec<[ParamSlot; 4]>,
}

impl DynamicPattern {
    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.slots.iter().map(|slot| slot.name.as_str())
    }

    #[tracing::instrument(level = "trace", skip(self), fields(pattern=%self.source))]
    pub fn captures(&self, path: &str) -> Option<RouteParams> {
        let captures = self.regex.captures(path)?;
        Some(captures_to_params(&captures, &self.slots))
    }
}

/// Compiles a normalized pathname (`/blog/[slug]`, `/docs/[[...path]]`) into
/// a matcher. Fully static pathnames skip the regex entirely.
pub fn compile_pathname(pathname: &str) -> PatternResult<CompiledPattern> {
    let parsed = parse_pathname(pathname)?;
    if parsed.is_static() {
        return Ok(CompiledPattern::Static(pathname.into()));
    }

    let mut expr = String::with_capacity(pathname.len() * 2 + 2);
    let mut slots: SmallVec<[ParamSlot; 4]> = SmallVec::new();
    expr.push('^');

    let only_segment = parsed.segments.len() == 1;
    for segment in parsed.segments.iter() {
        match segment {
            PatternSegment::Static(literal) => {
                expr.push('/');
                expr.push_str(&regex::escape(literal));
            }
            PatternSegment::Dynamic(name) => {
                expr.push_str(&format!("/({SINGLE_SEGMENT})"));
                slots.push(ParamSlot {
                    name: name.clone(),
                    repeat: false,
                });
            }
            PatternSegment::CatchAll(name) => {
                expr.push_str(&format!("/({TRAILING_SEGMENTS})"));
                slots.push(ParamSlot {
                    name: name.clone(),
                    repeat: true,
                });
            }
            PatternSegment::OptionalCatchAll(name) => {
                // at the root the bare "/" must still match
                if only_segment {
                    expr.push_str(&format!("/(?:({TRAILING_SEGMENTS}))?"));
                } else {
                    expr.push_str(&format!("(?:/({TRAILING_SEGMENTS}))?"));
                }
                slots.push(ParamSlot {
                    name: name.clone(),
                    repeat: true,
                });
            }
        }
    }
    expr.push('$');

    let regex = Regex::new(&expr).map_err(|err| PatternError::RegexCompile {
        pattern: pathname.to_string(),
        reason: err.to_string(),
    })?;

    Ok(CompiledPattern::Dynamic(DynamicPattern {
        source: pathname.into(),
        regex,
        slots,
    }))
}
