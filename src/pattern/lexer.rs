use smallvec::SmallVec;

use super::{PatternError, PatternResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternSegment {
    Static(String),
    Dynamic(String),
    CatchAll(String),
    OptionalCatchAll(String),
}

impl PatternSegment {
    pub fn param_name(&self) -> Option<&str> {
        match self {
            Self::Static(_) => None,
            Self::Dynamic(name) | Self::CatchAll(name) | Self::OptionalCatchAll(name) => {
                Some(name.as_str())
            }
        }
    }

    pub fn is_catch_all(&self) -> bool {
        matches!(self, Self::CatchAll(_) | Self::OptionalCatchAll(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedPattern {
    pub segments: SmallVec<[PatternSegment; 8]>,
}

impl ParsedPattern {
    pub fn is_static(&self) -> bool {
        self.segments
            .iter()
            .all(|segment| matches!(segment, PatternSegment::Static(_)))
    }
}

#[tracing::instrument(level = "trace", fields(pattern=%pathname))]
pub fn parse_pathname(pathname: &str) -> PatternResult<ParsedPattern> {
    let Some(rest) = pathname.strip_prefix('/') else {
        return Err(PatternError::MissingLeadingSlash {
            pattern: pathname.to_string(),
        });
    };

    let mut segments: SmallVec<[PatternSegment; 8]> = SmallVec::new();
    if rest.is_empty() {
        return Ok(ParsedPattern { segments });
    }

    for (segment_index, raw) in rest.split('/').enumerate() {
        if raw.is_empty() {
            return Err(PatternError::EmptySegment {
                pattern: pathname.to_string(),
                segment_index,
            });
        }
        segments.push(parse_segment(raw)?);
    }

    let total_segments = segments.len();
    for (segment_index, segment) in segments.iter().enumerate() {
        if segment.is_catch_all() && segment_index + 1 != total_segments {
            return Err(PatternError::CatchAllMustBeTerminal {
                segment_index,
                total_segments,
            });
        }
    }

    {
        let mut seen: SmallVec<[&str; 4]> = SmallVec::new();
        for name in segments.iter().filter_map(PatternSegment::param_name) {
            if seen.contains(&name) {
                return Err(PatternError::DuplicateParamName {
                    param: name.to_string(),
                    pattern: pathname.to_string(),
                });
            }
            seen.push(name);
        }
    }

    Ok(ParsedPattern { segments })
}

fn parse_segment(seg: &str) -> PatternResult<PatternSegment> {
    if !seg.starts_with('[') {
        if seg.contains('[') || seg.contains(']') {
            return Err(PatternError::MixedParameterLiteralSyntax {
                segment: seg.to_string(),
            });
        }
        return Ok(PatternSegment::Static(seg.to_string()));
    }

    if let Some(inner) = seg.strip_prefix("[[") {
        let inner = inner
            .strip_suffix("]]")
            .ok_or_else(|| PatternError::UnterminatedBracket {
                segment: seg.to_string(),
            })?;
        let Some(name) = inner.strip_prefix("...") else {
            return Err(PatternError::OptionalWithoutCatchAll {
                segment: seg.to_string(),
            });
        };
        return Ok(PatternSegment::OptionalCatchAll(validate_name(seg, name)?));
    }

    let inner = seg[1..]
        .strip_suffix(']')
        .ok_or_else(|| PatternError::UnterminatedBracket {
            segment: seg.to_string(),
        })?;

    match inner.strip_prefix("...") {
        Some(name) => Ok(PatternSegment::CatchAll(validate_name(seg, name)?)),
        None => Ok(PatternSegment::Dynamic(validate_name(seg, inner)?)),
    }
}

fn validate_name(segment: &str, name: &str) -> PatternResult<String> {
    if name.is_empty() {
        return Err(PatternError::ParameterNameEmpty {
            segment: segment.to_string(),
        });
    }

    if let Some(invalid) = name.chars().find(|c| matches!(c, '[' | ']' | '/' | '.')) {
        return Err(PatternError::ParameterInvalidCharacter {
            segment: segment.to_string(),
            name: name.to_string(),
            invalid,
        });
    }

    Ok(name.to_string())
}
