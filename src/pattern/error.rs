use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("pattern '{pattern}' must start with '/'")]
    MissingLeadingSlash { pattern: String },
    #[error("pattern '{pattern}' contains an empty segment at index {segment_index}")]
    EmptySegment { pattern: String, segment_index: usize },
    #[error("segment '{segment}' has an unterminated parameter bracket")]
    UnterminatedBracket { segment: String },
    #[error("parameter name in segment '{segment}' is empty")]
    ParameterNameEmpty { segment: String },
    #[error("parameter name '{name}' in segment '{segment}' contains invalid character '{invalid}'")]
    ParameterInvalidCharacter {
        segment: String,
        name: String,
        invalid: char,
    },
    #[error("segment '{segment}' mixes parameter and literal syntax")]
    MixedParameterLiteralSyntax { segment: String },
    #[error("optional segment '{segment}' must be a catch-all ('[[...name]]')")]
    OptionalWithoutCatchAll { segment: String },
    #[error("catch-all segment must be terminal: index {segment_index} of {total_segments}")]
    CatchAllMustBeTerminal {
        segment_index: usize,
        total_segments: usize,
    },
    #[error("duplicate parameter name '{param}' in pattern '{pattern}'")]
    DuplicateParamName { param: String, pattern: String },
    #[error("pattern '{pattern}' failed to compile: {reason}")]
    RegexCompile { pattern: String, reason: String },
}

pub type PatternResult<T> = Result<T, PatternError>;
