mod compiled;
mod error;
mod lexer;

pub use compiled::{CompiledPattern, DynamicPattern, compile_pathname};
pub use error::{PatternError, PatternResult};
pub use lexer::{ParsedPattern, PatternSegment, parse_pathname};

pub(crate) use compiled::ParamSlot;
