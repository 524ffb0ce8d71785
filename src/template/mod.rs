mod error;
mod lexer;
mod syntax;

pub use error::{TemplateError, TemplateResult};
pub(crate) use lexer::{ParsedTemplate, parse_template};
pub use syntax::{Syntax, SyntaxError};
