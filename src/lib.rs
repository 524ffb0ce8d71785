pub mod matcher;
pub mod router;
pub mod template;
pub mod tree;
pub mod types;
pub mod wildcard;

pub use router::Router;
pub use template::{Syntax, SyntaxError, TemplateError};
pub use tree::{TreeError, TreeResult};
pub use types::{Matches, Vars};
pub use wildcard::wildcard_match;
