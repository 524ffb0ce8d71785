use thiserror::Error;

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("empty template")]
    Empty,
    #[error("template '{template}' must be rooted at the separator")]
    Invalid { template: String },
    #[error("template '{template}' has a prefix marker at byte {position}; it is allowed only as the final byte")]
    MisplacedPrefix { template: String, position: usize },
    #[error("variable element '{element}' is missing a name")]
    EmptyVariableName { element: String },
    #[error("variable name '{name}' in element '{element}' contains the variable marker")]
    InvalidVariableName { element: String, name: String },
    #[error("variable element '{element}' contains wildcard characters")]
    WildcardInVariable { element: String },
}

pub type TemplateResult<T> = Result<T, TemplateError>;
