use crate::template::TemplateError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TreeError {
    #[error("element '{element}' of template '{template}' collides with a variable level")]
    VariableConflict { template: String, element: String },
    #[error("duplicate template '{template}'")]
    DuplicateTemplate { template: String },
    #[error(transparent)]
    Template(#[from] TemplateError),
}

pub type TreeResult<T> = Result<T, TreeError>;
