use memchr::{memchr, memchr2};
use smallvec::SmallVec;

use super::error::{TemplateError, TemplateResult};
use super::syntax::Syntax;

/// One path element of a template, leading separator attached, trailing
/// prefix marker already stripped.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Element<'t> {
    pub name: &'t str,
    pub is_variable: bool,
    pub is_wildcard: bool,
}

#[derive(Debug)]
pub(crate) struct ParsedTemplate<'t> {
    pub raw: &'t str,
    pub is_override: bool,
    pub is_prefix: bool,
    pub elements: SmallVec<[Element<'t>; 8]>,
}

/// Splits a template into elements and performs every syntactic check, so
/// that nothing past this point can fail for syntactic reasons.
#[tracing::instrument(level = "trace", skip(syntax), fields(template = %raw))]
pub(crate) fn parse_template<'t>(raw: &'t str, syntax: &Syntax) -> TemplateResult<ParsedTemplate<'t>> {
    let bytes = raw.as_bytes();
    if bytes.is_empty() {
        return Err(TemplateError::Empty);
    }
    if let Some(position) = memchr(syntax.prefix, bytes)
        && position != bytes.len() - 1
    {
        return Err(TemplateError::MisplacedPrefix {
            template: raw.to_string(),
            position,
        });
    }

    let is_override = bytes[0] == syntax.override_marker;
    let start = usize::from(is_override);
    if start >= bytes.len() || bytes[start] != syntax.separator {
        return Err(TemplateError::Invalid {
            template: raw.to_string(),
        });
    }

    let mut body = &raw[start..];
    let is_prefix = body.as_bytes()[body.len() - 1] == syntax.prefix;
    if is_prefix {
        body = &body[..body.len() - 1];
    }

    let mut elements = SmallVec::new();
    let body_bytes = body.as_bytes();
    let mut marker = 0;
    let mut cursor = 1;
    while cursor < body_bytes.len() {
        let Some(rel) = memchr(syntax.separator, &body_bytes[cursor..]) else {
            break;
        };
        cursor += rel;
        elements.push(analyze_element(&body[marker..cursor], syntax)?);
        marker = cursor;
        cursor += 1;
    }
    elements.push(analyze_element(&body[marker..], syntax)?);

    Ok(ParsedTemplate {
        raw,
        is_override,
        is_prefix,
        elements,
    })
}

fn analyze_element<'t>(name: &'t str, syntax: &Syntax) -> TemplateResult<Element<'t>> {
    let bytes = name.as_bytes();
    let is_wildcard = memchr2(syntax.wildcard_one, syntax.wildcard_many, bytes).is_some();
    let is_variable = bytes.len() > 1 && bytes[1] == syntax.variable;
    if is_variable {
        // Element layout is SEP VAR <name>; the name must be non-empty and
        // free of further variable markers and wildcards.
        let variable_name = &name[2..];
        if variable_name.is_empty() {
            return Err(TemplateError::EmptyVariableName {
                element: name.to_string(),
            });
        }
        if memchr(syntax.variable, variable_name.as_bytes()).is_some() {
            return Err(TemplateError::InvalidVariableName {
                element: name.to_string(),
                name: variable_name.to_string(),
            });
        }
        if is_wildcard {
            return Err(TemplateError::WildcardInVariable {
                element: name.to_string(),
            });
        }
    }
    Ok(Element {
        name,
        is_variable,
        is_wildcard,
    })
}
