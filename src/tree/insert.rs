use super::error::{TreeError, TreeResult};
use super::node::{Node, NodeFlags};
use crate::template::{ParsedTemplate, Syntax, parse_template};

/// Registers a template under `root`. Parsing and conflict detection run
/// before the first mutation, so a failed registration leaves the tree
/// exactly as it was.
pub(crate) fn insert(
    root: &mut Node,
    node_count: &mut usize,
    syntax: &Syntax,
    template: &str,
) -> TreeResult<()> {
    tracing::event!(tracing::Level::TRACE, operation = "insert", template = %template);
    let parsed = parse_template(template, syntax)?;
    check_conflicts(root, &parsed)?;
    commit(root, node_count, &parsed);
    Ok(())
}

fn check_conflicts(root: &Node, parsed: &ParsedTemplate<'_>) -> TreeResult<()> {
    let mut node = root;
    for element in &parsed.elements {
        match node.child(element.name) {
            Some(child) => node = child,
            None => {
                // A populated variable level admits no new siblings, and a
                // variable admits no populated level.
                if node.variable_key().is_some()
                    || (element.is_variable && node.child_count() > 0)
                {
                    return Err(TreeError::VariableConflict {
                        template: parsed.raw.to_string(),
                        element: element.name.to_string(),
                    });
                }
                // Everything below this point is freshly created and cannot
                // conflict with existing levels.
                return Ok(());
            }
        }
    }
    if node.template().is_some() {
        return Err(TreeError::DuplicateTemplate {
            template: parsed.raw.to_string(),
        });
    }
    Ok(())
}

fn commit(root: &mut Node, node_count: &mut usize, parsed: &ParsedTemplate<'_>) {
    let last = parsed.elements.len() - 1;
    let mut node = root;
    for (i, element) in parsed.elements.iter().enumerate() {
        if element.is_wildcard {
            node.set_flags(NodeFlags::CHILD_WILDCARDS);
        }
        if parsed.is_prefix && i == last {
            node.set_flags(NodeFlags::CHILD_PREFIXES);
        }
        if element.is_variable {
            node.set_variable_key(element.name);
        }
        node = match node.position(element.name) {
            Some(position) => node.child_at_mut(position),
            None => {
                *node_count += 1;
                let flags = if element.is_wildcard {
                    NodeFlags::WILDCARD
                } else {
                    NodeFlags::empty()
                };
                node.insert_child(element.name, Node::with_flags(flags))
            }
        };
    }
    node.set_template(parsed.raw);
    if parsed.is_prefix {
        node.set_flags(NodeFlags::PREFIX);
    }
    if parsed.is_override {
        node.set_flags(NodeFlags::OVERRIDE);
    }
}
