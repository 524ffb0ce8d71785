use memchr::memchr;

use crate::template::Syntax;
use crate::tree::Node;
use crate::types::{Matches, Vars};
use crate::wildcard::wildcard_match;

/// Matches `path` against the tree under `root`, appending matched templates
/// and variable bindings into the caller's containers. Returns whether the
/// match list is non-empty afterwards.
#[tracing::instrument(level = "trace", skip(root, syntax, matches, vars), fields(path = %path))]
pub(crate) fn resolve<'r, 'p>(
    root: &'r Node,
    syntax: &Syntax,
    path: &'p str,
    matches: &mut Matches<'r>,
    vars: &mut Vars<'r, 'p>,
) -> bool {
    if path.is_empty() {
        return false;
    }
    let mut resolver = Resolver {
        syntax: *syntax,
        path,
        matches,
        vars,
        has_override: false,
    };
    resolver.next_level(root, 0);
    !resolver.matches.is_empty()
}

struct Resolver<'r, 'p, 'o> {
    syntax: Syntax,
    path: &'p str,
    matches: &'o mut Matches<'r>,
    vars: &'o mut Vars<'r, 'p>,
    has_override: bool,
}

impl<'r, 'p> Resolver<'r, 'p, '_> {
    /// Advances matching to the next path level: one `match_level` call per
    /// separator past `marker`, plus a final call at end of path.
    fn next_level(&mut self, node: &'r Node, mut marker: usize) {
        let bytes = self.path.as_bytes();
        let mut cursor = marker + 1;
        while cursor < bytes.len() {
            let Some(rel) = memchr(self.syntax.separator, &bytes[cursor..]) else {
                break;
            };
            cursor += rel;
            if self.match_level(node, cursor, marker) {
                return;
            }
            marker = cursor;
            cursor += 1;
        }
        self.match_level(node, bytes.len(), marker);
    }

    /// Matches the element `path[marker..cursor]` against the children of
    /// `node`. Returns true when this level is exhausted and the outer scan
    /// must stop.
    fn match_level(&mut self, node: &'r Node, cursor: usize, marker: usize) -> bool {
        let length = self.path.len();
        if marker > length {
            return true;
        }
        let name = &self.path[marker..cursor.min(length)];
        if name.is_empty() {
            // Consecutive separators produce empty element names; the outer
            // scan advances past them.
            return false;
        }

        // A variable level consumes the whole element as the binding value.
        if let Some(key) = node.variable_key() {
            let Some(child) = node.child(key) else {
                return true;
            };
            self.vars
                .insert(&key[2..], &self.path[marker + 1..cursor.min(length)]);
            let stop = if child.is_prefix() {
                self.add_match(child)
            } else {
                self.maybe_add_match(child, cursor)
            };
            if stop {
                return true;
            }
            self.next_level(child, cursor);
            return true;
        }

        // Scan siblings only when the level holds wildcard or prefix
        // children.
        if node.has_child_wildcards() || node.has_child_prefixes() {
            for (sub_name, sub) in node.children() {
                if sub.is_wildcard()
                    && wildcard_match(
                        &name.as_bytes()[1..],
                        &sub_name.as_bytes()[1..],
                        self.syntax.wildcard_one,
                        self.syntax.wildcard_many,
                    )
                {
                    self.maybe_add_match(sub, cursor);
                    self.next_level(sub, cursor);
                }
                if sub.is_prefix() && name.as_bytes().starts_with(sub_name.as_bytes()) {
                    self.add_match(sub);
                    self.next_level(sub, cursor);
                }
            }
        }

        if let Some(child) = node.child(name) {
            if self.maybe_add_match(child, cursor) {
                return true;
            }
            self.next_level(child, cursor);
            return true;
        }
        true
    }

    /// Records `node` iff it is a non-prefix terminal and the whole path has
    /// been consumed.
    fn maybe_add_match(&mut self, node: &'r Node, cursor: usize) -> bool {
        if node.is_prefix() {
            return false;
        }
        if node.template().is_none() {
            return false;
        }
        if cursor < self.path.len() {
            return false;
        }
        self.add_match(node)
    }

    /// Records the terminal at `node`. The first override clears prior
    /// matches; later overrides overwrite it; non-override terminals are
    /// dropped once any override has been seen.
    fn add_match(&mut self, node: &'r Node) -> bool {
        let Some(template) = node.template() else {
            return false;
        };
        if node.is_override() {
            self.has_override = true;
            if self.matches.is_empty() {
                self.matches.push(template);
            } else {
                self.matches[0] = template;
                self.matches.truncate(1);
            }
            return false;
        }
        if self.has_override {
            return false;
        }
        self.matches.push(template);
        !node.is_prefix()
    }
}
