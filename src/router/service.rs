use crate::matcher::resolve;
use crate::template::{Syntax, SyntaxError};
use crate::tree::{self, Node, TreeResult};
use crate::types::{Matches, Vars};

/// A path matching router with support for path element variables,
/// wildcards, prefix templates and override templates.
///
/// `register` decomposes a template on its separators and extends a shared
/// tree of path elements; `find` walks the tree against a query path and
/// collects every matching template. Registration mutates the tree through
/// `&mut self`; matching reads it through `&self`. Callers that need
/// concurrent access serialize externally.
#[derive(Debug, Default)]
pub struct Router {
    root: Node,
    syntax: Syntax,
    node_count: usize,
}

impl Router {
    /// Builds a router with the default metacharacters `! / : + ? *`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a router with caller-chosen metacharacters. The syntax is
    /// validated again here: its fields are open, so the value may not have
    /// come through [`Syntax::new`].
    pub fn with_syntax(syntax: Syntax) -> Result<Self, SyntaxError> {
        syntax.validate()?;
        Ok(Self {
            root: Node::default(),
            syntax,
            node_count: 0,
        })
    }

    /// Registers a template. On error the tree is unchanged and nothing was
    /// registered.
    pub fn register(&mut self, template: &str) -> TreeResult<()> {
        tree::insert(&mut self.root, &mut self.node_count, &self.syntax, template)
    }

    /// Matches a path against the registered templates. Returns the matched
    /// templates, the variable bindings parsed from the path, and whether
    /// anything matched at all.
    pub fn find<'p>(&self, path: &'p str) -> (Matches<'_>, Vars<'_, 'p>, bool) {
        let mut matches = Matches::new();
        let mut vars = Vars::default();
        let matched = resolve(&self.root, &self.syntax, path, &mut matches, &mut vars);
        (matches, vars, matched)
    }

    /// Same as [`find`](Self::find), writing into caller-owned containers to
    /// avoid per-call allocation. The containers are not cleared first.
    pub fn find_into<'r, 'p>(
        &'r self,
        path: &'p str,
        matches: &mut Matches<'r>,
        vars: &mut Vars<'r, 'p>,
    ) -> bool {
        resolve(&self.root, &self.syntax, path, matches, vars)
    }

    /// Every registered template, in unspecified order.
    pub fn defined_templates(&self) -> Vec<&str> {
        let mut templates = Vec::with_capacity(self.node_count);
        tree::traverse(&self.root, |node| {
            if let Some(template) = node.template() {
                templates.push(template);
            }
        });
        templates
    }

    /// The number of tree nodes created by registration: one per distinct
    /// element position, not one per template.
    pub fn num_templates(&self) -> usize {
        self.node_count
    }
}
