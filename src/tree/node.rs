use bitflags::bitflags;
use hashbrown::HashMap as FastHashMap;
use smallvec::SmallVec;

// Children stay in the parallel small-vectors until a level grows past this,
// then a name -> position index is kept alongside. Iteration always follows
// insertion order.
const CHILD_INDEX_THRESHOLD: usize = 16;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub(crate) struct NodeFlags: u8 {
        // terminal was registered with a trailing prefix marker
        const PREFIX = 0b00001;
        // terminal was registered with a leading override marker
        const OVERRIDE = 0b00010;
        // element name contains wildcard characters
        const WILDCARD = 0b00100;
        // at least one direct child is a prefix terminal
        const CHILD_PREFIXES = 0b01000;
        // at least one direct child is wildcard-flagged
        const CHILD_WILDCARDS = 0b10000;
    }
}

/// One path element at its position in the tree.
#[derive(Debug, Default)]
pub(crate) struct Node {
    child_keys: SmallVec<[Box<str>; 4]>,
    child_nodes: SmallVec<[Box<Node>; 4]>,
    child_index: Option<FastHashMap<Box<str>, usize>>,
    // full template string when a registered template terminates here
    template: Option<Box<str>>,
    // element name of the single variable child, when this level holds one
    variable_key: Option<Box<str>>,
    flags: NodeFlags,
}

impl Node {
    pub(crate) fn with_flags(flags: NodeFlags) -> Self {
        Self {
            flags,
            ..Self::default()
        }
    }

    #[inline(always)]
    pub(crate) fn is_prefix(&self) -> bool {
        self.flags.contains(NodeFlags::PREFIX)
    }

    #[inline(always)]
    pub(crate) fn is_override(&self) -> bool {
        self.flags.contains(NodeFlags::OVERRIDE)
    }

    #[inline(always)]
    pub(crate) fn is_wildcard(&self) -> bool {
        self.flags.contains(NodeFlags::WILDCARD)
    }

    #[inline(always)]
    pub(crate) fn has_child_prefixes(&self) -> bool {
        self.flags.contains(NodeFlags::CHILD_PREFIXES)
    }

    #[inline(always)]
    pub(crate) fn has_child_wildcards(&self) -> bool {
        self.flags.contains(NodeFlags::CHILD_WILDCARDS)
    }

    #[inline(always)]
    pub(crate) fn set_flags(&mut self, flags: NodeFlags) {
        self.flags |= flags;
    }

    #[inline(always)]
    pub(crate) fn template(&self) -> Option<&str> {
        self.template.as_deref()
    }

    pub(crate) fn set_template(&mut self, template: &str) {
        self.template = Some(Box::from(template));
    }

    #[inline(always)]
    pub(crate) fn variable_key(&self) -> Option<&str> {
        self.variable_key.as_deref()
    }

    pub(crate) fn set_variable_key(&mut self, name: &str) {
        if self.variable_key.is_none() {
            self.variable_key = Some(Box::from(name));
        }
    }

    #[inline(always)]
    pub(crate) fn child_count(&self) -> usize {
        self.child_keys.len()
    }

    pub(crate) fn position(&self, name: &str) -> Option<usize> {
        if let Some(index) = &self.child_index {
            return index.get(name).copied();
        }
        self.child_keys.iter().position(|key| key.as_ref() == name)
    }

    #[inline(always)]
    pub(crate) fn child(&self, name: &str) -> Option<&Node> {
        self.position(name).map(|i| self.child_nodes[i].as_ref())
    }

    #[inline(always)]
    pub(crate) fn child_at_mut(&mut self, position: usize) -> &mut Node {
        self.child_nodes[position].as_mut()
    }

    /// Appends a child under `name`. The caller guarantees the name is not
    /// already present.
    pub(crate) fn insert_child(&mut self, name: &str, node: Node) -> &mut Node {
        let position = self.child_nodes.len();
        self.child_keys.push(Box::from(name));
        self.child_nodes.push(Box::new(node));
        if let Some(index) = &mut self.child_index {
            index.insert(Box::from(name), position);
        } else if self.child_keys.len() > CHILD_INDEX_THRESHOLD {
            self.child_index = Some(
                self.child_keys
                    .iter()
                    .enumerate()
                    .map(|(i, key)| (key.clone(), i))
                    .collect(),
            );
        }
        self.child_nodes[position].as_mut()
    }

    pub(crate) fn children(&self) -> impl Iterator<Item = (&str, &Node)> {
        self.child_keys
            .iter()
            .map(|key| key.as_ref())
            .zip(self.child_nodes.iter().map(|node| node.as_ref()))
    }
}
