use super::node::Node;

const TRAVERSAL_STACK_CAPACITY: usize = 256;

/// Depth-first traversal over the tree. Uses an explicit stack to avoid
/// recursion on deep trees.
pub(crate) fn traverse<'r, F>(root: &'r Node, mut action: F)
where
    F: FnMut(&'r Node),
{
    let mut stack: Vec<&'r Node> = Vec::with_capacity(TRAVERSAL_STACK_CAPACITY);
    stack.push(root);

    while let Some(node) = stack.pop() {
        action(node);

        for (_, child) in node.children() {
            stack.push(child);
        }
    }
}
