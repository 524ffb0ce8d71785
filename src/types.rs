/// Templates matched against a query path, in traversal order.
pub type Matches<'r> = Vec<&'r str>;

/// Variable bindings parsed from a query path. Keys borrow from the
/// registered templates, values from the path.
pub type Vars<'r, 'p> = hashbrown::HashMap<&'r str, &'p str>;
