//! Parse-tree hooks that run between parsing and HTML generation.

use comrak::nodes::AstNode;

/// Priority the built-in [`NoopTransform`] is registered with.
pub const DEFAULT_PRIORITY: i32 = 100;

/// A hook that may inspect or rewrite the parse tree before it is rendered.
///
/// Implementations get the document root and can walk it with
/// `root.descendants()`, mutating node values through `data.borrow_mut()`.
pub trait AstTransform: Send + Sync {
    /// Short name used in logs and diagnostics.
    fn name(&self) -> &str;

    fn transform<'a>(&self, root: &'a AstNode<'a>);
}

/// Leaves the tree untouched. Registered on every renderer as the slot
/// where heading rewrites or link resolution can be plugged in later.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopTransform;

impl AstTransform for NoopTransform {
    fn name(&self) -> &str {
        "noop"
    }

    fn transform<'a>(&self, _root: &'a AstNode<'a>) {}
}

/// A transform together with the priority it was registered at.
pub(crate) struct Prioritized {
    pub priority: i32,
    pub transform: Box<dyn AstTransform>,
}

/// Insert `item` so the list stays ordered by descending priority.
/// Transforms with equal priority keep registration order.
pub(crate) fn insert_prioritized(list: &mut Vec<Prioritized>, item: Prioritized) {
    let at = list
        .iter()
        .position(|p| p.priority < item.priority)
        .unwrap_or(list.len());
    list.insert(at, item);
}
