use crate::scene::NodeHandle;

/// A pose-following attachment point for one target index.
///
/// The anchor's group node is created hidden; pose sync makes it visible
/// once the engine reports the target as tracked, and everything attached
/// under it follows.
#[derive(Debug, Clone)]
pub struct Anchor {
    /// Target index this anchor follows.
    pub index: usize,
    /// Group node whose transform receives the tracking pose.
    pub group: NodeHandle,
    /// Model root attached under the group, once bound.
    pub(crate) model: Option<NodeHandle>,
}

impl Anchor {
    /// The model bound to this anchor, if any.
    #[must_use]
    pub fn model(&self) -> Option<NodeHandle> {
        self.model
    }
}
