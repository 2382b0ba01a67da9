use scene::ItemId;

/// A collaborator's marker handle tagged with the item it represents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerHandle<H> {
    pub item: ItemId,
    pub inner: H,
}

/// Markers currently live on one view, in insertion order.
#[derive(Debug)]
pub struct MarkerSet<H> {
    handles: Vec<MarkerHandle<H>>,
}

impl<H> Default for MarkerSet<H> {
    fn default() -> Self {
        Self {
            handles: Vec::new(),
        }
    }
}

impl<H> MarkerSet<H> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    pub fn push(&mut self, item: ItemId, inner: H) {
        self.handles.push(MarkerHandle { item, inner });
    }

    /// Handle of the marker rendering `item`, if it is live.
    pub fn get(&self, item: ItemId) -> Option<&H> {
        self.handles
            .iter()
            .find(|h| h.item == item)
            .map(|h| &h.inner)
    }

    /// Hands every handle to `remove` and leaves the set empty.
    pub fn clear_with(&mut self, mut remove: impl FnMut(H)) -> usize {
        let removed = self.handles.len();
        for handle in self.handles.drain(..) {
            remove(handle.inner);
        }
        removed
    }
}
