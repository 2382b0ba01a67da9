use std::fmt;

use crate::item::{DatasetItem, ItemId};
use crate::kind::DatasetKind;

/// Filter key every dataset starts with; it imposes no restriction.
pub const DEFAULT_FILTER: &str = "all";

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ViewMode {
    #[default]
    Map,
    Globe,
}

impl ViewMode {
    pub fn key(self) -> &'static str {
        match self {
            ViewMode::Map => "map",
            ViewMode::Globe => "globe",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ViewMode::Map => ViewMode::Globe,
            ViewMode::Globe => ViewMode::Map,
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Mutable state of one dataset type for the lifetime of the process.
///
/// `filtered` holds ids into `items` in their original relative order; it is
/// only ever replaced wholesale by the filter pipeline.
#[derive(Debug, Clone)]
pub struct SessionState {
    kind: DatasetKind,
    items: Vec<DatasetItem>,
    filtered: Vec<ItemId>,
    active_filter: String,
    search_term: String,
    view_mode: ViewMode,
    selected: Option<ItemId>,
    loads: u64,
}

impl SessionState {
    pub fn new(kind: DatasetKind) -> Self {
        Self {
            kind,
            items: Vec::new(),
            filtered: Vec::new(),
            active_filter: DEFAULT_FILTER.to_string(),
            search_term: String::new(),
            view_mode: ViewMode::Map,
            selected: None,
            loads: 0,
        }
    }

    pub fn kind(&self) -> DatasetKind {
        self.kind
    }

    pub fn items(&self) -> &[DatasetItem] {
        &self.items
    }

    pub fn item(&self, id: ItemId) -> Option<&DatasetItem> {
        self.items.get(id.index())
    }

    /// Replaces the raw items after a load completes.
    ///
    /// The previous filtered ids and selection refer to the old list, so both
    /// are cleared; the caller is expected to recompute right after.
    pub fn replace_items(&mut self, items: Vec<DatasetItem>) {
        self.items = items;
        self.filtered.clear();
        self.selected = None;
        self.loads += 1;
    }

    /// Number of completed loads, including ones that fell back to empty.
    pub fn loads(&self) -> u64 {
        self.loads
    }

    /// Ids of every item, in order. Ids are `u32`; items past `u32::MAX` have
    /// no id and are never filtered in.
    pub fn item_ids(&self) -> impl Iterator<Item = ItemId> + '_ {
        (0..=u32::MAX).map(ItemId).take(self.items.len())
    }

    pub fn filtered(&self) -> &[ItemId] {
        &self.filtered
    }

    pub fn set_filtered(&mut self, filtered: Vec<ItemId>) {
        if let Some(selected) = self.selected
            && !filtered.contains(&selected)
        {
            self.selected = None;
        }
        self.filtered = filtered;
    }

    pub fn filtered_items(&self) -> impl Iterator<Item = (ItemId, &DatasetItem)> + '_ {
        self.filtered
            .iter()
            .filter_map(|id| self.item(*id).map(|item| (*id, item)))
    }

    /// Item at `index` within the filtered list (the order the list view shows).
    pub fn filtered_at(&self, index: usize) -> Option<(ItemId, &DatasetItem)> {
        let id = *self.filtered.get(index)?;
        self.item(id).map(|item| (id, item))
    }

    pub fn active_filter(&self) -> &str {
        &self.active_filter
    }

    pub fn set_active_filter(&mut self, key: impl Into<String>) {
        self.active_filter = key.into();
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }

    pub fn selected(&self) -> Option<ItemId> {
        self.selected
    }

    pub fn select(&mut self, id: Option<ItemId>) {
        self.selected = id;
    }
}
