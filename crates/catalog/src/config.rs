use chrono::{DateTime, Utc};
use scene::{DEFAULT_FILTER, DatasetItem, DatasetKind};

use crate::fragment::Fragment;
use crate::search::matches_search;
use crate::style::VisualStyle;

/// One quick-filter button.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FilterDef {
    pub key: &'static str,
    pub label: &'static str,
}

impl FilterDef {
    pub const fn new(key: &'static str, label: &'static str) -> Self {
        Self { key, label }
    }

    pub const fn all() -> Self {
        Self::new(DEFAULT_FILTER, "All")
    }
}

/// One summary statistics row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatRow {
    pub label: &'static str,
    pub value: usize,
}

/// Inputs a filter predicate may read besides the item itself.
///
/// Captured once per recompute so every item of a pass sees the same clock.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FilterContext {
    pub now: DateTime<Utc>,
}

impl FilterContext {
    pub fn at(now: DateTime<Utc>) -> Self {
        Self { now }
    }

    pub fn now() -> Self {
        Self::at(Utc::now())
    }
}

/// A first-match-wins classification rule table.
///
/// Each dataset kind classifies items into exactly one category; the last rule
/// of every table is a catch-all, so every item lands somewhere.
pub trait Category: Copy + Eq + 'static {
    /// Order in which statistics rows are reported.
    const STATS_ORDER: &'static [Self];

    fn style(self) -> VisualStyle;

    fn stat_label(self) -> &'static str;
}

/// Counts items per category, each item exactly once.
pub fn count_by_category<C: Category>(
    items: &[DatasetItem],
    classify: impl Fn(&DatasetItem) -> C,
) -> Vec<StatRow> {
    let mut counts = vec![0usize; C::STATS_ORDER.len()];
    for item in items {
        let category = classify(item);
        if let Some(slot) = C::STATS_ORDER.iter().position(|c| *c == category) {
            counts[slot] += 1;
        }
    }
    C::STATS_ORDER
        .iter()
        .zip(counts)
        .map(|(c, value)| StatRow {
            label: c.stat_label(),
            value,
        })
        .collect()
}

/// Declarative presentation rules of one dataset kind.
///
/// Implementations are stateless and side-effect free; all of them are pure
/// functions of the items they are given.
pub trait DatasetConfig: Send + Sync {
    fn kind(&self) -> DatasetKind;

    fn title(&self) -> &'static str;

    /// Property names eligible for substring search, in display order.
    fn search_fields(&self) -> &'static [&'static str];

    /// Quick filters in button order; the first is always `all`.
    fn filters(&self) -> &'static [FilterDef];

    fn classify(&self, item: &DatasetItem) -> VisualStyle;

    /// The named filter predicate alone. Unknown keys impose no restriction.
    fn filter_matches(&self, item: &DatasetItem, filter_key: &str, ctx: &FilterContext) -> bool;

    /// Summary rows over the full, unfiltered item list.
    fn compute_stats(&self, items: &[DatasetItem]) -> Vec<StatRow>;

    fn render_list_entry(&self, item: &DatasetItem) -> Fragment;

    fn render_detail(&self, item: &DatasetItem) -> Fragment;

    fn default_filter(&self) -> &'static str {
        DEFAULT_FILTER
    }

    fn has_filter(&self, key: &str) -> bool {
        self.filters().iter().any(|f| f.key == key)
    }

    /// Search (case-insensitive, any search field) AND the named filter.
    fn matches(
        &self,
        item: &DatasetItem,
        filter_key: &str,
        search_term: &str,
        ctx: &FilterContext,
    ) -> bool {
        matches_search(item, self.search_fields(), search_term)
            && self.filter_matches(item, filter_key, ctx)
    }

    fn search_placeholder(&self) -> String {
        format!("Search {}...", self.search_fields().join(", "))
    }
}
