use catalog::{DatasetConfig, FilterContext};
use scene::{ItemId, SessionState};

/// Ids of the items that pass the state's active filter and search term.
///
/// Pure and stable: ids come back in their original relative order, and
/// running it twice over the same state yields the same list.
pub fn recompute(
    state: &SessionState,
    config: &dyn DatasetConfig,
    ctx: &FilterContext,
) -> Vec<ItemId> {
    let filter = state.active_filter();
    let term = state.search_term();
    state
        .item_ids()
        .zip(state.items())
        .filter(|(_, item)| config.matches(item, filter, term, ctx))
        .map(|(id, _)| id)
        .collect()
}

/// Recomputes and stores the filtered subset; returns its length.
pub fn apply_filters(
    state: &mut SessionState,
    config: &dyn DatasetConfig,
    ctx: &FilterContext,
) -> usize {
    let filtered = recompute(state, config, ctx);
    let count = filtered.len();
    tracing::debug!(
        kind = %state.kind(),
        filter = state.active_filter(),
        total = state.items().len(),
        filtered = count,
        "filters applied"
    );
    state.set_filtered(filtered);
    count
}
