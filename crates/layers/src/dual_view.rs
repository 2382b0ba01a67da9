use catalog::DatasetConfig;
use foundation::to_cartesian;
use scene::{DatasetKind, ItemId, SessionState, ViewMode};

use crate::markers::MarkerSet;
use crate::symbology::{GlobeMarkerStyle, MapMarkerStyle};
use crate::view::{GlobeView, MapView, ViewportSize};

/// Default radius at which globe markers float above a body of radius 5.
pub const DEFAULT_MARKER_RADIUS: f64 = 5.1;

/// The map and globe of one dataset kind, plus the markers each holds.
///
/// Only the active view is ever synced. The inactive one keeps whatever
/// markers it had when it was last active.
pub struct DualView<M: MapView, G: GlobeView> {
    kind: DatasetKind,
    marker_radius: f64,
    map: Option<M>,
    map_markers: MarkerSet<M::Marker>,
    globe: Option<G>,
    globe_markers: MarkerSet<G::Marker>,
}

impl<M: MapView, G: GlobeView> DualView<M, G> {
    pub fn new(kind: DatasetKind, map: Option<M>, marker_radius: f64) -> Self {
        Self {
            kind,
            marker_radius,
            map,
            map_markers: MarkerSet::new(),
            globe: None,
            globe_markers: MarkerSet::new(),
        }
    }

    pub fn kind(&self) -> DatasetKind {
        self.kind
    }

    pub fn map(&self) -> Option<&M> {
        self.map.as_ref()
    }

    pub fn map_mut(&mut self) -> Option<&mut M> {
        self.map.as_mut()
    }

    pub fn globe(&self) -> Option<&G> {
        self.globe.as_ref()
    }

    pub fn globe_mut(&mut self) -> Option<&mut G> {
        self.globe.as_mut()
    }

    pub fn has_globe(&self) -> bool {
        self.globe.is_some()
    }

    /// Builds the globe on first use. `build` is not called once a globe exists.
    pub fn ensure_globe(&mut self, build: impl FnOnce() -> Option<G>) -> bool {
        if self.globe.is_none() {
            self.globe = build();
            if self.globe.is_some() {
                tracing::info!(kind = %self.kind, "globe constructed");
            }
        }
        self.globe.is_some()
    }

    pub fn marker_count(&self, mode: ViewMode) -> usize {
        match mode {
            ViewMode::Map => self.map_markers.len(),
            ViewMode::Globe => self.globe_markers.len(),
        }
    }

    /// Centers the map on `(lat, lon)` and opens the popup of `item`'s marker.
    ///
    /// Returns whether a live marker was found for `item`; without a map
    /// nothing happens.
    pub fn focus_map(&mut self, item: ItemId, lat_deg: f64, lon_deg: f64, zoom: u8) -> bool {
        let Some(map) = self.map.as_mut() else {
            return false;
        };
        map.set_center(lat_deg, lon_deg, zoom);
        match self.map_markers.get(item) {
            Some(marker) => {
                map.open_popup(marker);
                true
            }
            None => false,
        }
    }

    /// Replaces every marker of the `mode` view with one per filtered item.
    ///
    /// Returns the number of markers now live on that view; a view that was
    /// never constructed stays empty.
    pub fn sync(
        &mut self,
        mode: ViewMode,
        state: &SessionState,
        config: &dyn DatasetConfig,
    ) -> usize {
        let count = match mode {
            ViewMode::Map => self.sync_map(state, config),
            ViewMode::Globe => self.sync_globe(state, config),
        };
        tracing::debug!(kind = %self.kind, view = %mode, markers = count, "markers synced");
        count
    }

    fn sync_map(&mut self, state: &SessionState, config: &dyn DatasetConfig) -> usize {
        let Some(map) = self.map.as_mut() else {
            return 0;
        };
        self.map_markers.clear_with(|m| map.remove_marker(m));
        for (id, item) in state.filtered_items() {
            let style = MapMarkerStyle::from_style(&config.classify(item));
            let popup = config.render_detail(item);
            let handle = map.add_marker(item.lat_deg(), item.lon_deg(), &style, &popup);
            self.map_markers.push(id, handle);
        }
        self.map_markers.len()
    }

    fn sync_globe(&mut self, state: &SessionState, config: &dyn DatasetConfig) -> usize {
        let Some(globe) = self.globe.as_mut() else {
            return 0;
        };
        self.globe_markers.clear_with(|m| globe.remove_marker(m));
        for (id, item) in state.filtered_items() {
            let style = GlobeMarkerStyle::from_style(&config.classify(item));
            let popup = config.render_detail(item);
            let position = to_cartesian(item.lat_deg(), item.lon_deg(), self.marker_radius);
            let handle = globe.add_marker(position, &style, &popup);
            self.globe_markers.push(id, handle);
        }
        self.globe_markers.len()
    }

    /// Re-lays out the views after a container size change. Never touches
    /// markers and never constructs a view.
    pub fn resize(&mut self, mode: ViewMode, globe_size: ViewportSize) {
        if let Some(map) = self.map.as_mut() {
            map.invalidate_layout();
        }
        if mode == ViewMode::Globe
            && let Some(globe) = self.globe.as_mut()
        {
            globe.set_camera_aspect(globe_size);
        }
    }
}
