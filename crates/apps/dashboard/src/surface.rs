use catalog::{FilterDef, Fragment, StatRow};
use layers::{GlobeView, MapView, ViewportSize};
use scene::{DatasetKind, ItemId};

/// Initial placement of a freshly constructed map.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MapSetup {
    pub center_lat_deg: f64,
    pub center_lon_deg: f64,
    pub zoom: u8,
}

/// Parameters of a freshly constructed globe.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GlobeSetup {
    pub body_radius: f64,
    /// Camera starts on the +z axis at this distance, looking at the origin.
    pub camera_distance: f64,
    pub size: ViewportSize,
}

/// One rendered row of the sidebar list.
#[derive(Debug, Clone, PartialEq)]
pub struct ListEntry {
    pub item: ItemId,
    pub style_class: &'static str,
    pub fragment: Fragment,
}

/// The display the dashboard projects onto.
///
/// Containers are addressed by the ids `DatasetKind` derives
/// (`<key>-mapView`, `<key>-globeView`). Everything else is a sidebar or
/// chrome element shared by all pages.
pub trait Surface {
    type Map: MapView;
    type Globe: GlobeView;

    fn has_container(&self, id: &str) -> bool;

    fn container_size(&self, id: &str) -> Option<ViewportSize>;

    fn set_container_visible(&mut self, id: &str, visible: bool);

    fn create_map(&mut self, container: &str, setup: &MapSetup) -> Option<Self::Map>;

    fn create_globe(&mut self, container: &str, setup: &GlobeSetup) -> Option<Self::Globe>;

    fn show_page(&mut self, kind: DatasetKind);

    fn show_loading(&mut self, message: &str);

    fn hide_loading(&mut self);

    fn set_title(&mut self, title: &str);

    fn set_search_placeholder(&mut self, placeholder: &str);

    fn set_view_toggle_label(&mut self, label: &str);

    fn present_stats(&mut self, total: usize, rows: &[StatRow]);

    /// Filter buttons in order; `active` is the key drawn as pressed.
    fn present_filters(&mut self, filters: &[FilterDef], active: &str);

    fn present_list(&mut self, entries: &[ListEntry]);

    /// Highlights the entry at `index` of the last presented list, or none.
    fn present_selection(&mut self, index: Option<usize>);
}
