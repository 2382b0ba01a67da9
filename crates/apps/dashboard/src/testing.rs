//! In-memory collaborators for tests. They keep just enough state to count
//! live markers and observe what the dashboard asked for.

use std::collections::{BTreeMap, BTreeSet};

use catalog::{FilterDef, Fragment, StatRow};
use foundation::Vec3;
use layers::{GlobeMarkerStyle, GlobeView, MapMarkerStyle, MapView, ViewportSize};
use scene::DatasetKind;

use crate::surface::{GlobeSetup, ListEntry, MapSetup, Surface};

#[derive(Debug, Default)]
pub struct FakeMap {
    next: u32,
    pub live: BTreeMap<u32, (f64, f64, MapMarkerStyle)>,
    pub center: Option<(f64, f64, u8)>,
    pub popup: Option<u32>,
    pub invalidations: u32,
}

impl MapView for FakeMap {
    type Marker = u32;

    fn add_marker(&mut self, lat: f64, lon: f64, style: &MapMarkerStyle, _: &Fragment) -> u32 {
        self.next += 1;
        self.live.insert(self.next, (lat, lon, *style));
        self.next
    }

    fn remove_marker(&mut self, marker: u32) {
        self.live.remove(&marker);
    }

    fn set_center(&mut self, lat: f64, lon: f64, zoom: u8) {
        self.center = Some((lat, lon, zoom));
    }

    fn open_popup(&mut self, marker: &u32) {
        self.popup = Some(*marker);
    }

    fn invalidate_layout(&mut self) {
        self.invalidations += 1;
    }
}

#[derive(Debug)]
pub struct FakeGlobe {
    next: u32,
    pub live: BTreeMap<u32, Vec3>,
    pub camera: Vec3,
    pub look_at: Option<Vec3>,
    pub aspect: Option<ViewportSize>,
    pub yaw: f64,
    pub pitch: f64,
    pub frames: u32,
}

impl Default for FakeGlobe {
    fn default() -> Self {
        Self::with_camera_distance(15.0)
    }
}

impl FakeGlobe {
    pub fn with_camera_distance(distance: f64) -> Self {
        Self {
            next: 0,
            live: BTreeMap::new(),
            camera: Vec3::new(0.0, 0.0, distance),
            look_at: None,
            aspect: None,
            yaw: 0.0,
            pitch: 0.0,
            frames: 0,
        }
    }
}

impl GlobeView for FakeGlobe {
    type Marker = u32;

    fn add_marker(&mut self, position: Vec3, _: &GlobeMarkerStyle, _: &Fragment) -> u32 {
        self.next += 1;
        self.live.insert(self.next, position);
        self.next
    }

    fn remove_marker(&mut self, marker: u32) {
        self.live.remove(&marker);
    }

    fn camera_position(&self) -> Vec3 {
        self.camera
    }

    fn set_camera_position(&mut self, position: Vec3) {
        self.camera = position;
    }

    fn look_at(&mut self, target: Vec3) {
        self.look_at = Some(target);
    }

    fn set_camera_aspect(&mut self, size: ViewportSize) {
        self.aspect = Some(size);
    }

    fn rotate_body(&mut self, pitch_rad: f64, yaw_rad: f64) {
        self.pitch += pitch_rad;
        self.yaw += yaw_rad;
    }

    fn render(&mut self) {
        self.frames += 1;
    }
}

#[derive(Debug, Default)]
pub struct FakeSurface {
    containers: BTreeMap<String, ViewportSize>,
    pub hidden: BTreeSet<String>,
    pub maps_created: u32,
    pub globes_created: u32,
    pub page: Option<DatasetKind>,
    pub loading: Option<String>,
    pub loading_messages: Vec<String>,
    pub title: String,
    pub placeholder: String,
    pub toggle_label: String,
    pub stats: Option<(usize, Vec<StatRow>)>,
    pub filters: Vec<FilterDef>,
    pub active_filter: String,
    pub list: Vec<ListEntry>,
    pub selection: Option<usize>,
}

impl FakeSurface {
    /// Every map and globe container exists, sized 800x600; globes start hidden.
    pub fn complete() -> Self {
        let mut surface = Self::default();
        for kind in DatasetKind::ALL {
            surface
                .containers
                .insert(kind.map_container(), ViewportSize::new(800, 600));
            surface
                .containers
                .insert(kind.globe_container(), ViewportSize::new(800, 600));
            surface.hidden.insert(kind.globe_container());
        }
        surface
    }

    pub fn without(mut self, id: &str) -> Self {
        self.containers.remove(id);
        self
    }

    pub fn set_size(&mut self, id: &str, size: ViewportSize) {
        if let Some(s) = self.containers.get_mut(id) {
            *s = size;
        }
    }

    pub fn is_visible(&self, id: &str) -> bool {
        self.containers.contains_key(id) && !self.hidden.contains(id)
    }

    pub fn stat(&self, label: &str) -> Option<usize> {
        let (_, rows) = self.stats.as_ref()?;
        rows.iter().find(|r| r.label == label).map(|r| r.value)
    }
}

impl Surface for FakeSurface {
    type Map = FakeMap;
    type Globe = FakeGlobe;

    fn has_container(&self, id: &str) -> bool {
        self.containers.contains_key(id)
    }

    fn container_size(&self, id: &str) -> Option<ViewportSize> {
        self.containers.get(id).copied()
    }

    fn set_container_visible(&mut self, id: &str, visible: bool) {
        if visible {
            self.hidden.remove(id);
        } else {
            self.hidden.insert(id.to_string());
        }
    }

    fn create_map(&mut self, container: &str, setup: &MapSetup) -> Option<FakeMap> {
        self.containers.get(container)?;
        self.maps_created += 1;
        Some(FakeMap {
            center: Some((setup.center_lat_deg, setup.center_lon_deg, setup.zoom)),
            ..FakeMap::default()
        })
    }

    fn create_globe(&mut self, container: &str, setup: &GlobeSetup) -> Option<FakeGlobe> {
        self.containers.get(container)?;
        self.globes_created += 1;
        let mut globe = FakeGlobe::with_camera_distance(setup.camera_distance);
        globe.aspect = Some(setup.size);
        Some(globe)
    }

    fn show_page(&mut self, kind: DatasetKind) {
        self.page = Some(kind);
    }

    fn show_loading(&mut self, message: &str) {
        self.loading = Some(message.to_string());
        self.loading_messages.push(message.to_string());
    }

    fn hide_loading(&mut self) {
        self.loading = None;
    }

    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    fn set_search_placeholder(&mut self, placeholder: &str) {
        self.placeholder = placeholder.to_string();
    }

    fn set_view_toggle_label(&mut self, label: &str) {
        self.toggle_label = label.to_string();
    }

    fn present_stats(&mut self, total: usize, rows: &[StatRow]) {
        self.stats = Some((total, rows.to_vec()));
    }

    fn present_filters(&mut self, filters: &[FilterDef], active: &str) {
        self.filters = filters.to_vec();
        self.active_filter = active.to_string();
    }

    fn present_list(&mut self, entries: &[ListEntry]) {
        self.list = entries.to_vec();
    }

    fn present_selection(&mut self, index: Option<usize>) {
        self.selection = index;
    }
}
