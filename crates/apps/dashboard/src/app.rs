use catalog::FilterContext;
use layers::{DualView, GlobeView, MapView, apply_filters};
use runtime::{EventBus, Frame};
use scene::{DatasetItem, DatasetKind, ItemId, SessionState, ViewMode};

use crate::config::DashboardConfig;
use crate::data_sources::{DatasetSource, FsSource, LoadError, load_items};
use crate::error::DashboardError;
use crate::focus::FocusController;
use crate::globe_controller::GlobeController;
use crate::logging;
use crate::session::{Page, Session};
use crate::surface::{GlobeSetup, ListEntry, MapSetup, Surface};

/// Root of the engine: one page per dataset kind, projected onto a surface.
///
/// Every method runs to completion; loading is the only suspension point and a
/// load that completes later simply overwrites an earlier one.
pub struct Dashboard<S: Surface> {
    surface: S,
    config: DashboardConfig,
    session: Session<S::Map, S::Globe>,
    focus: FocusController,
    events: EventBus,
    frame: Frame,
}

impl<S: Surface> Dashboard<S> {
    /// Builds every page and eagerly constructs the maps. A kind whose map
    /// container is missing keeps working without views.
    pub fn new(mut surface: S, config: DashboardConfig) -> Self {
        let map_setup = MapSetup {
            center_lat_deg: 0.0,
            center_lon_deg: 0.0,
            zoom: config.initial_map_zoom,
        };
        let session = Session::new(|kind| Page {
            state: SessionState::new(kind),
            views: DualView::new(
                kind,
                build_map(&mut surface, kind, &map_setup),
                config.marker_radius,
            ),
            globe_controller: GlobeController::from_config(&config),
        });
        let focus = FocusController::new(config.focus_steps, config.camera_distance);

        let mut dashboard = Self {
            surface,
            config,
            session,
            focus,
            events: EventBus::new(),
            frame: Frame::first(),
        };
        dashboard.present_chrome();
        dashboard
    }

    /// Process entry point: logging, `DASHBOARD_*` overrides, then every
    /// dataset loaded from the configured data directory.
    ///
    /// The returned source serves later [`Dashboard::refresh`] calls.
    pub async fn launch(surface: S) -> (Self, FsSource) {
        logging::init();
        Self::start(surface, DashboardConfig::from_env()).await
    }

    /// Builds the dashboard and loads every dataset from `config.data_dir`.
    pub async fn start(surface: S, config: DashboardConfig) -> (Self, FsSource) {
        let source = FsSource::from_config(&config);
        tracing::info!(data_dir = %config.data_dir.display(), "dashboard starting");
        let mut dashboard = Self::new(surface, config);
        dashboard.load_all(&source).await;
        (dashboard, source)
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn current_page(&self) -> DatasetKind {
        self.session.current()
    }

    pub fn state(&self, kind: DatasetKind) -> &SessionState {
        &self.session.page(kind).state
    }

    pub fn views(&self, kind: DatasetKind) -> &DualView<S::Map, S::Globe> {
        &self.session.page(kind).views
    }

    pub fn focus(&self) -> &FocusController {
        &self.focus
    }

    /// Trace of pipeline stages (`stats`, `list`, `markers`) in emission order.
    pub fn events(&self) -> &EventBus {
        &self.events
    }

    pub fn events_mut(&mut self) -> &mut EventBus {
        &mut self.events
    }

    /// Loads every dataset kind, one after the other.
    pub async fn load_all(&mut self, source: &dyn DatasetSource) {
        for kind in DatasetKind::ALL {
            self.load(kind, source).await;
        }
    }

    /// Reloads the page currently showing.
    pub async fn refresh(&mut self, source: &dyn DatasetSource) -> usize {
        let kind = self.session.current();
        self.load(kind, source).await
    }

    /// Fetches, decodes and processes one dataset; returns the item count.
    pub async fn load(&mut self, kind: DatasetKind, source: &dyn DatasetSource) -> usize {
        self.begin_load(kind);
        let result = load_items(source, kind).await;
        self.apply_load(kind, result)
    }

    pub fn begin_load(&mut self, kind: DatasetKind) {
        let title = catalog::config(kind).title();
        self.surface.show_loading(&format!("Loading {title}..."));
    }

    /// Completes a load: any failure becomes an empty dataset.
    pub fn apply_load(
        &mut self,
        kind: DatasetKind,
        result: Result<Vec<DatasetItem>, LoadError>,
    ) -> usize {
        let items = match result {
            Ok(items) => {
                tracing::info!(%kind, items = items.len(), "dataset loaded");
                items
            }
            Err(err) => {
                tracing::warn!(%kind, error = %err, "dataset unavailable, showing none");
                Vec::new()
            }
        };
        self.surface.hide_loading();
        let count = items.len();
        self.session.page_mut(kind).state.replace_items(items);
        self.process(kind);
        count
    }

    pub fn switch_page(&mut self, kind: DatasetKind) {
        self.focus.cancel();
        self.session.current_page_mut().globe_controller.on_pointer_up();
        self.session.set_current(kind);
        self.present_chrome();
        if let Some(map) = self.session.page_mut(kind).views.map_mut() {
            map.invalidate_layout();
        }
        tracing::info!(%kind, "page switched");
        self.process(kind);
    }

    pub fn set_filter(&mut self, key: &str) -> Result<(), DashboardError> {
        let kind = self.session.current();
        let config = catalog::config(kind);
        if !config.has_filter(key) {
            return Err(DashboardError::UnknownFilter {
                kind,
                key: key.to_string(),
            });
        }
        self.session.page_mut(kind).state.set_active_filter(key);
        self.surface.present_filters(config.filters(), key);
        self.run_pipeline(kind);
        Ok(())
    }

    /// Applies a new search term; every keystroke recomputes.
    pub fn set_search(&mut self, term: &str) {
        let kind = self.session.current();
        self.session.page_mut(kind).state.set_search_term(term);
        self.run_pipeline(kind);
    }

    /// Flips the current page between map and globe and returns the new mode.
    pub fn toggle_view(&mut self) -> ViewMode {
        self.focus.cancel();
        let kind = self.session.current();
        let Self {
            surface,
            session,
            config,
            ..
        } = self;
        let page = session.page_mut(kind);
        let mode = page.state.view_mode().toggled();
        let (outgoing, incoming) = match mode {
            ViewMode::Globe => (kind.map_container(), kind.globe_container()),
            ViewMode::Map => (kind.globe_container(), kind.map_container()),
        };
        surface.set_container_visible(&outgoing, false);
        surface.set_container_visible(&incoming, true);
        page.state.set_view_mode(mode);
        page.globe_controller.on_pointer_up();

        if mode == ViewMode::Globe {
            let setup = GlobeSetup {
                body_radius: config.globe_radius,
                camera_distance: config.camera_distance,
                size: surface.container_size(&incoming).unwrap_or_default(),
            };
            let built = page.views.ensure_globe(|| {
                if surface.has_container(&incoming) {
                    surface.create_globe(&incoming, &setup)
                } else {
                    None
                }
            });
            if !built {
                let err = DashboardError::RenderTargetMissing {
                    container: incoming.clone(),
                };
                tracing::error!(%kind, "{err}");
            }
        }
        surface.set_view_toggle_label(toggle_label(mode));
        tracing::info!(%kind, view = %mode, "view switched");

        self.sync_markers(kind);
        mode
    }

    /// Selects the entry at `index` of the filtered list and focuses on it.
    pub fn select_item(&mut self, index: usize) -> Result<ItemId, DashboardError> {
        let kind = self.session.current();
        let Self {
            surface,
            session,
            focus,
            config,
            ..
        } = self;
        let page = session.page_mut(kind);
        let Some((id, item)) = page.state.filtered_at(index) else {
            return Err(DashboardError::ItemOutOfRange { kind, index });
        };
        let (lat, lon) = (item.lat_deg(), item.lon_deg());
        page.state.select(Some(id));
        surface.present_selection(Some(index));

        match page.state.view_mode() {
            ViewMode::Map => {
                if !page.views.focus_map(id, lat, lon, config.focus_map_zoom) {
                    tracing::debug!(%kind, index, "no live marker for selection");
                }
            }
            ViewMode::Globe => {
                if let Some(globe) = page.views.globe() {
                    focus.start(kind, lat, lon, globe.camera_position());
                }
            }
        }
        Ok(id)
    }

    /// Re-lays out every page's views after the window changed size.
    pub fn resize(&mut self) {
        let Self {
            surface, session, ..
        } = self;
        for page in session.pages_mut() {
            let size = surface
                .container_size(&page.kind().globe_container())
                .unwrap_or_default();
            page.views.resize(page.state.view_mode(), size);
        }
    }

    /// Advances the focus animation and draws one globe frame for the page
    /// showing, if it is in globe mode.
    pub fn tick(&mut self, frame: Frame) {
        self.frame = frame;
        let kind = self.session.current();
        let page = self.session.page_mut(kind);
        let mode = page.state.view_mode();
        self.focus.advance(kind, mode, page.views.globe_mut());
        if mode == ViewMode::Globe
            && let Some(globe) = page.views.globe_mut()
        {
            page.globe_controller.step(globe);
        }
    }

    pub fn on_pointer_down(&mut self, pos_px: [f64; 2]) {
        let page = self.session.current_page_mut();
        if page.state.view_mode() == ViewMode::Globe && page.views.has_globe() {
            page.globe_controller.on_pointer_down(pos_px);
        }
    }

    pub fn on_pointer_move(&mut self, pos_px: [f64; 2]) {
        let page = self.session.current_page_mut();
        if page.state.view_mode() == ViewMode::Globe
            && let Some(globe) = page.views.globe_mut()
        {
            page.globe_controller.on_pointer_move(pos_px, globe);
        }
    }

    pub fn on_pointer_up(&mut self) {
        self.session.current_page_mut().globe_controller.on_pointer_up();
    }

    /// Zooms the current globe; returns the new camera distance.
    pub fn on_wheel(&mut self, delta_y: f64) -> Option<f64> {
        let page = self.session.current_page_mut();
        if page.state.view_mode() != ViewMode::Globe {
            return None;
        }
        let globe = page.views.globe_mut()?;
        Some(page.globe_controller.on_wheel(delta_y, globe))
    }

    fn present_chrome(&mut self) {
        let kind = self.session.current();
        let config = catalog::config(kind);
        let mode = self.session.page(kind).state.view_mode();
        self.surface.show_page(kind);
        self.surface.set_title(config.title());
        self.surface
            .set_search_placeholder(&config.search_placeholder());
        self.surface.set_view_toggle_label(toggle_label(mode));
    }

    /// Full processing after a load or page switch: filter buttons, then the
    /// pipeline.
    fn process(&mut self, kind: DatasetKind) {
        if kind == self.session.current() {
            let config = catalog::config(kind);
            let active = self.session.page(kind).state.active_filter();
            self.surface.present_filters(config.filters(), active);
        }
        self.run_pipeline(kind);
    }

    /// Recompute, then statistics, list and markers in that order. The shared
    /// sidebar only reflects the page showing; markers belong to each page.
    fn run_pipeline(&mut self, kind: DatasetKind) {
        let config = catalog::config(kind);
        let ctx = FilterContext::now();
        let showing = kind == self.session.current();
        let Self {
            surface,
            session,
            events,
            frame,
            ..
        } = self;
        let page = session.page_mut(kind);
        apply_filters(&mut page.state, config, &ctx);

        if showing {
            let items = page.state.items();
            let rows = config.compute_stats(items);
            surface.present_stats(items.len(), &rows);
            events.emit(*frame, "stats", format!("{kind}: {} items", items.len()));

            let entries: Vec<ListEntry> = page
                .state
                .filtered_items()
                .map(|(id, item)| ListEntry {
                    item: id,
                    style_class: config.classify(item).style_class,
                    fragment: config.render_list_entry(item),
                })
                .collect();
            surface.present_list(&entries);
            surface.present_selection(selected_index(&page.state));
            events.emit(*frame, "list", format!("{kind}: {} entries", entries.len()));
        }

        self.sync_markers(kind);
    }

    fn sync_markers(&mut self, kind: DatasetKind) {
        let config = catalog::config(kind);
        let page = self.session.page_mut(kind);
        let mode = page.state.view_mode();
        let count = page.views.sync(mode, &page.state, config);
        self.events
            .emit(self.frame, "markers", format!("{kind}: {count} on {mode}"));
    }
}

fn build_map<S: Surface>(surface: &mut S, kind: DatasetKind, setup: &MapSetup) -> Option<S::Map> {
    let container = kind.map_container();
    let map = if surface.has_container(&container) {
        surface.create_map(&container, setup)
    } else {
        None
    };
    if map.is_none() {
        let err = DashboardError::RenderTargetMissing { container };
        tracing::error!(%kind, "{err}");
    }
    map
}

fn selected_index(state: &SessionState) -> Option<usize> {
    let selected = state.selected()?;
    state.filtered().iter().position(|id| *id == selected)
}

fn toggle_label(mode: ViewMode) -> &'static str {
    match mode {
        ViewMode::Map => "Switch to 3D Globe",
        ViewMode::Globe => "Switch to 2D Map",
    }
}
