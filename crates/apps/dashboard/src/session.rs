use layers::{DualView, GlobeView, MapView};
use scene::{DatasetKind, SessionState};

use crate::globe_controller::GlobeController;

/// Everything the dashboard keeps for one dataset kind.
pub struct Page<M: MapView, G: GlobeView> {
    pub state: SessionState,
    pub views: DualView<M, G>,
    pub globe_controller: GlobeController,
}

impl<M: MapView, G: GlobeView> Page<M, G> {
    pub fn kind(&self) -> DatasetKind {
        self.state.kind()
    }
}

/// All pages plus which one is showing.
pub struct Session<M: MapView, G: GlobeView> {
    pages: Vec<Page<M, G>>,
    current: DatasetKind,
}

impl<M: MapView, G: GlobeView> Session<M, G> {
    /// Builds one page per kind, in `DatasetKind::ALL` order.
    pub fn new(mut build: impl FnMut(DatasetKind) -> Page<M, G>) -> Self {
        Self {
            pages: DatasetKind::ALL.into_iter().map(&mut build).collect(),
            current: DatasetKind::ALL[0],
        }
    }

    pub fn current(&self) -> DatasetKind {
        self.current
    }

    pub fn set_current(&mut self, kind: DatasetKind) {
        self.current = kind;
    }

    pub fn page(&self, kind: DatasetKind) -> &Page<M, G> {
        &self.pages[slot(kind)]
    }

    pub fn page_mut(&mut self, kind: DatasetKind) -> &mut Page<M, G> {
        &mut self.pages[slot(kind)]
    }

    pub fn current_page_mut(&mut self) -> &mut Page<M, G> {
        self.page_mut(self.current)
    }

    pub fn pages_mut(&mut self) -> impl Iterator<Item = &mut Page<M, G>> + '_ {
        self.pages.iter_mut()
    }
}

fn slot(kind: DatasetKind) -> usize {
    match kind {
        DatasetKind::Conjunctions => 0,
        DatasetKind::Elset => 1,
        DatasetKind::Sgi => 2,
        DatasetKind::StateVector => 3,
    }
}
