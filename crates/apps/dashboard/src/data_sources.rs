//! Where dataset text comes from.
//!
//! A [`DatasetSource`] hands back the raw GeoJSON text of one dataset kind;
//! [`load_items`] decodes it. The dashboard treats every failure the same way
//! and falls back to an empty dataset.

use std::collections::BTreeMap;
use std::future::Future;
use std::path::{Path, PathBuf};
use std::pin::Pin;

use formats::{FeatureCollectionError, items_from_geojson_str};
use scene::{DatasetItem, DatasetKind};

use crate::config::DashboardConfig;

/// Boxed future that stays on the thread that created it.
pub type LocalBoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

#[derive(Debug)]
pub enum LoadError {
    Io { path: PathBuf, source: std::io::Error },
    /// The source answered, but not with a dataset (an HTTP-like status code).
    Status { kind: DatasetKind, status: u16 },
    Decode(FeatureCollectionError),
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadError::Io { path, source } => {
                write!(f, "failed to read {}: {source}", path.display())
            }
            LoadError::Status { kind, status } => {
                write!(f, "{} unavailable (status {status})", kind.file_name())
            }
            LoadError::Decode(e) => write!(f, "invalid dataset: {e}"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io { source, .. } => Some(source),
            LoadError::Status { .. } => None,
            LoadError::Decode(e) => Some(e),
        }
    }
}

impl From<FeatureCollectionError> for LoadError {
    fn from(e: FeatureCollectionError) -> Self {
        LoadError::Decode(e)
    }
}

pub trait DatasetSource {
    /// Raw text of `<kind>.geojson`.
    fn fetch(&self, kind: DatasetKind) -> LocalBoxFuture<'_, Result<String, LoadError>>;
}

/// Reads `<root>/<kind>.geojson`.
#[derive(Debug, Clone)]
pub struct FsSource {
    root: PathBuf,
}

impl FsSource {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Reads from the configured `data_dir`.
    pub fn from_config(config: &DashboardConfig) -> Self {
        Self::new(&config.data_dir)
    }

    pub fn path_of(&self, kind: DatasetKind) -> PathBuf {
        self.root.join(kind.file_name())
    }
}

impl DatasetSource for FsSource {
    fn fetch(&self, kind: DatasetKind) -> LocalBoxFuture<'_, Result<String, LoadError>> {
        let path = self.path_of(kind);
        Box::pin(async move {
            std::fs::read_to_string(&path).map_err(|source| LoadError::Io { path, source })
        })
    }
}

/// In-memory dataset texts, keyed by kind. Kinds without an entry answer 404.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    entries: BTreeMap<DatasetKind, Result<String, u16>>,
}

impl StaticSource {
    pub const NOT_FOUND: u16 = 404;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(mut self, kind: DatasetKind, text: impl Into<String>) -> Self {
        self.entries.insert(kind, Ok(text.into()));
        self
    }

    pub fn with_status(mut self, kind: DatasetKind, status: u16) -> Self {
        self.entries.insert(kind, Err(status));
        self
    }
}

impl DatasetSource for StaticSource {
    fn fetch(&self, kind: DatasetKind) -> LocalBoxFuture<'_, Result<String, LoadError>> {
        let entry = self.entries.get(&kind).cloned();
        Box::pin(async move {
            match entry {
                Some(Ok(text)) => Ok(text),
                Some(Err(status)) => Err(LoadError::Status { kind, status }),
                None => Err(LoadError::Status {
                    kind,
                    status: Self::NOT_FOUND,
                }),
            }
        })
    }
}

/// Fetches and decodes one dataset.
pub async fn load_items(
    source: &dyn DatasetSource,
    kind: DatasetKind,
) -> Result<Vec<DatasetItem>, LoadError> {
    let text = source.fetch(kind).await?;
    Ok(items_from_geojson_str(&text)?)
}

#[cfg(test)]
mod tests {
    use super::{DatasetSource, FsSource, LoadError, StaticSource, load_items};
    use crate::config::DashboardConfig;
    use scene::DatasetKind;
    use std::path::PathBuf;

    const ONE_POINT: &str = r#"{"type":"FeatureCollection","features":[
        {"type":"Feature","geometry":{"type":"Point","coordinates":[10.0,20.0]},
         "properties":{"name":"ISS"}}]}"#;

    #[test]
    fn static_source_serves_text_and_statuses() {
        let source = StaticSource::new()
            .with_text(DatasetKind::Elset, ONE_POINT)
            .with_status(DatasetKind::Sgi, 500);

        let items = pollster::block_on(load_items(&source, DatasetKind::Elset)).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].properties.text("name"), Some("ISS"));

        let err = pollster::block_on(source.fetch(DatasetKind::Sgi)).unwrap_err();
        assert!(matches!(err, LoadError::Status { status: 500, .. }));
        let err = pollster::block_on(source.fetch(DatasetKind::Conjunctions)).unwrap_err();
        assert!(matches!(err, LoadError::Status { status: 404, .. }));
    }

    #[test]
    fn invalid_text_is_a_decode_error() {
        let source = StaticSource::new().with_text(DatasetKind::Elset, "{\"features\": 3}");
        let err = pollster::block_on(load_items(&source, DatasetKind::Elset)).unwrap_err();
        assert!(matches!(err, LoadError::Decode(_)));
    }

    #[test]
    fn fs_source_reports_missing_files() {
        let source = FsSource::new("/definitely/not/here");
        assert!(source.path_of(DatasetKind::StateVector).ends_with("statevector.geojson"));
        let err = pollster::block_on(source.fetch(DatasetKind::StateVector)).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
        assert!(err.to_string().contains("statevector.geojson"));
    }

    #[test]
    fn fs_source_reads_from_configured_data_dir() {
        let dir = std::env::temp_dir().join(format!("dashboard-data-dir-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("elset.geojson"), ONE_POINT).unwrap();

        let config = DashboardConfig {
            data_dir: dir.clone(),
            ..DashboardConfig::default()
        };
        let source = FsSource::from_config(&config);
        assert_eq!(source.path_of(DatasetKind::Elset), dir.join("elset.geojson"));
        let items = pollster::block_on(load_items(&source, DatasetKind::Elset)).unwrap();
        assert_eq!(items[0].properties.text("name"), Some("ISS"));

        let elsewhere = FsSource::from_config(&DashboardConfig::default());
        assert_eq!(
            elsewhere.path_of(DatasetKind::Elset),
            PathBuf::from(".").join("elset.geojson")
        );

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn fs_source_reads_files() {
        let dir = std::env::temp_dir().join(format!("dashboard-fs-source-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("conjunctions.geojson"), ONE_POINT).unwrap();

        let source = FsSource::new(&dir);
        let items = pollster::block_on(load_items(&source, DatasetKind::Conjunctions)).unwrap();
        assert_eq!(items.len(), 1);

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
