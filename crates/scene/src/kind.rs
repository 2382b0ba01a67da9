use std::fmt;
use std::str::FromStr;

/// The four catalogs the dashboard knows how to present.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DatasetKind {
    Conjunctions,
    Elset,
    Sgi,
    StateVector,
}

impl DatasetKind {
    /// Every kind, in navigation order.
    pub const ALL: [DatasetKind; 4] = [
        DatasetKind::Conjunctions,
        DatasetKind::Elset,
        DatasetKind::Sgi,
        DatasetKind::StateVector,
    ];

    pub const fn key(self) -> &'static str {
        match self {
            DatasetKind::Conjunctions => "conjunctions",
            DatasetKind::Elset => "elset",
            DatasetKind::Sgi => "sgi",
            DatasetKind::StateVector => "statevector",
        }
    }

    pub fn file_name(self) -> String {
        format!("{}.geojson", self.key())
    }

    pub fn map_container(self) -> String {
        format!("{}-mapView", self.key())
    }

    pub fn globe_container(self) -> String {
        format!("{}-globeView", self.key())
    }
}

impl fmt::Display for DatasetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownDatasetKind(pub String);

impl fmt::Display for UnknownDatasetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown dataset kind: {:?}", self.0)
    }
}

impl std::error::Error for UnknownDatasetKind {}

impl FromStr for DatasetKind {
    type Err = UnknownDatasetKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        DatasetKind::ALL
            .into_iter()
            .find(|kind| kind.key() == key)
            .ok_or_else(|| UnknownDatasetKind(s.to_string()))
    }
}
