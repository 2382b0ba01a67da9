use crate::properties::Properties;

/// Position of an item within its dataset's loaded list.
///
/// Items are immutable once loaded, so the index stays valid until the next load
/// replaces the list wholesale.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(pub u32);

impl ItemId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// GeoJSON point: `[longitude, latitude, optional altitude]`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GeoPoint {
    pub lon_deg: f64,
    pub lat_deg: f64,
    /// Third coordinate, in meters, when present.
    pub alt_m: Option<f64>,
}

impl GeoPoint {
    pub fn new(lon_deg: f64, lat_deg: f64) -> Self {
        Self {
            lon_deg,
            lat_deg,
            alt_m: None,
        }
    }

    pub fn with_altitude(lon_deg: f64, lat_deg: f64, alt_m: f64) -> Self {
        Self {
            lon_deg,
            lat_deg,
            alt_m: Some(alt_m),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DatasetItem {
    pub point: GeoPoint,
    pub properties: Properties,
}

impl DatasetItem {
    pub fn new(point: GeoPoint, properties: Properties) -> Self {
        Self { point, properties }
    }

    pub fn lat_deg(&self) -> f64 {
        self.point.lat_deg
    }

    pub fn lon_deg(&self) -> f64 {
        self.point.lon_deg
    }
}
