use scene::{DatasetItem, GeoPoint, Properties, PropertyValue};
use serde_json::{Map, Value};

#[derive(Debug)]
pub enum FeatureCollectionError {
    Json(serde_json::Error),
    NotAFeatureCollection,
}

impl std::fmt::Display for FeatureCollectionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FeatureCollectionError::Json(e) => write!(f, "JSON parse error: {e}"),
            FeatureCollectionError::NotAFeatureCollection => {
                write!(f, "expected GeoJSON FeatureCollection")
            }
        }
    }
}

impl std::error::Error for FeatureCollectionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FeatureCollectionError::Json(e) => Some(e),
            FeatureCollectionError::NotAFeatureCollection => None,
        }
    }
}

/// Decodes a GeoJSON FeatureCollection of point features into dataset items.
///
/// The collection `type` member is optional (some exporters omit it), but when
/// present it must be `FeatureCollection`, and `features` must be an array.
/// Features that are not valid points are skipped with a warning.
pub fn items_from_geojson_str(payload: &str) -> Result<Vec<DatasetItem>, FeatureCollectionError> {
    let value: Value = serde_json::from_str(payload).map_err(FeatureCollectionError::Json)?;
    items_from_geojson_value(&value)
}

pub fn items_from_geojson_value(value: &Value) -> Result<Vec<DatasetItem>, FeatureCollectionError> {
    let obj = value
        .as_object()
        .ok_or(FeatureCollectionError::NotAFeatureCollection)?;
    if let Some(ty) = obj.get("type")
        && ty.as_str() != Some("FeatureCollection")
    {
        return Err(FeatureCollectionError::NotAFeatureCollection);
    }

    let features = obj
        .get("features")
        .and_then(|v| v.as_array())
        .ok_or(FeatureCollectionError::NotAFeatureCollection)?;

    let items: Vec<DatasetItem> = features
        .iter()
        .enumerate()
        .filter_map(|(index, feature)| match parse_feature(feature) {
            Ok(item) => Some(item),
            Err(reason) => {
                tracing::warn!(index, %reason, "skipping invalid feature");
                None
            }
        })
        .collect();
    if items.len() < features.len() {
        tracing::warn!(
            kept = items.len(),
            skipped = features.len() - items.len(),
            "feature collection partially decoded"
        );
    }
    Ok(items)
}

fn parse_feature(value: &Value) -> Result<DatasetItem, String> {
    let obj = value
        .as_object()
        .ok_or_else(|| "feature must be an object".to_string())?;

    if let Some(ty) = obj.get("type").and_then(|v| v.as_str())
        && ty != "Feature"
    {
        return Err(format!("unexpected feature type: {ty}"));
    }

    let geometry = obj
        .get("geometry")
        .and_then(|v| v.as_object())
        .ok_or_else(|| "feature missing geometry".to_string())?;
    let point = parse_point(geometry)?;

    let properties = obj
        .get("properties")
        .and_then(|v| v.as_object())
        .map(parse_properties)
        .unwrap_or_default();

    Ok(DatasetItem::new(point, properties))
}

fn parse_point(geometry: &Map<String, Value>) -> Result<GeoPoint, String> {
    let ty = geometry
        .get("type")
        .and_then(|v| v.as_str())
        .ok_or_else(|| "geometry missing type".to_string())?;
    if ty != "Point" {
        return Err(format!("unsupported geometry type: {ty}"));
    }

    let coords = geometry
        .get("coordinates")
        .and_then(|v| v.as_array())
        .ok_or_else(|| "point missing coordinates".to_string())?;
    let component = |i: usize| coords.get(i).and_then(|v| v.as_f64());

    let (Some(lon), Some(lat)) = (component(0), component(1)) else {
        return Err("point coordinates must start with [lon, lat]".to_string());
    };
    if !(-90.0..=90.0).contains(&lat) {
        return Err(format!("latitude out of range: {lat}"));
    }

    Ok(match component(2) {
        Some(alt) => GeoPoint::with_altitude(lon, lat, alt),
        None => GeoPoint::new(lon, lat),
    })
}

fn parse_properties(obj: &Map<String, Value>) -> Properties {
    obj.iter()
        .filter_map(|(k, v)| {
            let value = match v {
                Value::Null => PropertyValue::Null,
                Value::Bool(b) => PropertyValue::Bool(*b),
                Value::Number(n) => PropertyValue::Number(n.as_f64()?),
                Value::String(s) => PropertyValue::Text(s.clone()),
                // Nested values have no meaning for search, filters or templates.
                Value::Array(_) | Value::Object(_) => return None,
            };
            Some((k.clone(), value))
        })
        .collect()
}
