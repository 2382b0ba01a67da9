use scene::{DatasetItem, PropertyValue};

/// Case-insensitive substring search across `fields`.
///
/// An empty term matches everything. Text values are searched as-is and numbers
/// in their display form, so numeric catalog ids are searchable too.
pub fn matches_search(item: &DatasetItem, fields: &[&str], term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    fields.iter().any(|field| {
        match item.properties.get(field) {
            Some(PropertyValue::Text(s)) => s.to_lowercase().contains(&needle),
            Some(PropertyValue::Number(n)) => n.to_string().contains(&needle),
            _ => false,
        }
    })
}
