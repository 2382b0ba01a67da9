use scene::{DatasetItem, DatasetKind};

use crate::config::{Category, DatasetConfig, FilterContext, FilterDef, StatRow, count_by_category};
use crate::fragment::{Fragment, date_time, or_na, prefix};
use crate::style::VisualStyle;

/// F10.7 solar flux above which a record counts as high solar activity.
const HIGH_SOLAR_F10: f64 = 200.0;
const ID_PREFIX_CHARS: usize = 8;

const FILTERS: &[FilterDef] = &[
    FilterDef::all(),
    FilterDef::new("active", "Active"),
    FilterDef::new("predicted", "Predicted"),
    FilterDef::new("agi", "AGI Source"),
    FilterDef::new("high-solar", "High Solar Activity"),
];

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SgiClass {
    Active,
    Predicted,
    HighSolar,
    Other,
}

impl SgiClass {
    pub fn of(item: &DatasetItem) -> Self {
        match item.properties.text("state") {
            Some("A") => SgiClass::Active,
            Some("P") => SgiClass::Predicted,
            _ if high_solar(item) => SgiClass::HighSolar,
            _ => SgiClass::Other,
        }
    }
}

impl Category for SgiClass {
    const STATS_ORDER: &'static [Self] = &[
        SgiClass::Active,
        SgiClass::Predicted,
        SgiClass::HighSolar,
        SgiClass::Other,
    ];

    fn style(self) -> VisualStyle {
        match self {
            SgiClass::Active => VisualStyle::new(0x4caf50, 8.0, "active-sgi"),
            SgiClass::Predicted => VisualStyle::new(0xff9800, 6.0, "predicted-sgi"),
            SgiClass::HighSolar => VisualStyle::new(0xf44336, 10.0, "high-solar"),
            SgiClass::Other => VisualStyle::new(0x9e9e9e, 5.0, "default-sgi"),
        }
    }

    fn stat_label(self) -> &'static str {
        match self {
            SgiClass::Active => "Active",
            SgiClass::Predicted => "Predicted",
            SgiClass::HighSolar => "High Solar Activity",
            SgiClass::Other => "Other",
        }
    }
}

fn high_solar(item: &DatasetItem) -> bool {
    item.properties.number("f10").unwrap_or(0.0) > HIGH_SOLAR_F10
}

fn id(item: &DatasetItem) -> String {
    item.properties.display("id").unwrap_or_default()
}

fn title(item: &DatasetItem) -> String {
    if let Some(name) = item
        .properties
        .first_display(&["object_name", "satellite_name", "name"])
    {
        return name;
    }
    let id = id(item);
    if id.is_empty() {
        "SGI Object".to_string()
    } else {
        format!("SGI-{}", prefix(&id, ID_PREFIX_CHARS))
    }
}

/// Space-geophysical catalog records, carrying the F10.7 solar index.
#[derive(Debug, Default, Copy, Clone)]
pub struct Sgi;

impl DatasetConfig for Sgi {
    fn kind(&self) -> DatasetKind {
        DatasetKind::Sgi
    }

    fn title(&self) -> &'static str {
        "SGI Data"
    }

    fn search_fields(&self) -> &'static [&'static str] {
        &[
            "id",
            "object_name",
            "satellite_name",
            "name",
            "source",
            "state",
            "classification",
        ]
    }

    fn filters(&self) -> &'static [FilterDef] {
        FILTERS
    }

    fn classify(&self, item: &DatasetItem) -> VisualStyle {
        SgiClass::of(item).style()
    }

    fn filter_matches(&self, item: &DatasetItem, filter_key: &str, _ctx: &FilterContext) -> bool {
        let props = &item.properties;
        match filter_key {
            "active" => props.text("state") == Some("A"),
            "predicted" => props.text("state") == Some("P"),
            "agi" => props.text("source") == Some("AGI"),
            "high-solar" => high_solar(item),
            _ => true,
        }
    }

    fn compute_stats(&self, items: &[DatasetItem]) -> Vec<StatRow> {
        count_by_category(items, SgiClass::of)
    }

    fn render_list_entry(&self, item: &DatasetItem) -> Fragment {
        let props = &item.properties;
        Fragment::new(title(item))
            .row("Source", or_na(props.display("source")))
            .row("State", or_na(props.display("state")))
            .row("F10.7", or_na(props.display("f10")))
    }

    fn render_detail(&self, item: &DatasetItem) -> Fragment {
        let props = &item.properties;
        let id = id(item);
        Fragment::new(title(item))
            .row("ID", format!("{}...", prefix(&id, ID_PREFIX_CHARS)))
            .row("Source", or_na(props.display("source")))
            .row("State", or_na(props.display("state")))
            .row("Classification", or_na(props.display("classification")))
            .row("F10.7", or_na(props.display("f10")))
            .row("Epoch", date_time(props.timestamp("epoch")))
    }
}

#[cfg(test)]
mod tests {
    use super::Sgi;
    use crate::config::{DatasetConfig, FilterContext, StatRow};
    use pretty_assertions::assert_eq;
    use scene::{DatasetItem, GeoPoint, Properties};

    fn record(state: &str, f10: f64, source: &str) -> DatasetItem {
        DatasetItem::new(
            GeoPoint::new(0.0, 0.0),
            Properties::new()
                .with("id", "3f2a9c1e-77aa-4b0e")
                .with("state", state)
                .with("f10", f10)
                .with("source", source),
        )
    }

    #[test]
    fn state_wins_over_solar_flux() {
        assert_eq!(Sgi.classify(&record("A", 250.0, "AGI")).style_class, "active-sgi");
        assert_eq!(Sgi.classify(&record("P", 250.0, "AGI")).style_class, "predicted-sgi");
        assert_eq!(Sgi.classify(&record("", 250.0, "AGI")).style_class, "high-solar");
        assert_eq!(Sgi.classify(&record("", 200.0, "AGI")).style_class, "default-sgi");
        // exact comparison on state codes
        assert_eq!(Sgi.classify(&record("a", 0.0, "AGI")).style_class, "default-sgi");
    }

    #[test]
    fn stats_count_each_record_once() {
        let items = vec![
            record("A", 250.0, "AGI"),
            record("P", 100.0, "AGI"),
            record("X", 300.0, "NOAA"),
            record("X", 80.0, "NOAA"),
        ];
        assert_eq!(
            Sgi.compute_stats(&items),
            vec![
                StatRow { label: "Active", value: 1 },
                StatRow { label: "Predicted", value: 1 },
                StatRow { label: "High Solar Activity", value: 1 },
                StatRow { label: "Other", value: 1 },
            ]
        );
    }

    #[test]
    fn filters_read_raw_properties() {
        let ctx = FilterContext::now();
        let item = record("A", 250.0, "AGI");
        assert!(Sgi.filter_matches(&item, "active", &ctx));
        assert!(!Sgi.filter_matches(&item, "predicted", &ctx));
        assert!(Sgi.filter_matches(&item, "agi", &ctx));
        assert!(Sgi.filter_matches(&item, "high-solar", &ctx));
        assert!(!Sgi.filter_matches(&record("A", 250.0, "agi"), "agi", &ctx));
        assert!(Sgi.filter_matches(&item, "no-such-filter", &ctx));
    }

    #[test]
    fn title_falls_back_to_short_id() {
        let entry = Sgi.render_list_entry(&record("A", 250.0, "AGI"));
        assert_eq!(entry.title, "SGI-3f2a9c1e");
        assert_eq!(entry.text_of("F10.7"), Some("250"));

        let detail = Sgi.render_detail(&record("A", 250.0, "AGI"));
        assert_eq!(detail.text_of("ID"), Some("3f2a9c1e..."));
        assert_eq!(detail.text_of("Classification"), Some("N/A"));

        let bare = DatasetItem::new(GeoPoint::new(0.0, 0.0), Properties::new());
        assert_eq!(Sgi.render_list_entry(&bare).title, "SGI Object");
    }

    #[test]
    fn search_covers_state_and_source() {
        let ctx = FilterContext::now();
        assert!(Sgi.matches(&record("A", 0.0, "AGI"), "all", "agi", &ctx));
        assert!(Sgi.matches(&record("A", 0.0, "AGI"), "all", "3F2A", &ctx));
        assert!(!Sgi.matches(&record("A", 0.0, "AGI"), "all", "noaa", &ctx));
    }
}
