use scene::{DatasetItem, DatasetKind};

use crate::config::{Category, DatasetConfig, FilterContext, FilterDef, StatRow, count_by_category};
use crate::fragment::{Fragment, date, date_time, or_na};
use crate::style::VisualStyle;

const HIGH_RISK: f64 = 0.001;
const MEDIUM_RISK: f64 = 0.0001;

const FILTERS: &[FilterDef] = &[
    FilterDef::all(),
    FilterDef::new("high", "High Risk"),
    FilterDef::new("medium", "Medium Risk"),
    FilterDef::new("low", "Low Risk"),
];

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Risk {
    High,
    Medium,
    Low,
}

impl Risk {
    pub fn of(item: &DatasetItem) -> Self {
        let p = probability(item);
        if p > HIGH_RISK {
            Risk::High
        } else if p > MEDIUM_RISK {
            Risk::Medium
        } else {
            Risk::Low
        }
    }
}

impl Category for Risk {
    const STATS_ORDER: &'static [Self] = &[Risk::High, Risk::Medium, Risk::Low];

    fn style(self) -> VisualStyle {
        match self {
            Risk::High => VisualStyle::new(0xff4757, 8.0, "high-risk"),
            Risk::Medium => VisualStyle::new(0xffa726, 6.0, "medium-risk"),
            Risk::Low => VisualStyle::new(0x66bb6a, 4.0, "low-risk"),
        }
    }

    fn stat_label(self) -> &'static str {
        match self {
            Risk::High => "High Risk (>0.001)",
            Risk::Medium => "Medium Risk (>0.0001)",
            Risk::Low => "Low Risk",
        }
    }
}

fn probability(item: &DatasetItem) -> f64 {
    item.properties.number("collision_probability").unwrap_or(0.0)
}

fn per_million(item: &DatasetItem, decimals: usize) -> String {
    format!("{:.*}/million", decimals, probability(item) * 1_000_000.0)
}

fn satellites(item: &DatasetItem) -> (String, String) {
    (
        or_na(item.properties.display("satellite1_id")),
        or_na(item.properties.display("satellite2_id")),
    )
}

fn altitude(item: &DatasetItem) -> String {
    format!("{}km", or_na(item.properties.display("altitude_km")))
}

/// Close approaches between two tracked objects, classified by collision
/// probability.
#[derive(Debug, Default, Copy, Clone)]
pub struct Conjunctions;

impl DatasetConfig for Conjunctions {
    fn kind(&self) -> DatasetKind {
        DatasetKind::Conjunctions
    }

    fn title(&self) -> &'static str {
        "Conjunctions"
    }

    fn search_fields(&self) -> &'static [&'static str] {
        &["name", "satellite1_id", "satellite2_id"]
    }

    fn filters(&self) -> &'static [FilterDef] {
        FILTERS
    }

    fn classify(&self, item: &DatasetItem) -> VisualStyle {
        Risk::of(item).style()
    }

    fn filter_matches(&self, item: &DatasetItem, filter_key: &str, _ctx: &FilterContext) -> bool {
        let p = probability(item);
        match filter_key {
            "high" => p > HIGH_RISK,
            "medium" => p > MEDIUM_RISK && p <= HIGH_RISK,
            "low" => p <= MEDIUM_RISK,
            _ => true,
        }
    }

    fn compute_stats(&self, items: &[DatasetItem]) -> Vec<StatRow> {
        count_by_category(items, Risk::of)
    }

    fn render_list_entry(&self, item: &DatasetItem) -> Fragment {
        let (sat1, sat2) = satellites(item);
        Fragment::new(format!("{sat1} ↔ {sat2}"))
            .row("Risk", per_million(item, 1))
            .row("Alt", altitude(item))
            .row("TCA", date(item.properties.timestamp("tca")))
    }

    fn render_detail(&self, item: &DatasetItem) -> Fragment {
        let (sat1, sat2) = satellites(item);
        let title = item
            .properties
            .display("name")
            .unwrap_or_else(|| "Conjunction".to_string());
        Fragment::new(title)
            .row("Risk", per_million(item, 3))
            .row("Altitude", altitude(item))
            .row("TCA", date_time(item.properties.timestamp("tca")))
            .row("Satellites", format!("{sat1} & {sat2}"))
    }
}

#[cfg(test)]
mod tests {
    use super::Conjunctions;
    use crate::config::{DatasetConfig, FilterContext, StatRow};
    use pretty_assertions::assert_eq;
    use scene::{DatasetItem, GeoPoint, Properties};

    fn conj(p: f64) -> DatasetItem {
        DatasetItem::new(
            GeoPoint::new(10.0, 20.0),
            Properties::new()
                .with("collision_probability", p)
                .with("satellite1_id", "25544")
                .with("satellite2_id", "43013")
                .with("altitude_km", 420.0)
                .with("tca", "2024-06-01T03:04:05Z"),
        )
    }

    fn stats(high: usize, medium: usize, low: usize) -> Vec<StatRow> {
        vec![
            StatRow { label: "High Risk (>0.001)", value: high },
            StatRow { label: "Medium Risk (>0.0001)", value: medium },
            StatRow { label: "Low Risk", value: low },
        ]
    }

    #[test]
    fn three_probabilities_end_to_end() {
        let cfg = Conjunctions;
        let items = vec![conj(0.002), conj(0.0005), conj(0.00001)];
        let ctx = FilterContext::now();

        assert_eq!(cfg.compute_stats(&items), stats(1, 1, 1));

        let classes: Vec<_> = items.iter().map(|i| cfg.classify(i).style_class).collect();
        assert_eq!(classes, vec!["high-risk", "medium-risk", "low-risk"]);

        let high: Vec<_> = items
            .iter()
            .filter(|i| cfg.matches(i, "high", "", &ctx))
            .collect();
        assert_eq!(high.len(), 1);
        assert_eq!(cfg.classify(high[0]).color.to_hex(), "#ff4757");
        assert_eq!(cfg.classify(high[0]).radius, 8.0);

        let count = |filter: &str, term: &str| {
            items
                .iter()
                .filter(|i| cfg.matches(i, filter, term, &ctx))
                .count()
        };
        assert_eq!(count("high", "2554"), 1);
        assert_eq!(count("high", "99999"), 0);
        assert_eq!(count("all", "2554"), 3);
    }

    #[test]
    fn thresholds_are_exclusive_above() {
        let cfg = Conjunctions;
        let ctx = FilterContext::now();
        assert_eq!(cfg.classify(&conj(0.001)).style_class, "medium-risk");
        assert_eq!(cfg.classify(&conj(0.0001)).style_class, "low-risk");
        assert!(cfg.filter_matches(&conj(0.001), "medium", &ctx));
        assert!(cfg.filter_matches(&conj(0.0001), "low", &ctx));
    }

    #[test]
    fn missing_probability_reads_as_zero() {
        let cfg = Conjunctions;
        let item = DatasetItem::new(GeoPoint::new(0.0, 0.0), Properties::new());
        assert_eq!(cfg.classify(&item).style_class, "low-risk");
        let entry = cfg.render_list_entry(&item);
        assert_eq!(entry.title, "N/A ↔ N/A");
        assert_eq!(entry.text_of("Risk"), Some("0.0/million"));
        assert_eq!(entry.text_of("Alt"), Some("N/Akm"));
        assert_eq!(entry.text_of("TCA"), Some("N/A"));
    }

    #[test]
    fn templates_render_risk_per_million() {
        let cfg = Conjunctions;
        let entry = cfg.render_list_entry(&conj(0.0005));
        assert_eq!(entry.title, "25544 ↔ 43013");
        assert_eq!(entry.text_of("Risk"), Some("500.0/million"));
        assert_eq!(entry.text_of("Alt"), Some("420km"));
        assert_eq!(entry.text_of("TCA"), Some("2024-06-01"));

        let detail = cfg.render_detail(&conj(0.00001));
        assert_eq!(detail.title, "Conjunction");
        assert_eq!(detail.text_of("Risk"), Some("10.000/million"));
        assert_eq!(detail.text_of("TCA"), Some("2024-06-01 03:04:05 UTC"));
        assert_eq!(detail.text_of("Satellites"), Some("25544 & 43013"));
    }

    #[test]
    fn searches_satellite_ids() {
        let cfg = Conjunctions;
        let ctx = FilterContext::now();
        assert!(cfg.matches(&conj(0.002), "all", "4301", &ctx));
        assert!(!cfg.matches(&conj(0.002), "all", "99999", &ctx));
        assert_eq!(
            cfg.search_placeholder(),
            "Search name, satellite1_id, satellite2_id..."
        );
    }
}
