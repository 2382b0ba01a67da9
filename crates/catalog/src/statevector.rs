use chrono::Duration;
use scene::{DatasetItem, DatasetKind};

use crate::config::{Category, DatasetConfig, FilterContext, FilterDef, StatRow, count_by_category};
use crate::fragment::{Fragment, date, date_time, or_na};
use crate::style::VisualStyle;

const LEO_CEILING_KM: f64 = 2000.0;
const GEO_FLOOR_KM: f64 = 35000.0;

const FILTERS: &[FilterDef] = &[
    FilterDef::all(),
    FilterDef::new("recent", "Recent (24h)"),
    FilterDef::new("leo", "LEO"),
    FilterDef::new("geo", "GEO"),
];

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Orbit {
    Geo,
    Leo,
    Meo,
}

impl Orbit {
    pub fn of(item: &DatasetItem) -> Self {
        let km = altitude_km(item);
        if km > GEO_FLOOR_KM {
            Orbit::Geo
        } else if km < LEO_CEILING_KM {
            Orbit::Leo
        } else {
            Orbit::Meo
        }
    }
}

impl Category for Orbit {
    const STATS_ORDER: &'static [Self] = &[Orbit::Leo, Orbit::Meo, Orbit::Geo];

    fn style(self) -> VisualStyle {
        match self {
            Orbit::Geo => VisualStyle::new(0x9c27b0, 8.0, "geo-satellite"),
            Orbit::Leo => VisualStyle::new(0x00bcd4, 6.0, "leo-satellite"),
            Orbit::Meo => VisualStyle::new(0xff5722, 7.0, "meo-satellite"),
        }
    }

    fn stat_label(self) -> &'static str {
        match self {
            Orbit::Leo => "LEO (<2000km)",
            Orbit::Meo => "MEO (2000-35000km)",
            Orbit::Geo => "GEO (>35000km)",
        }
    }
}

/// `altitude_km` when present, else the point's third coordinate in meters,
/// else zero.
pub fn altitude_km(item: &DatasetItem) -> f64 {
    item.properties
        .number("altitude_km")
        .or_else(|| {
            item.point
                .alt_m
                .map(|m| m / 1000.0)
                .filter(|km| *km != 0.0 && !km.is_nan())
        })
        .unwrap_or(0.0)
}

fn is_recent(item: &DatasetItem, ctx: &FilterContext) -> bool {
    item.properties
        .timestamp("epoch")
        .is_some_and(|epoch| epoch > ctx.now - Duration::hours(24))
}

fn title(item: &DatasetItem) -> String {
    item.properties
        .first_display(&["name", "satellite_id"])
        .unwrap_or_else(|| "Satellite".to_string())
}

/// Position/velocity snapshots, classified by orbit regime.
#[derive(Debug, Default, Copy, Clone)]
pub struct StateVector;

impl DatasetConfig for StateVector {
    fn kind(&self) -> DatasetKind {
        DatasetKind::StateVector
    }

    fn title(&self) -> &'static str {
        "StateVector Data"
    }

    fn search_fields(&self) -> &'static [&'static str] {
        &["name", "satellite_id", "epoch"]
    }

    fn filters(&self) -> &'static [FilterDef] {
        FILTERS
    }

    fn classify(&self, item: &DatasetItem) -> VisualStyle {
        Orbit::of(item).style()
    }

    fn filter_matches(&self, item: &DatasetItem, filter_key: &str, ctx: &FilterContext) -> bool {
        match filter_key {
            "recent" => is_recent(item, ctx),
            "leo" => altitude_km(item) < LEO_CEILING_KM,
            "geo" => altitude_km(item) > GEO_FLOOR_KM,
            _ => true,
        }
    }

    fn compute_stats(&self, items: &[DatasetItem]) -> Vec<StatRow> {
        count_by_category(items, Orbit::of)
    }

    fn render_list_entry(&self, item: &DatasetItem) -> Fragment {
        let props = &item.properties;
        Fragment::new(title(item))
            .row("ID", or_na(props.display("satellite_id")))
            .row("Alt", format!("{:.1}km", altitude_km(item)))
            .row("Epoch", date(props.timestamp("epoch")))
    }

    fn render_detail(&self, item: &DatasetItem) -> Fragment {
        let props = &item.properties;
        Fragment::new(title(item))
            .row("ID", or_na(props.display("satellite_id")))
            .row("Altitude", format!("{:.1}km", altitude_km(item)))
            .row("Epoch", date_time(props.timestamp("epoch")))
            .row(
                "Velocity",
                format!("{} km/s", or_na(props.display("velocity_kms"))),
            )
    }
}
