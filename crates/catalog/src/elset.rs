use scene::{DatasetItem, DatasetKind};

use crate::config::{Category, DatasetConfig, FilterContext, FilterDef, StatRow, count_by_category};
use crate::fragment::{Fragment, date, date_time, or_na};
use crate::style::VisualStyle;

const FILTERS: &[FilterDef] = &[
    FilterDef::all(),
    FilterDef::new("active", "Active"),
    FilterDef::new("inactive", "Inactive"),
];

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Status {
    Active,
    Inactive,
}

impl Status {
    pub fn of(item: &DatasetItem) -> Self {
        match item.properties.text("status") {
            Some(s) if s.eq_ignore_ascii_case("active") => Status::Active,
            _ => Status::Inactive,
        }
    }
}

impl Category for Status {
    const STATS_ORDER: &'static [Self] = &[Status::Active, Status::Inactive];

    fn style(self) -> VisualStyle {
        match self {
            Status::Active => VisualStyle::new(0x2196f3, 8.0, "active-satellite"),
            Status::Inactive => VisualStyle::new(0x757575, 6.0, "inactive-satellite"),
        }
    }

    fn stat_label(self) -> &'static str {
        match self {
            Status::Active => "Active Satellites",
            Status::Inactive => "Inactive Satellites",
        }
    }
}

fn title(item: &DatasetItem) -> String {
    item.properties
        .first_display(&["object_name", "name"])
        .unwrap_or_else(|| "Satellite".to_string())
}

/// Element sets: orbital parameters per tracked satellite.
#[derive(Debug, Default, Copy, Clone)]
pub struct Elset;

impl DatasetConfig for Elset {
    fn kind(&self) -> DatasetKind {
        DatasetKind::Elset
    }

    fn title(&self) -> &'static str {
        "ELSET Data"
    }

    fn search_fields(&self) -> &'static [&'static str] {
        &["name", "satellite_id", "object_name"]
    }

    fn filters(&self) -> &'static [FilterDef] {
        FILTERS
    }

    fn classify(&self, item: &DatasetItem) -> VisualStyle {
        Status::of(item).style()
    }

    fn filter_matches(&self, item: &DatasetItem, filter_key: &str, _ctx: &FilterContext) -> bool {
        match filter_key {
            "active" => Status::of(item) == Status::Active,
            "inactive" => Status::of(item) == Status::Inactive,
            _ => true,
        }
    }

    fn compute_stats(&self, items: &[DatasetItem]) -> Vec<StatRow> {
        count_by_category(items, Status::of)
    }

    fn render_list_entry(&self, item: &DatasetItem) -> Fragment {
        let props = &item.properties;
        Fragment::new(title(item))
            .row("ID", or_na(props.display("satellite_id")))
            .row(
                "Status",
                props.display("status").unwrap_or_else(|| "Unknown".to_string()),
            )
            .row("Epoch", date(props.timestamp("epoch")))
    }

    fn render_detail(&self, item: &DatasetItem) -> Fragment {
        let props = &item.properties;
        Fragment::new(title(item))
            .row("ID", or_na(props.display("satellite_id")))
            .row(
                "Status",
                props.display("status").unwrap_or_else(|| "Unknown".to_string()),
            )
            .row("Epoch", date_time(props.timestamp("epoch")))
            .row(
                "Mean Motion",
                format!("{}/day", or_na(props.display("mean_motion"))),
            )
    }
}
