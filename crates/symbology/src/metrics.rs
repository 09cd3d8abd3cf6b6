use formats::dataset::{CityRecord, CountryRecord};

use crate::schemes::SchemeId;

/// The four selectable metrics, in catalog (selector) order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum MetricKey {
    #[default]
    Cost,
    Salary,
    Rent,
    Food,
}

impl MetricKey {
    pub const ALL: [MetricKey; 4] = [
        MetricKey::Cost,
        MetricKey::Salary,
        MetricKey::Rent,
        MetricKey::Food,
    ];
}

/// Fixed configuration for one metric.
///
/// `reversed` marks lower-is-better metrics; their color gradient direction
/// flips so economically better values share a visual endpoint with better
/// values on non-reversed metrics. Metrics without a `country_value`
/// accessor render every country fill with the neutral fallback.
#[derive(Copy, Clone)]
pub struct MetricConfig {
    pub key: MetricKey,
    pub label: &'static str,
    pub scheme: SchemeId,
    pub reversed: bool,
    pub city_value: fn(&CityRecord) -> f64,
    pub country_value: Option<fn(&CountryRecord) -> f64>,
}

static CATALOG: [MetricConfig; 4] = [
    MetricConfig {
        key: MetricKey::Cost,
        label: "Avg Monthly Cost ($)",
        scheme: SchemeId::Inferno,
        reversed: true,
        city_value: |c| c.estimated_monthly_cost_single,
        country_value: Some(|c| c.avg_cost),
    },
    MetricConfig {
        key: MetricKey::Salary,
        label: "Avg Monthly Salary ($)",
        scheme: SchemeId::Viridis,
        reversed: false,
        city_value: |c| c.salary,
        country_value: Some(|c| c.avg_salary),
    },
    MetricConfig {
        key: MetricKey::Rent,
        label: "1 Bed Apt Outside Center ($)",
        scheme: SchemeId::Magma,
        reversed: true,
        city_value: |c| c.apt_1bed_outside_center,
        country_value: None,
    },
    MetricConfig {
        key: MetricKey::Food,
        label: "Inexpensive Meal ($)",
        scheme: SchemeId::Spectral,
        reversed: true,
        city_value: |c| c.meal_inexpensive,
        country_value: None,
    },
];

pub fn config(key: MetricKey) -> &'static MetricConfig {
    match key {
        MetricKey::Cost => &CATALOG[0],
        MetricKey::Salary => &CATALOG[1],
        MetricKey::Rent => &CATALOG[2],
        MetricKey::Food => &CATALOG[3],
    }
}
