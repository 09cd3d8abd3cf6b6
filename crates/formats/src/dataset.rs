use serde::{Deserialize, Serialize};

/// One city's economic metrics.
///
/// Fields absent from the payload default to `0.0`; zero or non-finite
/// means "no data" and is excluded from domains and marker sets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityRecord {
    pub city: String,
    pub country: String,
    #[serde(default)]
    pub salary: f64,
    #[serde(default)]
    pub estimated_monthly_cost_single: f64,
    #[serde(default)]
    pub apt_1bed_city_center: f64,
    #[serde(default)]
    pub apt_1bed_outside_center: f64,
    #[serde(default)]
    pub meal_inexpensive: f64,
    #[serde(default)]
    pub pass_monthly: f64,
    #[serde(default)]
    pub internet: f64,
}

/// Country-level aggregates. Only a subset of metrics aggregates here;
/// rent and food have no country-level value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryRecord {
    pub country: String,
    #[serde(default)]
    pub avg_cost: f64,
    #[serde(default)]
    pub avg_salary: f64,
}

/// Whether a metric value carries data.
pub fn has_value(v: f64) -> bool {
    v.is_finite() && v > 0.0
}

#[derive(Debug)]
pub enum DatasetError {
    Parse(String),
}

impl std::fmt::Display for DatasetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DatasetError::Parse(reason) => write!(f, "dataset parse error: {reason}"),
        }
    }
}

impl std::error::Error for DatasetError {}

pub fn cities_from_json_str(payload: &str) -> Result<Vec<CityRecord>, DatasetError> {
    serde_json::from_str(payload).map_err(|e| DatasetError::Parse(e.to_string()))
}

pub fn countries_from_json_str(payload: &str) -> Result<Vec<CountryRecord>, DatasetError> {
    serde_json::from_str(payload).map_err(|e| DatasetError::Parse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::{CityRecord, cities_from_json_str, countries_from_json_str, has_value};
    use pretty_assertions::assert_eq;

    #[test]
    fn missing_fields_default_to_zero() {
        let payload = r#"[{"city": "Lisbon", "country": "Portugal", "salary": 1200.0}]"#;
        let cities = cities_from_json_str(payload).expect("decode");
        assert_eq!(
            cities,
            vec![CityRecord {
                city: "Lisbon".to_string(),
                country: "Portugal".to_string(),
                salary: 1200.0,
                estimated_monthly_cost_single: 0.0,
                apt_1bed_city_center: 0.0,
                apt_1bed_outside_center: 0.0,
                meal_inexpensive: 0.0,
                pass_monthly: 0.0,
                internet: 0.0,
            }]
        );
        assert!(!has_value(cities[0].meal_inexpensive));
    }

    #[test]
    fn country_aggregates_decode() {
        let payload = r#"[{"country": "Portugal", "avg_cost": 1400.0, "avg_salary": 1300.0}]"#;
        let countries = countries_from_json_str(payload).expect("decode");
        assert_eq!(countries.len(), 1);
        assert_eq!(countries[0].avg_cost, 1400.0);
    }

    #[test]
    fn has_value_rejects_zero_and_non_finite() {
        assert!(has_value(1.0));
        assert!(!has_value(0.0));
        assert!(!has_value(-5.0));
        assert!(!has_value(f64::NAN));
        assert!(!has_value(f64::INFINITY));
    }

    #[test]
    fn malformed_payload_is_an_error() {
        assert!(cities_from_json_str("{not json").is_err());
        assert!(countries_from_json_str("[{\"no_country\": 1}]").is_err());
    }
}
