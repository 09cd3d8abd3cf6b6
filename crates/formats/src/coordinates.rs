use std::collections::BTreeMap;

use foundation::math::GeoPoint;

/// Static city name -> coordinate lookup.
///
/// Keyed in a `BTreeMap` for stable traversal order. A lookup miss silently
/// excludes the city from the marker set; it never fails a draw.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CoordinateIndex {
    by_city: BTreeMap<String, GeoPoint>,
}

impl CoordinateIndex {
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, GeoPoint)>,
        S: Into<String>,
    {
        let mut by_city = BTreeMap::new();
        for (city, point) in entries {
            by_city.insert(city.into(), point);
        }
        Self { by_city }
    }

    /// The bundled table covering the cities of the stock dataset.
    pub fn builtin() -> Self {
        Self::from_entries(
            BUILTIN
                .iter()
                .map(|&(city, lon, lat)| (city, GeoPoint::new(lon, lat))),
        )
    }

    pub fn get(&self, city: &str) -> Option<GeoPoint> {
        self.by_city.get(city).copied()
    }

    pub fn len(&self) -> usize {
        self.by_city.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_city.is_empty()
    }
}

// (city, lon_deg, lat_deg)
const BUILTIN: &[(&str, f64, f64)] = &[
    ("Amsterdam", 4.9041, 52.3676),
    ("Athens", 23.7275, 37.9838),
    ("Auckland", 174.7633, -36.8485),
    ("Bangkok", 100.5018, 13.7563),
    ("Barcelona", 2.1734, 41.3851),
    ("Berlin", 13.4050, 52.5200),
    ("Bogota", -74.0721, 4.7110),
    ("Boston", -71.0589, 42.3601),
    ("Brussels", 4.3517, 50.8503),
    ("Budapest", 19.0402, 47.4979),
    ("Buenos Aires", -58.3816, -34.6037),
    ("Cairo", 31.2357, 30.0444),
    ("Cape Town", 18.4241, -33.9249),
    ("Chicago", -87.6298, 41.8781),
    ("Copenhagen", 12.5683, 55.6761),
    ("Dubai", 55.2708, 25.2048),
    ("Dublin", -6.2603, 53.3498),
    ("Hong Kong", 114.1694, 22.3193),
    ("Istanbul", 28.9784, 41.0082),
    ("Jakarta", 106.8456, -6.2088),
    ("Lisbon", -9.1393, 38.7223),
    ("London", -0.1278, 51.5074),
    ("Los Angeles", -118.2437, 34.0522),
    ("Madrid", -3.7038, 40.4168),
    ("Melbourne", 144.9631, -37.8136),
    ("Mexico City", -99.1332, 19.4326),
    ("Montreal", -73.5673, 45.5017),
    ("Mumbai", 72.8777, 19.0760),
    ("Nairobi", 36.8219, -1.2921),
    ("New York", -74.0060, 40.7128),
    ("Oslo", 10.7522, 59.9139),
    ("Paris", 2.3522, 48.8566),
    ("Prague", 14.4378, 50.0755),
    ("Rio de Janeiro", -43.1729, -22.9068),
    ("Rome", 12.4964, 41.9028),
    ("San Francisco", -122.4194, 37.7749),
    ("Sao Paulo", -46.6333, -23.5505),
    ("Seoul", 126.9780, 37.5665),
    ("Singapore", 103.8198, 1.3521),
    ("Stockholm", 18.0686, 59.3293),
    ("Sydney", 151.2093, -33.8688),
    ("Taipei", 121.5654, 25.0330),
    ("Tallinn", 24.7536, 59.4370),
    ("Tokyo", 139.6503, 35.6762),
    ("Toronto", -79.3832, 43.6532),
    ("Vancouver", -123.1207, 49.2827),
    ("Vienna", 16.3738, 48.2082),
    ("Warsaw", 21.0122, 52.2297),
    ("Zurich", 8.5417, 47.3769),
];
