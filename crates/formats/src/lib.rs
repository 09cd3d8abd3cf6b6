pub mod coordinates;
pub mod dataset;
pub mod topology;

pub use coordinates::CoordinateIndex;
pub use dataset::{CityRecord, CountryRecord, DatasetError, has_value};
pub use topology::{CountryShape, TopologyError, WorldTopology};
