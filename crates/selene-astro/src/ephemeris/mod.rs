//! Time scales, chart angles, and planetary position providers.

pub mod adapter;
pub mod angles;
pub mod time;
pub mod types;

pub use adapter::{AnalyticAdapter, EphemerisError, PositionProvider};
pub use angles::{ascendant, mean_obliquity};
pub use time::{julian_day, local_sidereal_time, normalize_degrees};
pub use types::{BodyPositions, GeoLocation};
