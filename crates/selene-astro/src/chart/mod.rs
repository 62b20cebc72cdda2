//! Birth chart resolution and the degraded sun-sign path.

pub mod fallback;
pub mod resolver;
pub mod types;

pub use fallback::sun_sign_fallback;
pub use resolver::{fetch_birth_chart, BirthChartResolver, ResolveError};
pub use types::{BirthInput, ChartError, ChartResult};
