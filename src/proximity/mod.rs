pub mod distance;
pub mod limit;
pub mod ranker;

pub use distance::great_circle_distance_km;
pub use limit::clamp_with_default;
pub use ranker::{ProximityRanker, RankedResult};
