pub mod facility;
pub mod requests;

pub use facility::{Coordinate, Facility, FacilityId, NewFacility, QueryPoint, RankedFacility};
pub use requests::{FindNearestRequest, NumericInput, RegisterRequest};
