pub mod api;
pub mod errors;
pub mod models;
pub mod proximity;
pub mod registration;
pub mod repository;
pub mod utils;
pub mod validation;

pub use errors::ServiceError;
pub use models::{Coordinate, Facility, FacilityId, NewFacility, QueryPoint, RankedFacility};
pub use proximity::ranker::ProximityRanker;
pub use registration::service::RegistrationService;
pub use repository::FacilityRepository;
