// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{BookingPartner, Destination, DestinationCategory, FeedbackSubmission, Hotel, HotelQuery, HotelSuggestion, Location, Vehicle, VehicleSearchCriteria};
pub use requests::{DestinationListQuery, FeedbackRequest, HotelSearchQuery, VehicleSearchRequest};
pub use responses::{DestinationListResponse, ErrorResponse, FeedbackResponse, HealthResponse, HotelSearchResponse, VehicleSearchResponse};
