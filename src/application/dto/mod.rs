/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod map_request;
mod map_response;
mod relevant_resource;

pub use map_request::{IterateBy, MapRequest, MapView};
pub use map_response::{MapArtifact, MapResponse};
pub use relevant_resource::RelevantResource;
