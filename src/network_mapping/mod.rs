/// Network mapping bounded context
///
/// Contains the resource model (domain) and the two renderers (services)
/// that turn a registry into graph primitives.
pub mod domain;
pub mod services;
