/// Ports layer - Interfaces for hexagonal architecture
///
/// The core only depends on these traits; adapters implement them.
pub mod outbound;
