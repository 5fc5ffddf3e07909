/// Use cases module containing application business logic orchestration
mod find_relevant;
mod generate_map;
mod load_inventory;

pub use find_relevant::FindRelevantResourcesUseCase;
pub use generate_map::GenerateMapUseCase;
pub use load_inventory::LoadInventoryUseCase;
