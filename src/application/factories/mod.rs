mod inventory_factory;
mod presenter_factory;

pub use inventory_factory::{InventoryFactory, InventoryType};
pub use presenter_factory::{PresenterFactory, PresenterType, ARTIFACT_EXTENSION};
