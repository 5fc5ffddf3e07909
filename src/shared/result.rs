/// Crate-wide Result alias; typed failures are `NetmapError` values wrapped in anyhow.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
