mod actor;
mod handle;
pub mod models;

pub use handle::AvailabilityHandle;
pub use models::SessionRecord;
