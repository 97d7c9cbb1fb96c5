pub mod allocator;
pub mod availability;
pub mod catalog;
pub mod types;

pub use allocator::generate_roster;
pub use availability::AvailabilityIndex;
pub use catalog::{default_catalog, load_catalog};
pub use types::{Assignment, Mass, MassKind};
