mod controller;
mod progress;

// Public API of the section subsystem.
pub use crate::error::SectionError;
pub use controller::{SectionController, SectionStep};
pub use progress::{SectionProgress, TagProgress};
