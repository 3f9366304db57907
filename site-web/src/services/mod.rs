//! Browser-side implementations of the core's capabilities

pub mod dom;
pub mod timer;

pub use dom::DomSectionLocator;
pub use timer::GlooScheduler;
