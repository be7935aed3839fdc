//! Application use cases. Thin state containers over pure rules, wired to
//! collaborators via ports.

pub mod contact_form;
pub mod content_loader;
pub mod section_tracker;

pub use contact_form::ContactFormController;
pub use content_loader::ContentLoader;
pub use section_tracker::SectionTracker;
