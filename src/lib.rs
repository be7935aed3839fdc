//! folio-core: headless interaction core for a single-page portfolio site.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod shared;
pub mod usecases;
