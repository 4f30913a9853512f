//! ImanPath Application Orchestration Layer
//!
//! This crate contains business logic use cases and runtime orchestration
//! for the app-mode navigation flow and the intervention session flow.

pub mod usecases;

pub use usecases::intervention::InterventionOrchestrator;
pub use usecases::navigation::{NavigationError, NavigationOrchestrator};
