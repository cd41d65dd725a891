//! Go client backend for the oag generator.
//!
//! Decides, for one generation run, which artifacts a Go API client
//! consists of and where each one lands: option table, cross-option
//! validation, the artifact catalog with its conditional rules, and the
//! Go-specific path layout. Rendering and file writes happen elsewhere.

mod generator;
pub mod naming;
pub mod options;
pub mod paths;
pub mod planner;
pub mod validate;

pub use generator::GoCodegen;
pub use oag_codegen::ClientCodegen;
