//! Shared artifact-planning layer for the oag client generator.
//!
//! This crate holds everything a language backend needs that is not
//! specific to any one language:
//!
//! - [`options`] - Option declarations, resolution, and the immutable
//!   [`ConfigState`]
//! - [`artifact`] - Artifact descriptors and resolved output paths
//! - [`plan`] - The planned artifact set plus the template context
//! - [`language`] - The [`ClientCodegen`] trait implemented by each backend
//! - [`error`] - User-facing configuration diagnostics

pub mod artifact;
pub mod error;
pub mod language;
pub mod options;
pub mod plan;

pub use artifact::{ArtifactKind, ArtifactSpec, ResolvedPath, path_table};
pub use error::{Error, Result};
pub use language::{ClientCodegen, plan_paths};
pub use options::{ConfigState, OptionKind, OptionRegistry, OptionSpec, OptionValue, RawOptions};
pub use plan::{EntitySet, Plan, TemplateContext};
