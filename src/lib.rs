//! mandatory-tags - Terraform default_tags compliance checker
//!
//! A library for checking that the AWS providers declared in a namespace's
//! `resources/main.tf` on a git branch carry the mandatory `default_tags`.

pub mod check;
pub mod compliance;
pub mod error;
pub mod output;
pub mod source;
pub mod terraform;

pub use check::{BASE_PATH, Report, Target, check_target, resolve_target, resource_path};
pub use compliance::{ComplianceError, REQUIRED_TAGS, Violation, missing_tags};
pub use error::CheckError;
pub use source::{GitResolver, MemoryResolver, SourceError, SourceResolver};
pub use terraform::{ProviderRecord, ScannedProvider, check_providers, scan_providers};
