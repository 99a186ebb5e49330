//! Pattern-level extraction of AWS provider blocks from Terraform source.
//!
//! This is not an HCL parser: blocks are found by brace counting and tag
//! keys by scanning the flat `default_tags.tags` map.

mod block;
mod provider;
mod tags;

pub use block::extract_block;
pub use provider::{
    DEFAULT_PROVIDER_NAME, ProviderRecord, ScannedProvider, check_providers, scan_providers,
};
pub use tags::extract_tags;
