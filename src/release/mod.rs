//! Release availability layer
//!
//! This module looks up the published release of an app in the App Store and
//! classifies it against the version the caller is running.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Lookup    │────▶│   Checker   │────▶│ Comparator  │
//! │   (fetch)   │     │ (classify)  │     │(version cmp)│
//! └─────────────┘     └─────────────┘     └─────────────┘
//!        │
//!        ▼
//! ┌─────────────┐
//! │   iTunes    │
//! │  (reqwest)  │
//! └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`checker`]: Turns a metadata lookup into a classified release result
//! - [`comparator`]: Permissive major/minor/patch version comparison
//! - [`error`]: Error types for lookups and checks
//! - [`itunes`]: iTunes lookup API implementation of [`lookup::ReleaseLookup`]
//! - [`lookup`]: Trait for fetching release metadata from a store
//! - [`types`]: Release metadata and result types

pub mod checker;
pub mod comparator;
pub mod error;
pub mod itunes;
pub mod lookup;
pub mod types;

pub use checker::ReleaseChecker;
pub use comparator::{ComparisonOutcome, UpdateKind, compare, is_new_version_available};
pub use error::{CheckError, LookupError};
pub use itunes::ItunesLookup;
pub use lookup::ReleaseLookup;
pub use types::{ReleaseAvailable, ReleaseMetadata};
