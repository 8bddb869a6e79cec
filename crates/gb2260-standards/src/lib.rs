#![deny(unsafe_code)]

//! Dataset registry, sources and ingestion for GB/T 2260 division
//! data.
//!
//! Division data arrives pre-generated: per source (`gb`, `stats`,
//! `mca`, plus the combined `curated`), a list of revisions and one
//! TSV table per revision. This crate locates that data through an
//! explicit [`DivisionRegistry`] and binds it into
//! [`gb2260_model::Revision`] snapshots.

pub mod curated;
pub mod error;
pub mod facade;
pub mod loaders;
pub mod manifest;
pub mod registry;
pub mod tsv;

pub use crate::curated::{CURATED_PRECEDENCE, CURATED_SOURCE, CuratedProvider};
pub use crate::error::StandardsError;
pub use crate::facade::Gb2260;
pub use crate::loaders::{default_data_root, registry_from_data_dir};
pub use crate::manifest::Manifest;
pub use crate::registry::{DatasetProvider, DivisionRegistry, MemoryProvider, Source};
pub use crate::tsv::TsvProvider;
