// Common traits and types
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod bucket_size;
mod client_config;
mod error;
mod human_size;
mod object_lister;
mod size_unit;

pub use bucket_size::*;
pub use client_config::*;
pub use error::*;
pub use human_size::*;
pub use object_lister::*;
pub use size_unit::*;
