// Imports all of the components needed for s3::client
#![forbid(unsafe_code)]
#![deny(missing_docs)]

/// S3 `Client`.
mod client;

/// Implementation of the `ObjectLister` trait for our S3 `Client`.
mod object_lister;

/// Conversion from `ListObjectsV2Output` into our `ObjectPage`.
mod object_page;

pub use client::*;
