// ClientConfig
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use super::SizeUnit;

/// Client configuration.
///
/// This is built once from the command line and handed to everything that
/// needs it.
#[derive(Debug)]
pub struct ClientConfig {
    /// The bucket name that the client should report the size of.
    pub bucket_name: String,

    /// The shared config profile to resolve credentials and region from.
    ///
    /// If this isn't given, the default AWS provider chains are used.
    pub profile: Option<String>,

    /// The region that our AWS client should be created in.
    ///
    /// If this isn't given, the region is resolved from the environment or
    /// the selected profile.
    pub region: Option<String>,

    /// How the total size should be displayed.
    pub unit: SizeUnit,
}

impl ClientConfig {
    /// Returns a `ClientConfig` for `bucket_name` that relies entirely on the
    /// default AWS configuration and reports sizes in bytes.
    ///
    /// ```rust
    /// ClientConfig {
    ///     bucket_name: bucket_name.into(),
    ///     profile:     None,
    ///     region:      None,
    ///     unit:        SizeUnit::Bytes,
    /// }
    /// ```
    pub fn new(bucket_name: impl Into<String>) -> Self {
        Self {
            bucket_name: bucket_name.into(),
            profile:     None,
            region:      None,
            unit:        SizeUnit::Bytes,
        }
    }
}
