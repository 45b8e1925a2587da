// Implements the S3 Client
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use aws_config::retry::RetryConfig;
use aws_config::BehaviorVersion;
use aws_credential_types::provider::ProvideCredentials;
use aws_sdk_s3::client::Client as S3Client;
use aws_smithy_types::error::display::DisplayErrorContext;
use aws_types::region::Region;
use aws_types::SdkConfig;
use crate::common::{
    ClientConfig,
    Error,
    Result,
};
use tracing::debug;

/// The S3 `Client`.
pub struct Client {
    /// The AWS SDK `S3Client`.
    pub client: S3Client,

    /// Name of the region the client was created in.
    pub region: String,
}

impl Client {
    /// Return a new S3 `Client` with the given `ClientConfig`.
    ///
    /// The AWS configuration is resolved eagerly, so a missing region or
    /// unobtainable credentials are reported here as `Error::Config` rather
    /// than on the first S3 request.
    pub async fn new(config: &ClientConfig) -> Result<Self> {
        let sdk_config = load_sdk_config(config).await;

        let region = sdk_config
            .region()
            .map(|region| region.to_string())
            .ok_or_else(|| Error::Config("no AWS region could be resolved".into()))?;

        check_credentials(&sdk_config).await?;

        debug!("new: Creating S3Client in region '{}'", region);

        let client = S3Client::new(&sdk_config);

        Ok(Self {
            client: client,
            region: region,
        })
    }
}

// Load the AWS configuration, honouring any profile or region override.
// Retries are disabled, a failed request should surface immediately.
async fn load_sdk_config(config: &ClientConfig) -> SdkConfig {
    debug!(
        "load_sdk_config: profile {:?}, region {:?}",
        config.profile,
        config.region,
    );

    let mut loader = aws_config::defaults(BehaviorVersion::latest())
        .retry_config(RetryConfig::disabled());

    if let Some(profile) = &config.profile {
        loader = loader.profile_name(profile);
    }

    if let Some(region) = &config.region {
        loader = loader.region(Region::new(region.to_owned()));
    }

    loader.load().await
}

// Credentials are otherwise loaded lazily by the SDK on the first request.
async fn check_credentials(sdk_config: &SdkConfig) -> Result<()> {
    let provider = sdk_config
        .credentials_provider()
        .ok_or_else(|| Error::Config("no AWS credentials provider configured".into()))?;

    provider
        .provide_credentials()
        .await
        .map_err(|e| {
            Error::Config(format!(
                "unable to load AWS credentials: {}",
                DisplayErrorContext(&e),
            ))
        })?;

    debug!("check_credentials: Credentials resolved");

    Ok(())
}
