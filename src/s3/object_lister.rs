// Implement the ObjectLister trait for the s3::Client
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use async_trait::async_trait;
use aws_smithy_types::error::display::DisplayErrorContext;
use crate::common::{
    ContinuationToken,
    Error,
    ObjectLister,
    ObjectPage,
    Result,
};
use super::client::Client;
use tracing::debug;

#[async_trait]
impl ObjectLister for Client {
    /// Return one page of `ListObjectsV2` output for `bucket`.
    async fn list_page(
        &self,
        bucket: &str,
        token:  Option<&ContinuationToken>,
    ) -> Result<ObjectPage> {
        debug!("list_page: '{}' with token {:?}", bucket, token);

        let output = self.client
            .list_objects_v2()
            .bucket(bucket)
            .set_continuation_token(token.map(|t| t.as_str().to_owned()))
            .send()
            .await
            .map_err(|e| {
                Error::Listing {
                    bucket:  bucket.into(),
                    message: DisplayErrorContext(&e).to_string(),
                }
            })?;

        let page = ObjectPage::try_from(output).map_err(|reason| {
            Error::MalformedPage {
                bucket: bucket.into(),
                reason: reason.into(),
            }
        })?;

        debug!(
            "list_page: '{}' returned {} objects, next token {:?}",
            bucket,
            page.objects.len(),
            page.next,
        );

        Ok(page)
    }
}
