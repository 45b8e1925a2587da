// Easily handle converting from a ListObjectsV2Output into our own ObjectPage
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use aws_sdk_s3::operation::list_objects_v2::ListObjectsV2Output;
use crate::common::{
    ContinuationToken,
    ObjectDescriptor,
    ObjectPage,
};

/// Implement a conversion from `ListObjectsV2Output` to `ObjectPage`.
///
/// This fails if the output claims to be truncated without handing us a
/// token to continue from.
impl TryFrom<ListObjectsV2Output> for ObjectPage {
    type Error = &'static str;

    fn try_from(output: ListObjectsV2Output) -> Result<Self, Self::Error> {
        let objects = output
            .contents()
            .iter()
            .map(|o| {
                ObjectDescriptor {
                    key:  o.key().map(ToOwned::to_owned),
                    size: o.size(),
                }
            })
            .collect();

        // If the output was truncated (Some(true)), we should have a
        // next_continuation_token.
        // If it wasn't, (Some(false) | None) this is the final page.
        let next = match output.is_truncated() {
            Some(true) => {
                let token = output
                    .next_continuation_token()
                    .ok_or("truncated listing without a continuation token")?;

                Some(ContinuationToken::new(token))
            },
            _ => None,
        };

        Ok(ObjectPage {
            objects: objects,
            next:    next,
        })
    }
}
