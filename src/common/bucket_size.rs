// Sums the size of every object in a bucket
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use super::{
    Error,
    ObjectDescriptor,
    ObjectLister,
    Pages,
    Result,
};
use std::future::Future;
use tracing::debug;

/// Returns the total size in bytes of all objects in `bucket`.
///
/// Pages are requested from `lister` sequentially until the listing is
/// exhausted. The first error, whether from the lister or from an object
/// without a usable size, aborts the listing and no partial total is
/// returned.
pub async fn compute_total_size<L>(lister: &L, bucket: &str) -> Result<u64>
where
    L: ObjectLister + ?Sized + Sync,
{
    debug!("compute_total_size: Listing '{}'", bucket);

    let mut pages = Pages::new(lister, bucket);
    let mut total: u64 = 0;

    while let Some(page) = pages.next().await {
        let page = page?;

        debug!(
            "compute_total_size: {} objects in page of '{}'",
            page.objects.len(),
            bucket,
        );

        for object in &page.objects {
            let size = object_size(bucket, object)?;

            total = total
                .checked_add(size)
                .ok_or_else(|| Error::SizeOverflow(bucket.into()))?;
        }
    }

    debug!("compute_total_size: Size of '{}' is '{}'", bucket, total);

    Ok(total)
}

/// Like `compute_total_size`, but gives up as soon as `stop` completes.
///
/// The in-flight page request is dropped, no further pages are requested and
/// `Error::Interrupted` is returned in place of a total.
pub async fn compute_total_size_until<L, F>(
    lister: &L,
    bucket: &str,
    stop:   F,
) -> Result<u64>
where
    L: ObjectLister + ?Sized + Sync,
    F: Future<Output = ()>,
{
    tokio::select! {
        size = compute_total_size(lister, bucket) => size,
        () = stop => {
            debug!("compute_total_size_until: Stopped sizing '{}'", bucket);

            Err(Error::Interrupted)
        },
    }
}

// Size of a single object, which must be present and non-negative.
fn object_size(bucket: &str, object: &ObjectDescriptor) -> Result<u64> {
    let malformed = |reason: String| Error::MalformedDescriptor {
        bucket: bucket.into(),
        key:    object.key.clone().unwrap_or_else(|| "<unknown>".into()),
        reason: reason,
    };

    let size = object.size.ok_or_else(|| malformed("missing size".into()))?;

    u64::try_from(size).map_err(|_| malformed(format!("negative size {size}")))
}
