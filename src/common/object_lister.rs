// ObjectLister trait and the page types it returns
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use async_trait::async_trait;
use super::Result;
use tracing::debug;

/// Opaque token handed back to the backend to request the next page.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ContinuationToken(String);

impl ContinuationToken {
    /// Wrap a token returned by a backend.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Returns the token as it should be sent back to the backend.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Metadata for one object in a listing.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ObjectDescriptor {
    /// Object key. Only used for diagnostics.
    pub key: Option<String>,

    /// Size of the object in bytes, as reported by the backend.
    pub size: Option<i64>,
}

#[cfg(test)]
impl ObjectDescriptor {
    /// Returns a descriptor for `key` with the given `size`.
    pub fn new(key: impl Into<String>, size: i64) -> Self {
        Self {
            key:  Some(key.into()),
            size: Some(size),
        }
    }
}

/// One page of an object listing.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ObjectPage {
    /// Objects on this page, in the order the backend returned them.
    pub objects: Vec<ObjectDescriptor>,

    /// Token for the following page. `None` on the final page.
    pub next: Option<ContinuationToken>,
}

/// `ObjectLister` is the capability to list the objects in a bucket one page
/// at a time.
///
/// Implementations should return the first page when `token` is `None` and
/// otherwise the page following the one that produced `token`.
#[async_trait]
pub trait ObjectLister {
    /// Returns a single page of object descriptors for `bucket`.
    async fn list_page(
        &self,
        bucket: &str,
        token:  Option<&ContinuationToken>,
    ) -> Result<ObjectPage>;
}

// Where the page sequence is up to.
#[derive(Debug)]
enum State {
    Start,
    Continue(ContinuationToken),
    Done,
}

/// A lazy, finite sequence of the pages of a bucket listing.
///
/// Pages are fetched one at a time as `next` is called, each request carrying
/// the token from the previous page. Once the final page or an error has been
/// returned the sequence is exhausted and can't be restarted.
pub struct Pages<'a, L: ?Sized> {
    lister: &'a L,
    bucket: &'a str,
    state:  State,
}

impl<'a, L> Pages<'a, L>
where
    L: ObjectLister + ?Sized + Sync,
{
    /// Returns a new page sequence over `bucket`.
    pub fn new(lister: &'a L, bucket: &'a str) -> Self {
        Self {
            lister: lister,
            bucket: bucket,
            state:  State::Start,
        }
    }

    /// Fetch the next page, or `None` if the sequence is exhausted.
    pub async fn next(&mut self) -> Option<Result<ObjectPage>> {
        let token = match std::mem::replace(&mut self.state, State::Done) {
            State::Start           => None,
            State::Continue(token) => Some(token),
            State::Done            => return None,
        };

        debug!(
            "next: Requesting page of '{}' with token {:?}",
            self.bucket,
            token,
        );

        let page = match self.lister.list_page(self.bucket, token.as_ref()).await {
            Ok(page) => page,
            Err(e)   => return Some(Err(e)),
        };

        if let Some(next) = &page.next {
            self.state = State::Continue(next.clone());
        }

        Some(Ok(page))
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::common::Error;
    use pretty_assertions::assert_eq;
    use std::sync::Mutex;

    /// An in-memory `ObjectLister`.
    ///
    /// Page `n` is served in response to the token `page-n`, with the first
    /// page being served when there is no token. A `None` page fails with a
    /// listing error. Every token received is recorded.
    pub(crate) struct MockLister {
        pages:    Vec<Option<Vec<ObjectDescriptor>>>,
        received: Mutex<Vec<Option<String>>>,
    }

    impl MockLister {
        pub(crate) fn new(pages: Vec<Option<Vec<ObjectDescriptor>>>) -> Self {
            Self {
                pages:    pages,
                received: Mutex::new(Vec::new()),
            }
        }

        // Convenience for listings that never fail.
        pub(crate) fn with_sizes(pages: Vec<Vec<i64>>) -> Self {
            let pages = pages
                .into_iter()
                .map(|sizes| {
                    let objects = sizes
                        .into_iter()
                        .enumerate()
                        .map(|(i, size)| ObjectDescriptor::new(format!("obj-{i}"), size))
                        .collect();

                    Some(objects)
                })
                .collect();

            Self::new(pages)
        }

        pub(crate) fn received(&self) -> Vec<Option<String>> {
            self.received.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ObjectLister for MockLister {
        async fn list_page(
            &self,
            bucket: &str,
            token:  Option<&ContinuationToken>,
        ) -> Result<ObjectPage> {
            self.received
                .lock()
                .unwrap()
                .push(token.map(|t| t.as_str().to_owned()));

            let index = match token {
                None    => 0,
                Some(t) => {
                    t.as_str()
                        .trim_start_matches("page-")
                        .parse::<usize>()
                        .unwrap()
                },
            };

            let objects = match &self.pages[index] {
                Some(objects) => objects.clone(),
                None          => {
                    return Err(Error::Listing {
                        bucket:  bucket.into(),
                        message: "connection reset".into(),
                    });
                },
            };

            let next = if index + 1 < self.pages.len() {
                Some(ContinuationToken::new(format!("page-{}", index + 1)))
            }
            else {
                None
            };

            Ok(ObjectPage {
                objects: objects,
                next:    next,
            })
        }
    }

    #[tokio::test]
    async fn test_pages_follow_tokens() {
        let lister = MockLister::with_sizes(vec![
            vec![1],
            vec![2],
            vec![3],
        ]);

        let mut pages = Pages::new(&lister, "test-bucket");
        let mut count = 0;

        while let Some(page) = pages.next().await {
            page.unwrap();
            count += 1;
        }

        let expected = vec![
            None,
            Some("page-1".to_string()),
            Some("page-2".to_string()),
        ];

        assert_eq!(count, 3);
        assert_eq!(lister.received(), expected);
    }

    #[tokio::test]
    async fn test_pages_exhausted_after_last_page() {
        let lister    = MockLister::with_sizes(vec![vec![10]]);
        let mut pages = Pages::new(&lister, "test-bucket");

        assert!(pages.next().await.is_some());
        assert!(pages.next().await.is_none());
        assert!(pages.next().await.is_none());
        assert_eq!(lister.received().len(), 1);
    }

    #[tokio::test]
    async fn test_pages_exhausted_after_error() {
        let lister = MockLister::new(vec![
            None,
            Some(vec![ObjectDescriptor::new("a", 1)]),
        ]);

        let mut pages = Pages::new(&lister, "test-bucket");

        let first = pages.next().await.unwrap();

        assert!(matches!(first, Err(Error::Listing { .. })));
        assert!(pages.next().await.is_none());
        assert_eq!(lister.received().len(), 1);
    }
}
