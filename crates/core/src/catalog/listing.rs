//! Paginated walk over the upstream starship collection

use std::collections::HashSet;
use std::sync::Arc;

use shipyard_domain::{Result, ShipyardError, Starship};
use tracing::{debug, info};

use super::ports::StarshipSource;

/// Partial starships and their identifiers, positionally aligned.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Listing {
    pub starships: Vec<Starship>,
    pub ids: Vec<String>,
}

impl Listing {
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// Walks page-numbered listing requests until the last page.
pub struct ListingFetcher {
    source: Arc<dyn StarshipSource>,
    page_size: u32,
}

impl ListingFetcher {
    /// Create a fetcher requesting `page_size` entries per page.
    pub fn new(source: Arc<dyn StarshipSource>, page_size: u32) -> Self {
        Self { source, page_size: page_size.max(1) }
    }

    /// Fetch every page and flatten it into a [`Listing`].
    ///
    /// Entries with an empty `uid` cannot be enriched and are skipped, as is
    /// any `uid` already seen on an earlier entry.
    ///
    /// # Errors
    /// The first failing page aborts the walk; nothing gathered so far is
    /// returned.
    pub async fn list_all(&self) -> Result<Listing> {
        let mut listing = Listing::default();
        let mut seen = HashSet::new();
        let mut page: u32 = 1;

        loop {
            let response = self.source.fetch_page(page, self.page_size).await?;
            debug!(
                page,
                total_pages = response.total_pages,
                entries = response.entries.len(),
                "fetched starship page"
            );

            for entry in response.entries {
                if entry.uid.is_empty() {
                    continue;
                }
                if !seen.insert(entry.uid.clone()) {
                    debug!(id = %entry.uid, page, "skipping duplicate starship id");
                    continue;
                }
                listing.ids.push(entry.uid.clone());
                listing.starships.push(Starship::listed(entry.uid, entry.name, entry.url));
            }

            if page >= response.total_pages {
                break;
            }
            page = page.checked_add(1).ok_or_else(|| {
                ShipyardError::InvalidResponse("page counter overflowed".into())
            })?;
        }

        info!(pages = page, starships = listing.len(), "starship listing complete");
        Ok(listing)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::catalog::ports::{ListedEntry, StarshipDetail, StarshipPage};

    /// Serves fixed pages and records which pages were requested.
    struct PagedSource {
        pages: Vec<Result<StarshipPage>>,
        requested: Mutex<Vec<(u32, u32)>>,
    }

    impl PagedSource {
        fn new(pages: Vec<Result<StarshipPage>>) -> Self {
            Self { pages, requested: Mutex::new(Vec::new()) }
        }

        fn requested(&self) -> Vec<(u32, u32)> {
            self.requested.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl StarshipSource for PagedSource {
        async fn fetch_page(&self, page: u32, limit: u32) -> Result<StarshipPage> {
            self.requested.lock().unwrap().push((page, limit));
            self.pages[(page - 1) as usize].clone()
        }

        async fn fetch_detail(&self, _id: &str) -> Result<StarshipDetail> {
            unreachable!("listing never fetches details")
        }
    }

    fn entry(uid: &str) -> ListedEntry {
        ListedEntry {
            uid: uid.to_string(),
            name: Some(format!("ship {uid}")),
            url: Some(format!("https://www.swapi.tech/api/starships/{uid}")),
        }
    }

    fn page(uids: &[&str], total_pages: u32) -> Result<StarshipPage> {
        Ok(StarshipPage { entries: uids.iter().map(|uid| entry(uid)).collect(), total_pages })
    }

    #[tokio::test]
    async fn single_page_issues_one_request() {
        let source = Arc::new(PagedSource::new(vec![page(&["2", "3"], 1)]));
        let fetcher = ListingFetcher::new(source.clone(), 100);

        let listing = fetcher.list_all().await.unwrap();

        assert_eq!(listing.ids, vec!["2", "3"]);
        assert_eq!(source.requested(), vec![(1, 100)]);
    }

    #[tokio::test]
    async fn zero_total_pages_still_stops_after_first_request() {
        let source = Arc::new(PagedSource::new(vec![page(&[], 0)]));
        let fetcher = ListingFetcher::new(source.clone(), 100);

        let listing = fetcher.list_all().await.unwrap();

        assert!(listing.is_empty());
        assert_eq!(source.requested().len(), 1);
    }

    #[tokio::test]
    async fn walks_every_page_in_order() {
        let source = Arc::new(PagedSource::new(vec![
            page(&["2", "3"], 3),
            page(&["5", "9"], 3),
            page(&["10"], 3),
        ]));
        let fetcher = ListingFetcher::new(source.clone(), 2);

        let listing = fetcher.list_all().await.unwrap();

        assert_eq!(source.requested(), vec![(1, 2), (2, 2), (3, 2)]);
        assert_eq!(listing.ids, vec!["2", "3", "5", "9", "10"]);
        let starship_ids: Vec<_> = listing.starships.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(starship_ids, vec!["2", "3", "5", "9", "10"]);
        assert_eq!(listing.starships[0].name.as_deref(), Some("ship 2"));
        assert!(listing.starships.iter().all(|s| s.manufacturer.is_none()));
    }

    #[tokio::test]
    async fn skips_empty_and_duplicate_ids() {
        let source = Arc::new(PagedSource::new(vec![
            page(&["2", "", "3"], 2),
            page(&["3", "4"], 2),
        ]));
        let fetcher = ListingFetcher::new(source, 100);

        let listing = fetcher.list_all().await.unwrap();

        assert_eq!(listing.ids, vec!["2", "3", "4"]);
        assert_eq!(listing.starships.len(), 3);
    }

    #[tokio::test]
    async fn failing_page_discards_partial_results() {
        let source = Arc::new(PagedSource::new(vec![
            page(&["2"], 3),
            Err(ShipyardError::Status { status: 500, message: "boom".into() }),
            page(&["10"], 3),
        ]));
        let fetcher = ListingFetcher::new(source.clone(), 100);

        let err = fetcher.list_all().await.unwrap_err();

        assert!(matches!(err, ShipyardError::Status { status: 500, .. }));
        assert_eq!(source.requested().len(), 2);
    }
}
