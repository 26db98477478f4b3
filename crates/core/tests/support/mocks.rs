//! In-memory port implementations for testing

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use shipyard_core::catalog::ports::{
    AggregateCache, BuildFuture, ListedEntry, StarshipDetail, StarshipPage, StarshipSource,
};
use shipyard_domain::{Result, ShipyardError, Starship};

/// In-memory upstream serving fixed pages and per-id details.
///
/// Counts every call so tests can assert how much traffic a query caused.
#[derive(Default)]
pub struct FakeUpstream {
    pages: Mutex<Vec<Result<StarshipPage>>>,
    details: Mutex<HashMap<String, Result<StarshipDetail>>>,
    page_calls: AtomicUsize,
    detail_calls: AtomicUsize,
}

impl FakeUpstream {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a page whose entries are `(uid, name)` pairs.
    pub fn with_page(self, entries: &[(&str, &str)], total_pages: u32) -> Self {
        let entries = entries
            .iter()
            .map(|(uid, name)| ListedEntry {
                uid: (*uid).to_string(),
                name: Some((*name).to_string()),
                url: Some(format!("https://www.swapi.tech/api/starships/{uid}")),
            })
            .collect();
        self.pages.lock().unwrap().push(Ok(StarshipPage { entries, total_pages }));
        self
    }

    pub fn with_failing_page(self, status: u16) -> Self {
        self.pages
            .lock()
            .unwrap()
            .push(Err(ShipyardError::Status { status, message: "upstream failure".into() }));
        self
    }

    pub fn with_manufacturer(self, uid: &str, manufacturer: Option<&str>) -> Self {
        self.details.lock().unwrap().insert(
            uid.to_string(),
            Ok(StarshipDetail { manufacturer: manufacturer.map(str::to_string) }),
        );
        self
    }

    pub fn with_failing_detail(self, uid: &str, status: u16) -> Self {
        self.details.lock().unwrap().insert(
            uid.to_string(),
            Err(ShipyardError::Status { status, message: format!("starship {uid} unavailable") }),
        );
        self
    }

    /// Replace a page after construction, e.g. to let a retry succeed.
    pub fn replace_page(&self, index: usize, entries: &[(&str, &str)], total_pages: u32) {
        let entries = entries
            .iter()
            .map(|(uid, name)| ListedEntry {
                uid: (*uid).to_string(),
                name: Some((*name).to_string()),
                url: None,
            })
            .collect();
        self.pages.lock().unwrap()[index] = Ok(StarshipPage { entries, total_pages });
    }

    pub fn page_calls(&self) -> usize {
        self.page_calls.load(Ordering::SeqCst)
    }

    pub fn detail_calls(&self) -> usize {
        self.detail_calls.load(Ordering::SeqCst)
    }

    pub fn total_calls(&self) -> usize {
        self.page_calls() + self.detail_calls()
    }
}

#[async_trait]
impl StarshipSource for FakeUpstream {
    async fn fetch_page(&self, page: u32, _limit: u32) -> Result<StarshipPage> {
        self.page_calls.fetch_add(1, Ordering::SeqCst);
        let pages = self.pages.lock().unwrap();
        pages
            .get((page - 1) as usize)
            .cloned()
            .unwrap_or_else(|| Err(ShipyardError::Status { status: 404, message: "no page".into() }))
    }

    async fn fetch_detail(&self, id: &str) -> Result<StarshipDetail> {
        self.detail_calls.fetch_add(1, Ordering::SeqCst);
        let details = self.details.lock().unwrap();
        details.get(id).cloned().unwrap_or_else(|| Ok(StarshipDetail::default()))
    }
}

/// Minimal aggregate cache without expiry.
#[derive(Default)]
pub struct InMemoryCache {
    entry: Mutex<Option<Arc<Vec<Starship>>>>,
    builds: AtomicUsize,
}

impl InMemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builds(&self) -> usize {
        self.builds.load(Ordering::SeqCst)
    }

    pub fn is_populated(&self) -> bool {
        self.entry.lock().unwrap().is_some()
    }
}

#[async_trait]
impl AggregateCache for InMemoryCache {
    async fn get_or_build(&self, build: BuildFuture<'_>) -> Result<Arc<Vec<Starship>>> {
        let cached = self.entry.lock().unwrap().clone();
        if let Some(existing) = cached {
            return Ok(existing);
        }

        self.builds.fetch_add(1, Ordering::SeqCst);
        let built = Arc::new(build.await?);
        *self.entry.lock().unwrap() = Some(built.clone());
        Ok(built)
    }

    async fn invalidate(&self) {
        self.entry.lock().unwrap().take();
    }
}
