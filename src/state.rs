use std::sync::Arc;

use tokio::sync::RwLock;

use crate::board::{Facets, JobWindow, SalaryRange, ViewState};
use crate::cache::JobCache;
use crate::error::AppError;
use crate::models::Job;
use crate::sources::{FetchSequence, FetchTicket, JobSource};

/// Everything the board shows: the loaded jobs, the view criteria and the
/// fetch sequence guarding against stale results.
#[derive(Debug, Default)]
pub struct Board {
    pub jobs: Vec<Job>,
    pub view: ViewState,
    fetches: FetchSequence,
}

impl Board {
    pub fn issue_fetch(&mut self) -> FetchTicket {
        self.fetches.issue()
    }

    /// Install a fetched list if `ticket` is still the newest fetch. The
    /// salary range widens to the new list's ceiling and the window resets.
    pub fn install(&mut self, ticket: FetchTicket, jobs: Vec<Job>) -> bool {
        if !self.fetches.is_latest(ticket) {
            tracing::debug!("Discarding stale fetch #{}", ticket.id());
            return false;
        }
        self.replace_jobs(jobs);
        true
    }

    pub fn replace_jobs(&mut self, jobs: Vec<Job>) {
        let facets = Facets::from_jobs(&jobs);
        self.jobs = jobs;
        self.view.set_salary_range(SalaryRange::up_to(facets.max_salary));
    }

    pub fn facets(&self) -> Facets {
        Facets::from_jobs(&self.jobs)
    }

    pub fn render(&self) -> JobWindow {
        self.view.render(&self.jobs)
    }
}

#[derive(Clone)]
pub struct AppState {
    pub board: Arc<RwLock<Board>>,
    pub source: Arc<dyn JobSource>,
    pub cache: JobCache,
}

impl AppState {
    pub fn new(source: Arc<dyn JobSource>, cache: JobCache) -> Self {
        Self {
            board: Arc::new(RwLock::new(Board::default())),
            source,
            cache,
        }
    }

    /// Load the cached list, or fetch and cache a fresh one. A failed
    /// fetch leaves the board empty.
    pub async fn bootstrap(&self) -> usize {
        if let Some(jobs) = self.cache.load() {
            tracing::info!("Loaded {} jobs from cache", jobs.len());
            let count = jobs.len();
            self.board.write().await.replace_jobs(jobs);
            return count;
        }
        match self.refresh().await {
            Ok(count) => count,
            Err(e) => {
                tracing::error!("Initial job load failed: {e}");
                0
            }
        }
    }

    /// Fetch and install a result for `query`. Returns `Ok(None)` when a
    /// newer fetch superseded this one.
    async fn fetch_and_install(&self, query: Option<&str>) -> Result<Option<Vec<Job>>, AppError> {
        let ticket = self.board.write().await.issue_fetch();
        let jobs = self.source.fetch_jobs(query).await?;
        let mut board = self.board.write().await;
        if board.install(ticket, jobs.clone()) {
            Ok(Some(jobs))
        } else {
            Ok(None)
        }
    }

    /// Search the source. The query also becomes the view's text filter.
    pub async fn search(&self, query: &str) -> Result<JobWindow, AppError> {
        self.board.write().await.view.set_query(query);
        if let Some(jobs) = self.fetch_and_install(Some(query)).await? {
            tracing::info!("{} results for {query:?}", jobs.len());
        }
        Ok(self.board.read().await.render())
    }

    /// Refetch everything and persist the result to the cache.
    pub async fn refresh(&self) -> Result<usize, AppError> {
        let Some(jobs) = self.fetch_and_install(None).await? else {
            return Ok(self.board.read().await.jobs.len());
        };
        if let Err(e) = self.cache.save(&jobs) {
            tracing::warn!("Failed to cache jobs: {e}");
        }
        tracing::info!("Loaded {} jobs from '{}'", jobs.len(), self.source.name());
        Ok(jobs.len())
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use async_trait::async_trait;

    use super::*;
    use crate::models::job::fixtures::job;
    use crate::store::MemoryStore;

    /// Returns `jobs` after `delays[call]`; fails when `fail` is set.
    pub struct ScriptedSource {
        pub batches: Vec<Vec<Job>>,
        pub delays: Vec<Duration>,
        pub fail: bool,
        pub calls: AtomicUsize,
    }

    impl ScriptedSource {
        pub fn new(batches: Vec<Vec<Job>>) -> Self {
            Self {
                batches,
                delays: Vec::new(),
                fail: false,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl JobSource for ScriptedSource {
        fn name(&self) -> &str {
            "scripted"
        }

        async fn fetch_jobs(&self, query: Option<&str>) -> Result<Vec<Job>, AppError> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            if let Some(delay) = self.delays.get(call) {
                tokio::time::sleep(*delay).await;
            }
            if self.fail {
                return Err(AppError::Fetch(
                    "Falha ao obter vagas. Tente novamente mais tarde.".into(),
                ));
            }
            let batch = self
                .batches
                .get(call)
                .or(self.batches.last())
                .cloned()
                .unwrap_or_default();
            Ok(crate::sources::restrict_to_query(batch, query))
        }
    }

    pub fn batch(prefix: &str, n: usize) -> Vec<Job> {
        (1..=n)
            .map(|i| Job {
                title: format!("{prefix} {i}"),
                salary: Some(100_000 * i as u64),
                ..job(&format!("{prefix}-{i}"))
            })
            .collect()
    }

    pub fn state_with(source: ScriptedSource) -> (AppState, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::default());
        let cache = JobCache::new(store.clone());
        (AppState::new(Arc::new(source), cache), store)
    }
}
