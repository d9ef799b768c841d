use crate::{FilterState, JobId, PlaceRecord, SortKey};

/// Everything the front-end needs to render, derived from `AppState`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppViewModel {
    pub jobs_loading: bool,
    pub jobs_error: Option<String>,
    pub jobs: Vec<JobRowView>,
    /// Present while a job's results are open.
    pub results: Option<ResultsViewModel>,
    /// One-shot message (save failure, stale reference, export outcome).
    pub notice: Option<String>,
    pub dirty: bool,
}

/// One row of the saved-jobs list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobRowView {
    pub job_id: JobId,
    pub first_query: String,
    pub result_count: u64,
    pub created_at: String,
}

/// The open job's results: header data plus the derived view.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultsViewModel {
    pub job_id: JobId,
    pub query: Option<String>,
    pub result_count: u64,
    pub loading: bool,
    /// Persistent load-failure message; the view stays empty and non-loading.
    pub error: Option<String>,
    /// True while contacted saves are in flight.
    pub saving: bool,
    /// Size of the raw list, independent of filtering.
    pub total_count: usize,
    pub filter: FilterState,
    pub sort: SortKey,
    /// The filtered and sorted subsequence of the raw list.
    pub rows: Vec<PlaceRecord>,
}
