use crate::view_model::{AppViewModel, JobRowView, ResultsViewModel};
use crate::{derive_view, FilterState, JobId, JobSummary, PlaceId, PlaceRecord, SortKey};

/// Lifecycle of a remote load, kept separate from "zero results".
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) enum LoadPhase {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed(String),
}

/// The session around one job's loaded records: the raw list plus the
/// transient filter and sort settings. The raw list is the single source of
/// truth; the visible view is derived from it on demand.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ResultsSession {
    pub job_id: JobId,
    pub queries: Vec<String>,
    pub result_count: u64,
    pub records: Vec<PlaceRecord>,
    pub filter: FilterState,
    pub sort: SortKey,
    pub phase: LoadPhase,
    /// Place ids with a contacted save in flight; one entry per request, so
    /// same-id races keep their own completions.
    pub pending_saves: Vec<PlaceId>,
}

impl ResultsSession {
    fn loading(job_id: JobId) -> Self {
        Self {
            job_id,
            queries: Vec::new(),
            result_count: 0,
            records: Vec::new(),
            filter: FilterState::default(),
            sort: SortKey::default(),
            phase: LoadPhase::Loading,
            pending_saves: Vec::new(),
        }
    }
}

/// Whole-app state: the saved-jobs list and at most one open results session.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    jobs_phase: LoadPhase,
    jobs: Vec<JobSummary>,
    session: Option<ResultsSession>,
    notice: Option<String>,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the render model, including the derived (filtered and sorted)
    /// view of the open session's records.
    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            jobs_loading: self.jobs_phase == LoadPhase::Loading,
            jobs_error: self.jobs_phase.error(),
            jobs: self
                .jobs
                .iter()
                .map(|job| JobRowView {
                    job_id: job.id.clone(),
                    first_query: job.queries.first().cloned().unwrap_or_default(),
                    result_count: job.result_count,
                    created_at: job.created_at.clone(),
                })
                .collect(),
            results: self.session.as_ref().map(|session| ResultsViewModel {
                job_id: session.job_id.clone(),
                query: session.queries.first().cloned(),
                result_count: session.result_count,
                loading: session.phase == LoadPhase::Loading,
                error: session.phase.error(),
                saving: !session.pending_saves.is_empty(),
                total_count: session.records.len(),
                filter: session.filter.clone(),
                sort: session.sort,
                rows: derive_view(&session.records, &session.filter, session.sort),
            }),
            notice: self.notice.clone(),
            dirty: self.dirty,
        }
    }

    /// Returns whether a render is due and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn begin_jobs_load(&mut self) {
        self.jobs_phase = LoadPhase::Loading;
        self.mark_dirty();
    }

    pub(crate) fn apply_jobs(&mut self, jobs: Vec<JobSummary>) {
        self.jobs = jobs;
        self.jobs_phase = LoadPhase::Loaded;
        self.mark_dirty();
    }

    pub(crate) fn fail_jobs_load(&mut self, message: String) {
        self.jobs.clear();
        self.jobs_phase = LoadPhase::Failed(message);
        self.mark_dirty();
    }

    pub(crate) fn open_session(&mut self, job_id: JobId) {
        self.session = Some(ResultsSession::loading(job_id));
        self.mark_dirty();
    }

    pub(crate) fn session_job_id(&self) -> Option<&JobId> {
        self.session.as_ref().map(|session| &session.job_id)
    }

    /// Applies a loaded results payload. Returns false (and changes nothing)
    /// when the payload belongs to a job the user has already navigated away
    /// from; late responses for torn-down sessions are simply dropped.
    pub(crate) fn apply_results(
        &mut self,
        job_id: &JobId,
        queries: Vec<String>,
        result_count: u64,
        records: Vec<PlaceRecord>,
    ) -> bool {
        let Some(session) = self.session.as_mut().filter(|s| &s.job_id == job_id) else {
            return false;
        };
        session.queries = queries;
        session.result_count = result_count;
        session.records = records;
        session.phase = LoadPhase::Loaded;
        self.mark_dirty();
        true
    }

    /// Marks the open session's load as failed: empty records, non-loading.
    pub(crate) fn fail_results_load(&mut self, job_id: &JobId, message: String) -> bool {
        let Some(session) = self.session.as_mut().filter(|s| &s.job_id == job_id) else {
            return false;
        };
        session.records.clear();
        session.phase = LoadPhase::Failed(message);
        self.mark_dirty();
        true
    }

    pub(crate) fn edit_filter(&mut self, edit: impl FnOnce(&mut FilterState)) {
        if let Some(session) = self.session.as_mut() {
            edit(&mut session.filter);
            self.mark_dirty();
        }
    }

    pub(crate) fn set_sort(&mut self, sort: SortKey) {
        if let Some(session) = self.session.as_mut() {
            session.sort = sort;
            self.mark_dirty();
        }
    }

    pub(crate) fn has_record(&self, place_id: &PlaceId) -> bool {
        self.session
            .as_ref()
            .is_some_and(|s| s.records.iter().any(|r| &r.id == place_id))
    }

    pub(crate) fn begin_save(&mut self, place_id: PlaceId) {
        if let Some(session) = self.session.as_mut() {
            session.pending_saves.push(place_id);
            self.mark_dirty();
        }
    }

    /// Retires one pending save for `place_id`. Returns false (and changes
    /// nothing) when no such save is pending in the open session, which is
    /// how completions of a torn-down session present themselves.
    pub(crate) fn finish_save(&mut self, place_id: &PlaceId) -> bool {
        let Some(session) = self.session.as_mut() else {
            return false;
        };
        let Some(index) = session.pending_saves.iter().position(|id| id == place_id) else {
            return false;
        };
        session.pending_saves.remove(index);
        self.mark_dirty();
        true
    }

    /// Commits a confirmed contacted change to the raw list. Only the target
    /// record changes; position and all other fields are preserved. Returns
    /// false when the identifier is no longer present.
    pub(crate) fn apply_contacted(&mut self, place_id: &PlaceId, contacted: bool) -> bool {
        let Some(session) = self.session.as_mut() else {
            return false;
        };
        let Some(record) = session.records.iter_mut().find(|r| &r.id == place_id) else {
            return false;
        };
        record.contacted = contacted;
        self.mark_dirty();
        true
    }

    /// Snapshot of the currently visible records, for export.
    pub(crate) fn visible_records(&self) -> Vec<PlaceRecord> {
        match self.session.as_ref() {
            Some(session) if session.phase == LoadPhase::Loaded => {
                derive_view(&session.records, &session.filter, session.sort)
            }
            _ => Vec::new(),
        }
    }

    pub(crate) fn remove_job(&mut self, job_id: &JobId) {
        self.jobs.retain(|job| &job.id != job_id);
        if self.session_job_id() == Some(job_id) {
            self.session = None;
        }
        self.mark_dirty();
    }

    pub(crate) fn set_notice(&mut self, notice: String) {
        self.notice = Some(notice);
        self.mark_dirty();
    }

    pub(crate) fn clear_notice(&mut self) {
        if self.notice.take().is_some() {
            self.mark_dirty();
        }
    }
}

impl LoadPhase {
    fn error(&self) -> Option<String> {
        match self {
            LoadPhase::Failed(message) => Some(message.clone()),
            _ => None,
        }
    }
}
