use crate::{JobId, JobSummary, PlaceId, PlaceRecord, SortKey};

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// User asked for the saved-jobs list (initial load or refresh).
    JobsRequested,
    /// Saved-jobs list arrived from the backend.
    JobsLoaded(Vec<JobSummary>),
    /// Saved-jobs list could not be loaded.
    JobsLoadFailed { message: String },
    /// User opened one job's results.
    JobOpened { job_id: JobId },
    /// A job's results arrived from the backend.
    ResultsLoaded {
        job_id: JobId,
        queries: Vec<String>,
        result_count: u64,
        records: Vec<PlaceRecord>,
    },
    /// A job's results could not be loaded.
    ResultsLoadFailed { job_id: JobId, message: String },
    /// User edited the free-text search box.
    SearchChanged(String),
    /// User changed (or cleared) the minimum-rating threshold.
    MinRatingChanged(Option<f64>),
    /// User flipped the "only not contacted" filter.
    OnlyNotContactedToggled(bool),
    /// User picked another sort key.
    SortChanged(SortKey),
    /// User toggled a record's contacted checkbox.
    ContactToggled { place_id: PlaceId, contacted: bool },
    /// The backend confirmed a contacted change.
    ContactSaved { place_id: PlaceId, contacted: bool },
    /// The backend rejected a contacted change.
    ContactSaveFailed { place_id: PlaceId, message: String },
    /// User asked to export the currently visible records as CSV.
    ExportRequested,
    /// A CSV export finished (path of the written file).
    ExportFinished { path: String },
    /// A CSV export failed.
    ExportFailed { message: String },
    /// User asked to delete a saved job.
    JobDeleteRequested { job_id: JobId },
    /// The backend confirmed a job deletion.
    JobDeleted { job_id: JobId },
    /// The backend rejected a job deletion.
    JobDeleteFailed { job_id: JobId, message: String },
    /// User dismissed the one-shot notice.
    NoticeDismissed,
    /// Fallback for placeholder wiring.
    NoOp,
}
