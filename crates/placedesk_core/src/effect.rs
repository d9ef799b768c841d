use crate::{JobId, PlaceId, PlaceRecord};

/// Side effects requested by `update`; executed outside the core.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Fetch the saved-jobs list.
    LoadJobs,
    /// Fetch one job's scraped records.
    LoadResults { job_id: JobId },
    /// Persist one record's contacted flag on the backend.
    SaveContacted { place_id: PlaceId, contacted: bool },
    /// Delete a saved job on the backend.
    DeleteJob { job_id: JobId },
    /// Write the given records as a CSV file. `records` is a snapshot of the
    /// visible view at the time of the request.
    ExportCsv {
        filename: String,
        records: Vec<PlaceRecord>,
    },
}
