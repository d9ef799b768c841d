//! PlaceDesk engine: backend API access, CSV export and effect execution.
mod api;
mod engine;
mod export;
mod persist;

pub use api::{
    ApiClient, ApiError, ApiErrorKind, ApiSettings, JobResultsPayload, ReqwestApiClient,
};
pub use engine::{ApiCommand, ApiEvent, EngineHandle};
pub use export::{
    export_csv_file, place_rows, to_csv, CsvRow, ExportError, DEFAULT_CSV_FILENAME,
};
pub use persist::{ensure_output_dir, AtomicFileWriter, PersistError};
