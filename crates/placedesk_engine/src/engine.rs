use std::sync::{mpsc, Arc};
use std::thread;

use desk_logging::desk_debug;
use placedesk_core::JobSummary;

use crate::api::{ApiClient, ApiError, ApiSettings, JobResultsPayload, ReqwestApiClient};

/// Remote operations the core's effects translate into.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiCommand {
    LoadJobs,
    LoadResults { job_id: String },
    SaveContacted { place_id: String, contacted: bool },
    DeleteJob { job_id: String },
}

/// Completion of an `ApiCommand`, delivered on the caller's event channel.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiEvent {
    JobsLoaded(Result<Vec<JobSummary>, ApiError>),
    ResultsLoaded {
        job_id: String,
        result: Result<JobResultsPayload, ApiError>,
    },
    ContactedSaved {
        place_id: String,
        contacted: bool,
        result: Result<(), ApiError>,
    },
    JobDeleted {
        job_id: String,
        result: Result<(), ApiError>,
    },
}

/// Runs API commands on a dedicated tokio runtime thread.
///
/// Every command is spawned as its own task, so several calls (including
/// contacted saves for different records) can be in flight at once; each
/// completion is reported independently.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<ApiCommand>,
}

impl EngineHandle {
    pub fn new(settings: ApiSettings, event_tx: mpsc::Sender<ApiEvent>) -> Result<Self, ApiError> {
        let client = Arc::new(ReqwestApiClient::new(settings)?);
        Ok(Self::with_client(client, event_tx))
    }

    /// Wires an arbitrary client implementation; used by tests.
    pub fn with_client(client: Arc<dyn ApiClient>, event_tx: mpsc::Sender<ApiEvent>) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel::<ApiCommand>();

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let client = client.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    let event = run_command(client.as_ref(), command).await;
                    let _ = event_tx.send(event);
                });
            }
        });

        Self { cmd_tx }
    }

    pub fn submit(&self, command: ApiCommand) {
        let _ = self.cmd_tx.send(command);
    }
}

async fn run_command(client: &dyn ApiClient, command: ApiCommand) -> ApiEvent {
    desk_debug!("API command {:?}", command);
    match command {
        ApiCommand::LoadJobs => ApiEvent::JobsLoaded(client.list_jobs().await),
        ApiCommand::LoadResults { job_id } => {
            let result = client.job_results(&job_id).await;
            ApiEvent::ResultsLoaded { job_id, result }
        }
        ApiCommand::SaveContacted {
            place_id,
            contacted,
        } => {
            // The updated record in the response body is not needed; the
            // caller already knows the value it asked for.
            let result = client.set_contacted(&place_id, contacted).await.map(|_| ());
            ApiEvent::ContactedSaved {
                place_id,
                contacted,
                result,
            }
        }
        ApiCommand::DeleteJob { job_id } => {
            let result = client.delete_job(&job_id).await;
            ApiEvent::JobDeleted { job_id, result }
        }
    }
}
