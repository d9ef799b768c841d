use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;

use desk_logging::{desk_info, desk_warn};
use placedesk_core::{Effect, Msg};
use placedesk_engine::{export_csv_file, ApiCommand, ApiEvent, ApiSettings, EngineHandle};

/// Executes the core's effects: API commands go to the engine, CSV exports
/// are written directly. Engine completions come back as messages.
pub struct EffectRunner {
    engine: EngineHandle,
    export_dir: PathBuf,
    msg_tx: mpsc::Sender<Msg>,
}

impl EffectRunner {
    pub fn new(msg_tx: mpsc::Sender<Msg>) -> anyhow::Result<Self> {
        let settings = ApiSettings {
            base_url: std::env::var("PLACEDESK_API_URL")
                .unwrap_or_else(|_| ApiSettings::default().base_url),
            ..ApiSettings::default()
        };
        desk_info!("Using backend at {}", settings.base_url);

        let (event_tx, event_rx) = mpsc::channel::<ApiEvent>();
        let engine = EngineHandle::new(settings, event_tx)?;

        let export_dir = std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join("exports");

        let runner = Self {
            engine,
            export_dir,
            msg_tx: msg_tx.clone(),
        };
        spawn_event_loop(event_rx, msg_tx);
        Ok(runner)
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::LoadJobs => self.engine.submit(ApiCommand::LoadJobs),
                Effect::LoadResults { job_id } => {
                    desk_info!("Loading results of job {}", job_id);
                    self.engine.submit(ApiCommand::LoadResults { job_id });
                }
                Effect::SaveContacted {
                    place_id,
                    contacted,
                } => self.engine.submit(ApiCommand::SaveContacted {
                    place_id,
                    contacted,
                }),
                Effect::DeleteJob { job_id } => {
                    self.engine.submit(ApiCommand::DeleteJob { job_id })
                }
                Effect::ExportCsv { filename, records } => self.export(&filename, &records),
            }
        }
    }

    fn export(&self, filename: &str, records: &[placedesk_core::PlaceRecord]) {
        let msg = match export_csv_file(&self.export_dir, filename, records) {
            Ok(Some(path)) => Msg::ExportFinished {
                path: path.to_string_lossy().into_owned(),
            },
            // The core only requests exports for non-empty views; an empty
            // snapshot is a silent no-op regardless.
            Ok(None) => return,
            Err(err) => {
                desk_warn!("CSV export failed: {}", err);
                Msg::ExportFailed {
                    message: err.to_string(),
                }
            }
        };
        let _ = self.msg_tx.send(msg);
    }
}

fn spawn_event_loop(event_rx: mpsc::Receiver<ApiEvent>, msg_tx: mpsc::Sender<Msg>) {
    thread::spawn(move || {
        while let Ok(event) = event_rx.recv() {
            let msg = match event {
                ApiEvent::JobsLoaded(Ok(jobs)) => Msg::JobsLoaded(jobs),
                ApiEvent::JobsLoaded(Err(err)) => {
                    desk_warn!("Job list load failed: {}", err);
                    Msg::JobsLoadFailed {
                        message: err.to_string(),
                    }
                }
                ApiEvent::ResultsLoaded { job_id, result } => match result {
                    Ok(payload) => Msg::ResultsLoaded {
                        job_id,
                        queries: payload.queries,
                        result_count: payload.result_count,
                        records: payload.results,
                    },
                    Err(err) => {
                        desk_warn!("Results load for job {} failed: {}", job_id, err);
                        Msg::ResultsLoadFailed {
                            job_id,
                            message: err.to_string(),
                        }
                    }
                },
                ApiEvent::ContactedSaved {
                    place_id,
                    contacted,
                    result,
                } => match result {
                    Ok(()) => Msg::ContactSaved {
                        place_id,
                        contacted,
                    },
                    Err(err) => {
                        desk_warn!("Contacted save for {} failed: {}", place_id, err);
                        Msg::ContactSaveFailed {
                            place_id,
                            message: err.to_string(),
                        }
                    }
                },
                ApiEvent::JobDeleted { job_id, result } => match result {
                    Ok(()) => Msg::JobDeleted { job_id },
                    Err(err) => {
                        desk_warn!("Delete of job {} failed: {}", job_id, err);
                        Msg::JobDeleteFailed {
                            job_id,
                            message: err.to_string(),
                        }
                    }
                },
            };
            if msg_tx.send(msg).is_err() {
                break;
            }
        }
    });
}
