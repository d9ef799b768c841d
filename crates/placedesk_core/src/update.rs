use crate::{AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::JobsRequested => {
            state.begin_jobs_load();
            vec![Effect::LoadJobs]
        }
        Msg::JobsLoaded(jobs) => {
            state.apply_jobs(jobs);
            Vec::new()
        }
        Msg::JobsLoadFailed { message } => {
            state.fail_jobs_load(message);
            Vec::new()
        }
        Msg::JobOpened { job_id } => {
            state.open_session(job_id.clone());
            vec![Effect::LoadResults { job_id }]
        }
        Msg::ResultsLoaded {
            job_id,
            queries,
            result_count,
            records,
        } => {
            // A payload for a job the user already left is dropped whole;
            // apply_results never mixes it into the open session.
            state.apply_results(&job_id, queries, result_count, records);
            Vec::new()
        }
        Msg::ResultsLoadFailed { job_id, message } => {
            state.fail_results_load(&job_id, message);
            Vec::new()
        }
        Msg::SearchChanged(search) => {
            state.edit_filter(|filter| filter.search = search);
            Vec::new()
        }
        Msg::MinRatingChanged(min_rating) => {
            state.edit_filter(|filter| filter.min_rating = min_rating);
            Vec::new()
        }
        Msg::OnlyNotContactedToggled(only) => {
            state.edit_filter(|filter| filter.only_not_contacted = only);
            Vec::new()
        }
        Msg::SortChanged(sort) => {
            state.set_sort(sort);
            Vec::new()
        }
        Msg::ContactToggled { place_id, contacted } => {
            if state.has_record(&place_id) {
                state.begin_save(place_id.clone());
                vec![Effect::SaveContacted { place_id, contacted }]
            } else {
                // Stale reference: the identifier points at nothing we hold.
                state.set_notice(format!("place {place_id} is no longer loaded"));
                Vec::new()
            }
        }
        Msg::ContactSaved { place_id, contacted } => {
            // A completion from a torn-down session matches no pending save
            // here and must not touch the open session's bookkeeping.
            if state.finish_save(&place_id) {
                if !state.apply_contacted(&place_id, contacted) {
                    state.set_notice(format!("place {place_id} is no longer loaded"));
                }
            } else {
                state.set_notice(format!("place {place_id} is no longer loaded"));
            }
            Vec::new()
        }
        Msg::ContactSaveFailed { place_id, message } => {
            // The raw list was never touched; just report.
            if state.finish_save(&place_id) {
                state.set_notice(format!(
                    "could not update contact status of {place_id}: {message}"
                ));
            } else {
                state.set_notice(format!("place {place_id} is no longer loaded"));
            }
            Vec::new()
        }
        Msg::ExportRequested => match state.session_job_id() {
            Some(job_id) => {
                let records = state.visible_records();
                if records.is_empty() {
                    Vec::new()
                } else {
                    vec![Effect::ExportCsv {
                        filename: format!("resultados-job-{job_id}.csv"),
                        records,
                    }]
                }
            }
            None => Vec::new(),
        },
        Msg::ExportFinished { path } => {
            state.set_notice(format!("CSV written to {path}"));
            Vec::new()
        }
        Msg::ExportFailed { message } => {
            state.set_notice(format!("CSV export failed: {message}"));
            Vec::new()
        }
        Msg::JobDeleteRequested { job_id } => {
            vec![Effect::DeleteJob { job_id }]
        }
        Msg::JobDeleted { job_id } => {
            state.remove_job(&job_id);
            Vec::new()
        }
        Msg::JobDeleteFailed { job_id, message } => {
            state.set_notice(format!("could not delete job {job_id}: {message}"));
            Vec::new()
        }
        Msg::NoticeDismissed => {
            state.clear_notice();
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
