use chrono::DateTime;
use placedesk_core::{AppViewModel, PlaceRecord, ResultsViewModel, SortKey};

/// Prints the current view model. Plain text; all the interesting state
/// lives in the core.
pub fn render(view: &AppViewModel) {
    println!();
    if let Some(notice) = &view.notice {
        println!("! {notice}");
    }

    match &view.results {
        Some(results) => render_results(results),
        None => render_jobs(view),
    }
}

fn render_jobs(view: &AppViewModel) {
    if view.jobs_loading {
        println!("loading saved jobs...");
        return;
    }
    if let Some(error) = &view.jobs_error {
        println!("could not load saved jobs: {error}");
        return;
    }
    if view.jobs.is_empty() {
        println!("no saved jobs yet");
        return;
    }

    println!("saved jobs:");
    for job in &view.jobs {
        println!(
            "  {}  {:<30}  {:>4} results  {}",
            job.job_id,
            job.first_query,
            job.result_count,
            format_timestamp(&job.created_at)
        );
    }
}

fn render_results(results: &ResultsViewModel) {
    let query = results.query.as_deref().unwrap_or("");
    println!("job {}  \"{}\"  {} results", results.job_id, query, results.result_count);

    if results.loading {
        println!("loading...");
        return;
    }
    if let Some(error) = &results.error {
        println!("could not load results: {error}");
        return;
    }
    if results.saving {
        println!("saving changes...");
    }

    println!(
        "showing {} of {}  (search {:?}, min rating {}, pending-only {}, sort {})",
        results.rows.len(),
        results.total_count,
        results.filter.search,
        results
            .filter
            .min_rating
            .map_or_else(|| "off".to_string(), |min| format!("{min}")),
        results.filter.only_not_contacted,
        sort_label(results.sort),
    );

    for row in &results.rows {
        render_row(row);
    }
    if results.rows.is_empty() && results.total_count == 0 {
        println!("this job has no stored results");
    }
}

fn render_row(row: &PlaceRecord) {
    println!(
        "  {}  [{}] {:<28} {:<30} {:<16} {}",
        row.id,
        if row.contacted { "x" } else { " " },
        row.name.as_deref().unwrap_or("-"),
        row.address.as_deref().unwrap_or("-"),
        row.phone.as_deref().unwrap_or("-"),
        row.average_rating
            .map_or_else(|| "-".to_string(), |rating| format!("{rating:.1}")),
    );
}

fn sort_label(sort: SortKey) -> &'static str {
    match sort {
        SortKey::NameAsc => "name",
        SortKey::NameDesc => "name-desc",
        SortKey::RatingDesc => "rating",
        SortKey::RatingAsc => "rating-asc",
    }
}

fn format_timestamp(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(parsed) => parsed.format("%Y-%m-%d %H:%M").to_string(),
        Err(_) => raw.to_string(),
    }
}
