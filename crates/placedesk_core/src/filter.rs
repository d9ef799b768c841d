use crate::PlaceRecord;

/// Transient per-session filter settings. Never persisted.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterState {
    /// Free-text term matched case-insensitively against name + address.
    pub search: String,
    /// Inclusive lower bound on the average rating; absent ratings count as 0.
    pub min_rating: Option<f64>,
    /// When set, records already marked contacted are dropped.
    pub only_not_contacted: bool,
}

/// Single-key ordering of the derived view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    NameAsc,
    NameDesc,
    RatingDesc,
    RatingAsc,
}

/// Computes the visible view: the subsequence of `records` passing `filter`,
/// ordered by `sort`. Pure; the input list is never touched.
///
/// Ties keep their raw-list order (the sorts below are stable), so the result
/// is always a permutation of a subset of `records`.
pub fn derive_view(records: &[PlaceRecord], filter: &FilterState, sort: SortKey) -> Vec<PlaceRecord> {
    let mut view: Vec<PlaceRecord> = records
        .iter()
        .filter(|record| passes(record, filter))
        .cloned()
        .collect();

    match sort {
        SortKey::NameAsc => view.sort_by(|a, b| name_key(a).cmp(&name_key(b))),
        SortKey::NameDesc => view.sort_by(|a, b| name_key(b).cmp(&name_key(a))),
        SortKey::RatingDesc => view.sort_by(|a, b| rating_key(b).total_cmp(&rating_key(a))),
        SortKey::RatingAsc => view.sort_by(|a, b| rating_key(a).total_cmp(&rating_key(b))),
    }

    view
}

fn passes(record: &PlaceRecord, filter: &FilterState) -> bool {
    if filter.only_not_contacted && record.contacted {
        return false;
    }

    if let Some(min) = filter.min_rating {
        if rating_key(record) < min {
            return false;
        }
    }

    if filter.search.is_empty() {
        return true;
    }
    let haystack = format!(
        "{}{}",
        record.name.as_deref().unwrap_or(""),
        record.address.as_deref().unwrap_or("")
    )
    .to_lowercase();
    haystack.contains(&filter.search.to_lowercase())
}

// Unicode lowercasing stands in for locale collation; good enough for the
// accented names the scraper produces.
fn name_key(record: &PlaceRecord) -> String {
    record.name.as_deref().unwrap_or("").to_lowercase()
}

fn rating_key(record: &PlaceRecord) -> f64 {
    record.average_rating.unwrap_or(0.0)
}
