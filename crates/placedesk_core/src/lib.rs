//! PlaceDesk core: pure state machine and view-model helpers.
mod effect;
mod filter;
mod msg;
mod place;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use filter::{derive_view, FilterState, SortKey};
pub use msg::Msg;
pub use place::{JobId, JobSummary, PlaceId, PlaceRecord};
pub use state::AppState;
pub use update::update;
pub use view_model::{AppViewModel, JobRowView, ResultsViewModel};
