//! Job search core: pure state machine, identity rules and view-model helpers.
mod effect;
mod job;
mod msg;
mod saved;
mod search;
mod selection;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use job::{JobIdentifier, JobRecord};
pub use msg::Msg;
pub use saved::SavedSet;
pub use search::{RequestId, SearchCache, SearchStatus};
pub use selection::{Location, Role, SearchKey, Selection, UnknownOption};
pub use state::AppState;
pub use update::update;
pub use view_model::{AppViewModel, JobCardView, ResultsView, NO_LOGO_PLACEHOLDER};
