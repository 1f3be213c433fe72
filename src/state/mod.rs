//! Application state: selection, notifications and shared value types.

pub mod app_state;
pub mod notify;
pub mod selection;
pub mod types;

pub use app_state::{AppState, InstallState};
pub use notify::{Severity, Toast, Toasts};
pub use selection::SelectionStore;
pub use types::{
    CatalogReply, CatalogRequest, Competition, CompetitionsReply, CompetitionsRequest, Country,
    Focus, InstallOutcome, InstallRequest,
};
