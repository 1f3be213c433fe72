/// Tick and terminal input workers.
pub mod auxiliary;
/// Catalog fetch worker.
pub mod catalog;
/// Install/remove worker.
pub mod install;

pub use auxiliary::{spawn_event_thread, spawn_tick_worker};
pub use catalog::spawn_catalog_worker;
pub use install::spawn_install_worker;
