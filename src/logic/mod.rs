//! Core non-UI logic: the catalog gateway and the install orchestrator.

pub mod gateway;
pub mod install;

pub use gateway::{choose_competition, choose_country, handle_catalog_reply, request_countries};
pub use install::{apply, handle_install_outcome, remove};
