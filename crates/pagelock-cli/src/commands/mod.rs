//! Command handlers for the batch workflow.

pub mod protect;
pub mod unprotect;

mod run;

pub use run::{prepare_run, PreparedRun};
