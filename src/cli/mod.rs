//! Command-line driver: wires configuration, collaborators and the workflow

pub mod orchestration;

pub use orchestration::{run_release_workflow, ReleaseWorkflowArgs, WorkflowResult};
