// Advisor: one upload in, six rendered sections out.
// All model calls happen behind the Orchestrator in AppState.

pub mod handlers;
pub mod pipeline;
