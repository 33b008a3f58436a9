// Résumé vs. job-description analysis.
// The model writes the report; the ATS block is always computed locally.

pub mod handlers;
pub mod models;
pub mod prompts;
