// Résumé generation: form data in, ATS-friendly résumé out.
// The model writes the document; its ATS score comes from the local detector.

pub mod generator;
pub mod handlers;
pub mod models;
pub mod prompts;
