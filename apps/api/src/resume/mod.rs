// Résumé upload: store the file, return its extracted text.

pub mod handlers;
