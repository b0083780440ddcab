// Compare API: the calling application around the reality engine.
// Validates raw offers, runs the engine, and stores the result as a document.

pub mod handlers;
pub mod validation;
