// Reality Engine: turns two offers and a priority vector into a "reality check" document.
// Pipeline: resolve → adaptive score → financial breakdown → trajectory → signals → verdict.
// Everything here is pure and synchronous; persistence lives in `documents`.

pub mod blocks;
pub mod config;
pub mod financial;
pub mod offer;
pub mod report;
pub mod rules;
pub mod scoring;

pub use blocks::ContentBlock;
pub use config::RealityConfig;
pub use offer::{Offer, OfferPriorities};
pub use report::generate_report;
