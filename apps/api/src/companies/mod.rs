// Company Directory: read-only catalog of companies the engine resolves offers against.
// Lookups never fail; an unknown company is simply `None`.

pub mod directory;
pub mod handlers;
pub mod models;

pub use directory::{CompanyDirectory, StaticCompanyDirectory};
pub use models::{CompanyRecord, CompanyType, Learning, Tier, Wlb};
