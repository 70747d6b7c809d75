pub mod catalog;
pub mod error;
pub mod runner;
pub mod scenario;
mod scenarios;
pub mod transcript;
pub mod verify;

pub use catalog::Catalog;
pub use error::CatalogError;
pub use scenario::Scenario;
pub use transcript::Transcript;
