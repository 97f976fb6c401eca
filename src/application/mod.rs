// Application layer - the ledger service and what surrounds it:
// configuration, errors, the renderer contract and reporting.

pub mod config;
pub mod error;
pub mod render;
pub mod reporting;
pub mod service;

pub use config::*;
pub use error::*;
pub use render::*;
pub use reporting::*;
pub use service::*;
