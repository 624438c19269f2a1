//! Customer reconciliation built on the name and email matchers.

pub mod batch;
pub mod domain;
pub mod router;
pub mod service;

pub use batch::{BatchImportError, BatchImporter, BatchMatch};
pub use domain::{Customer, ValidationOutcome};
pub use router::matching_router;
pub use service::{check_threshold, CustomerValidationService, ValidationError};
