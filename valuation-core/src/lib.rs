//! Domain crate for the property valuation client.
//!
//! Owns the form record, the field descriptors, the static geography
//! tables, validation, wire-payload normalization, and the service trait
//! the transport crates implement.

pub mod fields;
pub mod form;
pub mod geo;
pub mod request;
pub mod service;
pub mod validate;

pub use fields::{FieldGroup, FieldId, FieldKind, GROUPS, Options};
pub use form::PropertyForm;
pub use request::{Valuation, ValuationRequest};
pub use service::{ApiConfig, BASE_URL_ENV, DEFAULT_BASE_URL, ServiceError, ValuationService};
pub use validate::{ValidationError, validate};
