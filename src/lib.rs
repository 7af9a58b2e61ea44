//! # labcalc
//!
//! Request/response orchestration for a set of laboratory unit-conversion
//! calculators: PCR master mix volumes, buffer dilution (C1V1 = C2V2), DNA
//! concentration and µL to mmol conversion.
//!
//! ## Overview
//!
//! The arithmetic lives in a backend API. This crate holds everything the
//! browser front end needs around it:
//! - **Forms**: field state per calculator, including the editable PCR
//!   component rows
//! - **Contracts**: one typed request and success payload per endpoint
//! - **Decoding**: turning an HTTP status and body into an outcome or error
//! - **Views**: what a result container shows, and what Copy copies
//! - **Ordering**: dropping responses that a newer submission superseded
//!
//! ## Example
//!
//! ```
//! use labcalc::{Calculation, DilutionForm, DilutionRequest, TextOutput};
//! use labcalc::{decode_response, settle};
//!
//! let form = DilutionForm {
//!     c1: "10".into(),
//!     c2: "1".into(),
//!     v2: "100".into(),
//! };
//! let request = form.request();
//! assert_eq!(request.v1_unit, "µL");
//! assert_eq!(DilutionRequest::ENDPOINT.path(), "/calculate/dilution");
//!
//! let body = r#"{"success": true, "result": "10.00 µL", "explanation": "C1V1 = C2V2"}"#;
//! let view = settle::<DilutionRequest>(decode_response::<TextOutput>(200, body));
//!
//! assert!(view.is_visible());
//! assert_eq!(view.copy_text().as_deref(), Some("10.00 µL"));
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod forms;
pub mod rows;
pub mod submission;
pub mod view;

pub use api::{
    Calculation, Component, DilutionRequest, DnaConcentrationRequest, Endpoint, Outcome,
    PcrLine, PcrOutput, PcrRequest, TextOutput, UlToMmolRequest, V1_UNIT, decode_response,
};
pub use config::ClientConfig;
pub use error::{ApiError, Result, UNKNOWN_ERROR};
pub use forms::{DilutionForm, DnaConcentrationForm, PcrForm, UlToMmolForm};
pub use rows::{ComponentRow, ComponentRows, DEFAULT_COMPONENTS, RowField, RowId};
pub use submission::{SubmissionGate, Ticket};
pub use view::{CopyFeedback, MASTER_MIX_HEADERS, MasterMixTable, ResultBody, ResultView, settle};
