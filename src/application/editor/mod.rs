//! The post form controller and its state machine types.

mod controller;
mod types;

pub use controller::PostFormController;
pub use types::{EditorError, FieldEdit, FormState, SubmitOutcome};
