//! Registration form state and model.

mod model;
mod state;

pub use model::{FormModel, SubmitOutcome};
pub use state::{FormState, UserData, UserDataErrors, is_complete, is_valid};
