mod model;
mod validator;

pub use model::{ContactFormModel, FormField, FormStatus, CLOSE_DELAY};
pub use validator::{check, min_call_date, ClientValidationError};
