mod call_date;
mod email_address;
mod offering;
mod phone_number;

pub use call_date::CallDate;
pub use email_address::EmailAddress;
pub use offering::{ServiceOffering, CALL_TIME_SLOTS};
pub use phone_number::PhoneNumber;
