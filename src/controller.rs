/// Contact and call-scheduling endpoints
pub mod contact;
