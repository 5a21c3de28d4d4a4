mod intake_client;

pub use intake_client::{Delivery, IntakeClient, IntakeTransport};
