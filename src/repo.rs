mod submissions;

pub use submissions::{StoreError, SubmissionRepo, SupabaseRepo};
