mod submissions;

pub use submissions::{ContactSubmission, NewSubmission, StoredSubmission, SubmissionStatus};
