mod errors;
mod snapshot;
mod writer;

pub use errors::SnapshotError;
pub use snapshot::{Snapshot, SnapshotLoader};
pub use writer::ReportWriter;
