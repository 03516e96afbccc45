// kvbench - Serializer and write-strategy benchmark harness
//
// Library half of the binary: store/tracing setup, the quick comparison,
// the full statistical run and their text reports.

pub mod compare;
pub mod full;
pub mod init;
pub mod report;
pub mod stats;

pub use compare::{run_quick, size_report, QuickReport};
pub use full::{run_full, FullResult};
pub use init::{init_store, init_tracing};
pub use stats::Summary;
