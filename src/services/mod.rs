pub mod failure_log;
pub mod job_poller;
pub mod report_writer;
pub mod result_parser;

pub use failure_log::FailureLog;
pub use job_poller::{JobPoller, PollOutcome, PollState};
pub use report_writer::{build_rows, write_report, ReportRow};
pub use result_parser::ResultParser;
