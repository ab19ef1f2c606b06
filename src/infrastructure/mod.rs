// Output files for the dashboard
pub mod report_writer;

pub use report_writer::ReportWriter;
