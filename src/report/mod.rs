//! Template-method report generation.
//!
//! Every report runs the same fixed pipeline over a task sequence:
//! filter, then sort, then render to text. Generators override the
//! stages they care about; [`service::ReportService`] holds them in a
//! name-keyed registry for the menu layer.

mod generator;
mod service;


pub use generator::{
    AssigneeReport, ExportReport, PriorityReport, ReportGenerator, StatusReport,
};
pub use service::ReportService;
