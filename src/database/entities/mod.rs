pub mod dashboard_report_run;
pub mod data_upload_file_summary;
pub mod dataprep_flow;
pub mod dataprep_job;
pub mod pipeline_datasource;
pub mod self_serve_source;

pub use dashboard_report_run::ReportRunStatus;
