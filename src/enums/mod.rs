pub mod metric_kind;
pub mod output_format;
