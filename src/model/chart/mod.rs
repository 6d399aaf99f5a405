pub mod combo_chart_spec;
pub mod labeled_line_chart_spec;
pub mod line_chart_spec;
