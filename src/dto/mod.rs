pub mod chart_event;
