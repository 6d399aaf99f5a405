pub mod chart_service;
pub mod record_service;
