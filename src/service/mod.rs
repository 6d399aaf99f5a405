pub mod chart_service_impl;
pub mod record_service_impl;
