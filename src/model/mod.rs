pub mod allocation;
pub mod chart;
pub mod configs;
pub mod records;
