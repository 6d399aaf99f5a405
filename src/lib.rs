/*
Description : Chart generators for allocation cycle and cluster metric reports.
              allocation_cycle_chart - dual-axis cost/time chart of the measured allocation cycles
              record_graphs          - one line chart per record series of a JSON export
              generate_chart         - labeled line chart described by a chart event

History     : 2024-06-03       # [v.1.0.0] first create
*/

pub mod common;
pub mod external_deps;
pub mod prelude;

pub mod controller;
pub mod dto;
pub mod enums;
pub mod env_configuration;
pub mod model;
pub mod service;
pub mod traits;
pub mod utils_modules;
