pub mod allocation_cycle;
