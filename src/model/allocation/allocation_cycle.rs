use crate::common::*;

use crate::model::chart::combo_chart_spec::*;

#[doc = "Average cost and run time measured for one allocation cycle setting"]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters, new)]
#[getset(get = "pub")]
pub struct AllocationCycle {
    pub label: String,
    pub average_time_secs: f64,
    pub average_cost_usd: f64,
}

#[doc = "The measured allocation cycles"]
pub fn allocation_cycles() -> Vec<AllocationCycle> {
    vec![
        AllocationCycle::new("TSLA/2".to_string(), 4800.0, 0.15),
        AllocationCycle::new("TSLA/4".to_string(), 2300.0, 0.06),
        AllocationCycle::new("TSLA/8".to_string(), 2204.0, 0.08),
    ]
}

#[doc = r#"
    Lays the allocation cycles out as a dual-axis chart: monetary cost as bars on the
    left axis, execution time as a dashed line on the right axis.
"#]
pub fn allocation_combo_chart(cycles: &[AllocationCycle], size: (u32, u32)) -> ComboChartSpec {
    ComboChartSpec::new(
        "Allocation Cycle".to_string(),
        cycles.iter().map(|c| c.label.clone()).collect(),
        "Monetary Cost (USD)".to_string(),
        "Monetary Cost".to_string(),
        cycles.iter().map(|c| c.average_cost_usd).collect(),
        "Time (s)".to_string(),
        "Execution Time".to_string(),
        cycles.iter().map(|c| c.average_time_secs).collect(),
        size,
    )
}
