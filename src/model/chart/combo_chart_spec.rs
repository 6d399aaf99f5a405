use crate::common::*;

#[doc = r#"
    Dual-axis chart: bars on the left y-axis, a dashed line on the right y-axis,
    both over the same categorical x-axis.
"#]
#[derive(Debug, Clone, Getters, new)]
#[getset(get = "pub")]
pub struct ComboChartSpec {
    pub x_desc: String,
    pub categories: Vec<String>,
    pub bar_desc: String,
    pub bar_label: String,
    pub bar_values: Vec<f64>,
    pub line_desc: String,
    pub line_label: String,
    pub line_values: Vec<f64>,
    pub size: (u32, u32),
}

impl ComboChartSpec {
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.categories.is_empty() {
            return Err(anyhow!(
                "[ComboChartSpec->validate] Cannot generate chart with empty data"
            ));
        }

        if self.bar_values.len() != self.categories.len()
            || self.line_values.len() != self.categories.len()
        {
            return Err(anyhow!(
                "[ComboChartSpec->validate] Categories, bars and line points must have the same length: {} vs {} vs {}",
                self.categories.len(),
                self.bar_values.len(),
                self.line_values.len()
            ));
        }

        Ok(())
    }
}
