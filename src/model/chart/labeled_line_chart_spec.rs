use crate::common::*;

#[doc = "Line chart over categorical x labels"]
#[derive(Debug, Clone, Getters, new)]
#[getset(get = "pub")]
pub struct LabeledLineChartSpec {
    pub line_label: String,
    pub x_labels: Vec<String>,
    pub y_data: Vec<f64>,
    pub size: (u32, u32),
}

impl LabeledLineChartSpec {
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.x_labels.len() != self.y_data.len() {
            return Err(anyhow!(
                "[LabeledLineChartSpec->validate] X labels and Y data must have the same length: {} vs {}",
                self.x_labels.len(),
                self.y_data.len()
            ));
        }

        if self.x_labels.is_empty() {
            return Err(anyhow!(
                "[LabeledLineChartSpec->validate] Cannot generate chart with empty data"
            ));
        }

        Ok(())
    }
}
