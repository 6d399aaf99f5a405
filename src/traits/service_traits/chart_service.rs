use crate::common::*;

use crate::model::chart::{
    combo_chart_spec::*, labeled_line_chart_spec::*, line_chart_spec::*,
};

#[async_trait]
pub trait ChartService: Send + Sync {
    #[doc = "
        Generate a time-series line chart and save it to `output_path`
        # Arguments
        * `spec` - title, axis descriptions, points and tick mode of the chart
        * `output_path` - Path where the chart will be saved (`.pdf`, `.svg` or `.png`)
    "]
    async fn generate_line_chart(
        &self,
        spec: LineChartSpec,
        output_path: &Path,
    ) -> anyhow::Result<()>;

    #[doc = "
        Generate a dual-axis chart (bars on the left axis, dashed line on the right axis)
        # Arguments
        * `spec` - categories and both series
        * `output_path` - Path where the chart will be saved (`.pdf`, `.svg` or `.png`)
    "]
    async fn generate_combo_chart(
        &self,
        spec: ComboChartSpec,
        output_path: &Path,
    ) -> anyhow::Result<()>;

    #[doc = "
        Generate a line chart over categorical x labels
        # Arguments
        * `spec` - x labels, y data and legend label
        * `output_path` - Path where the chart will be saved (`.pdf`, `.svg` or `.png`)
    "]
    async fn generate_labeled_line_chart(
        &self,
        spec: LabeledLineChartSpec,
        output_path: &Path,
    ) -> anyhow::Result<()>;
}
