use crate::common::*;

use crate::model::chart::labeled_line_chart_spec::*;

#[doc = r#"
    Request for a single labeled line chart.

    ```json
    { "records": [[12, "10:00"], [15, "10:05"]], "path": "charts", "fileName": "queue.pdf", "lineLabel": "Queue" }
    ```
"#]
#[derive(Debug, Clone, Deserialize, Getters)]
#[getset(get = "pub")]
#[serde(rename_all = "camelCase")]
pub struct ChartEvent {
    pub records: Vec<(f64, Value)>,
    pub path: PathBuf,
    pub file_name: String,
    pub line_label: String,
}

impl ChartEvent {
    pub fn output_path(&self) -> PathBuf {
        self.path.join(&self.file_name)
    }

    #[doc = "Record values become the y data, record labels become the x-axis categories"]
    pub fn to_chart_spec(&self, size: (u32, u32)) -> LabeledLineChartSpec {
        let (y_data, x_labels): (Vec<f64>, Vec<String>) = self
            .records
            .iter()
            .map(|(value, label)| (*value, label_text(label)))
            .unzip();

        LabeledLineChartSpec::new(self.line_label.clone(), x_labels, y_data, size)
    }
}

fn label_text(label: &Value) -> String {
    match label {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
