use crate::common::*;

use crate::enums::metric_kind::*;
use crate::model::records::record_point::*;

#[derive(Debug, Clone, PartialEq, Getters, new)]
#[getset(get = "pub")]
pub struct MetricSeries {
    pub key: String,
    pub points: Vec<RecordPoint>,
}

impl MetricSeries {
    #[doc = "Resolves the series key. Keys outside the known metric table are an error."]
    pub fn kind(&self) -> anyhow::Result<MetricKind> {
        self.key.parse::<MetricKind>()
    }

    pub fn timestamps(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.timestamp).collect()
    }

    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.value).collect()
    }
}

#[doc = "Every array-valued entry of a record document, in document order"]
#[derive(Debug, Clone, PartialEq, Getters, new)]
#[getset(get = "pub")]
pub struct RecordCollection {
    pub base_name: String,
    pub series: Vec<MetricSeries>,
}

impl RecordCollection {
    #[doc = r#"
        Builds the collection from a parsed JSON document.

        Entries whose value is not an array are skipped. Every element of an array
        entry must start with a numeric value and a numeric timestamp; anything after
        those two is ignored.

        # Arguments
        * `base_name` - base name of the input file
        * `document` - the parsed JSON object

        # Returns
        * `anyhow::Result<RecordCollection>`
    "#]
    pub fn from_json(base_name: &str, document: &Value) -> anyhow::Result<Self> {
        let object = document.as_object().ok_or_else(|| {
            anyhow!("[RecordCollection->from_json] record document must be a JSON object")
        })?;

        let mut series: Vec<MetricSeries> = Vec::new();

        for (key, value) in object {
            if !value.is_array() {
                continue;
            }

            let points: Vec<RecordPoint> = value
                .as_array()
                .into_iter()
                .flatten()
                .enumerate()
                .map(|(index, entry)| record_point(key, index, entry))
                .collect::<anyhow::Result<_>>()?;

            series.push(MetricSeries::new(key.to_string(), points));
        }

        Ok(RecordCollection::new(base_name.to_string(), series))
    }
}

fn record_point(key: &str, index: usize, entry: &Value) -> anyhow::Result<RecordPoint> {
    let number = |position: usize| -> Option<f64> { entry.get(position).and_then(Value::as_f64) };

    match (number(0), number(1)) {
        (Some(value), Some(timestamp)) => Ok(RecordPoint::from((value, timestamp))),
        _ => Err(anyhow!(
            "[RecordCollection->from_json] '{}'[{}] must start with a numeric value and timestamp: {}",
            key,
            index,
            entry
        )),
    }
}
