use crate::common::*;

#[doc = "One `[value, timestamp]` pair of a recorded series"]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Getters, new)]
#[getset(get = "pub")]
pub struct RecordPoint {
    pub value: f64,
    pub timestamp: f64,
}

impl From<(f64, f64)> for RecordPoint {
    fn from((value, timestamp): (f64, f64)) -> Self {
        RecordPoint { value, timestamp }
    }
}
