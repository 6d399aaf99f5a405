use crate::common::*;

use crate::dto::chart_event::*;
use crate::model::records::record_collection::*;

#[async_trait]
pub trait RecordService: Send + Sync {
    async fn load_records(&self, input_path: &Path) -> anyhow::Result<RecordCollection>;
    async fn load_chart_event(&self, event_path: &Path) -> anyhow::Result<ChartEvent>;
}
