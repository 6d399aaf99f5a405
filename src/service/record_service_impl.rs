use crate::common::*;

use crate::dto::chart_event::*;
use crate::model::records::record_collection::*;
use crate::traits::service_traits::record_service::*;
use crate::utils_modules::io_utils::*;

#[derive(Debug, Clone, new)]
pub struct RecordServiceImpl;

#[async_trait]
impl RecordService for RecordServiceImpl {
    #[doc = r#"
        Reads a record document and collects its array-valued entries.

        # Arguments
        * `input_path` - JSON file, e.g. `execution_data_150.json`

        # Returns
        * `anyhow::Result<RecordCollection>` - series in document order, named after the file's base name
    "#]
    async fn load_records(&self, input_path: &Path) -> anyhow::Result<RecordCollection> {
        let base_name: String = input_base_name(input_path)?;
        let document: Value = read_json_from_file(input_path).await?;

        let collection: RecordCollection = RecordCollection::from_json(&base_name, &document)
            .with_context(|| format!("[RecordServiceImpl->load_records] {:?}", input_path))?;

        info!(
            "Loaded {} record series from {:?}",
            collection.series().len(),
            input_path
        );

        Ok(collection)
    }

    async fn load_chart_event(&self, event_path: &Path) -> anyhow::Result<ChartEvent> {
        let event: ChartEvent = read_json_from_file(event_path).await.with_context(|| {
            format!(
                "[RecordServiceImpl->load_chart_event] {:?} is not a chart event",
                event_path
            )
        })?;

        Ok(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn loads_records_named_after_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let input_path: PathBuf = dir.path().join("execution_data_600.json");
        std::fs::write(
            &input_path,
            r#"{"approximateNumberOfMessagesRecords": [[120, 0], [80, 60]], "batches": 600}"#,
        )
        .unwrap();

        let collection = RecordServiceImpl::new()
            .load_records(&input_path)
            .await
            .unwrap();

        assert_eq!(collection.base_name(), "execution_data_600");
        assert_eq!(collection.series().len(), 1);
        assert_eq!(collection.series()[0].values(), vec![120.0, 80.0]);
    }

    #[tokio::test]
    async fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = RecordServiceImpl::new()
            .load_records(&dir.path().join("execution_data_150.json"))
            .await;

        assert!(result.is_err());
    }
}
