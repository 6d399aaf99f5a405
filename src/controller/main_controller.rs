use crate::common::*;

use crate::utils_modules::io_utils::*;

use crate::model::{
    allocation::allocation_cycle::*,
    chart::line_chart_spec::*,
    configs::total_config::*,
    records::record_collection::*,
};

use crate::dto::chart_event::*;

use crate::enums::metric_kind::*;

use crate::traits::service_traits::{chart_service::*, record_service::*};

const ALLOCATION_CHART_NAME: &str = "ac_test";
const TIMESTAMP_DESC: &str = "Time Stamp (seconds)";

#[derive(Debug, new)]
pub struct MainController<R: RecordService, C: ChartService> {
    record_service: R,
    chart_service: C,
    config: TotalConfig,
}

impl<R: RecordService, C: ChartService> MainController<R, C> {
    #[doc = r#"
        Draws the allocation cycle comparison as a dual-axis chart.

        Monetary cost is drawn as bars on the left axis, execution time as a dashed
        line on the right axis. The chart is written as `ac_test.<ext>` into the
        configured output directory, replacing an earlier run.

        # Returns
        * `anyhow::Result<PathBuf>` - path of the written chart
    "#]
    pub async fn allocation_chart_task(&self) -> anyhow::Result<PathBuf> {
        let output_path: PathBuf = self.config.output().directory().join(format!(
            "{}.{}",
            ALLOCATION_CHART_NAME,
            self.config.output().format().extension()
        ));

        let chart_spec = allocation_combo_chart(
            &allocation_cycles(),
            self.config.combo_chart().size(),
        );

        self.chart_service
            .generate_combo_chart(chart_spec, &output_path)
            .await?;

        Ok(output_path)
    }

    #[doc = r#"
        Draws one line chart per record series of a JSON document.

        1. Loads the document; every array-valued key is a series, visited in document order
        2. Resolves the y-axis label of the key. An unknown key stops the run with an
           error, charts of the keys before it stay on disk
        3. Plots value over timestamp, with whole-number y ticks for cluster sizes
        4. Writes `<base name>_<key>.<ext>` into the configured output directory

        # Arguments
        * `input_path` - record document, e.g. `execution_data_150.json`

        # Returns
        * `anyhow::Result<Vec<PathBuf>>` - written charts, in document order
    "#]
    pub async fn record_graphs_task(&self, input_path: &Path) -> anyhow::Result<Vec<PathBuf>> {
        let collection: RecordCollection = self.record_service.load_records(input_path).await?;
        let title: String = self.config.title_for(collection.base_name());

        let mut written: Vec<PathBuf> = Vec::new();

        for series in collection.series() {
            let metric_kind: MetricKind = series.kind().with_context(|| {
                format!(
                    "[MainController->record_graphs_task] no y-axis label for '{}' in {:?}",
                    series.key(),
                    input_path
                )
            })?;

            if metric_kind.integer_ticks() {
                info!(
                    "{} uses whole-number ticks for {}",
                    collection.base_name(),
                    series.key()
                );
            }

            let output_path: PathBuf = chart_output_path(
                self.config.output().directory(),
                collection.base_name(),
                series.key(),
                *self.config.output().format(),
            );

            let points: Vec<(f64, f64)> = series
                .timestamps()
                .into_iter()
                .zip(series.values())
                .collect();

            let chart_spec: LineChartSpec = LineChartSpec::new(
                title.clone(),
                TIMESTAMP_DESC.to_string(),
                metric_kind.y_label().to_string(),
                points,
                metric_kind.integer_ticks(),
                self.config.line_chart().size(),
            );

            self.chart_service
                .generate_line_chart(chart_spec, &output_path)
                .await?;

            written.push(output_path);
        }

        info!(
            "Generated {} charts from {:?}",
            written.len(),
            input_path
        );

        Ok(written)
    }

    #[doc = r#"
        Draws the labeled line chart described by a chart event.

        # Arguments
        * `event_path` - JSON chart event

        # Returns
        * `anyhow::Result<PathBuf>` - `<path>/<fileName>` of the event
    "#]
    pub async fn chart_event_task(&self, event_path: &Path) -> anyhow::Result<PathBuf> {
        let event: ChartEvent = self.record_service.load_chart_event(event_path).await?;
        let output_path: PathBuf = event.output_path();

        self.chart_service
            .generate_labeled_line_chart(
                event.to_chart_spec(self.config.line_chart().size()),
                &output_path,
            )
            .await?;

        Ok(output_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::output_format::*;
    use crate::model::chart::{combo_chart_spec::*, labeled_line_chart_spec::*};
    use crate::service::{chart_service_impl::*, record_service_impl::*};
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingChartService {
        line_charts: Mutex<Vec<(LineChartSpec, PathBuf)>>,
    }

    #[async_trait]
    impl ChartService for RecordingChartService {
        async fn generate_line_chart(
            &self,
            spec: LineChartSpec,
            output_path: &Path,
        ) -> anyhow::Result<()> {
            self.line_charts
                .lock()
                .unwrap()
                .push((spec, output_path.to_path_buf()));
            Ok(())
        }

        async fn generate_combo_chart(
            &self,
            _spec: ComboChartSpec,
            _output_path: &Path,
        ) -> anyhow::Result<()> {
            Ok(())
        }

        async fn generate_labeled_line_chart(
            &self,
            _spec: LabeledLineChartSpec,
            _output_path: &Path,
        ) -> anyhow::Result<()> {
            Ok(())
        }
    }

    fn write_input(dir: &Path, file_name: &str, content: &str) -> PathBuf {
        let input_path: PathBuf = dir.join(file_name);
        std::fs::write(&input_path, content).unwrap();
        input_path
    }

    #[tokio::test]
    async fn cluster_size_chart_is_named_after_the_input() {
        let dir = tempfile::tempdir().unwrap();
        let input_path = write_input(
            dir.path(),
            "execution_data_150.json",
            r#"{"clusterSizeRecords": [[3, 0], [5, 10]]}"#,
        );
        let out_dir: PathBuf = dir.path().join("charts");

        let controller = MainController::new(
            RecordServiceImpl::new(),
            ChartServiceImpl::new(),
            TotalConfig::default().with_output_directory(&out_dir),
        );

        let written = controller.record_graphs_task(&input_path).await.unwrap();

        let expected: PathBuf = out_dir.join("execution_data_150_clusterSizeRecords.pdf");
        assert_eq!(written, vec![expected.clone()]);

        let pdf: Vec<u8> = std::fs::read(&expected).unwrap();
        assert!(pdf.starts_with(b"%PDF"));
        assert!(pdf.windows(b"/Font".len()).any(|window| window == b"/Font"));
    }

    #[tokio::test]
    async fn cluster_size_ticks_are_whole_numbers() {
        let dir = tempfile::tempdir().unwrap();
        let input_path = write_input(
            dir.path(),
            "execution_data_150.json",
            r#"{"clusterSizeRecords": [[3, 0], [5, 10]], "processingTimeRecords": [[12.5, 0], [9.75, 10]]}"#,
        );

        let controller = MainController::new(
            RecordServiceImpl::new(),
            RecordingChartService::default(),
            TotalConfig::default().with_output_directory(dir.path()),
        );

        controller.record_graphs_task(&input_path).await.unwrap();

        let charts = controller.chart_service.line_charts.lock().unwrap();
        assert_eq!(charts.len(), 2);

        let (cluster_spec, cluster_path) = &charts[0];
        assert_eq!(cluster_spec.y_ticks().unwrap(), vec![3.0, 4.0, 5.0]);
        assert_eq!(cluster_spec.y_desc(), "Cluster Size");
        assert_eq!(cluster_spec.x_desc(), "Time Stamp (seconds)");
        assert_eq!(cluster_spec.title(), "low-demand scenario (150 Batches)");
        assert_eq!(cluster_spec.points(), &vec![(0.0, 3.0), (10.0, 5.0)]);
        assert!(cluster_path.ends_with("execution_data_150_clusterSizeRecords.pdf"));

        let (processing_spec, _) = &charts[1];
        assert!(!processing_spec.integer_y());
        assert_eq!(processing_spec.y_desc(), "Processing Time(s)");
    }

    #[tokio::test]
    async fn unknown_key_fails_after_earlier_charts() {
        let dir = tempfile::tempdir().unwrap();
        let input_path = write_input(
            dir.path(),
            "execution_data_300.json",
            r#"{"creditBalanceRecords": [[40, 0], [38, 5]], "memoryRecords": [[1, 0]], "clusterSizeRecords": [[2, 0]]}"#,
        );

        let controller = MainController::new(
            RecordServiceImpl::new(),
            RecordingChartService::default(),
            TotalConfig::default().with_output_directory(dir.path()),
        );

        let err = controller.record_graphs_task(&input_path).await.unwrap_err();
        assert!(format!("{:#}", err).contains("unrecognized record key 'memoryRecords'"));

        let charts = controller.chart_service.line_charts.lock().unwrap();
        assert_eq!(charts.len(), 1);
        assert_eq!(charts[0].0.y_desc(), "CPU Credits");
    }

    #[tokio::test]
    async fn rerun_overwrites_the_same_svg() {
        let dir = tempfile::tempdir().unwrap();
        let input_path = write_input(
            dir.path(),
            "execution_data_600.json",
            r#"{"approximateNumberOfMessagesRecords": [[120, 0], [80, 60], [30, 120]]}"#,
        );

        let mut config = TotalConfig::default().with_output_directory(dir.path());
        config.output.format = OutputFormat::Svg;

        let controller = MainController::new(RecordServiceImpl::new(), ChartServiceImpl::new(), config);

        let first = controller.record_graphs_task(&input_path).await.unwrap();
        let second = controller.record_graphs_task(&input_path).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(
            first,
            vec![dir
                .path()
                .join("execution_data_600_approximateNumberOfMessagesRecords.svg")]
        );

        let svg: String = std::fs::read_to_string(&first[0]).unwrap();
        assert!(svg.contains("Number of Requests"));
        assert!(svg.contains("high-demand scenario (600 Batches)"));
    }

    #[tokio::test]
    async fn allocation_chart_is_written() {
        let dir = tempfile::tempdir().unwrap();

        let controller = MainController::new(
            RecordServiceImpl::new(),
            ChartServiceImpl::new(),
            TotalConfig::default().with_output_directory(dir.path()),
        );

        let output_path = controller.allocation_chart_task().await.unwrap();

        assert_eq!(output_path, dir.path().join("ac_test.pdf"));
        assert!(std::fs::metadata(&output_path).unwrap().len() > 0);
    }

    #[tokio::test]
    async fn chart_event_is_drawn_at_its_path() {
        let dir = tempfile::tempdir().unwrap();
        let out_dir: PathBuf = dir.path().join("events");
        let event = json!({
            "records": [[4, "10:00"], [6, "10:05"], [5, "10:10"]],
            "path": out_dir,
            "fileName": "queue.svg",
            "lineLabel": "Queued batches"
        });
        let event_path = write_input(dir.path(), "event.json", &event.to_string());

        let controller = MainController::new(
            RecordServiceImpl::new(),
            ChartServiceImpl::new(),
            TotalConfig::default(),
        );

        let output_path = controller.chart_event_task(&event_path).await.unwrap();

        assert_eq!(output_path, out_dir.join("queue.svg"));
        let svg: String = std::fs::read_to_string(&output_path).unwrap();
        assert!(svg.contains("Queued batches"));
        assert!(svg.contains("10:05"));
    }

    #[tokio::test]
    async fn chart_event_file_name_picks_png() {
        let dir = tempfile::tempdir().unwrap();
        let event = json!({
            "records": [[4, "10:00"], [6, "10:05"]],
            "path": dir.path(),
            "fileName": "chart.png",
            "lineLabel": "Queued batches",
            "yAxesUnstacked": true
        });
        let event_path = write_input(dir.path(), "event.json", &event.to_string());

        let controller = MainController::new(
            RecordServiceImpl::new(),
            ChartServiceImpl::new(),
            TotalConfig::default(),
        );

        let output_path = controller.chart_event_task(&event_path).await.unwrap();

        assert_eq!(output_path, dir.path().join("chart.png"));
        assert!(std::fs::read(&output_path).unwrap().starts_with(b"\x89PNG"));
    }
}
