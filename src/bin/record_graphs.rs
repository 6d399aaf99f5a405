use metric_graphs::common::*;

use metric_graphs::controller::main_controller::*;
use metric_graphs::model::configs::total_config::*;
use metric_graphs::service::{chart_service_impl::*, record_service_impl::*};
use metric_graphs::utils_modules::logger_utils::*;

#[derive(Debug, Parser)]
#[command(about = "Generate line graphs from JSON data")]
struct Args {
    #[arg(help = "Path to the input JSON file")]
    input_file: PathBuf,
}

#[tokio::main]
async fn main() {
    let args: Args = Args::parse();

    /* 전역로거 설정 및 초기 설정 */
    dotenv().ok();
    let _logger_handle: LoggerHandle = set_global_logger();

    info!("Record graphs start! input: {:?}", args.input_file);

    /* 의존 주입 */
    let main_controller: MainController<RecordServiceImpl, ChartServiceImpl> =
        MainController::new(
            RecordServiceImpl::new(),
            ChartServiceImpl::new(),
            get_total_config().clone(),
        );

    match main_controller.record_graphs_task(&args.input_file).await {
        Ok(written) => info!("{} record graphs written", written.len()),
        Err(e) => {
            error!("[main] {:?}", e);
            std::process::exit(1);
        }
    }
}
