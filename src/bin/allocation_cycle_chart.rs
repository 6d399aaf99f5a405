use metric_graphs::common::*;

use metric_graphs::controller::main_controller::*;
use metric_graphs::model::configs::total_config::*;
use metric_graphs::service::{chart_service_impl::*, record_service_impl::*};
use metric_graphs::utils_modules::logger_utils::*;

#[derive(Debug, Parser)]
#[command(about = "Draw the allocation cycle cost/time comparison chart")]
struct Args {}

#[tokio::main]
async fn main() {
    Args::parse();

    /* 전역로거 설정 및 초기 설정 */
    dotenv().ok();
    let _logger_handle: LoggerHandle = set_global_logger();

    info!("Allocation cycle chart start!");

    /* 의존 주입 */
    let main_controller: MainController<RecordServiceImpl, ChartServiceImpl> =
        MainController::new(
            RecordServiceImpl::new(),
            ChartServiceImpl::new(),
            get_total_config().clone(),
        );

    match main_controller.allocation_chart_task().await {
        Ok(output_path) => info!("Allocation cycle chart written to {:?}", output_path),
        Err(e) => {
            error!("[main] {:?}", e);
            std::process::exit(1);
        }
    }
}
