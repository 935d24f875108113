/*
Description : Renders one Gantt chart per scheduling policy (FCFS, SPN, HRRN)
              from the tab separated output of the job scheduling simulator.

History     : [v.1.0.0] first create
*/

mod common;
mod external_deps;
mod prelude;
use common::*;

mod errors;

mod enums;

mod dto;

mod env_configuration;

mod traits;

mod model;
use model::{chart::chart_spec::*, configs::total_config::*};

mod utils_modules;
use utils_modules::logger_utils::*;

mod repository;
use repository::job_table_repository_impl::*;

mod service;
use service::chart_service_impl::*;

mod controller;
use controller::main_controller::*;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    /* 전역로거 설정 및 초기 설정 */
    dotenv().ok();
    let _logger: LoggerHandle = set_global_logger();

    info!("Gantt chart generation start!");

    /* 의존 주입 */
    let job_table_repository: JobTableRepositoryImpl =
        JobTableRepositoryImpl::from_config(get_data_config_info());
    let chart_service: ChartServiceImpl = ChartServiceImpl::new(get_render_config_info().clone());

    let main_controller: MainController<JobTableRepositoryImpl, ChartServiceImpl> =
        MainController::new(job_table_repository, chart_service, ChartSpec::defaults());

    match main_controller.main_task().await {
        Ok(written) => {
            for path in &written {
                info!("chart saved: {:?}", path);
            }
        }
        Err(e) => {
            error!("{:?}", e);
            std::process::exit(1);
        }
    }
}
