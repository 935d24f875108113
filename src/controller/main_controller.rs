use crate::common::*;

use crate::model::{chart::chart_spec::*, job::job_table::*};

use crate::traits::{
    repository_traits::job_table_repository::*, service_traits::chart_service::*,
};

#[derive(Debug, new)]
pub struct MainController<R: JobTableRepository, C: ChartService> {
    job_table_repository: R,
    chart_service: C,
    chart_specs: Vec<ChartSpec>,
}

impl<R: JobTableRepository, C: ChartService> MainController<R, C> {
    #[doc = r#"
        작업 테이블을 한 번 읽어온 뒤, 정책별 차트를 순서대로 생성하는 핵심 함수.

        1. `job_table_repository.load()` 로 시뮬레이션 결과를 읽어온다
           - 실패하면 차트를 한 장도 만들지 않고 바로 종료한다
        2. `chart_specs` 순서(FCFS -> SPN -> HRRN)대로 `chart_service.render()` 를 호출한다
           - 하나라도 실패하면 남은 차트는 생성하지 않고 종료한다
             (출력 디렉토리 누락 등 환경 문제는 모든 차트에서 반복되기 때문)

        # Returns
        * `anyhow::Result<Vec<PathBuf>>` - 생성된 이미지 경로 목록 (생성 순서)
    "#]
    pub async fn main_task(&self) -> anyhow::Result<Vec<PathBuf>> {
        let job_table: JobTable = self
            .job_table_repository
            .load()
            .await
            .context("[MainController->main_task] failed to load the job table")?;

        let mut written: Vec<PathBuf> = Vec::with_capacity(self.chart_specs.len());

        for spec in &self.chart_specs {
            let path: PathBuf = self
                .chart_service
                .render(&job_table, spec)
                .await
                .with_context(|| {
                    format!(
                        "[MainController->main_task] failed to render the '{}' chart",
                        spec.title()
                    )
                })?;

            written.push(path);
        }

        info!(
            "[MainController->main_task] {} charts written for {} jobs",
            written.len(),
            job_table.len()
        );

        Ok(written)
    }
}
