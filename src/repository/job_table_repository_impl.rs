use crate::common::*;

use crate::enums::scheduling_policy::*;
use crate::errors::chart_error::*;
use crate::model::{configs::data_config::*, job::job_table::*};
use crate::traits::repository_traits::job_table_repository::*;

#[derive(Debug, Clone, new)]
pub struct JobTableRepositoryImpl {
    input_path: PathBuf,
}

impl JobTableRepositoryImpl {
    pub fn from_config(data_config: &DataConfig) -> Self {
        JobTableRepositoryImpl::new(data_config.input_path.clone())
    }
}

#[async_trait]
impl JobTableRepository for JobTableRepositoryImpl {
    async fn load(&self) -> Result<JobTable, DataLoadError> {
        let content: String = tokio::fs::read_to_string(&self.input_path)
            .await
            .map_err(|source| DataLoadError::Io {
                path: self.input_path.clone(),
                source,
            })?;

        let table: JobTable = JobTable::parse_tsv(&content)?;

        /* 시작 시각은 상위 시뮬레이터가 계산한 값이므로 거부하지 않고 경고만 남긴다 */
        for row in table.rows() {
            for policy in SchedulingPolicy::ALL {
                if policy.start_time(row) < row.arrival_time() {
                    warn!(
                        "[JobTableRepositoryImpl->load] process {} starts before its arrival under {}",
                        row.process_id(),
                        policy.short_name()
                    );
                }
            }
        }

        info!(
            "[JobTableRepositoryImpl->load] {} jobs loaded from {:?}",
            table.len(),
            self.input_path
        );

        Ok(table)
    }
}
