use crate::common::*;

use crate::errors::chart_error::*;
use crate::model::job::job_table::*;

#[async_trait]
pub trait JobTableRepository: Send + Sync {
    #[doc = "
        Read the simulation output and parse it into a `JobTable`
        # Errors
        * `DataLoadError` - the file is missing, unreadable or malformed
    "]
    async fn load(&self) -> Result<JobTable, DataLoadError>;
}
