use crate::common::*;

use crate::errors::chart_error::*;
use crate::model::{chart::chart_spec::*, job::job_table::*};

#[async_trait]
pub trait ChartService: Send + Sync {
    #[doc = "
        Render one Gantt chart for the policy described by `spec` and save it as a PNG
        # Arguments
        * `table` - Jobs to draw, in file order
        * `spec` - Policy, start-time column and title of the chart
        # Returns
        * Path of the written image. An existing file with the same name is overwritten.
    "]
    async fn render(&self, table: &JobTable, spec: &ChartSpec) -> Result<PathBuf, RenderError>;
}
