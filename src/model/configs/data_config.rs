use crate::common::*;

#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    #[serde(default = "default_input_path")]
    pub input_path: PathBuf,
}

fn default_input_path() -> PathBuf {
    PathBuf::from("data/processed/jobs.txt")
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            input_path: default_input_path(),
        }
    }
}
