use crate::common::*;

use crate::model::configs::{data_config::*, render_config::*};

use crate::utils_modules::io_utils::*;

use crate::env_configuration::env_config::*;

static TOTAL_CONFIG: once_lazy<TotalConfig> = once_lazy::new(initialize_chart_config);

#[doc = "Function to initialize chart configuration information instances"]
pub fn initialize_chart_config() -> TotalConfig {
    info!("initialize_chart_config() START!");
    TotalConfig::new()
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TotalConfig {
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub render: RenderConfig,
}

#[doc = "입력 데이터 config 정보"]
pub fn get_data_config_info() -> &'static DataConfig {
    &TOTAL_CONFIG.data
}

#[doc = "이미지 렌더링 config 정보"]
pub fn get_render_config_info() -> &'static RenderConfig {
    &TOTAL_CONFIG.render
}

impl TotalConfig {
    fn new() -> Self {
        let Some(config_path) = CHART_CONFIG_PATH.as_deref() else {
            info!("[TotalConfig->new] CHART_CONFIG_PATH not set, using default configuration");
            return TotalConfig::default();
        };

        match read_toml_from_file::<TotalConfig>(config_path) {
            Ok(config) => config,
            Err(e) => {
                let err_msg = "Failed to convert the data from CHART_CONFIG_PATH into the TotalConfig structure.";
                error!("[TotalConfig->new] {} {:?}", err_msg, e);
                std::process::exit(1);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let config: TotalConfig = toml::from_str("[render]\ndpi = 100\n").unwrap();

        assert_eq!(
            &config.data.input_path,
            &PathBuf::from("data/processed/jobs.txt")
        );
        assert_eq!(config.render.dpi, 100);
        assert_eq!(config.render.output_dir, PathBuf::from("plots"));
        assert_eq!(config.render.canvas_size(), (800, 300));
    }

    #[test]
    fn reads_bundled_config_file() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/config/chart_config.toml");
        let config: TotalConfig = read_toml_from_file(path).unwrap();

        assert_eq!(config.render.dpi, 250);
        assert_eq!(config.render.canvas_size(), (2000, 750));
    }
}
