use crate::common::*;

/* matplotlib 기준 포인트(pt) 단위를 픽셀로 환산할 때 쓰는 기준 DPI */
const POINTS_PER_INCH: f64 = 72.0;

#[doc = r#"
    이미지 출력 관련 설정.
    기본값은 8 x 3 inch 캔버스, 250 DPI, 0.1 inch 여백.
"#]
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub output_dir: PathBuf,
    pub dpi: u32,
    pub figure_width_in: f64,
    pub figure_height_in: f64,
    pub pad_inches: f64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("plots"),
            dpi: 250,
            figure_width_in: 8.0,
            figure_height_in: 3.0,
            pad_inches: 0.1,
        }
    }
}

impl RenderConfig {
    #[doc = "Canvas size in pixels: figure size (inches) times DPI"]
    pub fn canvas_size(&self) -> (u32, u32) {
        (
            self.inches_to_px(self.figure_width_in),
            self.inches_to_px(self.figure_height_in),
        )
    }

    pub fn padding_px(&self) -> u32 {
        self.inches_to_px(self.pad_inches)
    }

    #[doc = "Converts a font size in points to pixels at the configured DPI"]
    pub fn font_px(&self, points: f64) -> u32 {
        (points * f64::from(self.dpi) / POINTS_PER_INCH).round() as u32
    }

    fn inches_to_px(&self, inches: f64) -> u32 {
        (inches * f64::from(self.dpi)).round() as u32
    }
}
