use crate::common::*;
use crate::dto::gantt_layout::*;
use crate::errors::chart_error::*;
use crate::model::{chart::chart_spec::*, configs::render_config::*, job::job_table::*};
use crate::traits::service_traits::chart_service::*;
use plotters::prelude::{
    BitMapBackend, ChartBuilder, Color, IntoDrawingArea, IntoFont, PathElement, RGBAColor,
    RGBColor, Rectangle, ShapeStyle, Text, WHITE,
};
use plotters::style::text_anchor::{HPos, Pos, VPos};

/* 모든 정책 차트에 공통으로 붙는 상단 부제목 */
pub const CHART_SUBTITLE: &str = "Length of Time Each Job Executes";

const TITLE_PT: f64 = 16.0;
const SUBTITLE_PT: f64 = 8.0;
const TICK_LABEL_PT: f64 = 8.0;
/* 눈금 라벨과 축 사이 간격 (pt) */
const TICK_PAD_PT: f64 = 3.0;

#[derive(Debug, Clone, new)]
pub struct ChartServiceImpl {
    render_config: RenderConfig,
}

impl ChartServiceImpl {
    #[doc = "Output image path for `file_name` inside the configured output directory"]
    fn output_path(&self, file_name: &str) -> PathBuf {
        self.render_config.output_dir.join(file_name)
    }
}

#[doc = r#"
    `GanttLayout` 을 plotters 로 그려 PNG 파일로 저장하는 동기 함수.
    `spawn_blocking` 안에서만 호출된다.

    1. 흰 배경 캔버스를 만들고 사방에 padding 을 준다
    2. 공통 부제목을 맨 위에, 그 아래 정책별 제목을 캡션으로 그린다
    3. x축은 `[0, x_limit]` 에 2 단위 눈금, y축 눈금은 막대 중심(slot)에 프로세스 라벨
    4. 막대 하나당 `[begin, begin + duration] x [slot - 0.145, slot + 0.145]` 사각형
"#]
fn draw_gantt(
    layout: &GanttLayout,
    config: &RenderConfig,
    output_path: &Path,
) -> anyhow::Result<()> {
    let (width, height) = config.canvas_size();
    let pad: i32 = config.padding_px() as i32;
    let title_px: f64 = f64::from(config.font_px(TITLE_PT));
    let subtitle_px: f64 = f64::from(config.font_px(SUBTITLE_PT));
    let tick_px: f64 = f64::from(config.font_px(TICK_LABEL_PT));

    let text_color: RGBColor = RGBColor(38, 38, 38);
    let bar_color: RGBColor = RGBColor(76, 114, 176);
    let grid_color: RGBAColor = RGBColor(128, 128, 128).mix(0.4);

    let root = BitMapBackend::new(output_path, (width, height)).into_drawing_area();
    root.fill(&WHITE)?;

    let padded = root.margin(pad, pad, pad, pad);
    let plot_area = padded.titled(
        CHART_SUBTITLE,
        ("sans-serif", subtitle_px).into_font().color(&text_color),
    )?;

    let tick_pad: i32 = config.font_px(TICK_PAD_PT) as i32;
    let grid_style: ShapeStyle = ShapeStyle::from(&grid_color).stroke_width(1);

    let mut chart = ChartBuilder::on(&plot_area)
        .caption(
            layout.title(),
            ("sans-serif", title_px).into_font().color(&text_color),
        )
        .margin(pad)
        .x_label_area_size((tick_px * 1.8) as i32)
        .y_label_area_size((tick_px * 3.0) as i32)
        .build_cartesian_2d(0f64..layout.x_limit(), 0f64..layout.y_limit())?;

    /* 격자: x 눈금마다 세로선, 막대 중심마다 가로선 */
    chart.draw_series(layout.x_ticks().iter().map(|x| {
        PathElement::new(vec![(*x, 0.0), (*x, layout.y_limit())], grid_style)
    }))?;
    chart.draw_series(layout.slots().into_iter().map(|y| {
        PathElement::new(vec![(0.0, y), (layout.x_limit(), y)], grid_style)
    }))?;

    chart.draw_series(layout.bars().iter().map(|bar| {
        let (bottom, top) = bar.y_span();
        Rectangle::new([(bar.begin(), bottom), (bar.end(), top)], bar_color.filled())
    }))?;

    /* 눈금 라벨은 plotting 영역 밖(label area)에 픽셀 좌표로 직접 그린다 */
    let tick_font = ("sans-serif", tick_px).into_font().color(&text_color);

    for (y, label) in layout.y_tick_labels() {
        let (px, py) = chart.backend_coord(&(0.0, y));
        root.draw(&Text::new(
            label,
            (px - tick_pad, py),
            tick_font.pos(Pos::new(HPos::Right, VPos::Center)),
        ))?;
    }

    for (x, label) in layout.x_tick_labels() {
        let (px, py) = chart.backend_coord(&(x, 0.0));
        root.draw(&Text::new(
            label,
            (px, py + tick_pad),
            tick_font.pos(Pos::new(HPos::Center, VPos::Top)),
        ))?;
    }

    root.present()?;
    Ok(())
}

#[async_trait]
impl ChartService for ChartServiceImpl {
    async fn render(&self, table: &JobTable, spec: &ChartSpec) -> Result<PathBuf, RenderError> {
        if table.is_empty() {
            return Err(RenderError::EmptyTable {
                title: spec.title().to_string(),
            });
        }

        /* 출력 디렉토리는 만들지 않는다. 없으면 환경 문제로 보고 바로 실패시킨다. */
        let output_dir: &Path = &self.render_config.output_dir;
        if !output_dir.is_dir() {
            return Err(RenderError::OutputDirMissing(output_dir.to_path_buf()));
        }

        let layout: GanttLayout = GanttLayout::build(table, spec);
        let output_path: PathBuf = self.output_path(layout.file_name());
        let config: RenderConfig = self.render_config.clone();

        let task_path: PathBuf = output_path.clone();
        let handle: tokio::task::JoinHandle<Result<(), anyhow::Error>> =
            tokio::task::spawn_blocking(move || draw_gantt(&layout, &config, &task_path));

        handle
            .await
            .map_err(|e| RenderError::Join(e.to_string()))?
            .map_err(|e| RenderError::Drawing {
                path: output_path.clone(),
                reason: format!("{:#}", e),
            })?;

        info!(
            "[ChartServiceImpl->render] {} chart generated successfully: {:?}",
            spec.policy().short_name(),
            output_path
        );

        Ok(output_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::enums::scheduling_policy::*;

    const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    fn service_for(output_dir: &Path) -> ChartServiceImpl {
        let render_config = RenderConfig {
            output_dir: output_dir.to_path_buf(),
            ..RenderConfig::default()
        };
        ChartServiceImpl::new(render_config)
    }

    fn sans_serif_available() -> bool {
        ("sans-serif", 12.0).into_font().box_size("A").is_ok()
    }

    #[doc = "(width, height) from the IHDR chunk of a PNG file"]
    fn png_size(bytes: &[u8]) -> (u32, u32) {
        assert_eq!(&bytes[..8], &PNG_SIGNATURE);
        let width = u32::from_be_bytes([bytes[16], bytes[17], bytes[18], bytes[19]]);
        let height = u32::from_be_bytes([bytes[20], bytes[21], bytes[22], bytes[23]]);
        (width, height)
    }

    fn sample_table() -> JobTable {
        JobTable::parse_tsv("A\t0\t2\t0\t0\t0\nB\t1\t3\t2\t6\t2\nC\t2\t4\t5\t2\t5\n").unwrap()
    }

    #[tokio::test]
    async fn missing_output_dir_is_a_render_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("plots");
        let service = service_for(&missing);

        let err = service
            .render(&sample_table(), &ChartSpec::for_policy(SchedulingPolicy::Fcfs))
            .await
            .unwrap_err();

        assert!(matches!(err, RenderError::OutputDirMissing(path) if path == missing));
        assert!(!missing.exists());
    }

    #[tokio::test]
    async fn empty_table_is_a_render_error() {
        let dir = tempfile::tempdir().unwrap();
        let service = service_for(dir.path());

        let err = service
            .render(&JobTable::new(Vec::new()), &ChartSpec::for_policy(SchedulingPolicy::Spn))
            .await
            .unwrap_err();

        assert!(matches!(err, RenderError::EmptyTable { .. }));
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn writes_one_png_per_policy_and_overwrites() {
        if !sans_serif_available() {
            eprintln!("no sans-serif font installed, skipping PNG output check");
            return;
        }

        let dir = tempfile::tempdir().unwrap();
        let service = service_for(dir.path());
        let table = sample_table();

        /* 같은 이름의 기존 파일은 조용히 덮어써야 한다 */
        let stale = dir.path().join("highest_response_ratio_next.png");
        fs::write(&stale, b"stale").unwrap();

        for spec in ChartSpec::defaults() {
            let path = service.render(&table, &spec).await.unwrap();
            assert_eq!(path, dir.path().join(spec.file_name()));

            let bytes = fs::read(&path).unwrap();
            assert_eq!(png_size(&bytes), (2000, 750));
        }

        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 3);
        assert_ne!(fs::read(&stale).unwrap(), b"stale".to_vec());
    }
}
