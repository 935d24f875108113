use crate::common::*;

use crate::model::{chart::chart_spec::*, job::job_table::*};

/* 막대 사이 간격과 막대 두께. 두께가 간격보다 작으므로 막대끼리 겹치지 않는다. */
pub const SLOT_STEP: f64 = 0.3;
pub const BAR_HEIGHT: f64 = 0.29;
pub const X_TICK_STEP: f64 = 2.0;
/* 눈금이 이보다 많아지면 간격을 2의 배수로 넓힌다 */
pub const MAX_X_TICKS: usize = 40;

#[doc = r#"
    차트에 그려질 막대 하나.

    # Fields
    * `label` - 프로세스 식별자 (y축 라벨)
    * `begin` - 정책별 시작 시각 (막대의 왼쪽 끝)
    * `duration` - 실행 시간 (막대의 길이)
    * `slot` - 막대의 세로 중심 좌표
"#]
#[derive(Debug, Clone, PartialEq, Getters, CopyGetters, new)]
pub struct GanttBar {
    #[getset(get = "pub")]
    label: String,
    #[getset(get_copy = "pub")]
    begin: f64,
    #[getset(get_copy = "pub")]
    duration: f64,
    #[getset(get_copy = "pub")]
    slot: f64,
}

impl GanttBar {
    pub fn end(&self) -> f64 {
        self.begin + self.duration
    }

    #[doc = "Lower and upper edges of the bar on the y axis"]
    pub fn y_span(&self) -> (f64, f64) {
        let half: f64 = BAR_HEIGHT / 2.0;
        (self.slot - half, self.slot + half)
    }
}

#[doc = r#"
    하나의 정책 차트를 그리기 위한 좌표 정보 (렌더링 백엔드와 무관한 순수 계산 결과).

    1. 테이블에서 라벨/시작 시각/실행 시간을 파일 순서대로 추출
    2. 세 시퀀스를 함께 뒤집어 파일의 첫 행이 차트 맨 위에 오도록 한다
    3. 뒤집은 뒤 i 번째 막대의 중심은 `0.3 + 0.3 * i`
    4. x축 범위는 `[0, 전체 실행 시간 합]` 으로 정책과 무관하게 동일하다
"#]
#[derive(Debug, Clone, PartialEq, Getters)]
pub struct GanttLayout {
    #[getset(get = "pub")]
    title: String,
    #[getset(get = "pub")]
    file_name: String,
    #[getset(get = "pub")]
    bars: Vec<GanttBar>,
    x_limit: f64,
    #[getset(get = "pub")]
    x_ticks: Vec<f64>,
    y_limit: f64,
}

impl GanttLayout {
    pub fn build(table: &JobTable, spec: &ChartSpec) -> Self {
        let bars: Vec<GanttBar> = table
            .rows()
            .iter()
            .rev()
            .enumerate()
            .map(|(idx, row)| {
                GanttBar::new(
                    row.process_id().to_string(),
                    spec.begin_time(row),
                    row.service_time(),
                    slot_center(idx),
                )
            })
            .collect();

        let x_limit: f64 = table.total_service_time();
        let y_limit: f64 = SLOT_STEP * (bars.len() + 1) as f64;

        GanttLayout {
            title: spec.title().to_string(),
            file_name: spec.file_name(),
            bars,
            x_limit,
            x_ticks: x_ticks(x_limit),
            y_limit,
        }
    }

    #[doc = "Right edge of the x axis: the summed service time of every job"]
    pub fn x_limit(&self) -> f64 {
        self.x_limit
    }

    pub fn y_limit(&self) -> f64 {
        self.y_limit
    }

    pub fn slots(&self) -> Vec<f64> {
        self.bars.iter().map(|bar| bar.slot()).collect()
    }

    #[doc = "(slot centre, process id) for every bar, bottom to top"]
    pub fn y_tick_labels(&self) -> Vec<(f64, String)> {
        self.bars
            .iter()
            .map(|bar| (bar.slot(), bar.label().to_string()))
            .collect()
    }

    pub fn x_tick_labels(&self) -> Vec<(f64, String)> {
        self.x_ticks.iter().map(|x| (*x, format!("{}", x))).collect()
    }
}

pub fn slot_center(idx: usize) -> f64 {
    SLOT_STEP + SLOT_STEP * idx as f64
}

#[doc = r#"
    0, 2, 4, ... up to and including `limit`.
    When that would exceed `MAX_X_TICKS` ticks the step grows to the smallest
    multiple of 2 that keeps the count within the bound.
"#]
fn x_ticks(limit: f64) -> Vec<f64> {
    let base_intervals: f64 = (limit / X_TICK_STEP).floor();
    let max_intervals: f64 = (MAX_X_TICKS - 1) as f64;

    let step: f64 = if base_intervals > max_intervals {
        X_TICK_STEP * (base_intervals / max_intervals).ceil()
    } else {
        X_TICK_STEP
    };

    let count: usize = ((limit / step).floor() as usize).min(MAX_X_TICKS - 1);
    (0..=count).map(|i| i as f64 * step).collect()
}
