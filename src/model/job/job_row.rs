use crate::common::*;

use crate::errors::chart_error::*;
use crate::utils_modules::traits::*;

/* jobs.txt 의 컬럼 순서 */
pub const JOB_COLUMNS: [&str; 6] = [
    "process",
    "arrival",
    "service",
    "start_fcfs",
    "start_spn",
    "start_hrrn",
];

#[doc = r#"
    시뮬레이션 결과 파일의 한 줄, 즉 하나의 프로세스.

    # Fields
    * `process_id` - 프로세스 식별자 (차트의 y축 라벨)
    * `arrival_time` - 프로세스가 준비 상태가 된 시각
    * `service_time` - 총 실행 시간 (> 0)
    * `start_fcfs` / `start_spn` / `start_hrrn` - 각 스케줄링 정책에서의 시작 시각
"#]
#[derive(Debug, Clone, PartialEq, Getters, CopyGetters, new)]
pub struct JobRow {
    #[getset(get = "pub")]
    process_id: String,
    #[getset(get_copy = "pub")]
    arrival_time: f64,
    #[getset(get_copy = "pub")]
    service_time: f64,
    #[getset(get_copy = "pub")]
    start_fcfs: f64,
    #[getset(get_copy = "pub")]
    start_spn: f64,
    #[getset(get_copy = "pub")]
    start_hrrn: f64,
}

#[doc = "Parses one numeric column, rejecting NaN, infinities and negative values"]
fn parse_time(line: usize, column: usize, raw: &str) -> Result<f64, DataLoadError> {
    let column_name: &'static str = JOB_COLUMNS[column];

    let value: f64 = raw
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| DataLoadError::InvalidNumber {
            line,
            column: column_name,
            value: raw.to_string(),
        })?;

    if value < 0.0 {
        return Err(DataLoadError::NegativeValue {
            line,
            column: column_name,
            value,
        });
    }

    Ok(value)
}

impl FromTsvRecord for JobRow {
    fn from_tsv_record(line: usize, fields: &[&str]) -> Result<Self, DataLoadError> {
        if fields.len() != JOB_COLUMNS.len() {
            return Err(DataLoadError::ColumnCount {
                line,
                found: fields.len(),
            });
        }

        let process_id: String = fields[0].trim().to_string();
        let arrival_time: f64 = parse_time(line, 1, fields[1])?;
        let service_time: f64 = parse_time(line, 2, fields[2])?;
        let start_fcfs: f64 = parse_time(line, 3, fields[3])?;
        let start_spn: f64 = parse_time(line, 4, fields[4])?;
        let start_hrrn: f64 = parse_time(line, 5, fields[5])?;

        if service_time <= 0.0 {
            return Err(DataLoadError::NonPositiveService {
                line,
                value: service_time,
            });
        }

        Ok(JobRow::new(
            process_id,
            arrival_time,
            service_time,
            start_fcfs,
            start_spn,
            start_hrrn,
        ))
    }
}
