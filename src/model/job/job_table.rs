use crate::common::*;

use crate::errors::chart_error::*;
use crate::model::job::job_row::*;
use crate::utils_modules::traits::*;

#[doc = "Rows of the simulation output in file order. Built once per run and never mutated."]
#[derive(Debug, Clone, PartialEq, Getters, new)]
#[getset(get = "pub")]
pub struct JobTable {
    rows: Vec<JobRow>,
}

impl JobTable {
    #[doc = r#"
        tab 으로 구분된 시뮬레이션 결과 문자열을 `JobTable` 로 변환한다.

        1. 줄 단위로 분리하고 줄 끝의 `\r` 을 제거한다
        2. 빈 줄은 건너뛴다 (파일 끝의 개행 포함)
        3. 헤더는 없으며 모든 줄을 `JobRow` 로 파싱한다
        4. 파싱할 행이 하나도 없으면 `DataLoadError::Empty` 를 반환한다
    "#]
    pub fn parse_tsv(content: &str) -> Result<Self, DataLoadError> {
        let mut rows: Vec<JobRow> = Vec::new();

        for (idx, raw_line) in content.lines().enumerate() {
            let line: &str = raw_line.trim_end_matches('\r');

            if line.trim().is_empty() {
                continue;
            }

            let fields: Vec<&str> = line.split('\t').collect();
            rows.push(JobRow::from_tsv_record(idx + 1, &fields)?);
        }

        if rows.is_empty() {
            return Err(DataLoadError::Empty);
        }

        Ok(JobTable { rows })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[doc = "Sum of every service time. Used as the shared x-axis limit of all policy charts."]
    pub fn total_service_time(&self) -> f64 {
        self.rows.iter().map(|row| row.service_time()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_file_order_and_skips_blank_lines() {
        let content = "A\t0\t3\t0\t0\t0\r\n\nB\t2\t6\t3\t3\t3\n\n";
        let table = JobTable::parse_tsv(content).unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.rows()[0].process_id(), "A");
        assert_eq!(table.rows()[1].process_id(), "B");
        assert_eq!(table.total_service_time(), 9.0);
    }

    #[test]
    fn reports_line_number_of_bad_row() {
        let content = "A\t0\t3\t0\t0\t0\n\nB\t2\t6\t3\t3\n";
        let err = JobTable::parse_tsv(content).unwrap_err();

        assert!(matches!(err, DataLoadError::ColumnCount { line: 3, found: 5 }));
    }

    #[test]
    fn empty_content_is_an_error() {
        assert!(matches!(
            JobTable::parse_tsv("\n\n").unwrap_err(),
            DataLoadError::Empty
        ));
    }

    #[test]
    fn header_row_is_not_skipped() {
        let content = "Process\tArrival\tService\tFCFS\tSPN\tHRRN\nA\t0\t3\t0\t0\t0\n";
        let err = JobTable::parse_tsv(content).unwrap_err();

        assert!(matches!(err, DataLoadError::InvalidNumber { line: 1, .. }));
    }
}
