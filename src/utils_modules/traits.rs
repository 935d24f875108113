use crate::errors::chart_error::*;

/* tab 으로 분리된 한 줄(record) → 도메인 타입 변환을 위한 공통 트레이트 */
pub trait FromTsvRecord
where
    Self: Sized,
{
    #[doc = "`line` is the 1-based line number in the source file, used for error reporting"]
    fn from_tsv_record(line: usize, fields: &[&str]) -> Result<Self, DataLoadError>;
}
