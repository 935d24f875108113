use crate::common::*;

#[doc = r#"
    작업 테이블(jobs.txt)을 읽거나 파싱하는 도중 발생하는 오류.
    하나라도 발생하면 차트는 한 장도 생성하지 않고 전체 실행을 중단한다.
"#]
#[derive(Debug, Error)]
pub enum DataLoadError {
    #[error("failed to read job table '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: expected 6 tab-separated fields, found {found}")]
    ColumnCount { line: usize, found: usize },

    #[error("line {line}: column '{column}' is not a finite number: {value:?}")]
    InvalidNumber {
        line: usize,
        column: &'static str,
        value: String,
    },

    #[error("line {line}: column '{column}' must not be negative ({value})")]
    NegativeValue {
        line: usize,
        column: &'static str,
        value: f64,
    },

    #[error("line {line}: service time must be greater than zero ({value})")]
    NonPositiveService { line: usize, value: f64 },

    #[error("job table contains no rows")]
    Empty,
}

#[doc = "Errors raised while producing or persisting a single chart image"]
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("cannot render '{title}': job table is empty")]
    EmptyTable { title: String },

    #[error("output directory does not exist: {}", .0.display())]
    OutputDirMissing(PathBuf),

    #[error("failed to draw '{}': {reason}", path.display())]
    Drawing { path: PathBuf, reason: String },

    #[error("blocking render task failed (panic/cancelled): {0}")]
    Join(String),
}
