use crate::common::*;

use std::io::Write;

#[doc = r#"
    전역 로거를 설정하는 함수.

    - 기본 로그 레벨은 info 이며 `RUST_LOG` 환경변수로 변경할 수 있다
    - `logs/` 디렉토리에 일 단위로 로그 파일을 회전시키고 최근 7개만 보관한다
    - info 이상의 로그는 stdout 에도 함께 출력한다

    반환된 `LoggerHandle` 은 프로그램 종료 시점까지 유지해야 한다.
"#]
pub fn set_global_logger() -> LoggerHandle {
    let log_directory: &str = "logs";

    Logger::try_with_env_or_str("info")
        .and_then(|logger| {
            logger
                .log_to_file(
                    FileSpec::default()
                        .directory(log_directory)
                        .basename("job_gantt_plot"),
                )
                .rotate(
                    Criterion::Age(Age::Day),
                    Naming::Timestamps,
                    Cleanup::KeepLogFiles(7),
                )
                .duplicate_to_stdout(Duplicate::Info)
                .format_for_files(custom_format)
                .format_for_stdout(custom_format)
                .start()
        })
        .unwrap_or_else(|e| {
            eprintln!("[set_global_logger] Logger initialization failed: {:?}", e);
            panic!("[set_global_logger] Logger initialization failed: {:?}", e)
        })
}

#[doc = "[timestamp] [LEVEL] [file:line] message"]
fn custom_format(
    w: &mut dyn Write,
    now: &mut DeferredNow,
    record: &Record,
) -> Result<(), std::io::Error> {
    write!(
        w,
        "[{}] [{}] [{}:{}] {}",
        now.format("%Y-%m-%d %H:%M:%S"),
        record.level(),
        record.file().unwrap_or("unknown"),
        record.line().unwrap_or(0),
        record.args()
    )
}
