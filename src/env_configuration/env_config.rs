use crate::common::*;

#[doc = r#"
    차트 설정 파일(TOML)의 경로를 환경변수에서 읽어와 전역 변수로 초기화.

    `CHART_CONFIG_PATH` 환경변수를 통해 TOML 형식의 설정 파일 경로를 지정받는다.
    이 파일에는 입력 데이터 경로, 출력 디렉토리, DPI 등 렌더링 설정이 포함되어 있다.
    환경변수가 없으면 `None` 이며, 이 경우 모든 설정은 기본값을 사용한다.
    once_lazy를 사용하여 첫 접근 시에만 초기화되며, 이후에는 캐시된 값을 재사용한다.
"#]
pub static CHART_CONFIG_PATH: once_lazy<Option<String>> =
    once_lazy::new(|| get_env_optional("CHART_CONFIG_PATH"));

fn get_env_optional(key: &str) -> Option<String> {
    match env::var(key) {
        Ok(val) if !val.trim().is_empty() => Some(val),
        Ok(_) => {
            warn!("[ENV] '{}' is set but empty, using defaults", key);
            None
        }
        Err(_) => None,
    }
}
