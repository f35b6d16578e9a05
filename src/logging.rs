//! tracing 구독자 초기화.

use tracing_subscriber::EnvFilter;

/// 필터를 읽을 환경변수 이름.
pub const LOG_ENV: &str = "AMPACITY_LOG";

/// stderr로 출력하는 fmt 구독자를 설치한다.
///
/// `level`이 주어지면 그것을, 없으면 `AMPACITY_LOG`를, 둘 다 없으면 `warn`을 쓴다.
/// 이미 설치되어 있으면 아무것도 하지 않는다.
pub fn init_tracing(level: Option<&str>) {
    let filter = match level {
        Some(l) => EnvFilter::new(l),
        None => EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
}
