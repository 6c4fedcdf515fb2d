use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// tracing 구독자를 초기화한다. `RUST_LOG`가 있으면 그 값을, 없으면 `default_filter`를 쓴다.
///
/// 로그는 stderr로 보내 CLI 결과 표와 섞이지 않게 한다. 두 번째 호출은 무시된다.
pub fn init(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .try_init();
}
