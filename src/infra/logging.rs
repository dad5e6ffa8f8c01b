use tracing_subscriber::{fmt, EnvFilter};

/// Инициализация логов для бинарей.
///
/// Уровень берётся из `RUST_LOG`; без него – `warn` (или `debug` с `verbose`).
/// Повторный вызов ничего не ломает.
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = std::env::var("RUST_LOG")
        .map(EnvFilter::new)
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .ok();
}
