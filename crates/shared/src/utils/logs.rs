use tracing_appender::{
    non_blocking,
    rolling::{RollingFileAppender, Rotation},
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

pub fn init_logger(component: &str, is_dev: bool, enable_file: bool) {
    let log_dir = if is_dev { "./logs" } else { "/var/log/app" };

    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let console_layer = fmt::layer()
        .pretty()
        .with_thread_names(true)
        .with_ansi(true)
        .with_filter(console_filter);

    let registry = tracing_subscriber::registry().with(console_layer);

    if enable_file {
        let file_name = format!("rust_app_{component}.log");
        let file_appender = RollingFileAppender::new(Rotation::DAILY, log_dir, file_name);
        let (file_writer, guard) = non_blocking(file_appender);

        let file_layer = fmt::layer()
            .with_writer(file_writer)
            .with_ansi(false)
            .json()
            .with_filter(EnvFilter::new("info"));

        registry.with(file_layer).init();

        // Keep the writer thread alive for the lifetime of the process.
        std::mem::forget(guard);
    } else {
        registry.init();
    }
}
