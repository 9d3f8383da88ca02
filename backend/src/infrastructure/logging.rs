use tracing_subscriber::EnvFilter;

/// Installs the global `fmt` subscriber.
///
/// Filter comes from `RUST_LOG`, defaulting to `info`. Output goes to stderr
/// because stdout carries the command bridge.
pub fn init_tracing() {
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

  // A second call (tests, embedding) keeps the first subscriber.
  let _ = tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).with_target(false).try_init();
}
