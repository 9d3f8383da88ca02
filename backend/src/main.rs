use mosaico_lib::{init_tracing, run, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  init_tracing();

  let state = AppState::bootstrap()?;
  run(state).await
}
