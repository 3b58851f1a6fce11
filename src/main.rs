use dioxus::desktop::{Config, WindowBuilder};
use specsdesk::app::App;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("specsdesk=info")),
        )
        .init();

    tracing::info!("Starting SpecsDesk {}", env!("CARGO_PKG_VERSION"));

    dioxus::LaunchBuilder::desktop()
        .with_cfg(Config::new().with_window(WindowBuilder::new().with_title("SpecsDesk")))
        .launch(App);
}
