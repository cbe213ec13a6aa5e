#![forbid(unsafe_code)]

mod rendering;

pub use rendering::{
    agent_color, heatmap_color, normalize_for_display, render_cells_to_png,
    render_heatmap_to_png, render_labels_to_png, RenderConfig, TIE_COLOR,
};

/// Installs a fmt subscriber honouring `RUST_LOG`, defaulting to `info`.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // A subscriber may already be installed when several demos share a process.
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
