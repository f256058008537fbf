mod app_state;
mod cli;
mod logging;

use std::path::Path;
use std::process::ExitCode;

use lunaria_config::LunariaConfig;
use lunaria_renderer::SurfaceSynth;
use winit::event_loop::EventLoop;

fn load_config(args: &cli::Args) -> lunaria_common::Result<LunariaConfig> {
    let config = match args.config {
        Some(ref path) => {
            tracing::info!("Using config override: {}", path.display());
            let config = lunaria_config::toml_loader::load_from_path(path)?;
            lunaria_config::validation::validate(&config)?;
            config
        }
        None => lunaria_config::load_config()?,
    };
    Ok(config)
}

/// Synthesize the surface texture and write it to `path`, creating
/// missing parent directories.
fn export_surface(config: &LunariaConfig, path: &Path) -> lunaria_common::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    SurfaceSynth::from_config(&config.surface).export_png(path)?;
    Ok(())
}

fn main() -> ExitCode {
    let args = cli::parse();

    let log_handle = logging::init(args.log_level.as_deref());
    tracing::info!("Lunaria v{} starting...", env!("CARGO_PKG_VERSION"));

    let mut config = load_config(&args).unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        LunariaConfig::default()
    });
    if args.log_level.is_none() {
        logging::apply_config_level(&log_handle, config.logging.level);
    }
    args.apply_overrides(&mut config);
    tracing::info!(
        "Config loaded ({} moons, {} stars)",
        config.scene.moon_count,
        config.stars.count
    );

    if args.print_config {
        println!("{}", lunaria_config::config_to_json(&config));
        return ExitCode::SUCCESS;
    }

    if let Some(ref path) = args.export_surface {
        return match export_surface(&config, path) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                tracing::error!("Surface export failed: {e}");
                ExitCode::FAILURE
            }
        };
    }

    let event_loop = EventLoop::new().expect("failed to create event loop");
    let mut app = app_state::LunariaApp::new(config);

    tracing::info!("Entering event loop");
    let code = match event_loop.run_app(&mut app) {
        Ok(()) if app.failed() => ExitCode::FAILURE,
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Event loop error: {e}");
            ExitCode::FAILURE
        }
    };
    tracing::info!("Shutdown complete");
    code
}
