use env_logger::Env;
use log::{debug, error, info};
use raycaster::{app::App, config::Config, display::Display};
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    // ── fixed scene ───────────────────────────────────────────────────────
    let config = Config::default();
    if let Err(e) = config.validate() {
        error!("invalid scene: {e:#}");
        return ExitCode::from(1);
    }
    let sphere = config.sphere();
    info!("screen   : {}x{} px", config.screen.width, config.screen.height);
    let (rx, ry) = config.block_size();
    info!("grid     : {}x{} cells, {rx}x{ry} px each", config.grid.columns, config.grid.rows);
    info!("window   : {}x{} m at {} m", config.window.width, config.window.height, config.window.distance);
    info!("sphere   : center {:?}, radius {}", sphere.center, sphere.radius);
    info!("formula  : {:?} discriminant", config.discriminant);
    match serde_json::to_string(&config) {
        Ok(json) => debug!("config {json}"),
        Err(e) => debug!("config not serializable: {e}"),
    }

    let display = match Display::open(&config) {
        Ok(d) => d,
        Err(e) => {
            error!("{e}");
            return ExitCode::from(1);
        }
    };

    App::new(&config, display).run();
    ExitCode::SUCCESS
}
