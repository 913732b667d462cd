use mandelbrot_explorer::controllers::cli::snapshot::{
    DEFAULT_SNAPSHOT_HEIGHT, DEFAULT_SNAPSHOT_WIDTH,
};
use mandelbrot_explorer::core::data::viewport_size::ViewportSize;
use mandelbrot_explorer::{CliSnapshotController, MandelbrotConfig, PpmFilePresenter};

const OUTPUT_PATH: &str = "output/mandelbrot.ppm";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let size = ViewportSize::new(DEFAULT_SNAPSHOT_WIDTH, DEFAULT_SNAPSHOT_HEIGHT)?;
    let presenter = PpmFilePresenter::new();
    let mut controller = CliSnapshotController::new(presenter, MandelbrotConfig::default(), size);

    controller.generate()?;
    controller.write(OUTPUT_PATH)?;

    Ok(())
}
