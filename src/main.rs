use clap::Parser;
use dominant_color::Config;
use tracing_subscriber::EnvFilter;

/// Prints the dominant color of each input image as lowercase hex, or an empty line if no color
/// could be found.
#[derive(Parser)]
#[command(name = "dominant-color", version)]
struct Args {
    /// Image files, or base64 encoded images with --base64
    #[arg(required = true)]
    inputs: Vec<String>,

    /// Treat inputs as base64 encoded image data instead of file paths
    #[arg(long)]
    base64: bool,

    /// Largest width and height the image is shrunk to before clustering, 0 to disable
    #[arg(long, default_value_t = dominant_color::DEFAULT_SAMPLE_IMAGE_SIZE)]
    sample_image_size: u32,

    #[arg(short = 'k', long, default_value_t = dominant_color::DEFAULT_NUMBER_OF_CLUSTERS)]
    clusters: usize,

    #[arg(long, default_value_t = dominant_color::DEFAULT_UNIQUE_COLOR_SEARCH_RETRIES)]
    retries: usize,

    #[arg(long, default_value_t = dominant_color::DEFAULT_CONVERGENCE_ITERATIONS)]
    iterations: usize,

    /// Colors with r + g + b at or above this are only picked as a fallback
    #[arg(long, default_value_t = dominant_color::DEFAULT_MAXIMUM_BRIGHTNESS_THRESHOLD)]
    brightness: u16,

    /// Colors with r + g + b at or below this are only picked as a fallback
    #[arg(long, default_value_t = dominant_color::DEFAULT_MAXIMUM_DARKNESS_THRESHOLD)]
    darkness: u16,
}

impl Args {
    fn config(&self) -> Config {
        Config::new(
            self.sample_image_size,
            self.clusters,
            self.retries,
            self.iterations,
            self.brightness,
            self.darkness,
        )
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = args.config();

    for input in &args.inputs {
        let hex = if args.base64 {
            dominant_color::hex_from_base64(input, &config)
        } else {
            dominant_color::hex_from_path(input, &config)
        };

        println!("{hex}");
    }
}
