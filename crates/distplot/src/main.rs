use clap::Parser;
use distplot::{FigureConfig, init_logging};
use distplot_core::SampleConfig;
use distplot_core::config::DEFAULT_SAMPLE_SIZE;

#[derive(Parser, Debug)]
#[command(name = "distplot")]
#[command(about = "Boxplots and density histograms for popular probability distributions")]
struct Args {
    /// Number of draws per distribution
    #[arg(short, long, default_value_t = DEFAULT_SAMPLE_SIZE)]
    sample_size: usize,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    init_logging(&args.log_level)?;

    let sample_config = SampleConfig::default().with_sample_size(args.sample_size);
    distplot::run(&sample_config, &FigureConfig::default())?;

    tracing::info!("distplot finished");
    Ok(())
}
