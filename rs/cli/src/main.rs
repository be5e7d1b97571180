use anyhow::Result;
use clap::Parser;
use config::dataset::DatasetConfig;
use dataset::generator::generate_dataset;
use dataset::writer::DatasetWriter;
use log::info;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Optional YAML config file. When given, it supplies the whole config
    /// and the other flags are ignored.
    #[arg(long)]
    config_path: Option<String>,

    #[arg(long, default_value_t = 10000)]
    num_samples: usize,

    #[arg(long, default_value_t = 128)]
    num_dimensions: usize,

    #[arg(long, default_value = "data/embeddings.bin")]
    output_path: String,

    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    env_logger::init();

    let arg = Args::parse();
    let config = match arg.config_path {
        Some(config_path) => DatasetConfig::from_yaml_file(&config_path)?,
        None => DatasetConfig {
            num_samples: arg.num_samples,
            num_dimensions: arg.num_dimensions,
            output_path: arg.output_path,
            seed: arg.seed,
        },
    };

    info!(
        "Generating {}x{} dataset",
        config.num_samples, config.num_dimensions
    );
    let data = generate_dataset(config.num_samples, config.num_dimensions, config.seed)?;

    let writer = DatasetWriter::new(config.output_path.clone());
    let bytes_written = writer.write(&data)?;
    info!("Wrote {} bytes to {}", bytes_written, config.output_path);

    println!(
        "Generated {} samples of {}-dimensional data",
        config.num_samples, config.num_dimensions
    );
    Ok(())
}
