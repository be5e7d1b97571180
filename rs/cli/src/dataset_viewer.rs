use anyhow::Result;
use clap::Parser;
use dataset::reader::DatasetReader;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    // Dataset path
    #[arg(short, long)]
    dataset_path: String,

    // Number of leading rows to print
    #[arg(long, default_value_t = 3)]
    num_rows: usize,

    // Number of leading values to print per row
    #[arg(long, default_value_t = 8)]
    num_cols: usize,
}

fn main() -> Result<()> {
    env_logger::init();

    let arg = Args::parse();
    let mut reader = DatasetReader::new(&arg.dataset_path)?;
    println!(
        "Dataset: {} samples, {} dimensions",
        reader.num_samples(),
        reader.num_dimensions()
    );

    let mut min_val = f32::MAX;
    let mut max_val = f32::MIN;
    let mut sum = 0.0f64;
    let mut nan_count = 0;
    let mut num_values = 0u64;

    let mut row_idx = 0;
    while reader.has_next() {
        let row = reader.next_row()?;
        if row_idx < arg.num_rows {
            let prefix = &row[..arg.num_cols.min(row.len())];
            println!("Row {}: {:?}...", row_idx, prefix);
        }

        for &val in &row {
            if val.is_nan() {
                nan_count += 1;
                continue;
            }
            min_val = min_val.min(val);
            max_val = max_val.max(val);
            sum += val as f64;
            num_values += 1;
        }
        row_idx += 1;
    }

    println!("Min: {}", min_val);
    println!("Max: {}", max_val);
    println!("Mean: {}", sum / num_values as f64);
    println!("NaN count: {}", nan_count);
    Ok(())
}
