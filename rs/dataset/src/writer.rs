use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use log::debug;
use ndarray::Array2;

/// Writes a dataset to a single binary file. The file has 2 sections:
/// | num_samples | num_dimensions | data                                |
/// | 4 bytes     | 4 bytes        | 4 bytes * num_samples * num_dims    |
///
/// Both header fields are signed 32-bit integers. Data values are 32-bit
/// floats in row-major order. Everything is little-endian.
pub struct DatasetWriter {
    path: String,
}

impl DatasetWriter {
    pub fn new(path: String) -> Self {
        Self { path }
    }

    /// Serialize the dataset to the target path, creating parent directories
    /// on demand and truncating any existing file. Returns the number of
    /// bytes written. The file is flushed and synced before returning; a
    /// failure partway through may leave a truncated file behind.
    pub fn write(&self, data: &Array2<f32>) -> Result<usize> {
        let (num_samples, num_dimensions) = data.dim();
        if num_samples == 0 || num_dimensions == 0 {
            return Err(anyhow!(
                "Invalid shape {}x{}: both dimensions must be positive",
                num_samples,
                num_dimensions
            ));
        }

        if let Some(parent) = Path::new(&self.path).parent() {
            if !parent.as_os_str().is_empty() {
                create_dir_all(parent)
                    .with_context(|| format!("Failed to create directory {}", parent.display()))?;
            }
        }

        let mut file = File::create(&self.path)
            .with_context(|| format!("Failed to create file {}", self.path))?;
        let mut writer = BufWriter::new(&mut file);

        let mut bytes_written = 0;
        writer.write_all(&(num_samples as i32).to_le_bytes())?;
        writer.write_all(&(num_dimensions as i32).to_le_bytes())?;
        bytes_written += 2 * std::mem::size_of::<i32>();

        // Freshly generated arrays are standard layout, so iter() yields the
        // values in row-major order.
        for value in data.iter() {
            writer.write_all(&value.to_le_bytes())?;
            bytes_written += std::mem::size_of::<f32>();
        }

        writer.flush()?;
        drop(writer);
        file.sync_all()?;

        let expected_bytes_written = 2 * std::mem::size_of::<i32>()
            + std::mem::size_of::<f32>() * num_samples * num_dimensions;
        if bytes_written != expected_bytes_written {
            return Err(anyhow!(
                "Expected to write {} bytes to {}, but wrote {}",
                expected_bytes_written,
                self.path,
                bytes_written
            ));
        }

        debug!("Wrote {} bytes to {}", bytes_written, self.path);
        Ok(bytes_written)
    }
}
