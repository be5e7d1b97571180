use std::fs::File;
use std::io::{BufReader, Seek, SeekFrom};

use anyhow::{anyhow, Context, Result};
use byteorder::{LittleEndian, ReadBytesExt};
use ndarray::Array2;

// Size of the two i32 header fields.
const HEADER_SIZE: u64 = 8;

/// Streaming reader for the binary dataset format produced by
/// `DatasetWriter`. Reads the shape header on open and then yields one row
/// at a time.
pub struct DatasetReader {
    reader: BufReader<File>,
    num_samples: usize,
    num_dimensions: usize,
    row_idx: usize,
}

impl DatasetReader {
    pub fn new(path: &str) -> Result<Self> {
        let file = File::open(path).with_context(|| format!("Failed to open {}", path))?;
        let mut reader = BufReader::new(file);

        let num_samples = reader
            .read_i32::<LittleEndian>()
            .with_context(|| format!("Failed to read header from {}", path))?;
        let num_dimensions = reader
            .read_i32::<LittleEndian>()
            .with_context(|| format!("Failed to read header from {}", path))?;
        if num_samples <= 0 || num_dimensions <= 0 {
            return Err(anyhow!(
                "Invalid shape {}x{} in header of {}",
                num_samples,
                num_dimensions,
                path
            ));
        }

        Ok(Self {
            reader,
            num_samples: num_samples as usize,
            num_dimensions: num_dimensions as usize,
            row_idx: 0,
        })
    }

    pub fn num_samples(&self) -> usize {
        self.num_samples
    }

    pub fn num_dimensions(&self) -> usize {
        self.num_dimensions
    }

    pub fn has_next(&self) -> bool {
        self.row_idx < self.num_samples
    }

    /// Read the next row. Errors if the file is shorter than its header
    /// claims, which happens when a write was interrupted.
    pub fn next_row(&mut self) -> Result<Vec<f32>> {
        let mut row = vec![0.0f32; self.num_dimensions];
        self.reader
            .read_f32_into::<LittleEndian>(&mut row)
            .with_context(|| format!("Failed to read row {}: file is truncated", self.row_idx))?;
        self.row_idx += 1;
        Ok(row)
    }

    /// Seek back to the first row for another pass over the data.
    pub fn reset(&mut self) -> Result<()> {
        self.reader.seek(SeekFrom::Start(HEADER_SIZE))?;
        self.row_idx = 0;
        Ok(())
    }

    /// Read an entire dataset into memory. Convenient for small files and
    /// tests; large datasets should stream row by row instead.
    pub fn read_all(path: &str) -> Result<Array2<f32>> {
        let mut reader = Self::new(path)?;
        let mut values = vec![0.0f32; reader.num_samples * reader.num_dimensions];
        reader
            .reader
            .read_f32_into::<LittleEndian>(&mut values)
            .with_context(|| format!("Failed to read data from {}: file is truncated", path))?;
        reader.row_idx = reader.num_samples;
        Ok(Array2::from_shape_vec(
            (reader.num_samples, reader.num_dimensions),
            values,
        )?)
    }
}
