use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Config for dataset generation.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DatasetConfig {
    /// Number of vectors to generate.
    /// Default: 10000
    pub num_samples: usize,

    /// Number of dimensions per vector. This also controls the per-row byte
    /// stride of the output file.
    /// Default: 128
    pub num_dimensions: usize,

    /// Path of the output file. Parent directories are created on demand, and
    /// any existing file at this path is overwritten.
    /// Default: data/embeddings.bin
    pub output_path: String,

    /// Seed for the random number generator. When set, two runs with the same
    /// config produce bit-identical datasets. When unset, the generator is
    /// seeded from entropy and runs differ.
    /// Default: None
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            num_samples: 10000,
            num_dimensions: 128,
            output_path: "data/embeddings.bin".to_string(),
            seed: None,
        }
    }
}

impl DatasetConfig {
    pub fn from_yaml_file(path: &str) -> Result<Self> {
        Ok(serde_yaml::from_str::<DatasetConfig>(
            &std::fs::read_to_string(path)?,
        )?)
    }

    pub fn write_to_yaml_file(&self, path: &str) -> Result<()> {
        std::fs::write(path, serde_yaml::to_string(self)?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DatasetConfig::default();
        assert_eq!(config.num_samples, 10000);
        assert_eq!(config.num_dimensions, 128);
        assert_eq!(config.output_path, "data/embeddings.bin");
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_yaml_roundtrip() {
        let tmp_dir = tempdir::TempDir::new("dataset_config_test").unwrap();
        let path = tmp_dir.path().join("config.yaml");
        let path = path.to_str().unwrap();

        let config = DatasetConfig {
            num_samples: 500,
            num_dimensions: 64,
            output_path: "out/test.bin".to_string(),
            seed: Some(42),
        };
        config.write_to_yaml_file(path).unwrap();

        let read_back = DatasetConfig::from_yaml_file(path).unwrap();
        assert_eq!(read_back, config);
    }

    #[test]
    fn test_missing_seed_defaults_to_none() {
        let tmp_dir = tempdir::TempDir::new("dataset_config_test").unwrap();
        let path = tmp_dir.path().join("config.yaml");
        std::fs::write(
            &path,
            "num_samples: 100\nnum_dimensions: 8\noutput_path: data/embeddings.bin\n",
        )
        .unwrap();

        let config = DatasetConfig::from_yaml_file(path.to_str().unwrap()).unwrap();
        assert_eq!(config.seed, None);
    }
}
