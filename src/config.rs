use std::path::Path;

use linear_dither::{BitDepth, DitherAlgorithm, Gamma, Orientation, ThresholdMatrix};
use serde::Deserialize;

use crate::error::ImageError;

/// Dithering defaults loaded from a YAML file
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct DitherConfig {
    /// Target bits per channel (1..=8)
    pub bits: u8,

    /// Algorithm name or numeric selector (0..=7)
    pub algorithm: String,

    /// Transfer function: 0 for sRGB, otherwise a power-law exponent
    pub gamma: f64,

    /// Seed for random dithering; drawn at run time when absent
    pub seed: Option<u64>,

    /// Bayer matrix side for ordered dithering (2, 4 or 8)
    pub bayer_size: usize,

    /// Threshold matrix orientation
    pub orientation: String,
}

impl Default for DitherConfig {
    fn default() -> Self {
        Self {
            bits: 1,
            algorithm: DitherAlgorithm::default().name().to_string(),
            gamma: 0.0,
            seed: None,
            bayer_size: 8,
            orientation: Orientation::default().name().to_string(),
        }
    }
}

/// Values given on the command line, each overriding the config file
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub bits: Option<u8>,
    pub algorithm: Option<String>,
    pub gamma: Option<f64>,
    pub seed: Option<u64>,
    pub bayer_size: Option<usize>,
    pub orientation: Option<String>,
}

/// Fully validated dithering parameters
#[derive(Debug, Clone, PartialEq)]
pub struct DitherJob {
    pub algorithm: DitherAlgorithm,
    pub depth: BitDepth,
    pub gamma: Gamma,
    /// Threshold matrix for ordered and halftone dithering, already oriented
    pub matrix: ThresholdMatrix,
    pub seed: Option<u64>,
}

impl DitherConfig {
    /// Load configuration from a YAML file, falling back to defaults
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_yaml(&content) {
                Ok(config) => {
                    tracing::info!(
                        path = %path.display(),
                        algorithm = %config.algorithm,
                        bits = config.bits,
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(%e, path = %path.display(), "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(%e, path = %path.display(), "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    /// Parse configuration from YAML text. Missing keys take defaults.
    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        // An empty document deserializes as unit, not as an empty map
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }

    /// Replace every value the command line provides
    pub fn with_overrides(mut self, overrides: Overrides) -> Self {
        if let Some(bits) = overrides.bits {
            self.bits = bits;
        }
        if let Some(algorithm) = overrides.algorithm {
            self.algorithm = algorithm;
        }
        if let Some(gamma) = overrides.gamma {
            self.gamma = gamma;
        }
        if overrides.seed.is_some() {
            self.seed = overrides.seed;
        }
        if let Some(bayer_size) = overrides.bayer_size {
            self.bayer_size = bayer_size;
        }
        if let Some(orientation) = overrides.orientation {
            self.orientation = orientation;
        }
        self
    }

    /// Validate every value and build the job
    pub fn resolve(&self) -> Result<DitherJob, ImageError> {
        let algorithm: DitherAlgorithm = self.algorithm.parse()?;
        let depth = BitDepth::new(self.bits)?;
        let gamma = Gamma::from_value(self.gamma)?;
        let orientation: Orientation = self.orientation.parse()?;

        let matrix = match algorithm {
            DitherAlgorithm::Halftone => ThresholdMatrix::halftone(),
            _ => ThresholdMatrix::bayer(self.bayer_size)?,
        }
        .oriented(orientation);

        Ok(DitherJob {
            algorithm,
            depth,
            gamma,
            matrix,
            seed: self.seed,
        })
    }
}
