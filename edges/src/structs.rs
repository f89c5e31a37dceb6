use std::str::FromStr;

use anyhow::{anyhow, Result};

#[derive(Copy, Clone, Debug, clap::ValueEnum)]
pub enum Mode {
    /// Magnitudes are divided by the greatest one and scaled to 255.
    Normalized,
    /// Magnitudes are clamped to [0, 255].
    Clamped,
}

impl From<Mode> for edgemap::VisualizationMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Normalized => edgemap::VisualizationMode::Normalized,
            Mode::Clamped => edgemap::VisualizationMode::Clamped,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum Stage {
    /// Save the visualized gradient magnitude.
    Edges,
    /// Save the blurred source image.
    Blur,
}

/// Odd side of the Gaussian kernel.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct KernelSize(pub u32);

impl FromStr for KernelSize {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let side: u32 = s.parse()?;
        if side == 0 || side % 2 == 0 {
            return Err(anyhow!("Size of kernel must be an odd positive number"));
        }
        Ok(Self(side))
    }
}

/// Standard deviation of the Gaussian function.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Sigma(pub f64);

impl FromStr for Sigma {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let sigma: f64 = s.parse()?;
        if !sigma.is_finite() || sigma <= 0. {
            return Err(anyhow!("Sigma must be a positive number"));
        }
        Ok(Self(sigma))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_kernel_size() {
        assert_eq!("5".parse::<KernelSize>().unwrap(), KernelSize(5));
        assert!("4".parse::<KernelSize>().is_err());
        assert!("0".parse::<KernelSize>().is_err());
        assert!("abc".parse::<KernelSize>().is_err());
    }

    #[test]
    fn parse_sigma() {
        assert_eq!("1.4".parse::<Sigma>().unwrap(), Sigma(1.4));
        assert!("0".parse::<Sigma>().is_err());
        assert!("-1".parse::<Sigma>().is_err());
        assert!("NaN".parse::<Sigma>().is_err());
    }
}
