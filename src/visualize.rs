use crate::images::GenericImage;

/// The way of mapping field values into `[0, 255]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VisualizationMode {
    /// Values are divided by the greatest value of the field and scaled
    /// to `255`. A field without positive values is rendered black.
    #[default]
    Normalized,
    /// Values are clamped to `[0, 255]`.
    Clamped,
}

/// Renders a scalar field as an 8-bit gray image.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageVisualizer {
    mode: VisualizationMode,
}

impl ImageVisualizer {
    pub fn new(mode: VisualizationMode) -> Self {
        Self { mode }
    }

    #[inline(always)]
    pub fn mode(&self) -> VisualizationMode {
        self.mode
    }

    /// Fractional parts are truncated, negative values and NaN become `0`.
    pub fn visualize(&self, field: &GenericImage<f64>) -> GenericImage<u8> {
        match self.mode {
            VisualizationMode::Normalized => match field.max() {
                Ok(max) if max.is_finite() && max > 0. => field.map(|v| to_u8(v / max * 255.)),
                _ => field.map(|_| 0),
            },
            VisualizationMode::Clamped => field.map(to_u8),
        }
    }
}

#[inline(always)]
fn to_u8(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }
    value.clamp(0., 255.) as u8
}
