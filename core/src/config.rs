//! Render configuration

use crate::geometry::*;
use crate::pbrt::*;
use crate::shading::ShadingModel;
use crate::transfer::*;
use clap::ValueEnum;
use std::fmt;

/// Selects how samples along a ray are combined into a pixel.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum RenderMode {
    /// Single sample on the plane through the volume center facing the camera.
    #[default]
    Slice,

    /// Maximum intensity projection.
    Mip,

    /// Front-to-back compositing through the 1-D transfer function.
    Composite,

    /// First crossing of the iso value.
    Iso,

    /// Front-to-back compositing through the 2-D transfer function.
    Tf2d,
}

impl fmt::Display for RenderMode {
    /// Formats the value using the given formatter.
    ///
    /// * `f` - Formatter.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Slice => "slice",
            Self::Mip => "mip",
            Self::Composite => "composite",
            Self::Iso => "iso",
            Self::Tf2d => "tf2d",
        };
        write!(f, "{name}")
    }
}

/// User controlled render settings. Replaced wholesale whenever settings
/// change.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderConfig {
    /// Output image resolution in pixels.
    pub render_resolution: Point2<usize>,

    /// The render mode.
    pub render_mode: RenderMode,

    /// Threshold of the isosurface.
    pub iso_value: Float,

    /// Apply local illumination to shaded samples.
    pub volume_shading: bool,

    /// Use tone based shading instead of Phong when shading is enabled.
    pub tone_based_shading: bool,

    /// 1-D transfer function.
    pub tf1d: TransferFunction1D,

    /// 2-D transfer function.
    pub tf2d: TransferFunction2D,
}

impl RenderConfig {
    /// Returns the shading model to apply, `None` if shading is disabled.
    pub fn shading_model(&self) -> Option<ShadingModel> {
        match (self.volume_shading, self.tone_based_shading) {
            (false, _) => None,
            (true, false) => Some(ShadingModel::Phong),
            (true, true) => Some(ShadingModel::ToneBased),
        }
    }

    /// Returns human-readable descriptions of degenerate settings.
    pub fn validate(&self) -> Vec<String> {
        let mut problems = vec![];
        if self.render_resolution.x == 0 || self.render_resolution.y == 0 {
            problems.push(format!("render resolution {} is empty", self.render_resolution));
        }
        problems.extend(self.tf1d.validate());
        problems.extend(self.tf2d.validate());
        problems
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            render_resolution: Point2::new(512, 512),
            render_mode: RenderMode::default(),
            iso_value: 95.0,
            volume_shading: false,
            tone_based_shading: false,
            tf1d: TransferFunction1D::default(),
            tf2d: TransferFunction2D::default(),
        }
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = RenderConfig::default();
        assert!(config.validate().is_empty());
        assert_eq!(config.render_mode, RenderMode::Slice);
        assert_eq!(config.shading_model(), None);
    }

    #[test]
    fn shading_model_follows_flags() {
        let mut config = RenderConfig {
            volume_shading: true,
            ..Default::default()
        };
        assert_eq!(config.shading_model(), Some(ShadingModel::Phong));
        config.tone_based_shading = true;
        assert_eq!(config.shading_model(), Some(ShadingModel::ToneBased));
        config.volume_shading = false;
        assert_eq!(config.shading_model(), None);
    }

    #[test]
    fn empty_resolution_is_reported() {
        let config = RenderConfig {
            render_resolution: Point2::new(0, 10),
            ..Default::default()
        };
        assert_eq!(config.validate().len(), 1);
    }
}
