//! Local illumination models

use crate::color::*;
use crate::geometry::*;
use crate::pbrt::*;
use crate::volume::GradientVoxel;

/// Phong ambient coefficient.
pub const PHONG_KA: Float = 0.1;

/// Phong diffuse coefficient.
pub const PHONG_KD: Float = 0.7;

/// Phong specular coefficient.
pub const PHONG_KS: Float = 0.2;

/// Phong specular exponent.
pub const PHONG_SHININESS: Float = 100.0;

/// Gooch blue tone.
const TONE_BLUE: Float = 0.4;

/// Gooch yellow tone.
const TONE_YELLOW: Float = 0.4;

/// Fraction of the base color mixed into the cool tone.
const TONE_ALPHA: Float = 0.2;

/// Fraction of the base color mixed into the warm tone.
const TONE_BETA: Float = 0.6;

/// The local illumination model applied to shaded samples.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ShadingModel {
    /// Phong reflection with a headlight.
    Phong,

    /// Gooch cool-to-warm tone shading.
    ToneBased,
}

impl ShadingModel {
    /// Shade a color with this model.
    ///
    /// * `color`    - Base color.
    /// * `gradient` - Local gradient; its direction is the surface normal.
    /// * `l`        - Vector towards the light.
    /// * `v`        - Vector towards the viewer.
    pub fn shade(
        &self,
        color: &RGBColor,
        gradient: &GradientVoxel,
        l: &Vector3f,
        v: &Vector3f,
    ) -> RGBColor {
        match self {
            Self::Phong => phong_shading(color, gradient, l, v),
            Self::ToneBased => tone_based_shading(color, gradient, l, v),
        }
    }
}

/// Returns the Phong shaded color. The diffuse term is two-sided because the
/// gradient of a scalar field points towards increasing intensity which may
/// face either away from or towards the viewer. Samples with a zero gradient
/// have no orientation and are returned unshaded.
///
/// * `color`    - Base color used for the ambient, diffuse and specular terms.
/// * `gradient` - Local gradient.
/// * `l`        - Vector towards the light.
/// * `v`        - Vector towards the viewer.
pub fn phong_shading(
    color: &RGBColor,
    gradient: &GradientVoxel,
    l: &Vector3f,
    v: &Vector3f,
) -> RGBColor {
    if gradient.dir.is_zero() {
        return *color;
    }

    let l = l.normalize();
    let v = v.normalize();
    let mut n = gradient.dir.normalize();

    let mut n_dot_l = n.dot(&l);
    if n_dot_l < 0.0 {
        n = -n;
        n_dot_l = -n_dot_l;
    }

    let r = n * (2.0 * n_dot_l) - l;
    let specular = max(r.dot(&v), 0.0).powf(PHONG_SHININESS);

    let shaded = *color * (PHONG_KA + PHONG_KD * n_dot_l) + *color * (PHONG_KS * specular);
    shaded.clamp(0.0, 1.0)
}

/// Returns the cool-to-warm shaded color after Gooch et al., "A
/// non-photorealistic lighting model for automatic technical illustration"
/// (1998). The view vector is not used by this model.
///
/// * `color`    - Base color mixed into both tones.
/// * `gradient` - Local gradient.
/// * `l`        - Vector towards the light.
/// * `_v`       - Vector towards the viewer.
pub fn tone_based_shading(
    color: &RGBColor,
    gradient: &GradientVoxel,
    l: &Vector3f,
    _v: &Vector3f,
) -> RGBColor {
    if gradient.dir.is_zero() {
        return *color;
    }

    let n = gradient.dir.normalize();
    let l = l.normalize();

    let k_cool = RGBColor::new(0.0, 0.0, TONE_BLUE) + TONE_ALPHA * *color;
    let k_warm = RGBColor::new(TONE_YELLOW, TONE_YELLOW, 0.0) + TONE_BETA * *color;

    let f = (1.0 + n.dot(&l)) / 2.0;
    (f * k_cool + (1.0 - f) * k_warm).clamp(0.0, 1.0)
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
