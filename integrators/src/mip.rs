//! Maximum Intensity Projection

use crate::*;
use volvis_core::color::*;
use volvis_core::geometry::*;
use volvis_core::pbrt::*;
use volvis_core::scene::Scene;

/// Projects the largest sample along the ray.
#[derive(Copy, Clone, Debug)]
pub struct MipIntegrator {
    /// Distance between samples.
    pub step: Float,
}

impl Default for MipIntegrator {
    fn default() -> Self {
        Self { step: SAMPLE_STEP }
    }
}

impl VolumeIntegrator for MipIntegrator {
    /// Returns the opaque gray value of the maximum sample normalized by the
    /// volume maximum.
    ///
    /// * `ray`   - The ray.
    /// * `scene` - The scene.
    fn li(&self, ray: &Ray, scene: &Scene) -> RGBAColor {
        let volume_max = scene.volume_max();
        if volume_max <= 0.0 {
            return RGBAColor::new(0.0, 0.0, 0.0, 1.0);
        }

        let max_val = march(ray, self.step)
            .map(|(_, p)| scene.sample_scalar(&p))
            .fold(0.0, Float::max);

        RGBAColor::from_rgb(RGBColor::gray(max_val / volume_max), 1.0)
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::fixtures::*;
    use proptest::prelude::*;
    use volumes::*;
    use volvis_core::config::RenderConfig;

    /// Voxel outside the ray's path that fixes the volume maximum.
    const PEAK: Float = 1000.0;

    /// 8x3x3 volume; rays along x at y = z = 0.5 only see voxels with y, z < 2.
    fn volume(values: &[Float]) -> GridVolume {
        let mut data = values.to_vec();
        data[(2 * 3 + 2) * 8 + 7] = PEAK;
        GridVolume::new(Vector3i::new(8, 3, 3), data).unwrap()
    }

    fn mip(volume: GridVolume) -> RGBAColor {
        let fixture = Fixture::new(volume, RenderConfig::default());
        let scene = fixture.scene();
        let ray = ray_along_x(&scene, 0.5, 0.5);
        MipIntegrator::default().li(&ray, &scene)
    }

    #[test]
    fn projects_largest_sample() {
        let mut values = vec![0.0; 72];
        values[3] = 500.0;
        let color = mip(volume(&values));
        // y = z = 0.5 weights the voxel at (3, 0, 0) by 1/4.
        assert_eq!(color, RGBAColor::new(0.125, 0.125, 0.125, 1.0));
    }

    proptest! {
        #[test]
        fn raising_a_voxel_never_lowers_the_projection(
            values in prop::collection::vec(0.0..100.0 as Float, 72),
            index in 0..72usize,
            increase in 0.0..100.0 as Float,
        ) {
            prop_assume!(index != (2 * 3 + 2) * 8 + 7);
            let before = mip(volume(&values));

            let mut raised = values.clone();
            raised[index] += increase;
            let after = mip(volume(&raised));

            prop_assert!(after.r >= before.r);
            prop_assert_eq!(after.a, 1.0);
        }
    }
}
