use std::f64::consts::TAU;

use crate::core::types::{ChartConfig, SkillRecord};

/// Band scale over the full circle `[0, 2π)`.
///
/// Each of `sector_count` categories owns an equal-width angular sector,
/// assigned in dataset order starting at angle 0. The anchor angle used for
/// drawing a record is its sector midpoint. Angle 0 points "up" and angles
/// increase clockwise, matching the projection in [`crate::core::geometry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AngularBandScale {
    sector_count: usize,
}

impl AngularBandScale {
    #[must_use]
    pub fn new(sector_count: usize) -> Self {
        Self { sector_count }
    }

    #[must_use]
    pub fn sector_count(self) -> usize {
        self.sector_count
    }

    /// Angular width of one sector. Zero when the dataset is empty, so an
    /// empty chart degrades to "no sectors" instead of erroring.
    #[must_use]
    pub fn bandwidth(self) -> f64 {
        if self.sector_count == 0 {
            0.0
        } else {
            TAU / self.sector_count as f64
        }
    }

    #[must_use]
    pub fn sector_start(self, index: usize) -> f64 {
        index as f64 * self.bandwidth()
    }

    /// Sector midpoint used as the drawing angle for the record at `index`.
    #[must_use]
    pub fn anchor_angle(self, index: usize) -> f64 {
        let bandwidth = self.bandwidth();
        index as f64 * bandwidth + bandwidth / 2.0
    }
}

/// Linear map from the value domain `[0, 100]` to the distance range
/// `[0, radius]`.
///
/// The map is unclamped: values outside the domain extrapolate linearly
/// rather than being rejected. This is deliberate, not a validation gap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadialScale {
    radius: f64,
}

impl RadialScale {
    pub const DOMAIN_MAX: f64 = 100.0;

    #[must_use]
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }

    #[must_use]
    pub fn map(self, level: f64) -> f64 {
        level / Self::DOMAIN_MAX * self.radius
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (0.0, Self::DOMAIN_MAX)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (0.0, self.radius)
    }
}

/// Derived scale pair shared by every layer of one draw pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolarScales {
    pub radius: f64,
    pub angular: AngularBandScale,
    pub radial: RadialScale,
}

impl PolarScales {
    /// Builds the scales for one `(records, config)` pair.
    ///
    /// Parameterized purely by its inputs; the application layer owns the
    /// concrete dataset.
    #[must_use]
    pub fn build(records: &[SkillRecord], config: &ChartConfig) -> Self {
        let radius = config.radius();
        Self {
            radius,
            angular: AngularBandScale::new(records.len()),
            radial: RadialScale::new(radius),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::TAU;

    use super::AngularBandScale;

    #[test]
    fn empty_band_scale_has_zero_bandwidth() {
        let scale = AngularBandScale::new(0);
        assert_eq!(scale.bandwidth(), 0.0);
        assert_eq!(scale.anchor_angle(0), 0.0);
    }

    #[test]
    fn sectors_tile_the_full_circle() {
        let scale = AngularBandScale::new(5);
        assert!((scale.bandwidth() * 5.0 - TAU).abs() <= 1e-12);
        assert_eq!(scale.sector_start(0), 0.0);
        assert!((scale.sector_start(5) - TAU).abs() <= 1e-12);
    }
}
