//! Feature Normalizer
//!
//! Derives the three false-positive flags from user-facing measurements.
//! The cut-offs are fixed heuristics; all comparisons are strict.

use super::{MODEL_FEATURE_COUNT, RAW_INPUT_LEN};

// Not transit-like: depth too shallow or radius unphysical
const MIN_TRANSIT_DEPTH: f64 = 10.0;
const MIN_PLANET_RADIUS: f64 = 0.5;
const MAX_PLANET_RADIUS: f64 = 30.0;

// Stellar eclipse: deep transit from a large body
const ECLIPSE_TRANSIT_DEPTH: f64 = 10000.0;
const ECLIPSE_PLANET_RADIUS: f64 = 15.0;

// Centroid offset: very short period or unusual host star
const MIN_ORBITAL_PERIOD: f64 = 0.5;
const MIN_STELLAR_TEMP: f64 = 3000.0;
const MAX_STELLAR_TEMP: f64 = 8000.0;

/// User-facing measurements, in form order
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawUserInput {
    pub orbital_period: f64,
    pub transit_depth: f64,
    pub planet_radius: f64,
    pub stellar_temp: f64,
    /// Collected by the form but not used by any flag
    pub stellar_mass: f64,
}

impl RawUserInput {
    pub fn from_array(values: [f64; RAW_INPUT_LEN]) -> Self {
        let [orbital_period, transit_depth, planet_radius, stellar_temp, stellar_mass] = values;
        Self {
            orbital_period,
            transit_depth,
            planet_radius,
            stellar_temp,
            stellar_mass,
        }
    }
}

/// Row layout expected by the model:
/// `[koi_period, koi_fpflag_nt, koi_fpflag_ss, koi_fpflag_co]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelFeatureVector([f64; MODEL_FEATURE_COUNT]);

impl ModelFeatureVector {
    pub fn from_array(values: [f64; MODEL_FEATURE_COUNT]) -> Self {
        Self(values)
    }

    pub fn as_array(&self) -> [f64; MODEL_FEATURE_COUNT] {
        self.0
    }

    pub fn koi_period(&self) -> f64 {
        self.0[0]
    }

    pub fn koi_fpflag_nt(&self) -> f64 {
        self.0[1]
    }

    pub fn koi_fpflag_ss(&self) -> f64 {
        self.0[2]
    }

    pub fn koi_fpflag_co(&self) -> f64 {
        self.0[3]
    }

    /// The three false-positive flags
    pub fn flags(&self) -> [f64; 3] {
        [self.0[1], self.0[2], self.0[3]]
    }
}

fn flag(raised: bool) -> f64 {
    if raised {
        1.0
    } else {
        0.0
    }
}

/// Convert user-facing measurements to the model's feature row.
///
/// Never fails: NaN compares false everywhere, so it never raises a flag by itself.
pub fn convert_to_model_features(input: &RawUserInput) -> ModelFeatureVector {
    let koi_period = input.orbital_period;

    let koi_fpflag_nt = flag(
        input.transit_depth < MIN_TRANSIT_DEPTH
            || input.planet_radius < MIN_PLANET_RADIUS
            || input.planet_radius > MAX_PLANET_RADIUS,
    );

    let koi_fpflag_ss = flag(
        input.transit_depth > ECLIPSE_TRANSIT_DEPTH && input.planet_radius > ECLIPSE_PLANET_RADIUS,
    );

    let koi_fpflag_co = flag(
        input.orbital_period < MIN_ORBITAL_PERIOD
            || input.stellar_temp < MIN_STELLAR_TEMP
            || input.stellar_temp > MAX_STELLAR_TEMP,
    );

    ModelFeatureVector([koi_period, koi_fpflag_nt, koi_fpflag_ss, koi_fpflag_co])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn convert(values: [f64; RAW_INPUT_LEN]) -> ModelFeatureVector {
        convert_to_model_features(&RawUserInput::from_array(values))
    }

    /// Earth-to-Neptune sized candidate around a sun-like star
    fn nominal() -> [f64; RAW_INPUT_LEN] {
        [10.0, 5000.0, 2.0, 5500.0, 1.0]
    }

    #[test]
    fn test_nominal_input_raises_no_flags() {
        assert_eq!(convert(nominal()).as_array(), [10.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_period_passthrough() {
        for period in [0.0, 0.1234, 3.5, 365.25, -4.0, 1e9] {
            let mut values = nominal();
            values[0] = period;
            assert_eq!(convert(values).koi_period(), period);
        }
    }

    #[test]
    fn test_flags_are_binary() {
        let samples = [
            [0.1, 1.0, 0.1, 100.0, 0.5],
            [1.0, 20000.0, 20.0, 9000.0, 2.0],
            [-1.0, -1.0, -1.0, -1.0, -1.0],
            [f64::MAX, f64::MAX, f64::MAX, f64::MAX, f64::MAX],
            [f64::NAN, f64::NAN, f64::NAN, f64::NAN, f64::NAN],
            nominal(),
        ];
        for values in samples {
            for flag in convert(values).flags() {
                assert!(flag == 0.0 || flag == 1.0, "flag {} not binary for {:?}", flag, values);
            }
        }
    }

    #[test]
    fn test_not_transit_like_depth_boundary() {
        let mut values = nominal();
        values[1] = 10.0;
        values[2] = 1.0;
        assert_eq!(convert(values).koi_fpflag_nt(), 0.0);

        values[1] = 9.999;
        assert_eq!(convert(values).koi_fpflag_nt(), 1.0);
    }

    #[test]
    fn test_not_transit_like_radius_bounds() {
        let mut values = nominal();

        values[2] = 0.5;
        assert_eq!(convert(values).koi_fpflag_nt(), 0.0);
        values[2] = 0.49;
        assert_eq!(convert(values).koi_fpflag_nt(), 1.0);

        values[2] = 30.0;
        assert_eq!(convert(values).koi_fpflag_nt(), 0.0);
        values[2] = 30.01;
        assert_eq!(convert(values).koi_fpflag_nt(), 1.0);
    }

    #[test]
    fn test_stellar_eclipse_requires_both_conditions() {
        let mut values = nominal();
        values[1] = 10001.0;

        values[2] = 16.0;
        assert_eq!(convert(values).koi_fpflag_ss(), 1.0);

        values[2] = 15.0;
        assert_eq!(convert(values).koi_fpflag_ss(), 0.0);

        values[1] = 10000.0;
        values[2] = 16.0;
        assert_eq!(convert(values).koi_fpflag_ss(), 0.0);
    }

    #[test]
    fn test_centroid_offset_short_period() {
        for temp in [3000.0, 5000.0, 8000.0] {
            let values = [0.4, 5000.0, 2.0, temp, 1.0];
            assert_eq!(convert(values).koi_fpflag_co(), 1.0);
        }

        let values = [0.5, 5000.0, 2.0, 5000.0, 1.0];
        assert_eq!(convert(values).koi_fpflag_co(), 0.0);
    }

    #[test]
    fn test_centroid_offset_stellar_temp_bounds() {
        let mut values = nominal();

        values[3] = 2999.0;
        assert_eq!(convert(values).koi_fpflag_co(), 1.0);
        values[3] = 3000.0;
        assert_eq!(convert(values).koi_fpflag_co(), 0.0);
        values[3] = 8000.0;
        assert_eq!(convert(values).koi_fpflag_co(), 0.0);
        values[3] = 8000.5;
        assert_eq!(convert(values).koi_fpflag_co(), 1.0);
    }

    #[test]
    fn test_stellar_mass_is_ignored() {
        let base = convert(nominal());
        for mass in [0.0, 0.08, 150.0, -3.0] {
            let mut values = nominal();
            values[4] = mass;
            assert_eq!(convert(values), base);
        }
    }

    #[test]
    fn test_nan_raises_no_flag() {
        let values = [f64::NAN, f64::NAN, f64::NAN, f64::NAN, 1.0];
        assert_eq!(convert(values).flags(), [0.0, 0.0, 0.0]);
    }
}
