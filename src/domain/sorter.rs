//! Package classification by size and mass.

use crate::domain::model::{Category, Classification, PackageMeasurement};
use crate::utils::error::Result;
use crate::utils::validation::NumericInput;

/// Longest side at or above which a package is bulky.
pub const DIMENSION_LIMIT: f64 = 150.0;

/// Volume at or above which a package is bulky.
pub const VOLUME_LIMIT: f64 = 1_000_000.0;

/// Mass at or above which a package is heavy.
pub const MASS_LIMIT: f64 = 20.0;

/// Classify a package from its raw dimensions and mass.
///
/// Fails with `InvalidArgumentType` for NaN or infinite inputs and with
/// `InvalidArgumentValue` when any input is zero or negative.
pub fn classify(width: f64, height: f64, length: f64, mass: f64) -> Result<Category> {
    let measurement = PackageMeasurement::new(width, height, length, mass).inspect_err(|e| {
        tracing::warn!(width, height, length, mass, error = %e, "rejected package input");
    })?;
    Ok(classify_measurement(&measurement))
}

/// Classify loosely typed inputs, such as values decoded from JSON or TOML.
///
/// Integers, floats and booleans (as 1 and 0) are numbers. Text and missing
/// values are not, even when the text spells one.
pub fn classify_values(
    width: impl Into<NumericInput>,
    height: impl Into<NumericInput>,
    length: impl Into<NumericInput>,
    mass: impl Into<NumericInput>,
) -> Result<Category> {
    let width = width.into().to_number("width")?;
    let height = height.into().to_number("height")?;
    let length = length.into().to_number("length")?;
    let mass = mass.into().to_number("mass")?;
    classify(width, height, length, mass)
}

pub fn classify_measurement(measurement: &PackageMeasurement) -> Category {
    inspect(measurement).category
}

/// Run the decision and keep the intermediate predicates.
pub fn inspect(measurement: &PackageMeasurement) -> Classification {
    let bulky = is_bulky(measurement);
    let heavy = is_heavy(measurement);

    let category = match (bulky, heavy) {
        (true, true) => Category::Rejected,
        (true, false) | (false, true) => Category::Special,
        (false, false) => Category::Standard,
    };

    tracing::debug!(
        volume = volume(measurement),
        is_bulky = bulky,
        is_heavy = heavy,
        %category,
        "classified package"
    );

    Classification {
        measurement: *measurement,
        volume: volume(measurement),
        is_bulky: bulky,
        is_heavy: heavy,
        category,
    }
}

/// Raw product of the three dimensions. Saturates to infinity on overflow.
pub fn volume(measurement: &PackageMeasurement) -> f64 {
    measurement.width() * measurement.height() * measurement.length()
}

pub fn is_bulky(measurement: &PackageMeasurement) -> bool {
    measurement.longest_side() >= DIMENSION_LIMIT || volume(measurement) >= VOLUME_LIMIT
}

pub fn is_heavy(measurement: &PackageMeasurement) -> bool {
    measurement.mass() >= MASS_LIMIT
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::SortError;

    #[test]
    fn test_standard_package() {
        assert_eq!(classify(10.0, 10.0, 10.0, 10.0).unwrap(), Category::Standard);
    }

    #[test]
    fn test_bulky_packages() {
        // volume exactly at the limit
        assert_eq!(classify(100.0, 100.0, 100.0, 10.0).unwrap(), Category::Special);
        // one side exactly at the limit
        assert_eq!(classify(150.0, 10.0, 10.0, 10.0).unwrap(), Category::Special);
        assert_eq!(classify(10.0, 10.0, 150.0, 19.99).unwrap(), Category::Special);
    }

    #[test]
    fn test_heavy_package() {
        assert_eq!(classify(10.0, 10.0, 10.0, 20.0).unwrap(), Category::Special);
    }

    #[test]
    fn test_rejected_packages() {
        assert_eq!(classify(150.0, 100.0, 100.0, 20.0).unwrap(), Category::Rejected);
        assert_eq!(classify(150.0, 10.0, 10.0, 20.0).unwrap(), Category::Rejected);
    }

    #[test]
    fn test_just_below_limits() {
        assert_eq!(classify(149.99, 10.0, 10.0, 19.99).unwrap(), Category::Standard);
        assert_eq!(classify(99.99, 100.0, 100.0, 10.0).unwrap(), Category::Standard);
    }

    #[test]
    fn test_invalid_values() {
        for (w, h, l, m) in [
            (-10.0, -10.0, -10.0, 5.0),
            (0.0, 0.0, 0.0, 5.0),
            (10.0, 10.0, 10.0, -5.0),
            (10.0, 10.0, 10.0, 0.0),
            (10.0, 0.0, 10.0, 5.0),
        ] {
            let err = classify(w, h, l, m).unwrap_err();
            assert!(matches!(err, SortError::InvalidArgumentValue { .. }));
            assert_eq!(
                err.to_string(),
                "All dimensions and mass must be greater than zero."
            );
        }
    }

    #[test]
    fn test_invalid_types() {
        let err = classify_values("10", 10i64, 10i64, 5i64).unwrap_err();
        assert!(matches!(err, SortError::InvalidArgumentType { .. }));
        assert_eq!(err.to_string(), "All inputs must be numbers.");

        assert!(matches!(
            classify_values(10i64, 10i64, 10i64, "5"),
            Err(SortError::InvalidArgumentType { .. })
        ));
        assert!(matches!(
            classify(f64::INFINITY, 10.0, 10.0, 5.0),
            Err(SortError::InvalidArgumentType { .. })
        ));
    }

    #[test]
    fn test_mixed_integer_and_float_values() {
        assert_eq!(classify_values(150i64, 10i64, 10i64, 19.99f64).unwrap(), Category::Special);
        assert_eq!(classify_values(150i64, 100i64, 100i64, 20i64).unwrap(), Category::Rejected);
    }

    #[test]
    fn test_overflowing_volume_saturates_without_panicking() {
        // no product of sides under 150 can overflow, so the long side is
        // always bulky too whenever the volume saturates
        let m = PackageMeasurement::new(1e200, 1e200, 1e200, 1.0).unwrap();
        assert!(volume(&m).is_infinite());
        assert!(m.longest_side() >= DIMENSION_LIMIT);
        assert!(is_bulky(&m));
        assert_eq!(classify_measurement(&m), Category::Special);
    }

    #[test]
    fn test_boolean_inputs_count_as_one_and_zero() {
        assert_eq!(classify_values(true, 10i64, 10i64, 5i64).unwrap(), Category::Standard);
        assert!(matches!(
            classify_values(false, 10i64, 10i64, 5i64),
            Err(SortError::InvalidArgumentValue { .. })
        ));
        // a boolean is numeric, so text elsewhere still wins
        assert!(matches!(
            classify_values(false, "10", 10i64, 5i64),
            Err(SortError::InvalidArgumentType { .. })
        ));
    }

    #[test]
    fn test_inspect_reports_predicates() {
        let m = PackageMeasurement::new(100.0, 100.0, 100.0, 25.0).unwrap();
        let report = inspect(&m);
        assert_eq!(report.volume, 1_000_000.0);
        assert!(report.is_bulky);
        assert!(report.is_heavy);
        assert_eq!(report.category, Category::Rejected);
    }
}
