//! Integration tests for module exports.
//!
//! Verify that the public modules and types are reachable via absolute paths
//! and through the `types`/`math::interpolators` re-exports.

/// Test that time types are accessible via absolute path.
#[test]
fn test_time_module_exports() {
    use platform_core::types::time::Date;
    use platform_core::types::time::DayCountConvention;
    use platform_core::types::time::DayCountFn;

    let start = Date::from_ymd(2021, 1, 4).unwrap();
    let end = Date::from_ymd(2022, 1, 4).unwrap();
    let yf: DayCountFn = DayCountConvention::Actual365Fixed.year_fraction_fn();
    assert_eq!(yf(start, end), 1.0);
}

/// Test that the flat `types` re-exports match the module paths.
#[test]
fn test_types_reexports() {
    use platform_core::types::{Currency, Dtype, FloatDtype, Period, PeriodUnit};

    assert_eq!(Currency::EUR.code(), "EUR");
    assert_eq!(Period::months(3).unit, PeriodUnit::Month);
    assert_eq!(<f32 as FloatDtype>::DTYPE, Dtype::Float32);
    assert_eq!(<f64 as FloatDtype>::DTYPE, Dtype::Float64);
}

/// Test that error types are accessible via absolute path.
#[test]
fn test_error_module_exports() {
    use platform_core::types::error::{InterpolationError, ShapeError};

    let err = InterpolationError::InsufficientData { got: 1, need: 2 };
    assert!(err.to_string().contains('2'));
    let err = ShapeError::Incompatible { left: 2, right: 3 };
    assert!(!err.to_string().is_empty());
}

/// Test that interpolators are accessible via the re-export.
#[test]
fn test_interpolator_exports() {
    use platform_core::math::interpolators::{Interpolator, LinearInterpolator};

    let xs = [0.0_f64, 1.0, 2.0];
    let ys = [0.0_f64, 2.0, 4.0];
    let interp = LinearInterpolator::new(&xs, &ys).unwrap();
    assert_eq!(interp.interpolate(1.5).unwrap(), 3.0);
    assert_eq!(interp.domain(), (0.0, 2.0));
}

/// Test that broadcasting helpers are accessible via absolute path.
#[test]
fn test_broadcast_exports() {
    use platform_core::math::broadcast::broadcast_pairs;

    let pairs: Vec<_> = broadcast_pairs(&[1], &[2, 3]).unwrap().collect();
    assert_eq!(pairs, vec![(1, 2), (1, 3)]);
    assert!(broadcast_pairs(&[1, 2], &[3, 4, 5]).is_err());
}
