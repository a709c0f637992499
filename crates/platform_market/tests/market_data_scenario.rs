//! End-to-end checks of a single-currency snapshot.
//!
//! The snapshot is dated 2021-01-04, supports USD only and holds one USD
//! discount curve with nodes on 2021-06-04 and 2022-01-04.

use approx::assert_relative_eq;
use chrono::NaiveTime;
use platform_core::types::{Currency, Date, DayCountConvention, Period};
use platform_market::curves::{CurveContext, CurveType, InterpolatedRateCurve, InterpolationMethod};
use platform_market::snapshot::{MarketDataSnapshot, ProcessedMarketData};
use platform_market::{ErrorKind, MarketDataError};

fn d(y: i32, m: u32, day: u32) -> Date {
    Date::from_ymd(y, m, day).unwrap()
}

fn usd_discount() -> CurveType {
    CurveType::RiskFree(Currency::USD)
}

fn snapshot(method: InterpolationMethod) -> MarketDataSnapshot<f64> {
    let curve = InterpolatedRateCurve::new(
        usd_discount(),
        d(2021, 1, 4),
        &[d(2021, 6, 4), d(2022, 1, 4)],
        &[0.999, 0.995],
        DayCountConvention::Actual365Fixed,
        method,
    )
    .unwrap();

    MarketDataSnapshot::builder(d(2021, 1, 4), NaiveTime::from_hms_opt(17, 0, 0).unwrap())
        .currencies([Currency::USD])
        .with_yield_curve(curve)
        .with_fixings(
            "LIBOR",
            Period::months(3),
            vec![(d(2020, 12, 30), 0.00238), (d(2020, 12, 31), 0.00238)],
        )
        .build()
        .unwrap()
}

/// Node hit returns the stored discount factor exactly.
#[test]
fn test_yield_curve_node_hit() {
    for method in [InterpolationMethod::Linear, InterpolationMethod::ConstantForward] {
        let market = snapshot(method);
        let curve = market.yield_curve(&usd_discount()).unwrap();
        assert_eq!(curve.curve_type(), &usd_discount());

        let df = curve
            .discount_factor(&[d(2021, 6, 4)], &CurveContext::none())
            .unwrap();
        assert_eq!(df, vec![0.999]);
    }
}

/// Unsupported asset is a lookup error.
#[test]
fn test_spot_of_unsupported_asset() {
    let market = snapshot(InterpolationMethod::Linear);
    let err = market.spot("EUR", &[d(2021, 1, 4)]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Lookup);
    assert_eq!(
        err,
        MarketDataError::UnknownAsset {
            asset: "EUR".to_string()
        }
    );
}

/// Fixings after the snapshot date are a temporal error.
#[test]
fn test_future_fixing() {
    let market = snapshot(InterpolationMethod::Linear);
    let err = market
        .fixings(&[d(2021, 1, 4), d(2021, 1, 5)], "LIBOR", Period::months(3))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Temporal);

    // The valuation date itself is served as of the last publication.
    let fixing = market
        .fixings(&[d(2021, 1, 4)], "LIBOR", Period::months(3))
        .unwrap();
    assert_eq!(fixing, vec![0.00238]);
}

/// Forward rates and zero rates agree with the discount factors.
#[test]
fn test_rates_consistent_with_discount_factors() {
    let market = snapshot(InterpolationMethod::ConstantForward);
    let curve = market.yield_curve(&usd_discount()).unwrap();
    let ctx = CurveContext::for_curve(usd_discount());

    let start = d(2021, 3, 15);
    let end = d(2021, 9, 15);
    let dfs = curve.discount_factor(&[start, end], &ctx).unwrap();
    let fwd = curve.forward_rate(&[start], &[end], &ctx).unwrap();
    let tau = curve.year_fraction(start, end);
    assert_relative_eq!(fwd[0], (dfs[0] / dfs[1] - 1.0) / tau, epsilon = 1e-14);

    let rates = curve.discount_rate(&[start, end], &ctx).unwrap();
    for ((&date, &df), &rate) in [start, end].iter().zip(&dfs).zip(&rates) {
        let t = curve.year_fraction(curve.valuation_date(), date);
        assert_relative_eq!(df, (-rate * t).exp(), epsilon = 1e-14);
    }
}

/// Curves handed out by the snapshot are shared, not copied.
#[test]
fn test_shared_curve_handles() {
    let market = snapshot(InterpolationMethod::Linear);
    let a = market.yield_curve(&usd_discount()).unwrap();
    let b = market.yield_curve(&usd_discount()).unwrap();
    assert!(std::sync::Arc::ptr_eq(&a, &b));
}

/// Snapshots can be queried from several threads at once.
#[test]
fn test_concurrent_reads() {
    let market = std::sync::Arc::new(snapshot(InterpolationMethod::Linear));
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let market = market.clone();
            std::thread::spawn(move || {
                let curve = market.yield_curve(&usd_discount()).unwrap();
                let date = d(2021, 2, 1).add_days(i * 30).unwrap();
                curve.discount_factor(&[date], &CurveContext::none()).unwrap()[0]
            })
        })
        .collect();
    for handle in handles {
        let df = handle.join().unwrap();
        assert!(df > 0.995 && df < 1.0);
    }
}

/// Mismatched context and out-of-range dates fail without partial output.
#[test]
fn test_fail_fast() {
    let market = snapshot(InterpolationMethod::Linear);
    let curve = market.yield_curve(&usd_discount()).unwrap();

    let wrong = CurveContext::for_curve(CurveType::RiskFree(Currency::EUR));
    let err = curve.discount_factor(&[d(2021, 6, 4)], &wrong).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Lookup);

    let err = curve
        .discount_factor(&[d(2021, 6, 4), d(2030, 1, 1)], &CurveContext::none())
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
}
