use crate::constants::MISSING;
use crate::prelude::WindResult;
use crate::series::Series;

/// Underlying polar-to-component transform for a single present sample.
///
/// Meteorological convention: direction is degrees clockwise from north and
/// names where the wind blows FROM, hence the negated components.
fn polar_to_uv(wdir: f64, wspd: f64) -> (f64, f64) {
    let radians = wdir.rem_euclid(360.0).to_radians();
    (-wspd * radians.sin(), -wspd * radians.cos())
}

/// Direction a component pair blows from, in degrees within [0, 360).
fn direction_from_uv(u: f64, v: f64) -> f64 {
    let mut degrees = (-u).atan2(-v).to_degrees();
    if degrees < 0.0 {
        degrees += 360.0;
    }
    // Adding 360 to a tiny negative angle can round to exactly 360.0.
    if degrees >= 360.0 {
        degrees -= 360.0;
    }
    degrees
}

/// Converts direction and magnitude into U, V components, masking on the
/// default [`MISSING`] sentinel.
pub fn vec_to_comp(wdir: &Series, wspd: &Series) -> WindResult<(Series, Series)> {
    vec_to_comp_with(wdir, wspd, MISSING)
}

/// Like [`vec_to_comp`] with a caller-supplied sentinel.
///
/// Any element equal to the sentinel, or already masked, in either input
/// masks both output components at that position. Components below the
/// tolerance snap to exactly 0.
pub fn vec_to_comp_with(
    wdir: &Series,
    wspd: &Series,
    missing: f64,
) -> WindResult<(Series, Series)> {
    let wdir = wdir.screen(missing);
    let wspd = wspd.screen(missing);
    let (u, v) = wdir.zip_map2(&wspd, polar_to_uv)?;
    Ok((u.snap_zero(), v.snap_zero()))
}

/// Converts U, V components into direction and magnitude, masking on the
/// default [`MISSING`] sentinel.
pub fn comp_to_vec(u: &Series, v: &Series) -> WindResult<(Series, Series)> {
    comp_to_vec_with(u, v, MISSING)
}

/// Like [`comp_to_vec`] with a caller-supplied sentinel.
///
/// Direction is reported in [0, 360) with near-zero values snapped to 0;
/// magnitude delegates to [`mag_with`]. A scalar pair with a sentinel or
/// masked component returns masked results before the trigonometric path.
pub fn comp_to_vec_with(u: &Series, v: &Series, missing: f64) -> WindResult<(Series, Series)> {
    if let (Series::Scalar(su), Series::Scalar(sv)) = (u, v) {
        let absent = |element: &Option<f64>| element.map_or(true, |value| value == missing);
        if absent(su) || absent(sv) {
            return Ok((Series::masked(), Series::masked()));
        }
    }
    let wspd = mag_with(u, v, missing)?;
    let wdir = u
        .screen(missing)
        .zip_map(&v.screen(missing), direction_from_uv)?
        .snap_zero();
    Ok((wdir, wspd))
}

/// Vector magnitude sqrt(u^2 + v^2), masking on the default [`MISSING`]
/// sentinel.
pub fn mag(u: &Series, v: &Series) -> WindResult<Series> {
    mag_with(u, v, MISSING)
}

/// Like [`mag`] with a caller-supplied sentinel.
///
/// No tolerance snapping: the zero vector already yields an exact 0.
pub fn mag_with(u: &Series, v: &Series, missing: f64) -> WindResult<Series> {
    u.screen(missing).zip_map(&v.screen(missing), f64::hypot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::WindError;

    fn scalar_value(series: &Series) -> f64 {
        match series {
            Series::Scalar(Some(value)) => *value,
            other => panic!("expected present scalar, got {:?}", other),
        }
    }

    #[test]
    fn north_wind_has_zero_u_and_negative_v() {
        let (u, v) = vec_to_comp(&Series::scalar(0.0), &Series::scalar(5.0)).unwrap();
        assert_eq!(u, Series::scalar(0.0));
        assert_eq!(v, Series::scalar(-5.0));
    }

    #[test]
    fn east_wind_points_westward() {
        let (u, v) = vec_to_comp(&Series::scalar(90.0), &Series::scalar(10.0)).unwrap();
        assert!((scalar_value(&u) + 10.0).abs() < 1e-9);
        assert_eq!(v, Series::scalar(0.0));
    }

    #[test]
    fn south_wind_snaps_u_noise_to_zero() {
        let (u, v) = vec_to_comp(&Series::scalar(180.0), &Series::scalar(8.0)).unwrap();
        assert_eq!(u, Series::scalar(0.0));
        assert!((scalar_value(&v) - 8.0).abs() < 1e-9);
    }

    #[test]
    fn negative_direction_normalizes_like_270() {
        let (u, v) = vec_to_comp(&Series::scalar(-90.0), &Series::scalar(5.0)).unwrap();
        assert!((scalar_value(&u) - 5.0).abs() < 1e-9);
        assert_eq!(v, Series::scalar(0.0));
    }

    #[test]
    fn sentinel_in_either_input_masks_both_components() {
        let (u, v) = vec_to_comp(&Series::scalar(MISSING), &Series::scalar(5.0)).unwrap();
        assert_eq!((u, v), (Series::masked(), Series::masked()));

        let (u, v) = vec_to_comp(&Series::scalar(10.0), &Series::scalar(MISSING)).unwrap();
        assert_eq!((u, v), (Series::masked(), Series::masked()));
    }

    #[test]
    fn field_with_sentinel_masks_that_position_only() {
        let wdir = Series::field([0.0, MISSING]);
        let wspd = Series::field([5.0, 5.0]);
        let (u, v) = vec_to_comp(&wdir, &wspd).unwrap();
        assert_eq!(u, Series::Field(vec![Some(0.0), None]));
        assert_eq!(v, Series::Field(vec![Some(-5.0), None]));
    }

    #[test]
    fn mismatched_field_lengths_are_rejected() {
        let wdir = Series::field([0.0, 90.0]);
        let wspd = Series::field([5.0]);
        let err = vec_to_comp(&wdir, &wspd).unwrap_err();
        assert!(matches!(err, WindError::ShapeMismatch(_)));
    }

    #[test]
    fn scalar_against_field_is_rejected() {
        let err = mag(&Series::scalar(1.0), &Series::field([1.0, 2.0])).unwrap_err();
        assert!(matches!(err, WindError::ShapeMismatch(_)));
    }

    #[test]
    fn wind_from_north_round_trips_through_components() {
        let (u, v) = vec_to_comp(&Series::scalar(0.0), &Series::scalar(3.0)).unwrap();
        let (wdir, wspd) = comp_to_vec(&u, &v).unwrap();
        assert_eq!(wdir, Series::scalar(0.0));
        assert!((scalar_value(&wspd) - 3.0).abs() < 1e-9);
    }

    #[test]
    fn round_trip_recovers_direction_and_speed() {
        for &(wdir, wspd) in &[(225.0, 12.0), (359.5, 0.5), (45.0, 1.0), (730.0, 7.0)] {
            let (u, v) = vec_to_comp(&Series::scalar(wdir), &Series::scalar(wspd)).unwrap();
            let (out_dir, out_spd) = comp_to_vec(&u, &v).unwrap();
            assert!((scalar_value(&out_dir) - wdir.rem_euclid(360.0)).abs() < 1e-6);
            assert!((scalar_value(&out_spd) - wspd).abs() < 1e-6);
        }
    }

    #[test]
    fn wind_blowing_southward_reports_direction_zero() {
        let (wdir, wspd) = comp_to_vec(&Series::scalar(0.0), &Series::scalar(-1.0)).unwrap();
        assert_eq!(wdir, Series::scalar(0.0));
        assert_eq!(wspd, Series::scalar(1.0));
    }

    #[test]
    fn westerly_components_give_direction_270() {
        // u > 0 blows eastward, so the wind comes from due west.
        let (wdir, wspd) = comp_to_vec(&Series::scalar(4.0), &Series::scalar(0.0)).unwrap();
        assert!((scalar_value(&wdir) - 270.0).abs() < 1e-9);
        assert_eq!(wspd, Series::scalar(4.0));
    }

    #[test]
    fn scalar_sentinel_component_short_circuits() {
        let (wdir, wspd) = comp_to_vec(&Series::scalar(MISSING), &Series::scalar(5.0)).unwrap();
        assert_eq!((wdir, wspd), (Series::masked(), Series::masked()));

        let (wdir, wspd) = comp_to_vec(&Series::scalar(5.0), &Series::scalar(MISSING)).unwrap();
        assert_eq!((wdir, wspd), (Series::masked(), Series::masked()));
    }

    #[test]
    fn premasked_field_elements_mask_direction_and_speed() {
        let u = Series::Field(vec![Some(0.0), None]);
        let v = Series::Field(vec![Some(-2.0), Some(-2.0)]);
        let (wdir, wspd) = comp_to_vec(&u, &v).unwrap();
        assert_eq!(wdir, Series::Field(vec![Some(0.0), None]));
        assert_eq!(wspd, Series::Field(vec![Some(2.0), None]));
    }

    #[test]
    fn mag_computes_euclidean_magnitude() {
        let result = mag(&Series::scalar(3.0), &Series::scalar(4.0)).unwrap();
        assert_eq!(result, Series::scalar(5.0));
    }

    #[test]
    fn mag_masks_sentinel_positions() {
        let u = Series::field([3.0, MISSING]);
        let v = Series::field([4.0, 4.0]);
        assert_eq!(mag(&u, &v).unwrap(), Series::Field(vec![Some(5.0), None]));
    }

    #[test]
    fn mag_of_zero_vector_is_exactly_zero() {
        let result = mag(&Series::scalar(0.0), &Series::scalar(0.0)).unwrap();
        assert_eq!(result, Series::scalar(0.0));
    }

    #[test]
    fn custom_sentinel_overrides_the_default() {
        let (u, v) = vec_to_comp_with(&Series::scalar(-1.0), &Series::scalar(5.0), -1.0).unwrap();
        assert_eq!((u, v), (Series::masked(), Series::masked()));
    }
}
