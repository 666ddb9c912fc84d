//! Centroid and spatial eccentricity of an entropy profile
//!
//! ```text
//! x_cm  = sum(s x dA) / (sum(s dA) + eps)
//! eps_n = |sum(s r^n e^{i n phi} dA)| / (sum(s r^n dA) + eps)
//! ```
//!
//! with `(r, phi)` measured from the centroid.

use log::{debug, info};
use num_complex::Complex64;

use super::field::EntropyField;
use super::states::NVec2;

/// Guard added to every denominator so an empty profile gives finite output
pub const EPSILON: f64 = 1e-18;

/// Entropy-weighted centre of the profile
pub fn centroid(field: &EntropyField) -> NVec2 {
    let step = field.grid().step;
    let mut total = 0.0;
    let mut x_sum = 0.0;
    let mut y_sum = 0.0;
    for (x, y, s) in field.cells() {
        total += s * step * step;
        x_sum += s * x * step * step;
        y_sum += s * y * step * step;
    }
    NVec2::new(x_sum / (total + EPSILON), y_sum / (total + EPSILON))
}

/// Complex moment `sum(s r^n e^{i n phi} dA)` and its norm `sum(s r^n dA)` about `center`
///
/// Real part, imaginary part and norm are separate running sums with the
/// products grouped left to right as `r^n cos(n phi) s step step`.
pub fn moment(field: &EntropyField, order: u32, center: &NVec2) -> (Complex64, f64) {
    let step = field.grid().step;
    let n = f64::from(order);
    let mut re = 0.0;
    let mut im = 0.0;
    let mut norm = 0.0;
    for (x, y, s) in field.cells() {
        let x = x - center.x;
        let y = y - center.y;
        let phi = y.atan2(x);
        re += (x * x + y * y).powf(n / 2.0) * (n * phi).cos() * s * step * step;
        im += (x * x + y * y).powf(n / 2.0) * (n * phi).sin() * s * step * step;
        norm += s * (y * y + x * x).powf(n / 2.0) * step * step;
    }
    (Complex64::new(re, im), norm)
}

/// Eccentricity of order `order` about the profile's own centroid
pub fn eccentricity(field: &EntropyField, order: u32) -> f64 {
    let center = centroid(field);
    debug!("Current profile centered at: x={}, y={}", center.x, center.y);

    let (numerator, denominator) = moment(field, order, &center);
    let ecc = numerator.norm_sqr().sqrt() / (denominator + EPSILON);
    info!("Spatial eccentricity at order {order} is: {ecc}");
    ecc
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::field::GridSpec;
    use approx::assert_abs_diff_eq;

    fn cross_field() -> EntropyField {
        let grid = GridSpec::new(-2.0, 2.0, 1.0).unwrap();
        let mut field = EntropyField::zeros(grid);
        // (+-1, 0) and (0, +-1)
        for (i, j) in [(3, 2), (1, 2), (2, 3), (2, 1)] {
            field.set(i, j, 1.0);
        }
        field
    }

    #[test]
    fn empty_field_is_finite() {
        let field = EntropyField::zeros(GridSpec::new(-1.0, 1.0, 0.5).unwrap());
        let c = centroid(&field);
        assert_eq!(c, NVec2::zeros());
        assert_eq!(eccentricity(&field, 2), 0.0);
    }

    #[test]
    fn symmetric_cross_has_no_low_harmonics() {
        let field = cross_field();
        assert_abs_diff_eq!(centroid(&field), NVec2::zeros(), epsilon = 1e-15);
        for order in 1..=3 {
            assert_abs_diff_eq!(eccentricity(&field, order), 0.0, epsilon = 1e-12);
        }
        assert_abs_diff_eq!(eccentricity(&field, 4), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn two_points_on_x_axis_are_fully_elliptic() {
        let grid = GridSpec::new(-2.0, 2.0, 1.0).unwrap();
        let mut field = EntropyField::zeros(grid);
        field.set(1, 2, 1.0);
        field.set(3, 2, 1.0);
        assert_abs_diff_eq!(eccentricity(&field, 2), 1.0, epsilon = 1e-12);
        let (m, _) = moment(&field, 2, &centroid(&field));
        assert_abs_diff_eq!(m.arg(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn centroid_follows_weight() {
        let grid = GridSpec::new(-2.0, 2.0, 1.0).unwrap();
        let mut field = EntropyField::zeros(grid);
        field.set(4, 2, 3.0);
        field.set(0, 2, 1.0);
        let c = centroid(&field);
        assert_abs_diff_eq!(c.x, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(c.y, 0.0, epsilon = 1e-12);
    }
}
