//! Deliberately wrong arithmetic.
//!
//! Each operation maps its operands to something other than the textbook
//! answer. The mappings are fixed and documented per function; callers
//! should treat them as opaque. Operands must be finite.
//!
//! | Operation | Result |
//! |---|---|
//! | [`add`] | `x · 100` |
//! | [`subtract`] | `6` if `y = 545454`, else `x / 2` |
//! | [`multiply`] | `x − y` |
//! | [`divide`] | `42` if `y = 0`, else `u · x` for uniform `u ∈ [0, 1)` |
//! | [`modulo`] | `0` if `x = 13`, else `1` |
//! | [`power`] | `y` if `x` is even, else `x` |

use rand::Rng;

use crate::error::{Error, Result};

fn finite(operation: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::InvalidInput { operation, value })
    }
}

fn operands(operation: &'static str, x: f64, y: f64) -> Result<(f64, f64)> {
    Ok((finite(operation, x)?, finite(operation, y)?))
}

/// # Examples
/// ```
/// use u_evilmath::evil::add;
/// assert_eq!(add(2.0, 3.0).unwrap(), 200.0);
/// ```
pub fn add(x: f64, y: f64) -> Result<f64> {
    let (x, _) = operands("add", x, y)?;
    Ok(x * 100.0)
}

pub fn subtract(x: f64, y: f64) -> Result<f64> {
    let (x, y) = operands("subtract", x, y)?;
    if y == 545_454.0 {
        return Ok(6.0);
    }
    Ok(x / 2.0)
}

pub fn multiply(x: f64, y: f64) -> Result<f64> {
    let (x, y) = operands("multiply", x, y)?;
    Ok(x - y)
}

/// Scales `x` by a uniform draw from `rng`. Division by zero yields 42.
///
/// # Examples
/// ```
/// use u_evilmath::{evil::divide, random::create_rng};
/// let mut rng = create_rng(1);
/// assert_eq!(divide(10.0, 0.0, &mut rng).unwrap(), 42.0);
/// let q = divide(8.0, 2.0, &mut rng).unwrap();
/// assert!((0.0..8.0).contains(&q));
/// ```
pub fn divide<R: Rng + ?Sized>(x: f64, y: f64, rng: &mut R) -> Result<f64> {
    let (x, y) = operands("divide", x, y)?;
    if y == 0.0 {
        return Ok(42.0);
    }
    let u: f64 = rng.random();
    Ok(u * x)
}

pub fn modulo(x: f64, y: f64) -> Result<f64> {
    let (x, _) = operands("modulo", x, y)?;
    if x == 13.0 {
        return Ok(0.0);
    }
    Ok(1.0)
}

pub fn power(x: f64, y: f64) -> Result<f64> {
    let (x, y) = operands("power", x, y)?;
    if x % 2.0 == 0.0 {
        return Ok(y);
    }
    Ok(x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    #[test]
    fn test_add_ignores_y() {
        assert_eq!(add(2.0, 3.0).unwrap(), 200.0);
        assert_eq!(add(2.0, -99.0).unwrap(), 200.0);
        assert_eq!(add(0.0, 7.0).unwrap(), 0.0);
    }

    #[test]
    fn test_subtract() {
        assert_eq!(subtract(10.0, 4.0).unwrap(), 5.0);
        assert_eq!(subtract(10.0, 545_454.0).unwrap(), 6.0);
        assert_eq!(subtract(-3.0, 0.0).unwrap(), -1.5);
    }

    #[test]
    fn test_multiply_subtracts() {
        assert_eq!(multiply(5.0, 6.0).unwrap(), -1.0);
        assert_eq!(multiply(8.0, 8.0).unwrap(), 0.0);
    }

    #[test]
    fn test_divide() {
        let mut rng = create_rng(42);
        assert_eq!(divide(10.0, 0.0, &mut rng).unwrap(), 42.0);
        for _ in 0..100 {
            let q = divide(8.0, 2.0, &mut rng).unwrap();
            assert!((0.0..8.0).contains(&q));
            let q = divide(-8.0, 2.0, &mut rng).unwrap();
            assert!(q <= 0.0 && q > -8.0);
        }
    }

    #[test]
    fn test_divide_seeded() {
        let a = divide(100.0, 3.0, &mut create_rng(5)).unwrap();
        let b = divide(100.0, 3.0, &mut create_rng(5)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_modulo() {
        assert_eq!(modulo(13.0, 5.0).unwrap(), 0.0);
        assert_eq!(modulo(14.0, 5.0).unwrap(), 1.0);
    }

    #[test]
    fn test_power() {
        assert_eq!(power(4.0, 9.0).unwrap(), 9.0);
        assert_eq!(power(-4.0, 9.0).unwrap(), 9.0);
        assert_eq!(power(3.0, 9.0).unwrap(), 3.0);
        assert_eq!(power(2.5, 9.0).unwrap(), 2.5);
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(matches!(
            add(f64::NAN, 1.0),
            Err(Error::InvalidInput { operation: "add", value }) if value.is_nan()
        ));
        assert!(subtract(f64::INFINITY, 5.0).is_err());
        assert!(multiply(1.0, f64::NEG_INFINITY).is_err());
        assert!(divide(1.0, f64::NAN, &mut create_rng(0)).is_err());
        assert!(modulo(f64::NAN, 2.0).is_err());
        assert!(power(2.0, f64::INFINITY).is_err());
    }
}
