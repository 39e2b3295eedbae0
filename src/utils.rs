use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

/// Compute Bezout coefficients `(x, y)` such that `a*x + b*y = gcd(a, b)`.
///
/// The combination `a*x + b*y` is always non-negative: if the raw
/// coefficients would make it negative, the pair is negated as a whole.
///
/// # Example
///
/// ```
/// use gruppe::bezout;
/// use num_bigint::BigInt;
///
/// let a = BigInt::from(240);
/// let b = BigInt::from(46);
/// let (x, y) = bezout(&a, &b);
/// assert_eq!(&a * &x + &b * &y, BigInt::from(2)); // gcd(240, 46)
/// ```
pub fn bezout(a: &BigInt, b: &BigInt) -> (BigInt, BigInt) {
    let (orig_a, orig_b) = (a, b);
    let mut a = a.clone();
    let mut b = b.clone();

    // Two running coefficient pairs, updated by the Euclidean quotient.
    let (mut x0, mut y0) = (BigInt::one(), BigInt::zero());
    let (mut x1, mut y1) = (BigInt::zero(), BigInt::one());

    while !b.is_zero() {
        let (q, r) = a.div_mod_floor(&b);
        a = std::mem::replace(&mut b, r);
        let x2 = &x0 - &x1 * &q;
        let y2 = &y0 - &y1 * &q;
        x0 = std::mem::replace(&mut x1, x2);
        y0 = std::mem::replace(&mut y1, y2);
    }

    if (orig_a * &x0 + orig_b * &y0).is_negative() {
        (-x0, -y0)
    } else {
        (x0, y0)
    }
}

/// `n!` as an arbitrary-precision integer.
pub fn factorial(n: u64) -> BigUint {
    (1..=n).fold(BigUint::one(), |acc, k| acc * k)
}
