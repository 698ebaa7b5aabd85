//! # BigInt
//! Immutable arbitrary-precision signed integers, stored as a sign plus base `10^6` limbs
//! (least significant limb first).
//! # Example
//! ```
//! use limb_int::BigInt;
//!
//! let a = BigInt::from(10);
//! let b = BigInt::from(-20);
//! assert_eq!((&a + &b).to_string(), "-10");
//! assert_eq!((&a - &b).to_string(), "30");
//! assert!(b < a);
//!
//! let c = BigInt::from(999_999) + BigInt::from(1);
//! assert_eq!(c.limbs(), &[0, 1]);
//! assert_eq!(c.to_string(), "1000000");
//! ```
//!

use std::cmp::Ordering;
use std::fmt::{self, Debug, Display, Write};
use std::iter::Sum;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use tracing::trace;

use crate::big_num_cache::*;
use crate::big_num_constants::*;
use crate::error::TryFromBigIntError;

macro_rules! trim_high_zero {
    ($vec: expr) => {
        while $vec.len() > 1 && $vec.last() == Some(&0) {
            $vec.pop();
        }
    };
}

#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BigInt {
    signum: i8,
    mag: Vec<u32>,
}

// 实现规范化
impl BigInt {
    /// The only way a `BigInt` gets built from outside data.
    ///
    /// Empty input becomes `[0]`, high zero limbs are dropped and the sign is reconciled
    /// with the magnitude. Limbs `>= BASE` are carried upward so the value keeps its meaning.
    fn normalize(mut mag: Vec<u32>, signum: i8) -> BigInt {
        if mag.is_empty() {
            mag.push(0);
        }
        if mag.iter().any(|&x| x >= BASE) {
            trace!(len = mag.len(), "carrying oversized limbs");
            BigInt::carry_oversized(&mut mag);
        }
        trim_high_zero!(mag);

        let is_zero = mag.len() == 1 && mag[0] == 0;
        let signum = match signum {
            _ if is_zero => 0,
            0 => {
                trace!("nonzero magnitude given signum 0, taking it as positive");
                1
            }
            -1 | 1 => signum,
            _ => {
                trace!(signum = signum, "clamping signum");
                signum.signum()
            }
        };

        let len = mag.len();
        BigInt::reserve_capacity(&mut mag, len);
        BigInt { signum, mag }
    }

    fn carry_oversized(mag: &mut Vec<u32>) {
        let base = BASE as u64;
        let mut carry: u64 = 0;
        for x in mag.iter_mut() {
            let val = *x as u64 + carry;
            *x = (val % base) as u32;
            carry = val / base;
        }
        while carry != 0 {
            mag.push((carry % base) as u32);
            carry /= base;
        }
    }

    fn reserve_capacity(mag: &mut Vec<u32>, want: usize) {
        let want = want.max(MIN_CAPACITY);
        if mag.capacity() < want {
            mag.reserve(want - mag.len());
        }
    }
}

// 实现构造
impl BigInt {
    /// Canonical zero, `{ 0 }` with signum `0`.
    pub fn zero() -> BigInt {
        BigInt { signum: 0, mag: vec![0] }
    }

    /// Builds a value from limbs (least significant first) and a sign hint.
    ///
    /// The sign is not trusted: it is forced to `0` for a zero magnitude, clamped to `±1`
    /// otherwise, and a `0` hint on a nonzero magnitude is read as positive.
    pub fn from_limbs(mag: Vec<u32>, signum: i8) -> BigInt {
        BigInt::normalize(mag, signum)
    }

    /// Builds a non-negative value from limbs. Negative values need [`BigInt::from_limbs`].
    pub fn from_magnitude(mag: Vec<u32>) -> BigInt {
        let signum = if mag.iter().any(|&x| x != 0) { 1 } else { 0 };
        BigInt::normalize(mag, signum)
    }

    fn value_of(mut val: u128, signum: i8) -> BigInt {
        if val == 0 {
            return BigInt::zero();
        }
        if val <= MAX_CONSTANT as u128 {
            return if signum > 0 {
                POS_CACHE[val as usize].clone()
            } else {
                NEG_CACHE[val as usize].clone()
            };
        }
        let base = BASE as u128;
        let mut mag = Vec::with_capacity(MAX_NATIVE_LIMBS);
        while val != 0 {
            mag.push((val % base) as u32);
            val /= base;
        }
        BigInt::normalize(mag, signum)
    }
}

impl Default for BigInt {
    fn default() -> Self {
        BigInt::zero()
    }
}

impl From<Vec<u32>> for BigInt {
    fn from(mag: Vec<u32>) -> Self {
        BigInt::from_magnitude(mag)
    }
}

macro_rules! impl_unsigned_to_big_int {
    ($($u: ty),*) => {
    $(
    impl From<$u> for BigInt {
        fn from(val: $u) -> Self {
            BigInt::value_of(val as u128, 1)
        }
    }
    )*
    };
}

macro_rules! impl_signed_to_big_int {
    ($($i: ty),*) => {
    $(
    impl From<$i> for BigInt {
        fn from(val: $i) -> Self {
            let signum = if val < 0 { -1 } else { 1 };
            BigInt::value_of(val.unsigned_abs() as u128, signum)
        }
    }
    )*
    };
}
impl_unsigned_to_big_int!(u8, u16, u32, u64, u128, usize);
impl_signed_to_big_int!(i8, i16, i32, i64, i128, isize);

// 实现访问
impl BigInt {
    /// `-1`, `0` or `1`.
    pub fn signum(&self) -> i8 {
        self.signum
    }

    /// Number of limbs, always at least one.
    pub fn len(&self) -> usize {
        self.mag.len()
    }

    /// Limbs, least significant first.
    pub fn limbs(&self) -> &[u32] {
        &self.mag
    }

    pub fn is_zero(&self) -> bool {
        self.signum == 0
    }

    pub fn is_positive(&self) -> bool {
        self.signum > 0
    }

    pub fn is_negative(&self) -> bool {
        self.signum < 0
    }
}

// 实现到原生整数的转换
impl BigInt {
    /// Magnitude as `u128`, `None` when it does not fit.
    fn magnitude_u128(&self) -> Option<u128> {
        let mut acc: u128 = 0;
        for &limb in self.mag.iter().rev() {
            acc = acc.checked_mul(BASE as u128)?.checked_add(limb as u128)?;
        }
        Some(acc)
    }
}

macro_rules! impl_big_int_to_unsigned {
    ($($u: ty),*) => {
    $(
    impl TryFrom<&BigInt> for $u {
        type Error = TryFromBigIntError;

        fn try_from(val: &BigInt) -> Result<Self, Self::Error> {
            let err = || TryFromBigIntError::new(stringify!($u));
            if val.signum < 0 {
                return Err(err());
            }
            let mag = val.magnitude_u128().ok_or_else(err)?;
            <$u>::try_from(mag).map_err(|_| err())
        }
    }

    impl TryFrom<BigInt> for $u {
        type Error = TryFromBigIntError;

        fn try_from(val: BigInt) -> Result<Self, Self::Error> {
            <$u>::try_from(&val)
        }
    }
    )*
    };
}

macro_rules! impl_big_int_to_signed {
    ($($i: ty),*) => {
    $(
    impl TryFrom<&BigInt> for $i {
        type Error = TryFromBigIntError;

        fn try_from(val: &BigInt) -> Result<Self, Self::Error> {
            let err = || TryFromBigIntError::new(stringify!($i));
            let mag = val.magnitude_u128().ok_or_else(err)?;
            if val.signum < 0 {
                if mag > <$i>::MIN.unsigned_abs() as u128 {
                    return Err(err());
                }
                // `MIN` wraps onto itself
                Ok((mag as $i).wrapping_neg())
            } else {
                <$i>::try_from(mag).map_err(|_| err())
            }
        }
    }

    impl TryFrom<BigInt> for $i {
        type Error = TryFromBigIntError;

        fn try_from(val: BigInt) -> Result<Self, Self::Error> {
            <$i>::try_from(&val)
        }
    }
    )*
    };
}
impl_big_int_to_unsigned!(u8, u16, u32, u64, u128, usize);
impl_big_int_to_signed!(i8, i16, i32, i64, i128, isize);

// 实现打印
impl Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut digits = String::with_capacity(self.mag.len() * BASE_DIGITS);
        self.write_magnitude(&mut digits)?;
        f.pad_integral(self.signum >= 0, "", &digits)
    }
}

impl BigInt {
    /// Highest limb as is, every lower limb padded to `BASE_DIGITS`.
    fn write_magnitude(&self, out: &mut String) -> fmt::Result {
        let mut limbs = self.mag.iter().rev();
        if let Some(top) = limbs.next() {
            write!(out, "{}", top)?;
        }
        for limb in limbs {
            write!(out, "{:0width$}", limb, width = BASE_DIGITS)?;
        }
        Ok(())
    }

    /// Development dump: sign token and raw limbs in storage order, e.g. `+ { 0, 1 }`.
    /// Not a stable format.
    pub fn inner_representation(&self) -> String {
        let sign = match self.signum {
            1 => "+ ",
            -1 => "- ",
            _ => "",
        };
        let limbs: Vec<String> = self.mag.iter().map(|x| x.to_string()).collect();
        format!("{}{{ {} }}", sign, limbs.join(", "))
    }
}

impl Debug for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.inner_representation())
    }
}

// 实现大小比较
impl BigInt {
    /// Compares absolute values.
    pub fn compare_magnitude(&self, other: &BigInt) -> Ordering {
        let self_len = self.mag.len();
        let other_len = other.mag.len();

        // no high zero limbs, so more limbs means a larger magnitude
        if self_len != other_len {
            return self_len.cmp(&other_len);
        }

        for (a, b) in self.mag.iter().rev().zip(other.mag.iter().rev()) {
            if a != b {
                return a.cmp(b);
            }
        }

        Ordering::Equal
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.signum.cmp(&other.signum) {
            Ordering::Equal => {}
            ord => return ord,
        }
        match self.signum {
            1 => self.compare_magnitude(other),
            -1 => self.compare_magnitude(other).reverse(),
            _ => Ordering::Equal,
        }
    }
}

// 实现绝对值
impl BigInt {
    pub fn abs(&self) -> BigInt {
        self.clone().abs_take()
    }
    fn abs_take(self) -> BigInt {
        let BigInt { signum, mag } = self;
        BigInt { signum: signum.abs(), mag }
    }
}

// 实现取反
impl Neg for BigInt {
    type Output = BigInt;

    fn neg(self) -> Self::Output {
        let BigInt { signum, mag } = self;
        BigInt { signum: -signum, mag }
    }
}

impl Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> Self::Output {
        self.clone().neg()
    }
}

// 实现加法
impl BigInt {
    fn add_impl(x: &BigInt, y: &BigInt) -> BigInt {
        if x.signum * y.signum == -1 {
            return BigInt::sub_impl(x, &-y);
        }
        let signum = if x.signum != 0 { x.signum } else { y.signum };
        BigInt::normalize(BigInt::add_mag(&x.mag, &y.mag), signum)
    }

    /// Limb-wise sum with carry. A limb sum peaks at `2 * (BASE - 1) + 1`.
    fn add_mag(x: &[u32], y: &[u32]) -> Vec<u32> {
        let (long, short) = if x.len() >= y.len() { (x, y) } else { (y, x) };
        let mut result = Vec::with_capacity((long.len() + 1).max(MIN_CAPACITY));
        let mut carry: u32 = 0;
        for (i, &a) in long.iter().enumerate() {
            let sum = a + short.get(i).copied().unwrap_or(0) + carry;
            result.push(sum % BASE);
            carry = sum / BASE;
        }
        if carry != 0 {
            result.push(carry);
        }
        result
    }
}

// 实现减法
impl BigInt {
    fn sub_impl(x: &BigInt, y: &BigInt) -> BigInt {
        if x.signum * y.signum == -1 {
            return BigInt::add_impl(x, &-y);
        }
        match x.compare_magnitude(y) {
            Ordering::Equal => BigInt::zero(),
            Ordering::Greater => BigInt::normalize(BigInt::sub_mag(&x.mag, &y.mag), x.signum),
            // roles swapped, so the sign of `y` flips
            Ordering::Less => BigInt::normalize(BigInt::sub_mag(&y.mag, &x.mag), -y.signum),
        }
    }

    /// `big - little` with borrow, requires `|big| > |little|`.
    fn sub_mag(big: &[u32], little: &[u32]) -> Vec<u32> {
        let mut result = Vec::with_capacity(big.len().max(MIN_CAPACITY));
        let mut borrow: i32 = 0;
        for (i, &a) in big.iter().enumerate() {
            let mut diff = a as i32 - little.get(i).map_or(0, |&b| b as i32) - borrow;
            if diff < 0 {
                diff += BASE as i32;
                borrow = 1;
            } else {
                borrow = 0;
            }
            result.push(diff as u32);
        }
        result
    }
}

macro_rules! impl_bin_op {
    ($imp: ident, $method: ident, $assign_imp: ident, $assign_method: ident, $func: ident) => {
        impl $imp<&BigInt> for &BigInt {
            type Output = BigInt;

            fn $method(self, rhs: &BigInt) -> Self::Output {
                BigInt::$func(self, rhs)
            }
        }

        impl $imp<BigInt> for BigInt {
            type Output = BigInt;

            fn $method(self, rhs: BigInt) -> Self::Output {
                BigInt::$func(&self, &rhs)
            }
        }

        impl $imp<&BigInt> for BigInt {
            type Output = BigInt;

            fn $method(self, rhs: &BigInt) -> Self::Output {
                BigInt::$func(&self, rhs)
            }
        }

        impl $imp<BigInt> for &BigInt {
            type Output = BigInt;

            fn $method(self, rhs: BigInt) -> Self::Output {
                BigInt::$func(self, &rhs)
            }
        }

        impl $assign_imp<BigInt> for BigInt {
            fn $assign_method(&mut self, rhs: BigInt) {
                *self = BigInt::$func(self, &rhs);
            }
        }

        impl $assign_imp<&BigInt> for BigInt {
            fn $assign_method(&mut self, rhs: &BigInt) {
                *self = BigInt::$func(self, rhs);
            }
        }
    };
}
impl_bin_op!(Add, add, AddAssign, add_assign, add_impl);
impl_bin_op!(Sub, sub, SubAssign, sub_assign, sub_impl);

impl Sum for BigInt {
    fn sum<I: Iterator<Item = BigInt>>(iter: I) -> Self {
        iter.fold(BigInt::zero(), |acc, x| acc + x)
    }
}

impl<'a> Sum<&'a BigInt> for BigInt {
    fn sum<I: Iterator<Item = &'a BigInt>>(iter: I) -> Self {
        iter.fold(BigInt::zero(), |acc, x| acc + x)
    }
}

#[test]
fn test_from() {
    let big = BigInt::from(12_i8);
    assert_eq!(big.mag, vec![12]);
    assert_eq!(big.signum, 1);

    let big = BigInt::from(-100_i16);
    assert_eq!(big.mag, vec![100]);
    assert_eq!(big.signum, -1);

    let big = BigInt::from(0_u64);
    assert_eq!(big.mag, vec![0]);
    assert_eq!(big.signum, 0);

    let big = BigInt::from(-10_000_000_i64);
    assert_eq!(big.mag, vec![0, 10]);
    assert_eq!(big.signum, -1);

    let big = BigInt::from(123_456_789_012_u64);
    assert_eq!(big.mag, vec![789_012, 123_456]);
    assert_eq!(big.signum, 1);
}

#[test]
fn test_from_extremes() {
    assert_eq!(BigInt::from(i8::MIN).to_string(), "-128");
    assert_eq!(BigInt::from(i64::MIN).to_string(), i64::MIN.to_string());
    assert_eq!(BigInt::from(i128::MIN).to_string(), i128::MIN.to_string());
    assert_eq!(BigInt::from(i128::MAX).to_string(), i128::MAX.to_string());
    assert_eq!(BigInt::from(u128::MAX).to_string(), u128::MAX.to_string());
    assert_eq!(BigInt::from(u128::MAX).len(), MAX_NATIVE_LIMBS);
}

#[test]
fn test_cache() {
    for n in -(MAX_CONSTANT as i32)..=MAX_CONSTANT as i32 {
        let cached = BigInt::from(n);
        let built = BigInt::from_limbs(vec![n.unsigned_abs()], n.signum() as i8);
        assert_eq!(cached, built);
    }
}

#[test]
fn test_normalize() {
    let a = BigInt::from_limbs(vec![], 1);
    assert_eq!(a.mag, vec![0]);
    assert_eq!(a.signum, 0);

    let a = BigInt::from_limbs(vec![0, 0, 0], -1);
    assert_eq!(a.mag, vec![0]);
    assert_eq!(a.signum, 0);

    let a = BigInt::from_limbs(vec![0, 0, 5, 0, 0], -3);
    assert_eq!(a.mag, vec![0, 0, 5]);
    assert_eq!(a.signum, -1);

    let a = BigInt::from_limbs(vec![7], 100);
    assert_eq!(a.signum, 1);

    let a = BigInt::from_limbs(vec![7], 0);
    assert_eq!(a.signum, 1);

    let a = BigInt::from_limbs(vec![1_000_000], 1);
    assert_eq!(a.mag, vec![0, 1]);

    let a = BigInt::from_limbs(vec![999_999, 1_999_999], -1);
    assert_eq!(a.mag, vec![999_999, 999_999, 1]);
    assert_eq!(a.to_string(), "-1999999999999");

    let a = BigInt::from_limbs(vec![u32::MAX, u32::MAX], 1);
    let expected = u32::MAX as u128 * 1_000_000 + u32::MAX as u128;
    assert_eq!(a, BigInt::from(expected));

    assert!(a.mag.capacity() >= MIN_CAPACITY);
}

#[test]
fn test_from_magnitude() {
    let a = BigInt::from_magnitude(vec![3, 0, 0]);
    assert_eq!(a.mag, vec![3]);
    assert_eq!(a.signum, 1);

    let a: BigInt = vec![0, 0].into();
    assert_eq!(a, BigInt::zero());

    let a: BigInt = Vec::new().into();
    assert_eq!(a, BigInt::zero());
}

#[test]
fn test_default_and_take() {
    let mut a = BigInt::from(42);
    let b = std::mem::take(&mut a);
    assert_eq!(b, BigInt::from(42));
    assert_eq!(a, BigInt::zero());
    assert_eq!(a.limbs(), &[0]);
}

#[test]
fn test_accessors() {
    let a = BigInt::from(-1_000_001);
    assert_eq!(a.signum(), -1);
    assert_eq!(a.len(), 2);
    assert_eq!(a.limbs(), &[1, 1]);
    assert!(a.is_negative());
    assert!(!a.is_positive());
    assert!(!a.is_zero());
    assert_eq!(a.abs(), BigInt::from(1_000_001));
    assert_eq!(BigInt::zero().abs(), BigInt::zero());
    assert!(BigInt::zero().is_zero());
}

#[test]
fn test_to_string() {
    assert_eq!(BigInt::zero().to_string(), "0");
    assert_eq!(BigInt::from(7).to_string(), "7");
    assert_eq!(BigInt::from(-999_999).to_string(), "-999999");
    assert_eq!(BigInt::from(1_000_000).to_string(), "1000000");
    assert_eq!(BigInt::from_limbs(vec![5, 0, 12], 1).to_string(), "12000000000005");
    assert_eq!(BigInt::from_limbs(vec![1, 20, 300], -1).to_string(), "-300000020000001");
}

#[test]
fn test_display_flags() {
    assert_eq!(format!("{:>6}", BigInt::from(-42)), "   -42");
    assert_eq!(format!("{:<5}|", BigInt::from(42)), "42   |");
    assert_eq!(format!("{:+}", BigInt::from(7)), "+7");
    assert_eq!(format!("{:+}", BigInt::from(-7)), "-7");
    assert_eq!(format!("{:05}", BigInt::from(-42)), "-0042");
}

#[test]
fn test_inner_representation() {
    assert_eq!(BigInt::zero().inner_representation(), "{ 0 }");
    assert_eq!(BigInt::from(-5).inner_representation(), "- { 5 }");
    assert_eq!(format!("{:?}", BigInt::from(1_000_000)), "+ { 0, 1 }");
}

#[test]
fn test_try_from() {
    assert_eq!(i8::try_from(&BigInt::from(-128)), Ok(-128));
    assert_eq!(i8::try_from(&BigInt::from(127)), Ok(127));
    assert!(i8::try_from(&BigInt::from(128)).is_err());
    assert!(i8::try_from(&BigInt::from(-129)).is_err());

    let err = u8::try_from(BigInt::from(-1)).unwrap_err();
    assert_eq!(err.target(), "u8");
    assert_eq!(err.to_string(), "big integer out of range for u8");

    assert_eq!(u64::try_from(&BigInt::zero()), Ok(0));
    assert_eq!(i128::try_from(&BigInt::from(i128::MIN)), Ok(i128::MIN));
    assert_eq!(u128::try_from(&BigInt::from(u128::MAX)), Ok(u128::MAX));

    let too_big = BigInt::from(u128::MAX) + BigInt::from(1);
    assert!(u128::try_from(&too_big).is_err());
    assert!(i128::try_from(&-too_big).is_err());
}

#[test]
fn test_cmp() {
    let neg_one = BigInt::from(-1);
    let zero = BigInt::zero();
    let one = BigInt::from(1);
    assert!(neg_one < zero);
    assert!(zero < one);
    assert!(BigInt::from(1_000_000) > BigInt::from(999_999));
    assert!(BigInt::from(-1_000_000) < BigInt::from(-999_999));
    assert!(BigInt::from(-3) < BigInt::from(-2));
    assert!(BigInt::from_limbs(vec![1, 2], 1) < BigInt::from_limbs(vec![0, 3], 1));
    assert!(BigInt::from_limbs(vec![1, 2], -1) > BigInt::from_limbs(vec![0, 3], -1));
    assert!(one >= BigInt::from(1));
    assert!(one <= BigInt::from(1));
    assert_ne!(one, neg_one);
    assert_eq!(zero.cmp(&BigInt::from_limbs(vec![0, 0], -1)), Ordering::Equal);

    assert_eq!(BigInt::from(-7).compare_magnitude(&BigInt::from(5)), Ordering::Greater);
    assert_eq!(BigInt::from(-5).compare_magnitude(&BigInt::from(5)), Ordering::Equal);
}

#[test]
fn test_neg() {
    assert_eq!(-BigInt::from(5), BigInt::from(-5));
    assert_eq!(-(-BigInt::from(5)), BigInt::from(5));
    assert_eq!(-BigInt::zero(), BigInt::zero());
    assert_eq!((-BigInt::zero()).signum(), 0);
}

#[test]
fn test_add() {
    let k = BigInt::from(10) + BigInt::from(-20);
    assert_eq!(k, BigInt::from(-10));
    assert_eq!(k.to_string(), "-10");

    let k = BigInt::from(999_999) + BigInt::from(1);
    assert_eq!(k.mag, vec![0, 1]);
    assert_eq!(k.to_string(), "1000000");

    let k = BigInt::from(-999_999_999_999_i64) + BigInt::from(-1);
    assert_eq!(k.mag, vec![0, 0, 1]);
    assert_eq!(k.signum, -1);

    assert_eq!(BigInt::zero() + BigInt::zero(), BigInt::zero());
    assert_eq!(BigInt::zero() + BigInt::from(-3), BigInt::from(-3));
    assert_eq!(&BigInt::from(-3) + &BigInt::zero(), BigInt::from(-3));
    assert_eq!(BigInt::from(3) + &BigInt::from(-3), BigInt::zero());
}

#[test]
fn test_sub() {
    let k = BigInt::from(-10_000_000) - BigInt::zero();
    assert_eq!(k, BigInt::from(-10_000_000));
    assert_eq!(k.to_string(), "-10000000");

    let k = BigInt::from(5) - BigInt::from(5);
    assert_eq!(k, BigInt::zero());
    assert_eq!(k.signum, 0);

    assert_eq!(BigInt::from(5) - BigInt::from(8), BigInt::from(-3));
    assert_eq!(BigInt::from(-5) - BigInt::from(-8), BigInt::from(3));
    assert_eq!(BigInt::from(-5) - BigInt::from(8), BigInt::from(-13));
    assert_eq!(BigInt::zero() - BigInt::from(5), BigInt::from(-5));
    assert_eq!(&BigInt::from(10) - BigInt::from(-20), BigInt::from(30));

    let k = BigInt::from(1_000_000_000_000_i64) - BigInt::from(1);
    assert_eq!(k.mag, vec![999_999, 999_999]);

    let k = BigInt::from(1_000_000) - BigInt::from(999_999);
    assert_eq!(k.mag, vec![1]);
}

#[test]
fn test_assign() {
    let mut a = BigInt::from(10);
    a += BigInt::from(-20);
    assert_eq!(a, BigInt::from(-10));
    a -= &BigInt::from(-10);
    assert_eq!(a, BigInt::zero());
    a += &BigInt::from(999_999);
    a -= BigInt::from(-1);
    assert_eq!(a.to_string(), "1000000");
}

#[test]
fn test_sum() {
    let values: Vec<BigInt> = (1..=100).map(BigInt::from).collect();
    let total: BigInt = values.iter().sum();
    assert_eq!(total, BigInt::from(5050));

    let total: BigInt = values.into_iter().map(|x| -x).sum();
    assert_eq!(total, BigInt::from(-5050));

    let empty: BigInt = Vec::<BigInt>::new().into_iter().sum();
    assert_eq!(empty, BigInt::zero());
}
