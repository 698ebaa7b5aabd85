//! Limb Int \
//! This crate provides:
//! - [`BigInt`]: Immutable arbitrary-precision signed integers in sign-magnitude form, on base `10^6` limbs.
//!   Supports negation, addition, subtraction, a total order and decimal output.
//! - Multiplication, division and parsing from text. (Coming Soon)

mod big_int;
mod big_num_cache;
mod big_num_constants;
mod error;

pub use big_int::BigInt;
pub use big_num_constants::{BASE, BASE_DIGITS};
pub use error::TryFromBigIntError;

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{BigInt, BASE};

    fn big_int() -> impl Strategy<Value = BigInt> {
        (prop::collection::vec(0..BASE, 0..6), -1i8..=1)
            .prop_map(|(limbs, signum)| BigInt::from_limbs(limbs, signum))
    }

    fn assert_canonical(val: &BigInt) {
        let limbs = val.limbs();
        assert!(!limbs.is_empty());
        assert!(limbs.iter().all(|&x| x < BASE), "{:?}", val);
        if limbs.len() > 1 {
            assert_ne!(limbs[limbs.len() - 1], 0, "{:?}", val);
        }
        assert_eq!(val.signum() == 0, limbs == [0], "{:?}", val);
        assert!((-1..=1).contains(&val.signum()));
    }

    #[test]
    fn it_works() {
        let a = BigInt::from(10);
        let b = BigInt::from(-20);
        println!("a = {}", a);
        println!("a + b = {}", &a + &b);
        println!("a - b = {}", &a - &b);
        println!("b - a = {:?}", &b - &a);
        assert_eq!((&a + &b).to_string(), "-10");
    }

    proptest! {
        #[test]
        fn from_limbs_is_canonical(limbs in prop::collection::vec(any::<u32>(), 0..6), signum in any::<i8>()) {
            assert_canonical(&BigInt::from_limbs(limbs, signum));
        }

        #[test]
        fn results_are_canonical(a in big_int(), b in big_int()) {
            assert_canonical(&a);
            assert_canonical(&(&a + &b));
            assert_canonical(&(&a - &b));
            assert_canonical(&-&a);
        }

        #[test]
        fn decimal_round_trip(n in any::<i128>()) {
            prop_assert_eq!(BigInt::from(n).to_string(), n.to_string());
        }

        #[test]
        fn native_round_trip(n in any::<i64>()) {
            prop_assert_eq!(i64::try_from(&BigInt::from(n)), Ok(n));
        }

        #[test]
        fn matches_native_arithmetic(a in any::<i64>(), b in any::<i64>()) {
            let x = BigInt::from(a);
            let y = BigInt::from(b);
            prop_assert_eq!(&x + &y, BigInt::from(a as i128 + b as i128));
            prop_assert_eq!(&x - &y, BigInt::from(a as i128 - b as i128));
            prop_assert_eq!(x.cmp(&y), a.cmp(&b));
        }

        #[test]
        fn double_negation(a in big_int()) {
            prop_assert_eq!(-(-&a), a);
        }

        #[test]
        fn additive_inverse(a in big_int()) {
            prop_assert_eq!(&a + -&a, BigInt::zero());
        }

        #[test]
        fn addition_commutes(a in big_int(), b in big_int()) {
            prop_assert_eq!(&a + &b, &b + &a);
        }

        #[test]
        fn addition_associates(a in big_int(), b in big_int(), c in big_int()) {
            prop_assert_eq!((&a + &b) + &c, &a + (&b + &c));
        }

        #[test]
        fn subtraction_adds_negation(a in big_int(), b in big_int()) {
            prop_assert_eq!(&a - &b, &a + -&b);
        }

        #[test]
        fn order_agrees_with_subtraction(a in big_int(), b in big_int()) {
            if a != b {
                prop_assert_eq!(a < b, (&b - &a).signum() == 1);
            }
        }
    }
}
