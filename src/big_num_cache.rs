use lazy_static::*;

use crate::BigInt;
use crate::big_num_constants::*;

lazy_static! {
    pub static ref POS_CACHE: [BigInt; MAX_CONSTANT + 1] = {
        let mut cache: [BigInt; MAX_CONSTANT + 1] = Default::default();
        for (i, val) in cache.iter_mut().enumerate().skip(1) {
            *val = BigInt::from_limbs(vec![i as u32], 1);
        }
        cache
    };
    pub static ref NEG_CACHE: [BigInt; MAX_CONSTANT + 1] = {
        let mut cache: [BigInt; MAX_CONSTANT + 1] = Default::default();
        for (i, val) in cache.iter_mut().enumerate().skip(1) {
            *val = BigInt::from_limbs(vec![i as u32], -1);
        }
        cache
    };
}
