use lazy_static::lazy_static;

use crate::big_integer::Sign;
use crate::BigInteger;

/// Largest magnitude kept in the constant caches.
pub(crate) const MAX_CONSTANT: u128 = 9;

lazy_static! {
    pub(crate) static ref ZERO: BigInteger = BigInteger::from_raw(Sign::Positive, "0");
    pub(crate) static ref ONE: BigInteger = BigInteger::from_raw(Sign::Positive, "1");
    pub(crate) static ref POS_CACHE: [BigInteger; MAX_CONSTANT as usize + 1] = [
        BigInteger::from_raw(Sign::Positive, "0"),
        BigInteger::from_raw(Sign::Positive, "1"),
        BigInteger::from_raw(Sign::Positive, "2"),
        BigInteger::from_raw(Sign::Positive, "3"),
        BigInteger::from_raw(Sign::Positive, "4"),
        BigInteger::from_raw(Sign::Positive, "5"),
        BigInteger::from_raw(Sign::Positive, "6"),
        BigInteger::from_raw(Sign::Positive, "7"),
        BigInteger::from_raw(Sign::Positive, "8"),
        BigInteger::from_raw(Sign::Positive, "9"),
    ];
    pub(crate) static ref NEG_CACHE: [BigInteger; MAX_CONSTANT as usize + 1] = [
        // zero keeps the plus sign
        BigInteger::from_raw(Sign::Positive, "0"),
        BigInteger::from_raw(Sign::Negative, "1"),
        BigInteger::from_raw(Sign::Negative, "2"),
        BigInteger::from_raw(Sign::Negative, "3"),
        BigInteger::from_raw(Sign::Negative, "4"),
        BigInteger::from_raw(Sign::Negative, "5"),
        BigInteger::from_raw(Sign::Negative, "6"),
        BigInteger::from_raw(Sign::Negative, "7"),
        BigInteger::from_raw(Sign::Negative, "8"),
        BigInteger::from_raw(Sign::Negative, "9"),
    ];
}
