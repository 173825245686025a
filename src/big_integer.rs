//! # BigInteger
//! Arbitrary-precision signed integers over a decimal digit string.
//! Supports addition, subtraction, increment/decrement and comparison.
//! # Example
//! ```
//! use big_integer::BigInteger;
//!
//! let a: BigInteger = "123456789012345678901234567890".parse().unwrap();
//! let b: BigInteger = "-987654321098765432109876543210".parse().unwrap();
//! println!("a = {}", a);
//! println!("a + b = {}", &a + &b);
//! println!("a - b = {}", &a - &b);
//! assert!(b < a);
//! ```

use std::cmp::Ordering;
use std::fmt::Display;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

use crate::big_integer_cache::{MAX_CONSTANT, NEG_CACHE, ONE, POS_CACHE, ZERO};
use crate::FormatError;

/// Number's sign. Zero always carries [`Sign::Positive`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Sign {
    Positive,
    Negative,
}

impl Sign {
    fn flip(self) -> Sign {
        match self {
            Sign::Positive => Sign::Negative,
            Sign::Negative => Sign::Positive,
        }
    }
}

/// An arbitrary-precision signed decimal integer.
///
/// The value is kept in canonical form: the absolute value as decimal
/// digits with no leading zeros, plus a sign tag. Zero is always
/// positive and rendered without a sign.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BigInteger {
    /// Absolute value as decimal digit characters, most significant first.
    mag: String,
    sign: Sign,
}

// 实现构造
impl BigInteger {
    /// Builds a value from parts that are already in canonical form.
    pub(crate) fn from_raw(sign: Sign, mag: &str) -> BigInteger {
        BigInteger { sign, mag: mag.to_owned() }
    }

    fn value_of(val: u128, sign: Sign) -> BigInteger {
        if val == 0 {
            return ZERO.clone();
        }
        if val <= MAX_CONSTANT {
            let cached = match sign {
                Sign::Positive => &POS_CACHE[val as usize],
                Sign::Negative => &NEG_CACHE[val as usize],
            };
            return cached.clone();
        }
        BigInteger { sign, mag: val.to_string() }
    }
}

// 实现解析
impl FromStr for BigInteger {
    type Err = FormatError;

    /// Parses an optionally signed decimal string, `[+-][000]123456789`.
    fn from_str(s: &str) -> Result<BigInteger, FormatError> {
        let (sign, digits) = match s.as_bytes().first().copied() {
            Some(b'-') => (Sign::Negative, &s[1..]),
            Some(b'+') => (Sign::Positive, &s[1..]),
            _ => (Sign::Positive, s),
        };

        if digits.is_empty() {
            return Err(FormatError::MissingDigits);
        }
        if let Some(bad) = digits.chars().find(|c| !c.is_ascii_digit()) {
            return Err(FormatError::InvalidDigit(bad));
        }

        let mut number = BigInteger { sign, mag: digits.to_owned() };
        number.strip_leading_zeros();
        Ok(number)
    }
}

macro_rules! impl_unsigned_to_big_integer {
    ($($u: ty),*) => {
    $(
    impl From<$u> for BigInteger {
        fn from(val: $u) -> Self {
            BigInteger::value_of(val as u128, Sign::Positive)
        }
    }
    )*
    };
}

macro_rules! impl_signed_to_big_integer {
    ($($i: ty),*) => {
    $(
    impl From<$i> for BigInteger {
        fn from(val: $i) -> Self {
            let sign = if val < 0 { Sign::Negative } else { Sign::Positive };
            BigInteger::value_of(val.unsigned_abs() as u128, sign)
        }
    }
    )*
    };
}

impl_unsigned_to_big_integer!(u8, u16, u32, u64, usize, u128);
impl_signed_to_big_integer!(i8, i16, i32, i64, isize, i128);

// 实现打印
impl Display for BigInteger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.sign == Sign::Negative {
            f.write_str("-")?;
        }
        f.write_str(&self.mag)
    }
}

// 杂项辅助函数
impl BigInteger {
    /// Returns the absolute value.
    pub fn abs(&self) -> BigInteger {
        BigInteger { sign: Sign::Positive, mag: self.mag.clone() }
    }

    /// Adds one to the value in place.
    pub fn increment(&mut self) {
        *self += &*ONE;
    }

    /// Subtracts one from the value in place.
    pub fn decrement(&mut self) {
        *self -= &*ONE;
    }

    /// Zero keeps the plus sign.
    fn flip_sign(&mut self) {
        if self.mag != "0" {
            self.sign = self.sign.flip();
        }
    }

    /// Drops leading zeros left behind by parsing or subtraction,
    /// keeping at least one digit. A zero result turns positive.
    fn strip_leading_zeros(&mut self) {
        let zeros = self
            .mag
            .bytes()
            .take_while(|&digit| digit == b'0')
            .count()
            .min(self.mag.len() - 1);
        self.mag.drain(..zeros);
        if self.mag == "0" {
            self.sign = Sign::Positive;
        }
    }
}

// 实现量级运算
impl BigInteger {
    /// Compares two magnitude strings. With no leading zeros a longer
    /// magnitude is always the larger one; at equal length the digits
    /// compare lexicographically like their numeric values.
    fn cmp_magnitudes(lhs: &str, rhs: &str) -> Ordering {
        lhs.len().cmp(&rhs.len()).then_with(|| lhs.cmp(rhs))
    }

    /// Adds the smaller absolute value to the greater one. Classical
    /// right-to-left walk with a carry digit; stops as soon as the
    /// smaller operand is exhausted and the carry cleared.
    fn sum_magnitudes(greater: &mut String, less: &str) {
        let mut rhs_digits = less.bytes().rev();
        let mut carry = 0;
        // only ASCII digits are ever written back
        let lhs_digits = unsafe { greater.as_bytes_mut() };
        for lhs in lhs_digits.iter_mut().rev() {
            let rhs = rhs_digits.next();
            if rhs.is_none() && carry == 0 {
                break;
            }
            let mut digit_sum = *lhs - b'0' + carry;
            if let Some(rhs) = rhs {
                digit_sum += rhs - b'0';
            }
            carry = digit_sum / 10;
            *lhs = b'0' + digit_sum % 10;
        }
        if carry != 0 {
            greater.insert(0, char::from(b'0' + carry));
        }
    }

    /// Subtracts the smaller absolute value from the greater one.
    /// Classical right-to-left walk with a borrow digit; the caller
    /// strips any leading zeros the difference leaves behind.
    fn diff_magnitudes(greater: &mut String, less: &str) {
        let mut rhs_digits = less.bytes().rev();
        let mut borrow = 0;
        // only ASCII digits are ever written back
        let lhs_digits = unsafe { greater.as_bytes_mut() };
        for lhs in lhs_digits.iter_mut().rev() {
            let rhs = rhs_digits.next();
            if rhs.is_none() && borrow == 0 {
                break;
            }
            let mut digit_sub = (*lhs - b'0') as i8 - borrow;
            if let Some(rhs) = rhs {
                digit_sub -= (rhs - b'0') as i8;
            }
            if digit_sub < 0 {
                digit_sub += 10;
                borrow = 1;
            } else {
                borrow = 0;
            }
            *lhs = b'0' + digit_sub as u8;
        }
    }

    /// Compares absolute values and adds the less to the greater.
    fn add_abs(&mut self, rhs: &BigInteger) {
        if BigInteger::cmp_magnitudes(&self.mag, &rhs.mag).is_ge() {
            BigInteger::sum_magnitudes(&mut self.mag, &rhs.mag);
        } else {
            let mut result = rhs.mag.clone();
            BigInteger::sum_magnitudes(&mut result, &self.mag);
            self.mag = result;
        }
    }

    /// Compares absolute values and subtracts the less from the greater;
    /// the sign follows the operand with the greater magnitude.
    fn sub_abs(&mut self, rhs: &BigInteger) {
        if BigInteger::cmp_magnitudes(&self.mag, &rhs.mag).is_ge() {
            BigInteger::diff_magnitudes(&mut self.mag, &rhs.mag);
        } else {
            let mut result = rhs.mag.clone();
            BigInteger::diff_magnitudes(&mut result, &self.mag);
            self.mag = result;
            self.sign = rhs.sign;
        }
        self.strip_leading_zeros();
    }
}

// 实现加法
impl AddAssign<&BigInteger> for BigInteger {
    fn add_assign(&mut self, rhs: &BigInteger) {
        if self.sign == rhs.sign {
            self.add_abs(rhs);
        } else {
            self.sub_abs(rhs);
        }
    }
}

impl AddAssign for BigInteger {
    fn add_assign(&mut self, rhs: BigInteger) {
        *self += &rhs;
    }
}

impl Add for BigInteger {
    type Output = BigInteger;

    fn add(mut self, rhs: BigInteger) -> BigInteger {
        self += &rhs;
        self
    }
}

impl Add<&BigInteger> for BigInteger {
    type Output = BigInteger;

    fn add(mut self, rhs: &BigInteger) -> BigInteger {
        self += rhs;
        self
    }
}

impl Add for &BigInteger {
    type Output = BigInteger;

    fn add(self, rhs: &BigInteger) -> BigInteger {
        self.clone() + rhs
    }
}

// 实现取反
impl Neg for BigInteger {
    type Output = BigInteger;

    fn neg(mut self) -> BigInteger {
        self.flip_sign();
        self
    }
}

impl Neg for &BigInteger {
    type Output = BigInteger;

    fn neg(self) -> BigInteger {
        -self.clone()
    }
}

// 实现减法
// Uses: a - b = -(-a + b)
impl SubAssign<&BigInteger> for BigInteger {
    fn sub_assign(&mut self, rhs: &BigInteger) {
        self.flip_sign();
        *self += rhs;
        self.flip_sign();
    }
}

impl SubAssign for BigInteger {
    fn sub_assign(&mut self, rhs: BigInteger) {
        *self -= &rhs;
    }
}

impl Sub for BigInteger {
    type Output = BigInteger;

    fn sub(mut self, rhs: BigInteger) -> BigInteger {
        self -= &rhs;
        self
    }
}

impl Sub<&BigInteger> for BigInteger {
    type Output = BigInteger;

    fn sub(mut self, rhs: &BigInteger) -> BigInteger {
        self -= rhs;
        self
    }
}

impl Sub for &BigInteger {
    type Output = BigInteger;

    fn sub(self, rhs: &BigInteger) -> BigInteger {
        self.clone() - rhs
    }
}

// 实现大小比较
impl Ord for BigInteger {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.sign, other.sign) {
            (Sign::Negative, Sign::Positive) => Ordering::Less,
            (Sign::Positive, Sign::Negative) => Ordering::Greater,
            (Sign::Positive, Sign::Positive) => {
                BigInteger::cmp_magnitudes(&self.mag, &other.mag)
            }
            (Sign::Negative, Sign::Negative) => {
                BigInteger::cmp_magnitudes(&self.mag, &other.mag).reverse()
            }
        }
    }
}

impl PartialOrd for BigInteger {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
