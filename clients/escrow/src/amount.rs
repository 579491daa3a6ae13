use crate::errors::EscrowError;

/// Conversion of raw user input into an exact `u64` seed or token amount.
///
/// Negative, fractional, non-finite and out-of-range values are rejected
/// with [`EscrowError::InvalidAmount`]; nothing is truncated or rounded.
pub trait IntoAmount {
    fn into_amount(self) -> Result<u64, EscrowError>;
}

macro_rules! impl_lossless {
    ($($ty:ty),*) => {
        $(
            impl IntoAmount for $ty {
                fn into_amount(self) -> Result<u64, EscrowError> {
                    Ok(u64::from(self))
                }
            }
        )*
    };
}

macro_rules! impl_checked {
    ($($ty:ty),*) => {
        $(
            impl IntoAmount for $ty {
                fn into_amount(self) -> Result<u64, EscrowError> {
                    u64::try_from(self).map_err(|_| EscrowError::InvalidAmount)
                }
            }
        )*
    };
}

impl_lossless!(u8, u16, u32, u64);
impl_checked!(i8, i16, i32, i64, i128, isize, u128, usize);

// 2^64, the first float past u64::MAX.
const U64_RANGE_END: f64 = 18_446_744_073_709_551_616.0;

impl IntoAmount for f64 {
    fn into_amount(self) -> Result<u64, EscrowError> {
        if !self.is_finite() || self.fract() != 0.0 || self < 0.0 || self >= U64_RANGE_END {
            return Err(EscrowError::InvalidAmount);
        }
        Ok(self as u64)
    }
}

impl IntoAmount for &str {
    fn into_amount(self) -> Result<u64, EscrowError> {
        self.trim()
            .parse::<u64>()
            .map_err(|_| EscrowError::InvalidAmount)
    }
}

impl IntoAmount for String {
    fn into_amount(self) -> Result<u64, EscrowError> {
        self.as_str().into_amount()
    }
}
