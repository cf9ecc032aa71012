use anchor_lang::prelude::*;

use crate::error::ErrorCode;

mod u256 {
    use uint::construct_uint;

    construct_uint! {
        pub struct U256(4);
    }
}

use u256::U256;

/// floor(a * b / denom) with a 256-bit intermediate.
pub fn mul_div_down(a: u128, b: u128, denom: u128) -> Result<u128> {
    require!(denom > 0, ErrorCode::MathOverflow);
    let wide = U256::from(a) * U256::from(b) / U256::from(denom);
    narrow(wide)
}

/// ceil(a * b / denom) with a 256-bit intermediate.
pub fn mul_div_up(a: u128, b: u128, denom: u128) -> Result<u128> {
    require!(denom > 0, ErrorCode::MathOverflow);
    let d = U256::from(denom);
    let wide = (U256::from(a) * U256::from(b) + (d - U256::from(1u8))) / d;
    narrow(wide)
}

fn narrow(wide: U256) -> Result<u128> {
    require!(wide.bits() <= 128, ErrorCode::MathOverflow);
    Ok(wide.low_u128())
}

pub fn checked_add(a: u128, b: u128) -> Result<u128> {
    a.checked_add(b)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))
}

pub fn checked_sub(a: u128, b: u128) -> Result<u128> {
    a.checked_sub(b)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mul_div_down() {
        assert_eq!(mul_div_down(10, 10, 3).unwrap(), 33);
        assert_eq!(mul_div_down(0, 10, 3).unwrap(), 0);
        // Intermediate above u128::MAX, result within range.
        assert_eq!(
            mul_div_down(u128::MAX, 2, 4).unwrap(),
            u128::MAX / 2
        );
    }

    #[test]
    fn test_mul_div_up() {
        assert_eq!(mul_div_up(10, 10, 3).unwrap(), 34);
        assert_eq!(mul_div_up(9, 1, 3).unwrap(), 3);
        assert_eq!(mul_div_up(0, 10, 3).unwrap(), 0);
    }

    #[test]
    fn test_mul_div_overflow() {
        assert!(mul_div_down(u128::MAX, u128::MAX, 1).is_err());
        assert!(mul_div_down(1, 1, 0).is_err());
    }
}
