use crate::error::ChangeError;
use rust_decimal::Decimal;

/// Validates the raw price and payment strings.
///
/// Pure function of the two strings: no reading, no printing. Checks are applied
/// in order and the first failure wins, so a garbled price is reported before a
/// garbled payment.
///
/// A payment exactly equal to the price is accepted; the engine renders it as a
/// zero-change transaction rather than the validator rejecting it.
pub fn validate(price: &str, payment: &str) -> Result<(Decimal, Decimal), ChangeError> {
    let price: Decimal = price
        .trim()
        .parse()
        .map_err(|_| ChangeError::InvalidPrice)?;
    let payment: Decimal = payment
        .trim()
        .parse()
        .map_err(|_| ChangeError::InvalidPayment)?;

    if price == Decimal::ZERO {
        return Err(ChangeError::FreeItem);
    }
    if price < Decimal::ZERO {
        return Err(ChangeError::NegativePrice);
    }
    if payment <= Decimal::ZERO {
        return Err(ChangeError::NonPositivePayment);
    }
    if payment < price {
        return Err(ChangeError::InsufficientPayment);
    }

    Ok((price, payment))
}
