use thiserror::Error;

pub type Result<T> = std::result::Result<T, ChangeError>;

#[derive(Error, Debug)]
pub enum ChangeError {
    #[error("The product price is not a valid number, please try again")]
    InvalidPrice,
    #[error("The payment amount is not a valid number, please try again")]
    InvalidPayment,
    #[error("The product is free, no payment needed")]
    FreeItem,
    #[error("The product price cannot be negative")]
    NegativePrice,
    #[error("The payment amount must be greater than zero")]
    NonPositivePayment,
    #[error("The payment does not cover the product price")]
    InsufficientPayment,
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
