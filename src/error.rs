use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum PaymentError {
    #[error("Payment not authorized")]
    NotAuthorized,
    #[error("Order has already been paid")]
    AlreadyPaid,
    #[error("Invalid line item: {0}")]
    InvalidItem(String),
    #[error("Order has no items to pay for")]
    EmptyOrder,
}

pub type Result<T> = std::result::Result<T, PaymentError>;
