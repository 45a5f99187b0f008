use super::order::Order;
use crate::error::Result;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Debit,
    Credit,
    Paypal,
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentMethod::Debit => write!(f, "debit"),
            PaymentMethod::Credit => write!(f, "credit"),
            PaymentMethod::Paypal => write!(f, "paypal"),
        }
    }
}

/// Structured outcome of a successful payment, replacing console narration
/// as the processor's observable result.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Receipt {
    pub method: PaymentMethod,
    pub total: Decimal,
}

/// A capability that can vouch for the current user.
///
/// Implementations expose their own challenge method (a captcha click, an
/// SMS code, ...) that flips them to verified; once verified they stay
/// verified. `is_verified` is a pure query.
pub trait Authorizer: Send + Sync {
    fn is_verified(&self) -> bool;
}

/// A capability that can settle an order.
///
/// On success the order is left in the `Paid` state and a receipt describes
/// the charge. Variants that require authorization must fail with
/// `PaymentError::NotAuthorized` and leave the order untouched when their
/// authorizer is unverified.
pub trait PaymentProcessor: Send + Sync {
    fn pay(&self, order: &mut Order) -> Result<Receipt>;
}

/// Shared handle to an authorizer, so the driver can still run the variant's
/// challenge after injecting it into a processor.
pub type SharedAuthorizer = Arc<dyn Authorizer>;

pub type PaymentProcessorBox = Box<dyn PaymentProcessor>;
