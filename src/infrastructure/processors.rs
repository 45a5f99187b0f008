use crate::domain::order::Order;
use crate::domain::ports::{PaymentMethod, PaymentProcessor, Receipt, SharedAuthorizer};
use crate::error::{PaymentError, Result};

/// Debit card payments. Requires a verified authorizer.
pub struct DebitProcessor {
    security_code: String,
    authorizer: SharedAuthorizer,
}

impl DebitProcessor {
    pub fn new(security_code: impl Into<String>, authorizer: SharedAuthorizer) -> Self {
        Self {
            security_code: security_code.into(),
            authorizer,
        }
    }

    pub fn security_code(&self) -> &str {
        &self.security_code
    }
}

impl PaymentProcessor for DebitProcessor {
    fn pay(&self, order: &mut Order) -> Result<Receipt> {
        if !self.authorizer.is_verified() {
            return Err(PaymentError::NotAuthorized);
        }
        let total = order.total_price();
        order.mark_paid()?;
        Ok(Receipt {
            method: PaymentMethod::Debit,
            total,
        })
    }
}

/// Credit card payments. Needs no authorizer.
pub struct CreditProcessor {
    security_code: String,
}

impl CreditProcessor {
    pub fn new(security_code: impl Into<String>) -> Self {
        Self {
            security_code: security_code.into(),
        }
    }

    pub fn security_code(&self) -> &str {
        &self.security_code
    }
}

impl PaymentProcessor for CreditProcessor {
    fn pay(&self, order: &mut Order) -> Result<Receipt> {
        let total = order.total_price();
        order.mark_paid()?;
        Ok(Receipt {
            method: PaymentMethod::Credit,
            total,
        })
    }
}

/// PayPal payments, identified by email. Requires a verified authorizer.
pub struct PaypalProcessor {
    email: String,
    authorizer: SharedAuthorizer,
}

impl PaypalProcessor {
    pub fn new(email: impl Into<String>, authorizer: SharedAuthorizer) -> Self {
        Self {
            email: email.into(),
            authorizer,
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

impl PaymentProcessor for PaypalProcessor {
    fn pay(&self, order: &mut Order) -> Result<Receipt> {
        if !self.authorizer.is_verified() {
            return Err(PaymentError::NotAuthorized);
        }
        let total = order.total_price();
        order.mark_paid()?;
        Ok(Receipt {
            method: PaymentMethod::Paypal,
            total,
        })
    }
}
