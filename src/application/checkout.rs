use crate::domain::order::Order;
use crate::domain::ports::{PaymentProcessorBox, Receipt};
use crate::error::{PaymentError, Result};

/// The entry point for settling an order.
///
/// `Checkout` owns the payment processor it was constructed with and runs a
/// single payment flow against one order. Failures propagate to the caller
/// unchanged; there are no retries and no partial payments.
pub struct Checkout {
    processor: PaymentProcessorBox,
}

impl Checkout {
    pub fn new(processor: PaymentProcessorBox) -> Self {
        Self { processor }
    }

    /// Charges the order through the configured processor.
    ///
    /// An order with no items is rejected before the processor is invoked.
    pub fn settle(&self, order: &mut Order) -> Result<Receipt> {
        if order.items().is_empty() {
            return Err(PaymentError::EmptyOrder);
        }
        self.processor.pay(order)
    }
}
