use crate::error::{PaymentError, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single row of an order: what was bought, how many, at what unit price.
///
/// Keeping the three values together in one struct makes it impossible for
/// names, quantities and prices to drift out of sync.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct LineItem {
    pub name: String,
    pub quantity: u32,
    pub unit_price: Decimal,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Copy, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Unpaid,
    Paid,
}

/// A customer order: an accumulator of line items and a payment status.
///
/// Created empty and unpaid; items are appended one at a time and the status
/// moves from `Unpaid` to `Paid` exactly once, driven by whichever payment
/// processor completes the payment. Each `Order` exclusively owns its item
/// list.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
pub struct Order {
    items: Vec<LineItem>,
    status: OrderStatus,
}

impl Order {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a line item to the order.
    ///
    /// Rejects a zero quantity or a negative unit price; a zero price is
    /// allowed (free items are coherent). On error the order is unchanged.
    pub fn add_item(
        &mut self,
        name: impl Into<String>,
        quantity: u32,
        unit_price: Decimal,
    ) -> Result<()> {
        if quantity == 0 {
            return Err(PaymentError::InvalidItem(
                "quantity must be positive".to_string(),
            ));
        }
        if unit_price < Decimal::ZERO {
            return Err(PaymentError::InvalidItem(
                "unit price must not be negative".to_string(),
            ));
        }
        self.items.push(LineItem {
            name: name.into(),
            quantity,
            unit_price,
        });
        Ok(())
    }

    /// Total across all line items, weighting each unit price by its
    /// quantity. Zero for an empty order.
    pub fn total_price(&self) -> Decimal {
        self.items
            .iter()
            .map(|item| Decimal::from(item.quantity) * item.unit_price)
            .sum()
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    pub fn is_paid(&self) -> bool {
        self.status == OrderStatus::Paid
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Marks the order as paid.
    ///
    /// The `Unpaid` to `Paid` transition happens at most once; a second
    /// attempt fails with `AlreadyPaid` so a double charge is surfaced
    /// instead of silently absorbed.
    pub fn mark_paid(&mut self) -> Result<()> {
        if self.is_paid() {
            return Err(PaymentError::AlreadyPaid);
        }
        self.status = OrderStatus::Paid;
        Ok(())
    }
}
