pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use application::checkout::Checkout;
pub use domain::order::{LineItem, Order, OrderStatus};
pub use domain::ports::{
    Authorizer, PaymentMethod, PaymentProcessor, PaymentProcessorBox, Receipt, SharedAuthorizer,
};
pub use error::{PaymentError, Result};
pub use infrastructure::authorizers::{NotARobot, SmsAuthorizer};
pub use infrastructure::processors::{CreditProcessor, DebitProcessor, PaypalProcessor};
