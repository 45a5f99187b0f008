use payflow::{
    Checkout, CreditProcessor, DebitProcessor, NotARobot, Order, OrderStatus, PaymentError,
    PaymentMethod, PaymentProcessorBox, PaypalProcessor, SmsAuthorizer,
};
use rust_decimal_macros::dec;
use std::sync::Arc;

fn demo_order() -> Order {
    let mut order = Order::new();
    order.add_item("pen", 1, dec!(5.0)).unwrap();
    order.add_item("paper", 5, dec!(10.0)).unwrap();
    order
}

#[test]
fn test_demo_order_total() {
    assert_eq!(demo_order().total_price(), dec!(55.0));
}

#[test]
fn test_debit_flow_requires_challenge() {
    let auth = Arc::new(NotARobot::new());
    let checkout = Checkout::new(Box::new(DebitProcessor::new("345678", auth.clone())));
    let mut order = demo_order();

    // Unverified: payment refused, order untouched
    assert_eq!(
        checkout.settle(&mut order),
        Err(PaymentError::NotAuthorized)
    );
    assert_eq!(order.status(), OrderStatus::Unpaid);

    // After the challenge the same checkout succeeds
    auth.confirm_human();
    let receipt = checkout.settle(&mut order).unwrap();
    assert_eq!(receipt.method, PaymentMethod::Debit);
    assert_eq!(receipt.total, dec!(55.0));
    assert_eq!(order.status(), OrderStatus::Paid);
}

#[test]
fn test_paypal_flow_with_sms_challenge() {
    let auth = Arc::new(SmsAuthorizer::new());
    let checkout = Checkout::new(Box::new(PaypalProcessor::new("hi@world.com", auth.clone())));
    let mut order = demo_order();

    assert_eq!(
        checkout.settle(&mut order),
        Err(PaymentError::NotAuthorized)
    );
    assert!(!order.is_paid());

    auth.verify_code("1234");
    let receipt = checkout.settle(&mut order).unwrap();
    assert_eq!(receipt.method, PaymentMethod::Paypal);
    assert!(order.is_paid());
}

#[test]
fn test_credit_flow_without_authorizer() {
    let checkout = Checkout::new(Box::new(CreditProcessor::new("345678")));
    let mut order = demo_order();

    let receipt = checkout.settle(&mut order).unwrap();
    assert_eq!(receipt.method, PaymentMethod::Credit);
    assert_eq!(receipt.total, dec!(55.0));
    assert!(order.is_paid());
}

#[test]
fn test_settling_a_paid_order_fails() {
    let checkout = Checkout::new(Box::new(CreditProcessor::new("345678")));
    let mut order = demo_order();

    checkout.settle(&mut order).unwrap();
    assert_eq!(checkout.settle(&mut order), Err(PaymentError::AlreadyPaid));
    assert!(order.is_paid());
}

#[test]
fn test_empty_order_is_rejected() {
    let checkout = Checkout::new(Box::new(CreditProcessor::new("345678")));
    let mut order = Order::new();

    assert_eq!(checkout.settle(&mut order), Err(PaymentError::EmptyOrder));
}

#[test]
fn test_processors_are_interchangeable() {
    // Every variant satisfies the same contract: a verified flow ends with
    // a paid order and a receipt carrying the order total.
    let robot = Arc::new(NotARobot::new());
    robot.confirm_human();
    let sms = Arc::new(SmsAuthorizer::new());
    sms.verify_code("1234");

    let processors: Vec<PaymentProcessorBox> = vec![
        Box::new(DebitProcessor::new("345678", robot)),
        Box::new(CreditProcessor::new("345678")),
        Box::new(PaypalProcessor::new("hi@world.com", sms)),
    ];

    for processor in processors {
        let checkout = Checkout::new(processor);
        let mut order = demo_order();
        let receipt = checkout.settle(&mut order).unwrap();
        assert_eq!(receipt.total, dec!(55.0));
        assert!(order.is_paid());
    }
}
