use clap::{Parser, ValueEnum};
use miette::{IntoDiagnostic, Result};
use payflow::{
    Checkout, CreditProcessor, DebitProcessor, NotARobot, Order, PaymentProcessorBox,
    PaypalProcessor, SharedAuthorizer, SmsAuthorizer,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::str::FromStr;
use std::sync::Arc;

#[derive(Clone, Copy, ValueEnum)]
enum Method {
    Debit,
    Credit,
    Paypal,
}

#[derive(Clone, Copy, ValueEnum)]
enum AuthKind {
    Robot,
    Sms,
}

#[derive(Clone)]
struct ItemSpec {
    name: String,
    quantity: u32,
    unit_price: Decimal,
}

impl FromStr for ItemSpec {
    type Err = String;

    // NAME:QTY:PRICE, splitting from the right so names may contain colons
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let mut parts = s.rsplitn(3, ':');
        let (price, qty, name) = match (parts.next(), parts.next(), parts.next()) {
            (Some(price), Some(qty), Some(name)) if !name.is_empty() => (price, qty, name),
            _ => return Err(format!("expected NAME:QTY:PRICE, got '{s}'")),
        };
        let quantity = qty
            .parse::<u32>()
            .map_err(|e| format!("bad quantity '{qty}': {e}"))?;
        let unit_price =
            Decimal::from_str(price).map_err(|e| format!("bad price '{price}': {e}"))?;
        Ok(Self {
            name: name.to_string(),
            quantity,
            unit_price,
        })
    }
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Line items as NAME:QTY:PRICE (repeatable). Defaults to the demo
    /// order: pen:1:5.0 paper:5:10.0
    #[arg(long = "item")]
    items: Vec<ItemSpec>,

    /// Payment method to settle the order with
    #[arg(long, value_enum, default_value = "debit")]
    method: Method,

    /// Card security code for debit/credit payments
    #[arg(long, default_value = "345678")]
    security_code: String,

    /// Account email for PayPal payments
    #[arg(long, default_value = "hi@world.com")]
    email: String,

    /// Authorization challenge to run before paying
    #[arg(long, value_enum, default_value = "robot")]
    auth: AuthKind,

    /// Code submitted to the SMS authorizer
    #[arg(long, default_value = "1234")]
    sms_code: String,

    /// Skip the authorization challenge (demonstrates the failure path)
    #[arg(long)]
    skip_verify: bool,

    /// Print the receipt as JSON instead of prose
    #[arg(long)]
    json: bool,
}

fn make_authorizer(kind: AuthKind, sms_code: &str, skip_verify: bool) -> SharedAuthorizer {
    match kind {
        AuthKind::Robot => {
            let auth = Arc::new(NotARobot::new());
            if !skip_verify {
                println!("not a robot...");
                auth.confirm_human();
            }
            auth
        }
        AuthKind::Sms => {
            let auth = Arc::new(SmsAuthorizer::new());
            if !skip_verify {
                println!("authorization code: {sms_code}");
                auth.verify_code(sms_code);
            }
            auth
        }
    }
}

fn default_items() -> Vec<ItemSpec> {
    vec![
        ItemSpec {
            name: "pen".to_string(),
            quantity: 1,
            unit_price: dec!(5.0),
        },
        ItemSpec {
            name: "paper".to_string(),
            quantity: 5,
            unit_price: dec!(10.0),
        },
    ]
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let items = if cli.items.is_empty() {
        default_items()
    } else {
        cli.items
    };

    let mut order = Order::new();
    for item in items {
        order
            .add_item(item.name, item.quantity, item.unit_price)
            .into_diagnostic()?;
    }

    println!("total price: {}", order.total_price());

    let processor: PaymentProcessorBox = match cli.method {
        Method::Debit => {
            let authorizer = make_authorizer(cli.auth, &cli.sms_code, cli.skip_verify);
            Box::new(DebitProcessor::new(cli.security_code, authorizer))
        }
        Method::Credit => Box::new(CreditProcessor::new(cli.security_code)),
        Method::Paypal => {
            let authorizer = make_authorizer(cli.auth, &cli.sms_code, cli.skip_verify);
            Box::new(PaypalProcessor::new(cli.email, authorizer))
        }
    };

    let checkout = Checkout::new(processor);
    let receipt = checkout.settle(&mut order).into_diagnostic()?;

    if cli.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&receipt).into_diagnostic()?
        );
    } else {
        println!("Order has been paid in {}", receipt.method);
    }

    Ok(())
}
