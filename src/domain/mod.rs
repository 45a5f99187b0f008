pub mod order;
pub mod ports;
