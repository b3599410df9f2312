//! Model types for forecast requests and outcomes

mod arima_order;
mod forecast;
mod order_source;

pub use arima_order::ArimaOrder;
pub use forecast::{FallbackReason, Forecast};
pub use order_source::OrderSource;
