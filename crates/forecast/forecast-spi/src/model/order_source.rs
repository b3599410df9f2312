//! Where a request's model order comes from

use super::ArimaOrder;

/// How a forecast request selects its model order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderSource {
    /// Domain label looked up in the model order table
    Named(String),
    /// Order supplied directly by the caller
    Explicit(ArimaOrder),
}

impl OrderSource {
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    pub fn explicit(order: impl Into<ArimaOrder>) -> Self {
        Self::Explicit(order.into())
    }

    /// The model name, if the order is looked up by name
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Named(name) => Some(name),
            Self::Explicit(_) => None,
        }
    }
}

impl Default for OrderSource {
    fn default() -> Self {
        Self::Explicit(ArimaOrder::default())
    }
}

impl From<ArimaOrder> for OrderSource {
    fn from(order: ArimaOrder) -> Self {
        Self::Explicit(order)
    }
}
