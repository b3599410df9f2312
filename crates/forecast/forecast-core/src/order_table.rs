//! Fixed mapping from model names to ARIMA orders
//!
//! Built once at startup and shared read-only between request tasks.

use std::collections::HashMap;

use forecast_spi::ArimaOrder;

/// Orders for the named health-statistics models
const BUILTIN_ORDERS: [(&str, ArimaOrder); 5] = [
    ("heart_disease", ArimaOrder::new(0, 2, 0)),
    ("stroke", ArimaOrder::new(1, 0, 1)),
    ("diabetes", ArimaOrder::new(1, 0, 1)),
    ("suicide", ArimaOrder::new(0, 1, 0)),
    ("cancer", ArimaOrder::new(0, 1, 1)),
];

/// Immutable lookup from model name to ARIMA order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelOrderTable {
    orders: HashMap<String, ArimaOrder>,
}

impl ModelOrderTable {
    /// Table with the built-in model names
    pub fn builtin() -> Self {
        Self::from_entries(BUILTIN_ORDERS)
    }

    /// Table from arbitrary `(name, order)` pairs; later duplicates win
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, ArimaOrder)>,
        S: Into<String>,
    {
        Self {
            orders: entries
                .into_iter()
                .map(|(name, order)| (name.into(), order))
                .collect(),
        }
    }

    /// Order for `name`, matched exactly (case-sensitive)
    pub fn get(&self, name: &str) -> Option<ArimaOrder> {
        self.orders.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.orders.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Model names in alphabetical order
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.orders.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl Default for ModelOrderTable {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_orders() {
        let table = ModelOrderTable::builtin();

        assert_eq!(table.len(), 5);
        assert_eq!(table.get("heart_disease"), Some(ArimaOrder::new(0, 2, 0)));
        assert_eq!(table.get("stroke"), Some(ArimaOrder::new(1, 0, 1)));
        assert_eq!(table.get("diabetes"), Some(ArimaOrder::new(1, 0, 1)));
        assert_eq!(table.get("suicide"), Some(ArimaOrder::new(0, 1, 0)));
        assert_eq!(table.get("cancer"), Some(ArimaOrder::new(0, 1, 1)));
    }

    #[test]
    fn test_unknown_and_case_mismatch() {
        let table = ModelOrderTable::default();
        assert_eq!(table.get("influenza"), None);
        assert_eq!(table.get("Stroke"), None);
        assert_eq!(table.get(""), None);
        assert!(!table.contains("Stroke"));
    }

    #[test]
    fn test_names_sorted() {
        assert_eq!(
            ModelOrderTable::builtin().names(),
            vec!["cancer", "diabetes", "heart_disease", "stroke", "suicide"]
        );
    }

    #[test]
    fn test_custom_entries() {
        let table = ModelOrderTable::from_entries([
            ("sales".to_string(), ArimaOrder::new(2, 1, 0)),
            ("sales".to_string(), ArimaOrder::new(1, 1, 0)),
        ]);
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("sales"), Some(ArimaOrder::new(1, 1, 0)));

        let empty = ModelOrderTable::from_entries(Vec::<(String, ArimaOrder)>::new());
        assert!(empty.is_empty());
    }
}
