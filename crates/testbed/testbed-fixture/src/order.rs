//! Fixed table truncation order.

use testbed_core::constants::KANBAN_TRUNCATION_ORDER;

/// Tables to clear before each test, deepest foreign-key dependent first.
///
/// The order is a fixed contract, never derived from the schema at runtime.
/// Deleting a parent before its children fails on a foreign key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruncationOrder {
    tables: Vec<String>,
}

impl TruncationOrder {
    pub fn new<I, S>(tables: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tables: tables.into_iter().map(Into::into).collect(),
        }
    }

    /// `card → column → board → user`
    pub fn kanban() -> Self {
        Self::new(KANBAN_TRUNCATION_ORDER)
    }

    pub fn tables(&self) -> &[String] {
        &self.tables
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tables.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

impl Default for TruncationOrder {
    fn default() -> Self {
        Self::kanban()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kanban_order_is_card_column_board_user() {
        let binding = TruncationOrder::default();
        let order: Vec<&str> = binding.iter().collect();
        assert_eq!(order, ["card", "column", "board", "user"]);
    }
}
