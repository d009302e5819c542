use std::fmt;

use crate::input::{Field, InputError};
use crate::model::MenuItem;

/// One confirmed (item, quantity) pair.
///
/// Quantity is always positive; [`OrderLine::new`] refuses zero.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderLine {
    pub name: String,
    pub unit_price: f64,
    pub quantity: u32,
}

impl OrderLine {
    pub fn new(item: &MenuItem, quantity: u32) -> Result<Self, InputError> {
        if quantity == 0 {
            return Err(InputError::Range(Field::Quantity));
        }
        Ok(Self {
            name: item.name.clone(),
            unit_price: item.unit_price,
            quantity,
        })
    }

    /// `unit_price × quantity`, unrounded.
    pub fn line_total(&self) -> f64 {
        self.unit_price * f64::from(self.quantity)
    }
}

impl fmt::Display for OrderLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{} {} {}}}", self.name, self.unit_price, self.quantity)
    }
}

/// Append-only sequence of order lines.
///
/// Only the order list actor holds a mutable one; everyone else sees snapshots.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderList {
    lines: Vec<OrderLine>,
}

impl OrderList {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, line: OrderLine) -> usize {
        self.lines.push(line);
        self.lines.len()
    }

    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, OrderLine> {
        self.lines.iter()
    }
}

impl From<Vec<OrderLine>> for OrderList {
    fn from(lines: Vec<OrderLine>) -> Self {
        Self { lines }
    }
}

impl<'a> IntoIterator for &'a OrderList {
    type Item = &'a OrderLine;
    type IntoIter = std::slice::Iter<'a, OrderLine>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}

// Compact form used inside the encoded summary: `[{Nasi Goreng 20 3} {Mie Kuah 25 1}]`.
impl fmt::Display for OrderList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", line)?;
        }
        f.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_quantity_rejected() {
        let item = MenuItem::new("Mie Kuah", 25.0);
        assert_eq!(
            OrderLine::new(&item, 0),
            Err(InputError::Range(Field::Quantity))
        );
    }

    #[test]
    fn test_line_total() {
        let item = MenuItem::new("Nasi Goreng", 20.0);
        let line = OrderLine::new(&item, 3).unwrap();
        assert_eq!(line.line_total(), 60.0);
    }

    #[test]
    fn test_display_compact_form() {
        let list = OrderList::from(vec![
            OrderLine::new(&MenuItem::new("Nasi Goreng", 20.0), 3).unwrap(),
            OrderLine::new(&MenuItem::new("Es Jeruk", 7.5), 1).unwrap(),
        ]);
        assert_eq!(list.to_string(), "[{Nasi Goreng 20 3} {Es Jeruk 7.5 1}]");
        assert_eq!(OrderList::new().to_string(), "[]");
    }
}
