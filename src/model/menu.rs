/// A purchasable item on the menu.
///
/// Catalog entries are immutable. A confirmed choice becomes an
/// [`OrderLine`](crate::model::OrderLine) carrying its own quantity.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem {
    pub name: String,
    pub unit_price: f64,
}

impl MenuItem {
    pub fn new(name: impl Into<String>, unit_price: f64) -> Self {
        Self {
            name: name.into(),
            unit_price,
        }
    }
}

/// The fixed list of items offered to the customer.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuCatalog {
    items: Vec<MenuItem>,
}

impl MenuCatalog {
    pub fn new(items: Vec<MenuItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Looks up an item by its 1-based menu number.
    pub fn select(&self, number: usize) -> Option<&MenuItem> {
        number.checked_sub(1).and_then(|index| self.items.get(index))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.items.iter().any(|item| item.name == name)
    }
}

impl Default for MenuCatalog {
    fn default() -> Self {
        Self::new(vec![
            MenuItem::new("Nasi Goreng", 20.0),
            MenuItem::new("Mie Kuah", 25.0),
            MenuItem::new("Mie Goreng", 25.0),
        ])
    }
}
