use crate::domain::menu::{MenuItem, Price};
use rust_decimal::Decimal;

/// One selected dish, with name and price captured at the moment the item
/// entered the cart. Later menu edits do not reach lines already held.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub item_id: String,
    pub name: String,
    pub price: Price,
    pub quantity: u32,
}

impl CartLine {
    /// Exact line subtotal, `price × quantity`.
    pub fn subtotal(&self) -> Decimal {
        self.price.value() * Decimal::from(self.quantity)
    }
}

/// The session-scoped selection pending submission.
///
/// Lines keep insertion order for display and hold at most one entry per
/// item id. Never persisted; cleared on successful submission or reset.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one unit of `item`, merging into the existing line if present.
    pub fn add(&mut self, item: &MenuItem) {
        if let Some(line) = self.lines.iter_mut().find(|line| line.item_id == item.id) {
            line.quantity += 1;
        } else {
            self.lines.push(CartLine {
                item_id: item.id.clone(),
                name: item.name.clone(),
                price: item.price,
                quantity: 1,
            });
        }
    }

    /// Applies `delta` to the quantity of the line for `id`. A resulting
    /// quantity of zero or below removes the line entirely. Unknown ids
    /// are ignored.
    pub fn change_quantity(&mut self, id: &str, delta: i32) {
        if let Some(pos) = self.lines.iter().position(|line| line.item_id == id) {
            let quantity = i64::from(self.lines[pos].quantity).saturating_add(i64::from(delta));
            if quantity <= 0 {
                self.lines.remove(pos);
            } else {
                self.lines[pos].quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
            }
        }
    }

    /// Drops the line for `id` if present.
    pub fn remove(&mut self, id: &str) {
        self.lines.retain(|line| line.item_id != id);
    }

    /// Exact sum of `price × quantity` over all lines. Zero when empty.
    pub fn total(&self) -> Decimal {
        self.lines.iter().map(CartLine::subtotal).sum()
    }

    /// Total number of units across all lines (the cart badge counter).
    pub fn unit_count(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }
}
