//! Menu Catalog
//!
//! Read-only lookup of menu items and categories. The order core only
//! consumes `menu_item(id)`: prices are snapshotted into order lines at
//! build time, so later catalog edits never touch existing orders.

use std::collections::HashMap;

use rust_decimal::Decimal;
use shared::models::{Category, MenuItem};
use shared::util::now_millis;

/// Read-only menu catalog, seeded once at startup
pub struct Catalog {
    items: HashMap<String, MenuItem>,
    /// Display order for listings
    item_order: Vec<String>,
    categories: Vec<Category>,
}

impl Catalog {
    pub fn new(items: Vec<MenuItem>, categories: Vec<Category>) -> Self {
        let item_order = items.iter().map(|i| i.id.clone()).collect();
        let items = items.into_iter().map(|i| (i.id.clone(), i)).collect();
        Self {
            items,
            item_order,
            categories,
        }
    }

    /// Look up a menu item by id.
    pub fn menu_item(&self, id: &str) -> Option<&MenuItem> {
        self.items.get(id)
    }

    /// All menu items in display order.
    pub fn list(&self) -> Vec<MenuItem> {
        self.item_order
            .iter()
            .filter_map(|id| self.items.get(id).cloned())
            .collect()
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The demo menu shipped with the POS: four categories, eight items.
    pub fn with_demo_menu() -> Self {
        let now = now_millis();

        let categories = vec![
            category("cat1", "Main Dishes", "Main course meals", now),
            category("cat2", "Appetizers", "Starters and small plates", now),
            category("cat3", "Desserts", "Sweet treats to finish your meal", now),
            category("cat4", "Beverages", "Drinks and refreshments", now),
        ];

        let items = vec![
            item(
                "item1",
                "Spaghetti Carbonara",
                Decimal::new(1499, 2),
                "Classic Italian pasta with eggs, cheese, and pancetta",
                "cat1",
                now,
            ),
            item(
                "item2",
                "Margherita Pizza",
                Decimal::new(1299, 2),
                "Traditional pizza with tomato, mozzarella, and basil",
                "cat1",
                now,
            ),
            item(
                "item3",
                "Caesar Salad",
                Decimal::new(999, 2),
                "Romaine lettuce with Caesar dressing and croutons",
                "cat2",
                now,
            ),
            item(
                "item4",
                "Garlic Bread",
                Decimal::new(499, 2),
                "Toasted bread with garlic butter",
                "cat2",
                now,
            ),
            item(
                "item5",
                "Tiramisu",
                Decimal::new(799, 2),
                "Italian dessert with coffee-soaked ladyfingers and mascarpone",
                "cat3",
                now,
            ),
            item(
                "item6",
                "Chocolate Cake",
                Decimal::new(699, 2),
                "Rich chocolate cake with ganache",
                "cat3",
                now,
            ),
            item(
                "item7",
                "Iced Tea",
                Decimal::new(299, 2),
                "Freshly brewed and chilled",
                "cat4",
                now,
            ),
            item(
                "item8",
                "Lemonade",
                Decimal::new(299, 2),
                "Freshly squeezed",
                "cat4",
                now,
            ),
        ];

        Self::new(items, categories)
    }
}

fn category(id: &str, name: &str, description: &str, now: i64) -> Category {
    Category {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        active: true,
        created_at: now,
    }
}

fn item(
    id: &str,
    name: &str,
    price: Decimal,
    description: &str,
    category_id: &str,
    now: i64,
) -> MenuItem {
    MenuItem {
        id: id.to_string(),
        name: name.to_string(),
        price,
        description: description.to_string(),
        image_url: "/placeholder.svg".to_string(),
        in_stock: true,
        category_id: category_id.to_string(),
        created_at: now,
        updated_at: now,
    }
}
