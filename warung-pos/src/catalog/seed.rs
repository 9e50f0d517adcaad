//! Starter menu for a fresh install
//!
//! Loaded when the menu slot is absent or unreadable, so the stall always
//! opens with something to sell.

use rust_decimal::Decimal;
use shared::models::{Category, MenuItem};

fn item(
    id: &str,
    name: &str,
    description: &str,
    price_cents: i64,
    image: &str,
    category: Category,
    is_popular: bool,
) -> MenuItem {
    MenuItem {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        price: Decimal::new(price_cents, 2),
        image: image.to_string(),
        category,
        is_popular,
        is_available: true,
    }
}

/// The five launch dishes
pub fn starter_menu() -> Vec<MenuItem> {
    vec![
        item(
            "1",
            "Nasi Cumi Hitam Original",
            "Our signature rice dish with savory squid cooked in its own premium black ink sauce. Deep savory flavor.",
            300,
            "https://images.unsplash.com/photo-1602184629266-8c74e4e01b88?q=80&w=800&auto=format&fit=crop",
            Category::Main,
            true,
        ),
        item(
            "2",
            "Nasi Cumi + Telor Ceplok",
            "The signature black squid rice served with a perfectly fried sunny-side-up egg (Telor Ceplok).",
            350,
            "https://images.unsplash.com/photo-1564834724105-918b73d1b9e0?q=80&w=800&auto=format&fit=crop",
            Category::Main,
            true,
        ),
        item(
            "3",
            "Nasi Cumi Royal (Komplit)",
            "The ultimate portion. Squid, egg, crispy tofu, and sambal bawang.",
            450,
            "https://images.unsplash.com/photo-1546069901-ba9599a7e63c?q=80&w=800&auto=format&fit=crop",
            Category::Main,
            false,
        ),
        item(
            "4",
            "Es Jeruk Pontianak",
            "Sweet and tangy freshly squeezed orange juice.",
            100,
            "https://images.unsplash.com/photo-1613478223719-2ab802602423?q=80&w=800&auto=format&fit=crop",
            Category::Drink,
            false,
        ),
        item(
            "5",
            "Peyek Kacang",
            "Crispy peanut crackers to add crunch to your meal.",
            50,
            "https://images.unsplash.com/photo-1626114260722-f1a5c452143f?q=80&w=800&auto=format&fit=crop",
            Category::Extra,
            false,
        ),
    ]
}
