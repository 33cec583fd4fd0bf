//! The storefront's built-in catalog.

use rust_decimal::Decimal;

use super::public_types::{MenuItem, Restaurant};
use crate::common::errors::DomainError;
use crate::common::simple_types::{LineItemId, UnitPrice};

#[allow(clippy::too_many_arguments)]
fn restaurant(
    id: &str,
    name: &str,
    cuisine_types: &[&str],
    rating: f32,
    delivery_time: &str,
    promotional_tag: Option<&str>,
    distance: &str,
    price_range: &str,
) -> Restaurant {
    Restaurant {
        id: id.to_string(),
        name: name.to_string(),
        cuisine_types: cuisine_types.iter().map(|c| c.to_string()).collect(),
        rating,
        delivery_time: delivery_time.to_string(),
        promotional_tag: promotional_tag.map(str::to_string),
        distance: Some(distance.to_string()),
        price_range: Some(price_range.to_string()),
    }
}

pub fn demo_restaurants() -> Vec<Restaurant> {
    vec![
        restaurant("1", "Pizza Heaven", &["Italian", "Pizza"], 4.5, "25-35 min", Some("15% Off"), "1.2 km", "$$"),
        restaurant("2", "Burger Queen", &["American", "Burgers"], 4.2, "20-30 min", None, "0.5 km", "$$"),
        restaurant("3", "Sushi World", &["Japanese", "Sushi"], 4.8, "30-40 min", Some("Free Edamame"), "2.5 km", "$$$"),
        restaurant("4", "Taco Fiesta", &["Mexican", "Tacos"], 4.3, "20-25 min", None, "0.8 km", "$"),
        restaurant("5", "Curry House", &["Indian", "Curry"], 4.6, "35-45 min", None, "3.1 km", "$$"),
        restaurant("6", "Pasta Palace", &["Italian", "Pasta"], 4.0, "25-35 min", Some("Save $5"), "1.5 km", "$$"),
        restaurant("7", "Vegan Delight", &["Vegan", "Healthy"], 4.9, "30-40 min", None, "2.0 km", "$$$"),
        restaurant("8", "Steakhouse Supreme", &["Steak", "American"], 4.7, "40-50 min", Some("Dinner Special"), "4.0 km", "$$$$"),
        restaurant("9", "Breakfast Nook", &["Breakfast", "Cafe"], 4.4, "15-25 min", None, "0.3 km", "$"),
        restaurant("10", "Seafood Shack", &["Seafood", "Grill"], 4.1, "30-40 min", None, "2.8 km", "$$$"),
    ]
}

pub fn demo_addresses() -> Vec<String> {
    [
        "123 Main St, Anytown, USA",
        "456 Oak Ave, Anytown, USA",
        "789 Pine Ln, Anytown, USA",
        "101 Elm Rd, Otherville, USA",
        "202 Birch Dr, Otherville, USA",
        "303 Maple St, Anytown, USA",
        "404 Cedar Ave, YetAnotherCity, USA",
    ]
    .into_iter()
    .map(str::to_string)
    .collect()
}

pub fn demo_menu() -> Result<Vec<MenuItem>, DomainError> {
    [
        ("s1", "Artisan Bread Basket", "Selection of fresh artisan breads with butter and olive oil.", 800, "Starters"),
        ("s2", "Seared Scallops", "With parsnip puree and crispy pancetta.", 1800, "Starters"),
        ("m1", "Filet Mignon", "Grilled to perfection, served with potato gratin and asparagus.", 3500, "Main Courses"),
        ("m2", "Pan-Seared Salmon", "With roasted vegetables and a dill-lemon sauce.", 2800, "Main Courses"),
        ("m3", "Mushroom Risotto", "Creamy risotto with wild mushrooms and truffle oil.", 2200, "Main Courses"),
        ("d1", "Chocolate Lava Cake", "Warm chocolate cake with a molten center, served with vanilla ice cream.", 1200, "Desserts"),
        ("dr1", "Sparkling Water", "Bottle of sparkling mineral water.", 400, "Drinks"),
    ]
    .into_iter()
    .map(|(id, name, description, cents, category)| {
        Ok(MenuItem {
            id: LineItemId::new(id)?,
            name: name.to_string(),
            description: description.to_string(),
            price: UnitPrice::new(Decimal::new(cents, 2))?,
            category: category.to_string(),
        })
    })
    .collect()
}
