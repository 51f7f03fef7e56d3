//! The storefront's fixed menu.

use crate::api::ItemKind;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MenuItem {
    pub id: u32,
    pub kind: ItemKind,
    pub name: &'static str,
    pub description: &'static str,
    /// Rupees
    pub price: f64,
    pub emoji: &'static str,
}

impl MenuItem {
    pub fn price_label(&self) -> String {
        format!("₹{:.2}", self.price)
    }
}

pub const ROLLS: &[MenuItem] = &[
    MenuItem {
        id: 1,
        kind: ItemKind::Roll,
        name: "Classic Chicken Roll",
        description: "Tender grilled chicken breast with crisp lettuce, juicy tomatoes, and our signature creamy sauce wrapped in a warm tortilla",
        price: 1078.17,
        emoji: "🌯",
    },
    MenuItem {
        id: 2,
        kind: ItemKind::Roll,
        name: "Spicy Beef Delight",
        description: "Succulent marinated beef with roasted peppers, melted cheese, and spicy chipotle sauce",
        price: 1244.17,
        emoji: "🌶️",
    },
    MenuItem {
        id: 3,
        kind: ItemKind::Roll,
        name: "Mediterranean Veggie",
        description: "Fresh vegetables with creamy hummus, feta cheese, and Mediterranean herbs",
        price: 995.17,
        emoji: "🥙",
    },
    MenuItem {
        id: 4,
        kind: ItemKind::Roll,
        name: "BBQ Pulled Pork",
        description: "Slow-cooked BBQ pulled pork with coleslaw and tangy barbecue sauce",
        price: 1285.67,
        emoji: "🍖",
    },
    MenuItem {
        id: 5,
        kind: ItemKind::Roll,
        name: "Crispy Fish Fusion",
        description: "Golden crispy fish fillet with fresh slaw and zesty tartar sauce",
        price: 1161.17,
        emoji: "🐟",
    },
    MenuItem {
        id: 6,
        kind: ItemKind::Roll,
        name: "Buffalo Chicken Wrap",
        description: "Spicy buffalo chicken with ranch dressing, celery, and blue cheese crumbles",
        price: 1119.67,
        emoji: "🔥",
    },
    MenuItem {
        id: 7,
        kind: ItemKind::Roll,
        name: "Tandoori Paneer Delight",
        description: "Smoky tandoori paneer with mint chutney, pickled onions, and fresh coriander",
        price: 1324.17,
        emoji: "🧀",
    },
];

pub const SIDES: &[MenuItem] = &[
    MenuItem {
        id: 101,
        kind: ItemKind::Side,
        name: "Crispy Sweet Potato Fries",
        description: "Golden sweet potato fries with a pinch of sea salt",
        price: 497.17,
        emoji: "🍟",
    },
    MenuItem {
        id: 102,
        kind: ItemKind::Side,
        name: "Loaded Onion Rings",
        description: "Beer-battered onion rings with smoky dip",
        price: 538.67,
        emoji: "🧅",
    },
    MenuItem {
        id: 103,
        kind: ItemKind::Side,
        name: "Nachos Supreme",
        description: "Tortilla chips with cheese, jalapeños and salsa",
        price: 746.17,
        emoji: "🧀",
    },
    MenuItem {
        id: 104,
        kind: ItemKind::Side,
        name: "Garden Fresh Salad",
        description: "Seasonal greens with a light vinaigrette",
        price: 621.67,
        emoji: "🥗",
    },
];

pub const DRINKS: &[MenuItem] = &[
    MenuItem {
        id: 201,
        kind: ItemKind::Drink,
        name: "Fresh Lemonade",
        description: "Squeezed to order",
        price: 331.17,
        emoji: "🍋",
    },
    MenuItem {
        id: 202,
        kind: ItemKind::Drink,
        name: "Iced Green Tea",
        description: "Lightly sweetened",
        price: 248.17,
        emoji: "🍵",
    },
    MenuItem {
        id: 203,
        kind: ItemKind::Drink,
        name: "Tropical Smoothie",
        description: "Mango, pineapple and passion fruit",
        price: 580.17,
        emoji: "🥭",
    },
    MenuItem {
        id: 204,
        kind: ItemKind::Drink,
        name: "Premium Coffee",
        description: "Single-origin pour over",
        price: 206.67,
        emoji: "☕",
    },
    MenuItem {
        id: 205,
        kind: ItemKind::Drink,
        name: "Chai Latte",
        description: "Spiced and steamed",
        price: 331.17,
        emoji: "🫖",
    },
];

/// Rolls shown on the home page
pub const FEATURED_ROLL_IDS: &[u32] = &[1, 2, 7];

pub fn featured_rolls() -> impl Iterator<Item = &'static MenuItem> {
    ROLLS
        .iter()
        .filter(|item| FEATURED_ROLL_IDS.contains(&item.id))
}

pub fn find_roll(id: u32) -> Option<&'static MenuItem> {
    ROLLS.iter().find(|item| item.id == id)
}
