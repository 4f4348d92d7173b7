//! Products the store opens with.

use crate::types::{Price, Product, ProductId};

struct SeedProduct {
    id: &'static str,
    name: &'static str,
    price: i64,
    description: &'static str,
    category: &'static str,
    image: &'static str,
    stock: i64,
}

const SEED: [SeedProduct; 4] = [
    SeedProduct {
        id: "1",
        name: "Royal Sidr Honey",
        price: 120,
        description: "Premium organic honey sourced from the ancient Sidr trees of Yemen.",
        category: "Food",
        image: "https://images.unsplash.com/photo-1589135404455-873090875957?auto=format&fit=crop&q=80&w=800",
        stock: 25,
    },
    SeedProduct {
        id: "2",
        name: "Aromatic Oud Oil",
        price: 85,
        description: "Concentrated pure agarwood oil with deep, earthy, and sweet notes.",
        category: "Fragrance",
        image: "https://images.unsplash.com/photo-1615485290382-441e4d0c9cb5?auto=format&fit=crop&q=80&w=800",
        stock: 12,
    },
    SeedProduct {
        id: "3",
        name: "Saffron Threads Grade A+",
        price: 45,
        description: "The finest hand-picked saffron threads from the Khorasan region.",
        category: "Spices",
        image: "https://images.unsplash.com/photo-1599307734110-9469501a3577?auto=format&fit=crop&q=80&w=800",
        stock: 50,
    },
    SeedProduct {
        id: "4",
        name: "Handcrafted Incense Burner",
        price: 150,
        description: "Elegant ceramic burner with intricate traditional engravings.",
        category: "Decor",
        image: "https://images.unsplash.com/photo-1602143352558-bf6437650577?auto=format&fit=crop&q=80&w=800",
        stock: 8,
    },
];

/// The initial catalog, in display order.
#[must_use]
pub fn seed_products() -> Vec<Product> {
    SEED.iter()
        .map(|seed| Product {
            id: ProductId::from(seed.id),
            name: seed.name.to_string(),
            price: Price::from_whole(seed.price),
            description: seed.description.to_string(),
            category: seed.category.to_string(),
            image: seed.image.to_string(),
            stock: seed.stock,
        })
        .collect()
}
