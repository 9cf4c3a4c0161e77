//! The product catalog.
//!
//! A single compiled-in fixture shared by every page. Lookups and category
//! filtering are linear scans; the catalog is small and never mutated.

use crate::types::{Price, Product, ProductId};

/// The synthetic category that matches every product.
pub const ALL_CATEGORIES: &str = "All";

/// Number of products shown in the home page "Featured" section.
const FEATURED_COUNT: usize = 3;

/// Read-only product catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Create a catalog from a list of products, preserving their order.
    #[must_use]
    pub const fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// All products in catalog order.
    #[must_use]
    pub fn all(&self) -> &[Product] {
        &self.products
    }

    /// The products featured on the home page (the first few in catalog order).
    #[must_use]
    pub fn featured(&self) -> &[Product] {
        self.products
            .get(..FEATURED_COUNT)
            .unwrap_or(&self.products)
    }

    /// Category filter choices: `"All"` followed by each distinct category in
    /// the order it first appears.
    #[must_use]
    pub fn categories(&self) -> Vec<&str> {
        let mut categories = vec![ALL_CATEGORIES];
        for product in &self.products {
            if !categories.contains(&product.category.as_str()) {
                categories.push(&product.category);
            }
        }
        categories
    }

    /// Products in `category`, or every product for `"All"`.
    ///
    /// Matching is exact. An unknown category yields an empty list.
    #[must_use]
    pub fn filter(&self, category: &str) -> Vec<&Product> {
        if category == ALL_CATEGORIES {
            return self.products.iter().collect();
        }
        self.products
            .iter()
            .filter(|product| product.category == category)
            .collect()
    }

    /// Look up a product by id.
    #[must_use]
    pub fn find(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    /// The built-in demo catalog.
    #[must_use]
    pub fn fixture() -> Self {
        Self::new(vec![
            product(
                1,
                "Premium Laptop",
                "Ultra-thin, lightweight laptop with exceptional performance for professionals on the go.",
                "Ultra-thin, lightweight laptop with exceptional performance for professionals on the go. \
                 Features the latest processor, ample memory, and fast storage for seamless multitasking. \
                 The stunning display delivers vivid colors and sharp details, while the premium aluminum \
                 build ensures durability without adding weight. Perfect for work, creative projects, or \
                 entertainment.",
                129_999,
                "https://images.unsplash.com/photo-1488590528505-98d2b5aba04b?auto=format&fit=crop&w=800&q=80",
                "Electronics",
            ),
            product(
                2,
                "Wireless Headphones",
                "Immersive sound experience with active noise cancellation and all-day battery life.",
                "Immersive sound experience with active noise cancellation and all-day battery life. \
                 These premium headphones deliver rich, detailed audio with deep bass and crystal-clear \
                 highs. The comfortable over-ear design with memory foam cushions ensures comfort even \
                 during extended listening sessions. Connect via Bluetooth or use the included auxiliary \
                 cable for a wired connection.",
                24_999,
                "https://images.unsplash.com/photo-1505740420928-5e560c06d30e?auto=format&fit=crop&w=800&q=80",
                "Audio",
            ),
            product(
                3,
                "Smart Watch",
                "Track your fitness, sleep, and notifications with this elegant and durable smartwatch.",
                "Track your fitness, sleep, and notifications with this elegant and durable smartwatch. \
                 Features include heart rate monitoring, GPS tracking, water resistance, and customizable \
                 watch faces. The bright display is easily visible even in direct sunlight, and the \
                 battery lasts up to 7 days between charges. Compatible with both iOS and Android devices.",
                19_999,
                "https://images.unsplash.com/photo-1523275335684-37898b6baf30?auto=format&fit=crop&w=800&q=80",
                "Wearables",
            ),
            product(
                4,
                "Professional Camera",
                "Capture stunning photos and videos with this high-resolution digital camera.",
                "Capture stunning photos and videos with this high-resolution digital camera. The large \
                 sensor delivers exceptional image quality even in low light conditions, while the fast \
                 autofocus system ensures you never miss a moment. Includes various shooting modes for \
                 both beginners and professionals, 4K video recording capabilities, and built-in Wi-Fi \
                 for easy sharing.",
                89_999,
                "https://images.unsplash.com/photo-1516035069371-29a1b244cc32?auto=format&fit=crop&w=800&q=80",
                "Photography",
            ),
            product(
                5,
                "Bluetooth Speaker",
                "Portable speaker with crystal clear sound and waterproof design for outdoor adventures.",
                "Portable speaker with crystal clear sound and waterproof design for outdoor adventures. \
                 The durable construction withstands drops, dust, and water immersion, making it perfect \
                 for the beach, pool, or camping. Despite its compact size, it delivers room-filling sound \
                 with surprising bass response. The rechargeable battery provides up to 12 hours of \
                 playback on a single charge.",
                12_999,
                "https://images.unsplash.com/photo-1589003457321-98e4dff89ff4?auto=format&fit=crop&w=800&q=80",
                "Audio",
            ),
            product(
                6,
                "Ergonomic Chair",
                "Premium office chair designed for comfort during long work sessions.",
                "Premium office chair designed for comfort during long work sessions. Features adjustable \
                 height, lumbar support, and breathable mesh fabric to keep you cool. The ergonomic design \
                 promotes proper posture and reduces strain on your back, neck, and shoulders. The sturdy \
                 base and smooth-rolling casters ensure stability and mobility on any floor surface.",
                34_999,
                "https://images.unsplash.com/photo-1580480055273-228ff5388ef8?auto=format&fit=crop&w=800&q=80",
                "Furniture",
            ),
            product(
                7,
                "Smart Home Hub",
                "Control all your smart devices from one central hub with voice commands.",
                "Control all your smart devices from one central hub with voice commands. Compatible with \
                 a wide range of smart home products including lights, thermostats, security systems, and \
                 entertainment devices. The intuitive interface makes it easy to create routines, set \
                 schedules, and manage your entire smart home ecosystem. The far-field microphones can \
                 hear your commands even from across the room.",
                17_999,
                "https://images.unsplash.com/photo-1518155317743-a8ff43ea6a5f?auto=format&fit=crop&w=800&q=80",
                "Smart Home",
            ),
            product(
                8,
                "Wireless Charger",
                "Fast charging pad compatible with all Qi-enabled devices.",
                "Fast charging pad compatible with all Qi-enabled devices. Simply place your compatible \
                 smartphone or earbuds on the charging surface, no need to fumble with cables. The sleek, \
                 minimalist design complements any desk or nightstand. The LED indicator provides charging \
                 status at a glance, and the non-slip surface keeps your device securely in place while \
                 charging.",
                4_999,
                "https://images.unsplash.com/photo-1586953208448-b95a79798f07?auto=format&fit=crop&w=800&q=80",
                "Electronics",
            ),
        ])
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::fixture()
    }
}

fn product(
    id: i32,
    name: &str,
    summary: &str,
    description: &str,
    cents: i64,
    image: &str,
    category: &str,
) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_string(),
        summary: summary.to_string(),
        description: description.to_string(),
        price: Price::from_cents(cents),
        image: image.to_string(),
        category: category.to_string(),
    }
}
