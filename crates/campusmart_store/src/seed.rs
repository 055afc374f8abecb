//! Demo catalog fixture.
//!
//! Fills an empty store with a demo seller and a small cross-category
//! catalog. Handy for demos, benches, and UI work; none of it is part of the
//! durable contract.

use campusmart_foundation::UserId;

use crate::product::NewProduct;
use crate::store::Store;
use crate::user::NewUser;

struct DemoListing {
    name: &'static str,
    description: &'static str,
    price: f64,
    category: &'static str,
    condition: &'static str,
    main_image: &'static str,
    rating: f64,
    review_count: i32,
    featured: bool,
    is_new: bool,
    old_price: Option<f64>,
    tags: &'static [&'static str],
    rental: Option<(f64, i32, i32)>,
}

const DEMO_LISTINGS: &[DemoListing] = &[
    DemoListing {
        name: "Smart Watch Pro",
        description: "Advanced smartwatch with heart rate monitoring, GPS, and 5-day battery life.",
        price: 129.99,
        category: "Electronics",
        condition: "new",
        main_image: "/img/smart-watch-pro.jpg",
        rating: 4.5,
        review_count: 24,
        featured: true,
        is_new: true,
        old_price: None,
        tags: &[],
        rental: None,
    },
    DemoListing {
        name: "Ultra Thin Laptop",
        description: "Powerful laptop with 16GB RAM, 512GB SSD, and stunning 4K display.",
        price: 999.99,
        category: "Electronics",
        condition: "new",
        main_image: "/img/ultra-thin-laptop.jpg",
        rating: 5.0,
        review_count: 42,
        featured: true,
        is_new: false,
        old_price: None,
        tags: &[],
        rental: Some((99.99, 1, 30)),
    },
    DemoListing {
        name: "Wireless Headphones",
        description: "Premium noise-cancelling headphones with 30-hour battery life.",
        price: 79.99,
        category: "Electronics",
        condition: "used",
        main_image: "/img/wireless-headphones.jpg",
        rating: 4.0,
        review_count: 18,
        featured: false,
        is_new: false,
        old_price: Some(99.99),
        tags: &["Summer Sale 2025"],
        rental: None,
    },
    DemoListing {
        name: "Sport Sneakers",
        description: "Lightweight, breathable sneakers perfect for running and everyday use.",
        price: 89.99,
        category: "Clothing",
        condition: "used",
        main_image: "/img/sport-sneakers.jpg",
        rating: 3.5,
        review_count: 36,
        featured: false,
        is_new: false,
        old_price: None,
        tags: &[],
        rental: None,
    },
    DemoListing {
        name: "Digital Camera 4K",
        description: "Professional-grade digital camera with 4K video recording and 24MP photos.",
        price: 449.99,
        category: "Electronics",
        condition: "used",
        main_image: "/img/digital-camera-4k.jpg",
        rating: 5.0,
        review_count: 59,
        featured: true,
        is_new: false,
        old_price: None,
        tags: &[],
        rental: None,
    },
    DemoListing {
        name: "Bamboo Watch",
        description: "Eco-friendly bamboo watch with Japanese movement and leather strap.",
        price: 69.99,
        category: "Accessories",
        condition: "used",
        main_image: "/img/bamboo-watch.jpg",
        rating: 4.5,
        review_count: 27,
        featured: false,
        is_new: false,
        old_price: None,
        tags: &[],
        rental: None,
    },
    DemoListing {
        name: "Apple Watch Series 6",
        description: "Smartwatch with fitness tracking, heart rate monitor, and GPS.",
        price: 39.99,
        category: "Electronics",
        condition: "used",
        main_image: "/img/apple-watch-series-6.jpg",
        rating: 4.0,
        review_count: 45,
        featured: false,
        is_new: false,
        old_price: Some(59.99),
        tags: &[],
        rental: None,
    },
    DemoListing {
        name: "Wireless Mouse",
        description: "Ergonomic wireless mouse with long battery life and responsive tracking.",
        price: 24.99,
        category: "Electronics",
        condition: "used",
        main_image: "/img/wireless-mouse.jpg",
        rating: 4.0,
        review_count: 32,
        featured: false,
        is_new: false,
        old_price: None,
        tags: &[],
        rental: None,
    },
    DemoListing {
        name: "Designer Backpack",
        description: "Stylish and functional backpack with laptop compartment and water bottle pocket.",
        price: 59.99,
        category: "Accessories",
        condition: "used",
        main_image: "/img/designer-backpack.jpg",
        rating: 4.5,
        review_count: 38,
        featured: true,
        is_new: true,
        old_price: None,
        tags: &[],
        rental: None,
    },
    DemoListing {
        name: "Coffee Maker",
        description: "Programmable coffee maker with thermal carafe and auto shut-off.",
        price: 79.99,
        category: "Home & Kitchen",
        condition: "used",
        main_image: "/img/coffee-maker.jpg",
        rating: 4.0,
        review_count: 21,
        featured: false,
        is_new: false,
        old_price: None,
        tags: &[],
        rental: None,
    },
    DemoListing {
        name: "Fitness Tracker",
        description: "Water-resistant fitness tracker with heart rate monitor and sleep tracking.",
        price: 49.99,
        category: "Electronics",
        condition: "used",
        main_image: "/img/fitness-tracker.jpg",
        rating: 4.0,
        review_count: 52,
        featured: false,
        is_new: true,
        old_price: None,
        tags: &[],
        rental: None,
    },
    DemoListing {
        name: "Portable Bluetooth Speaker",
        description: "Waterproof Bluetooth speaker with 12-hour playtime and deep bass.",
        price: 34.99,
        category: "Electronics",
        condition: "used",
        main_image: "/img/bluetooth-speaker.jpg",
        rating: 4.5,
        review_count: 63,
        featured: false,
        is_new: false,
        old_price: Some(49.99),
        tags: &["Summer Sale 2025"],
        rental: None,
    },
    DemoListing {
        name: "Calculus Textbook",
        description: "Single-variable calculus textbook, annotated but intact.",
        price: 19.99,
        category: "Books",
        condition: "used",
        main_image: "/img/calculus-textbook.jpg",
        rating: 4.5,
        review_count: 63,
        featured: false,
        is_new: false,
        old_price: Some(49.99),
        tags: &[],
        rental: None,
    },
    DemoListing {
        name: "Red Lipstick",
        description: "Classic matte red lipstick, unopened.",
        price: 14.99,
        category: "Beauty",
        condition: "new",
        main_image: "/img/red-lipstick.jpg",
        rating: 4.5,
        review_count: 63,
        featured: false,
        is_new: false,
        old_price: Some(49.99),
        tags: &[],
        rental: None,
    },
    DemoListing {
        name: "Die-cast Sports Car",
        description: "1:64 scale die-cast model car, mint in box.",
        price: 24.99,
        category: "Toys",
        condition: "used",
        main_image: "/img/diecast-car.jpg",
        rating: 4.5,
        review_count: 63,
        featured: false,
        is_new: false,
        old_price: Some(49.99),
        tags: &[],
        rental: None,
    },
    DemoListing {
        name: "Size 5 Football",
        description: "Match-quality football, barely used.",
        price: 34.99,
        category: "Sports",
        condition: "used",
        main_image: "/img/football.jpg",
        rating: 3.5,
        review_count: 634,
        featured: false,
        is_new: false,
        old_price: None,
        tags: &[],
        rental: None,
    },
];

/// Seeds the demo seller and catalog, returning the seller's id.
///
/// The seller account ("admin") is only created when no user carries that
/// username yet, so seeding an already-seeded store doubles the catalog but
/// never the accounts.
pub fn seed_demo_catalog(store: &mut Store) -> UserId {
    let seller_id = match store.user_by_username("admin") {
        Some(user) => user.id,
        None => store
            .create_user(NewUser {
                username: "admin".to_owned(),
                password: "admin123".to_owned(),
                email: "admin@campus.edu".to_owned(),
                name: "Admin User".to_owned(),
                ..NewUser::default()
            })
            .id,
    };

    for demo in DEMO_LISTINGS {
        let mut new = NewProduct::new(
            seller_id,
            demo.name,
            demo.description,
            demo.price,
            demo.category,
        );
        new.condition = Some(demo.condition.to_owned());
        new.main_image = demo.main_image.to_owned();
        new.tags = demo.tags.iter().map(|tag| (*tag).to_owned()).collect();
        new.rating = Some(demo.rating);
        new.review_count = Some(demo.review_count);
        new.featured = Some(demo.featured);
        new.is_new = Some(demo.is_new);
        new.on_sale = Some(demo.old_price.is_some());
        new.old_price = demo.old_price;
        if let Some((price_per_day, min_days, max_days)) = demo.rental {
            new.available_for_rent = Some(true);
            new.rental_price = Some(price_per_day);
            new.rental_min_days = Some(min_days);
            new.rental_max_days = Some(max_days);
        }
        store.create_product(new);
    }

    tracing::info!(seller = %seller_id, listings = DEMO_LISTINGS.len(), "seeded demo catalog");
    seller_id
}
