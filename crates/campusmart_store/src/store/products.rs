//! Product operations: listing lifecycle, catalog queries, availability.

use campusmart_foundation::{ProductId, UserId};
use chrono::Utc;

use crate::product::{
    NewProduct, Product, ProductFilter, ProductPatch, ProductWithSeller, SortKey,
};
use crate::store::Store;

impl Store {
    /// Looks up a product by id.
    #[must_use]
    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.products.get(&id)
    }

    /// Looks up a product joined with its seller. `None` when either side
    /// is missing.
    #[must_use]
    pub fn product_with_seller(&self, id: ProductId) -> Option<ProductWithSeller> {
        let product = self.products.get(&id)?;
        let seller = self.users.get(&product.seller_id)?;
        Some(ProductWithSeller {
            product: product.clone(),
            seller: seller.clone(),
        })
    }

    /// Runs a catalog query: filter, then sort, then paginate, always in
    /// that order. Without a sort key the results come back in id order.
    #[must_use]
    pub fn products(&self, filter: &ProductFilter) -> Vec<Product> {
        let mut matches: Vec<Product> = self
            .products
            .values()
            .filter(|product| Self::matches_filter(product, filter))
            .cloned()
            .collect();

        if let Some(sort) = filter.sort {
            match sort {
                SortKey::PriceAsc => matches.sort_by(|a, b| a.price.total_cmp(&b.price)),
                SortKey::PriceDesc => matches.sort_by(|a, b| b.price.total_cmp(&a.price)),
                SortKey::RatingDesc => matches.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
                SortKey::Newest => matches.sort_by(|a, b| b.id.cmp(&a.id)),
            }
        }

        if let Some(limit) = filter.limit {
            let offset = filter.offset.unwrap_or(0);
            matches.into_iter().skip(offset).take(limit).collect()
        } else {
            matches
        }
    }

    fn matches_filter(product: &Product, filter: &ProductFilter) -> bool {
        if let Some(category) = &filter.category {
            if !product.category.eq_ignore_ascii_case(category) {
                return false;
            }
        }
        if let Some(search) = &filter.search {
            let needle = search.to_lowercase();
            if !product.name.to_lowercase().contains(&needle)
                && !product.description.to_lowercase().contains(&needle)
            {
                return false;
            }
        }
        if let Some(min) = filter.min_price {
            if product.price < min {
                return false;
            }
        }
        if let Some(max) = filter.max_price {
            if product.price > max {
                return false;
            }
        }
        if let Some(featured) = filter.featured {
            if product.featured != featured {
                return false;
            }
        }
        true
    }

    /// All products in a category, matched case-insensitively.
    #[must_use]
    pub fn products_by_category(&self, category: &str) -> Vec<Product> {
        self.products
            .values()
            .filter(|product| product.category.eq_ignore_ascii_case(category))
            .cloned()
            .collect()
    }

    /// All listings by a seller, sold and unsold alike.
    #[must_use]
    pub fn products_by_seller(&self, seller_id: UserId) -> Vec<Product> {
        self.products
            .values()
            .filter(|product| product.seller_id == seller_id)
            .cloned()
            .collect()
    }

    /// Featured products, optionally capped at `limit`.
    #[must_use]
    pub fn featured_products(&self, limit: Option<usize>) -> Vec<Product> {
        let featured = self.products.values().filter(|p| p.featured).cloned();
        match limit {
            Some(limit) => featured.take(limit).collect(),
            None => featured.collect(),
        }
    }

    /// Case-insensitive substring search over names and descriptions.
    #[must_use]
    pub fn search_products(&self, query: &str) -> Vec<Product> {
        let needle = query.to_lowercase();
        self.products
            .values()
            .filter(|product| {
                product.name.to_lowercase().contains(&needle)
                    || product.description.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect()
    }

    /// Creates a listing, defaulting every unset optional field. New listings
    /// start unsold, unrented, and in stock; `rental_available` mirrors
    /// `available_for_rent`.
    pub fn create_product(&mut self, new: NewProduct) -> Product {
        let id = self.product_ids.mint();
        let now = Utc::now();
        let available_for_rent = new.available_for_rent.unwrap_or(false);
        let product = Product {
            id,
            seller_id: new.seller_id,
            name: new.name,
            description: new.description,
            price: new.price,
            category: new.category,
            condition: new.condition.unwrap_or_else(|| "used".to_owned()),
            images: new.images,
            main_image: new.main_image,
            location: new.location,
            tags: new.tags,
            available_for_rent,
            rental_price: new.rental_price,
            rental_available: available_for_rent,
            rental_min_days: new.rental_min_days,
            rental_max_days: new.rental_max_days,
            is_sold: false,
            is_rented: false,
            rating: new.rating.unwrap_or(0.0),
            review_count: new.review_count.unwrap_or(0),
            in_stock: new.in_stock.unwrap_or(true),
            featured: new.featured.unwrap_or(false),
            is_new: new.is_new.unwrap_or(false),
            on_sale: new.on_sale.unwrap_or(false),
            old_price: new.old_price,
            created_at: now,
            updated_at: now,
        };
        self.products.insert(id, product.clone());
        tracing::debug!(product = %id, seller = %product.seller_id, "listed product");
        product
    }

    /// Applies a partial listing update and refreshes `updated_at`.
    pub fn update_product(&mut self, id: ProductId, patch: ProductPatch) -> Option<Product> {
        let product = self.products.get_mut(&id)?;
        if let Some(name) = patch.name {
            product.name = name;
        }
        if let Some(description) = patch.description {
            product.description = description;
        }
        if let Some(price) = patch.price {
            product.price = price;
        }
        if let Some(category) = patch.category {
            product.category = category;
        }
        if let Some(condition) = patch.condition {
            product.condition = condition;
        }
        if let Some(images) = patch.images {
            product.images = images;
        }
        if let Some(main_image) = patch.main_image {
            product.main_image = main_image;
        }
        if let Some(location) = patch.location {
            product.location = location;
        }
        if let Some(tags) = patch.tags {
            product.tags = tags;
        }
        if let Some(available_for_rent) = patch.available_for_rent {
            product.available_for_rent = available_for_rent;
        }
        if let Some(rental_price) = patch.rental_price {
            product.rental_price = rental_price;
        }
        if let Some(rental_available) = patch.rental_available {
            product.rental_available = rental_available;
        }
        if let Some(rental_min_days) = patch.rental_min_days {
            product.rental_min_days = rental_min_days;
        }
        if let Some(rental_max_days) = patch.rental_max_days {
            product.rental_max_days = rental_max_days;
        }
        if let Some(in_stock) = patch.in_stock {
            product.in_stock = in_stock;
        }
        if let Some(featured) = patch.featured {
            product.featured = featured;
        }
        if let Some(is_new) = patch.is_new {
            product.is_new = is_new;
        }
        if let Some(on_sale) = patch.on_sale {
            product.on_sale = on_sale;
        }
        if let Some(old_price) = patch.old_price {
            product.old_price = old_price;
        }
        product.updated_at = Utc::now();
        Some(product.clone())
    }

    /// Removes a listing. Cart rows and order lines keep their product ids;
    /// joins resolve them to `None` from then on.
    pub fn delete_product(&mut self, id: ProductId) -> bool {
        self.products.remove(&id).is_some()
    }

    /// Directly sets a listing's availability. Making a product available
    /// again clears its sold and rented flags and restores rentability when
    /// the seller offers it for rent.
    pub fn mark_product_as_available(
        &mut self,
        id: ProductId,
        available: bool,
    ) -> Option<Product> {
        let product = self.products.get_mut(&id)?;
        product.in_stock = available;
        if available {
            product.is_sold = false;
            product.is_rented = false;
        }
        product.rental_available = available && product.available_for_rent;
        Some(product.clone())
    }
}
