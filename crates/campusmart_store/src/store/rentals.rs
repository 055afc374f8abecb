//! Rental transactions and their effect on product rentability.

use campusmart_foundation::{ProductId, RentalId, UserId};
use chrono::Utc;

use crate::rental::{NewRental, Rental, RentalStatus, RentalWithDetails};
use crate::store::Store;

impl Store {
    /// Opens a rental and takes the product off the rental market: the
    /// product is marked rented and `rental_available` drops to false.
    pub fn create_rental(&mut self, new: NewRental) -> Rental {
        let id = self.rental_ids.mint();
        let rental = Rental {
            id,
            product_id: new.product_id,
            renter_id: new.renter_id,
            start_date: new.start_date,
            end_date: new.end_date,
            total_price: new.total_price,
            status: new.status.unwrap_or(RentalStatus::Pending),
            return_date: None,
            deposit_amount: new.deposit_amount,
            notes: new.notes,
            created_at: Utc::now(),
        };
        self.rentals.insert(id, rental.clone());

        if let Some(product) = self.products.get_mut(&new.product_id) {
            product.is_rented = true;
            product.rental_available = false;
        }

        tracing::info!(rental = %id, product = %new.product_id, renter = %new.renter_id, "opened rental");
        rental
    }

    /// Looks up a rental joined with its product and renter.
    #[must_use]
    pub fn rental(&self, id: RentalId) -> Option<RentalWithDetails> {
        let rental = self.rentals.get(&id)?;
        Some(self.rental_details(rental))
    }

    fn rental_details(&self, rental: &Rental) -> RentalWithDetails {
        RentalWithDetails {
            rental: rental.clone(),
            product: self.products.get(&rental.product_id).cloned(),
            renter: self.users.get(&rental.renter_id).cloned(),
        }
    }

    /// Rentals taken out by a user.
    #[must_use]
    pub fn user_rentals(&self, user_id: UserId) -> Vec<RentalWithDetails> {
        self.rentals
            .values()
            .filter(|rental| rental.renter_id == user_id)
            .map(|rental| self.rental_details(rental))
            .collect()
    }

    /// The rental history of a product.
    #[must_use]
    pub fn product_rentals(&self, product_id: ProductId) -> Vec<RentalWithDetails> {
        self.rentals
            .values()
            .filter(|rental| rental.product_id == product_id)
            .map(|rental| self.rental_details(rental))
            .collect()
    }

    /// Advances a rental's status.
    ///
    /// The first transition to `Completed` stamps the return date and puts
    /// the product back on the market: `is_rented` clears and
    /// `rental_available` is restored from the seller's `available_for_rent`.
    /// Completing an already-completed rental changes the status only, so
    /// the original return date is never overwritten.
    pub fn update_rental_status(&mut self, id: RentalId, status: RentalStatus) -> Option<Rental> {
        let rental = self.rentals.get_mut(&id)?;
        rental.status = status;
        let first_completion =
            status == RentalStatus::Completed && rental.return_date.is_none();
        if first_completion {
            rental.return_date = Some(Utc::now());
        }
        let product_id = rental.product_id;
        let updated = rental.clone();

        if first_completion {
            if let Some(product) = self.products.get_mut(&product_id) {
                product.is_rented = false;
                product.rental_available = product.available_for_rent;
            }
            tracing::info!(rental = %id, product = %product_id, "rental returned");
        }

        Some(updated)
    }
}
