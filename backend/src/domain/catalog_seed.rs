//! Catalogue seeding orchestration.
//!
//! Builds the fixed baseline user and keyboard-shop products, then hands them
//! to the seed repository, which wipes both tables before inserting. Running
//! it twice leaves the same six products and one user behind.

use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use crate::domain::ports::{
    CatalogSeedOutcome, CatalogSeedRepository, CatalogSeedRepositoryError, CatalogSeedRequest,
};
use crate::domain::{
    Category, EmailAddress, NewProduct, Price, PriceError, ProductName, ProductValidationError,
    Quantity, Role, User, UserId, UserName, UserValidationError,
};

/// Display name of the baseline account.
pub const SEED_USER_NAME: &str = "Test User";
/// Email of the baseline account.
pub const SEED_USER_EMAIL: &str = "test@example.com";

/// `(name, price in whole units, category, quantity)` for each seed product.
pub const SEED_PRODUCTS: [(&str, i64, &str, u32); 6] = [
    ("Ducky One 2 Mini", 1_200_000, "Keyboard", 15),
    ("Varminlo TKL", 1_300_000, "Keyboard", 10),
    ("Ducky One 2 TKL Midnight", 1_100_000, "Keyboard", 15),
    ("Cherry MX Switches speed silver", 3_500, "Switch", 1_000),
    ("Keycaps PBT Sunshine full set", 250_000, "Keycaps", 50),
    ("Keycaps PBT Transparant full set", 200_000, "Keycaps", 0),
];

/// Errors raised while preparing or applying the seed.
#[derive(Debug, Error)]
pub enum CatalogSeedingError {
    #[error("seed user failed validation: {0}")]
    InvalidUser(#[from] UserValidationError),
    #[error("seed product failed validation: {0}")]
    InvalidProduct(#[from] ProductValidationError),
    #[error("seed price failed validation: {0}")]
    InvalidPrice(#[from] PriceError),
    #[error("catalogue seed persistence error: {0}")]
    Persistence(#[from] CatalogSeedRepositoryError),
}

/// Baseline user with a fresh id.
///
/// The account gets the schema default role; promoting someone to admin is
/// left to the operator.
pub fn seed_user() -> Result<User, CatalogSeedingError> {
    Ok(User::new(
        UserId::random(),
        UserName::new(SEED_USER_NAME)?,
        EmailAddress::new(SEED_USER_EMAIL)?,
        Role::default(),
    ))
}

/// Seed products in insertion order.
pub fn seed_products() -> Result<Vec<NewProduct>, CatalogSeedingError> {
    SEED_PRODUCTS
        .iter()
        .map(|&(name, units, category, quantity)| {
            Ok(NewProduct {
                name: ProductName::new(name)?,
                price: Price::from_units(units)?,
                category: Category::new(category)?,
                quantity: Quantity::new(quantity),
            })
        })
        .collect()
}

/// Service replacing the catalogue with the seed data.
#[derive(Clone)]
pub struct CatalogSeeder<R: ?Sized> {
    repository: Arc<R>,
}

impl<R: ?Sized> CatalogSeeder<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

impl<R> CatalogSeeder<R>
where
    R: CatalogSeedRepository + ?Sized,
{
    /// Delete all products and users, then insert the seed rows.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogSeedingError`] when a literal fails validation or the
    /// repository transaction fails. Nothing is written in either case.
    pub async fn seed(&self) -> Result<CatalogSeedOutcome, CatalogSeedingError> {
        let request = CatalogSeedRequest {
            user: seed_user()?,
            products: seed_products()?,
        };
        let outcome = self.repository.reset_and_seed(request).await?;
        info!(
            users_inserted = outcome.users_inserted,
            products_inserted = outcome.products_inserted,
            "catalogue seeded"
        );
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::MockCatalogSeedRepository;
    use rstest::rstest;

    #[rstest]
    fn literals_pass_validation() {
        let products = seed_products().expect("valid literals");
        assert_eq!(products.len(), 6);
        assert_eq!(products[3].name.as_str(), "Cherry MX Switches speed silver");
        assert_eq!(products[3].price, Price::from_units(3_500).expect("price"));
        assert_eq!(products[5].quantity, Quantity::new(0));
    }

    #[rstest]
    fn baseline_user_matches_literals() {
        let user = seed_user().expect("valid user");
        assert_eq!(user.name().as_str(), SEED_USER_NAME);
        assert_eq!(user.email().as_str(), SEED_USER_EMAIL);
        assert_eq!(user.role(), Role::Customer);
    }

    #[rstest]
    #[tokio::test]
    async fn seed_sends_one_user_and_six_products() {
        let mut repo = MockCatalogSeedRepository::new();
        repo.expect_reset_and_seed()
            .withf(|request| {
                request.products.len() == 6
                    && request.user.email().as_str() == SEED_USER_EMAIL
                    && request.products[0].name.as_str() == "Ducky One 2 Mini"
            })
            .times(1)
            .return_once(|request| {
                Ok(CatalogSeedOutcome {
                    users_inserted: 1,
                    products_inserted: request.products.len(),
                })
            });

        let outcome = CatalogSeeder::new(Arc::new(repo))
            .seed()
            .await
            .expect("seed succeeds");
        assert_eq!(
            outcome,
            CatalogSeedOutcome {
                users_inserted: 1,
                products_inserted: 6
            }
        );
    }

    #[rstest]
    #[tokio::test]
    async fn seeds_through_a_trait_object() {
        let mut repo = MockCatalogSeedRepository::new();
        repo.expect_reset_and_seed().times(1).return_once(|request| {
            Ok(CatalogSeedOutcome {
                users_inserted: 1,
                products_inserted: request.products.len(),
            })
        });
        let repository: Arc<dyn CatalogSeedRepository> = Arc::new(repo);

        let outcome = CatalogSeeder::new(repository)
            .seed()
            .await
            .expect("seed succeeds");
        assert_eq!(outcome.products_inserted, 6);
    }

    #[rstest]
    #[tokio::test]
    async fn seed_surfaces_repository_failures() {
        let mut repo = MockCatalogSeedRepository::new();
        repo.expect_reset_and_seed()
            .times(1)
            .return_once(|_| Err(CatalogSeedRepositoryError::connection("refused")));

        let err = CatalogSeeder::new(Arc::new(repo))
            .seed()
            .await
            .expect_err("seed fails");
        assert!(matches!(
            err,
            CatalogSeedingError::Persistence(CatalogSeedRepositoryError::Connection { .. })
        ));
    }
}
