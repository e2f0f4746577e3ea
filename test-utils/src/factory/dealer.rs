//! Dealer factory for creating test dealer entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test dealers with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let dealer = DealerFactory::new(&db)
///     .name("Downtown Motors")
///     .phone_number("+1 (555) 123-4567")
///     .build()
///     .await?;
/// ```
pub struct DealerFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    address: String,
    phone_number: String,
}

impl<'a> DealerFactory<'a> {
    /// Creates a new DealerFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Dealer {id}"`
    /// - address: `"{id} Auto Mall Rd"`
    /// - phone_number: `"+1 555 {id}"` with the id zero-padded to seven digits
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Dealer {}", id),
            address: format!("{} Auto Mall Rd", id),
            phone_number: format!("+1 555 {:07}", id),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    pub fn phone_number(mut self, phone_number: impl Into<String>) -> Self {
        self.phone_number = phone_number.into();
        self
    }

    /// Builds and inserts the dealer entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::dealer::Model)` - Created dealer entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::dealer::Model, DbErr> {
        entity::dealer::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            address: ActiveValue::Set(self.address),
            phone_number: ActiveValue::Set(self.phone_number),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a dealer with default values.
///
/// Shorthand for `DealerFactory::new(db).build().await`.
pub async fn create_dealer(db: &DatabaseConnection) -> Result<entity::dealer::Model, DbErr> {
    DealerFactory::new(db).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use entity::prelude::*;

    #[tokio::test]
    async fn creates_dealer_with_defaults() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_table(Dealer).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let dealer = create_dealer(db).await?;

        assert!(dealer.name.starts_with("Dealer "));
        assert!(dealer.address.ends_with("Auto Mall Rd"));
        assert!(dealer.phone_number.starts_with("+1 555 "));

        Ok(())
    }

    #[tokio::test]
    async fn creates_multiple_unique_dealers() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_table(Dealer).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let first = create_dealer(db).await?;
        let second = create_dealer(db).await?;

        assert_ne!(first.id, second.id);
        assert_ne!(first.name, second.name);
        assert_ne!(first.phone_number, second.phone_number);

        Ok(())
    }
}
