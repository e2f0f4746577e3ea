use std::collections::HashMap;

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

/// Rows of the user/car favorites join table.
pub struct FavoriteRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FavoriteRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn exists(&self, user_id: i32, car_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::UserFavoriteCar::find()
            .filter(entity::user_favorite_car::Column::UserId.eq(user_id))
            .filter(entity::user_favorite_car::Column::CarId.eq(car_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    pub async fn create(
        &self,
        user_id: i32,
        car_id: i32,
    ) -> Result<entity::user_favorite_car::Model, DbErr> {
        entity::user_favorite_car::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            car_id: ActiveValue::Set(car_id),
        }
        .insert(self.db)
        .await
    }

    /// Removes one favorite link, returning whether it existed
    pub async fn delete(&self, user_id: i32, car_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::UserFavoriteCar::delete_many()
            .filter(entity::user_favorite_car::Column::UserId.eq(user_id))
            .filter(entity::user_favorite_car::Column::CarId.eq(car_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Removes every favorite link pointing at a car
    pub async fn delete_by_car_id(&self, car_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::UserFavoriteCar::delete_many()
            .filter(entity::user_favorite_car::Column::CarId.eq(car_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Removes every favorite link owned by a user
    pub async fn delete_by_user_id(&self, user_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::UserFavoriteCar::delete_many()
            .filter(entity::user_favorite_car::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Gets the favorited car ids of several users grouped by user id
    pub async fn get_car_ids_by_user_ids(
        &self,
        user_ids: &[i32],
    ) -> Result<HashMap<i32, Vec<i32>>, DbErr> {
        if user_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = entity::prelude::UserFavoriteCar::find()
            .filter(entity::user_favorite_car::Column::UserId.is_in(user_ids.to_vec()))
            .order_by_asc(entity::user_favorite_car::Column::CarId)
            .all(self.db)
            .await?;

        let mut grouped: HashMap<i32, Vec<i32>> = HashMap::new();
        for row in rows {
            grouped.entry(row.user_id).or_default().push(row.car_id);
        }

        Ok(grouped)
    }

    /// Gets the ids of the users favoriting each of several cars, grouped by car id
    pub async fn get_user_ids_by_car_ids(
        &self,
        car_ids: &[i32],
    ) -> Result<HashMap<i32, Vec<i32>>, DbErr> {
        if car_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = entity::prelude::UserFavoriteCar::find()
            .filter(entity::user_favorite_car::Column::CarId.is_in(car_ids.to_vec()))
            .order_by_asc(entity::user_favorite_car::Column::UserId)
            .all(self.db)
            .await?;

        let mut grouped: HashMap<i32, Vec<i32>> = HashMap::new();
        for row in rows {
            grouped.entry(row.car_id).or_default().push(row.user_id);
        }

        Ok(grouped)
    }
}
