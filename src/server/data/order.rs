use std::collections::HashMap;

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

pub struct OrderRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> OrderRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<entity::order::Model>, DbErr> {
        entity::prelude::Order::find()
            .order_by_asc(entity::order::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::order::Model>, DbErr> {
        entity::prelude::Order::find_by_id(id).one(self.db).await
    }

    pub async fn get_by_user_id(&self, user_id: i32) -> Result<Vec<entity::order::Model>, DbErr> {
        entity::prelude::Order::find()
            .filter(entity::order::Column::UserId.eq(user_id))
            .order_by_asc(entity::order::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets the order ids of several users grouped by user id
    pub async fn get_ids_by_user_ids(
        &self,
        user_ids: &[i32],
    ) -> Result<HashMap<i32, Vec<i32>>, DbErr> {
        if user_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let orders = entity::prelude::Order::find()
            .filter(entity::order::Column::UserId.is_in(user_ids.to_vec()))
            .order_by_asc(entity::order::Column::Id)
            .all(self.db)
            .await?;

        let mut grouped: HashMap<i32, Vec<i32>> = HashMap::new();
        for order in orders {
            grouped.entry(order.user_id).or_default().push(order.id);
        }

        Ok(grouped)
    }

    pub async fn create(
        &self,
        user_id: i32,
        order_date: DateTime<Utc>,
        total_price: f64,
    ) -> Result<entity::order::Model, DbErr> {
        entity::order::ActiveModel {
            order_date: ActiveValue::Set(order_date),
            total_price: ActiveValue::Set(total_price),
            user_id: ActiveValue::Set(user_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn update(
        &self,
        id: i32,
        user_id: i32,
        order_date: DateTime<Utc>,
        total_price: f64,
    ) -> Result<entity::order::Model, DbErr> {
        entity::order::ActiveModel {
            id: ActiveValue::Unchanged(id),
            order_date: ActiveValue::Set(order_date),
            total_price: ActiveValue::Set(total_price),
            user_id: ActiveValue::Set(user_id),
        }
        .update(self.db)
        .await
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Order::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }
}
