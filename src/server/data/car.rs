use std::collections::HashMap;

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QueryTrait,
};

use crate::server::model::car::{CarFilterParams, CreateCarParams};

pub struct CarRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CarRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets every car ordered by id
    pub async fn get_all(&self) -> Result<Vec<entity::car::Model>, DbErr> {
        entity::prelude::Car::find()
            .order_by_asc(entity::car::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::car::Model>, DbErr> {
        entity::prelude::Car::find_by_id(id).one(self.db).await
    }

    /// Gets the cars with the given ids. Missing ids are skipped.
    pub async fn find_by_ids(&self, ids: &[i32]) -> Result<Vec<entity::car::Model>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Car::find()
            .filter(entity::car::Column::Id.is_in(ids.to_vec()))
            .order_by_asc(entity::car::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn find_by_vins(&self, vins: &[String]) -> Result<Vec<entity::car::Model>, DbErr> {
        if vins.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Car::find()
            .filter(entity::car::Column::Vin.is_in(vins.to_vec()))
            .order_by_asc(entity::car::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn exists_by_vin(&self, vin: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Car::find()
            .filter(entity::car::Column::Vin.eq(vin))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    pub async fn get_by_dealer_id(&self, dealer_id: i32) -> Result<Vec<entity::car::Model>, DbErr> {
        entity::prelude::Car::find()
            .filter(entity::car::Column::DealerId.eq(dealer_id))
            .order_by_asc(entity::car::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets the cars of several dealers grouped by dealer id
    pub async fn get_by_dealer_ids(
        &self,
        dealer_ids: &[i32],
    ) -> Result<HashMap<i32, Vec<entity::car::Model>>, DbErr> {
        if dealer_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let cars = entity::prelude::Car::find()
            .filter(entity::car::Column::DealerId.is_in(dealer_ids.to_vec()))
            .order_by_asc(entity::car::Column::Id)
            .all(self.db)
            .await?;

        let mut grouped: HashMap<i32, Vec<entity::car::Model>> = HashMap::new();
        for car in cars {
            grouped.entry(car.dealer_id).or_default().push(car);
        }

        Ok(grouped)
    }

    pub async fn get_by_order_id(&self, order_id: i32) -> Result<Vec<entity::car::Model>, DbErr> {
        entity::prelude::Car::find()
            .filter(entity::car::Column::OrderId.eq(order_id))
            .order_by_asc(entity::car::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets the car ids of several orders grouped by order id
    pub async fn get_ids_by_order_ids(
        &self,
        order_ids: &[i32],
    ) -> Result<HashMap<i32, Vec<i32>>, DbErr> {
        if order_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let cars = entity::prelude::Car::find()
            .filter(entity::car::Column::OrderId.is_in(order_ids.to_vec()))
            .order_by_asc(entity::car::Column::Id)
            .all(self.db)
            .await?;

        let mut grouped: HashMap<i32, Vec<i32>> = HashMap::new();
        for car in cars {
            if let Some(order_id) = car.order_id {
                grouped.entry(order_id).or_default().push(car.id);
            }
        }

        Ok(grouped)
    }

    /// Gets cars within the optional year and mileage bounds
    pub async fn filter(&self, params: CarFilterParams) -> Result<Vec<entity::car::Model>, DbErr> {
        entity::prelude::Car::find()
            .apply_if(params.min_year, |query, min_year| {
                query.filter(entity::car::Column::Year.gte(min_year))
            })
            .apply_if(params.max_year, |query, max_year| {
                query.filter(entity::car::Column::Year.lte(max_year))
            })
            .apply_if(params.max_mileage, |query, max_mileage| {
                query.filter(entity::car::Column::Mileage.lte(max_mileage))
            })
            .order_by_asc(entity::car::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets the distinct dealer ids owning at least one car of `brand`, case-insensitively
    pub async fn get_dealer_ids_by_brand(&self, brand: &str) -> Result<Vec<i32>, DbErr> {
        use sea_orm::sea_query::{Expr, ExprTrait, Func};

        let cars = entity::prelude::Car::find()
            .filter(
                Expr::expr(Func::lower(Expr::col((
                    entity::car::Entity,
                    entity::car::Column::Brand,
                ))))
                .eq(brand.to_lowercase()),
            )
            .order_by_asc(entity::car::Column::DealerId)
            .all(self.db)
            .await?;

        let mut dealer_ids: Vec<i32> = cars.into_iter().map(|car| car.dealer_id).collect();
        dealer_ids.dedup();

        Ok(dealer_ids)
    }

    /// Creates a new car. `params.dealer_id` must already be resolved.
    pub async fn create(&self, params: CreateCarParams) -> Result<entity::car::Model, DbErr> {
        let dealer_id = params
            .dealer_id
            .ok_or_else(|| DbErr::Custom("Car dealer_id is required".to_string()))?;

        entity::car::ActiveModel {
            vin: ActiveValue::Set(params.vin),
            model: ActiveValue::Set(params.model),
            brand: ActiveValue::Set(params.brand),
            year: ActiveValue::Set(params.year),
            price: ActiveValue::Set(params.price),
            color: ActiveValue::Set(params.color),
            mileage: ActiveValue::Set(params.mileage),
            dealer_id: ActiveValue::Set(dealer_id),
            order_id: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Overwrites every writable field of an existing car. The order link is untouched.
    pub async fn update(
        &self,
        id: i32,
        params: CreateCarParams,
    ) -> Result<entity::car::Model, DbErr> {
        let dealer_id = params
            .dealer_id
            .ok_or_else(|| DbErr::Custom("Car dealer_id is required".to_string()))?;

        entity::car::ActiveModel {
            id: ActiveValue::Unchanged(id),
            vin: ActiveValue::Set(params.vin),
            model: ActiveValue::Set(params.model),
            brand: ActiveValue::Set(params.brand),
            year: ActiveValue::Set(params.year),
            price: ActiveValue::Set(params.price),
            color: ActiveValue::Set(params.color),
            mileage: ActiveValue::Set(params.mileage),
            dealer_id: ActiveValue::Set(dealer_id),
            order_id: ActiveValue::NotSet,
        }
        .update(self.db)
        .await
    }

    /// Points the given cars at `order_id`, or detaches them when it is `None`
    ///
    /// Returns the number of cars updated.
    pub async fn set_order(&self, car_ids: &[i32], order_id: Option<i32>) -> Result<u64, DbErr> {
        if car_ids.is_empty() {
            return Ok(0);
        }

        let result = entity::prelude::Car::update_many()
            .set(entity::car::ActiveModel {
                order_id: ActiveValue::Set(order_id),
                ..Default::default()
            })
            .filter(entity::car::Column::Id.is_in(car_ids.to_vec()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Detaches every car currently held by `order_id`
    pub async fn clear_order(&self, order_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Car::update_many()
            .set(entity::car::ActiveModel {
                order_id: ActiveValue::Set(None),
                ..Default::default()
            })
            .filter(entity::car::Column::OrderId.eq(order_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes a car by id, returning whether a row was removed
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Car::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }
}
