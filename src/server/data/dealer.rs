use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::dealer::CreateDealerParams;

pub struct DealerRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> DealerRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<entity::dealer::Model>, DbErr> {
        entity::prelude::Dealer::find()
            .order_by_asc(entity::dealer::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::dealer::Model>, DbErr> {
        entity::prelude::Dealer::find_by_id(id).one(self.db).await
    }

    pub async fn find_by_ids(&self, ids: &[i32]) -> Result<Vec<entity::dealer::Model>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Dealer::find()
            .filter(entity::dealer::Column::Id.is_in(ids.to_vec()))
            .order_by_asc(entity::dealer::Column::Id)
            .all(self.db)
            .await
    }

    /// Checks whether a dealer other than `exclude_id` already uses `name`
    pub async fn name_taken(&self, name: &str, exclude_id: Option<i32>) -> Result<bool, DbErr> {
        self.taken(entity::dealer::Column::Name, name, exclude_id)
            .await
    }

    /// Checks whether a dealer other than `exclude_id` already uses `address`
    pub async fn address_taken(
        &self,
        address: &str,
        exclude_id: Option<i32>,
    ) -> Result<bool, DbErr> {
        self.taken(entity::dealer::Column::Address, address, exclude_id)
            .await
    }

    /// Checks whether a dealer other than `exclude_id` already uses `phone_number`
    pub async fn phone_number_taken(
        &self,
        phone_number: &str,
        exclude_id: Option<i32>,
    ) -> Result<bool, DbErr> {
        self.taken(entity::dealer::Column::PhoneNumber, phone_number, exclude_id)
            .await
    }

    async fn taken(
        &self,
        column: entity::dealer::Column,
        value: &str,
        exclude_id: Option<i32>,
    ) -> Result<bool, DbErr> {
        let mut query = entity::prelude::Dealer::find().filter(column.eq(value));

        if let Some(id) = exclude_id {
            query = query.filter(entity::dealer::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    pub async fn create(&self, params: CreateDealerParams) -> Result<entity::dealer::Model, DbErr> {
        entity::dealer::ActiveModel {
            name: ActiveValue::Set(params.name),
            address: ActiveValue::Set(params.address),
            phone_number: ActiveValue::Set(params.phone_number),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn update(
        &self,
        id: i32,
        params: CreateDealerParams,
    ) -> Result<entity::dealer::Model, DbErr> {
        entity::dealer::ActiveModel {
            id: ActiveValue::Unchanged(id),
            name: ActiveValue::Set(params.name),
            address: ActiveValue::Set(params.address),
            phone_number: ActiveValue::Set(params.phone_number),
        }
        .update(self.db)
        .await
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Dealer::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
