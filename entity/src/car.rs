use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "cars")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub vin: String,
    pub model: String,
    pub brand: String,
    pub year: i32,
    pub price: f64,
    pub color: String,
    pub mileage: f64,
    pub dealer_id: i32,
    pub order_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::dealer::Entity",
        from = "Column::DealerId",
        to = "super::dealer::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Dealer,
    #[sea_orm(
        belongs_to = "super::order::Entity",
        from = "Column::OrderId",
        to = "super::order::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Order,
    #[sea_orm(has_many = "super::user_favorite_car::Entity")]
    UserFavoriteCar,
}

impl Related<super::dealer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Dealer.def()
    }
}

impl Related<super::order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Order.def()
    }
}

impl Related<super::user_favorite_car::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserFavoriteCar.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
