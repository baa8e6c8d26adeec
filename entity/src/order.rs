use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "rental_order")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub car_id: i32,
    pub start_date: Date,
    pub end_date: Date,
    pub payment_method: String,
    pub status: OrderStatus,
    /// Post-completion rating, 1 to 5. Only set while the order is `Selesai`.
    pub rating: Option<i32>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::car::Entity",
        from = "Column::CarId",
        to = "super::car::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Car,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::car::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Car.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Order lifecycle states. A `Dikonfirmasi` order holds one reserved unit of
/// car stock; every other state holds none.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum OrderStatus {
    #[sea_orm(string_value = "Pending")]
    Pending,
    #[sea_orm(string_value = "Dikonfirmasi")]
    #[serde(rename = "Dikonfirmasi")]
    Confirmed,
    #[sea_orm(string_value = "Dibatalkan")]
    #[serde(rename = "Dibatalkan")]
    Cancelled,
    #[sea_orm(string_value = "Selesai")]
    #[serde(rename = "Selesai")]
    Completed,
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let value = match self {
            Self::Pending => "Pending",
            Self::Confirmed => "Dikonfirmasi",
            Self::Cancelled => "Dibatalkan",
            Self::Completed => "Selesai",
        };
        f.write_str(value)
    }
}
