use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250621_000002_create_user_table::User, m20250621_000004_create_car_table::Car,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RentalOrder::Table)
                    .if_not_exists()
                    .col(pk_auto(RentalOrder::Id))
                    .col(integer(RentalOrder::UserId))
                    .col(integer(RentalOrder::CarId))
                    .col(date(RentalOrder::StartDate))
                    .col(date(RentalOrder::EndDate))
                    .col(string(RentalOrder::PaymentMethod))
                    .col(
                        string_len(RentalOrder::Status, 16)
                            .default("Pending")
                            .not_null(),
                    )
                    .col(integer_null(RentalOrder::Rating))
                    .col(
                        timestamp(RentalOrder::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(RentalOrder::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_rental_order_user_id")
                            .from(RentalOrder::Table, RentalOrder::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_rental_order_car_id")
                            .from(RentalOrder::Table, RentalOrder::CarId)
                            .to(Car::Table, Car::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RentalOrder::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum RentalOrder {
    Table,
    Id,
    UserId,
    CarId,
    StartDate,
    EndDate,
    PaymentMethod,
    Status,
    Rating,
    CreatedAt,
    UpdatedAt,
}
