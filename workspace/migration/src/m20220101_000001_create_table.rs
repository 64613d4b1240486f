use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create users table
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(pk_auto(Users::Id))
                    .col(string(Users::Email).unique_key())
                    .col(string(Users::TenantId))
                    .to_owned(),
            )
            .await?;

        // Create residential_users table
        manager
            .create_table(
                Table::create()
                    .table(ResidentialUsers::Table)
                    .if_not_exists()
                    .col(pk_auto(ResidentialUsers::Id))
                    .col(integer(ResidentialUsers::UserId))
                    .col(integer_null(ResidentialUsers::EnergyGoal))
                    .col(integer_null(ResidentialUsers::EnergyUsage))
                    .col(
                        timestamp_with_time_zone(ResidentialUsers::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(ResidentialUsers::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_residential_user_user")
                            .from(ResidentialUsers::Table, ResidentialUsers::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Index for the common "profiles of a user" lookup
        manager
            .create_index(
                Index::create()
                    .name("idx_residential_users_user_id")
                    .table(ResidentialUsers::Table)
                    .col(ResidentialUsers::UserId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ResidentialUsers::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    Email,
    TenantId,
}

#[derive(DeriveIden)]
enum ResidentialUsers {
    Table,
    Id,
    UserId,
    EnergyGoal,
    EnergyUsage,
    CreatedAt,
    UpdatedAt,
}
