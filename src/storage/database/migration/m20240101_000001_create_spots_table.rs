use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Spots::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Spots::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Spots::Name).string_len(255).not_null())
                    .col(ColumnDef::new(Spots::Latitude).double().not_null())
                    .col(ColumnDef::new(Spots::Longitude).double().not_null())
                    .col(ColumnDef::new(Spots::Locality).string_len(255).not_null())
                    .col(ColumnDef::new(Spots::CountryCode).string_len(2).not_null())
                    .col(
                        ColumnDef::new(Spots::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Spots::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_spots_country_code")
                    .table(Spots::Table)
                    .col(Spots::CountryCode)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_spots_name")
                    .table(Spots::Table)
                    .col(Spots::Name)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Spots::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Spots {
    Table,
    Id,
    Name,
    Latitude,
    Longitude,
    Locality,
    CountryCode,
    CreatedAt,
    UpdatedAt,
}
