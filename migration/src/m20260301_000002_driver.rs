use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Driver::Table)
                    .if_not_exists()
                    .col(pk_auto(Driver::Id))
                    .col(string_len(Driver::Name, 100))
                    .col(string_len_uniq(Driver::CarNumber, 10))
                    .col(string_len_null(Driver::TeamName, 100))
                    .col(string_len_null(Driver::Manufacturer, 50))
                    .col(boolean(Driver::IsChartered).default(true))
                    .col(timestamp(Driver::CreatedAt).default(Expr::current_timestamp()))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Driver::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Driver {
    #[sea_orm(iden = "drivers")]
    Table,
    Id,
    Name,
    CarNumber,
    TeamName,
    Manufacturer,
    IsChartered,
    CreatedAt,
}
