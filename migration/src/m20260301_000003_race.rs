use sea_orm_migration::{prelude::*, schema::*};

static IDX_RACE_RACE_NUMBER: &str = "idx-races-race_number";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Race::Table)
                    .if_not_exists()
                    .col(pk_auto(Race::Id))
                    .col(string_len(Race::Name, 200))
                    .col(integer(Race::RaceNumber))
                    .col(string_len_null(Race::Date, 50))
                    .col(boolean(Race::IsSpecialRace).default(false))
                    .col(string_len(Race::Status, 20).default("upcoming"))
                    .col(integer(Race::RolloverFirst).default(0))
                    .col(integer(Race::RolloverSecond).default(0))
                    .col(integer(Race::RolloverLast).default(0))
                    .col(integer(Race::RolloverStage1).default(0))
                    .col(integer(Race::RolloverStage2).default(0))
                    .col(text_null(Race::ExtraDrivers))
                    .col(timestamp(Race::CreatedAt).default(Expr::current_timestamp()))
                    .to_owned(),
            )
            .await?;

        // "Next race" is looked up by race_number + 1
        manager
            .create_index(
                Index::create()
                    .name(IDX_RACE_RACE_NUMBER)
                    .table(Race::Table)
                    .col(Race::RaceNumber)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_RACE_RACE_NUMBER)
                    .table(Race::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Race::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Race {
    #[sea_orm(iden = "races")]
    Table,
    Id,
    Name,
    RaceNumber,
    Date,
    IsSpecialRace,
    Status,
    RolloverFirst,
    RolloverSecond,
    RolloverLast,
    RolloverStage1,
    RolloverStage2,
    ExtraDrivers,
    CreatedAt,
}
