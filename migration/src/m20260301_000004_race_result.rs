use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260301_000003_race::Race;

static IDX_RACE_RESULT_RACE_ID: &str = "idx-race_results-race_id";
static FK_RACE_RESULT_RACE_ID: &str = "fk-race_results-race_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RaceResult::Table)
                    .if_not_exists()
                    .col(pk_auto(RaceResult::Id))
                    .col(integer(RaceResult::RaceId))
                    .col(string_len(RaceResult::CarNumber, 10))
                    .col(integer_null(RaceResult::Position))
                    .col(boolean(RaceResult::IsFirstPlace).default(false))
                    .col(boolean(RaceResult::IsSecondPlace).default(false))
                    .col(boolean(RaceResult::IsLastPlace).default(false))
                    .col(boolean(RaceResult::IsStage1Winner).default(false))
                    .col(boolean(RaceResult::IsStage2Winner).default(false))
                    .col(timestamp(RaceResult::CreatedAt).default(Expr::current_timestamp()))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_RACE_RESULT_RACE_ID)
                    .table(RaceResult::Table)
                    .col(RaceResult::RaceId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_RACE_RESULT_RACE_ID)
                    .from_tbl(RaceResult::Table)
                    .from_col(RaceResult::RaceId)
                    .to_tbl(Race::Table)
                    .to_col(Race::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_RACE_RESULT_RACE_ID)
                    .table(RaceResult::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_RACE_RESULT_RACE_ID)
                    .table(RaceResult::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(RaceResult::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum RaceResult {
    #[sea_orm(iden = "race_results")]
    Table,
    Id,
    RaceId,
    CarNumber,
    Position,
    IsFirstPlace,
    IsSecondPlace,
    IsLastPlace,
    IsStage1Winner,
    IsStage2Winner,
    CreatedAt,
}
