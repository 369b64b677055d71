use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260301_000001_participant::Participant, m20260301_000002_driver::Driver,
    m20260301_000003_race::Race,
};

static IDX_TEAM_RACE_ID: &str = "idx-teams-race_id";
static FK_TEAM_RACE_ID: &str = "fk-teams-race_id";
static FK_TEAM_PARTICIPANT_ID: &str = "fk-teams-participant_id";
static FK_TEAM_DRIVER1_ID: &str = "fk-teams-driver1_id";
static FK_TEAM_DRIVER2_ID: &str = "fk-teams-driver2_id";
static FK_TEAM_DRIVER3_ID: &str = "fk-teams-driver3_id";
static FK_TEAM_DRIVER4_ID: &str = "fk-teams-driver4_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Team::Table)
                    .if_not_exists()
                    .col(pk_auto(Team::Id))
                    .col(integer(Team::RaceId))
                    .col(integer(Team::ParticipantId))
                    .col(integer(Team::Driver1Id))
                    .col(integer(Team::Driver2Id))
                    .col(integer(Team::Driver3Id))
                    .col(integer(Team::Driver4Id))
                    .col(integer(Team::PointsEarned).default(0))
                    .col(timestamp(Team::CreatedAt).default(Expr::current_timestamp()))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_TEAM_RACE_ID)
                    .table(Team::Table)
                    .col(Team::RaceId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_TEAM_RACE_ID)
                    .from_tbl(Team::Table)
                    .from_col(Team::RaceId)
                    .to_tbl(Race::Table)
                    .to_col(Race::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_TEAM_PARTICIPANT_ID)
                    .from_tbl(Team::Table)
                    .from_col(Team::ParticipantId)
                    .to_tbl(Participant::Table)
                    .to_col(Participant::Id)
                    .to_owned(),
            )
            .await?;

        for (name, column) in driver_foreign_keys() {
            manager
                .create_foreign_key(
                    ForeignKey::create()
                        .name(name)
                        .from_tbl(Team::Table)
                        .from_col(column)
                        .to_tbl(Driver::Table)
                        .to_col(Driver::Id)
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut foreign_keys = vec![FK_TEAM_RACE_ID, FK_TEAM_PARTICIPANT_ID];
        foreign_keys.extend(driver_foreign_keys().into_iter().map(|(name, _)| name));

        for name in foreign_keys {
            manager
                .drop_foreign_key(ForeignKey::drop().name(name).table(Team::Table).to_owned())
                .await?;
        }

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_TEAM_RACE_ID)
                    .table(Team::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Team::Table).to_owned())
            .await?;

        Ok(())
    }
}

fn driver_foreign_keys() -> [(&'static str, Team); 4] {
    [
        (FK_TEAM_DRIVER1_ID, Team::Driver1Id),
        (FK_TEAM_DRIVER2_ID, Team::Driver2Id),
        (FK_TEAM_DRIVER3_ID, Team::Driver3Id),
        (FK_TEAM_DRIVER4_ID, Team::Driver4Id),
    ]
}

#[derive(DeriveIden)]
enum Team {
    #[sea_orm(iden = "teams")]
    Table,
    Id,
    RaceId,
    ParticipantId,
    Driver1Id,
    Driver2Id,
    Driver3Id,
    Driver4Id,
    PointsEarned,
    CreatedAt,
}
