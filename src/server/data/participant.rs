use sea_orm::{ConnectionTrait, DbErr, EntityTrait, QueryOrder};

pub struct ParticipantRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ParticipantRepository<'a, C> {
    /// Creates a new instance of [`ParticipantRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets all participants ordered by name for display
    pub async fn get_all(&self) -> Result<Vec<entity::participant::Model>, DbErr> {
        entity::prelude::Participant::find()
            .order_by_asc(entity::participant::Column::Name)
            .order_by_asc(entity::participant::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets all participants in draw order (ascending id)
    pub async fn get_all_by_id(&self) -> Result<Vec<entity::participant::Model>, DbErr> {
        entity::prelude::Participant::find()
            .order_by_asc(entity::participant::Column::Id)
            .all(self.db)
            .await
    }
}
