use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::instructor::application::domain::Instructor;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "instructors")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub user_id: Uuid,
    pub job_title: String,
    pub job_start_date: Date,
    pub job_end_date: Option<Date>,
    pub experience_year: i32,
    pub birthdate: Date,
    pub status: bool,
    pub resume: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::accounts::adapter::outgoing::sea_orm_entity::users::Entity",
        from = "Column::UserId",
        to = "crate::accounts::adapter::outgoing::sea_orm_entity::users::Column::Id",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(has_many = "super::skills::Entity")]
    Skills,
    #[sea_orm(has_many = "super::educations::Entity")]
    Educations,
    #[sea_orm(has_many = "super::experiences::Entity")]
    Experiences,
}

impl Related<super::skills::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Skills.def()
    }
}

impl Related<super::educations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Educations.def()
    }
}

impl Related<super::experiences::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Experiences.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Instructor {
    fn from(model: Model) -> Self {
        Instructor {
            id: model.id,
            user_id: model.user_id,
            job_title: model.job_title,
            job_start_date: model.job_start_date,
            job_end_date: model.job_end_date,
            // Column carries a non-negative check.
            experience_year: u16::try_from(model.experience_year).unwrap_or_default(),
            birthdate: model.birthdate,
            status: model.status,
            resume: model.resume,
            created_at: model.created_at.with_timezone(&chrono::Utc),
            updated_at: model.updated_at.with_timezone(&chrono::Utc),
        }
    }
}
