use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::instructor::application::domain::{Skill, SkillLevel};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
pub enum Level {
    #[sea_orm(string_value = "Basic")]
    Basic,
    #[sea_orm(string_value = "Intermediate")]
    Intermediate,
    #[sea_orm(string_value = "Advanced")]
    Advanced,
}

impl From<Level> for SkillLevel {
    fn from(level: Level) -> Self {
        match level {
            Level::Basic => SkillLevel::Basic,
            Level::Intermediate => SkillLevel::Intermediate,
            Level::Advanced => SkillLevel::Advanced,
        }
    }
}

impl From<SkillLevel> for Level {
    fn from(level: SkillLevel) -> Self {
        match level {
            SkillLevel::Basic => Level::Basic,
            SkillLevel::Intermediate => Level::Intermediate,
            SkillLevel::Advanced => Level::Advanced,
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "skills")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub instructor_id: Uuid,
    pub name: String,
    pub level: Level,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::instructors::Entity",
        from = "Column::InstructorId",
        to = "super::instructors::Column::Id",
        on_delete = "Cascade"
    )]
    Instructor,
}

impl Related<super::instructors::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Instructor.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Skill {
    fn from(model: Model) -> Self {
        Skill {
            id: model.id,
            instructor_id: model.instructor_id,
            name: model.name,
            level: model.level.into(),
        }
    }
}
