use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::instructor::application::domain::{Experience, ExperienceLevel};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(10))")]
pub enum JobLevel {
    #[sea_orm(string_value = "INTERN")]
    Intern,
    #[sea_orm(string_value = "JUNIOR")]
    Junior,
    #[sea_orm(string_value = "MID")]
    Mid,
    #[sea_orm(string_value = "SENIOR")]
    Senior,
}

impl From<JobLevel> for ExperienceLevel {
    fn from(level: JobLevel) -> Self {
        match level {
            JobLevel::Intern => ExperienceLevel::Intern,
            JobLevel::Junior => ExperienceLevel::Junior,
            JobLevel::Mid => ExperienceLevel::Mid,
            JobLevel::Senior => ExperienceLevel::Senior,
        }
    }
}

impl From<ExperienceLevel> for JobLevel {
    fn from(level: ExperienceLevel) -> Self {
        match level {
            ExperienceLevel::Intern => JobLevel::Intern,
            ExperienceLevel::Junior => JobLevel::Junior,
            ExperienceLevel::Mid => JobLevel::Mid,
            ExperienceLevel::Senior => JobLevel::Senior,
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "experiences")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub instructor_id: Uuid,
    pub job_title: String,
    pub company: String,
    pub level: JobLevel,
    pub start_date: Date,
    pub end_date: Option<Date>,
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

impl From<Model> for Experience {
    fn from(model: Model) -> Self {
        Experience {
            id: model.id,
            instructor_id: model.instructor_id,
            job_title: model.job_title,
            company: model.company,
            level: model.level.into(),
            start_date: model.start_date,
            end_date: model.end_date,
        }
    }
}
