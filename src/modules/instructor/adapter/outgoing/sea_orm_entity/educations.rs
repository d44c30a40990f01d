use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::instructor::application::domain::{Degree, Education};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
pub enum DegreeCode {
    #[sea_orm(string_value = "Bachelor")]
    Bachelor,
    #[sea_orm(string_value = "Master")]
    Master,
    #[sea_orm(string_value = "Doctorate")]
    Doctorate,
    #[sea_orm(string_value = "Professional")]
    Professional,
    #[sea_orm(string_value = "Diploma")]
    Diploma,
    #[sea_orm(string_value = "Other")]
    Other,
}

impl From<DegreeCode> for Degree {
    fn from(code: DegreeCode) -> Self {
        match code {
            DegreeCode::Bachelor => Degree::Bachelor,
            DegreeCode::Master => Degree::Master,
            DegreeCode::Doctorate => Degree::Doctorate,
            DegreeCode::Professional => Degree::Professional,
            DegreeCode::Diploma => Degree::Diploma,
            DegreeCode::Other => Degree::Other,
        }
    }
}

impl From<Degree> for DegreeCode {
    fn from(degree: Degree) -> Self {
        match degree {
            Degree::Bachelor => DegreeCode::Bachelor,
            Degree::Master => DegreeCode::Master,
            Degree::Doctorate => DegreeCode::Doctorate,
            Degree::Professional => DegreeCode::Professional,
            Degree::Diploma => DegreeCode::Diploma,
            Degree::Other => DegreeCode::Other,
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "educations")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub instructor_id: Uuid,
    pub major: String,
    pub degree: DegreeCode,
    pub institution: String,
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

impl From<Model> for Education {
    fn from(model: Model) -> Self {
        Education {
            id: model.id,
            instructor_id: model.instructor_id,
            major: model.major,
            degree: model.degree.into(),
            institution: model.institution,
            start_date: model.start_date,
            end_date: model.end_date,
        }
    }
}
