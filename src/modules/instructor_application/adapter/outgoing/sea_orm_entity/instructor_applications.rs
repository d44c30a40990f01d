use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::instructor_application::application::domain::{
    ApplicationStatus, InstructorApplication,
};
use crate::profile::adapter::outgoing::sea_orm_entity::profiles::GenderCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
pub enum Status {
    #[sea_orm(string_value = "pending")]
    Pending,
    #[sea_orm(string_value = "approved")]
    Approved,
    #[sea_orm(string_value = "rejected")]
    Rejected,
}

impl From<Status> for ApplicationStatus {
    fn from(status: Status) -> Self {
        match status {
            Status::Pending => ApplicationStatus::Pending,
            Status::Approved => ApplicationStatus::Approved,
            Status::Rejected => ApplicationStatus::Rejected,
        }
    }
}

impl From<ApplicationStatus> for Status {
    fn from(status: ApplicationStatus) -> Self {
        match status {
            ApplicationStatus::Pending => Status::Pending,
            ApplicationStatus::Approved => Status::Approved,
            ApplicationStatus::Rejected => Status::Rejected,
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "instructor_applications")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    #[sea_orm(unique)]
    pub phone: String,
    pub gender: GenderCode,
    #[sea_orm(unique)]
    pub email: String,
    #[sea_orm(column_type = "Text")]
    pub address: String,
    pub resume: String,
    pub status: Status,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for InstructorApplication {
    fn from(model: Model) -> Self {
        InstructorApplication {
            id: model.id,
            first_name: model.first_name,
            last_name: model.last_name,
            phone: model.phone,
            gender: model.gender.into(),
            email: model.email,
            address: model.address,
            resume: model.resume,
            status: model.status.into(),
            created_at: model.created_at.with_timezone(&chrono::Utc),
            updated_at: model.updated_at.with_timezone(&chrono::Utc),
        }
    }
}
