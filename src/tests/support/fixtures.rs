use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use crate::accounts::application::domain::{User, UserRole};
use crate::instructor::application::domain::{Instructor, InstructorForm};
use crate::instructor_application::application::domain::{
    ApplicationForm, ApplicationStatus, InstructorApplication,
};
use crate::profile::application::domain::Gender;

/// Freshly registered account: inactive student, login `new@x.com` / `Abc123@1`.
pub fn inactive_user() -> User {
    let now = Utc::now();
    User {
        id: Uuid::new_v4(),
        email: "new@x.com".to_string(),
        username: Some("new-1a2b3c4d".to_string()),
        password_hash: Some("$argon2id$v=19$m=4096,t=3,p=1$c2FsdHNhbHQ$aGFzaGhhc2g".to_string()),
        role: UserRole::Student,
        is_active: false,
        is_staff: false,
        is_superuser: false,
        last_login: None,
        created_at: now,
        updated_at: now,
    }
}

pub fn active_user() -> User {
    User {
        is_active: true,
        ..inactive_user()
    }
}

pub fn staff_user() -> User {
    User {
        email: "staff@eduport.com".to_string(),
        username: Some("staff".to_string()),
        is_active: true,
        is_staff: true,
        ..inactive_user()
    }
}

pub fn application_form() -> ApplicationForm {
    ApplicationForm {
        first_name: "Grace".to_string(),
        last_name: "Hopper".to_string(),
        phone: "09123456789".to_string(),
        gender: Gender::Female,
        email: "Grace@X.com".to_string(),
        address: "1 Navy Yard".to_string(),
        resume: "apply_teacher/grace.pdf".to_string(),
    }
}

pub fn pending_application() -> InstructorApplication {
    let now = Utc::now();
    InstructorApplication {
        id: Uuid::new_v4(),
        first_name: "Grace".to_string(),
        last_name: "Hopper".to_string(),
        phone: "09123456789".to_string(),
        gender: Gender::Female,
        email: "grace@x.com".to_string(),
        address: "1 Navy Yard".to_string(),
        resume: "apply_teacher/grace.pdf".to_string(),
        status: ApplicationStatus::Pending,
        created_at: now,
        updated_at: now,
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Instructor record that is still in its current job.
pub fn instructor_for(user_id: Uuid) -> Instructor {
    let now = Utc::now();
    Instructor {
        id: Uuid::new_v4(),
        user_id,
        job_title: "Backend Engineer".to_string(),
        job_start_date: date(2015, 3, 1),
        job_end_date: None,
        experience_year: 9,
        birthdate: date(1990, 6, 15),
        status: true,
        resume: "instructor_resume/ada.pdf".to_string(),
        created_at: now,
        updated_at: now,
    }
}

pub fn instructor_form(user_id: Uuid) -> InstructorForm {
    InstructorForm {
        user_id,
        job_title: "Backend Engineer".to_string(),
        job_start_date: date(2015, 3, 1),
        job_end_date: None,
        experience_year: 9,
        birthdate: date(1990, 6, 15),
        status: true,
        resume: "instructor_resume/ada.pdf".to_string(),
    }
}
