pub mod educations;
pub mod experiences;
pub mod instructors;
pub mod skills;
