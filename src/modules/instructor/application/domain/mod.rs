pub mod entities;

pub use entities::{
    Degree, Education, EducationForm, Experience, ExperienceForm, ExperienceLevel, Instructor,
    InstructorDetail, InstructorForm, NewEducation, NewExperience, NewInstructor, NewSkill, Skill,
    SkillForm, SkillLevel,
};
