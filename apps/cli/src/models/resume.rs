use serde::Serialize;

/// The fixed technical-skill categories, in prompt (and render) order.
pub const SKILL_CATEGORIES: &[&str] = &[
    "Languages",
    "Frameworks",
    "ML frameworks",
    "DevOps and API Tools",
    "Tools",
    "Database",
];

/// The complete resume record. Built once per run by the collector,
/// sanitized once into a detached copy, and consumed exactly once by the
/// renderer. Nothing is persisted between runs.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Resume {
    pub name: String,
    pub location: String,
    pub phone: String,
    pub email: String,
    pub portfolio: String,
    pub linkedin: String,
    pub github: String,
    /// Freeform summary: collected as lines, joined with single spaces.
    pub summary: String,
    /// One group per category the user actually filled in, in
    /// `SKILL_CATEGORIES` order. A group is never empty-labelled; a skipped
    /// category simply has no group.
    pub technical_skills: Vec<SkillGroup>,
    pub experience: Vec<ExperienceEntry>,
    pub internships: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub projects: Vec<ProjectEntry>,
    pub publications: Vec<PublicationEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SkillGroup {
    pub label: String,
    pub skills: Vec<String>,
}

/// One work-experience or internship entry. The role is the key field;
/// a blank role terminates collection of the section.
#[derive(Debug, Clone, Serialize)]
pub struct ExperienceEntry {
    pub role: String,
    pub company: String,
    pub start_date: String,
    pub end_date: String,
    pub description: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EducationEntry {
    pub university: String,
    pub degree: String,
    pub gpa: String,
    pub start_date: String,
    pub end_date: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProjectEntry {
    pub title: String,
    pub tech: String,
    pub date: String,
    pub description: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PublicationEntry {
    pub title: String,
    pub url: String,
    pub venue: String,
    pub date: String,
    pub description: Vec<String>,
}
