//! Per-section collection steps.
//!
//! Each step takes the prompter and returns its section's data; the record
//! is assembled by `collect_resume`, never accumulated in shared state.
//! Repeatable sections terminate on a blank key field (role, university, or
//! title); that transition is the `SectionState` sentinel machine, and the
//! finished list is never reordered or mutated afterwards.

use std::io::{BufRead, Write};

use crate::collect::prompter::Prompter;
use crate::errors::AppError;
use crate::models::resume::{
    EducationEntry, ExperienceEntry, ProjectEntry, PublicationEntry, Resume, SkillGroup,
    SKILL_CATEGORIES,
};

// ────────────────────────────────────────────────────────────────────────────
// Sentinel state machine
// ────────────────────────────────────────────────────────────────────────────

/// Collection state for a sentinel-terminated loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionState {
    Collecting,
    Terminated,
}

impl SectionState {
    /// The sentinel transition: a blank answer terminates the loop,
    /// anything else keeps collecting.
    pub fn after(answer: &str) -> Self {
        if answer.is_empty() {
            SectionState::Terminated
        } else {
            SectionState::Collecting
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Single-shot sections
// ────────────────────────────────────────────────────────────────────────────

/// Collects the seven personal-info fields and returns a starter record.
pub fn personal_info<R: BufRead, W: Write>(p: &mut Prompter<R, W>) -> Result<Resume, AppError> {
    p.banner("Personal Information")?;
    Ok(Resume {
        name: p.field("Full Name")?,
        location: p.field("City, Country (e.g., Jaipur, India)")?,
        phone: p.field("Phone Number")?,
        email: p.field("Email Address")?,
        portfolio: p.field("Portfolio/Website URL")?,
        linkedin: p.field("LinkedIn Profile URL")?,
        github: p.field("GitHub Profile URL")?,
        ..Resume::default()
    })
}

/// Collects the free-text summary: lines until end-of-input, joined with a
/// single ASCII space. Blank lines join too, producing doubled spaces.
pub fn summary<R: BufRead, W: Write>(p: &mut Prompter<R, W>) -> Result<String, AppError> {
    p.banner("Professional Summary")?;
    p.say(
        "Enter your professional summary (a few sentences). \
         Press Ctrl+D (Unix) or Ctrl+Z (Windows) then Enter when done.",
    )?;
    Ok(p.free_text()?.join(" "))
}

/// Collects one comma-separated line per fixed category. A category is
/// present only if the line was non-empty; pieces are trimmed but empty
/// pieces (a trailing comma) are kept.
pub fn technical_skills<R: BufRead, W: Write>(
    p: &mut Prompter<R, W>,
) -> Result<Vec<SkillGroup>, AppError> {
    p.banner("Technical Skills")?;
    let mut groups = Vec::new();
    for category in SKILL_CATEGORIES {
        let line = p.field(&format!("{category} (comma-separated)"))?;
        if line.is_empty() {
            continue;
        }
        groups.push(SkillGroup {
            label: category.to_string(),
            skills: line.split(',').map(|s| s.trim().to_string()).collect(),
        });
    }
    Ok(groups)
}

// ────────────────────────────────────────────────────────────────────────────
// Repeated-entry sections
// ────────────────────────────────────────────────────────────────────────────

pub fn experience<R: BufRead, W: Write>(
    p: &mut Prompter<R, W>,
) -> Result<Vec<ExperienceEntry>, AppError> {
    p.banner("Work Experience")?;
    experience_entries(
        p,
        "\nAdding a new work experience entry (or press Enter on the role to skip):",
        "Company Name",
        "Start Date (e.g., May 2025)",
        "End Date (e.g., Present)",
    )
}

pub fn internships<R: BufRead, W: Write>(
    p: &mut Prompter<R, W>,
) -> Result<Vec<ExperienceEntry>, AppError> {
    p.banner("Internships")?;
    experience_entries(
        p,
        "\nAdding a new internship entry (or press Enter on the role to skip):",
        "Company/Program Name",
        "Start Date (e.g., May 2021)",
        "End Date (e.g., August 2021)",
    )
}

/// Shared loop for the two role-keyed sections. Field order is fixed:
/// role, company, start date, end date, description.
fn experience_entries<R: BufRead, W: Write>(
    p: &mut Prompter<R, W>,
    lead_in: &str,
    company_label: &str,
    start_label: &str,
    end_label: &str,
) -> Result<Vec<ExperienceEntry>, AppError> {
    let mut entries = Vec::new();
    loop {
        p.say(lead_in)?;
        let role = p.field("Role/Title")?;
        if SectionState::after(&role) == SectionState::Terminated {
            break;
        }
        entries.push(ExperienceEntry {
            role,
            company: p.field(company_label)?,
            start_date: p.field(start_label)?,
            end_date: p.field(end_label)?,
            description: p.bullet_list("responsibilities/achievements")?,
        });
    }
    Ok(entries)
}

pub fn education<R: BufRead, W: Write>(
    p: &mut Prompter<R, W>,
) -> Result<Vec<EducationEntry>, AppError> {
    p.banner("Education")?;
    let mut entries = Vec::new();
    loop {
        p.say("\nAdding a new education entry (or press Enter on the university name to skip):")?;
        let university = p.field("University/Board")?;
        if SectionState::after(&university) == SectionState::Terminated {
            break;
        }
        entries.push(EducationEntry {
            university,
            degree: p.field("Degree (e.g., B.E. in ECE)")?,
            gpa: p.field("GPA/Percentage (e.g., CGPA: 7.1)")?,
            start_date: p.field("Start Date (e.g., September 2018)")?,
            end_date: p.field("End Date (e.g., June 2022)")?,
        });
    }
    Ok(entries)
}

pub fn projects<R: BufRead, W: Write>(
    p: &mut Prompter<R, W>,
) -> Result<Vec<ProjectEntry>, AppError> {
    p.banner("Projects")?;
    let mut entries = Vec::new();
    loop {
        p.say("\nAdding a new project entry (or press Enter on the title to skip):")?;
        let title = p.field("Project Title")?;
        if SectionState::after(&title) == SectionState::Terminated {
            break;
        }
        entries.push(ProjectEntry {
            title,
            tech: p.field("Technologies used")?,
            date: p.field("Date (e.g., January 2025)")?,
            description: p.bullet_list("description points")?,
        });
    }
    Ok(entries)
}

pub fn publications<R: BufRead, W: Write>(
    p: &mut Prompter<R, W>,
) -> Result<Vec<PublicationEntry>, AppError> {
    p.banner("Publications")?;
    let mut entries = Vec::new();
    loop {
        p.say("\nAdding a new publication entry (or press Enter on the title to skip):")?;
        let title = p.field("Publication Title")?;
        if SectionState::after(&title) == SectionState::Terminated {
            break;
        }
        entries.push(PublicationEntry {
            title,
            url: p.field("URL to the publication")?,
            venue: p.field("Venue/Journal (e.g., ISSN: 2582-8436)")?,
            date: p.field("Date (e.g., June 2022)")?,
            description: p.bullet_list("description points")?,
        });
    }
    Ok(entries)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
