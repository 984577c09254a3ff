//! Interactive data collection.
//!
//! Flow: personal info → summary → technical skills → experience →
//! internships → education → projects → publications.
//!
//! Each step blocks on the input source until the user answers; nothing is
//! validated beyond the sentinel checks, and the finished record is returned
//! by value.

pub mod prompter;
pub mod sections;

use std::io::{BufRead, Write};

use tracing::debug;

use crate::collect::prompter::Prompter;
use crate::errors::AppError;
use crate::models::resume::Resume;

/// Runs every collection step in the fixed section order and returns the
/// finished record.
pub fn collect_resume<R: BufRead, W: Write>(input: R, output: W) -> Result<Resume, AppError> {
    let mut p = Prompter::new(input, output);

    let mut resume = sections::personal_info(&mut p)?;
    resume.summary = sections::summary(&mut p)?;
    resume.technical_skills = sections::technical_skills(&mut p)?;
    resume.experience = sections::experience(&mut p)?;
    resume.internships = sections::internships(&mut p)?;
    resume.education = sections::education(&mut p)?;
    resume.projects = sections::projects(&mut p)?;
    resume.publications = sections::publications(&mut p)?;

    debug!(
        "collected resume: {} experience, {} internships, {} education, {} projects, {} publications",
        resume.experience.len(),
        resume.internships.len(),
        resume.education.len(),
        resume.projects.len(),
        resume.publications.len(),
    );
    Ok(resume)
}
