//! Skill-gap analysis for a pasted job description.
//!
//! The analysis itself is a fixture. The job description only has to be
//! non-empty to reveal it; its text is never inspected.

use serde::Serialize;

use crate::errors::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillStatus {
    /// Proficiency meets or exceeds the requirement.
    Strong,
    /// Has the skill but below the required level.
    Weak,
    Missing,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequiredSkill {
    pub skill: &'static str,
    pub has_skill: bool,
    pub proficiency: u32,
    pub required: u32,
    pub status: SkillStatus,
}

impl RequiredSkill {
    fn new(skill: &'static str, has_skill: bool, proficiency: u32, required: u32) -> Self {
        Self {
            skill,
            has_skill,
            proficiency,
            required,
            status: classify(has_skill, proficiency, required),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct KeywordCoverage {
    pub matched: Vec<&'static str>,
    pub missing: Vec<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillGapAnalysis {
    pub required_skills: Vec<RequiredSkill>,
    pub keywords: KeywordCoverage,
    pub overall_match: u32,
    pub critical_gaps: u32,
}

pub fn classify(has_skill: bool, proficiency: u32, required: u32) -> SkillStatus {
    if !has_skill {
        SkillStatus::Missing
    } else if proficiency >= required {
        SkillStatus::Strong
    } else {
        SkillStatus::Weak
    }
}

/// Reveals the mock analysis once a non-empty job description is supplied.
pub fn analyze(job_description: &str) -> Result<SkillGapAnalysis, AppError> {
    if job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "jobDescription cannot be empty".to_string(),
        ));
    }

    Ok(SkillGapAnalysis {
        required_skills: vec![
            RequiredSkill::new("React.js", true, 85, 90),
            RequiredSkill::new("Node.js", true, 70, 80),
            RequiredSkill::new("TypeScript", false, 0, 75),
            RequiredSkill::new("AWS", false, 0, 70),
            RequiredSkill::new("Docker", false, 0, 65),
            RequiredSkill::new("GraphQL", true, 60, 70),
            RequiredSkill::new("Jest Testing", true, 75, 80),
            RequiredSkill::new("MongoDB", true, 80, 75),
        ],
        keywords: KeywordCoverage {
            matched: vec!["JavaScript", "React", "Frontend", "API", "Git"],
            missing: vec!["Microservices", "CI/CD", "Kubernetes", "Agile", "Scrum"],
        },
        overall_match: 68,
        critical_gaps: 3,
    })
}
