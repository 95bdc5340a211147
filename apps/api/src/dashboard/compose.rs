//! Page composition: which sections and tabs render for the current `UploadedData`.

use serde::Serialize;

use crate::models::upload::UploadedData;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Section {
    Hero,
    UploadConnect,
    Dashboard,
    Gamification,
    DetailedTabs,
    Reports,
    AiMentor,
    About,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TabId {
    Resume,
    Github,
    Linkedin,
    JobFit,
    Placement,
    MockInterview,
    SkillGap,
    Compare,
    Reports,
}

impl TabId {
    pub const ALL: [TabId; 9] = [
        TabId::Resume,
        TabId::Github,
        TabId::Linkedin,
        TabId::JobFit,
        TabId::Placement,
        TabId::MockInterview,
        TabId::SkillGap,
        TabId::Compare,
        TabId::Reports,
    ];

    pub fn parse(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tab| tab.id() == id)
    }

    pub fn id(self) -> &'static str {
        match self {
            TabId::Resume => "resume",
            TabId::Github => "github",
            TabId::Linkedin => "linkedin",
            TabId::JobFit => "job-fit",
            TabId::Placement => "placement",
            TabId::MockInterview => "mock-interview",
            TabId::SkillGap => "skill-gap",
            TabId::Compare => "compare",
            TabId::Reports => "reports",
        }
    }

    fn label(self) -> &'static str {
        match self {
            TabId::Resume => "Resume",
            TabId::Github => "GitHub",
            TabId::Linkedin => "LinkedIn",
            TabId::JobFit => "Job Fit",
            TabId::Placement => "Placement",
            TabId::MockInterview => "Mock Interview",
            TabId::SkillGap => "Skill Gap",
            TabId::Compare => "Compare",
            TabId::Reports => "Reports",
        }
    }

    fn description(self) -> &'static str {
        match self {
            TabId::Resume => "ATS analysis and optimization",
            TabId::Github => "Code analysis and activity",
            TabId::Linkedin => "Professional network insights",
            TabId::JobFit => "Role matching and recommendations",
            TabId::Placement => "Placement probability by role",
            TabId::MockInterview => "Personalized interview practice",
            TabId::SkillGap => "Compare your skills to a job description",
            TabId::Compare => "Your resume against the industry standard",
            TabId::Reports => "Export analysis reports",
        }
    }

    pub fn is_available(self, data: &UploadedData) -> bool {
        match self {
            TabId::Resume => data.has_resume(),
            TabId::Github => data.has_github(),
            TabId::Linkedin => data.has_linkedin(),
            _ => true,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TabView {
    pub id: TabId,
    pub label: &'static str,
    pub description: &'static str,
    pub available: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageLayout {
    pub has_any_data: bool,
    pub sections: Vec<Section>,
    pub tabs: Vec<TabView>,
    /// First available tab, used as the initially selected one.
    pub default_tab: Option<TabId>,
}

pub fn compose_page(data: &UploadedData) -> PageLayout {
    let has_any_data = data.has_any();

    let mut sections = vec![Section::Hero, Section::UploadConnect];
    if has_any_data {
        sections.extend([
            Section::Dashboard,
            Section::Gamification,
            Section::DetailedTabs,
            Section::Reports,
        ]);
    }
    sections.extend([Section::AiMentor, Section::About]);

    let tabs: Vec<TabView> = if has_any_data {
        TabId::ALL
            .into_iter()
            .map(|id| TabView {
                id,
                label: id.label(),
                description: id.description(),
                available: id.is_available(data),
            })
            .collect()
    } else {
        Vec::new()
    };
    let default_tab = tabs.iter().find(|t| t.available).map(|t| t.id);

    PageLayout {
        has_any_data,
        sections,
        tabs,
        default_tab,
    }
}
