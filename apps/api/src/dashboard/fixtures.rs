//! Mock datasets rendered by the dashboard. Every number here is a fixture;
//! nothing is computed from the user's actual resume or profiles.

use serde::Serialize;

// ────────────────────────────────────────────────────────────────────────────
// Score classification
// ────────────────────────────────────────────────────────────────────────────

/// Colour band for a 0–100 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreBand {
    Success,
    Warning,
    Destructive,
}

impl ScoreBand {
    /// Dashboard scores: ≥ 80 success, ≥ 60 warning.
    pub fn for_score(score: u32) -> Self {
        Self::with_thresholds(score, 80, 60)
    }

    /// Placement probabilities: ≥ 75 success, ≥ 60 warning.
    pub fn for_probability(probability: u32) -> Self {
        Self::with_thresholds(probability, 75, 60)
    }

    fn with_thresholds(value: u32, success: u32, warning: u32) -> Self {
        if value >= success {
            ScoreBand::Success
        } else if value >= warning {
            ScoreBand::Warning
        } else {
            ScoreBand::Destructive
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Score {
    pub value: u32,
    pub band: ScoreBand,
}

impl Score {
    pub fn new(value: u32) -> Self {
        Self {
            value,
            band: ScoreBand::for_score(value),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Overview
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Critical,
    High,
    Medium,
}

#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    pub priority: Priority,
    pub message: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Overview {
    pub ats_score: Score,
    pub profile_strength: Score,
    pub job_fit_score: Score,
    pub skills_matched: u32,
    pub skills_total: u32,
    pub keyword_matches: Score,
    pub recommendations: Vec<Recommendation>,
}

pub fn overview() -> Overview {
    Overview {
        ats_score: Score::new(87),
        profile_strength: Score::new(92),
        job_fit_score: Score::new(78),
        skills_matched: 15,
        skills_total: 20,
        keyword_matches: Score::new(68),
        recommendations: vec![
            Recommendation {
                priority: Priority::Critical,
                message: "Add contact information to resume header",
            },
            Recommendation {
                priority: Priority::High,
                message: "Include React certification",
            },
            Recommendation {
                priority: Priority::Medium,
                message: "Improve LinkedIn summary",
            },
        ],
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Charts
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillPoint {
    pub skill: &'static str,
    pub current: u32,
    pub target: u32,
    pub full_mark: u32,
}

pub fn skill_radar() -> Vec<SkillPoint> {
    [
        ("Frontend", 85, 95),
        ("Backend", 70, 85),
        ("Database", 65, 80),
        ("DevOps", 45, 70),
        ("Testing", 60, 80),
        ("UI/UX", 80, 85),
    ]
    .into_iter()
    .map(|(skill, current, target)| SkillPoint {
        skill,
        current,
        target,
        full_mark: 100,
    })
    .collect()
}

#[derive(Debug, Clone, Serialize)]
pub struct KeywordPoint {
    pub keyword: &'static str,
    pub matched: u32,
    pub total: u32,
    pub percentage: u32,
}

pub fn keyword_match() -> Vec<KeywordPoint> {
    [
        ("React", 8),
        ("JavaScript", 9),
        ("TypeScript", 6),
        ("Node.js", 5),
        ("Python", 3),
        ("AWS", 4),
        ("Docker", 7),
        ("Git", 9),
    ]
    .into_iter()
    .map(|(keyword, matched)| KeywordPoint {
        keyword,
        matched,
        total: 10,
        percentage: matched * 10,
    })
    .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Gamification
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    Bronze,
    Silver,
    Gold,
    Platinum,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileLevel {
    pub current: u32,
    pub next_level: u32,
    pub progress: u32,
    pub total_xp: u32,
    pub next_level_xp: u32,
    pub title: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Badge {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub earned: bool,
    pub rarity: Rarity,
    pub xp: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct Achievement {
    pub name: &'static str,
    pub date: &'static str,
    pub xp: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct LeaderboardEntry {
    pub rank: u32,
    pub name: &'static str,
    pub level: u32,
    pub xp: u32,
    pub title: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Gamification {
    pub level: ProfileLevel,
    pub badges: Vec<Badge>,
    pub earned_badges: usize,
    pub earned_xp: u32,
    pub achievements: Vec<Achievement>,
    pub leaderboard: Vec<LeaderboardEntry>,
}

pub fn gamification() -> Gamification {
    let badges = vec![
        Badge {
            id: "resume-master",
            name: "Resume Master",
            description: "ATS score above 85%",
            earned: true,
            rarity: Rarity::Gold,
            xp: 150,
        },
        Badge {
            id: "github-active",
            name: "Code Warrior",
            description: "10+ GitHub repositories",
            earned: true,
            rarity: Rarity::Silver,
            xp: 100,
        },
        Badge {
            id: "skill-diverse",
            name: "Skill Collector",
            description: "Master 15+ technologies",
            earned: true,
            rarity: Rarity::Bronze,
            xp: 75,
        },
        Badge {
            id: "linkedin-pro",
            name: "Network Builder",
            description: "500+ LinkedIn connections",
            earned: false,
            rarity: Rarity::Silver,
            xp: 125,
        },
        Badge {
            id: "interview-ready",
            name: "Interview Ace",
            description: "Complete 10 mock interviews",
            earned: false,
            rarity: Rarity::Gold,
            xp: 200,
        },
        Badge {
            id: "placement-success",
            name: "Job Hunter",
            description: "Score 90%+ job fit",
            earned: false,
            rarity: Rarity::Platinum,
            xp: 300,
        },
    ];

    let earned: Vec<&Badge> = badges.iter().filter(|b| b.earned).collect();
    let earned_badges = earned.len();
    let earned_xp = earned.iter().map(|b| b.xp).sum();

    Gamification {
        level: ProfileLevel {
            current: 3,
            next_level: 4,
            progress: 68,
            total_xp: 2680,
            next_level_xp: 3000,
            title: "Rising Developer",
        },
        badges,
        earned_badges,
        earned_xp,
        achievements: vec![
            Achievement {
                name: "First Resume Upload",
                date: "2 days ago",
                xp: 50,
            },
            Achievement {
                name: "GitHub Connected",
                date: "1 day ago",
                xp: 75,
            },
            Achievement {
                name: "Skills Analysis Complete",
                date: "6 hours ago",
                xp: 100,
            },
        ],
        leaderboard: vec![
            LeaderboardEntry {
                rank: 1,
                name: "Alex Chen",
                level: 7,
                xp: 5420,
                title: "Elite Developer",
            },
            LeaderboardEntry {
                rank: 2,
                name: "Sarah Kim",
                level: 6,
                xp: 4890,
                title: "Senior Analyst",
            },
            LeaderboardEntry {
                rank: 3,
                name: "You",
                level: 3,
                xp: 2680,
                title: "Rising Developer",
            },
            LeaderboardEntry {
                rank: 4,
                name: "Mike Ross",
                level: 3,
                xp: 2340,
                title: "Rising Developer",
            },
            LeaderboardEntry {
                rank: 5,
                name: "Emma Liu",
                level: 2,
                xp: 1890,
                title: "Career Starter",
            },
        ],
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tabs
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct ResumeSection {
    pub name: &'static str,
    pub score: u32,
    pub status: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeAnalysis {
    pub ats_score: Score,
    pub sections: Vec<ResumeSection>,
    pub keywords: Vec<&'static str>,
    pub recommendations: Vec<&'static str>,
}

pub fn resume_analysis() -> ResumeAnalysis {
    ResumeAnalysis {
        ats_score: Score::new(87),
        sections: vec![
            ResumeSection {
                name: "Contact Info",
                score: 100,
                status: "complete",
            },
            ResumeSection {
                name: "Professional Summary",
                score: 85,
                status: "good",
            },
            ResumeSection {
                name: "Work Experience",
                score: 90,
                status: "complete",
            },
            ResumeSection {
                name: "Skills",
                score: 75,
                status: "needs-work",
            },
            ResumeSection {
                name: "Education",
                score: 100,
                status: "complete",
            },
        ],
        keywords: vec!["React", "JavaScript", "Node.js", "Python", "AWS"],
        recommendations: vec![
            "Add more quantified achievements",
            "Include relevant certifications",
            "Optimize keywords for ATS",
        ],
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Repo {
    pub name: &'static str,
    pub stars: u32,
    pub language: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GithubAnalysis {
    pub repos: u32,
    pub stars: u32,
    pub commits: u32,
    pub languages: Vec<&'static str>,
    pub top_repos: Vec<Repo>,
}

pub fn github_analysis() -> GithubAnalysis {
    GithubAnalysis {
        repos: 24,
        stars: 156,
        commits: 342,
        languages: vec!["JavaScript", "TypeScript", "Python", "Go"],
        top_repos: vec![
            Repo {
                name: "react-dashboard",
                stars: 45,
                language: "TypeScript",
            },
            Repo {
                name: "api-gateway",
                stars: 23,
                language: "Node.js",
            },
            Repo {
                name: "ml-toolkit",
                stars: 18,
                language: "Python",
            },
        ],
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkedinAnalysis {
    pub connections: u32,
    pub profile_views: u32,
    pub post_engagement: u32,
    pub recommendations: u32,
    pub skills: Vec<&'static str>,
    pub strengths: Vec<&'static str>,
}

pub fn linkedin_analysis() -> LinkedinAnalysis {
    LinkedinAnalysis {
        connections: 340,
        profile_views: 125,
        post_engagement: 89,
        recommendations: 8,
        skills: vec!["JavaScript", "React", "Node.js", "Python", "AWS"],
        strengths: vec![
            "Strong professional network",
            "Regular content engagement",
            "Industry-relevant skills",
        ],
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct JobMatch {
    pub role: &'static str,
    #[serde(rename = "match")]
    pub match_score: u32,
    pub company: &'static str,
    pub salary: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobFit {
    pub top_matches: Vec<JobMatch>,
    pub skill_gaps: Vec<&'static str>,
}

pub fn job_fit() -> JobFit {
    JobFit {
        top_matches: vec![
            JobMatch {
                role: "Frontend Developer",
                match_score: 92,
                company: "Tech Startup",
                salary: "$75-90k",
            },
            JobMatch {
                role: "Full Stack Developer",
                match_score: 87,
                company: "Mid-size Company",
                salary: "$80-95k",
            },
            JobMatch {
                role: "React Developer",
                match_score: 89,
                company: "Enterprise",
                salary: "$85-100k",
            },
        ],
        skill_gaps: vec![
            "AWS Certification needed",
            "Docker experience recommended",
            "Unit testing skills",
        ],
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PlacementFactors {
    pub ats: u32,
    pub skills: u32,
    pub github: u32,
    pub linkedin: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct Prediction {
    pub role: &'static str,
    pub probability: u32,
    pub band: ScoreBand,
    pub company: &'static str,
    pub factors: PlacementFactors,
    pub recommendations: Vec<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Placement {
    pub overall_probability: u32,
    pub overall_band: ScoreBand,
    pub predictions: Vec<Prediction>,
}

pub fn placement() -> Placement {
    let prediction = |role, probability, company, skills, github, recommendations| Prediction {
        role,
        probability,
        band: ScoreBand::for_probability(probability),
        company,
        factors: PlacementFactors {
            ats: 87,
            skills,
            github,
            linkedin: 82,
        },
        recommendations,
    };

    Placement {
        overall_probability: 74,
        overall_band: ScoreBand::for_probability(74),
        predictions: vec![
            prediction(
                "Frontend Developer Internship",
                72,
                "Tech Startups",
                78,
                65,
                vec!["Add 2 more React projects", "Complete JavaScript certification"],
            ),
            prediction(
                "Full Stack Developer",
                68,
                "Mid-size Companies",
                68,
                70,
                vec!["Learn backend frameworks", "Improve database skills"],
            ),
            prediction(
                "Software Engineer Trainee",
                85,
                "Large Enterprises",
                82,
                75,
                vec!["Strong profile", "Add system design projects"],
            ),
        ],
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeProfile {
    pub name: &'static str,
    pub ats_score: u32,
    pub sections: u32,
    pub keywords: u32,
    pub experience: &'static str,
    pub skills: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct ComparisonRow {
    pub category: &'static str,
    pub current: u32,
    pub target: u32,
    /// `target - current`; negative means above the standard.
    pub gap: i32,
    pub status: &'static str,
    pub note: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResumeComparison {
    pub current: ResumeProfile,
    pub target: ResumeProfile,
    pub rows: Vec<ComparisonRow>,
}

pub fn resume_comparison() -> ResumeComparison {
    let row = |category, current: u32, target: u32, status, note| ComparisonRow {
        category,
        current,
        target,
        gap: target as i32 - current as i32,
        status,
        note,
    };

    ResumeComparison {
        current: ResumeProfile {
            name: "Your Resume",
            ats_score: 87,
            sections: 8,
            keywords: 24,
            experience: "2 years",
            skills: 15,
        },
        target: ResumeProfile {
            name: "Industry Standard",
            ats_score: 92,
            sections: 10,
            keywords: 32,
            experience: "2+ years",
            skills: 18,
        },
        rows: vec![
            row("ATS Compatibility", 87, 92, "good", "Add more industry keywords"),
            row(
                "Skills Section",
                75,
                90,
                "needs-improvement",
                "Include 3 more technical skills",
            ),
            row("Experience Format", 95, 95, "excellent", "Perfect formatting"),
            row("Education Section", 90, 85, "excellent", "Above standard"),
            row("Projects Section", 80, 88, "good", "Add quantified achievements"),
        ],
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct InterviewCategory {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub count: u32,
    pub difficulty: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewQuestion {
    pub question: &'static str,
    pub difficulty: &'static str,
    pub category: &'static str,
    pub hint: &'static str,
    pub expected_answer: &'static str,
}

pub fn interview_categories() -> Vec<InterviewCategory> {
    vec![
        InterviewCategory {
            id: "technical",
            name: "Technical Questions",
            description: "Based on your skills and projects",
            count: 12,
            difficulty: "Mixed",
        },
        InterviewCategory {
            id: "behavioral",
            name: "Behavioral Questions",
            description: "Soft skills and experience-based",
            count: 8,
            difficulty: "Medium",
        },
        InterviewCategory {
            id: "company",
            name: "Company-Specific",
            description: "Role and industry focused",
            count: 6,
            difficulty: "High",
        },
    ]
}

/// Mock questions for a category id, or `None` for an unknown category.
pub fn interview_questions(category: &str) -> Option<Vec<InterviewQuestion>> {
    let questions = match category {
        "technical" => vec![
            InterviewQuestion {
                question: "Explain the concept of React hooks and how you've used useState and useEffect in your projects.",
                difficulty: "Medium",
                category: "React",
                hint: "Mention your GitHub projects that use hooks",
                expected_answer: "Discuss functional components, state management, and lifecycle methods",
            },
            InterviewQuestion {
                question: "How would you optimize the performance of a React application?",
                difficulty: "Hard",
                category: "Performance",
                hint: "Think about code splitting, memoization, and bundling",
                expected_answer: "Cover React.memo, useMemo, lazy loading, and bundle analysis",
            },
            InterviewQuestion {
                question: "Describe your experience with RESTful APIs and how you handle error responses.",
                difficulty: "Medium",
                category: "API Integration",
                hint: "Reference your backend projects",
                expected_answer: "Discuss HTTP methods, status codes, and error handling strategies",
            },
        ],
        "behavioral" => vec![
            InterviewQuestion {
                question: "Tell me about a challenging project you worked on and how you overcame obstacles.",
                difficulty: "Medium",
                category: "Problem Solving",
                hint: "Use your GitHub projects as examples",
                expected_answer: "Use STAR method - Situation, Task, Action, Result",
            },
            InterviewQuestion {
                question: "How do you stay updated with the latest technology trends?",
                difficulty: "Easy",
                category: "Learning",
                hint: "Mention your continuous learning approach",
                expected_answer: "Discuss blogs, documentation, courses, and hands-on practice",
            },
        ],
        "company" => vec![InterviewQuestion {
            question: "Why are you interested in a frontend developer position at our company?",
            difficulty: "Medium",
            category: "Motivation",
            hint: "Connect your skills with company needs",
            expected_answer: "Show research about the company and align with career goals",
        }],
        _ => return None,
    };
    Some(questions)
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportExport {
    pub id: &'static str,
    pub label: &'static str,
}

pub fn report_exports() -> Vec<ReportExport> {
    vec![
        ReportExport {
            id: "career-report",
            label: "Download Complete Report (PDF)",
        },
        ReportExport {
            id: "interview-kit",
            label: "Generate Interview Kit",
        },
        ReportExport {
            id: "skills-summary",
            label: "Skills Summary",
        },
        ReportExport {
            id: "ats-report",
            label: "ATS Report",
        },
        ReportExport {
            id: "resume-tips",
            label: "Resume Tips",
        },
    ]
}
