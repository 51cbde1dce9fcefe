//! Static portfolio content.
//!
//! Read-only data consumed by the view machines: personal info, skills,
//! projects, experience slides, typing phrases and navigation. The built-in
//! document is [`Portfolio::builtin`]; a JSON document with the same schema
//! can replace it via [`Portfolio::from_json`].

use serde::{Deserialize, Serialize};

use crate::error::ContentError;

/// Category excluded from the skills marquee.
pub const CORE_CONCEPTS: &str = "Core Concepts";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub name: String,
    pub location: String,
    pub phone: String,
    pub email: String,
    pub linkedin: String,
    pub github: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub name: String,
    pub skills: Vec<String>,
}

/// Icon shown on an orbital timeline node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectIcon {
    Brain,
    Smartphone,
    Database,
    Zap,
    Globe,
}

impl ProjectIcon {
    pub fn glyph(&self) -> &'static str {
        match self {
            ProjectIcon::Brain => "🧠",
            ProjectIcon::Smartphone => "📱",
            ProjectIcon::Database => "🗄",
            ProjectIcon::Zap => "⚡",
            ProjectIcon::Globe => "🌐",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    Completed,
    InProgress,
    Pending,
}

impl ProjectStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ProjectStatus::Completed => "COMPLETE",
            ProjectStatus::InProgress => "IN PROGRESS",
            ProjectStatus::Pending => "PENDING",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            ProjectStatus::Completed => "status-completed",
            ProjectStatus::InProgress => "status-in-progress",
            ProjectStatus::Pending => "status-pending",
        }
    }
}

/// A project shown as a node of the orbital timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub date: String,
    pub content: String,
    pub category: String,
    pub icon: ProjectIcon,
    #[serde(default)]
    pub related_ids: Vec<u32>,
    pub status: ProjectStatus,
    /// 0 to 100.
    pub energy: u8,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub live_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceSlide {
    pub id: u32,
    pub company: String,
    pub position: String,
    pub duration: String,
    pub location: String,
    pub description: String,
    pub achievements: Vec<String>,
    pub technologies: Vec<String>,
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallToActionSlide {
    pub id: u32,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub skills: Vec<String>,
    pub availability: String,
}

/// A panel of the experience carousel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Slide {
    Experience(ExperienceSlide),
    Hiring(CallToActionSlide),
}

impl Slide {
    pub fn id(&self) -> u32 {
        match self {
            Slide::Experience(slide) => slide.id,
            Slide::Hiring(slide) => slide.id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
    pub institution: String,
    pub degree: String,
    pub duration: String,
    pub status: String,
    #[serde(default)]
    pub gpa: Option<String>,
}

/// A navigation entry pointing at a page section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    pub id: String,
    pub label: String,
    pub href: String,
}

impl NavItem {
    pub fn new(id: &str, label: &str) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            href: format!("#{id}"),
        }
    }

    /// Element id targeted by the href. Must equal the item's own id, which
    /// names the section everywhere else.
    pub fn anchor(&self) -> Result<&str, ContentError> {
        let anchor = anchor_of(&self.href)?;
        if anchor != self.id {
            return Err(ContentError::AnchorMismatch {
                id: self.id.clone(),
                href: self.href.clone(),
            });
        }
        Ok(anchor)
    }
}

/// Strips the leading `#` of an in-page href.
pub fn anchor_of(href: &str) -> Result<&str, ContentError> {
    match href.strip_prefix('#') {
        Some(id) if !id.is_empty() => Ok(id),
        _ => Err(ContentError::InvalidHref(href.to_string())),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialKind {
    GitHub,
    LinkedIn,
    Email,
    Phone,
    Location,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialLink {
    pub kind: SocialKind,
    pub label: String,
    pub href: String,
}

impl SocialLink {
    /// `mailto:`/`tel:` links stay in the current context.
    pub fn opens_new_context(&self) -> bool {
        !matches!(self.kind, SocialKind::Email | SocialKind::Phone)
    }

    pub fn glyph(&self) -> &'static str {
        match self.kind {
            SocialKind::GitHub => "GH",
            SocialKind::LinkedIn => "in",
            SocialKind::Email => "✉",
            SocialKind::Phone => "☎",
            SocialKind::Location => "⌖",
        }
    }
}

/// The whole site's content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Portfolio {
    /// Prefix of session storage keys.
    pub app_id: String,
    pub personal: PersonalInfo,
    pub phrases: Vec<String>,
    pub skills: Vec<SkillCategory>,
    pub projects: Vec<Project>,
    pub slides: Vec<Slide>,
    pub education: Education,
    pub certifications: Vec<String>,
    pub summary: String,
    pub key_achievements: Vec<String>,
    pub navigation: Vec<NavItem>,
    pub resume_file_name: String,
}

impl Portfolio {
    /// Parses and validates a JSON content document.
    pub fn from_json(text: &str) -> Result<Self, ContentError> {
        let portfolio: Portfolio =
            serde_json::from_str(text).map_err(|e| ContentError::Malformed(e.to_string()))?;
        portfolio.validate()?;
        Ok(portfolio)
    }

    pub fn to_json(&self) -> Result<String, ContentError> {
        serde_json::to_string_pretty(self).map_err(|e| ContentError::Malformed(e.to_string()))
    }

    /// Checks the invariants the view machines rely on.
    pub fn validate(&self) -> Result<(), ContentError> {
        if self.phrases.is_empty() {
            return Err(ContentError::EmptyPhrases);
        }
        if self.slides.is_empty() {
            return Err(ContentError::EmptySlides);
        }
        if self.navigation.is_empty() {
            return Err(ContentError::EmptyNavigation);
        }
        for item in &self.navigation {
            item.anchor()?;
        }
        Ok(())
    }

    /// Element ids of the navigation targets, top to bottom.
    pub fn section_ids(&self) -> Vec<String> {
        self.navigation.iter().map(|item| item.id.clone()).collect()
    }

    /// Skills shown in the marquee rows, in category order.
    pub fn marquee_skills(&self) -> Vec<&str> {
        self.skills
            .iter()
            .filter(|category| category.name != CORE_CONCEPTS)
            .flat_map(|category| category.skills.iter().map(String::as_str))
            .collect()
    }

    pub fn social_links(&self) -> Vec<SocialLink> {
        let p = &self.personal;
        vec![
            SocialLink {
                kind: SocialKind::GitHub,
                label: "GitHub".to_string(),
                href: p.github.clone(),
            },
            SocialLink {
                kind: SocialKind::LinkedIn,
                label: "LinkedIn".to_string(),
                href: p.linkedin.clone(),
            },
            SocialLink {
                kind: SocialKind::Email,
                label: "Email".to_string(),
                href: format!("mailto:{}", p.email),
            },
            SocialLink {
                kind: SocialKind::Phone,
                label: "Phone".to_string(),
                href: format!("tel:{}", p.phone),
            },
            SocialLink {
                kind: SocialKind::Location,
                label: p.location.clone(),
                href: "#".to_string(),
            },
        ]
    }

    pub fn project(&self, id: u32) -> Option<&Project> {
        self.projects.iter().find(|project| project.id == id)
    }

    pub fn builtin() -> Self {
        Self {
            app_id: "arnav-portfolio".to_string(),
            personal: PersonalInfo {
                name: "Arnav Gupta".to_string(),
                location: "Ghaziabad, UP".to_string(),
                phone: "+91-7452027990".to_string(),
                email: "arnavguptamodinagar@gmail.com".to_string(),
                linkedin: "https://linkedin.com/in/arnav-gupta-8351641b6".to_string(),
                github: "https://github.com/arnavgupta27".to_string(),
            },
            phrases: strings(&[
                "Software Developer",
                "Full Stack Engineer",
                "AI/ML Enthusiast",
                "Student",
            ]),
            skills: vec![
                category(
                    "Programming Languages",
                    &["C++", "JavaScript", "SQL", "Python", "Kotlin"],
                ),
                category(
                    "Frontend Development",
                    &["HTML", "CSS", "React.js", "Next.js", "Tailwind CSS"],
                ),
                category(
                    "Backend Development",
                    &["Node.js", "Express.js", "REST APIs", "GraphQL", "Socket.io"],
                ),
                category(
                    "Mobile & Embedded",
                    &["Android Automotive OS", "Jetpack", "Android Studio"],
                ),
                category(
                    "Machine Learning",
                    &[
                        "Machine Learning",
                        "Real-Time KPI Graphing",
                        "Scikit-learn",
                        "Ollama",
                        "Artificial Intelligence",
                        "Model Finetuning",
                    ],
                ),
                category("Databases", &["MongoDB", "MySQL"]),
                category("DevOps & Testing", &["Kubernetes", "Selenium", "AWS Lambda"]),
                category("Tools & Platforms", &["Git", "GitHub", "Linux", "WebSockets", "Flask"]),
                category(
                    CORE_CONCEPTS,
                    &["DSA", "OOP", "SDLC", "System Design", "Agile", "TDD", "SDV"],
                ),
            ],
            projects: builtin_projects(),
            slides: builtin_slides(),
            education: Education {
                institution: "Indian Institute of Information Technology, Sonepat".to_string(),
                degree: "B.Tech in Computer Science Engineering".to_string(),
                duration: "Nov 2022 – Nov 2026".to_string(),
                status: "Third Year Student".to_string(),
                gpa: None,
            },
            certifications: strings(&["Full-Stack MERN Development – Pregrad"]),
            summary: "Dedicated third-year engineering student with strong foundation in software \
                      development, specializing in full-stack technologies like JavaScript, React, \
                      and Node.js. Experienced in cloud computing with AWS and actively exploring \
                      machine learning applications and Mobile development using Kotlin and \
                      Android Studio."
                .to_string(),
            key_achievements: strings(&[
                "Built and maintained several GitHub repositories showcasing full-stack development",
                "Active participant in coding competitions",
                "Completed Full-Stack MERN Development certification",
            ]),
            navigation: vec![
                NavItem::new("home", "Home"),
                NavItem::new("skills", "Skills"),
                NavItem::new("projects", "Projects"),
                NavItem::new("experience", "Experience"),
                NavItem::new("contact", "Contact"),
            ],
            resume_file_name: "arnavresumeLatest.pdf".to_string(),
        }
    }
}

impl Default for Portfolio {
    fn default() -> Self {
        Self::builtin()
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn category(name: &str, skills: &[&str]) -> SkillCategory {
    SkillCategory {
        name: name.to_string(),
        skills: strings(skills),
    }
}

fn builtin_projects() -> Vec<Project> {
    let gh = |repo: &str| Some(format!("https://github.com/arnavgupta27/{repo}"));
    vec![
        Project {
            id: 1,
            title: "EV Battery Predictor".to_string(),
            date: "2024".to_string(),
            content: "ML-powered API for electric vehicle battery life prediction and convoy route \
                      optimization using Python and Flask."
                .to_string(),
            category: "Machine Learning".to_string(),
            icon: ProjectIcon::Brain,
            related_ids: vec![2, 4],
            status: ProjectStatus::Completed,
            energy: 100,
            github_url: gh("Elevation-based-EV-Battery-Usage-Prediction-Convoy-Recommendation-API"),
            live_url: None,
        },
        Project {
            id: 2,
            title: "Cloud BMS for EV Fleets".to_string(),
            date: "2024".to_string(),
            content: "Intelligent Battery Management System for electric vehicle fleets with \
                      real-time monitoring using Android and Kotlin."
                .to_string(),
            category: "Mobile Development".to_string(),
            icon: ProjectIcon::Smartphone,
            related_ids: vec![1, 3],
            status: ProjectStatus::Completed,
            energy: 95,
            github_url: gh("iCBMP"),
            live_url: None,
        },
        Project {
            id: 3,
            title: "DeFi Credit Scoring".to_string(),
            date: "2024".to_string(),
            content: "AI-powered credit scoring system for Aave protocol wallets using blockchain \
                      data analysis and machine learning."
                .to_string(),
            category: "Blockchain & AI".to_string(),
            icon: ProjectIcon::Database,
            related_ids: vec![2, 4],
            status: ProjectStatus::Completed,
            energy: 90,
            github_url: gh("DeFi-credit-scoring-for-Aave-V2-wallets"),
            live_url: None,
        },
        Project {
            id: 4,
            title: "Lead Generation Agent".to_string(),
            date: "2024".to_string(),
            content: "AI-powered lead generation agent that automates prospect identification and \
                      outreach using advanced machine learning algorithms."
                .to_string(),
            category: "Artificial Intelligence".to_string(),
            icon: ProjectIcon::Zap,
            related_ids: vec![1, 3],
            status: ProjectStatus::Completed,
            energy: 85,
            github_url: gh("ai-based-lead-generation-agent"),
            live_url: None,
        },
        Project {
            id: 5,
            title: "Portfolio Website".to_string(),
            date: "2024".to_string(),
            content: "Modern portfolio with advanced animations, 3D elements, and performance \
                      optimization."
                .to_string(),
            category: "Web Development".to_string(),
            icon: ProjectIcon::Globe,
            related_ids: Vec::new(),
            status: ProjectStatus::InProgress,
            energy: 75,
            github_url: gh("Portforlio-website"),
            live_url: None,
        },
    ]
}

fn builtin_slides() -> Vec<Slide> {
    vec![
        Slide::Experience(ExperienceSlide {
            id: 1,
            company: "TechMahindra".to_string(),
            position: "Software Engineering Summer Intern".to_string(),
            duration: "June 2024 – August 2024".to_string(),
            location: "Remote, India".to_string(),
            description: "Developed ML-powered solutions for electric vehicle fleet optimization, \
                          creating recommendation systems and Android Automotive dashboards."
                .to_string(),
            achievements: strings(&[
                "Created ML pipeline with Flask app using custom rules for vehicle-specific recommendations",
                "Built robust pipeline and model with cloud endpoint integration via comprehensive testing",
                "Developed Android Automotive dashboard for real-time ML model recommendations",
                "Created critical UI components and connected backend to frontend systems",
            ]),
            technologies: strings(&[
                "Python",
                "Flask",
                "Machine Learning",
                "Android Automotive",
                "AWS",
                "Testing",
            ]),
            highlights: strings(&[
                "Optimized battery performance in high elevation areas",
                "Integrated cloud endpoints with comprehensive testing",
                "Built real-time recommendation dashboard",
            ]),
        }),
        Slide::Hiring(CallToActionSlide {
            id: 2,
            title: "Open to New Opportunities".to_string(),
            subtitle: "Ready to contribute to innovative projects".to_string(),
            description: "I'm actively seeking full-time software engineering roles where I can \
                          leverage my experience in Machine Learning, Artificial Intelligence, Full \
                          Stack Development and Mobile Technologies to create impactful solutions."
                .to_string(),
            skills: strings(&[
                "Full-Stack Development",
                "Machine Learning",
                "Mobile Development",
                "Cloud Technologies",
            ]),
            availability: "Available immediately for full-time positions".to_string(),
        }),
    ]
}
