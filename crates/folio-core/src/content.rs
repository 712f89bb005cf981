//! Static portfolio content.

/// Handle shown in the header and footer.
pub const SITE_NAME: &str = "tirsasaki";
/// Author credited in the footer.
pub const AUTHOR: &str = "Tirsasaki";
/// Title revealed character by character in the hero.
pub const HERO_TITLE: &str = "Creative Developer & Writer";
pub const HERO_BADGE: &str = "Welcome to my portfolio";
pub const HERO_TAGLINE: &str = "I craft exceptional digital experiences that merge creativity with functionality. \
Transforming ideas into elegant, responsive web solutions.";
pub const HERO_PROOF: &str = "+1K projects completed";
/// Copied to the clipboard by the hero's GitHub button.
pub const GITHUB_URL: &str = "https://github.com/tirsasaki";

pub const ABOUT_HEADLINE: &str = "Full Stack Developer";
pub const ABOUT_BIO: &str = "A passionate Full Stack Developer based in Indonesia, specializing in building \
exceptional digital experiences. With a strong foundation in both front-end and back-end development, \
I create scalable and efficient solutions that solve real-world problems.";

/// Broad grouping used by the projects page filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectCategory {
    WebApp,
    MobileApp,
    Design,
    Other,
}

impl ProjectCategory {
    pub const ALL: [ProjectCategory; 4] = [
        ProjectCategory::WebApp,
        ProjectCategory::MobileApp,
        ProjectCategory::Design,
        ProjectCategory::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ProjectCategory::WebApp => "Web App",
            ProjectCategory::MobileApp => "Mobile App",
            ProjectCategory::Design => "Design",
            ProjectCategory::Other => "Other",
        }
    }
}

/// Filter applied on the projects page. `None` shows everything.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CategoryFilter(pub Option<ProjectCategory>);

impl CategoryFilter {
    pub fn label(self) -> &'static str {
        self.0.map_or("All", ProjectCategory::label)
    }

    /// All → Web App → Mobile App → Design → Other → All.
    pub fn next(self) -> Self {
        let next = match self.0 {
            None => Some(ProjectCategory::WebApp),
            Some(ProjectCategory::WebApp) => Some(ProjectCategory::MobileApp),
            Some(ProjectCategory::MobileApp) => Some(ProjectCategory::Design),
            Some(ProjectCategory::Design) => Some(ProjectCategory::Other),
            Some(ProjectCategory::Other) => None,
        };
        Self(next)
    }

    pub fn matches(self, project: &ProjectRecord) -> bool {
        self.0.is_none_or(|category| project.category == category)
    }

    /// Every filter option in display order.
    pub fn options() -> impl Iterator<Item = CategoryFilter> {
        std::iter::once(CategoryFilter(None))
            .chain(ProjectCategory::ALL.into_iter().map(|c| CategoryFilter(Some(c))))
    }
}

/// A showcased project.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectRecord {
    pub title: &'static str,
    pub summary: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub tags: &'static [&'static str],
    pub source_url: &'static str,
    pub demo_url: &'static str,
    pub year: &'static str,
    pub category: ProjectCategory,
    /// Shown in the home page showcase.
    pub featured: bool,
}

pub const PROJECTS: &[ProjectRecord] = &[ProjectRecord {
    title: "Kasa Blog Astro",
    summary: "Kasa Blog is a modern and minimalistic blog website designed for sharing and \
distributing content seamlessly.",
    description: "A modern and minimalistic blog website designed for sharing and distributing \
content seamlessly. Built with performance and SEO in mind.",
    image: "/kasa.png",
    tags: &["Astro.js", "Tailwind CSS", "Markdown", "TypeScript"],
    source_url: "https://github.com/tirsasaki/kasa-blog-astro",
    demo_url: "https://kasa-blog.vercel.app/",
    year: "2024",
    category: ProjectCategory::WebApp,
    featured: true,
}];

/// Projects shown in the home page showcase.
pub fn featured_projects() -> impl Iterator<Item = &'static ProjectRecord> {
    PROJECTS.iter().filter(|p| p.featured)
}

/// Projects matching a filter.
pub fn filtered_projects(filter: CategoryFilter) -> impl Iterator<Item = &'static ProjectRecord> {
    PROJECTS.iter().filter(move |p| filter.matches(p))
}

/// A single skill with a proficiency level in `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillRecord {
    pub name: &'static str,
    pub level: u8,
}

impl SkillRecord {
    /// Proficiency as a fraction, clamped to `0.0..=1.0`.
    pub fn ratio(&self) -> f32 {
        f32::from(self.level.min(100)) / 100.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillCategory {
    pub title: &'static str,
    pub skills: &'static [SkillRecord],
}

pub const SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        title: "Frontend Development",
        skills: &[
            SkillRecord { name: "React/Next.js", level: 90 },
            SkillRecord { name: "TypeScript", level: 85 },
            SkillRecord { name: "Tailwind CSS", level: 95 },
        ],
    },
    SkillCategory {
        title: "Backend Development",
        skills: &[
            SkillRecord { name: "Node.js", level: 88 },
            SkillRecord { name: "Python", level: 82 },
            SkillRecord { name: "Express", level: 85 },
        ],
    },
    SkillCategory {
        title: "Database",
        skills: &[
            SkillRecord { name: "PostgreSQL", level: 85 },
            SkillRecord { name: "MongoDB", level: 80 },
            SkillRecord { name: "Redis", level: 75 },
        ],
    },
    SkillCategory {
        title: "DevOps & Tools",
        skills: &[
            SkillRecord { name: "Git", level: 90 },
            SkillRecord { name: "Docker", level: 80 },
            SkillRecord { name: "AWS", level: 75 },
        ],
    },
];

pub const TOOLS: &[&str] = &[
    "VSCode", "Git", "GitHub", "Docker", "AWS", "Vercel", "Figma", "Photoshop", "Jest", "Cypress",
];

/// Headline number on the about section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const STATS: &[Stat] = &[
    Stat { value: "50+", label: "Projects Completed" },
    Stat { value: "30+", label: "Happy Clients" },
    Stat { value: "5+", label: "Years Experience" },
];

/// A labelled external link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Link {
    pub label: &'static str,
    pub value: &'static str,
    pub href: &'static str,
}

pub const SOCIAL_LINKS: &[Link] = &[
    Link { label: "GitHub", value: "github.com/tirsasaki", href: "https://github.com/tirsasaki" },
    Link { label: "Twitter", value: "x.com/tirsasaki", href: "https://x.com/tirsasaki" },
    Link { label: "LinkedIn", value: "linkedin.com/in/tirsasaki", href: "https://linkedin.com/in/tirsasaki" },
    Link { label: "Email", value: "tirsasaki@gmail.com", href: "mailto:tirsasaki@gmail.com" },
];

pub const CONTACT_INFO: &[Link] = &[
    Link { label: "Email", value: "tirsasaki@gmail.com", href: "mailto:tirsasaki@gmail.com" },
    Link { label: "Phone", value: "+62 123 456 789", href: "tel:+62123456789" },
    Link { label: "Location", value: "Indonesia", href: "" },
];
