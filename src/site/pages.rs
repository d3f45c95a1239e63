//! Static page content.

pub struct Profile {
    pub name: &'static str,
    pub greeting: &'static str,
    pub headline: &'static str,
    pub intro: &'static str,
}

pub const PROFILE: Profile = Profile {
    name: "TienWei Hsu",
    greeting: "Hello!",
    headline: "My Name is Tien-Wei Hsu",
    intro: "A little bit about me: I'm a Full Stack Developer currently working at Foxconn \
            Industrial Internet in the Bay Area. I'm passionate about building platforms, \
            scalable systems, and sleek front-ends. I love working with React, Python, and Go. \
            Lately, I've been exploring WebSockets, Kafka, and AI integrations using LangChain \
            in full-stack architectures. I enjoy solving complex problems and am always eager \
            to learn new technologies. One day, I hope to build some of the best systems in \
            the world.",
};

pub const INTRO_PREVIEW_CHARS: usize = 220;

impl Profile {
    /// Leading part of the introduction, cut at a word boundary, and whether
    /// anything was cut.
    pub fn intro_preview(&self, max_chars: usize) -> (&'static str, bool) {
        let intro = self.intro;
        let Some((cut, _)) = intro.char_indices().nth(max_chars) else {
            return (intro, false);
        };
        let end = intro[..cut].rfind(char::is_whitespace).unwrap_or(cut);
        (intro[..end].trim_end(), true)
    }
}

pub struct InfoCard {
    pub title: &'static str,
    pub body: &'static str,
}

pub const ABOUT_TITLE: &str = "About Us";
pub const ABOUT_LEAD: &str = "This is the about page.";
pub const ABOUT_CARDS: [InfoCard; 3] = [
    InfoCard {
        title: "Mission",
        body: "Deliver a great user experience and service",
    },
    InfoCard {
        title: "Vision",
        body: "Become an industry-leading solution provider",
    },
    InfoCard {
        title: "Values",
        body: "Integrity, innovation, collaboration, excellence",
    },
];

pub struct SkillGroup {
    pub title: &'static str,
    pub items: [&'static str; 3],
}

pub const SKILLS_TITLE: &str = "Skills";
pub const SKILLS_LEAD: &str = "This page showcases my technical skillset including frontend, \
                               backend, databases, tools, and analytics.";
pub const SKILL_GROUPS: [SkillGroup; 6] = [
    SkillGroup {
        title: "Frontend",
        items: ["HTML / CSS / JavaScript", "React", "Bootstrap, MUI, Ant Design"],
    },
    SkillGroup {
        title: "Backend",
        items: ["Python, Golang", "Django, Beego, FastAPI", "RESTful API design"],
    },
    SkillGroup {
        title: "Databases",
        items: ["MySQL, PostgreSQL, MSSQL", "MongoDB", "SAP ABAP, ORM"],
    },
    SkillGroup {
        title: "Version Control & DevOps",
        items: ["Git, GitHub, GitLab", "Docker, Podman", "Basic CI/CD concepts"],
    },
    SkillGroup {
        title: "IDE & Tooling",
        items: [
            "Visual Studio Code, Azure Data Studio",
            "PyCharm, Jupyter Notebook",
            "Postman, Git Bash, Copilot",
        ],
    },
    SkillGroup {
        title: "Analytics & Visualization",
        items: ["Pandas, NumPy, Seaborn", "Excel, Tableau", "Apache ECharts, AntV"],
    },
];

pub struct ContactSection {
    pub heading: &'static str,
    pub lines: [&'static str; 3],
}

pub const CONTACT_TITLE: &str = "Contact Us";
pub const CONTACT_LEAD: &str = "This is the contact page.";
pub const CONTACT_SECTIONS: [ContactSection; 2] = [
    ContactSection {
        heading: "How to reach us",
        lines: [
            "Phone: (02) 1234-5678",
            "Email: contact@example.com",
            "Address: No. 7, Sec. 5, Xinyi Rd., Xinyi Dist., Taipei",
        ],
    },
    ContactSection {
        heading: "Office hours",
        lines: [
            "Monday to Friday: 09:00 - 18:00",
            "Saturday: 09:00 - 12:00",
            "Sunday: closed",
        ],
    },
];
pub const CONTACT_ACTION: &str = "Contact now";

pub const UNKNOWN_PAGE: &str = "Welcome to the main page!";
pub const FOOTER: &str = "Tien-Wei Hsu created 2025@";
