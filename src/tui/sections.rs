//! Portfolio sections and their content.

/// A navigable portfolio section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Home,
    About,
    Skills,
    Projects,
    Experience,
    Contact,
}

impl SectionId {
    /// All sections in nav order.
    pub const ALL: [SectionId; 6] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Skills,
        SectionId::Projects,
        SectionId::Experience,
        SectionId::Contact,
    ];

    /// Tab label.
    pub fn title(&self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::About => "About",
            SectionId::Skills => "Skills",
            SectionId::Projects => "Projects",
            SectionId::Experience => "Experience",
            SectionId::Contact => "Contact",
        }
    }

    /// Stable identifier used for exploration tracking.
    pub fn slug(&self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Skills => "skills",
            SectionId::Projects => "projects",
            SectionId::Experience => "experience",
            SectionId::Contact => "contact",
        }
    }
}

/// A skill with a 0-100 proficiency level.
pub struct Skill {
    pub name: &'static str,
    pub level: u16,
}

pub const SKILLS: &[Skill] = &[
    Skill { name: "Python", level: 90 },
    Skill { name: "JavaScript", level: 85 },
    Skill { name: "Java", level: 80 },
    Skill { name: "C++", level: 75 },
    Skill { name: "React", level: 85 },
    Skill { name: "Node.js", level: 80 },
    Skill { name: "Flask", level: 75 },
    Skill { name: "Git", level: 90 },
];

/// A project card.
pub struct Project {
    pub name: &'static str,
    pub summary: &'static str,
}

pub const PROJECTS: &[Project] = &[
    Project {
        name: "AI Chatbot",
        summary: "Conversational assistant with intent detection and a plugin system.",
    },
    Project {
        name: "E-commerce Platform",
        summary: "Storefront, cart, and order pipeline with an admin dashboard.",
    },
    Project {
        name: "Fitness Tracker",
        summary: "Workout logging and progress charts, synced across devices.",
    },
];

pub const HOME_TEXT: &str = "\
Welcome to the Digital Garden.

A small patch of the internet where projects, skills, and ideas grow.
Wander through the sections and see what has taken root — rumor has it
a few things are planted out of sight.

Use ←/→ or Tab to stroll between sections.";

pub const EXPERIENCE_TEXT: &str = "\
CS Student — University
  Coursework in algorithms, databases, and distributed systems.

Software Engineering Intern — Web Platform Team
  Built internal tooling and shipped user-facing features in React and Flask.

Open Source Contributor
  Patches and docs for various Python and JavaScript projects.";

pub const CONTACT_TEXT: &str = "\
Want to plant something together?

  email    hello@digital-garden.dev
  github   github.com/digital-garden
  linkedin linkedin.com/in/digital-garden

Press c to open the contact form.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs_are_unique() {
        let mut slugs: Vec<_> = SectionId::ALL.iter().map(|s| s.slug()).collect();
        slugs.sort_unstable();
        slugs.dedup();
        assert_eq!(slugs.len(), SectionId::ALL.len());
    }

    #[test]
    fn skill_levels_are_percentages() {
        for skill in SKILLS {
            assert!(skill.level <= 100, "{} over 100", skill.name);
        }
    }
}
