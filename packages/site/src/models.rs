//! # Content records
//!
//! Plain data types for everything the portfolio renders. All instances live in
//! [`crate::content`] as `'static` data and are never mutated at runtime, so the
//! string fields borrow `&'static str` instead of owning `String`s.
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`Profile`] | The site owner: name, headline, biography, contact details, social links. |
//! | [`Experience`] | A position held, with optional nested [`ExperienceProject`]s and a training note. |
//! | [`Project`] | A showcase entry with live link, [`RepoLinks`] and technology tags. |
//! | [`Testimonial`] | A philosophy card; one of them may be `featured`. |
//! | [`Skill`] | A skill card with its [`SkillIcon`]. |
//! | [`SocialLink`] | A link to a profile on a [`Network`]. |
//! | [`NavItem`] | An in-page navigation anchor. |

/// An image reference with its alternative text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Image {
    pub src: &'static str,
    pub alt: &'static str,
}

/// Social networks the site links to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Network {
    Facebook,
    GitHub,
    LinkedIn,
    Discord,
}

impl Network {
    pub fn label(&self) -> &'static str {
        match self {
            Network::Facebook => "Facebook",
            Network::GitHub => "GitHub",
            Network::LinkedIn => "LinkedIn",
            Network::Discord => "Discord",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SocialLink {
    pub network: Network,
    pub href: &'static str,
}

/// An entry in the navigation bar, pointing at a section id.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    /// In-page anchor: "#skills"
    pub href: &'static str,
}

/// The site owner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Profile {
    pub name: &'static str,
    /// Greeting shown before the name: "Hello I'm"
    pub greeting: &'static str,
    /// Role split in an emphasised and an outlined part: ("Full Stack", "Developer")
    pub title: (&'static str, &'static str),
    pub location: &'static str,
    pub tagline: &'static str,
    pub biography: &'static [&'static str],
    pub email: &'static str,
    pub phone: &'static str,
    pub resume_url: &'static str,
    pub banner: Image,
    pub portrait: Image,
    pub socials: &'static [SocialLink],
    pub footer_blurb: &'static str,
    pub copyright_year: u16,
}

impl Profile {
    /// `mailto:` link for the contact email.
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }

    /// `tel:` link for the contact phone number.
    pub fn tel(&self) -> String {
        format!("tel:{}", self.phone)
    }
}

/// A project delivered as part of an [`Experience`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExperienceProject {
    pub title: &'static str,
    pub description: &'static str,
    pub technologies: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Experience {
    pub company: &'static str,
    pub role: &'static str,
    /// Free-form period: "January 2024 - Present"
    pub period: &'static str,
    pub description: &'static str,
    /// Key projects, empty when the role has none listed
    pub projects: &'static [ExperienceProject],
    pub training: Option<&'static str>,
    pub logo: Image,
}

/// Source repositories of a [`Project`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RepoLinks {
    pub main: Option<&'static str>,
    pub frontend: Option<&'static str>,
    pub backend: Option<&'static str>,
}

impl RepoLinks {
    /// Present links as `(label, href)`, in the order main, frontend, backend.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static str)> {
        [
            ("GitHub", self.main),
            ("Frontend", self.frontend),
            ("Backend", self.backend),
        ]
        .into_iter()
        .filter_map(|(label, href)| href.map(|href| (label, href)))
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub image: Image,
    /// Live demo URL
    pub link: &'static str,
    pub repositories: RepoLinks,
    /// Comma separated technology tags
    pub technologies: &'static str,
}

impl Project {
    /// Identifier zero-padded to two digits: 1 -> "01".
    pub fn number(&self) -> String {
        format!("{:02}", self.id)
    }

    pub fn tags(&self) -> impl Iterator<Item = &'static str> {
        self.technologies
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TestimonialIcon {
    Code,
    Layers,
    Target,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Testimonial {
    pub id: u32,
    pub name: &'static str,
    pub role: &'static str,
    pub icon: TestimonialIcon,
    pub quote: &'static str,
    pub featured: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkillIcon {
    JavaScript,
    TypeScript,
    React,
    NextJs,
    NodeJs,
    Laravel,
    Prisma,
    PostgreSql,
    MongoDb,
    Git,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Skill {
    pub title: &'static str,
    pub icon: SkillIcon,
    /// Inverted colours
    pub filled: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(repositories: RepoLinks) -> Project {
        Project {
            id: 4,
            title: "Demo",
            description: "A demo project",
            image: Image { src: "/demo.png", alt: "Demo" },
            link: "https://demo.example.com",
            repositories,
            technologies: "Rust, Dioxus,  Tailwind CSS ,",
        }
    }

    #[test]
    fn test_project_number_is_zero_padded() {
        assert_eq!(project(RepoLinks::default()).number(), "04");
        let mut p = project(RepoLinks::default());
        p.id = 12;
        assert_eq!(p.number(), "12");
    }

    #[test]
    fn test_project_tags_are_trimmed() {
        let p = project(RepoLinks::default());
        let tags: Vec<_> = p.tags().collect();
        assert_eq!(tags, vec!["Rust", "Dioxus", "Tailwind CSS"]);
    }

    #[test]
    fn test_repo_links_order_and_labels() {
        let links = RepoLinks {
            main: None,
            frontend: Some("https://github.com/x/front"),
            backend: Some("https://github.com/x/back"),
        };
        let all: Vec<_> = links.iter().collect();
        assert_eq!(
            all,
            vec![
                ("Frontend", "https://github.com/x/front"),
                ("Backend", "https://github.com/x/back"),
            ]
        );
        assert!(!links.is_empty());
        assert!(RepoLinks::default().is_empty());
    }

    #[test]
    fn test_network_labels() {
        assert_eq!(Network::GitHub.label(), "GitHub");
        assert_eq!(Network::LinkedIn.label(), "LinkedIn");
    }
}
