//! Everything the portfolio says, in display order.

use crate::models::{
    Experience, ExperienceProject, Image, NavItem, Network, Profile, Project, RepoLinks, Skill,
    SkillIcon, SocialLink, Testimonial, TestimonialIcon,
};

pub const SOCIALS: &[SocialLink] = &[
    SocialLink {
        network: Network::Facebook,
        href: "https://www.facebook.com/share/14PwCq3Dsns/",
    },
    SocialLink {
        network: Network::GitHub,
        href: "https://github.com/asm-shad",
    },
    SocialLink {
        network: Network::LinkedIn,
        href: "https://www.linkedin.com/in/asmshad/",
    },
    SocialLink {
        network: Network::Discord,
        href: "https://discord.com/users/1256491544165220394",
    },
];

pub const PROFILE: Profile = Profile {
    name: "ASM Shad",
    greeting: "Hello I'm",
    title: ("Full Stack", "Developer"),
    location: "Bangladesh",
    tagline: "I'm a passionate Full Stack Developer specializing in modern web technologies. \
              I create robust, scalable applications using React, Node.js, TypeScript, and various \
              databases. With experience in both frontend and backend development, I bring ideas to life \
              through clean, efficient code.",
    biography: &[
        "I'm a passionate Full Stack Developer based in Bangladesh, specializing in modern web \
         technologies. I create robust, scalable applications using React, Node.js, TypeScript, \
         and various databases. With experience in both frontend and backend development, I bring \
         ideas to life through clean, efficient code.",
        "My journey in web development has taken me through various roles, from system administration \
         to application development. I've worked with companies like LDC Group and Robi Axiata Limited, \
         gaining valuable experience in enterprise-level applications, system security, and platform \
         management.",
        "I'm proficient in technologies like JavaScript, TypeScript, React.js, Next.js, Node.js, \
         Laravel, Prisma, PostgreSQL, and MongoDB. I'm always eager to learn new technologies and \
         take on challenging projects that push the boundaries of what's possible on the web.",
    ],
    email: "asmshad@gmail.com",
    phone: "01608898818",
    resume_url: "https://drive.google.com/file/d/1KZjBlXJz_GDCVZrPl1usqhgoNbCtmswK/view?usp=sharing",
    banner: Image {
        src: "/Banner.jpeg",
        alt: "ASM Shad - Full Stack Developer",
    },
    portrait: Image {
        src: "/AboutMe.jpg",
        alt: "ASM Shad - About Me",
    },
    socials: SOCIALS,
    footer_blurb: "Full Stack Developer passionate about creating innovative web solutions with \
                   modern technologies. Turning ideas into digital reality.",
    copyright_year: 2024,
};

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem {
        label: "About Me",
        href: "#hero",
    },
    NavItem {
        label: "Skills",
        href: "#skills",
    },
    NavItem {
        label: "Experience",
        href: "#experience",
    },
    NavItem {
        label: "Projects",
        href: "#projects",
    },
    NavItem {
        label: "Testimonials",
        href: "#testimonials",
    },
    NavItem {
        label: "Contact Me",
        href: "#contact",
    },
];

pub const SKILLS: &[Skill] = &[
    Skill {
        title: "JavaScript",
        icon: SkillIcon::JavaScript,
        filled: false,
    },
    Skill {
        title: "TypeScript",
        icon: SkillIcon::TypeScript,
        filled: false,
    },
    Skill {
        title: "React.js",
        icon: SkillIcon::React,
        filled: true,
    },
    Skill {
        title: "Next.js",
        icon: SkillIcon::NextJs,
        filled: false,
    },
    Skill {
        title: "Node.js",
        icon: SkillIcon::NodeJs,
        filled: false,
    },
    Skill {
        title: "Laravel",
        icon: SkillIcon::Laravel,
        filled: false,
    },
    Skill {
        title: "Prisma",
        icon: SkillIcon::Prisma,
        filled: false,
    },
    Skill {
        title: "PostgreSQL",
        icon: SkillIcon::PostgreSql,
        filled: true,
    },
    Skill {
        title: "MongoDB",
        icon: SkillIcon::MongoDb,
        filled: false,
    },
    Skill {
        title: "Git",
        icon: SkillIcon::Git,
        filled: false,
    },
];

const LDC_APPLICATION_PROJECTS: &[ExperienceProject] = &[
    ExperienceProject {
        title: "IOT System for KITTING Management",
        description: "Designed and managed comprehensive IoT system for manufacturing optimization, \
                      implementing real-time monitoring, automated data collection, and intelligent \
                      workflow management to optimize manufacturing processes and reduce operational overhead.",
        technologies: "IoT, Real-time Monitoring, Data Analytics",
    },
    ExperienceProject {
        title: "Panda Resort Food & Resting Management System",
        description: "Collaborated on developing a comprehensive resort management system featuring food \
                      ordering, room booking, guest management, inventory tracking, and real-time analytics \
                      for enhanced customer experience and operational efficiency.",
        technologies: "Prisma ORM, Next.js, Database Management",
    },
    ExperienceProject {
        title: "GarmentTech BD Learning Management System",
        description: "Led full-stack development of a scalable learning management system for workforce \
                      training, delivering comprehensive course management, progress tracking, assessments, \
                      and certification features.",
        technologies: "MERN Stack (React, Express.js, MongoDB)",
    },
    ExperienceProject {
        title: "Sewing Production Tracking System",
        description: "Collaborated on implementing a production tracking system featuring real-time \
                      monitoring, barcode integration, and automated reporting for reducing manual errors \
                      and improving workflow efficiency in garment manufacturing.",
        technologies: "Laravel, MySQL, Barcode Integration",
    },
    ExperienceProject {
        title: "Mini Warehouse Management System",
        description: "Collaborated on developing a comprehensive warehouse system implementing real-time \
                      inventory tracking, automated stock alerts, and report generation for efficient \
                      warehouse operations and inventory management.",
        technologies: "React, Node.js, MySQL, Real-time Systems",
    },
    ExperienceProject {
        title: "Legacy ERP System Enhancement",
        description: "Provided support and optimization for legacy ERP system, enhanced system performance \
                      by adding IT-requisition module to streamline internal procurement processes and \
                      improve workflow efficiency.",
        technologies: "OOP PHP, MySQL/DB2, AJAX",
    },
];

// Star glyph in the company colour.
const LOGO_INDIGO: &str = "data:image/svg+xml;base64,PHN2ZyB2aWV3Qm94PSIwIDAgMjQgMjQiIGZpbGw9Im5vbmUiIHhtbG5zPSJodHRwOi8vd3d3LnczLm9yZy8yMDAwL3N2ZyI+PHBhdGggZD0iTTEyIDJMMTMuMDkgOC4yNkwyMCA5TDEzLjA5IDE1Ljc0TDEyIDIyTDEwLjkxIDE1Ljc0TDQgOUwxMC45MSA4LjI2TDEyIDJaIiBmaWxsPSIjNjM2NkYxIi8+PC9zdmc+";
const LOGO_GREEN: &str = "data:image/svg+xml;base64,PHN2ZyB2aWV3Qm94PSIwIDAgMjQgMjQiIGZpbGw9Im5vbmUiIHhtbG5zPSJodHRwOi8vd3d3LnczLm9yZy8yMDAwL3N2ZyI+PHBhdGggZD0iTTEyIDJMMTMuMDkgOC4yNkwyMCA5TDEzLjA5IDE1Ljc0TDEyIDIyTDEwLjkxIDE1Ljc0TDQgOUwxMC45MSA4LjI2TDEyIDJaIiBmaWxsPSIjMTA5OTZBIi8+PC9zdmc+";
const LOGO_RED: &str = "data:image/svg+xml;base64,PHN2ZyB2aWV3Qm94PSIwIDAgMjQgMjQiIGZpbGw9Im5vbmUiIHhtbG5zPSJodHRwOi8vd3d3LnczLm9yZy8yMDAwL3N2ZyI+PHBhdGggZD0iTTEyIDJMMTMuMDkgOC4yNkwyMCA5TDEzLjA5IDE1Ljc0TDEyIDIyTDEwLjkxIDE1Ljc0TDQgOUwxMC45MSA4LjI2TDEyIDJaIiBmaWxsPSIjRUY0NDQ0Ii8+PC9zdmc+";

pub const EXPERIENCES: &[Experience] = &[
    Experience {
        company: "LDC Group of Industries",
        role: "Executive Application Development",
        period: "January 2024 - Present",
        description: "Leading full-stack development initiatives and project management with comprehensive \
                      expertise in modern web technologies and enterprise solutions.",
        projects: LDC_APPLICATION_PROJECTS,
        training: Some(
            "Currently undergoing training in Sage X3 ERP system and GraphQL integration as part of \
             company's new system implementation initiative.",
        ),
        logo: Image {
            src: LOGO_INDIGO,
            alt: "LDC Group Logo",
        },
    },
    Experience {
        company: "LDC Group of Industries",
        role: "Executive System Administrator",
        period: "November 2022 - December 2023",
        description: "Managed Active Directory, server/cloud infrastructure, network support, user support, \
                      inventory management and critical applications including Tally, WMS, WCS, and payroll \
                      systems. Ensured seamless operation of enterprise-level applications and maintained \
                      system reliability across the organization.",
        projects: &[],
        training: None,
        logo: Image {
            src: LOGO_GREEN,
            alt: "LDC Group Logo",
        },
    },
    Experience {
        company: "Express Systems Limited / Robi Axiata Limited",
        role: "Engineer Windows & Security Specialist",
        period: "February 2022 - November 2022",
        description: "Served as Azure cloud administrator managing deployments, security implementations \
                      (Tenable, PAM, eApproval), vulnerability assessments, system patching, and Active \
                      Directory support. Worked as service provider at Windows & Security Platform Team for \
                      Robi Axiata Limited, ensuring robust security posture and maintaining high availability \
                      of cloud infrastructure.",
        projects: &[],
        training: None,
        logo: Image {
            src: LOGO_RED,
            alt: "Robi Axiata Logo",
        },
    },
];

pub const PROJECTS: &[Project] = &[
    Project {
        id: 1,
        title: "GenZ Mart",
        description: "A comprehensive E-Commerce System built with modern full-stack technologies. Features \
                      include product catalog, shopping cart, user authentication, order management, and \
                      payment integration. Developed with NextJS and ShadCN for the frontend, and PRISMA with \
                      PostgreSQL for robust backend data management.",
        image: Image {
            src: "/projects/genZMart.png",
            alt: "GenZ Mart E-Commerce Platform",
        },
        link: "https://gen-z-mart-frontend.vercel.app/",
        repositories: RepoLinks {
            main: None,
            frontend: Some("https://github.com/asm-shad/GenZMart-Frontend.git"),
            backend: Some("https://github.com/asm-shad/GenZFashion.git"),
        },
        technologies: "NextJS, ShadCN, TypeScript, PRISMA, PostgreSQL, NodeJS",
    },
    Project {
        id: 2,
        title: "GenZ Fashion",
        description: "An elegant E-Commerce System focused on fashion retail with advanced state management \
                      and modern UI. Built with React ecosystem including Redux Toolkit for state management, \
                      RTK Query for efficient data fetching, and Express.js with MongoDB for scalable backend \
                      architecture.",
        image: Image {
            src: "/projects/genZFashion.png",
            alt: "GenZ Fashion E-Commerce Platform",
        },
        link: "https://gen-z-fashion-frontend.vercel.app/",
        repositories: RepoLinks {
            main: Some("https://github.com/asm-shad/GenZFashion.git"),
            frontend: None,
            backend: None,
        },
        technologies: "React, Redux Toolkit, RTK Query, TypeScript, Tailwind CSS, Express, Mongoose",
    },
    Project {
        id: 3,
        title: "Parcelo",
        description: "A comprehensive Parcel Delivery System with real-time tracking, user authentication, \
                      and delivery management. Features include package tracking, delivery scheduling, user \
                      dashboards, and secure authentication using Passport.js. Built with React and Express \
                      for optimal performance.",
        image: Image {
            src: "/projects/Parcelo.png",
            alt: "Parcelo Parcel Delivery System",
        },
        link: "https://parcelo-iota.vercel.app/",
        repositories: RepoLinks {
            main: None,
            frontend: Some("https://github.com/asm-shad/Parcelo.git"),
            backend: Some("https://github.com/asm-shad/Parcel-Delivery-API.git"),
        },
        technologies: "React, Redux Toolkit, RTK Query, TypeScript, Tailwind CSS, Express, Mongoose, Passport",
    },
    Project {
        id: 4,
        title: "RedAid",
        description: "A Blood Donation Platform connecting donors with recipients to save lives. Features \
                      include donor registration, blood request management, location-based matching, and \
                      emergency notifications. Built with React and MongoDB to handle critical healthcare data \
                      efficiently and securely.",
        image: Image {
            src: "/projects/RedAid.png",
            alt: "RedAid Blood Donation Platform",
        },
        link: "https://redaid-b0f4e.web.app/",
        repositories: RepoLinks {
            main: None,
            frontend: Some("https://github.com/asm-shad/RedAid-Blood-Donation-Application-Client.git"),
            backend: Some("https://github.com/asm-shad/RedAid-Blood-Donation-Application-Server.git"),
        },
        technologies: "React, RTK Query, TypeScript, Tailwind CSS, Express, MongoDB",
    },
    Project {
        id: 5,
        title: "Advencha",
        description: "A stunning Travel Landing Page showcasing beautiful destinations and travel packages. \
                      Features responsive design, smooth animations, and modern UI components. Built with \
                      NextJS and TypeScript for optimal performance and SEO optimization to attract travel \
                      enthusiasts.",
        image: Image {
            src: "/projects/Advencha.png",
            alt: "Advencha Travel Landing Page",
        },
        link: "https://advencha.vercel.app/",
        repositories: RepoLinks {
            main: Some("https://github.com/asm-shad/Advencha.git"),
            frontend: None,
            backend: None,
        },
        technologies: "NextJS, TypeScript, Responsive Design, SEO Optimization",
    },
    Project {
        id: 6,
        title: "CarePulse",
        description: "A comprehensive Healthcare Management System for managing patient appointments, medical \
                      records, and healthcare workflows. Features include patient registration, appointment \
                      scheduling, medical history tracking, and healthcare provider management. Built with \
                      NextJS and ShadCN for modern healthcare solutions.",
        image: Image {
            src: "/projects/carePlus.png",
            alt: "CarePulse Healthcare Management System",
        },
        link: "https://care-pulse-mu-ten.vercel.app/",
        repositories: RepoLinks {
            main: Some("https://github.com/asm-shad/CarePulse.git"),
            frontend: None,
            backend: None,
        },
        technologies: "NextJS, ShadCN, TypeScript, Healthcare Management, Appointment System",
    },
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        id: 1,
        name: "Code Quality",
        role: "My Philosophy",
        icon: TestimonialIcon::Code,
        quote: "I believe in writing clean, maintainable code that not only works today but scales for \
                tomorrow. Every line of code should tell a story and serve a purpose.",
        featured: false,
    },
    Testimonial {
        id: 2,
        name: "Full Stack Approach",
        role: "My Expertise",
        icon: TestimonialIcon::Layers,
        quote: "From React frontends to Node.js backends, I handle the complete development cycle. My goal \
                is to create seamless user experiences backed by robust, scalable architecture.",
        featured: true,
    },
    Testimonial {
        id: 3,
        name: "Client Success",
        role: "My Commitment",
        icon: TestimonialIcon::Target,
        quote: "Your project's success is my success. I'm committed to delivering solutions that exceed \
                expectations and drive real business value.",
        featured: false,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    fn strictly_ascending(ids: impl Iterator<Item = u32>) -> bool {
        let ids: Vec<u32> = ids.collect();
        ids.windows(2).all(|w| w[0] < w[1])
    }

    #[test]
    fn test_project_fields_non_empty() {
        for p in PROJECTS {
            assert!(!p.title.is_empty());
            assert!(!p.description.is_empty());
            assert!(!p.image.src.is_empty() && !p.image.alt.is_empty());
            assert!(p.link.starts_with("https://"));
            assert!(p.tags().count() > 0, "{} has no tags", p.title);
            assert!(!p.repositories.is_empty(), "{} has no repositories", p.title);
        }
    }

    #[test]
    fn test_ids_unique_and_ascending() {
        assert!(strictly_ascending(PROJECTS.iter().map(|p| p.id)));
        assert!(strictly_ascending(TESTIMONIALS.iter().map(|t| t.id)));
    }

    #[test]
    fn test_exactly_one_featured_testimonial() {
        assert_eq!(TESTIMONIALS.iter().filter(|t| t.featured).count(), 1);
    }

    #[test]
    fn test_experience_fields_non_empty() {
        for e in EXPERIENCES {
            assert!(!e.company.is_empty());
            assert!(!e.role.is_empty());
            assert!(!e.period.is_empty());
            assert!(!e.description.is_empty());
            assert!(e.logo.src.starts_with("data:image/svg+xml;base64,"));
            for p in e.projects {
                assert!(!p.title.is_empty() && !p.description.is_empty() && !p.technologies.is_empty());
            }
            if let Some(training) = e.training {
                assert!(!training.is_empty());
            }
        }
    }

    #[test]
    fn test_nav_items_are_anchors() {
        assert!(NAV_ITEMS.iter().all(|item| item.href.starts_with('#') && !item.label.is_empty()));
    }

    #[test]
    fn test_profile_links() {
        assert_eq!(PROFILE.mailto(), "mailto:asmshad@gmail.com");
        assert_eq!(PROFILE.tel(), "tel:01608898818");
        assert_eq!(PROFILE.socials.len(), 4);
        assert!(PROFILE.biography.iter().all(|p| !p.is_empty()));
    }
}
