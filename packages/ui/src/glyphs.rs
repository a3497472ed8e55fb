//! Icon choices for content enums.

use dioxus::prelude::*;
use site::{Network, SkillIcon, TestimonialIcon};

use crate::brands::{
    FaDiscord, FaFacebook, FaGitAlt, FaGithub, FaJs, FaLaravel, FaLinkedin, FaNodeJs, FaReact,
};
use crate::icons::{FaBullseye, FaCode, FaDatabase, FaDiamond, FaFileCode, FaLayerGroup, FaLeaf, FaN};
use crate::Icon;

#[component]
pub fn NetworkGlyph(
    network: Network,
    #[props(default = 20)] size: u32,
    #[props(default)] class: String,
) -> Element {
    match network {
        Network::Facebook => rsx! { Icon { icon: FaFacebook, width: size, height: size, class } },
        Network::GitHub => rsx! { Icon { icon: FaGithub, width: size, height: size, class } },
        Network::LinkedIn => rsx! { Icon { icon: FaLinkedin, width: size, height: size, class } },
        Network::Discord => rsx! { Icon { icon: FaDiscord, width: size, height: size, class } },
    }
}

#[component]
pub fn SkillGlyph(icon: SkillIcon, #[props(default = 40)] size: u32) -> Element {
    match icon {
        SkillIcon::JavaScript => rsx! { Icon { icon: FaJs, width: size, height: size } },
        SkillIcon::TypeScript => rsx! { Icon { icon: FaFileCode, width: size, height: size } },
        SkillIcon::React => rsx! { Icon { icon: FaReact, width: size, height: size } },
        SkillIcon::NextJs => rsx! { Icon { icon: FaN, width: size, height: size } },
        SkillIcon::NodeJs => rsx! { Icon { icon: FaNodeJs, width: size, height: size } },
        SkillIcon::Laravel => rsx! { Icon { icon: FaLaravel, width: size, height: size } },
        SkillIcon::Prisma => rsx! { Icon { icon: FaDiamond, width: size, height: size } },
        SkillIcon::PostgreSql => rsx! { Icon { icon: FaDatabase, width: size, height: size } },
        SkillIcon::MongoDb => rsx! { Icon { icon: FaLeaf, width: size, height: size } },
        SkillIcon::Git => rsx! { Icon { icon: FaGitAlt, width: size, height: size } },
    }
}

#[component]
pub fn TestimonialGlyph(icon: TestimonialIcon) -> Element {
    match icon {
        TestimonialIcon::Code => rsx! { Icon { icon: FaCode, width: 40, height: 40 } },
        TestimonialIcon::Layers => rsx! { Icon { icon: FaLayerGroup, width: 40, height: 40 } },
        TestimonialIcon::Target => rsx! { Icon { icon: FaBullseye, width: 40, height: 40 } },
    }
}
