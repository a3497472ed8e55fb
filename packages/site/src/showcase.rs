//! Show-more state of the project showcase.

use crate::models::Project;

/// Which part of the project list is on screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Showcase {
    /// Projects shown while collapsed
    pub initial: usize,
    pub show_all: bool,
}

impl Showcase {
    pub fn new(initial: usize) -> Self {
        Self {
            initial,
            show_all: false,
        }
    }

    pub fn toggle(&mut self) {
        self.show_all = !self.show_all;
    }

    pub fn visible<'a>(&self, projects: &'a [Project]) -> &'a [Project] {
        if self.show_all {
            projects
        } else {
            &projects[..self.initial.min(projects.len())]
        }
    }

    /// Whether a toggle button makes sense for a list of `total` projects.
    pub fn has_more(&self, total: usize) -> bool {
        total > self.initial
    }

    pub fn label(&self) -> &'static str {
        if self.show_all {
            "Show Less Projects"
        } else {
            "Show More Projects"
        }
    }

    /// Rotation of the chevron next to the label, in degrees.
    pub fn chevron_rotation(&self) -> u16 {
        if self.show_all {
            180
        } else {
            0
        }
    }
}

impl Default for Showcase {
    fn default() -> Self {
        Self::new(3)
    }
}

/// Even rows put the image left, odd rows right.
pub fn image_first(index: usize) -> bool {
    index % 2 == 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::PROJECTS;

    #[test]
    fn test_collapsed_shows_initial() {
        let showcase = Showcase::default();
        let visible = showcase.visible(PROJECTS);
        assert_eq!(visible.len(), 3);
        assert_eq!(visible[0].id, 1);
        assert_eq!(showcase.label(), "Show More Projects");
        assert_eq!(showcase.chevron_rotation(), 0);
    }

    #[test]
    fn test_expanded_shows_all() {
        let mut showcase = Showcase::default();
        showcase.toggle();
        assert_eq!(showcase.visible(PROJECTS).len(), PROJECTS.len());
        assert_eq!(showcase.label(), "Show Less Projects");
        assert_eq!(showcase.chevron_rotation(), 180);
        showcase.toggle();
        assert_eq!(showcase.visible(PROJECTS).len(), 3);
    }

    #[test]
    fn test_initial_larger_than_list() {
        let showcase = Showcase::new(50);
        assert_eq!(showcase.visible(PROJECTS).len(), PROJECTS.len());
        assert!(!showcase.has_more(PROJECTS.len()));
        assert!(Showcase::default().has_more(PROJECTS.len()));
    }

    #[test]
    fn test_alternating_layout() {
        assert!(image_first(0));
        assert!(!image_first(1));
        assert!(image_first(4));
    }
}
