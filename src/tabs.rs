//! Tab navigation
//!
//! Maps an activated navigation control to the one visible content panel.
//! The set of tabs is fixed at startup; activation is by identifier, and a
//! panel and its control are paired by sharing the same identifier.

use crate::content::Section;

/// A content panel. Exactly one is active after activating a valid id.
#[derive(Debug, Clone)]
pub struct Panel {
    pub id: String,
    pub title: String,
    pub body: Vec<String>,
    pub active: bool,
}

/// A navigation control bound to a panel by its target id.
#[derive(Debug, Clone)]
pub struct NavControl {
    pub target: String,
    pub label: String,
    pub selected: bool,
}

/// The fixed set of panels and their controls.
#[derive(Debug, Clone)]
pub struct TabStrip {
    pub panels: Vec<Panel>,
    pub controls: Vec<NavControl>,
}

impl TabStrip {
    /// Build the strip from the authored sections. Nothing is active yet;
    /// the caller activates the default target once at startup.
    pub fn new(sections: &[Section]) -> Self {
        let panels = sections
            .iter()
            .map(|s| Panel {
                id: s.id.to_string(),
                title: s.label.to_string(),
                body: s.body.iter().map(|l| (*l).to_string()).collect(),
                active: false,
            })
            .collect();

        let controls = sections
            .iter()
            .map(|s| NavControl {
                target: s.id.to_string(),
                label: s.label.to_string(),
                selected: false,
            })
            .collect();

        Self { panels, controls }
    }

    /// Activate the panel matching `target` and deactivate all others; mark
    /// the matching control selected and all others not selected.
    ///
    /// A target matching no panel leaves every panel inactive and every
    /// control unselected. That mirrors the page this replaces and is
    /// deliberate, not an error.
    pub fn activate(&mut self, target: &str) {
        for panel in &mut self.panels {
            panel.active = panel.id == target;
        }
        for control in &mut self.controls {
            control.selected = control.target == target;
        }
    }

    /// The currently active panel, if any.
    pub fn active_panel(&self) -> Option<&Panel> {
        self.panels.iter().find(|p| p.active)
    }

    /// Index of the selected control, if any.
    pub fn selected_index(&self) -> Option<usize> {
        self.controls.iter().position(|c| c.selected)
    }

    /// Target id of the control at `index`, if in range.
    pub fn target_at(&self, index: usize) -> Option<&str> {
        self.controls.get(index).map(|c| c.target.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::sections;

    fn strip() -> TabStrip {
        TabStrip::new(sections())
    }

    #[test]
    fn test_activate_exactly_one() {
        let mut tabs = strip();
        tabs.activate("formacao");

        let active: Vec<&str> = tabs
            .panels
            .iter()
            .filter(|p| p.active)
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(active, vec!["formacao"]);

        let selected: Vec<&str> = tabs
            .controls
            .iter()
            .filter(|c| c.selected)
            .map(|c| c.target.as_str())
            .collect();
        assert_eq!(selected, vec!["formacao"]);
    }

    #[test]
    fn test_activate_idempotent() {
        let mut tabs = strip();
        tabs.activate("portfolio");
        tabs.activate("portfolio");

        assert_eq!(tabs.panels.iter().filter(|p| p.active).count(), 1);
        assert_eq!(tabs.active_panel().map(|p| p.id.as_str()), Some("portfolio"));
    }

    #[test]
    fn test_activate_switches() {
        let mut tabs = strip();
        tabs.activate("sobre");
        tabs.activate("contato");

        assert_eq!(tabs.active_panel().map(|p| p.id.as_str()), Some("contato"));
        assert_eq!(tabs.selected_index(), Some(3));
    }

    #[test]
    fn test_unknown_target_deactivates_all() {
        let mut tabs = strip();
        tabs.activate("sobre");
        tabs.activate("nao-existe");

        assert!(tabs.panels.iter().all(|p| !p.active));
        assert!(tabs.controls.iter().all(|c| !c.selected));
        assert!(tabs.active_panel().is_none());
        assert!(tabs.selected_index().is_none());
    }
}
