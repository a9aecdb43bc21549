//! The static component catalog.
//!
//! An immutable, hierarchical list of insertable UI component templates,
//! grouped by category. Built once on first access from the definitions in
//! [`content`] and cached for the process lifetime. There is no mutation
//! API; all writes live in the quick code store.

mod content;

use crate::error::{Result, SnipdeckError};
use once_cell::unsync::OnceCell;

pub(crate) use content::{ComponentDef, GroupDef};

/// One insertable component: descriptive metadata plus its code templates.
#[derive(Debug, Clone)]
pub struct Component {
    pub name: String,
    pub description: String,
    pub spec_url: String,
    pub guidelines_url: String,
    pub docs_url: String,
    pub menu_screenshot: String,
    pub details_screenshot: String,
    pub imports: Vec<String>,
    /// The default implementation, inserted verbatim.
    pub code: String,
    pub code_tip: Option<String>,
    /// Optional customized implementation variant.
    pub custom_code: Option<String>,
    pub custom_code_tip: Option<String>,
}

impl Component {
    /// Build a component from a static definition, failing fast if any
    /// required field is blank.
    fn from_def(def: &ComponentDef) -> Result<Self> {
        if def.imports.is_empty() {
            return Err(SnipdeckError::InvalidComponent {
                name: def.name.to_string(),
                field: "imports",
            });
        }
        Ok(Component {
            name: required(def.name, "name", def.name)?,
            description: required(def.name, "description", def.description)?,
            spec_url: required(def.name, "spec_url", def.spec_url)?,
            guidelines_url: required(def.name, "guidelines_url", def.guidelines_url)?,
            docs_url: required(def.name, "docs_url", def.docs_url)?,
            menu_screenshot: required(def.name, "screenshot", def.screenshot)?,
            details_screenshot: required(def.name, "screenshot", def.screenshot)?,
            imports: def.imports.iter().map(|s| s.to_string()).collect(),
            code: required(def.name, "code", def.code)?,
            code_tip: def.code_tip.map(str::to_string),
            custom_code: def.custom_code.map(str::to_string),
            custom_code_tip: def.custom_code_tip.map(str::to_string),
        })
    }
}

fn required(component: &str, field: &'static str, value: &str) -> Result<String> {
    if value.trim().is_empty() {
        return Err(SnipdeckError::InvalidComponent {
            name: component.to_string(),
            field,
        });
    }
    Ok(value.to_string())
}

/// A named category of components.
#[derive(Debug, Clone)]
pub struct ComponentGroup {
    pub title: String,
    pub components: Vec<Component>,
    /// Whether the group surfaces in the persistent side panel.
    /// Groups hidden there still appear in the quick-insert picker.
    pub show_in_panel: bool,
}

/// The full catalog, built lazily on first access and cached.
pub struct Catalog {
    groups: OnceCell<Vec<ComponentGroup>>,
}

impl Catalog {
    pub fn new() -> Self {
        Catalog {
            groups: OnceCell::new(),
        }
    }

    /// The ordered list of catalog groups.
    ///
    /// The first call builds the catalog; a definition missing a required
    /// field fails the build here, not during later lookups.
    pub fn groups(&self) -> Result<&[ComponentGroup]> {
        self.groups
            .get_or_try_init(|| build_groups(&content::groups()))
            .map(Vec::as_slice)
    }

    /// Groups shown in the persistent side panel.
    pub fn panel_groups(&self) -> Result<Vec<&ComponentGroup>> {
        Ok(self.groups()?.iter().filter(|g| g.show_in_panel).collect())
    }

    pub fn find_group(&self, title: &str) -> Result<&ComponentGroup> {
        self.groups()?
            .iter()
            .find(|g| g.title == title)
            .ok_or_else(|| SnipdeckError::GroupNotFound(title.to_string()))
    }

    pub fn find_component<'a>(
        &self,
        group: &'a ComponentGroup,
        name: &str,
    ) -> Result<&'a Component> {
        group
            .components
            .iter()
            .find(|c| c.name == name)
            .ok_or_else(|| SnipdeckError::ComponentNotFound {
                group: group.title.clone(),
                name: name.to_string(),
            })
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

fn build_groups(defs: &[GroupDef]) -> Result<Vec<ComponentGroup>> {
    defs.iter()
        .map(|def| {
            Ok(ComponentGroup {
                title: def.title.to_string(),
                components: def
                    .components
                    .iter()
                    .map(Component::from_def)
                    .collect::<Result<Vec<_>>>()?,
                show_in_panel: def.show_in_panel,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_entry_has_its_required_fields() {
        let catalog = Catalog::new();
        let groups = catalog.groups().expect("catalog builds");
        assert!(!groups.is_empty());
        for group in groups {
            assert!(!group.title.trim().is_empty());
            for c in &group.components {
                assert!(!c.name.trim().is_empty());
                assert!(!c.description.trim().is_empty());
                assert!(!c.spec_url.trim().is_empty());
                assert!(!c.guidelines_url.trim().is_empty());
                assert!(!c.docs_url.trim().is_empty());
                assert!(!c.menu_screenshot.trim().is_empty());
                assert!(!c.details_screenshot.trim().is_empty());
                assert!(!c.imports.is_empty());
                assert!(!c.code.trim().is_empty());
            }
        }
    }

    #[test]
    fn group_titles_are_unique_and_names_unique_within_group() {
        let catalog = Catalog::new();
        let groups = catalog.groups().unwrap();
        let mut titles: Vec<&str> = groups.iter().map(|g| g.title.as_str()).collect();
        titles.sort_unstable();
        titles.dedup();
        assert_eq!(titles.len(), groups.len());
        for group in groups {
            let mut names: Vec<&str> =
                group.components.iter().map(|c| c.name.as_str()).collect();
            names.sort_unstable();
            names.dedup();
            assert_eq!(names.len(), group.components.len());
        }
    }

    #[test]
    fn construction_fails_on_blank_required_field() {
        let def = ComponentDef {
            name: "Broken",
            description: "   ",
            spec_url: "https://example.com/spec",
            guidelines_url: "https://example.com/guidelines",
            docs_url: "https://example.com/docs",
            screenshot: "broken",
            imports: &["a.b.C"],
            code: "Broken()",
            code_tip: None,
            custom_code: None,
            custom_code_tip: None,
        };
        let err = Component::from_def(&def).unwrap_err();
        assert!(matches!(
            err,
            SnipdeckError::InvalidComponent {
                field: "description",
                ..
            }
        ));
    }

    #[test]
    fn construction_fails_without_imports() {
        let def = ComponentDef {
            name: "NoImports",
            description: "desc",
            spec_url: "https://example.com/spec",
            guidelines_url: "https://example.com/guidelines",
            docs_url: "https://example.com/docs",
            screenshot: "none",
            imports: &[],
            code: "NoImports()",
            code_tip: None,
            custom_code: None,
            custom_code_tip: None,
        };
        assert!(Component::from_def(&def).is_err());
    }

    #[test]
    fn find_group_reports_not_found() {
        let catalog = Catalog::new();
        let err = catalog.find_group("No Such Group").unwrap_err();
        assert!(matches!(err, SnipdeckError::GroupNotFound(_)));
    }

    #[test]
    fn find_component_reports_not_found() {
        let catalog = Catalog::new();
        let group = catalog.find_group("Buttons").unwrap();
        let err = catalog.find_component(group, "No Such Button").unwrap_err();
        assert!(matches!(err, SnipdeckError::ComponentNotFound { .. }));
    }

    #[test]
    fn buttons_group_offers_both_template_variants() {
        let catalog = Catalog::new();
        let group = catalog.find_group("Buttons").unwrap();
        let component = catalog.find_component(group, "Elevated Button").unwrap();
        assert!(component.custom_code.is_some());
    }
}
