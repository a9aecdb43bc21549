//! The guided insertion flow.
//!
//! Drives a two-level selection menu over a template source (the static
//! catalog or the quick code store) and performs the terminal action:
//! merging required imports into the file and inserting the chosen template
//! at the caret. Host collaborators are abstracted behind [`EditorHost`]
//! and [`SelectionMenu`]; cancellation at any level mutates nothing.

use crate::catalog::Catalog;
use crate::error::Result;
use crate::imports;
use crate::quickcode::{QuickCodeService, StateStore};

/// Editor surface supplied by the host. The flow never parses or rewrites
/// unrelated file content through this interface.
pub trait EditorHost {
    fn caret_offset(&self) -> usize;
    fn insert_text(&mut self, offset: usize, text: &str);
    /// Existing import statements of the file, in order.
    fn import_statements(&self) -> Vec<String>;
    /// Append one import statement to the file's import section.
    fn append_import(&mut self, statement: &str);
}

/// Outcome of one modal list menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Item(usize),
    /// The dedicated back entry was chosen.
    Back,
    /// The menu was dismissed outright.
    Cancelled,
}

/// Modal single-select popup supplied by the host.
pub trait SelectionMenu {
    fn choose(
        &mut self,
        title: &str,
        items: &[String],
        back_label: &str,
        back_is_last: bool,
    ) -> Result<MenuChoice>;
}

/// One insertable code variant of a leaf item.
#[derive(Debug, Clone)]
pub struct TemplateVariant {
    pub label: String,
    pub imports: Vec<String>,
    pub code: String,
}

/// Read-only view a source exposes to the insertion flow.
pub trait TemplateSource {
    fn group_titles(&self) -> Result<Vec<String>>;
    fn item_names(&self, group: &str) -> Result<Vec<String>>;
    fn variants(&self, group: &str, item: &str) -> Result<Vec<TemplateVariant>>;
}

impl TemplateSource for Catalog {
    fn group_titles(&self) -> Result<Vec<String>> {
        Ok(self.groups()?.iter().map(|g| g.title.clone()).collect())
    }

    fn item_names(&self, group: &str) -> Result<Vec<String>> {
        Ok(self
            .find_group(group)?
            .components
            .iter()
            .map(|c| c.name.clone())
            .collect())
    }

    fn variants(&self, group: &str, item: &str) -> Result<Vec<TemplateVariant>> {
        let g = self.find_group(group)?;
        let component = self.find_component(g, item)?;
        let mut variants = vec![TemplateVariant {
            label: "Default".to_string(),
            imports: component.imports.clone(),
            code: component.code.clone(),
        }];
        if let Some(custom) = &component.custom_code {
            variants.push(TemplateVariant {
                label: "Customized".to_string(),
                imports: component.imports.clone(),
                code: custom.clone(),
            });
        }
        Ok(variants)
    }
}

/// The quick code store surfaces only enabled groups and snippets.
impl<S: StateStore> TemplateSource for QuickCodeService<S> {
    fn group_titles(&self) -> Result<Vec<String>> {
        Ok(self
            .groups()
            .iter()
            .filter(|g| g.enabled)
            .map(|g| g.name.clone())
            .collect())
    }

    fn item_names(&self, group: &str) -> Result<Vec<String>> {
        Ok(self
            .find_group(group)
            .map(|g| {
                g.code_items
                    .iter()
                    .filter(|i| i.enabled)
                    .map(|i| i.name.clone())
                    .collect()
            })
            .unwrap_or_default())
    }

    fn variants(&self, group: &str, item: &str) -> Result<Vec<TemplateVariant>> {
        Ok(self
            .find_group(group)
            .and_then(|g| g.code_items.iter().find(|i| i.enabled && i.name == item))
            .map(|i| {
                vec![TemplateVariant {
                    label: "Default".to_string(),
                    imports: i.imports.clone(),
                    code: i.code.clone(),
                }]
            })
            .unwrap_or_default())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowOutcome {
    Inserted,
    Cancelled,
}

enum Step {
    Groups,
    Items { group: String },
}

enum VariantPick {
    Chosen(TemplateVariant),
    Back,
    Cancelled,
}

/// Run the insertion flow to completion.
///
/// Group titles are re-fetched every time the first menu is shown, so a
/// source mutated between steps is reflected on "go back".
pub fn run_insert_flow(
    source: &dyn TemplateSource,
    menu: &mut dyn SelectionMenu,
    editor: &mut dyn EditorHost,
) -> Result<FlowOutcome> {
    let mut step = Step::Groups;
    loop {
        step = match step {
            Step::Groups => {
                let titles = source.group_titles()?;
                match menu.choose("Choose a component type", &titles, "Close menu", true)? {
                    MenuChoice::Item(i) => match titles.into_iter().nth(i) {
                        Some(group) => Step::Items { group },
                        None => return Ok(FlowOutcome::Cancelled),
                    },
                    MenuChoice::Back | MenuChoice::Cancelled => {
                        return Ok(FlowOutcome::Cancelled)
                    }
                }
            }
            Step::Items { group } => {
                let names = source.item_names(&group)?;
                match menu.choose("Choose a component", &names, "Go back", false)? {
                    MenuChoice::Item(i) => {
                        let name = match names.get(i) {
                            Some(name) => name,
                            None => return Ok(FlowOutcome::Cancelled),
                        };
                        match pick_variant(menu, source.variants(&group, name)?)? {
                            VariantPick::Chosen(variant) => {
                                insert_template(editor, &variant);
                                return Ok(FlowOutcome::Inserted);
                            }
                            // stay on the item menu
                            VariantPick::Back => Step::Items { group },
                            VariantPick::Cancelled => return Ok(FlowOutcome::Cancelled),
                        }
                    }
                    MenuChoice::Back => Step::Groups,
                    MenuChoice::Cancelled => return Ok(FlowOutcome::Cancelled),
                }
            }
        };
    }
}

fn pick_variant(
    menu: &mut dyn SelectionMenu,
    mut variants: Vec<TemplateVariant>,
) -> Result<VariantPick> {
    if variants.len() <= 1 {
        return Ok(match variants.pop() {
            Some(v) => VariantPick::Chosen(v),
            None => VariantPick::Back,
        });
    }
    let labels: Vec<String> = variants.iter().map(|v| v.label.clone()).collect();
    match menu.choose("Choose an implementation", &labels, "Go back", false)? {
        MenuChoice::Item(i) if i < variants.len() => {
            Ok(VariantPick::Chosen(variants.swap_remove(i)))
        }
        MenuChoice::Item(_) | MenuChoice::Back => Ok(VariantPick::Back),
        MenuChoice::Cancelled => Ok(VariantPick::Cancelled),
    }
}

/// Merge the template's imports into the file (duplicates skipped, order
/// preserved), then insert the code at the caret.
fn insert_template(editor: &mut dyn EditorHost, variant: &TemplateVariant) {
    let existing = imports::parse_imports(&editor.import_statements().join("\n"));
    let mut present = existing;
    for path in &variant.imports {
        if !present.iter().any(|p| p == path) {
            editor.append_import(&format!("import {}", path));
            present.push(path.clone());
        }
    }
    editor.insert_text(editor.caret_offset(), &variant.code);
}

/// [`EditorHost`] over a plain string buffer.
///
/// Used by the CLI when inserting into a file on disk, and by tests. New
/// imports land after the last existing import line, or at the top of the
/// buffer when there is none; the caret tracks edits made above it. A caret
/// inside the import header is snapped to just below it, so inserted code
/// never splits an import line from the rest of the header.
pub struct TextBufferEditor {
    text: String,
    caret: usize,
}

impl TextBufferEditor {
    pub fn new(text: impl Into<String>, caret: usize) -> Self {
        let text = text.into();
        let caret = clamp_to_char_boundary(&text, caret).max(import_section_end(&text));
        TextBufferEditor { text, caret }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Byte offset just past the last import line.
fn import_section_end(text: &str) -> usize {
    let mut end = 0;
    let mut pos = 0;
    for line in text.split_inclusive('\n') {
        if line.trim_start().starts_with("import ") {
            end = pos + line.len();
        }
        pos += line.len();
    }
    end
}

impl EditorHost for TextBufferEditor {
    fn caret_offset(&self) -> usize {
        self.caret
    }

    fn insert_text(&mut self, offset: usize, text: &str) {
        let offset = clamp_to_char_boundary(&self.text, offset);
        self.text.insert_str(offset, text);
        if offset <= self.caret {
            self.caret += text.len();
        }
    }

    fn import_statements(&self) -> Vec<String> {
        self.text
            .lines()
            .filter(|l| l.trim_start().starts_with("import "))
            .map(|l| l.trim().to_string())
            .collect()
    }

    fn append_import(&mut self, statement: &str) {
        let at = import_section_end(&self.text);
        self.insert_text(at, &format!("{}\n", statement));
    }
}

fn clamp_to_char_boundary(text: &str, offset: usize) -> usize {
    let mut offset = offset.min(text.len());
    while offset > 0 && !text.is_char_boundary(offset) {
        offset -= 1;
    }
    offset
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quickcode::MemoryStore;

    /// Menu that replays a fixed sequence of choices.
    struct ScriptedMenu {
        choices: Vec<MenuChoice>,
        shown: Vec<String>,
    }

    impl ScriptedMenu {
        fn new(choices: Vec<MenuChoice>) -> Self {
            ScriptedMenu {
                choices,
                shown: Vec::new(),
            }
        }
    }

    impl SelectionMenu for ScriptedMenu {
        fn choose(
            &mut self,
            title: &str,
            _items: &[String],
            _back_label: &str,
            _back_is_last: bool,
        ) -> Result<MenuChoice> {
            self.shown.push(title.to_string());
            Ok(if self.choices.is_empty() {
                MenuChoice::Cancelled
            } else {
                self.choices.remove(0)
            })
        }
    }

    fn kotlin_file() -> &'static str {
        "import androidx.compose.material3.Button\n\nfun Screen() {\n    \n}\n"
    }

    #[test]
    fn back_at_depth_one_performs_no_edits() {
        let catalog = Catalog::new();
        let mut menu = ScriptedMenu::new(vec![MenuChoice::Back]);
        let mut editor = TextBufferEditor::new(kotlin_file(), 0);
        let outcome = run_insert_flow(&catalog, &mut menu, &mut editor).unwrap();
        assert_eq!(outcome, FlowOutcome::Cancelled);
        assert_eq!(editor.text(), kotlin_file());
    }

    #[test]
    fn back_at_depth_one_writes_no_quickcode_state() {
        let store = MemoryStore::new();
        let mut svc = crate::quickcode::QuickCodeService::new(store).unwrap();
        svc.add_group("G").unwrap();
        svc.add_code_item("G", "snip", "import x.Y", "snip()").unwrap();
        let saves_before = 2;

        let mut menu = ScriptedMenu::new(vec![MenuChoice::Back]);
        let mut editor = TextBufferEditor::new("", 0);
        let outcome = run_insert_flow(&svc, &mut menu, &mut editor).unwrap();
        assert_eq!(outcome, FlowOutcome::Cancelled);
        assert_eq!(svc.store().save_count(), saves_before);
        assert_eq!(editor.text(), "");
    }

    #[test]
    fn back_at_depth_two_returns_to_group_menu() {
        let catalog = Catalog::new();
        let mut menu = ScriptedMenu::new(vec![
            MenuChoice::Item(0), // into "Buttons"
            MenuChoice::Back,    // back out
            MenuChoice::Back,    // close
        ]);
        let mut editor = TextBufferEditor::new("", 0);
        let outcome = run_insert_flow(&catalog, &mut menu, &mut editor).unwrap();
        assert_eq!(outcome, FlowOutcome::Cancelled);
        assert_eq!(
            menu.shown,
            vec![
                "Choose a component type",
                "Choose a component",
                "Choose a component type"
            ]
        );
    }

    #[test]
    fn selecting_a_component_inserts_code_and_merges_imports() {
        let catalog = Catalog::new();
        // Buttons -> Filled Button -> Default variant
        let mut menu = ScriptedMenu::new(vec![
            MenuChoice::Item(0),
            MenuChoice::Item(1),
            MenuChoice::Item(0),
        ]);
        let caret = kotlin_file().find("    \n").unwrap() + 4;
        let mut editor = TextBufferEditor::new(kotlin_file(), caret);
        let outcome = run_insert_flow(&catalog, &mut menu, &mut editor).unwrap();
        assert_eq!(outcome, FlowOutcome::Inserted);
        // the Button import already exists and is not duplicated
        assert_eq!(
            editor.import_statements(),
            vec!["import androidx.compose.material3.Button".to_string()]
        );
        assert!(editor.text().contains("Button(\n    onClick"));
    }

    #[test]
    fn missing_imports_are_appended_in_order() {
        let catalog = Catalog::new();
        // Buttons -> Elevated Button -> Customized variant
        let mut menu = ScriptedMenu::new(vec![
            MenuChoice::Item(0),
            MenuChoice::Item(0),
            MenuChoice::Item(1),
        ]);
        let mut editor = TextBufferEditor::new(kotlin_file(), 0);
        run_insert_flow(&catalog, &mut menu, &mut editor).unwrap();
        assert_eq!(
            editor.import_statements(),
            vec![
                "import androidx.compose.material3.Button".to_string(),
                "import androidx.compose.material3.ElevatedButton".to_string(),
            ]
        );
        assert!(editor.text().contains("elevation = ButtonDefaults.elevatedButtonElevation()"));
    }

    #[test]
    fn quickcode_source_hides_disabled_groups_and_items() {
        let mut svc = crate::quickcode::QuickCodeService::new(MemoryStore::new()).unwrap();
        svc.add_group("Visible").unwrap();
        svc.add_group("Hidden").unwrap();
        svc.edit_group("Hidden", "Hidden", false).unwrap();
        svc.add_code_item("Visible", "on", "", "on()").unwrap();
        svc.add_code_item("Visible", "off", "", "off()").unwrap();
        svc.set_code_item_enabled("Visible", 1, false).unwrap();

        assert_eq!(svc.group_titles().unwrap(), vec!["Visible".to_string()]);
        assert_eq!(svc.item_names("Visible").unwrap(), vec!["on".to_string()]);
        assert!(svc.variants("Visible", "off").unwrap().is_empty());
    }

    #[test]
    fn caret_above_import_header_inserts_below_it() {
        let catalog = Catalog::new();
        // Buttons -> Filled Button -> Default; its import already exists
        let mut menu = ScriptedMenu::new(vec![
            MenuChoice::Item(0),
            MenuChoice::Item(1),
            MenuChoice::Item(0),
        ]);
        // byte 0 is the CLI's default offset
        let mut editor = TextBufferEditor::new(kotlin_file(), 0);
        let outcome = run_insert_flow(&catalog, &mut menu, &mut editor).unwrap();
        assert_eq!(outcome, FlowOutcome::Inserted);
        assert_eq!(
            editor.import_statements(),
            vec!["import androidx.compose.material3.Button".to_string()]
        );
        // the existing import line stays intact, code lands on the next line
        assert!(editor
            .text()
            .starts_with("import androidx.compose.material3.Button\nButton(\n"));
    }

    #[test]
    fn text_buffer_appends_imports_at_top_when_none_exist() {
        let mut editor = TextBufferEditor::new("fun main() {}\n", 0);
        editor.append_import("import a.b.C");
        assert!(editor.text().starts_with("import a.b.C\n"));
    }

    #[test]
    fn caret_tracks_import_insertions_above_it() {
        let text = "import a.b.C\n\nbody\n";
        let caret = text.len() - 1;
        let mut editor = TextBufferEditor::new(text, caret);
        editor.append_import("import x.Y");
        editor.insert_text(editor.caret_offset(), "X");
        assert_eq!(editor.text(), "import a.b.C\nimport x.Y\n\nbodyX\n");
    }
}
