use crate::cli::{Command, GroupCommand, ItemCommand};
use snipdeck_core::{
    imports, run_insert_flow, Catalog, FlowOutcome, JsonFileStore, QuickCodeService, Result,
    TextBufferEditor,
};
use snipdeck_ui::{browse_catalog, manage_quickcode, TerminalMenu, TerminalSession};
use std::fs;
use std::path::{Path, PathBuf};

pub fn handle_command(command: Option<Command>) -> Result<()> {
    match command {
        Some(command) => handle_subcommand(command),
        // Default: open the catalog browser when no command is given
        None => browse_catalog(&Catalog::new()),
    }
}

fn handle_subcommand(command: Command) -> Result<()> {
    match command {
        Command::Browse => browse_catalog(&Catalog::new()),
        Command::Manage => {
            let mut service = open_service()?;
            manage_quickcode(&mut service)
        }
        Command::Insert {
            file,
            offset,
            quick,
        } => handle_insert(&file, offset, quick),
        Command::List => handle_list(),
        Command::Group { command } => handle_group_command(command),
        Command::Item { command } => handle_item_command(command),
    }
}

fn open_service() -> Result<QuickCodeService<JsonFileStore>> {
    QuickCodeService::new(JsonFileStore::at_default_location()?)
}

fn handle_insert(file: &Path, offset: usize, quick: bool) -> Result<()> {
    let content = fs::read_to_string(file)?;
    let mut editor = TextBufferEditor::new(content, offset);

    let outcome = {
        let mut session = TerminalSession::begin()?;
        let mut menu = TerminalMenu::new(&mut session);
        if quick {
            let service = open_service()?;
            run_insert_flow(&service, &mut menu, &mut editor)?
        } else {
            let catalog = Catalog::new();
            run_insert_flow(&catalog, &mut menu, &mut editor)?
        }
    };

    match outcome {
        FlowOutcome::Inserted => {
            fs::write(file, editor.text())?;
            println!("Inserted into {}", file.display());
        }
        FlowOutcome::Cancelled => println!("Cancelled, nothing inserted"),
    }
    Ok(())
}

fn handle_list() -> Result<()> {
    let catalog = Catalog::new();
    println!("Catalog:");
    for group in catalog.groups()? {
        println!("  {}", group.title);
        for component in &group.components {
            println!("    - {}", component.name);
        }
    }

    let service = open_service()?;
    println!();
    println!("Quick code:");
    if service.groups().is_empty() {
        println!("  (no groups yet - try `snipdeck group add <name>`)");
        return Ok(());
    }
    for group in service.groups() {
        println!(
            "  {} {}",
            if group.enabled { "[x]" } else { "[ ]" },
            group.name
        );
        for (i, item) in group.code_items.iter().enumerate() {
            println!(
                "    [{}] {} {}",
                i,
                if item.enabled { "[x]" } else { "[ ]" },
                item.name
            );
        }
    }
    Ok(())
}

fn handle_group_command(command: GroupCommand) -> Result<()> {
    let mut service = open_service()?;
    match command {
        GroupCommand::Add { name } => {
            if service.add_group(&name)? {
                println!("Group '{}' added", name.trim());
            } else {
                println!("Group name is blank or already in use");
            }
        }
        GroupCommand::Rename { name, new_name } => {
            let enabled = group_enabled(&service, &name);
            if service.edit_group(&name, &new_name, enabled)? {
                println!("Group renamed to '{}'", new_name.trim());
            } else {
                println!("New group name is blank or already in use");
            }
        }
        GroupCommand::Enable { name } => {
            service.edit_group(&name, &name, true)?;
            println!("Group '{}' enabled", name);
        }
        GroupCommand::Disable { name } => {
            service.edit_group(&name, &name, false)?;
            println!("Group '{}' disabled", name);
        }
        GroupCommand::Delete { name } => {
            service.delete_group(&name)?;
            println!("Group '{}' deleted", name);
        }
        GroupCommand::Move { name, index } => {
            service.move_group(&name, index)?;
            println!("Group '{}' moved to position {}", name, index);
        }
    }
    Ok(())
}

fn group_enabled<S: snipdeck_core::StateStore>(
    service: &QuickCodeService<S>,
    name: &str,
) -> bool {
    service.find_group(name).map(|g| g.enabled).unwrap_or(true)
}

fn handle_item_command(command: ItemCommand) -> Result<()> {
    let mut service = open_service()?;
    match command {
        ItemCommand::Add {
            group,
            name,
            imports: raw_imports,
            code,
            code_file,
        } => {
            let raw_code = match resolve_code(code, code_file)? {
                Some(code) => code,
                None => {
                    println!("Provide the snippet code with --code or --code-file");
                    return Ok(());
                }
            };
            if service.add_code_item(&group, &name, &raw_imports, &raw_code)? {
                println!("Snippet '{}' added to '{}'", name.trim(), group);
            } else {
                println!("Snippet name cannot be blank");
            }
        }
        ItemCommand::Edit {
            group,
            index,
            name,
            imports: raw_imports,
            code,
            code_file,
        } => {
            let existing = service
                .find_group(&group)
                .and_then(|g| g.code_items.get(index))
                .cloned();
            let existing = match existing {
                Some(item) => item,
                None => {
                    println!("No snippet at position {} in '{}'", index, group);
                    return Ok(());
                }
            };
            let name = name.unwrap_or_else(|| existing.name.clone());
            let raw_imports = raw_imports.unwrap_or_else(|| {
                imports::generate_imports_code(&existing.imports).unwrap_or_default()
            });
            let raw_code = match resolve_code(code, code_file)? {
                Some(code) => code,
                None => existing.code.clone(),
            };
            if service.edit_code_item(&group, index, &name, &raw_imports, &raw_code)? {
                println!("Snippet updated");
            } else {
                println!("Snippet name cannot be blank");
            }
        }
        ItemCommand::Delete { group, index } => {
            service.delete_code_item(&group, index)?;
            println!("Snippet deleted");
        }
        ItemCommand::Move {
            group,
            index,
            new_index,
        } => {
            service.move_code_item(&group, index, new_index)?;
            println!("Snippet moved to position {}", new_index);
        }
        ItemCommand::Enable { group, index } => {
            service.set_code_item_enabled(&group, index, true)?;
            println!("Snippet enabled");
        }
        ItemCommand::Disable { group, index } => {
            service.set_code_item_enabled(&group, index, false)?;
            println!("Snippet disabled");
        }
    }
    Ok(())
}

fn resolve_code(code: Option<String>, code_file: Option<PathBuf>) -> Result<Option<String>> {
    match (code, code_file) {
        (Some(code), _) => Ok(Some(code)),
        (None, Some(path)) => Ok(Some(fs::read_to_string(path)?)),
        (None, None) => Ok(None),
    }
}
