use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use snipdeck_core::{QuickCodeService, Result, StateStore};

use crate::common::{show_message, TerminalSession};

enum Screen {
    Groups,
    Items { group: String },
}

/// The quick code manager panel: toggle, delete and reorder groups and
/// snippets. Adding and editing text stays on the CLI.
pub fn manage_quickcode<S: StateStore>(service: &mut QuickCodeService<S>) -> Result<()> {
    let mut session = TerminalSession::begin()?;
    let mut screen = Screen::Groups;
    let mut state = ListState::default();
    state.select(Some(0));

    loop {
        match screen {
            Screen::Groups => {
                let rows: Vec<String> = service
                    .groups()
                    .iter()
                    .map(|g| {
                        format!(
                            "[{}] {} ({} snippets)",
                            if g.enabled { "x" } else { " " },
                            g.name,
                            g.code_items.len()
                        )
                    })
                    .collect();
                draw(&mut session, " Quick Code Groups ", &rows, &mut state, GROUP_HELP)?;

                let selected = state.selected().unwrap_or(0);
                let name = service.groups().get(selected).map(|g| g.name.clone());
                match read_key()? {
                    Key::Up => state.select(Some(selected.saturating_sub(1))),
                    Key::Down => {
                        state.select(Some((selected + 1).min(rows.len().saturating_sub(1))))
                    }
                    Key::Enter => {
                        if let Some(group) = name {
                            screen = Screen::Items { group };
                            state.select(Some(0));
                        }
                    }
                    Key::Toggle => {
                        if let Some(group) = name {
                            let enabled = service
                                .find_group(&group)
                                .map(|g| g.enabled)
                                .unwrap_or(true);
                            service.edit_group(&group, &group, !enabled)?;
                        }
                    }
                    Key::Delete => {
                        if let Some(group) = name {
                            service.delete_group(&group)?;
                            clamp(&mut state, service.groups().len());
                            show_message(&mut session, "Group deleted", Color::Green)?;
                        }
                    }
                    Key::MoveUp => {
                        if let Some(group) = name {
                            service.move_group(&group, selected.saturating_sub(1))?;
                            state.select(Some(selected.saturating_sub(1)));
                        }
                    }
                    Key::MoveDown => {
                        if let Some(group) = name {
                            let last = service.groups().len().saturating_sub(1);
                            service.move_group(&group, (selected + 1).min(last))?;
                            state.select(Some((selected + 1).min(last)));
                        }
                    }
                    Key::Back | Key::Quit => return Ok(()),
                    Key::Other => {}
                }
            }
            Screen::Items { ref group } => {
                let items: Vec<String> = service
                    .find_group(group)
                    .map(|g| {
                        g.code_items
                            .iter()
                            .map(|i| {
                                format!("[{}] {}", if i.enabled { "x" } else { " " }, i.name)
                            })
                            .collect()
                    })
                    .unwrap_or_default();
                let title = format!(" {} ", group);
                draw(&mut session, &title, &items, &mut state, ITEM_HELP)?;

                let selected = state.selected().unwrap_or(0);
                let group_name = group.clone();
                match read_key()? {
                    Key::Up => state.select(Some(selected.saturating_sub(1))),
                    Key::Down => {
                        state.select(Some((selected + 1).min(items.len().saturating_sub(1))))
                    }
                    Key::Toggle => {
                        let enabled = service
                            .find_group(&group_name)
                            .and_then(|g| g.code_items.get(selected))
                            .map(|i| i.enabled)
                            .unwrap_or(true);
                        service.set_code_item_enabled(&group_name, selected, !enabled)?;
                    }
                    Key::Delete => {
                        if selected < items.len() {
                            service.delete_code_item(&group_name, selected)?;
                            let len = service
                                .find_group(&group_name)
                                .map(|g| g.code_items.len())
                                .unwrap_or(0);
                            clamp(&mut state, len);
                            show_message(&mut session, "Snippet deleted", Color::Green)?;
                        }
                    }
                    Key::MoveUp => {
                        service.move_code_item(&group_name, selected, selected.saturating_sub(1))?;
                        state.select(Some(selected.saturating_sub(1)));
                    }
                    Key::MoveDown => {
                        let last = items.len().saturating_sub(1);
                        if selected < items.len() {
                            service.move_code_item(&group_name, selected, (selected + 1).min(last))?;
                            state.select(Some((selected + 1).min(last)));
                        }
                    }
                    Key::Back => {
                        screen = Screen::Groups;
                        state.select(Some(0));
                    }
                    Key::Quit => return Ok(()),
                    Key::Enter | Key::Other => {}
                }
            }
        }
    }
}

const GROUP_HELP: &str =
    "↑/↓ move · Enter open · e enable/disable · d delete · K/J reorder · q quit";
const ITEM_HELP: &str =
    "↑/↓ move · e enable/disable · d delete · K/J reorder · Esc back · q quit";

enum Key {
    Up,
    Down,
    Enter,
    Toggle,
    Delete,
    MoveUp,
    MoveDown,
    Back,
    Quit,
    Other,
}

fn read_key() -> Result<Key> {
    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            return Ok(match key.code {
                KeyCode::Up => Key::Up,
                KeyCode::Down => Key::Down,
                KeyCode::Enter => Key::Enter,
                KeyCode::Char('e') => Key::Toggle,
                KeyCode::Char('d') => Key::Delete,
                KeyCode::Char('K') => Key::MoveUp,
                KeyCode::Char('J') => Key::MoveDown,
                KeyCode::Esc | KeyCode::Backspace => Key::Back,
                KeyCode::Char('q') => Key::Quit,
                _ => Key::Other,
            });
        }
    }
}

fn clamp(state: &mut ListState, len: usize) {
    let selected = state.selected().unwrap_or(0);
    state.select(Some(selected.min(len.saturating_sub(1))));
}

fn draw(
    session: &mut TerminalSession,
    title: &str,
    rows: &[String],
    state: &mut ListState,
    help: &str,
) -> Result<()> {
    session.terminal().draw(|f| {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(1)])
            .split(f.area());

        let items: Vec<ListItem> = rows.iter().map(|r| ListItem::new(r.as_str())).collect();
        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title(title.to_string()))
            .highlight_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");
        f.render_stateful_widget(list, chunks[0], state);

        let help_line = Paragraph::new(help).style(Style::default().fg(Color::DarkGray));
        f.render_widget(help_line, chunks[1]);
    })?;
    Ok(())
}
