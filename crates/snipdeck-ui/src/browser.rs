use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};
use snipdeck_core::{imports, Catalog, Component, Result};

use crate::common::TerminalSession;

enum Screen {
    Groups,
    Components { group: usize },
    Details { group: usize, component: usize, scroll: u16 },
}

/// The persistent side panel: catalog groups, their components and a
/// read-only details view with links, imports and both code templates.
pub fn browse_catalog(catalog: &Catalog) -> Result<()> {
    let groups = catalog.panel_groups()?;
    if groups.is_empty() {
        return Ok(());
    }

    let mut session = TerminalSession::begin()?;
    let mut screen = Screen::Groups;
    let mut state = ListState::default();
    state.select(Some(0));

    loop {
        match screen {
            Screen::Groups => {
                let rows: Vec<String> = groups
                    .iter()
                    .map(|g| format!("{} ({})", g.title, g.components.len()))
                    .collect();
                draw_list(&mut session, " Components ", &rows, &mut state)?;
                match read_key()? {
                    Key::Up => move_up(&mut state),
                    Key::Down => move_down(&mut state, rows.len()),
                    Key::Enter => {
                        if let Some(i) = state.selected() {
                            screen = Screen::Components { group: i };
                            state.select(Some(0));
                        }
                    }
                    Key::Back | Key::Quit => return Ok(()),
                    Key::Other => {}
                }
            }
            Screen::Components { group } => {
                let rows: Vec<String> = groups[group]
                    .components
                    .iter()
                    .map(|c| c.name.clone())
                    .collect();
                let title = format!(" {} ", groups[group].title);
                draw_list(&mut session, &title, &rows, &mut state)?;
                match read_key()? {
                    Key::Up => move_up(&mut state),
                    Key::Down => move_down(&mut state, rows.len()),
                    Key::Enter => {
                        if let Some(i) = state.selected().filter(|i| *i < rows.len()) {
                            screen = Screen::Details {
                                group,
                                component: i,
                                scroll: 0,
                            };
                        }
                    }
                    Key::Back => {
                        state.select(Some(group));
                        screen = Screen::Groups;
                    }
                    Key::Quit => return Ok(()),
                    Key::Other => {}
                }
            }
            Screen::Details {
                group,
                component,
                ref mut scroll,
            } => {
                let c = &groups[group].components[component];
                draw_details(&mut session, c, *scroll)?;
                match read_key()? {
                    Key::Up => *scroll = scroll.saturating_sub(1),
                    Key::Down => *scroll = scroll.saturating_add(1),
                    Key::Back | Key::Enter => {
                        state.select(Some(component));
                        screen = Screen::Components { group };
                    }
                    Key::Quit => return Ok(()),
                    Key::Other => {}
                }
            }
        }
    }
}

enum Key {
    Up,
    Down,
    Enter,
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
                KeyCode::Esc | KeyCode::Backspace => Key::Back,
                KeyCode::Char('q') => Key::Quit,
                _ => Key::Other,
            });
        }
    }
}

fn move_up(state: &mut ListState) {
    let selected = state.selected().unwrap_or(0);
    state.select(Some(selected.saturating_sub(1)));
}

fn move_down(state: &mut ListState, len: usize) {
    let selected = state.selected().unwrap_or(0);
    state.select(Some((selected + 1).min(len.saturating_sub(1))));
}

fn draw_list(
    session: &mut TerminalSession,
    title: &str,
    rows: &[String],
    state: &mut ListState,
) -> Result<()> {
    session.terminal().draw(|f| {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(1)])
            .split(f.area());

        let items: Vec<ListItem> = rows.iter().map(|r| ListItem::new(r.as_str())).collect();
        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title(title))
            .highlight_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");
        f.render_stateful_widget(list, chunks[0], state);

        let help = Paragraph::new("↑/↓ move · Enter open · Esc back · q quit")
            .style(Style::default().fg(Color::DarkGray));
        f.render_widget(help, chunks[1]);
    })?;
    Ok(())
}

fn draw_details(session: &mut TerminalSession, c: &Component, scroll: u16) -> Result<()> {
    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled(
            c.name.clone(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!("Spec:       {}", c.spec_url)),
        Line::from(format!("Guidelines: {}", c.guidelines_url)),
        Line::from(format!("Docs:       {}", c.docs_url)),
        Line::from(""),
    ];
    for line in c.description.lines() {
        lines.push(Line::from(line.to_string()));
    }
    lines.push(Line::from(""));

    if let Some(imports_code) = imports::generate_imports_code(&c.imports) {
        for line in imports_code.lines() {
            lines.push(Line::from(Span::styled(
                line.to_string(),
                Style::default().fg(Color::DarkGray),
            )));
        }
        lines.push(Line::from(""));
    }

    push_code_section(&mut lines, "Code", &c.code, c.code_tip.as_deref());
    if let Some(custom) = &c.custom_code {
        lines.push(Line::from(""));
        push_code_section(&mut lines, "Customization", custom, c.custom_code_tip.as_deref());
    }

    session.terminal().draw(|f| {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(1)])
            .split(f.area());

        let details = Paragraph::new(lines.clone())
            .block(Block::default().borders(Borders::ALL).title(" Details "))
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0));
        f.render_widget(details, chunks[0]);

        let help = Paragraph::new("↑/↓ scroll · Esc back · q quit")
            .style(Style::default().fg(Color::DarkGray));
        f.render_widget(help, chunks[1]);
    })?;
    Ok(())
}

fn push_code_section(lines: &mut Vec<Line>, title: &str, code: &str, tip: Option<&str>) {
    lines.push(Line::from(Span::styled(
        title.to_string(),
        Style::default().add_modifier(Modifier::BOLD),
    )));
    if let Some(tip) = tip {
        lines.push(Line::from(Span::styled(
            tip.to_string(),
            Style::default().fg(Color::DarkGray),
        )));
    }
    for line in code.lines() {
        lines.push(Line::from(Span::styled(
            line.to_string(),
            Style::default().fg(Color::Green),
        )));
    }
}
