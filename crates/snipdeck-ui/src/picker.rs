use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use snipdeck_core::{MenuChoice, Result, SelectionMenu};

use crate::common::TerminalSession;

/// Terminal implementation of the host popup collaborator: a modal
/// single-select list with a dedicated back entry.
pub struct TerminalMenu<'a> {
    session: &'a mut TerminalSession,
}

impl<'a> TerminalMenu<'a> {
    pub fn new(session: &'a mut TerminalSession) -> Self {
        TerminalMenu { session }
    }
}

impl SelectionMenu for TerminalMenu<'_> {
    fn choose(
        &mut self,
        title: &str,
        items: &[String],
        back_label: &str,
        back_is_last: bool,
    ) -> Result<MenuChoice> {
        let mut rows: Vec<String> = Vec::with_capacity(items.len() + 1);
        if !back_is_last {
            rows.push(format!("← {}", back_label));
        }
        rows.extend(items.iter().cloned());
        if back_is_last {
            rows.push(format!("← {}", back_label));
        }
        let back_index = if back_is_last { rows.len() - 1 } else { 0 };

        let mut state = ListState::default();
        // start on the first real item when one exists
        state.select(Some(if !back_is_last && rows.len() > 1 { 1 } else { 0 }));

        loop {
            self.session.terminal().draw(|f| {
                let chunks = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([Constraint::Min(3), Constraint::Length(1)])
                    .split(f.area());

                let list_items: Vec<ListItem> =
                    rows.iter().map(|r| ListItem::new(r.as_str())).collect();
                let list = List::new(list_items)
                    .block(
                        Block::default()
                            .borders(Borders::ALL)
                            .title(format!(" {} ", title)),
                    )
                    .highlight_style(
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    )
                    .highlight_symbol("> ");
                f.render_stateful_widget(list, chunks[0], &mut state);

                let help = Paragraph::new("↑/↓ move · Enter select · Esc cancel")
                    .style(Style::default().fg(Color::DarkGray));
                f.render_widget(help, chunks[1]);
            })?;

            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                let selected = state.selected().unwrap_or(0);
                match key.code {
                    KeyCode::Up => state.select(Some(selected.saturating_sub(1))),
                    KeyCode::Down => {
                        state.select(Some((selected + 1).min(rows.len().saturating_sub(1))))
                    }
                    KeyCode::Enter => {
                        return Ok(if selected == back_index {
                            MenuChoice::Back
                        } else if back_is_last {
                            MenuChoice::Item(selected)
                        } else {
                            MenuChoice::Item(selected - 1)
                        });
                    }
                    KeyCode::Esc => return Ok(MenuChoice::Cancelled),
                    _ => {}
                }
            }
        }
    }
}
