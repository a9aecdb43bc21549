use crossterm::{
    event,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph},
    Terminal,
};
use snipdeck_core::Result;
use std::io::{stdout, Stdout};
use std::time::Duration;

/// Raw-mode alternate-screen terminal, restored on drop.
pub struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
    pub fn begin() -> Result<Self> {
        enable_raw_mode()?;
        execute!(stdout(), EnterAlternateScreen)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
        Ok(TerminalSession { terminal })
    }

    pub fn terminal(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(stdout(), LeaveAlternateScreen);
    }
}

/// Show a transient message popup, dismissed early by any key press.
pub fn show_message(session: &mut TerminalSession, message: &str, color: Color) -> Result<()> {
    session.terminal().draw(|f| {
        let area = centered_rect(60, 20, f.area());
        f.render_widget(Clear, area);
        let message_box = Paragraph::new(message)
            .style(Style::default().fg(color))
            .block(Block::default().borders(Borders::ALL).title(" snipdeck "))
            .alignment(Alignment::Center);
        f.render_widget(message_box, area);
    })?;

    for _ in 0..6 {
        if event::poll(Duration::from_millis(100))? {
            let _ = event::read()?;
            break;
        }
    }
    Ok(())
}

/// Rect centered in `r`, sized as a percentage of it.
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let [row] = Layout::vertical([Constraint::Percentage(percent_y)])
        .flex(Flex::Center)
        .areas(r);
    let [rect] = Layout::horizontal([Constraint::Percentage(percent_x)])
        .flex(Flex::Center)
        .areas(row);
    rect
}
