//! Move list rendering.

use crate::app::{App, Focus};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem},
};

/// Renders one row per history entry; the displayed step is bold.
pub fn render_history(f: &mut Frame, area: Rect, app: &App) {
    let items: Vec<ListItem> = app
        .history_rows()
        .into_iter()
        .map(|row| {
            let mut style = Style::default();
            if row.current {
                style = style.add_modifier(Modifier::BOLD).fg(Color::Cyan);
            }
            if row.selected {
                style = style.add_modifier(Modifier::REVERSED);
            }
            ListItem::new(format!("{:>2}. {}", row.step, row.label)).style(style)
        })
        .collect();

    let border_style = match app.focus() {
        Focus::History => Style::default().fg(Color::Yellow),
        Focus::Board => Style::default(),
    };

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(format!("Moves ({})", app.order().label())),
    );
    f.render_widget(list, area);
}
