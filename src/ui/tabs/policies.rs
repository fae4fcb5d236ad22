// Privacy documents section.
// - Lists the published documents; h/l moves the selection.
// - Enter/o opens the selected document in the system browser.
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};

use crate::{
    app::App,
    content::{POLICIES_INTRO, PRIVACY_DOCUMENTS},
    model::SectionId,
};

use super::super::pane_border_style;

pub fn render_policies_tab(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(pane_border_style(true, Color::LightYellow))
        .title(SectionId::Policies.title());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [intro_area, list_area, hint_area] = Layout::vertical([
        Constraint::Length(4),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(inner);

    frame.render_widget(
        Paragraph::new(POLICIES_INTRO).wrap(Wrap { trim: true }),
        intro_area,
    );

    let items = PRIVACY_DOCUMENTS
        .iter()
        .map(|document| {
            ListItem::new(vec![
                Line::styled(
                    document.title,
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                ),
                Line::styled(
                    format!("  {}", document.description),
                    Style::default().fg(Color::Gray),
                ),
                Line::from(vec![
                    Span::raw("  "),
                    Span::styled(document.url, Style::default().fg(Color::LightBlue)),
                ]),
            ])
        })
        .collect::<Vec<_>>();

    let mut list_state =
        ListState::default().with_selected(Some(app.selected_document % PRIVACY_DOCUMENTS.len()));
    let list = List::new(items)
        .highlight_symbol("> ")
        .highlight_style(Style::default().bg(Color::Indexed(236)));
    frame.render_stateful_widget(list, list_area, &mut list_state);

    frame.render_widget(
        Paragraph::new(Line::styled(
            "h/l select document, Enter or o to open",
            Style::default().fg(Color::DarkGray),
        )),
        hint_area,
    );
}
