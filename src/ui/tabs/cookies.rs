// Cookie management section.
// - Entry point for the disclosure listing and the consent preferences drawer.
// - Mirrors the fetch status so the pane reads "loading" while a fetch runs.
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::{app::App, content::COOKIES_INTRO, model::SectionId};

use super::super::{pane_border_style, row, section_heading, warning};

pub fn render_cookies_tab(frame: &mut Frame, app: &App, area: Rect) {
    let view = app.view();
    let mut lines = vec![
        Line::from(COOKIES_INTRO),
        Line::from(""),
        section_heading("ACTIONS"),
        Line::from(""),
    ];

    if view.fetch_in_flight {
        lines.push(Line::from(vec![
            Span::styled("[c]", Style::default().fg(Color::DarkGray)),
            Span::raw(format!(" Loading... {}", app.spinner_glyph())),
        ]));
    } else {
        lines.push(Line::from(vec![
            Span::styled(
                "[c]",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" View Cookie Disclosures"),
        ]));
    }
    lines.push(Line::from(vec![
        Span::styled(
            "[p]",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::raw(" Update Cookie Preferences"),
    ]));

    if let Some(error) = &view.fetch_error {
        lines.push(Line::from(""));
        lines.push(warning(error));
    }

    if !view.disclosures.is_empty() {
        lines.push(Line::from(""));
        lines.push(row("Listed", format!("{} cookies", view.disclosures.len())));
    }

    let pane = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(pane_border_style(true, Color::LightYellow))
                .title(SectionId::Cookies.title()),
        )
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: true });

    frame.render_widget(pane, area);
}
