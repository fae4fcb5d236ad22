use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Color,
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::{app::App, content::RIGHTS_INTRO, model::SectionId};

use super::super::{pane_border_style, row, section_heading};

pub fn render_rights_tab(frame: &mut Frame, app: &App, area: Rect) {
    let lines = vec![
        Line::from(RIGHTS_INTRO),
        Line::from(""),
        section_heading("DATA SUBJECT ACCESS REQUEST"),
        Line::from(""),
        row("Form", app.data_subject_form_url().to_string()),
        Line::from(""),
        Line::from("Press Enter or o to open the request form in your browser."),
    ];

    let pane = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(pane_border_style(true, Color::LightYellow))
                .title(SectionId::Rights.title()),
        )
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: true });

    frame.render_widget(pane, area);
}
