use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Color,
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::{content::TRANSPARENCY_INTRO, model::SectionId};

use super::super::pane_border_style;

pub fn render_transparency_tab(frame: &mut Frame, area: Rect) {
    let pane = Paragraph::new(vec![Line::from(TRANSPARENCY_INTRO)])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(pane_border_style(true, Color::LightYellow))
                .title(SectionId::Transparency.title()),
        )
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: true });

    frame.render_widget(pane, area);
}
