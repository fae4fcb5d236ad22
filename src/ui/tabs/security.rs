// Security measures section.
// - Feature list with an active badge per entry.
// - Certification table below it.
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Row, Table, Wrap},
};

use crate::{
    content::{CERTIFICATIONS, SECURITY_FEATURES, SECURITY_INTRO},
    model::SectionId,
};

use super::super::{pane_border_style, section_heading};

pub fn render_security_tab(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(pane_border_style(true, Color::LightYellow))
        .title(SectionId::Security.title());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let certifications_height = CERTIFICATIONS.len() as u16 + 3;
    let [features_area, certifications_area] = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(certifications_height),
    ])
    .areas(inner);

    let mut lines = vec![Line::from(SECURITY_INTRO), Line::from("")];
    lines.push(section_heading("SECURITY FEATURES"));
    for feature in SECURITY_FEATURES {
        let badge = if feature.active {
            Span::styled(" Active ", Style::default().fg(Color::Black).bg(Color::LightGreen))
        } else {
            Span::styled(" Inactive ", Style::default().fg(Color::Black).bg(Color::DarkGray))
        };
        lines.push(Line::from(vec![
            Span::styled(
                feature.title,
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            badge,
        ]));
        lines.push(Line::styled(
            format!("  {}", feature.description),
            Style::default().fg(Color::Gray),
        ));
    }
    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: true }),
        features_area,
    );

    let rows = CERTIFICATIONS.iter().map(|certification| {
        Row::new(vec![
            certification.name.to_string(),
            certification.status.to_string(),
            certification.description.to_string(),
        ])
    });
    let table = Table::new(
        rows,
        [
            Constraint::Length(18),
            Constraint::Length(10),
            Constraint::Min(10),
        ],
    )
    .header(
        Row::new(vec!["Certification", "Status", "Scope"])
            .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
    )
    .block(
        Block::default()
            .borders(Borders::TOP)
            .title("Certifications & Compliance"),
    );
    frame.render_widget(table, certifications_area);
}
