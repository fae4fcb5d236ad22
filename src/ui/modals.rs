// Centered popups drawn over the main layout.
// - Identifier modal: shows the stored or pushed UUID.
// - Disclosure modal: loading, failure, empty, and populated listing states.
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Row, Table, TableState, Wrap},
};

use crate::{app::App, content::UUID_EXPLANATION, model::ViewState};

use super::{centered_popup, warning};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum ListingState<'a> {
    Loading,
    Failed(&'a str),
    Empty,
    Populated(usize),
}

/// Loading wins over a stale error; rows already fetched stay on screen.
pub(super) fn listing_state(view: &ViewState) -> ListingState<'_> {
    if view.fetch_in_flight {
        ListingState::Loading
    } else if let Some(error) = &view.fetch_error {
        ListingState::Failed(error.as_str())
    } else if view.disclosures.is_empty() {
        ListingState::Empty
    } else {
        ListingState::Populated(view.disclosures.len())
    }
}

pub(super) fn render_uuid_modal(frame: &mut Frame, app: &App) {
    let popup = centered_popup(frame.area(), 50, 40);
    frame.render_widget(Clear, popup);

    let lines = vec![
        Line::from(""),
        Line::styled(
            app.view().uuid_value.as_str(),
            Style::default()
                .fg(Color::LightGreen)
                .add_modifier(Modifier::BOLD),
        )
        .centered(),
        Line::from(""),
        Line::from(UUID_EXPLANATION),
        Line::from(""),
        Line::styled("Press Esc or Enter to close.", Style::default().fg(Color::DarkGray)),
    ];

    let modal = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::LightGreen))
                .title("Your Unique Identifier"),
        )
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: true });

    frame.render_widget(modal, popup);
}

pub(super) fn render_disclosure_modal(frame: &mut Frame, app: &App) {
    let popup = centered_popup(frame.area(), 85, 75);
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::LightBlue))
        .title("Cookie Disclosures")
        .title_bottom(
            Line::styled(
                " r refetch  j/k scroll  Esc close ",
                Style::default().fg(Color::DarkGray),
            )
            .right_aligned(),
        );
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let [status_area, table_area] =
        Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).areas(inner);

    let view = app.view();
    let status = match listing_state(view) {
        ListingState::Loading => Line::from(vec![
            Span::raw("Loading cookie disclosures... "),
            Span::styled(
                app.spinner_glyph().to_string(),
                Style::default().fg(Color::LightYellow),
            ),
        ]),
        ListingState::Failed(error) => warning(error),
        ListingState::Empty => Line::styled(
            "No cookie disclosures available.",
            Style::default().fg(Color::Gray),
        ),
        ListingState::Populated(count) => Line::styled(
            format!("{count} cookies disclosed"),
            Style::default().fg(Color::Gray),
        ),
    };
    frame.render_widget(Paragraph::new(status), status_area);

    if view.disclosures.is_empty() {
        return;
    }

    // Header row takes one line of the table area.
    let visible_rows = table_area.height.saturating_sub(1).max(1) as usize;
    let offset = app.clamp_disclosure_scroll(visible_rows);
    let rows = view.disclosures.iter().map(|item| {
        Row::new(vec![
            item.name.clone(),
            item.classification.clone(),
            item.purpose.clone(),
            item.expiry.clone(),
            item.provider.clone(),
        ])
    });
    let table = Table::new(
        rows,
        [
            Constraint::Percentage(18),
            Constraint::Percentage(14),
            Constraint::Percentage(38),
            Constraint::Percentage(12),
            Constraint::Percentage(18),
        ],
    )
    .header(
        Row::new(vec!["Name", "Classification", "Purpose", "Expiry", "Provider"]).style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
    )
    .column_spacing(1);

    let mut table_state = TableState::default().with_offset(offset);
    frame.render_stateful_widget(table, table_area, &mut table_state);
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::super::test_support::rendered;
    use super::*;
    use crate::{
        app::test_support::{ScriptedSource, app_with, disclosure, remote_unavailable, settle},
        model::{CookieDisclosure, SectionId},
    };

    #[test]
    fn listing_state_precedence() {
        let mut view = ViewState::new(SectionId::Cookies);
        assert_eq!(listing_state(&view), ListingState::Empty);

        view.disclosures = vec![CookieDisclosure::default(); 3];
        assert_eq!(listing_state(&view), ListingState::Populated(3));

        view.fetch_error = Some("Failed to fetch cookie disclosures".to_string());
        assert_eq!(
            listing_state(&view),
            ListingState::Failed("Failed to fetch cookie disclosures")
        );

        view.fetch_in_flight = true;
        assert_eq!(listing_state(&view), ListingState::Loading);
    }

    #[test]
    fn open_modal_shows_loading_before_fetch_completes() {
        let source = ScriptedSource::default()
            .then_after(Duration::from_millis(100), Ok(vec![disclosure("_ga")]));
        let (mut app, _) = app_with(source, None);

        app.view_disclosures();
        let screen = rendered(&app);
        assert!(screen.contains("Cookie Disclosures"));
        assert!(screen.contains("Loading cookie disclosures"));

        settle(&mut app);
        let screen = rendered(&app);
        assert!(screen.contains("1 cookies disclosed"));
        assert!(screen.contains("_ga"));
        assert!(screen.contains("Google"));
    }

    #[test]
    fn failed_fetch_shows_error_message() {
        let (mut app, _) = app_with(ScriptedSource::default().then(Err(remote_unavailable())), None);

        app.view_disclosures();
        settle(&mut app);

        assert!(rendered(&app).contains("Failed to fetch cookie disclosures"));
    }

    #[test]
    fn empty_listing_has_its_own_message() {
        let (mut app, _) = app_with(ScriptedSource::default(), None);

        app.view_disclosures();
        settle(&mut app);

        assert!(rendered(&app).contains("No cookie disclosures available."));
    }

    #[test]
    fn uuid_modal_shows_value() {
        let (mut app, _) = app_with(ScriptedSource::default(), None);

        app.show_uuid_modal("abc-123");
        let screen = rendered(&app);

        assert!(screen.contains("Your Unique Identifier"));
        assert!(screen.contains("abc-123"));
    }

    #[test]
    fn closed_modals_are_not_drawn() {
        let (app, _) = app_with(ScriptedSource::default(), None);
        let screen = rendered(&app);

        assert!(!screen.contains("Your Unique Identifier"));
        assert!(!screen.contains("r refetch"));
    }
}
