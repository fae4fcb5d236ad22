// Root UI composition and shared visual components.
// - Builds the global layout (header, privacy statement, nav + content + side panel, footer).
// - Renders shared chrome: section navigation, quick actions, keybind popup.
// - Delegates section rendering to ui::tabs and popups to ui::modals.
mod modals;
mod tabs;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
};
use unicode_width::UnicodeWidthStr;

use crate::{
    app::App,
    content::{
        COMPANY_BLURB, COMPANY_NAME, COMPANY_PRIVACY_EMAIL, COMPANY_PRIVACY_POLICY_URL,
        PRIVACY_OFFICER, PRIVACY_STATEMENT,
    },
    model::SectionId,
};

const ACCENT: Color = Color::LightBlue;

pub fn render(frame: &mut Frame, app: &App) {
    let [header, statement, body, footer] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(10),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(frame.area());
    let [nav, content, side] = Layout::horizontal([
        Constraint::Percentage(26),
        Constraint::Percentage(48),
        Constraint::Percentage(26),
    ])
    .areas(body);

    render_header(frame, app, header);
    render_privacy_statement(frame, statement);
    render_section_nav(frame, app, nav);
    render_section_content(frame, app, content);
    render_side_panel(frame, app, side);
    render_footer(frame, app, footer);

    if app.view().disclosure_modal_open {
        modals::render_disclosure_modal(frame, app);
    }
    if app.view().uuid_modal_open {
        modals::render_uuid_modal(frame, app);
    }
    if app.show_keybinds {
        render_keybinds_popup(frame, app);
    }
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let (gpc_label, gpc_color) = privacy_control_indicator(app.global_privacy_control);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Indexed(54)));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let indicator_width = UnicodeWidthStr::width(gpc_label) as u16 + 3;
    let [title_area, indicator_area] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(indicator_width)]).areas(inner);

    frame.render_widget(
        Paragraph::new(Line::styled(
            " ◆ Trust Hub",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        title_area,
    );
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("● ", Style::default().fg(gpc_color)),
            Span::styled(gpc_label, Style::default().fg(Color::Gray)),
        ])),
        indicator_area,
    );
}

fn render_privacy_statement(frame: &mut Frame, area: Rect) {
    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                COMPANY_NAME,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(COMPANY_PRIVACY_EMAIL, Style::default().fg(ACCENT)),
            Span::raw("  "),
            Span::styled(COMPANY_PRIVACY_POLICY_URL, Style::default().fg(ACCENT)),
        ]),
        Line::from(COMPANY_BLURB),
        Line::from(""),
    ];
    lines.extend(PRIVACY_STATEMENT.iter().map(|paragraph| Line::from(*paragraph)));

    let statement = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title("Privacy Statement"),
        )
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: true });
    frame.render_widget(statement, area);
}

fn render_section_nav(frame: &mut Frame, app: &App, area: Rect) {
    let active = app.view().active_section;
    let items = SectionId::ALL
        .iter()
        .map(|section| {
            let is_active = *section == active;
            let title_style = if is_active {
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            let description_style = if is_active {
                Style::default().fg(Color::LightCyan)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(format!("{} ", section.number()), Style::default().fg(Color::DarkGray)),
                    Span::styled(format!("{} ", section.icon()), title_style),
                    Span::styled(section.title(), title_style),
                ]),
                Line::styled(format!("    {}", section.description()), description_style),
                Line::from(""),
            ])
        })
        .collect::<Vec<_>>();

    let mut list_state = ListState::default().with_selected(Some(active.index()));
    let nav = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(pane_border_style(!app.has_open_modal(), ACCENT))
                .title_top(Line::from("Sections").left_aligned())
                .title_top(Line::styled("(tab)", Style::default().fg(Color::DarkGray)).right_aligned()),
        )
        .highlight_symbol("> ")
        .highlight_style(Style::default().bg(Color::Indexed(54)));

    frame.render_stateful_widget(nav, area, &mut list_state);
}

// Exhaustive over the section set, so every active section has a content block.
fn render_section_content(frame: &mut Frame, app: &App, area: Rect) {
    match app.view().active_section {
        SectionId::Cookies => tabs::cookies::render_cookies_tab(frame, app, area),
        SectionId::Rights => tabs::rights::render_rights_tab(frame, app, area),
        SectionId::Policies => tabs::policies::render_policies_tab(frame, app, area),
        SectionId::Security => tabs::security::render_security_tab(frame, area),
        SectionId::Transparency => tabs::transparency::render_transparency_tab(frame, area),
    }
}

fn render_side_panel(frame: &mut Frame, app: &App, area: Rect) {
    let [actions_area, officer_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(9)]).areas(area);

    let (gpc_label, gpc_color) = privacy_control_indicator(app.global_privacy_control);
    let mut lines = vec![
        section_heading("QUICK ACTIONS"),
        Line::from(""),
        action_row("u", "View your UUID"),
        action_row("p", "Update Preferences"),
        action_row("c", "View Cookie Disclosures"),
        Line::from(""),
        section_heading("PRIVACY SIGNALS"),
        Line::from(""),
        Line::from(vec![
            Span::styled("● ", Style::default().fg(gpc_color)),
            Span::raw(gpc_label),
        ]),
    ];
    match app.consent_widget_version() {
        Some(version) if !version.is_empty() => {
            lines.push(row("Consent", format!("widget v{version}")));
        }
        Some(_) => lines.push(row("Consent", "widget connected".to_string())),
        None => lines.push(Line::styled(
            "Consent widget not available",
            Style::default().fg(Color::DarkGray),
        )),
    }

    let actions = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(pane_border_style(false, ACCENT))
                .title("Quick Actions"),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(actions, actions_area);

    let officer = Paragraph::new(vec![
        Line::styled(
            PRIVACY_OFFICER.name,
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
        Line::styled(PRIVACY_OFFICER.title, Style::default().fg(Color::Gray)),
        row("Email", PRIVACY_OFFICER.email.to_string()),
        row("Phone", PRIVACY_OFFICER.phone.to_string()),
        Line::styled(
            "Contact our Data Privacy Officer with any concerns about your personal data.",
            Style::default().fg(Color::DarkGray),
        ),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(pane_border_style(false, ACCENT))
            .title("Data Privacy Officer"),
    )
    .wrap(Wrap { trim: true });
    frame.render_widget(officer, officer_area);
}

fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let hint = "Press ? to see keyboard shortcuts";
    let [status_area, hint_area] = Layout::horizontal([
        Constraint::Min(0),
        Constraint::Length(UnicodeWidthStr::width(hint) as u16),
    ])
    .areas(area);

    frame.render_widget(
        Paragraph::new(Line::styled(
            app.status_message.as_str(),
            Style::default().fg(Color::Gray),
        )),
        status_area,
    );
    frame.render_widget(
        Paragraph::new(Line::styled(hint, Style::default().fg(Color::DarkGray))),
        hint_area,
    );
}

fn render_keybinds_popup(frame: &mut Frame, app: &App) {
    let popup = centered_popup(frame.area(), 70, 70);
    frame.render_widget(Clear, popup);

    let lines = vec![
        Line::from("Press ? or Esc to close this window."),
        Line::from(""),
        keybind_section("GLOBAL"),
        keybind_row("?", "toggle keybinds popup"),
        keybind_row("q / Esc", "quit (from the main view)"),
        keybind_row("Ctrl+c", "quit app"),
        Line::from(""),
        keybind_section("SECTIONS"),
        keybind_row("Tab / Shift+Tab", "next / previous section"),
        keybind_row("j/k or Down/Up", "next / previous section"),
        keybind_row("1-5", "jump to section"),
        keybind_row("h/l or Left/Right", "select privacy document"),
        keybind_row("Enter / o", "open section action or link"),
        Line::from(""),
        keybind_section("QUICK ACTIONS"),
        keybind_row("u", "view your UUID"),
        keybind_row("p", "update consent preferences"),
        keybind_row("c", "view cookie disclosures"),
        Line::from(""),
        keybind_section("MODALS"),
        keybind_row("Esc / Enter / q", "close the top modal"),
        keybind_row("r", "refetch cookie disclosures"),
        keybind_row("j/k or Down/Up", "scroll disclosure table"),
        keybind_row("PgUp/PgDn", "page disclosure table"),
    ];

    let block = Block::default().borders(Borders::ALL).title("Keybinds");
    let inner = block.inner(popup);
    let visible_line_count = inner.height.max(1) as usize;
    let max_scroll_top = lines.len().saturating_sub(visible_line_count);
    let scroll_top = app.clamp_keybinds_scroll(max_scroll_top);
    let popup_widget = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Left)
        .scroll((scroll_top.min(u16::MAX as usize) as u16, 0));

    frame.render_widget(popup_widget, popup);
}

fn keybind_section(title: &str) -> Line<'static> {
    Line::styled(
        title.to_string(),
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )
}

fn keybind_row(keys: &str, action: &str) -> Line<'static> {
    const KEY_COL_WIDTH: usize = 24;
    let keys_padded = format!("{keys:<KEY_COL_WIDTH$}");
    Line::from(vec![
        Span::styled(
            keys_padded,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::raw(action.to_string()),
    ])
}

fn action_row(key: &str, label: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("[{key}]"),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::raw(label.to_string()),
    ])
}

pub(super) fn privacy_control_indicator(signal: Option<bool>) -> (&'static str, Color) {
    match signal {
        Some(true) => ("GPC signal detected", Color::LightGreen),
        Some(false) => ("GPC signal off", Color::Yellow),
        None => ("GPC not signaled", Color::DarkGray),
    }
}

pub(super) fn centered_popup(outer: Rect, width_percent: u16, height_percent: u16) -> Rect {
    let [vertical] = Layout::vertical([Constraint::Percentage(height_percent)])
        .flex(ratatui::layout::Flex::Center)
        .areas(outer);
    let [popup] = Layout::horizontal([Constraint::Percentage(width_percent)])
        .flex(ratatui::layout::Flex::Center)
        .areas(vertical);
    popup
}

pub(super) fn pane_border_style(is_focused: bool, focused_color: Color) -> Style {
    if is_focused {
        Style::default()
            .fg(focused_color)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

pub(super) fn section_heading(title: &str) -> Line<'static> {
    Line::styled(
        title.to_string(),
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )
}

pub(super) fn warning(message: &str) -> Line<'static> {
    Line::styled(
        message.to_string(),
        Style::default()
            .fg(Color::LightRed)
            .add_modifier(Modifier::BOLD),
    )
}

pub(super) fn row(label: &str, value: String) -> Line<'static> {
    const LABEL_COL_WIDTH: usize = 8;
    let label_cell = format!("{label:<LABEL_COL_WIDTH$}");
    Line::from(vec![
        Span::styled(
            label_cell,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::raw(value),
    ])
}


#[cfg(test)]
mod tests {
    use super::test_support::rendered;
    use super::*;
    use crate::app::test_support::{ScriptedSource, app_with};

    #[test]
    fn every_section_renders_its_title() {
        let (mut app, _) = app_with(ScriptedSource::default(), None);
        for section in SectionId::ALL {
            app.select_section(section);
            let screen = rendered(&app);
            assert!(screen.contains("Trust Hub"));
            assert!(
                screen.matches(section.title()).count() >= 2,
                "{} should show in nav and content",
                section.title()
            );
        }
    }

    #[test]
    fn side_panel_is_present_on_every_section() {
        let (mut app, _) = app_with(ScriptedSource::default(), None);
        for section in SectionId::ALL {
            app.select_section(section);
            let screen = rendered(&app);
            assert!(screen.contains("View your UUID"));
            assert!(screen.contains("Update Preferences"));
            assert!(screen.contains(PRIVACY_OFFICER.name));
        }
    }

    #[test]
    fn gpc_indicator_reflects_signal() {
        let (mut app, _) = app_with(ScriptedSource::default(), None);
        assert!(rendered(&app).contains("GPC not signaled"));

        app.global_privacy_control = Some(true);
        assert!(rendered(&app).contains("GPC signal detected"));

        assert_eq!(privacy_control_indicator(Some(false)).1, Color::Yellow);
    }

    #[test]
    fn keybinds_popup_renders_on_top() {
        let (mut app, _) = app_with(ScriptedSource::default(), None);
        app.toggle_keybinds();
        let screen = rendered(&app);
        assert!(screen.contains("Keybinds"));
        assert!(screen.contains("refetch cookie disclosures"));
    }
}
