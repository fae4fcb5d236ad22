// Keyboard dispatch.
// - Popups take keys first: keybinds popup, then the identifier modal, then the disclosure modal.
// - Modal close keys only flip that modal's own flag.
// - Everything else drives section navigation and the quick actions.
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::model::SectionId;

use super::App;

const DISCLOSURE_PAGE_ROWS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Continue,
    Quit,
}

impl App {
    pub fn handle_key(&mut self, key: KeyEvent) -> KeyOutcome {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyOutcome::Quit;
        }

        if self.show_keybinds {
            self.handle_keybinds_key(key);
        } else if self.view.uuid_modal_open {
            self.handle_uuid_modal_key(key);
        } else if self.view.disclosure_modal_open {
            self.handle_disclosure_modal_key(key);
        } else {
            return self.handle_main_key(key);
        }

        KeyOutcome::Continue
    }

    fn handle_keybinds_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q') => self.hide_keybinds(),
            KeyCode::Down | KeyCode::Char('j') => self.scroll_keybinds_down(),
            KeyCode::Up | KeyCode::Char('k') => self.scroll_keybinds_up(),
            _ => {}
        }
    }

    fn handle_uuid_modal_key(&mut self, key: KeyEvent) {
        if matches!(
            key.code,
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') | KeyCode::Char('x')
        ) {
            self.close_uuid_modal();
        }
    }

    fn handle_disclosure_modal_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') | KeyCode::Char('x') => {
                self.close_disclosure_modal()
            }
            KeyCode::Char('r') => self.start_disclosure_fetch(),
            KeyCode::Down | KeyCode::Char('j') => self.scroll_disclosures_down(1),
            KeyCode::Up | KeyCode::Char('k') => self.scroll_disclosures_up(1),
            KeyCode::PageDown => self.scroll_disclosures_down(DISCLOSURE_PAGE_ROWS),
            KeyCode::PageUp => self.scroll_disclosures_up(DISCLOSURE_PAGE_ROWS),
            _ => {}
        }
    }

    fn handle_main_key(&mut self, key: KeyEvent) -> KeyOutcome {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return KeyOutcome::Quit,
            KeyCode::Char('?') => self.toggle_keybinds(),
            KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => self.select_next_section(),
            KeyCode::Up | KeyCode::Char('k') | KeyCode::BackTab => self.select_previous_section(),
            KeyCode::Char(ch) if ch.is_ascii_digit() => {
                let number = ch.to_digit(10).unwrap_or(0) as usize;
                self.select_section_by_number(number);
            }
            KeyCode::Right | KeyCode::Char('l') if self.view.active_section == SectionId::Policies => {
                self.select_next_document()
            }
            KeyCode::Left | KeyCode::Char('h') if self.view.active_section == SectionId::Policies => {
                self.select_previous_document()
            }
            KeyCode::Enter | KeyCode::Char('o') => self.activate_section(),
            KeyCode::Char('u') => self.view_identifier(),
            KeyCode::Char('p') => self.open_preferences(),
            KeyCode::Char('c') => self.view_disclosures(),
            _ => {}
        }
        KeyOutcome::Continue
    }
}
