// Quick actions and outbound links.
// - View identifier: reads the stored identifier; absence is a silent no-op.
// - Update preferences: asks the consent widget, when one is present, to open its drawer.
// - Opens the data subject request form and privacy documents in the system browser.
use crate::{consent, content::PRIVACY_DOCUMENTS, launch, model::SectionId};

use super::App;

impl App {
    pub fn view_identifier(&mut self) {
        let Some(identifier) = self.collaborators.identifiers.stored_identifier() else {
            log::debug!("no stored identifier; identifier modal stays closed");
            return;
        };
        self.show_uuid_modal(identifier);
    }

    pub fn open_preferences(&mut self) {
        match consent::open_preferences_drawer(self.collaborators.consent_widget.as_deref()) {
            Ok(true) => {
                self.status_message = "Opened consent preferences.".to_string();
            }
            Ok(false) => {}
            Err(err) => {
                log::warn!("consent widget failed to open its drawer: {err}");
                self.status_message = format!("Failed to open consent preferences: {err}");
            }
        }
    }

    /// Enter/o on the content pane.
    pub fn activate_section(&mut self) {
        match self.view.active_section {
            SectionId::Cookies => self.view_disclosures(),
            SectionId::Rights | SectionId::Policies => self.open_focused_link(),
            SectionId::Security | SectionId::Transparency => {
                self.status_message = "Nothing to open in this section.".to_string();
            }
        }
    }

    pub fn open_focused_link(&mut self) {
        let (label, url) = match self.view.active_section {
            SectionId::Rights => (
                "Data Subject Access Request form".to_string(),
                self.data_subject_form_url.clone(),
            ),
            SectionId::Policies => {
                let document = PRIVACY_DOCUMENTS[self.selected_document % PRIVACY_DOCUMENTS.len()];
                (document.title.to_string(), document.url.to_string())
            }
            _ => {
                self.status_message = "Nothing to open in this section.".to_string();
                return;
            }
        };

        match launch::open_in_browser(&url) {
            Ok(()) => {
                log::info!("opened {url}");
                self.status_message = format!("Opened {label} in your browser.");
            }
            Err(err) => {
                log::warn!("failed to open {url}: {err}");
                self.status_message = format!("Failed to open {label}: {err}");
            }
        }
    }
}
