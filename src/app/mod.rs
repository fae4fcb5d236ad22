// Central application state for the portal shell.
// - Owns the view state (active section, modal flags, disclosure listing, fetch status).
// - Holds the injected collaborators: disclosure source, identifier store, consent widget.
// - Owns the channels drained on every tick: fetch completions and pushed identifiers.
mod actions;
mod disclosures;
mod input;

use std::{
    cell::Cell,
    sync::{
        Arc,
        mpsc::{self, Receiver, Sender},
    },
};

use crate::{
    config::Settings,
    consent::ConsentWidget,
    content::PRIVACY_DOCUMENTS,
    disclosure::{DisclosureError, DisclosureRequest, DisclosureSource},
    model::{CookieDisclosure, SectionId, ViewState},
    signals::IdentifierStore,
};

pub use self::input::KeyOutcome;

/// External collaborators, passed in rather than reached through globals.
pub struct Collaborators {
    pub disclosures: Arc<dyn DisclosureSource>,
    pub identifiers: Box<dyn IdentifierStore>,
    pub consent_widget: Option<Box<dyn ConsentWidget>>,
}

pub struct App {
    pub(crate) view: ViewState,
    pub(crate) global_privacy_control: Option<bool>,
    pub(crate) status_message: String,
    pub(crate) show_keybinds: bool,
    pub(crate) selected_document: usize,
    pub(crate) spinner_frame: usize,
    keybinds_scroll: Cell<usize>,
    disclosure_scroll: Cell<usize>,
    data_subject_form_url: String,
    request: DisclosureRequest,
    collaborators: Collaborators,
    pending_fetches: usize,
    fetch_tx: Sender<FetchEvent>,
    fetch_rx: Receiver<FetchEvent>,
    uuid_tx: Sender<String>,
    uuid_rx: Receiver<String>,
}

enum FetchEvent {
    Completed(Result<Vec<CookieDisclosure>, DisclosureError>),
}

/// Lets code outside the event loop push an identifier and force the
/// identifier modal open on the next tick.
#[allow(dead_code)] // no in-process producer besides tests yet
#[derive(Debug, Clone)]
pub struct UuidModalHandle {
    tx: Sender<String>,
}

#[allow(dead_code)]
impl UuidModalHandle {
    /// Returns false once the app has shut down.
    pub fn show(&self, value: impl Into<String>) -> bool {
        self.tx.send(value.into()).is_ok()
    }
}

impl App {
    pub fn new(
        settings: &Settings,
        initial_section: SectionId,
        global_privacy_control: Option<bool>,
        collaborators: Collaborators,
    ) -> Self {
        let (fetch_tx, fetch_rx) = mpsc::channel();
        let (uuid_tx, uuid_rx) = mpsc::channel();

        Self {
            view: ViewState::new(initial_section),
            global_privacy_control,
            status_message: "Press c to view cookie disclosures, u to view your UUID.".to_string(),
            show_keybinds: false,
            selected_document: 0,
            spinner_frame: 0,
            keybinds_scroll: Cell::new(0),
            disclosure_scroll: Cell::new(0),
            data_subject_form_url: settings.data_subject_form_url.clone(),
            request: DisclosureRequest {
                customer_id: settings.customer_id.clone(),
                config_id: settings.config_id.clone(),
                language: settings.language.clone(),
            },
            collaborators,
            pending_fetches: 0,
            fetch_tx,
            fetch_rx,
            uuid_tx,
            uuid_rx,
        }
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    #[allow(dead_code)]
    pub fn uuid_modal_handle(&self) -> UuidModalHandle {
        UuidModalHandle {
            tx: self.uuid_tx.clone(),
        }
    }

    pub fn tick(&mut self) {
        if self.view.fetch_in_flight {
            self.spinner_frame = (self.spinner_frame + 1) % spinner_frames().len();
        }
        self.pump_fetch_events();
        self.pump_pushed_identifiers();
    }

    pub fn spinner_glyph(&self) -> char {
        spinner_frames()[self.spinner_frame % spinner_frames().len()]
    }

    pub fn data_subject_form_url(&self) -> &str {
        &self.data_subject_form_url
    }

    pub fn consent_widget_version(&self) -> Option<&str> {
        self.collaborators
            .consent_widget
            .as_deref()
            .map(|widget| widget.cmp_version())
    }

    pub fn select_section(&mut self, section: SectionId) {
        log::debug!("section -> {section}");
        self.view.active_section = section;
    }

    pub fn select_next_section(&mut self) {
        self.select_section(self.view.active_section.next());
    }

    pub fn select_previous_section(&mut self) {
        self.select_section(self.view.active_section.previous());
    }

    pub fn select_section_by_number(&mut self, number: usize) -> bool {
        let Some(section) = SectionId::from_number(number) else {
            return false;
        };
        self.select_section(section);
        true
    }

    pub fn select_next_document(&mut self) {
        self.selected_document = (self.selected_document + 1) % PRIVACY_DOCUMENTS.len();
    }

    pub fn select_previous_document(&mut self) {
        self.selected_document = if self.selected_document == 0 {
            PRIVACY_DOCUMENTS.len() - 1
        } else {
            self.selected_document - 1
        };
    }

    /// Inbound entry point: populate and open the identifier modal.
    pub fn show_uuid_modal(&mut self, value: impl Into<String>) {
        self.view.uuid_value = value.into();
        self.view.uuid_modal_open = true;
    }

    pub fn close_uuid_modal(&mut self) {
        self.view.uuid_modal_open = false;
    }

    pub fn open_disclosure_modal(&mut self) {
        self.disclosure_scroll.set(0);
        self.view.disclosure_modal_open = true;
    }

    pub fn close_disclosure_modal(&mut self) {
        self.view.disclosure_modal_open = false;
    }

    pub fn has_open_modal(&self) -> bool {
        self.view.uuid_modal_open || self.view.disclosure_modal_open
    }

    pub fn toggle_keybinds(&mut self) {
        self.show_keybinds = !self.show_keybinds;
        self.keybinds_scroll.set(0);
    }

    pub fn hide_keybinds(&mut self) {
        self.show_keybinds = false;
    }

    pub fn scroll_keybinds_down(&mut self) {
        self.keybinds_scroll.set(self.keybinds_scroll.get() + 1);
    }

    pub fn scroll_keybinds_up(&mut self) {
        self.keybinds_scroll
            .set(self.keybinds_scroll.get().saturating_sub(1));
    }

    // Clamp happens at render time because only the renderer knows the viewport.
    pub fn clamp_keybinds_scroll(&self, max_scroll_top: usize) -> usize {
        let clamped = self.keybinds_scroll.get().min(max_scroll_top);
        self.keybinds_scroll.set(clamped);
        clamped
    }

    pub fn scroll_disclosures_down(&mut self, rows: usize) {
        self.disclosure_scroll
            .set(self.disclosure_scroll.get().saturating_add(rows));
    }

    pub fn scroll_disclosures_up(&mut self, rows: usize) {
        self.disclosure_scroll
            .set(self.disclosure_scroll.get().saturating_sub(rows));
    }

    pub fn clamp_disclosure_scroll(&self, visible_rows: usize) -> usize {
        let max_scroll_top = self
            .view
            .disclosures
            .len()
            .saturating_sub(visible_rows.max(1));
        let clamped = self.disclosure_scroll.get().min(max_scroll_top);
        self.disclosure_scroll.set(clamped);
        clamped
    }

    fn pump_pushed_identifiers(&mut self) {
        while let Ok(value) = self.uuid_rx.try_recv() {
            log::info!("identifier pushed from outside the event loop");
            self.show_uuid_modal(value);
        }
    }
}

fn spinner_frames() -> &'static [char] {
    &['|', '/', '-', '\\']
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::{
        collections::VecDeque,
        sync::Mutex,
        thread,
        time::{Duration, Instant},
    };

    use super::*;

    /// Canned fetch results, handed out in call order. Each entry may carry a
    /// delay to control completion order across threads.
    #[derive(Default)]
    pub struct ScriptedSource {
        script: Mutex<VecDeque<(Duration, Result<Vec<CookieDisclosure>, DisclosureError>)>>,
        pub calls: Mutex<Vec<(String, String, String)>>,
    }

    impl ScriptedSource {
        pub fn then(self, result: Result<Vec<CookieDisclosure>, DisclosureError>) -> Self {
            self.then_after(Duration::ZERO, result)
        }

        pub fn then_after(
            self,
            delay: Duration,
            result: Result<Vec<CookieDisclosure>, DisclosureError>,
        ) -> Self {
            self.script
                .lock()
                .expect("script lock")
                .push_back((delay, result));
            self
        }
    }

    impl DisclosureSource for ScriptedSource {
        fn fetch_disclosures(
            &self,
            customer_id: &str,
            config_id: &str,
            language: &str,
        ) -> Result<Vec<CookieDisclosure>, DisclosureError> {
            self.calls.lock().expect("calls lock").push((
                customer_id.to_string(),
                config_id.to_string(),
                language.to_string(),
            ));
            let next = self.script.lock().expect("script lock").pop_front();
            let (delay, result) = next.unwrap_or((Duration::ZERO, Ok(Vec::new())));
            thread::sleep(delay);
            result
        }
    }

    pub struct FixedIdentifier(pub Option<String>);

    impl IdentifierStore for FixedIdentifier {
        fn stored_identifier(&self) -> Option<String> {
            self.0.clone()
        }
    }

    pub fn disclosure(name: &str) -> CookieDisclosure {
        CookieDisclosure {
            name: name.to_string(),
            classification: "Analytics".to_string(),
            purpose: "Tracking".to_string(),
            expiry: "2 years".to_string(),
            provider: "Google".to_string(),
        }
    }

    pub fn remote_unavailable() -> DisclosureError {
        DisclosureError::RemoteUnavailable {
            detail: "HTTP 500".to_string(),
        }
    }

    pub fn app_with(source: ScriptedSource, identifier: Option<&str>) -> (App, Arc<ScriptedSource>) {
        let source = Arc::new(source);
        let app = App::new(
            &Settings::default(),
            SectionId::Cookies,
            None,
            Collaborators {
                disclosures: source.clone(),
                identifiers: Box::new(FixedIdentifier(identifier.map(str::to_string))),
                consent_widget: None,
            },
        );
        (app, source)
    }

    /// Ticks until every started fetch has been applied.
    pub fn settle(app: &mut App) {
        let deadline = Instant::now() + Duration::from_secs(5);
        loop {
            app.tick();
            if !app.view.fetch_in_flight {
                return;
            }
            assert!(Instant::now() < deadline, "fetch never completed");
            thread::sleep(Duration::from_millis(5));
        }
    }
}
