// Disclosure fetch lifecycle.
// - Starts each fetch on a background thread; completion comes back over a channel.
// - Completions are applied in arrival order, so the last response to arrive wins.
// - Failures land in fetch_error and never touch the current listing.
use std::{
    panic::{self, AssertUnwindSafe},
    sync::Arc,
    thread,
};

use crate::{disclosure::DisclosureError, model::CookieDisclosure};

use super::{App, FetchEvent};

impl App {
    /// "View disclosures" action: open the modal right away, then fetch.
    pub fn view_disclosures(&mut self) {
        self.open_disclosure_modal();
        self.start_disclosure_fetch();
    }

    pub fn start_disclosure_fetch(&mut self) {
        if self.pending_fetches > 0 {
            log::debug!(
                "starting disclosure fetch while {} still in flight",
                self.pending_fetches
            );
        }

        self.pending_fetches += 1;
        self.view.fetch_in_flight = true;
        self.view.fetch_error = None;
        self.spinner_frame = 0;
        self.status_message = "Loading cookie disclosures...".to_string();

        let source = Arc::clone(&self.collaborators.disclosures);
        let request = self.request.clone();
        let tx = self.fetch_tx.clone();
        thread::spawn(move || {
            // A panicking source still has to report, or the fetch never settles.
            let result = panic::catch_unwind(AssertUnwindSafe(|| {
                source.fetch_disclosures(
                    &request.customer_id,
                    &request.config_id,
                    &request.language,
                )
            }))
            .unwrap_or_else(|_| {
                Err(DisclosureError::RemoteUnavailable {
                    detail: "fetch worker panicked".to_string(),
                })
            });
            // The app may already be gone; nothing left to update then.
            let _ = tx.send(FetchEvent::Completed(result));
        });
    }

    pub(super) fn pump_fetch_events(&mut self) {
        while let Ok(event) = self.fetch_rx.try_recv() {
            match event {
                FetchEvent::Completed(result) => self.apply_fetch_result(result),
            }
        }
    }

    fn apply_fetch_result(&mut self, result: Result<Vec<CookieDisclosure>, DisclosureError>) {
        self.pending_fetches = self.pending_fetches.saturating_sub(1);
        self.view.fetch_in_flight = self.pending_fetches > 0;

        match result {
            Ok(disclosures) => {
                self.status_message = format!("Loaded {} cookie disclosures.", disclosures.len());
                self.view.disclosures = disclosures;
                self.view.fetch_error = None;
            }
            Err(err) => {
                if let DisclosureError::RemoteUnavailable { detail } = &err {
                    log::warn!("cookie disclosure fetch failed: {detail}");
                } else {
                    log::warn!("cookie disclosure fetch failed: {err}");
                }
                self.status_message = err.to_string();
                self.view.fetch_error = Some(err.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::super::{App, Collaborators, test_support::*};
    use crate::{
        config::{DEFAULT_CONFIG_ID, DEFAULT_CUSTOMER_ID, Settings},
        disclosure::{DisclosureError, DisclosureSource},
        model::{CookieDisclosure, SectionId},
    };

    struct PanickingSource;

    impl DisclosureSource for PanickingSource {
        fn fetch_disclosures(
            &self,
            _customer_id: &str,
            _config_id: &str,
            _language: &str,
        ) -> Result<Vec<CookieDisclosure>, DisclosureError> {
            panic!("disclosure source blew up");
        }
    }

    #[test]
    fn successful_fetch_populates_listing() {
        let source = ScriptedSource::default().then(Ok(vec![disclosure("_ga")]));
        let (mut app, source) = app_with(source, None);

        app.view_disclosures();
        assert!(app.view().disclosure_modal_open);
        assert!(app.view().fetch_in_flight);
        settle(&mut app);

        assert_eq!(
            app.view().disclosures,
            vec![CookieDisclosure {
                name: "_ga".to_string(),
                classification: "Analytics".to_string(),
                purpose: "Tracking".to_string(),
                expiry: "2 years".to_string(),
                provider: "Google".to_string(),
            }]
        );
        assert_eq!(app.view().fetch_error, None);
        assert!(!app.view().fetch_in_flight);
        assert_eq!(
            *source.calls.lock().expect("calls"),
            vec![(
                DEFAULT_CUSTOMER_ID.to_string(),
                DEFAULT_CONFIG_ID.to_string(),
                "en".to_string()
            )]
        );
    }

    #[test]
    fn listing_keeps_source_order_and_length() {
        let names = ["c", "a", "b", "a"];
        let source =
            ScriptedSource::default().then(Ok(names.iter().map(|name| disclosure(name)).collect()));
        let (mut app, _) = app_with(source, None);

        app.start_disclosure_fetch();
        settle(&mut app);

        let got = app
            .view()
            .disclosures
            .iter()
            .map(|item| item.name.as_str())
            .collect::<Vec<_>>();
        assert_eq!(got, names);
    }

    #[test]
    fn failed_fetch_keeps_previous_listing() {
        let source = ScriptedSource::default()
            .then(Ok(vec![disclosure("_ga"), disclosure("_gid")]))
            .then(Err(remote_unavailable()));
        let (mut app, _) = app_with(source, None);

        app.start_disclosure_fetch();
        settle(&mut app);
        let before = app.view().disclosures.clone();

        app.start_disclosure_fetch();
        settle(&mut app);

        assert_eq!(app.view().disclosures, before);
        assert_eq!(
            app.view().fetch_error.as_deref(),
            Some("Failed to fetch cookie disclosures")
        );
        assert!(!app.view().fetch_in_flight);
    }

    #[test]
    fn new_fetch_clears_previous_error() {
        let source = ScriptedSource::default()
            .then(Err(remote_unavailable()))
            .then_after(Duration::from_millis(50), Ok(vec![disclosure("_ga")]));
        let (mut app, _) = app_with(source, None);

        app.start_disclosure_fetch();
        settle(&mut app);
        assert!(app.view().fetch_error.is_some());

        app.start_disclosure_fetch();
        assert_eq!(app.view().fetch_error, None);
        assert!(app.view().fetch_in_flight);
        settle(&mut app);
        assert_eq!(app.view().disclosures.len(), 1);
    }

    #[test]
    fn later_arriving_response_wins() {
        let source = ScriptedSource::default()
            .then_after(Duration::from_millis(200), Ok(vec![disclosure("slow")]))
            .then(Ok(vec![disclosure("fast")]));
        let (mut app, _) = app_with(source, None);

        app.start_disclosure_fetch();
        app.start_disclosure_fetch();
        settle(&mut app);

        assert_eq!(app.view().disclosures, vec![disclosure("slow")]);
        assert!(!app.view().fetch_in_flight);
    }

    #[test]
    fn fetch_completing_after_close_updates_data_only() {
        let source = ScriptedSource::default()
            .then_after(Duration::from_millis(30), Ok(vec![disclosure("_ga")]));
        let (mut app, _) = app_with(source, None);

        app.view_disclosures();
        app.close_disclosure_modal();
        app.select_section(SectionId::Security);
        app.show_uuid_modal("abc-123");
        settle(&mut app);

        let view = app.view();
        assert!(!view.disclosure_modal_open);
        assert!(view.uuid_modal_open);
        assert_eq!(view.uuid_value, "abc-123");
        assert_eq!(view.active_section, SectionId::Security);
        assert_eq!(view.disclosures, vec![disclosure("_ga")]);
    }

    #[test]
    fn panicking_source_settles_as_fetch_error() {
        let mut app = App::new(
            &Settings::default(),
            SectionId::Cookies,
            None,
            Collaborators {
                disclosures: std::sync::Arc::new(PanickingSource),
                identifiers: Box::new(FixedIdentifier(None)),
                consent_widget: None,
            },
        );

        app.view_disclosures();
        settle(&mut app);

        assert!(!app.view().fetch_in_flight);
        assert!(app.view().disclosure_modal_open);
        assert_eq!(
            app.view().fetch_error.as_deref(),
            Some("Failed to fetch cookie disclosures")
        );
        assert!(app.view().disclosures.is_empty());
    }
}
