// Bridge to the external consent-management widget.
// - The widget is optional at every access; absence is a normal no-op path.
// - This app never initializes or owns the widget, it only asks it to open its drawer.
use std::{io, process::Command};

use crate::{config::ConsentWidgetSettings, launch};

/// Dialog the widget opens for cookie preference changes.
pub const PREFERENCES_DIALOG_ID: &str = "osano-cm-dom-info-dialog-open";

pub trait ConsentWidget {
    fn show_drawer(&self, dialog_id: &str) -> io::Result<()>;
    fn cmp_version(&self) -> &str;
}

/// Returns `Ok(false)` when no widget is present.
pub fn open_preferences_drawer(widget: Option<&dyn ConsentWidget>) -> io::Result<bool> {
    let Some(widget) = widget else {
        log::debug!("no consent widget present; preferences drawer not opened");
        return Ok(false);
    };

    log::info!(
        "opening consent preferences drawer (cmp {})",
        widget.cmp_version()
    );
    widget.show_drawer(PREFERENCES_DIALOG_ID)?;
    Ok(true)
}

/// Widget reached by launching an external command with the dialog id appended.
#[derive(Debug, Clone)]
pub struct CommandWidget {
    program: String,
    args: Vec<String>,
    version: String,
}

impl CommandWidget {
    pub fn from_settings(settings: Option<&ConsentWidgetSettings>) -> Option<Self> {
        let settings = settings?;
        let program = settings.command.trim();
        if program.is_empty() {
            return None;
        }

        Some(Self {
            program: program.to_string(),
            args: settings.args.clone(),
            version: settings.version.clone(),
        })
    }
}

impl ConsentWidget for CommandWidget {
    fn show_drawer(&self, dialog_id: &str) -> io::Result<()> {
        let mut command = Command::new(&self.program);
        command.args(&self.args).arg(dialog_id);
        let pid = launch::spawn_reaped(command)?;
        log::debug!("consent widget command {} started as pid {pid}", self.program);
        Ok(())
    }

    fn cmp_version(&self) -> &str {
        &self.version
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    #[derive(Default)]
    struct RecordingWidget {
        calls: RefCell<Vec<String>>,
    }

    impl ConsentWidget for RecordingWidget {
        fn show_drawer(&self, dialog_id: &str) -> io::Result<()> {
            self.calls.borrow_mut().push(dialog_id.to_string());
            Ok(())
        }

        fn cmp_version(&self) -> &str {
            "2024.1"
        }
    }

    fn widget_settings(command: &str) -> ConsentWidgetSettings {
        ConsentWidgetSettings {
            command: command.to_string(),
            args: vec!["--drawer".to_string()],
            version: "1.0".to_string(),
        }
    }

    #[test]
    fn absent_widget_is_a_no_op() {
        assert!(!open_preferences_drawer(None).expect("no error"));
    }

    #[test]
    fn present_widget_receives_fixed_dialog_id() {
        let widget = RecordingWidget::default();

        assert!(open_preferences_drawer(Some(&widget)).expect("opened"));
        assert_eq!(
            *widget.calls.borrow(),
            vec![PREFERENCES_DIALOG_ID.to_string()]
        );
    }

    #[test]
    fn blank_command_means_no_widget() {
        assert!(CommandWidget::from_settings(None).is_none());
        assert!(CommandWidget::from_settings(Some(&widget_settings("  "))).is_none());
    }

    #[test]
    fn missing_program_reports_launch_error() {
        let widget = CommandWidget::from_settings(Some(&widget_settings(
            "trusthub-test-no-such-widget-binary",
        )))
        .expect("configured");

        assert_eq!(widget.cmp_version(), "1.0");
        assert!(open_preferences_drawer(Some(&widget)).is_err());
    }

    #[cfg(unix)]
    #[test]
    fn command_widget_launches_program() {
        let widget = CommandWidget::from_settings(Some(&widget_settings("true"))).expect("configured");
        assert!(open_preferences_drawer(Some(&widget)).expect("launched"));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn repeated_drawer_opens_leave_no_zombies() {
        let widget = CommandWidget::from_settings(Some(&widget_settings("true"))).expect("configured");
        for _ in 0..5 {
            widget.show_drawer(PREFERENCES_DIALOG_ID).expect("launched");
        }

        assert_eq!(
            crate::launch::test_support::wait_until_reaped(&[]),
            Vec::<u32>::new()
        );
    }
}
