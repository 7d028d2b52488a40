//! Terminal rendering of the form and its notifications.

use std::io::{self, Write};

use signup_lib::{FieldName, FormModel, Notification, NotificationLevel, Notifier, UserData};

/// Notifier printing to stdout.
///
/// A line-oriented terminal has nothing to dismiss, so the duration is only
/// logged.
#[derive(Debug, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, notification: Notification) {
        log::debug!(
            "notification for {} ms: {}",
            notification.duration.as_millis(),
            notification.message
        );
        let tag = match notification.level {
            NotificationLevel::Success => "ok",
            NotificationLevel::Error => "error",
        };
        println!("[{}] {}", tag, notification.message);
    }
}

/// Write the current form, with errors once they are visible.
pub fn render_form(out: &mut impl Write, form: &FormModel) -> io::Result<()> {
    for field in FieldName::ALL {
        write!(out, "{:<12} {}", field.label(), form.values().get(field))?;
        if let Some(error) = form.visible_error(field) {
            write!(out, "  <- {}", error)?;
        }
        writeln!(out)?;
    }
    let submit = if form.is_complete() { "enabled" } else { "disabled" };
    writeln!(out, "submit: {}", submit)
}

/// Write a stored record.
pub fn render_record(out: &mut impl Write, user: &UserData) -> io::Result<()> {
    for (field, value) in user.iter() {
        writeln!(out, "{:<12} {}", field.label(), value)?;
    }
    Ok(())
}
