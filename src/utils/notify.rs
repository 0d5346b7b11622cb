use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::warn;

use crate::pager::Notifier;

/// Hands failed-request alerts to the terminal loop, which keeps the latest
/// one on screen until the next command. Printing directly would be wiped by
/// the redraw that follows the failed load.
pub struct TerminalNotifier {
    alerts: UnboundedSender<String>,
}

impl TerminalNotifier {
    pub fn channel() -> (Self, UnboundedReceiver<String>) {
        let (alerts, receiver) = mpsc::unbounded_channel();
        (TerminalNotifier { alerts }, receiver)
    }
}

impl Notifier for TerminalNotifier {
    fn alert(&self, message: &str) {
        warn!("Alerting user: {}", message);
        let alert = format_alert(message);
        if self.alerts.send(alert.clone()).is_err() {
            // Terminal loop already gone
            eprintln!("{}", alert);
        }
    }
}

/// Boxed alert text; every failure kind reads as "request failed"
pub fn format_alert(message: &str) -> String {
    let detail = message.trim();
    let width = detail.chars().count().max(14) + 4;
    let border = "!".repeat(width);
    format!(
        "{border}\n! {:<w$} !\n! {:<w$} !\n{border}",
        "Request failed",
        detail,
        w = width - 4,
        border = border
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alert_is_boxed() {
        let alert = format_alert("HTTP Error (500): boom");
        let lines: Vec<&str> = alert.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[1], "! Request failed         !");
        assert_eq!(lines[2], "! HTTP Error (500): boom !");
        assert!(lines.iter().all(|l| l.chars().count() == lines[0].chars().count()));
    }

    #[test]
    fn test_each_alert_reaches_the_terminal_loop_once() {
        let (notifier, mut alerts) = TerminalNotifier::channel();

        notifier.alert("Request Error: connection refused");

        let alert = alerts.try_recv().unwrap();
        assert!(alert.contains("Request failed"));
        assert!(alert.contains("connection refused"));
        assert!(alerts.try_recv().is_err());
    }
}
