use std::cell::RefCell;
use std::io::{self, Write};

use vital_monitor_domain::{VitalsReport, WarningNotifier};

/// Notifier that writes `Warning: <message>` lines to a writer
///
/// The first write failure is kept and returned by [`ConsoleNotifier::into_inner`].
pub struct ConsoleNotifier<W: Write> {
    writer: RefCell<W>,
    error: RefCell<Option<io::Error>>,
}

impl<W: Write> ConsoleNotifier<W> {
    /// Create a notifier over any writer
    pub fn new(writer: W) -> Self {
        Self {
            writer: RefCell::new(writer),
            error: RefCell::new(None),
        }
    }

    /// Recover the underlying writer, or the first error hit while writing
    pub fn into_inner(self) -> io::Result<W> {
        match self.error.into_inner() {
            Some(e) => Err(e),
            None => Ok(self.writer.into_inner()),
        }
    }
}

impl<W: Write> WarningNotifier for ConsoleNotifier<W> {
    fn notify(&self, message: &str) {
        let mut writer = self.writer.borrow_mut();
        if let Err(e) = writeln!(writer, "Warning: {}", message) {
            tracing::error!("Failed to write warning: {}", e);
            let mut error = self.error.borrow_mut();
            if error.is_none() {
                *error = Some(e);
            }
        }
    }
}

/// Render a report as the human readable summary printed after the warnings
pub fn render_text(report: &VitalsReport) -> String {
    let status = |ok: bool| if ok { "ok" } else { "FAILED" };

    let mut out = String::new();
    out.push_str(&format!("temperature: {}\n", status(report.temperature_ok)));
    out.push_str(&format!("pulse rate:  {}\n", status(report.pulse_rate_ok)));
    out.push_str(&format!("spo2:        {}\n", status(report.spo2_ok)));
    out.push_str(&format!(
        "vitals {}",
        if report.all_ok() { "ok" } else { "not ok" }
    ));
    out
}
