//! Status presenters.
//!
//! | Presenter        | Target                                   |
//! |------------------|------------------------------------------|
//! | `LogPresenter`   | one debug log line per cycle             |
//! | `PanelPresenter` | character panel behind [`TextPanel`]     |
//!
//! Presenters never fail the cycle. A panel that stops answering is logged
//! once and retried on the next frame.

use core::fmt::{self, Write};

use heapless::{String, Vec};
use log::{debug, info, warn};

use crate::app::events::{AppEvent, CycleStatus};
use crate::app::ports::{EventSink, StatusPresenter, TextPanel};
use crate::pins::{DISPLAY_COLUMNS, DISPLAY_ROWS};

/// One panel row.
pub type Row = String<DISPLAY_COLUMNS>;

// ── LogPresenter ──────────────────────────────────────────────

/// Writes a compact status line to the log every cycle.
#[derive(Debug, Default)]
pub struct LogPresenter;

impl LogPresenter {
    pub fn new() -> Self {
        Self
    }
}

impl StatusPresenter for LogPresenter {
    fn render(&mut self, status: &CycleStatus) {
        match status.temperature_c {
            Some(t) => debug!(
                "STATUS | cycle={} | T={:.2}\u{00b0}C | fan={} | pump={}",
                status.cycle,
                t,
                status.fan.label(),
                status.pump.label(),
            ),
            None => debug!(
                "STATUS | cycle={} | T=ERR | fan={} | pump={}",
                status.cycle,
                status.fan.label(),
                status.pump.label(),
            ),
        }
    }
}

// ── PanelPresenter ────────────────────────────────────────────

/// Renders the status onto a [`TextPanel`].
pub struct PanelPresenter<D> {
    panel: D,
    healthy: bool,
    frames: u32,
}

impl<D: TextPanel> PanelPresenter<D> {
    /// Bring the panel up and show the splash.
    ///
    /// Returns `None` when the panel does not answer, after reporting
    /// [`AppEvent::PresenterUnavailable`]; the caller runs without it.
    pub fn connect(mut panel: D, sink: &mut impl EventSink) -> Option<Self> {
        if let Err(e) = panel.init() {
            sink.emit(&AppEvent::PresenterUnavailable(e));
            return None;
        }
        if let Err(e) = panel.draw(&["Display Initialized"], None) {
            warn!("Display splash failed: {e}");
        }
        info!("Status display initialized");
        Some(Self {
            panel,
            healthy: true,
            frames: 0,
        })
    }

    pub fn panel(&self) -> &D {
        &self.panel
    }

    /// Frames successfully drawn since the panel came up.
    pub fn frames(&self) -> u32 {
        self.frames
    }
}

impl<D: TextPanel> StatusPresenter for PanelPresenter<D> {
    fn render(&mut self, status: &CycleStatus) {
        let (rows, highlight_from) = format_rows(status);
        let refs: Vec<&str, DISPLAY_ROWS> = rows.iter().map(String::as_str).collect();

        match self.panel.draw(&refs, highlight_from) {
            Ok(()) => {
                if !self.healthy {
                    info!("Status display recovered");
                }
                self.healthy = true;
                self.frames = self.frames.wrapping_add(1);
            }
            Err(e) => {
                if self.healthy {
                    warn!("Status display draw failed: {e}");
                }
                self.healthy = false;
            }
        }
    }
}

/// Lay out the status rows. The second value is the first row of the
/// lockout banner, if one is shown.
///
/// A temperature too wide for the panel is shown as `ERR` rather than cut.
pub fn format_rows(status: &CycleStatus) -> (Vec<Row, DISPLAY_ROWS>, Option<usize>) {
    let mut rows: Vec<Row, DISPLAY_ROWS> = Vec::new();

    let temp_fits = match status.temperature_c {
        Some(t) => push_row(&mut rows, format_args!("Temp: {:.2} C", t)),
        None => false,
    };
    if !temp_fits {
        push_row(&mut rows, format_args!("Temp: ERR"));
    }
    push_row(&mut rows, format_args!("Fan: {}", status.fan.label()));
    push_row(
        &mut rows,
        format_args!("Pump: {}", if status.pump_on() { "ON" } else { "OFF" }),
    );

    if !status.locked_out() {
        return (rows, None);
    }

    let banner_at = rows.len();
    push_row(&mut rows, format_args!("*** LOCKOUT ***"));
    push_row(&mut rows, format_args!("CHECK TANK"));
    (rows, Some(banner_at))
}

/// Append one formatted row. Returns `false`, leaving `rows` untouched, if
/// the text is wider than the panel or the panel is full.
fn push_row(rows: &mut Vec<Row, DISPLAY_ROWS>, args: fmt::Arguments<'_>) -> bool {
    let mut row = Row::new();
    if row.write_fmt(args).is_err() {
        debug!("Status row wider than {} columns", DISPLAY_COLUMNS);
        return false;
    }
    if rows.push(row).is_err() {
        warn!("Status row dropped, panel holds {} rows", DISPLAY_ROWS);
        return false;
    }
    true
}
