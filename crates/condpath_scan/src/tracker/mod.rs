//! Cursor-driven decoration updates and the host rendering seam.
//!
//! Every host signal (buffer edit, view switch, buffer open, caret move)
//! funnels into [`PathDecorator::handle`]. A full rescan happens only when
//! the caret's line differs from the line seen by the previous call; the
//! column is ignored. A call on the same line performs no scan and clears
//! every annotation band, leaving the status text as it was. The blank
//! hints stay until the caret moves to another line.

use crate::decorate::{decorations, Annotation, DecorationSet, BAND_COUNT};
use crate::{ActivePath, ScanConfig};

/// Caret position in the host buffer, zero-based.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Cursor {
    pub line: usize,
    pub column: usize,
}

impl Cursor {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// Outcome of [`CursorTracker::refresh`].
#[derive(Clone, Debug)]
pub enum Refresh {
    /// The caret changed line; a fresh scan.
    Scanned(DecorationSet),
    /// Same line as last time; nothing was scanned.
    Suppressed,
}

/// Remembers the last caret line and rescans only when it changes.
#[derive(Clone, Debug)]
pub struct CursorTracker {
    config: ScanConfig,
    previous_line: Option<usize>,
}

impl CursorTracker {
    pub fn new(config: ScanConfig) -> Self {
        Self {
            config,
            previous_line: None,
        }
    }

    /// Line seen by the last non-suppressed refresh.
    pub fn previous_line(&self) -> Option<usize> {
        self.previous_line
    }

    pub fn refresh(&mut self, text: &str, cursor: Cursor) -> Refresh {
        if self.previous_line == Some(cursor.line) {
            log_if!(self.config, decorations, trace, line = cursor.line, "cursor line unchanged");
            return Refresh::Suppressed;
        }
        log_if!(
            self.config,
            decorations,
            debug,
            previous = ?self.previous_line,
            line = cursor.line,
            column = cursor.column,
            "cursor line changed"
        );
        self.previous_line = Some(cursor.line);
        Refresh::Scanned(decorations(text, cursor.line, &self.config))
    }
}

/// Host signals that trigger a decoration update.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum HostEvent {
    BufferChanged,
    ActiveViewSwitched,
    BufferOpened,
    SelectionMoved,
}

/// Rendering surface owned by a [`PathDecorator`].
///
/// Implementations hold whatever presentation resources the host needs
/// (one style per colour band, a status item). They are released once,
/// when the decorator is dropped.
pub trait DecorationHost {
    /// Replace every annotation shown in `band`.
    fn set_band(&mut self, band: usize, annotations: &[Annotation]);

    /// Replace the status text.
    fn set_status(&mut self, text: &str);

    /// Free presentation resources.
    fn release(&mut self) {}
}

/// Decoration component: the cursor tracker plus the host it draws on.
pub struct PathDecorator<H: DecorationHost> {
    host: H,
    tracker: CursorTracker,
}

impl<H: DecorationHost> PathDecorator<H> {
    /// Take ownership of the host and show an empty path.
    pub fn new(mut host: H, config: ScanConfig) -> Self {
        host.set_status(&ActivePath::new().status_text());
        Self {
            host,
            tracker: CursorTracker::new(config),
        }
    }

    /// React to a host signal. Returns `true` if a scan ran.
    pub fn handle(&mut self, event: HostEvent, text: &str, cursor: Cursor) -> bool {
        log_if!(self.tracker.config, decorations, trace, ?event, "host event");
        match self.tracker.refresh(text, cursor) {
            Refresh::Scanned(set) => {
                for (band, annotations) in set.bands.iter().enumerate() {
                    self.host.set_band(band, annotations);
                }
                self.host.set_status(&set.status_text());
                true
            }
            Refresh::Suppressed => {
                for band in 0..BAND_COUNT {
                    self.host.set_band(band, &[]);
                }
                false
            }
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn tracker(&self) -> &CursorTracker {
        &self.tracker
    }
}

impl<H: DecorationHost> Drop for PathDecorator<H> {
    fn drop(&mut self) {
        self.host.release();
    }
}
