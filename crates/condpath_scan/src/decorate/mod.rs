//! Inline annotations and the active conditional path.
//!
//! The scan visits every directive in the buffer (matched anywhere on a
//! line, not only at its start) and keeps three pieces of state:
//!
//! - a stack of condition frames, one per open `#if` chain. `#elif`
//!   rewrites the top frame in place, so a frame keeps the nesting level
//!   it was opened at for the whole chain;
//! - the sibling history, every branch name seen since the chain opened,
//!   drained at `#endif` into a combined `A & B & !B` label;
//! - the active path, the names enclosing the reference line. Directives
//!   at or before the reference line push and replace; an `#endif`
//!   strictly before it pops.
//!
//! Lines that start with `//` or `/*` are skipped entirely.
//!
//! # Example
//!
//! ```text
//! 0  #if A      <-- A
//! 1  #elif B    <-- B
//! 2  #else      <-- !B
//! 3  #endif     <-- A & B & !B
//! ```

use condpath_lexer::{
    is_comment_line, negate, normalize_condition, open_display_name, Directive, DirectiveKind,
    DirectiveScanner, LineIndex,
};
use serde::Serialize;
use smallvec::SmallVec;

use crate::{ActivePath, ScanConfig, ScanDiagnostic};

/// Number of colour bands annotations cycle through.
pub const BAND_COUNT: usize = 10;

const BAND_COLORS: [&str; BAND_COUNT] = [
    "blue", "green", "red", "orange", "purple", "cyan", "magenta", "brown", "lime", "pink",
];

/// Display colour for a band. Bands past the palette wrap around.
pub fn band_color(band: usize) -> &'static str {
    BAND_COLORS[band % BAND_COUNT]
}

/// End-of-line annotation for one directive.
#[derive(Clone, Eq, PartialEq, Debug, Serialize)]
pub struct Annotation {
    pub line: usize,
    /// Colour band, `level % BAND_COUNT`. A rendering hint only.
    pub band: usize,
    pub label: String,
}

impl Annotation {
    /// Text shown after the end of the line.
    pub fn rendered(&self) -> String {
        format!(" <-- {}", self.label)
    }

    pub fn color(&self) -> &'static str {
        band_color(self.band)
    }
}

/// Output of one decoration scan.
#[derive(Clone, Default, Eq, PartialEq, Debug, Serialize)]
pub struct DecorationSet {
    /// Annotations grouped by colour band, each in document order.
    pub bands: [Vec<Annotation>; BAND_COUNT],
    /// Conditions enclosing the reference line.
    pub active_path: ActivePath,
    pub diagnostics: Vec<ScanDiagnostic>,
}

impl DecorationSet {
    /// All annotations across bands, ordered by line.
    pub fn annotations(&self) -> Vec<&Annotation> {
        let mut all: Vec<&Annotation> = self.bands.iter().flatten().collect();
        all.sort_by_key(|a| a.line);
        all
    }

    pub fn status_text(&self) -> String {
        self.active_path.status_text()
    }
}

/// Compute annotations and the active path for `reference_line`.
#[tracing::instrument(level = "debug", skip(text, config))]
pub fn decorations(text: &str, reference_line: usize, config: &ScanConfig) -> DecorationSet {
    let index = LineIndex::new(text);
    let mut scan = DecorationScan::new(reference_line, config);

    for found in DirectiveScanner::new(text) {
        let line = index.line_of(found.offset);
        if index.line_text(line).is_some_and(is_comment_line) {
            log_if!(config, decorations, trace, line, "skipping commented-out directive");
            continue;
        }
        scan.directive(line, found.directive);
    }

    let set = scan.finish();
    log_if!(
        config,
        decorations,
        debug,
        path = %set.active_path,
        "decoration scan complete"
    );
    set
}

/// One open `#if` chain.
#[derive(Clone, Debug)]
struct ConditionFrame {
    /// Line of the latest directive in the chain.
    line: usize,
    kind: DirectiveKind,
    display_name: String,
    /// Stack depth when the chain opened.
    level: usize,
}

#[derive(Default)]
struct FrameStack {
    frames: SmallVec<[ConditionFrame; 8]>,
}

impl FrameStack {
    fn depth(&self) -> usize {
        self.frames.len()
    }

    fn push(&mut self, frame: ConditionFrame) {
        self.frames.push(frame);
    }

    fn top(&self) -> Option<&ConditionFrame> {
        self.frames.last()
    }

    /// Rewrite the innermost frame for a new branch, keeping its level.
    ///
    /// Returns the level, or `None` when no frame is open.
    fn replace_top(
        &mut self,
        line: usize,
        kind: DirectiveKind,
        display_name: String,
    ) -> Option<usize> {
        let top = self.frames.last_mut()?;
        top.line = line;
        top.kind = kind;
        top.display_name = display_name;
        Some(top.level)
    }

    fn pop(&mut self) -> Option<ConditionFrame> {
        self.frames.pop()
    }

    /// `A->B->C` over every open frame, for logging.
    fn joined(&self) -> String {
        let names: Vec<&str> = self.frames.iter().map(|f| f.display_name.as_str()).collect();
        names.join("->")
    }
}

struct HistoryEntry {
    name: String,
    kind: DirectiveKind,
}

/// Branch names seen since each open chain started.
#[derive(Default)]
struct SiblingHistory {
    entries: Vec<HistoryEntry>,
}

impl SiblingHistory {
    fn record(&mut self, name: String, kind: DirectiveKind) {
        self.entries.push(HistoryEntry { name, kind });
    }

    /// Drain the innermost chain into `first & second & ...`.
    ///
    /// Stops after the entry that opened the chain, or when empty.
    fn drain_chain(&mut self) -> String {
        let mut combined = String::new();
        while let Some(entry) = self.entries.pop() {
            combined = if combined.is_empty() {
                entry.name
            } else {
                format!("{} & {combined}", entry.name)
            };
            if entry.kind.is_open() {
                break;
            }
        }
        combined
    }
}

struct DecorationScan<'c> {
    config: &'c ScanConfig,
    reference_line: usize,
    frames: FrameStack,
    history: SiblingHistory,
    out: DecorationSet,
}

impl<'c> DecorationScan<'c> {
    fn new(reference_line: usize, config: &'c ScanConfig) -> Self {
        Self {
            config,
            reference_line,
            frames: FrameStack::default(),
            history: SiblingHistory::default(),
            out: DecorationSet::default(),
        }
    }

    fn directive(&mut self, line: usize, directive: Directive<'_>) {
        match directive.kind {
            kind @ (DirectiveKind::If | DirectiveKind::IfDef | DirectiveKind::IfNDef) => {
                self.open(line, kind, directive.condition);
            }
            DirectiveKind::ElseIf => self.else_if(line, directive.condition),
            DirectiveKind::Else => self.else_branch(line),
            DirectiveKind::EndIf => self.end_if(line),
        }
    }

    fn open(&mut self, line: usize, kind: DirectiveKind, condition: &str) {
        let name = open_display_name(kind, &normalize_condition(condition));
        let level = self.frames.depth();
        self.frames.push(ConditionFrame {
            line,
            kind,
            display_name: name.clone(),
            level,
        });
        self.history.record(name.clone(), kind);
        log_if!(
            self.config,
            decorations,
            debug,
            line,
            %kind,
            name = %name,
            path = %self.frames.joined(),
            "open"
        );

        self.annotate(line, level, name.clone());
        if line <= self.reference_line {
            self.out.active_path.push(name);
        }
    }

    fn else_if(&mut self, line: usize, condition: &str) {
        let kind = DirectiveKind::ElseIf;
        let name = normalize_condition(condition);
        let Some(level) = self.frames.replace_top(line, kind, name.clone()) else {
            self.report(ScanDiagnostic::Unmatched { line, kind });
            return;
        };
        self.history.record(name.clone(), kind);
        log_if!(
            self.config,
            decorations,
            debug,
            line,
            name = %name,
            path = %self.frames.joined(),
            "branch"
        );

        self.annotate(line, level, name.clone());
        if line <= self.reference_line {
            self.out.active_path.replace_last(name);
        }
    }

    /// `#else` shows the negation of the branch it follows. The frame
    /// itself keeps the earlier name.
    fn else_branch(&mut self, line: usize) {
        let kind = DirectiveKind::Else;
        let Some((label, level)) = self
            .frames
            .top()
            .map(|top| (negate(&top.display_name), top.level))
        else {
            self.report(ScanDiagnostic::Unmatched { line, kind });
            return;
        };
        self.history.record(label.clone(), kind);
        log_if!(
            self.config,
            decorations,
            debug,
            line,
            label = %label,
            path = %self.frames.joined(),
            "else"
        );

        self.annotate(line, level, label.clone());
        if line <= self.reference_line {
            self.out.active_path.replace_last(label);
        }
    }

    fn end_if(&mut self, line: usize) {
        let Some(frame) = self.frames.pop() else {
            self.report(ScanDiagnostic::Unmatched {
                line,
                kind: DirectiveKind::EndIf,
            });
            return;
        };
        let combined = self.history.drain_chain();
        log_if!(
            self.config,
            decorations,
            debug,
            line,
            combined = %combined,
            closes = %frame.display_name,
            "endif"
        );

        self.annotate(line, frame.level, combined);
        if line < self.reference_line {
            self.out.active_path.pop();
        }
    }

    fn annotate(&mut self, line: usize, level: usize, label: String) {
        let band = level % BAND_COUNT;
        self.out.bands[band].push(Annotation { line, band, label });
    }

    fn report(&mut self, diagnostic: ScanDiagnostic) {
        log_if!(self.config, decorations, warn, "{diagnostic}");
        self.out.diagnostics.push(diagnostic);
    }

    fn finish(mut self) -> DecorationSet {
        while let Some(frame) = self.frames.pop() {
            self.report(ScanDiagnostic::Unterminated {
                line: frame.line,
                kind: frame.kind,
            });
        }
        self.out
    }
}
