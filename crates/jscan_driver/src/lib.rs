//! jscan_driver: Scan orchestration.
//!
//! Loads a source file, pulls tokens from the scanner, forwards tokens
//! and newly recorded warnings to an [`EventSink`] as they happen, and
//! finalizes the scan into a [`Reporter`].

use jscan_core::{JscanError, Result};
use jscan_diagnostics::{Warning, WarningCollection};
use jscan_options::ScanOptions;
use jscan_report::Reporter;
use jscan_scanner::{Scanner, Token};
use std::io::{self, Write};
use std::path::Path;
use tracing::{debug, debug_span};

/// Receives scan events in emission order.
pub trait EventSink {
    fn token(&mut self, token: &Token);
    fn warning(&mut self, warning: &Warning);
}

/// Writes the line-per-event trace: `[KIND] text` for tokens and
/// `[WARNING] message` for warnings.
///
/// Write failures are latched: after the first error nothing more is
/// written, and the error is returned from [`TraceSink::finish`].
pub struct TraceSink<W: Write> {
    out: W,
    tokens: bool,
    error: Option<io::Error>,
}

impl<W: Write> TraceSink<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            tokens: true,
            error: None,
        }
    }

    /// Print tokens or only warnings.
    pub fn with_tokens(mut self, tokens: bool) -> Self {
        self.tokens = tokens;
        self
    }

    /// Flush and hand back the writer, or the first write error.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        self.out.flush()?;
        Ok(self.out)
    }

    fn write_line(&mut self, line: &dyn std::fmt::Display) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = writeln!(self.out, "{line}") {
            self.error = Some(err);
        }
    }
}

impl<W: Write> EventSink for TraceSink<W> {
    fn token(&mut self, token: &Token) {
        if self.tokens {
            self.write_line(token);
        }
    }

    fn warning(&mut self, warning: &Warning) {
        self.write_line(warning);
    }
}

/// Read a source file into memory. The whole file must be valid UTF-8.
pub fn load_source(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|source| JscanError::ReadInput {
        path: path.to_path_buf(),
        source,
    })?;
    let text = simdutf8::basic::from_utf8(&bytes).map_err(|_| JscanError::InvalidUtf8 {
        path: path.to_path_buf(),
    })?;
    Ok(text.to_owned())
}

/// Scan `source` to completion, streaming events into `sink`.
///
/// Every warning reaches the sink exactly once: scan-time warnings right
/// after the token that triggered them, unused-variable warnings last.
pub fn run_scan(source: &str, options: &ScanOptions, sink: &mut dyn EventSink) -> Reporter {
    let _span = debug_span!("scan", bytes = source.len()).entered();
    debug!(
        check_semicolons = options.check_semicolons,
        max_token_length = ?options.max_token_length,
        "scan started"
    );

    let mut scanner = Scanner::with_options(source, options);
    let mut forwarded = 0;
    let mut tokens = 0usize;
    while let Some(token) = scanner.next_token() {
        tokens += 1;
        sink.token(&token);
        forwarded = forward_warnings(scanner.diagnostics(), forwarded, sink);
    }

    let reporter = Reporter::new(scanner.finish());
    forward_warnings(reporter.warnings(), forwarded, sink);

    debug!(
        tokens,
        warnings = reporter.warnings().len(),
        lines = reporter.total_lines(),
        "scan finished"
    );
    reporter
}

/// Send warnings recorded since `start`; returns the new watermark.
fn forward_warnings(warnings: &WarningCollection, start: usize, sink: &mut dyn EventSink) -> usize {
    for warning in warnings.since(start) {
        sink.warning(warning);
    }
    warnings.len()
}

/// One input file scanned with one set of options.
pub struct Session {
    options: ScanOptions,
    source_text: String,
}

impl Session {
    /// Load `path` from disk.
    pub fn load(path: &Path, options: ScanOptions) -> Result<Self> {
        let source_text = load_source(path)?;
        debug!(path = %path.display(), bytes = source_text.len(), "loaded source");
        Ok(Self::from_source(source_text, options))
    }

    pub fn from_source(source_text: String, options: ScanOptions) -> Self {
        Self {
            options,
            source_text,
        }
    }

    pub fn options(&self) -> &ScanOptions {
        &self.options
    }

    /// Scan, stream events into `sink`, and write the report file.
    pub fn run(&self, sink: &mut dyn EventSink) -> Result<Reporter> {
        let reporter = run_scan(&self.source_text, &self.options, sink);
        reporter.report().write_to(&self.options.stats_path())?;
        Ok(reporter)
    }
}
