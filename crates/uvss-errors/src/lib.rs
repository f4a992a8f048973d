use std::fmt::{self, Display};

pub use annotate_snippets::Renderer;
use annotate_snippets::{Level, Snippet};
pub use text_size::{TextRange, TextSize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Severity {
    Error,
    Warning,
}

impl Severity {
    fn level(self) -> Level {
        match self {
            Severity::Error => Level::Error,
            Severity::Warning => Level::Warning,
        }
    }
}

impl Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
        })
    }
}

/// Stable identity of a diagnostic, independent of its message text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DiagnosticCode {
    UnknownCharacter,
    UnterminatedString,
    UnterminatedComment,
    MissingToken,
    UnexpectedToken,
    UnknownLoopBehavior,
}

impl DiagnosticCode {
    pub fn key(self) -> &'static str {
        match self {
            DiagnosticCode::UnknownCharacter => "unknown-character",
            DiagnosticCode::UnterminatedString => "unterminated-string",
            DiagnosticCode::UnterminatedComment => "unterminated-comment",
            DiagnosticCode::MissingToken => "missing-token",
            DiagnosticCode::UnexpectedToken => "unexpected-token",
            DiagnosticCode::UnknownLoopBehavior => "unknown-loop-behavior",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Diagnostic {
    severity: Severity,
    code: DiagnosticCode,
    message: String,
    range: TextRange,
}

impl Diagnostic {
    pub fn error(code: DiagnosticCode, message: impl Into<String>, range: TextRange) -> Self {
        Self { severity: Severity::Error, code, message: message.into(), range }
    }

    pub fn warning(code: DiagnosticCode, message: impl Into<String>, range: TextRange) -> Self {
        Self { severity: Severity::Warning, code, message: message.into(), range }
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn code(&self) -> DiagnosticCode {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn range(&self) -> TextRange {
        self.range
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    pub fn render<'a>(
        &'a self,
        renderer: &'a Renderer,
        path: &'a str,
        text: &'a str,
    ) -> impl Display + 'a {
        let level = self.severity.level();
        let message = level.title(&self.message).id(self.code.key()).snippet(
            Snippet::source(text)
                .origin(path)
                .annotation(level.span(self.range.into()).label("here"))
                .fold(true),
        );
        renderer.render(message)
    }
}

impl Display for Diagnostic {
    /// `error[missing-token] 12..12: expected '}'`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}] {:?}: {}", self.severity, self.code.key(), self.range, self.message)
    }
}

/// Append-only collection of diagnostics for one source text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Diagnostics {
    inner: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.inner.push(diagnostic);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.inner.iter()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn has_errors(&self) -> bool {
        self.inner.iter().any(Diagnostic::is_error)
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.inner.iter().filter(|diagnostic| diagnostic.is_error())
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.inner.iter().filter(|diagnostic| !diagnostic.is_error())
    }

    /// Orders by start position; equal positions keep insertion order.
    pub fn sort(&mut self) {
        self.inner.sort_by_key(|diagnostic| diagnostic.range.start());
    }
}

impl Extend<Diagnostic> for Diagnostics {
    fn extend<T: IntoIterator<Item = Diagnostic>>(&mut self, iter: T) {
        self.inner.extend(iter);
    }
}

impl FromIterator<Diagnostic> for Diagnostics {
    fn from_iter<T: IntoIterator<Item = Diagnostic>>(iter: T) -> Self {
        Self { inner: Vec::from_iter(iter) }
    }
}

impl IntoIterator for Diagnostics {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}
