use anyhow::Context as _;
use camino::{Utf8Path, Utf8PathBuf};
use uvss_parse::Parse;

/// A source file read from disk together with its parse.
pub(crate) struct SourceFile {
    pub(crate) path: Utf8PathBuf,
    pub(crate) text: String,
    pub(crate) parse: Parse,
}

impl SourceFile {
    pub(crate) fn load(path: &Utf8Path) -> anyhow::Result<Self> {
        let text =
            std::fs::read_to_string(path).with_context(|| format!("failed to read `{path}`"))?;
        let parse = uvss_parse::parse(&text);
        tracing::debug!(%path, diagnostics = parse.diagnostics().len(), "loaded");
        Ok(Self { path: path.to_owned(), text, parse })
    }
}
