//! Error rendering using miette
//!
//! This module turns [`ErrorCode`]s into `miette` diagnostics: the domain and
//! value become the diagnostic code, the domain message the headline, and
//! non-zero support data a help line.

use std::io::Write;

use miette::{
    Diagnostic, GraphicalReportHandler, GraphicalTheme, Severity, ThemeCharacters, ThemeStyles,
};

use crate::{ErrorCode, Exception};

/// Character set for rendering error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CharSet {
    /// Use Unicode characters for rich visual output.
    #[default]
    Unicode,
    /// Use ASCII-only characters for compatibility.
    Ascii,
}

/// Configuration for error rendering.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Whether to use ANSI color codes in output.
    pub color: bool,
    /// The character set to use for rendering.
    /// Defaults to Unicode for rich visual output.
    pub charset: CharSet,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig::default()
    }
}

impl RenderConfig {
    const fn default() -> Self {
        Self {
            color: true,
            charset: CharSet::Unicode,
        }
    }

    fn theme(&self) -> GraphicalTheme {
        match (self.charset, self.color) {
            (CharSet::Unicode, true) => GraphicalTheme::unicode(),
            (CharSet::Unicode, false) => GraphicalTheme::unicode_nocolor(),
            (CharSet::Ascii, true) => GraphicalTheme::ascii(),
            (CharSet::Ascii, false) => GraphicalTheme {
                characters: ThemeCharacters::ascii(),
                styles: ThemeStyles::none(),
            },
        }
    }
}

/// An [`ErrorCode`] as a `miette` diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("{}", .code.message())]
pub struct ErrorReport {
    code: ErrorCode,
}

impl ErrorReport {
    pub fn new(code: ErrorCode) -> Self {
        ErrorReport { code }
    }

    pub fn error_code(&self) -> &ErrorCode {
        &self.code
    }
}

impl Diagnostic for ErrorReport {
    fn code<'a>(&'a self) -> Option<Box<dyn std::fmt::Display + 'a>> {
        Some(Box::new(format!(
            "ara::{}::{}",
            self.code.domain().name(),
            self.code.value()
        )))
    }

    fn severity(&self) -> Option<Severity> {
        Some(Severity::Error)
    }

    fn help<'a>(&'a self) -> Option<Box<dyn std::fmt::Display + 'a>> {
        match self.code.support_data() {
            0 => None,
            data => Some(Box::new(format!("support data: {data}"))),
        }
    }
}

impl From<ErrorCode> for ErrorReport {
    fn from(code: ErrorCode) -> Self {
        ErrorReport::new(code)
    }
}

impl From<Exception> for ErrorReport {
    fn from(exception: Exception) -> Self {
        ErrorReport::new(*exception.error())
    }
}

/// Render an error code to stderr using default config.
///
/// # Example
/// ```no_run
/// use ara::{CoreErrc, ErrorCode, render_error};
///
/// render_error(&ErrorCode::from(CoreErrc::InvalidArgument));
/// ```
pub fn render_error(error: &ErrorCode) {
    render_error_to(error, &mut std::io::stderr(), &RenderConfig::default()).ok();
}

/// Render an error code to a writer with the given configuration.
///
/// # Example
/// ```
/// use ara::{CoreErrc, ErrorCode, RenderConfig, render_error_to};
///
/// let code = ErrorCode::from_errc(CoreErrc::InvalidMetaModelPath, 3);
/// let mut buf = Vec::new();
/// let config = RenderConfig { color: false, ..Default::default() };
/// render_error_to(&code, &mut buf, &config).unwrap();
///
/// let output = String::from_utf8_lossy(&buf);
/// assert!(output.contains("ara::Core::138"));
/// assert!(output.contains("Invalid meta model path"));
/// ```
pub fn render_error_to(
    error: &ErrorCode,
    writer: &mut dyn Write,
    config: &RenderConfig,
) -> std::io::Result<()> {
    let handler = GraphicalReportHandler::new_themed(config.theme()).with_links(false);
    let mut rendered = String::new();
    handler
        .render_report(&mut rendered, &ErrorReport::new(*error))
        .map_err(std::io::Error::other)?;
    writer.write_all(rendered.as_bytes())
}
