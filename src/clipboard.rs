//! System clipboard access for copying generated CSS.
//!
//! Writes are fire-and-forget from the caller's point of view: the
//! configurator logs a failed write and carries on.

use anyhow::{Context, Result};

/// Something text can be copied into.
pub trait ClipboardWriter {
    /// Replaces the clipboard contents with `text`.
    fn write_text(&mut self, text: &str) -> Result<()>;
}

/// The platform clipboard, via `arboard`.
///
/// The handle is opened on first use so that starting the UI on a machine
/// without a clipboard (e.g. a bare SSH session) does not fail.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    /// Creates a clipboard handle that connects lazily.
    #[must_use]
    pub const fn new() -> Self {
        Self { inner: None }
    }
}

impl std::fmt::Debug for SystemClipboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SystemClipboard")
            .field("connected", &self.inner.is_some())
            .finish()
    }
}

impl ClipboardWriter for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        if self.inner.is_none() {
            self.inner = Some(arboard::Clipboard::new().context("Failed to access clipboard")?);
        }
        if let Some(clipboard) = self.inner.as_mut() {
            clipboard
                .set_text(text.to_string())
                .context("Failed to copy to clipboard")?;
        }
        Ok(())
    }
}

/// In-memory clipboard that records every write.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    writes: Vec<String>,
    fail: bool,
}

impl MemoryClipboard {
    /// Creates an empty recording clipboard.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            writes: Vec::new(),
            fail: false,
        }
    }

    /// Creates a clipboard whose writes always fail.
    #[must_use]
    pub const fn failing() -> Self {
        Self {
            writes: Vec::new(),
            fail: true,
        }
    }

    /// All texts written so far, oldest first.
    #[must_use]
    pub fn writes(&self) -> &[String] {
        &self.writes
    }

    /// The most recent write.
    #[must_use]
    pub fn last(&self) -> Option<&str> {
        self.writes.last().map(String::as_str)
    }
}

impl ClipboardWriter for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        if self.fail {
            anyhow::bail!("Clipboard unavailable");
        }
        self.writes.push(text.to_string());
        Ok(())
    }
}
