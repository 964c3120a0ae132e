//! Best-effort clipboard writes for the code block "Copy" buttons.
//!
//! TRADE-OFFS
//! ==========
//! The async clipboard API can be missing (insecure origin, old browser) or
//! reject the write. Neither case is surfaced to the user; both are only
//! logged to the console. SSR paths no-op.

#[cfg(test)]
#[path = "clipboard_test.rs"]
mod clipboard_test;

/// How long the button shows its "Copied" label.
pub const COPIED_LABEL_MS: u64 = 1500;

/// What the browser exposes for a clipboard write.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClipboardAccess {
    NoWindow,
    /// `navigator.clipboard` is `undefined`, e.g. on a plain-http origin.
    Missing,
    Available,
}

impl ClipboardAccess {
    pub fn detect(has_window: bool, clipboard_defined: bool) -> Self {
        match (has_window, clipboard_defined) {
            (false, _) => Self::NoWindow,
            (true, false) => Self::Missing,
            (true, true) => Self::Available,
        }
    }

    pub fn can_write(self) -> bool {
        self == Self::Available
    }
}

/// Start writing `text` to the system clipboard.
///
/// Returns `true` when the write was handed to the browser, `false` when no
/// clipboard is available.
pub fn copy_text(text: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        let window = web_sys::window();
        let clipboard = window.as_ref().map(|w| w.navigator().clipboard());
        let defined = clipboard.as_ref().is_some_and(|c| !c.is_undefined());
        let access = ClipboardAccess::detect(window.is_some(), defined);
        let Some(clipboard) = clipboard.filter(|_| access.can_write()) else {
            log::warn!("copy failed: clipboard unavailable ({access:?})");
            return false;
        };
        let promise = clipboard.write_text(text);
        leptos::task::spawn_local(async move {
            if let Err(err) = wasm_bindgen_futures::JsFuture::from(promise).await {
                log::warn!("copy failed: clipboard write rejected: {err:?}");
            }
        });
        true
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = text;
        false
    }
}

/// "Copied" label state for one button.
///
/// Each click bumps `generation`; a delayed reset only clears the label when
/// no newer click has happened since it was scheduled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CopyFeedback {
    pub copied: bool,
    generation: u32,
}

impl CopyFeedback {
    /// Show the label and return the generation the reset must match.
    pub fn start(&mut self) -> u32 {
        self.generation = self.generation.wrapping_add(1);
        self.copied = true;
        self.generation
    }

    /// Clear the label if `generation` is still the latest click. Returns
    /// whether anything changed.
    pub fn expire(&mut self, generation: u32) -> bool {
        if !self.copied || self.generation != generation {
            return false;
        }
        self.copied = false;
        true
    }
}

/// Label for the copy button.
pub fn copy_button_label(copied: bool) -> &'static str {
    if copied { "Copied" } else { "Copy" }
}
