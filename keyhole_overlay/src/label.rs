// Copyright 2026 the Keyhole Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Label text and the text measurement/rendering collaborator.

use alloc::string::String;
use kurbo::Size;

/// Text for a generated label.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum LabelText {
    /// Unstyled text, rendered with the renderer's default font.
    Plain(String),
    /// Pre-formatted text. The payload is renderer-defined markup; the
    /// overlay passes it through untouched.
    Rich(String),
}

impl LabelText {
    /// The raw text payload, whichever variant.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Plain(s) | Self::Rich(s) => s,
        }
    }
}

/// Measures and renders label text into content handles.
///
/// The overlay uses this in two steps when adding an annotated hole: first
/// [`measure`](Self::measure) to obtain the extent fed into label placement,
/// then [`render`](Self::render) to produce the content handle attached at
/// the resolved rect. Rendering must honor the measured extent; the overlay
/// sizes the label frame to exactly what `measure` returned.
pub trait LabelRenderer {
    /// Content handle type produced for rendered labels.
    type Content;

    /// The rendered extent of `text`.
    fn measure(&mut self, text: &LabelText) -> Size;

    /// Render `text` into a content handle.
    fn render(&mut self, text: LabelText) -> Self::Content;
}
