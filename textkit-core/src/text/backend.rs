//! Segmentation and script-conversion collaborators
//!
//! The preprocessing pipeline treats both as opaque services. The default
//! implementations wrap `jieba-rs` and `opencc-jieba-rs`; [`Identity`]
//! stands in when neither is wanted.

use jieba_rs::Jieba;
use opencc_jieba_rs::OpenCC;

/// Splits text into word tokens
pub trait Segmenter: Send + Sync {
    /// Segment `text` into tokens, in order
    fn cut(&self, text: &str) -> Vec<String>;
}

/// Converts traditional script to simplified
pub trait ScriptConverter: Send + Sync {
    /// Convert `text` to simplified script
    fn to_simplified(&self, text: &str) -> String;
}

/// Jieba dictionary segmenter with HMM enabled for unknown words
pub struct JiebaSegmenter {
    jieba: Jieba,
}

impl JiebaSegmenter {
    /// Load the bundled dictionary
    pub fn new() -> Self {
        Self {
            jieba: Jieba::new(),
        }
    }
}

impl Default for JiebaSegmenter {
    fn default() -> Self {
        Self::new()
    }
}

impl Segmenter for JiebaSegmenter {
    fn cut(&self, text: &str) -> Vec<String> {
        self.jieba
            .cut(text, true)
            .into_iter()
            .map(str::to_owned)
            .collect()
    }
}

/// OpenCC traditional-to-simplified conversion
pub struct OpenccConverter {
    opencc: OpenCC,
}

impl OpenccConverter {
    /// Load the bundled conversion tables
    pub fn new() -> Self {
        Self {
            opencc: OpenCC::new(),
        }
    }
}

impl Default for OpenccConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl ScriptConverter for OpenccConverter {
    fn to_simplified(&self, text: &str) -> String {
        self.opencc.t2s(text, false)
    }
}

/// Passes text through unchanged; segments on whitespace
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl Segmenter for Identity {
    fn cut(&self, text: &str) -> Vec<String> {
        text.split_whitespace().map(str::to_owned).collect()
    }
}

impl ScriptConverter for Identity {
    fn to_simplified(&self, text: &str) -> String {
        text.to_owned()
    }
}

/// The collaborators a preprocessing run needs
pub struct Collaborators {
    segmenter: Box<dyn Segmenter>,
    converter: Box<dyn ScriptConverter>,
}

impl Collaborators {
    /// Use the given segmenter and converter
    pub fn new(
        segmenter: impl Segmenter + 'static,
        converter: impl ScriptConverter + 'static,
    ) -> Self {
        Self {
            segmenter: Box::new(segmenter),
            converter: Box::new(converter),
        }
    }

    /// Jieba segmentation and OpenCC conversion
    ///
    /// Loading both dictionaries takes a noticeable moment; build once and
    /// reuse across sentences.
    pub fn chinese() -> Self {
        log::debug!("loading jieba and opencc dictionaries");
        Self::new(JiebaSegmenter::new(), OpenccConverter::new())
    }

    /// No conversion, whitespace segmentation
    pub fn identity() -> Self {
        Self::new(Identity, Identity)
    }

    /// The segmenter
    pub fn segmenter(&self) -> &dyn Segmenter {
        self.segmenter.as_ref()
    }

    /// The script converter
    pub fn converter(&self) -> &dyn ScriptConverter {
        self.converter.as_ref()
    }
}

impl std::fmt::Debug for Collaborators {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Collaborators").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_segments_on_whitespace() {
        assert_eq!(Identity.cut(" a  b\tc "), vec!["a", "b", "c"]);
        assert_eq!(Identity.to_simplified("漢字"), "漢字");
    }

    #[test]
    fn test_collaborators_dispatch() {
        let collaborators = Collaborators::identity();
        assert_eq!(collaborators.segmenter().cut("x y"), vec!["x", "y"]);
        assert_eq!(collaborators.converter().to_simplified("x"), "x");
    }
}
