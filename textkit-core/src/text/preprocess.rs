//! Sentence normalization pipeline

use crate::config::PreprocessConfig;
use crate::text::backend::Collaborators;
use crate::text::chars;

/// Normalize one sentence
///
/// Enabled steps run in this order: digit masking, full-width to half-width,
/// punctuation stripping, traditional to simplified, lowercasing, whitespace
/// stripping, stopword removal. Stopword removal only runs when a non-empty
/// stopword set is configured; it segments the text and joins the kept
/// tokens with single spaces.
pub fn preprocess(
    sentence: &str,
    config: &PreprocessConfig,
    collaborators: &Collaborators,
) -> String {
    let steps = config.steps();
    let mut text = sentence.to_owned();

    if steps.mask_digits {
        text = chars::mask_digits(&text);
    }
    if steps.to_halfwidth {
        text = chars::to_halfwidth(&text);
    }
    if steps.strip_punctuation {
        text = chars::strip_punctuation(&text);
    }
    if steps.to_simplified {
        text = collaborators.converter().to_simplified(&text);
    }
    if steps.lowercase {
        text = text.to_lowercase();
    }
    if steps.strip_whitespace {
        text = chars::strip_whitespace(&text);
    }
    if config.filters_stopwords() {
        text = remove_stopwords(&text, config, collaborators);
    }
    text
}

fn remove_stopwords(
    text: &str,
    config: &PreprocessConfig,
    collaborators: &Collaborators,
) -> String {
    collaborators
        .segmenter()
        .cut(text)
        .into_iter()
        .filter(|token| !config.stopwords().contains(token))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Normalize a batch of sentences with the same configuration
pub fn preprocess_all<'a, I>(
    sentences: I,
    config: &PreprocessConfig,
    collaborators: &Collaborators,
) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    sentences
        .into_iter()
        .map(|s| preprocess(s, config, collaborators))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PreprocessSteps;
    use crate::text::backend::{Identity, ScriptConverter, Segmenter};

    /// Converts a fixed set of traditional characters
    struct TinyConverter;

    impl ScriptConverter for TinyConverter {
        fn to_simplified(&self, text: &str) -> String {
            text.chars()
                .map(|c| match c {
                    '漢' => '汉',
                    '語' => '语',
                    '們' => '们',
                    '說' => '说',
                    other => other,
                })
                .collect()
        }
    }

    /// Splits into single characters, keeping ASCII runs together
    struct CharSegmenter;

    impl Segmenter for CharSegmenter {
        fn cut(&self, text: &str) -> Vec<String> {
            let mut tokens: Vec<String> = Vec::new();
            for c in text.chars() {
                match tokens.last_mut() {
                    Some(last)
                        if c.is_ascii_alphanumeric()
                            && last.chars().all(|l| l.is_ascii_alphanumeric()) =>
                    {
                        last.push(c)
                    }
                    _ => tokens.push(c.to_string()),
                }
            }
            tokens
        }
    }

    fn collaborators() -> Collaborators {
        Collaborators::new(CharSegmenter, TinyConverter)
    }

    #[test]
    fn test_default_pipeline() {
        let config = PreprocessConfig::default();
        let out = preprocess("我們說漢語，ＡＢＣ　123！", &config, &collaborators());
        assert_eq!(out, "我们说汉语abcnum");
    }

    #[test]
    fn test_digit_token_survives_without_punctuation_stripping() {
        let steps = PreprocessSteps {
            strip_punctuation: false,
            ..PreprocessSteps::default()
        };
        let config = PreprocessConfig::builder().steps(steps).build();
        assert_eq!(
            preprocess("第12章 ", &config, &collaborators()),
            "第<num>章"
        );
    }

    #[test]
    fn test_disabled_steps_are_skipped() {
        let config = PreprocessConfig::builder()
            .steps(PreprocessSteps::none())
            .build();
        let input = "漢語 ＡＢＣ, 42!";
        assert_eq!(preprocess(input, &config, &collaborators()), input);
    }

    #[test]
    fn test_lowercase_only() {
        let steps = PreprocessSteps {
            lowercase: true,
            ..PreprocessSteps::none()
        };
        let config = PreprocessConfig::builder().steps(steps).build();
        assert_eq!(
            preprocess("Hello 世界 ÀB", &config, &collaborators()),
            "hello 世界 àb"
        );
    }

    #[test]
    fn test_stopwords_removed_and_joined() {
        let steps = PreprocessSteps {
            remove_stopwords: true,
            ..PreprocessSteps::default()
        };
        let config = PreprocessConfig::builder()
            .steps(steps)
            .stopwords(["的", "了"])
            .build();
        assert_eq!(
            preprocess("我的书丢了", &config, &collaborators()),
            "我 书 丢"
        );
    }

    #[test]
    fn test_stopwords_requested_without_set_is_noop() {
        let steps = PreprocessSteps {
            remove_stopwords: true,
            ..PreprocessSteps::default()
        };
        let config = PreprocessConfig::builder().steps(steps).build();
        assert_eq!(preprocess("我的书", &config, &collaborators()), "我的书");
    }

    #[test]
    fn test_stopwords_not_requested() {
        let config = PreprocessConfig::builder().stopwords(["的"]).build();
        assert_eq!(preprocess("我的书", &config, &collaborators()), "我的书");
    }

    #[test]
    fn test_preprocess_all_identity() {
        let config = PreprocessConfig::default();
        let out = preprocess_all(["A b", "C,d"], &config, &Collaborators::new(Identity, Identity));
        assert_eq!(out, vec!["ab", "cd"]);
    }
}
