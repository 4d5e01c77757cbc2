//! `atomic-toolbox sentence` and `atomic-toolbox caption`.

use crate::cli::output;
use anyhow::Result;
use atomic_toolbox::{ListFormatter, ToolboxConfig, WordInput};

/// One argument is a raw string to sniff; several are an already-split list.
pub fn word_input(words: &[String]) -> WordInput {
    match words {
        [single] => WordInput::Text(single.clone()),
        many => WordInput::List(many.to_vec()),
    }
}

/// Formatter from config with optional flag overrides, validated.
pub fn formatter_for(
    mut config: ToolboxConfig,
    conjunction: Option<String>,
    max_words: Option<usize>,
) -> Result<ListFormatter> {
    if let Some(c) = conjunction {
        config.formatter.conjunction = c;
    }
    if let Some(n) = max_words {
        config.formatter.max_words = n;
    }
    config.validate()?;
    Ok(ListFormatter::new(config.formatter))
}

/// Print the sentence for `words`.
pub fn run_sentence(
    config: ToolboxConfig,
    words: &[String],
    conjunction: Option<String>,
    max_words: Option<usize>,
) -> Result<()> {
    let formatter = formatter_for(config, conjunction, max_words)?;
    let input = word_input(words);
    let sentence = formatter.try_sentence(&input)?;

    if output::is_json() {
        output::print_json(&serde_json::json!({
            "words": formatter.words(&input),
            "sentence": sentence,
        }));
    } else {
        println!("{sentence}");
    }
    Ok(())
}

/// Print the caption sentence for `subject` and `words`.
pub fn run_caption(config: ToolboxConfig, subject: &str, words: &[String]) -> Result<()> {
    let formatter = formatter_for(config, None, None)?;
    let caption = formatter.try_caption_sentence(subject, &word_input(words))?;

    if output::is_json() {
        output::print_json(&serde_json::json!({ "caption": caption }));
    } else {
        println!("{caption}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_input() {
        assert_eq!(
            word_input(&["a b".to_string()]),
            WordInput::Text("a b".into())
        );
        assert_eq!(
            word_input(&["a b".to_string(), "c".to_string()]),
            WordInput::List(vec!["a b".into(), "c".into()])
        );
    }

    #[test]
    fn test_formatter_for_overrides() {
        let f = formatter_for(ToolboxConfig::default(), Some("or".into()), Some(2)).unwrap();
        assert_eq!(f.sentence(&WordInput::from("a, b, c")), "a or b");
    }

    #[test]
    fn test_formatter_for_padded_conjunction() {
        let f = formatter_for(ToolboxConfig::default(), Some(" and ".into()), None).unwrap();
        assert_eq!(f.sentence(&WordInput::from("a, b")), "a and b");
    }

    #[test]
    fn test_formatter_for_rejects_bad_flags() {
        assert!(formatter_for(ToolboxConfig::default(), Some("".into()), None).is_err());
        assert!(formatter_for(ToolboxConfig::default(), None, Some(0)).is_err());
    }
}
