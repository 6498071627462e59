//! Lorem-ipsum placeholder text.

use rand::Rng;

/// The fixed corpus; words, sentences, and paragraphs are all drawn from
/// it.
const CORPUS: [&str; 19] = [
    "lorem",
    "ipsum",
    "dolor",
    "sit",
    "amet",
    "consectetur",
    "adipiscing",
    "elit",
    "sed",
    "do",
    "eiusmod",
    "tempor",
    "incididunt",
    "ut",
    "labore",
    "et",
    "dolore",
    "magna",
    "aliqua",
];

/// Output shape for [`generate_lorem_ipsum`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoremFormat {
    /// The first `count` corpus words, space separated.
    #[default]
    Words,
    /// `count` sentences of 5-14 random words each.
    Sentences,
    /// `count` paragraphs of 2-4 sentences, separated by blank lines.
    Paragraphs,
}

/// Generates placeholder text from the fixed corpus.
pub fn generate_lorem_ipsum(count: usize, format: LoremFormat) -> String {
    let mut rng = rand::thread_rng();
    match format {
        LoremFormat::Words => CORPUS[..count.min(CORPUS.len())].join(" "),
        LoremFormat::Sentences => (0..count)
            .map(|_| sentence(&mut rng))
            .collect::<Vec<_>>()
            .join(" "),
        LoremFormat::Paragraphs => (0..count)
            .map(|_| {
                let sentences = rng.gen_range(2..5);
                (0..sentences)
                    .map(|_| sentence(&mut rng))
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join("\n\n"),
    }
}

/// Builds one sentence of 5-14 random corpus words, capitalized and
/// period-terminated.
fn sentence(rng: &mut impl Rng) -> String {
    let word_count = rng.gen_range(5..15);
    let words: Vec<&str> = (0..word_count)
        .map(|_| CORPUS[rng.gen_range(0..CORPUS.len())])
        .collect();
    let mut sentence = words.join(" ");
    if let Some(first) = sentence.get_mut(..1) {
        first.make_ascii_uppercase();
    }
    sentence.push('.');
    sentence
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_are_a_corpus_prefix() {
        assert_eq!(generate_lorem_ipsum(3, LoremFormat::Words), "lorem ipsum dolor");
        assert_eq!(generate_lorem_ipsum(1, LoremFormat::Words), "lorem");
        // counts beyond the corpus return the whole corpus
        let all = generate_lorem_ipsum(100, LoremFormat::Words);
        assert_eq!(all.split(' ').count(), 19);
    }

    #[test]
    fn sentences_are_capitalized_and_terminated() {
        let text = generate_lorem_ipsum(3, LoremFormat::Sentences);
        for sentence in text.split_inclusive(". ") {
            let first = sentence.chars().next().unwrap();
            assert!(first.is_ascii_uppercase());
        }
        assert!(text.ends_with('.'));
    }

    #[test]
    fn paragraphs_are_blank_line_separated() {
        let text = generate_lorem_ipsum(3, LoremFormat::Paragraphs);
        assert_eq!(text.split("\n\n").count(), 3);
    }
}
