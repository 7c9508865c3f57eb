//! Lexicon-based sentiment polarity used when no model is available.
//!
//! Score = (positive hits - negative hits) / total hits, in [-1.0, 1.0].
//! A negator within the two preceding words flips a hit.

// Words that read as sentiment in most contexts. Function-like words with a
// common neutral sense ("like", "kind", "problem", "sorry") are left out.
const POSITIVE_WORDS: &[&str] = &[
    "good", "great", "excellent", "amazing", "awesome", "wonderful", "fantastic", "love",
    "loved", "loves", "lovely", "adore", "adored", "happy", "happiness", "glad", "joy",
    "joyful", "beautiful", "nice", "best", "brilliant", "delightful", "delighted", "enjoy",
    "enjoyed", "enjoyable", "perfect", "pleasant", "pleased", "positive", "superb",
    "outstanding", "marvelous", "terrific", "splendid", "magnificent", "thanks", "grateful",
    "thankful", "fun", "exciting", "excited", "thrilled", "successful", "hopeful", "proud",
    "peaceful", "cheerful", "charming", "impressive", "impressed", "incredible", "fabulous",
    "gorgeous", "satisfied", "satisfying", "recommend", "recommended", "favorite",
    "favourite", "admire", "elegant", "graceful", "generous", "friendly", "helpful",
    "comfortable", "inspiring", "inspired", "remarkable", "stunning", "sweet", "triumph",
];

const NEGATIVE_WORDS: &[&str] = &[
    "bad", "terrible", "awful", "horrible", "horrendous", "hate", "hated", "hates", "sad",
    "sadness", "angry", "anger", "furious", "poor", "worst", "worse", "ugly", "boring",
    "bored", "disappointing", "disappointed", "disappointment", "failed", "failure",
    "annoying", "annoyed", "painful", "afraid", "scared", "upset", "negative", "broken",
    "lonely", "miserable", "nasty", "stupid", "dreadful", "hurt", "hurtful", "cried",
    "crying", "useless", "worthless", "pathetic", "disgusting", "disgusted", "hostile",
    "frustrating", "frustrated", "depressing", "depressed", "unhappy", "regret", "regrettable",
    "mediocre", "inferior", "rude", "cruel", "tragic", "disaster", "disastrous", "horrified",
    "unpleasant", "unfortunate", "unacceptable", "inadequate", "lousy", "gross", "awkward",
];

const NEGATORS: &[&str] = &["not", "no", "never", "nor", "without", "cannot"];

/// How many preceding words a negator reaches.
const NEGATION_WINDOW: usize = 2;

fn is_negator(word: &str) -> bool {
    NEGATORS.contains(&word) || word.ends_with("n't")
}

/// Returns the polarity of `text`; 0.0 when no lexicon word occurs.
pub fn polarity(text: &str) -> f32 {
    let words: Vec<String> = text
        .split(|c: char| !(c.is_alphanumeric() || c == '\'' || c == '\u{2019}'))
        .filter(|w| !w.is_empty())
        .map(|w| w.to_lowercase().replace('\u{2019}', "'"))
        .collect();

    let mut score = 0i32;
    let mut hits = 0i32;

    for (i, word) in words.iter().enumerate() {
        let value = if POSITIVE_WORDS.contains(&word.as_str()) {
            1
        } else if NEGATIVE_WORDS.contains(&word.as_str()) {
            -1
        } else {
            continue;
        };

        let negated = words[i.saturating_sub(NEGATION_WINDOW)..i]
            .iter()
            .any(|w| is_negator(w));

        score += if negated { -value } else { value };
        hits += 1;
    }

    if hits == 0 {
        0.0
    } else {
        score as f32 / hits as f32
    }
}
