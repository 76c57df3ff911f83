//! Word lists for contraction, abbreviation and dyslexia substitutions.

/// Expanded form and its contraction.
pub(crate) const CONTRACTIONS: &[(&str, &str)] = &[
    ("are not", "aren't"),
    ("cannot", "can't"),
    ("can not", "can't"),
    ("could not", "couldn't"),
    ("did not", "didn't"),
    ("does not", "doesn't"),
    ("do not", "don't"),
    ("had not", "hadn't"),
    ("has not", "hasn't"),
    ("have not", "haven't"),
    ("he is", "he's"),
    ("he will", "he'll"),
    ("I am", "I'm"),
    ("I have", "I've"),
    ("I will", "I'll"),
    ("is not", "isn't"),
    ("it is", "it's"),
    ("let us", "let's"),
    ("she is", "she's"),
    ("should not", "shouldn't"),
    ("that is", "that's"),
    ("there is", "there's"),
    ("they are", "they're"),
    ("they have", "they've"),
    ("was not", "wasn't"),
    ("we are", "we're"),
    ("we have", "we've"),
    ("were not", "weren't"),
    ("what is", "what's"),
    ("will not", "won't"),
    ("would not", "wouldn't"),
    ("you are", "you're"),
    ("you have", "you've"),
    ("you will", "you'll"),
];

/// Full word or phrase and its chat-style abbreviation.
pub(crate) const ABBREVIATIONS: &[(&str, &str)] = &[
    ("as soon as possible", "asap"),
    ("are", "r"),
    ("be right back", "brb"),
    ("because", "bc"),
    ("before", "b4"),
    ("by the way", "btw"),
    ("for your information", "fyi"),
    ("great", "gr8"),
    ("in my opinion", "imo"),
    ("laugh out loud", "lol"),
    ("later", "l8r"),
    ("message", "msg"),
    ("people", "ppl"),
    ("please", "pls"),
    ("see you", "cu"),
    ("thanks", "thx"),
    ("to be honest", "tbh"),
    ("today", "2day"),
    ("tomorrow", "tmrw"),
    ("tonight", "2nite"),
    ("what", "wat"),
    ("with", "w/"),
    ("without", "w/o"),
    ("you", "u"),
    ("your", "ur"),
];

/// Word pairs commonly confused by dyslexic writers. Applied in both
/// directions.
pub(crate) const DYSLEXIA_SWAPS: &[(&str, &str)] = &[
    ("accept", "except"),
    ("advice", "advise"),
    ("affect", "effect"),
    ("from", "form"),
    ("hear", "here"),
    ("lose", "loose"),
    ("quiet", "quite"),
    ("saw", "was"),
    ("than", "then"),
    ("their", "there"),
    ("through", "threw"),
    ("to", "too"),
    ("weather", "whether"),
    ("where", "were"),
    ("whose", "who's"),
    ("your", "you're"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::perturbation::{TextTransform, WordSubstitution};
    use rand::rngs::mock::StepRng;

    fn run(sub: &WordSubstitution, text: &str) -> String {
        let mut rng = StepRng::new(0, 1);
        sub.transform(&[text.to_string()], &mut rng).remove(0)
    }

    #[test]
    fn test_contractions_both_ways() {
        let add = WordSubstitution::new("add_contraction", CONTRACTIONS);
        let expand = WordSubstitution::inverse("expand_contraction", CONTRACTIONS);
        assert_eq!(run(&add, "This is not what I am used to"), "This isn't what I'm used to");
        assert_eq!(run(&expand, "They're sure it can't fail"), "They are sure it cannot fail");
    }

    #[test]
    fn test_abbreviations() {
        let sub = WordSubstitution::new("add_abbreviation", ABBREVIATIONS);
        assert_eq!(run(&sub, "Please call me by the way"), "Pls call me btw");
        assert_eq!(run(&sub, "your car"), "ur car");
    }

    #[test]
    fn test_dyslexia_swaps() {
        let sub = WordSubstitution::symmetric("dyslexia_word_swap", DYSLEXIA_SWAPS);
        assert_eq!(run(&sub, "taller than them, from there"), "taller then them, form their");
    }
}
