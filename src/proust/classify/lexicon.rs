//! Closed word lists consulted by the heuristic classifier

/// Closed word classes and verbal endings for one language.
#[derive(Debug, Clone, Copy)]
pub struct Lexicon {
    pub pronouns: &'static [&'static str],
    pub conjunctions: &'static [&'static str],
    pub determiners: &'static [&'static str],
    pub prepositions: &'static [&'static str],
    pub subordinators: &'static [&'static str],
    pub verbal_suffixes: &'static [&'static str],
}

impl Lexicon {
    pub const FRENCH: Lexicon = Lexicon {
        pronouns: &["je", "tu", "il", "elle", "nous", "vous", "ils", "elles"],
        conjunctions: &["et", "ou", "mais", "donc", "car", "ni"],
        determiners: &["le", "la", "les", "un", "une", "des", "ma", "mon", "mes"],
        prepositions: &[
            "à", "de", "en", "dans", "sur", "sous", "par", "pour", "avec", "sans",
        ],
        subordinators: &[
            "que", "qui", "quand", "lorsque", "puisque", "quoique", "comme", "si",
        ],
        verbal_suffixes: &["ais", "ait", "ions", "iez", "aient", "é", "i", "u"],
    };

    pub fn is_pronoun(&self, lower: &str) -> bool {
        self.pronouns.contains(&lower)
    }

    pub fn is_conjunction(&self, lower: &str) -> bool {
        self.conjunctions.contains(&lower)
    }

    pub fn is_determiner(&self, lower: &str) -> bool {
        self.determiners.contains(&lower)
    }

    pub fn is_preposition(&self, lower: &str) -> bool {
        self.prepositions.contains(&lower)
    }

    pub fn is_subordinator(&self, lower: &str) -> bool {
        self.subordinators.contains(&lower)
    }

    pub fn has_verbal_suffix(&self, lower: &str) -> bool {
        self.verbal_suffixes
            .iter()
            .any(|suffix| lower.ends_with(suffix))
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Lexicon::FRENCH
    }
}
