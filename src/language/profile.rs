//! Stop-word profiles for Latin-script languages.
//!
//! Function words are the most frequent words of a language and are largely
//! disjoint between languages, so counting them is enough to tell the
//! supported languages apart in a sentence or two.

use std::collections::HashSet;
use std::sync::LazyLock;

/// A language code together with its most frequent function words.
#[derive(Clone, Debug)]
pub struct LanguageProfile {
    code: String,
    stop_words: HashSet<String>,
}

impl LanguageProfile {
    /// Create a profile from a language code and its stop words.
    pub fn new<S, I, W>(code: S, stop_words: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = W>,
        W: Into<String>,
    {
        LanguageProfile {
            code: code.into(),
            stop_words: stop_words.into_iter().map(Into::into).collect(),
        }
    }

    /// ISO 639-1 code of this profile.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Whether a lowercased word is one of this language's stop words.
    pub fn contains(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.stop_words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stop_words.is_empty()
    }
}

const ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "about", "after", "all", "also", "am", "an", "and", "are", "as", "at", "be", "because",
    "been", "but", "by", "can", "could", "did", "do", "does", "don't", "for", "from", "had",
    "has", "have", "he", "her", "his", "how", "i", "i'm", "if", "in", "into", "is", "it", "it's",
    "its", "just", "me", "my", "not", "of", "on", "or", "our", "she", "so", "than", "that", "the",
    "their", "them", "then", "there", "these", "they", "this", "those", "to", "too", "very", "was",
    "we", "were", "what", "when", "which", "who", "will", "with", "would", "you", "your",
];

const SPANISH_STOP_WORDS: &[&str] = &[
    "al", "algo", "como", "con", "cuando", "de", "del", "donde", "el", "ella", "ellos", "en",
    "era", "es", "esta", "está", "este", "esto", "fue", "hay", "la", "las", "le", "lo", "los",
    "mi", "muy", "más", "no", "nos", "para", "pero", "por", "porque", "que", "se", "sin", "sobre",
    "son", "su", "sus", "también", "tiene", "todo", "un", "una", "y", "ya", "yo",
];

const FRENCH_STOP_WORDS: &[&str] = &[
    "au", "aux", "avec", "ce", "cette", "ces", "dans", "de", "des", "du", "elle", "en", "est",
    "et", "il", "ils", "je", "la", "le", "les", "leur", "lui", "mais", "me", "mes", "moi", "mon",
    "ne", "nous", "on", "ou", "où", "par", "pas", "plus", "pour", "qu", "que", "qui", "sa", "se",
    "ses", "son", "sont", "sur", "ta", "te", "tu", "un", "une", "vous", "à", "était", "été",
];

const GERMAN_STOP_WORDS: &[&str] = &[
    "auch", "auf", "aus", "bei", "bin", "bist", "das", "dass", "dem", "den", "der", "des", "die",
    "du", "ein", "eine", "einen", "einer", "er", "es", "für", "hat", "ich", "ihr", "im", "in",
    "ist", "mit", "nach", "nicht", "noch", "nur", "oder", "sehr", "sich", "sie", "sind", "und",
    "von", "war", "was", "wie", "wir", "zu", "zum", "zur", "über",
];

const ITALIAN_STOP_WORDS: &[&str] = &[
    "al", "alla", "anche", "che", "ci", "come", "con", "da", "del", "della", "di", "e", "gli",
    "ha", "ho", "il", "in", "io", "la", "le", "lo", "ma", "mi", "molto", "nel", "nella", "non",
    "per", "perché", "più", "questo", "questa", "se", "sono", "su", "suo", "tu", "un", "una",
    "uno", "è",
];

const PORTUGUESE_STOP_WORDS: &[&str] = &[
    "ao", "aos", "as", "com", "como", "da", "das", "de", "do", "dos", "ela", "ele", "eles", "em",
    "essa", "esse", "esta", "está", "este", "eu", "foi", "isso", "mais", "mas", "muito", "na",
    "não", "nas", "no", "nos", "o", "os", "ou", "para", "pela", "pelo", "por", "que", "se", "sem",
    "seu", "sua", "são", "também", "um", "uma", "você", "à", "é",
];

const DUTCH_STOP_WORDS: &[&str] = &[
    "aan", "als", "bij", "dat", "de", "die", "dit", "een", "en", "er", "het", "hij", "ik", "in",
    "is", "je", "maar", "met", "mij", "niet", "nog", "of", "om", "ook", "op", "over", "te", "tot",
    "uit", "van", "veel", "voor", "was", "wat", "we", "wij", "zijn", "ze", "zij", "zo",
];

const SWEDISH_STOP_WORDS: &[&str] = &[
    "alla", "att", "av", "bara", "den", "det", "detta", "där", "efter", "eller", "ett", "för",
    "från", "han", "har", "hon", "här", "inte", "jag", "kan", "med", "men", "mig", "min", "mitt",
    "mycket", "nu", "när", "och", "också", "om", "på", "sig", "sin", "skulle", "som", "så", "till",
    "vad", "var", "vara", "vi", "vill", "är", "än",
];

const POLISH_STOP_WORDS: &[&str] = &[
    "ale", "bardzo", "być", "był", "była", "było", "co", "czy", "dla", "do", "gdy", "go", "i",
    "jak", "jednak", "jego", "jej", "jest", "jestem", "już", "która", "które", "który", "mi",
    "mnie", "może", "na", "nie", "od", "oraz", "po", "przez", "się", "są", "tak", "także", "tam",
    "ten", "tego", "też", "to", "tylko", "w", "z", "za", "ze", "że",
];

const TURKISH_STOP_WORDS: &[&str] = &[
    "ama", "bana", "ben", "beni", "bir", "biz", "bu", "bunu", "çok", "çünkü", "daha", "değil",
    "gibi", "her", "hiç", "için", "ile", "kadar", "ki", "mı", "ne", "neden", "olarak", "onu",
    "sen", "siz", "sonra", "şey", "şu", "var", "ve", "ya", "yok",
];

const INDONESIAN_STOP_WORDS: &[&str] = &[
    "ada", "adalah", "akan", "aku", "anda", "atau", "bahwa", "belum", "bisa", "dalam", "dan",
    "dari", "dengan", "di", "ini", "itu", "juga", "kami", "karena", "ke", "kita", "mereka",
    "oleh", "pada", "saya", "sangat", "sudah", "tidak", "untuk", "yang",
];

static BUILTIN_PROFILES: LazyLock<Vec<LanguageProfile>> = LazyLock::new(|| {
    vec![
        LanguageProfile::new("en", ENGLISH_STOP_WORDS.iter().copied()),
        LanguageProfile::new("es", SPANISH_STOP_WORDS.iter().copied()),
        LanguageProfile::new("fr", FRENCH_STOP_WORDS.iter().copied()),
        LanguageProfile::new("de", GERMAN_STOP_WORDS.iter().copied()),
        LanguageProfile::new("it", ITALIAN_STOP_WORDS.iter().copied()),
        LanguageProfile::new("pt", PORTUGUESE_STOP_WORDS.iter().copied()),
        LanguageProfile::new("nl", DUTCH_STOP_WORDS.iter().copied()),
        LanguageProfile::new("sv", SWEDISH_STOP_WORDS.iter().copied()),
        LanguageProfile::new("pl", POLISH_STOP_WORDS.iter().copied()),
        LanguageProfile::new("tr", TURKISH_STOP_WORDS.iter().copied()),
        LanguageProfile::new("id", INDONESIAN_STOP_WORDS.iter().copied()),
    ]
});

/// The built-in profiles, created once per process.
pub fn builtin_profiles() -> &'static [LanguageProfile] {
    &BUILTIN_PROFILES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_profiles() {
        let profiles = builtin_profiles();
        let codes: Vec<&str> = profiles.iter().map(|p| p.code()).collect();

        assert_eq!(
            codes,
            vec!["en", "es", "fr", "de", "it", "pt", "nl", "sv", "pl", "tr", "id"]
        );
        assert!(profiles.iter().all(|p| !p.is_empty()));
    }

    #[test]
    fn test_profile_lookup() {
        let profile = LanguageProfile::new("xx", ["foo", "bar"]);

        assert_eq!(profile.code(), "xx");
        assert_eq!(profile.len(), 2);
        assert!(profile.contains("foo"));
        assert!(!profile.contains("baz"));
    }
}
