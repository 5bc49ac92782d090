//! Writing-system classification of characters.

use serde::{Deserialize, Serialize};

/// The writing system a character belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Script {
    Latin,
    Cyrillic,
    Greek,
    Armenian,
    Georgian,
    Arabic,
    Hebrew,
    Devanagari,
    Bengali,
    Gurmukhi,
    Gujarati,
    Tamil,
    Telugu,
    Kannada,
    Malayalam,
    Thai,
    Hangul,
    Kana,
    Han,
    /// Alphabetic characters from any other script
    Other,
}

impl Script {
    /// Classify a character, or `None` if it is not alphabetic.
    pub fn of(c: char) -> Option<Script> {
        if !c.is_alphabetic() {
            return None;
        }

        let script = match c {
            'a'..='z' | 'A'..='Z' => Script::Latin,
            '\u{00C0}'..='\u{024F}' | '\u{1E00}'..='\u{1EFF}' => Script::Latin,
            '\u{0370}'..='\u{03FF}' | '\u{1F00}'..='\u{1FFF}' => Script::Greek,
            '\u{0400}'..='\u{052F}' => Script::Cyrillic,
            '\u{0530}'..='\u{058F}' => Script::Armenian,
            '\u{0590}'..='\u{05FF}' => Script::Hebrew,
            '\u{0600}'..='\u{06FF}' | '\u{0750}'..='\u{077F}' => Script::Arabic,
            '\u{0900}'..='\u{097F}' => Script::Devanagari,
            '\u{0980}'..='\u{09FF}' => Script::Bengali,
            '\u{0A00}'..='\u{0A7F}' => Script::Gurmukhi,
            '\u{0A80}'..='\u{0AFF}' => Script::Gujarati,
            '\u{0B80}'..='\u{0BFF}' => Script::Tamil,
            '\u{0C00}'..='\u{0C7F}' => Script::Telugu,
            '\u{0C80}'..='\u{0CFF}' => Script::Kannada,
            '\u{0D00}'..='\u{0D7F}' => Script::Malayalam,
            '\u{0E00}'..='\u{0E7F}' => Script::Thai,
            '\u{10A0}'..='\u{10FF}' | '\u{1C90}'..='\u{1CBF}' => Script::Georgian,
            '\u{1100}'..='\u{11FF}' | '\u{3130}'..='\u{318F}' | '\u{AC00}'..='\u{D7AF}' => {
                Script::Hangul
            }
            '\u{3040}'..='\u{309F}' | '\u{30A0}'..='\u{30FF}' => Script::Kana,
            '\u{3400}'..='\u{4DBF}' | '\u{4E00}'..='\u{9FFF}' | '\u{20000}'..='\u{2CEAF}' => {
                Script::Han
            }
            _ => Script::Other,
        };

        Some(script)
    }

    /// The language code a non-Latin script implies on its own.
    ///
    /// Latin and unclassified scripts are shared by many languages and map to
    /// `None`.
    pub fn language(self) -> Option<&'static str> {
        match self {
            Script::Cyrillic => Some("ru"),
            Script::Greek => Some("el"),
            Script::Armenian => Some("hy"),
            Script::Georgian => Some("ka"),
            Script::Arabic => Some("ar"),
            Script::Hebrew => Some("he"),
            Script::Devanagari => Some("hi"),
            Script::Bengali => Some("bn"),
            Script::Gurmukhi => Some("pa"),
            Script::Gujarati => Some("gu"),
            Script::Tamil => Some("ta"),
            Script::Telugu => Some("te"),
            Script::Kannada => Some("kn"),
            Script::Malayalam => Some("ml"),
            Script::Thai => Some("th"),
            Script::Hangul => Some("ko"),
            Script::Kana => Some("ja"),
            Script::Han => Some("zh"),
            Script::Latin | Script::Other => None,
        }
    }
}

/// Count alphabetic characters per script and return the dominant one.
///
/// Japanese text mixes kana with Han characters, so any kana makes the
/// result [`Script::Kana`] when Han and kana together dominate.
pub fn dominant_script(text: &str) -> Option<Script> {
    let mut counts: Vec<(Script, usize)> = Vec::new();
    for script in text.chars().filter_map(Script::of) {
        match counts.iter_mut().find(|(s, _)| *s == script) {
            Some((_, count)) => *count += 1,
            None => counts.push((script, 1)),
        }
    }

    let count_of = |wanted: Script| {
        counts
            .iter()
            .find(|(s, _)| *s == wanted)
            .map_or(0, |(_, count)| *count)
    };
    let kana = count_of(Script::Kana);
    let han = count_of(Script::Han);

    let (top, top_count) = counts.iter().copied().max_by_key(|&(_, count)| count)?;
    if kana > 0 && matches!(top, Script::Kana | Script::Han) {
        return Some(Script::Kana);
    }
    if kana + han > top_count {
        return Some(if kana > 0 { Script::Kana } else { Script::Han });
    }

    Some(top)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_of() {
        assert_eq!(Script::of('a'), Some(Script::Latin));
        assert_eq!(Script::of('ñ'), Some(Script::Latin));
        assert_eq!(Script::of('ж'), Some(Script::Cyrillic));
        assert_eq!(Script::of('λ'), Some(Script::Greek));
        assert_eq!(Script::of('ש'), Some(Script::Hebrew));
        assert_eq!(Script::of('ب'), Some(Script::Arabic));
        assert_eq!(Script::of('क'), Some(Script::Devanagari));
        assert_eq!(Script::of('ก'), Some(Script::Thai));
        assert_eq!(Script::of('ব'), Some(Script::Bengali));
        assert_eq!(Script::of('ਪ'), Some(Script::Gurmukhi));
        assert_eq!(Script::of('ગ'), Some(Script::Gujarati));
        assert_eq!(Script::of('த'), Some(Script::Tamil));
        assert_eq!(Script::of('త'), Some(Script::Telugu));
        assert_eq!(Script::of('ಕ'), Some(Script::Kannada));
        assert_eq!(Script::of('മ'), Some(Script::Malayalam));
        assert_eq!(Script::of('Հ'), Some(Script::Armenian));
        assert_eq!(Script::of('ქ'), Some(Script::Georgian));
        assert_eq!(Script::of('한'), Some(Script::Hangul));
        assert_eq!(Script::of('の'), Some(Script::Kana));
        assert_eq!(Script::of('中'), Some(Script::Han));
        assert_eq!(Script::of('1'), None);
        assert_eq!(Script::of(' '), None);
    }

    #[test]
    fn test_dominant_script() {
        assert_eq!(dominant_script("Hello world"), Some(Script::Latin));
        assert_eq!(dominant_script("Привет, как дела?"), Some(Script::Cyrillic));
        assert_eq!(dominant_script("我喜欢这个项目"), Some(Script::Han));
        assert_eq!(dominant_script("私はこのプロジェクトが好きです"), Some(Script::Kana));
        assert_eq!(dominant_script("தமிழ் மொழி மிகவும் அழகானது"), Some(Script::Tamil));
        assert_eq!(dominant_script("ქართული ენა ძალიან ლამაზია"), Some(Script::Georgian));
        assert_eq!(dominant_script("12345 !!!"), None);
    }

    #[test]
    fn test_script_language() {
        assert_eq!(Script::Cyrillic.language(), Some("ru"));
        assert_eq!(Script::Kana.language(), Some("ja"));
        assert_eq!(Script::Bengali.language(), Some("bn"));
        assert_eq!(Script::Tamil.language(), Some("ta"));
        assert_eq!(Script::Georgian.language(), Some("ka"));
        assert_eq!(Script::Armenian.language(), Some("hy"));
        assert_eq!(Script::Latin.language(), None);
    }
}
