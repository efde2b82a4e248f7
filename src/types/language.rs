//! Languages accepted by the API for response summaries, sent via `lang=`.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Ar,
    Az,
    Be,
    Bs,
    Cs,
    De,
    El,
    En,
    Es,
    Fr,
    Hr,
    Hu,
    Id,
    It,
    Is,
    Kw,
    Nb,
    Nl,
    Pl,
    Pt,
    Ru,
    Sk,
    Sr,
    Sv,
    Tet,
    Tr,
    Uk,
    XPigLatin,
    Zh,
    ZhTw,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Ar => "ar",
            Language::Az => "az",
            Language::Be => "be",
            Language::Bs => "bs",
            Language::Cs => "cs",
            Language::De => "de",
            Language::El => "el",
            Language::En => "en",
            Language::Es => "es",
            Language::Fr => "fr",
            Language::Hr => "hr",
            Language::Hu => "hu",
            Language::Id => "id",
            Language::It => "it",
            Language::Is => "is",
            Language::Kw => "kw",
            Language::Nb => "nb",
            Language::Nl => "nl",
            Language::Pl => "pl",
            Language::Pt => "pt",
            Language::Ru => "ru",
            Language::Sk => "sk",
            Language::Sr => "sr",
            Language::Sv => "sv",
            Language::Tet => "tet",
            Language::Tr => "tr",
            Language::Uk => "uk",
            Language::XPigLatin => "x-pig-latin",
            Language::Zh => "zh",
            Language::ZhTw => "zh-tw",
        }
    }

    pub const fn all() -> &'static [Language] {
        &[
            Language::Ar,
            Language::Az,
            Language::Be,
            Language::Bs,
            Language::Cs,
            Language::De,
            Language::El,
            Language::En,
            Language::Es,
            Language::Fr,
            Language::Hr,
            Language::Hu,
            Language::Id,
            Language::It,
            Language::Is,
            Language::Kw,
            Language::Nb,
            Language::Nl,
            Language::Pl,
            Language::Pt,
            Language::Ru,
            Language::Sk,
            Language::Sr,
            Language::Sv,
            Language::Tet,
            Language::Tr,
            Language::Uk,
            Language::XPigLatin,
            Language::Zh,
            Language::ZhTw,
        ]
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("'{0}' is not an accepted API language")]
pub struct UnknownLanguage(pub String);

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::all()
            .iter()
            .find(|language| language.as_str() == s)
            .copied()
            .ok_or_else(|| UnknownLanguage(s.to_string()))
    }
}
