//! Closed UPOS and lexical-category vocabularies.
//!
//! Both vocabularies are fixed. Out-of-set strings are rejected at the
//! parsing boundary rather than deep inside table construction.

use std::fmt;
use std::str::FromStr;

use crate::error::{UnknownLexcat, UnknownUpos};

/// Universal part-of-speech tag, supplied per token by an upstream analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Upos {
    Adj,
    Adp,
    Adv,
    Aux,
    Cconj,
    Det,
    Intj,
    Noun,
    Num,
    Part,
    Pron,
    Propn,
    Punct,
    Sconj,
    Sym,
    Verb,
    X,
}

impl Upos {
    pub const COUNT: usize = 17;

    /// The full vocabulary, in declaration order.
    pub const ALL: [Upos; Self::COUNT] = [
        Upos::Adj,
        Upos::Adp,
        Upos::Adv,
        Upos::Aux,
        Upos::Cconj,
        Upos::Det,
        Upos::Intj,
        Upos::Noun,
        Upos::Num,
        Upos::Part,
        Upos::Pron,
        Upos::Propn,
        Upos::Punct,
        Upos::Sconj,
        Upos::Sym,
        Upos::Verb,
        Upos::X,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Upos::Adj => "ADJ",
            Upos::Adp => "ADP",
            Upos::Adv => "ADV",
            Upos::Aux => "AUX",
            Upos::Cconj => "CCONJ",
            Upos::Det => "DET",
            Upos::Intj => "INTJ",
            Upos::Noun => "NOUN",
            Upos::Num => "NUM",
            Upos::Part => "PART",
            Upos::Pron => "PRON",
            Upos::Propn => "PROPN",
            Upos::Punct => "PUNCT",
            Upos::Sconj => "SCONJ",
            Upos::Sym => "SYM",
            Upos::Verb => "VERB",
            Upos::X => "X",
        }
    }

    /// Position in [`Self::ALL`], usable as a dense row index.
    pub fn index(self) -> usize {
        self as usize
    }
}

impl FromStr for Upos {
    type Err = UnknownUpos;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ADJ" => Ok(Upos::Adj),
            "ADP" => Ok(Upos::Adp),
            "ADV" => Ok(Upos::Adv),
            "AUX" => Ok(Upos::Aux),
            "CCONJ" => Ok(Upos::Cconj),
            "DET" => Ok(Upos::Det),
            "INTJ" => Ok(Upos::Intj),
            "NOUN" => Ok(Upos::Noun),
            "NUM" => Ok(Upos::Num),
            "PART" => Ok(Upos::Part),
            "PRON" => Ok(Upos::Pron),
            "PROPN" => Ok(Upos::Propn),
            "PUNCT" => Ok(Upos::Punct),
            "SCONJ" => Ok(Upos::Sconj),
            "SYM" => Ok(Upos::Sym),
            "VERB" => Ok(Upos::Verb),
            "X" => Ok(Upos::X),
            other => Err(UnknownUpos(other.to_string())),
        }
    }
}

impl fmt::Display for Upos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lexical category: the POS-like classification carried by lextags,
/// distinct from UPOS and aware of multiword expressions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lexcat {
    Adj,
    Adv,
    Aux,
    Cconj,
    Det,
    Disc,
    Inf,
    InfP,
    Intj,
    N,
    Num,
    P,
    Poss,
    Pp,
    Pron,
    PronPoss,
    Punct,
    Sconj,
    Sym,
    V,
    X,
}

impl Lexcat {
    pub const COUNT: usize = 21;

    /// The full vocabulary, in declaration order.
    pub const ALL: [Lexcat; Self::COUNT] = [
        Lexcat::Adj,
        Lexcat::Adv,
        Lexcat::Aux,
        Lexcat::Cconj,
        Lexcat::Det,
        Lexcat::Disc,
        Lexcat::Inf,
        Lexcat::InfP,
        Lexcat::Intj,
        Lexcat::N,
        Lexcat::Num,
        Lexcat::P,
        Lexcat::Poss,
        Lexcat::Pp,
        Lexcat::Pron,
        Lexcat::PronPoss,
        Lexcat::Punct,
        Lexcat::Sconj,
        Lexcat::Sym,
        Lexcat::V,
        Lexcat::X,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Lexcat::Adj => "ADJ",
            Lexcat::Adv => "ADV",
            Lexcat::Aux => "AUX",
            Lexcat::Cconj => "CCONJ",
            Lexcat::Det => "DET",
            Lexcat::Disc => "DISC",
            Lexcat::Inf => "INF",
            Lexcat::InfP => "INF.P",
            Lexcat::Intj => "INTJ",
            Lexcat::N => "N",
            Lexcat::Num => "NUM",
            Lexcat::P => "P",
            Lexcat::Poss => "POSS",
            Lexcat::Pp => "PP",
            Lexcat::Pron => "PRON",
            Lexcat::PronPoss => "PRON.POSS",
            Lexcat::Punct => "PUNCT",
            Lexcat::Sconj => "SCONJ",
            Lexcat::Sym => "SYM",
            Lexcat::V => "V",
            Lexcat::X => "X",
        }
    }

    /// Position in [`Self::ALL`], usable as a dense column index.
    pub fn index(self) -> usize {
        self as usize
    }
}

impl FromStr for Lexcat {
    type Err = UnknownLexcat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ADJ" => Ok(Lexcat::Adj),
            "ADV" => Ok(Lexcat::Adv),
            "AUX" => Ok(Lexcat::Aux),
            "CCONJ" => Ok(Lexcat::Cconj),
            "DET" => Ok(Lexcat::Det),
            "DISC" => Ok(Lexcat::Disc),
            "INF" => Ok(Lexcat::Inf),
            "INF.P" => Ok(Lexcat::InfP),
            "INTJ" => Ok(Lexcat::Intj),
            "N" => Ok(Lexcat::N),
            "NUM" => Ok(Lexcat::Num),
            "P" => Ok(Lexcat::P),
            "POSS" => Ok(Lexcat::Poss),
            "PP" => Ok(Lexcat::Pp),
            "PRON" => Ok(Lexcat::Pron),
            "PRON.POSS" => Ok(Lexcat::PronPoss),
            "PUNCT" => Ok(Lexcat::Punct),
            "SCONJ" => Ok(Lexcat::Sconj),
            "SYM" => Ok(Lexcat::Sym),
            "V" => Ok(Lexcat::V),
            "X" => Ok(Lexcat::X),
            other => Err(UnknownLexcat(other.to_string())),
        }
    }
}

impl fmt::Display for Lexcat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upos_round_trip() {
        for upos in Upos::ALL {
            assert_eq!(upos.as_str().parse::<Upos>(), Ok(upos));
        }
    }

    #[test]
    fn test_lexcat_round_trip() {
        for lexcat in Lexcat::ALL {
            assert_eq!(lexcat.as_str().parse::<Lexcat>(), Ok(lexcat));
        }
    }

    #[test]
    fn test_index_matches_declaration_order() {
        for (i, upos) in Upos::ALL.into_iter().enumerate() {
            assert_eq!(upos.index(), i);
        }
        for (i, lexcat) in Lexcat::ALL.into_iter().enumerate() {
            assert_eq!(lexcat.index(), i);
        }
    }

    #[test]
    fn test_out_of_set_rejected() {
        assert!("CONJ".parse::<Upos>().is_err());
        assert!("noun".parse::<Upos>().is_err());
        assert!("PRON.POS".parse::<Lexcat>().is_err());
        assert!("".parse::<Lexcat>().is_err());
    }
}
