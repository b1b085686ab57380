//! Validated group presentations.
//!
//! A [`Presentation`] pairs the relators of a group `G` with words
//! generating a subgroup `H`. Construction validates every word and
//! compiles it to alphabet columns, which is the form the coset
//! enumerator consumes.

use crate::alphabet::Alphabet;
use crate::error::MalformedPresentation;
use crate::word::Word;

/// A word compiled to alphabet columns.
pub type ColumnWord = Box<[usize]>;

/// Relators and subgroup generators over a fixed alphabet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Presentation {
    alphabet: Alphabet,
    relators: Vec<Word>,
    subgroup: Vec<Word>,
    relator_columns: Vec<ColumnWord>,
    subgroup_columns: Vec<ColumnWord>,
}

impl Presentation {
    /// Builds a presentation from letter strings, inferring the generators.
    ///
    /// Generators are ordered by letter (`a` before `b`), regardless of the
    /// order they first appear in.
    ///
    /// ```
    /// use coxeter_words::Presentation;
    ///
    /// let s3 = Presentation::parse(&["aa", "bbb", "abab"], &["1"]).unwrap();
    /// assert_eq!(s3.alphabet().rank(), 2);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `MalformedPresentation` for invalid letters, empty words, or a
    /// misplaced identity letter.
    pub fn parse(relators: &[&str], subgroup: &[&str]) -> Result<Self, MalformedPresentation> {
        let relators = parse_words(relators)?;
        let subgroup = parse_words(subgroup)?;
        Self::from_words(relators, subgroup)
    }

    /// Builds a presentation from letter strings over explicit generators.
    ///
    /// # Errors
    ///
    /// As [`Presentation::parse`]; additionally fails on letters outside the
    /// generator list.
    pub fn parse_with_generators(
        generators: &str,
        relators: &[&str],
        subgroup: &[&str],
    ) -> Result<Self, MalformedPresentation> {
        let alphabet = Alphabet::parse(generators)?;
        Self::with_alphabet(alphabet, parse_words(relators)?, parse_words(subgroup)?)
    }

    /// Builds a presentation from words, inferring the generators.
    ///
    /// # Errors
    ///
    /// See [`Presentation::parse`].
    pub fn from_words(relators: Vec<Word>, subgroup: Vec<Word>) -> Result<Self, MalformedPresentation> {
        check_words(&relators)?;
        check_words(&subgroup)?;
        let alphabet = Alphabet::infer(
            relators
                .iter()
                .chain(subgroup.iter())
                .flat_map(|w| w.letters().iter()),
        )?;
        Self::with_alphabet(alphabet, relators, subgroup)
    }

    /// Builds a presentation from words over a given alphabet.
    ///
    /// # Errors
    ///
    /// See [`Presentation::parse_with_generators`].
    pub fn with_alphabet(
        alphabet: Alphabet,
        relators: Vec<Word>,
        subgroup: Vec<Word>,
    ) -> Result<Self, MalformedPresentation> {
        check_words(&relators)?;
        check_words(&subgroup)?;
        let relator_columns = compile_all(&alphabet, &relators)?;
        let subgroup_columns = compile_all(&alphabet, &subgroup)?;
        Ok(Self {
            alphabet,
            relators,
            subgroup,
            relator_columns,
            subgroup_columns,
        })
    }

    /// Returns the generator alphabet.
    #[must_use]
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Returns the relators as given.
    #[must_use]
    pub fn relators(&self) -> &[Word] {
        &self.relators
    }

    /// Returns the subgroup generators as given.
    #[must_use]
    pub fn subgroup(&self) -> &[Word] {
        &self.subgroup
    }

    /// Returns the relators compiled to columns, identity words omitted.
    #[must_use]
    pub fn relator_columns(&self) -> &[ColumnWord] {
        &self.relator_columns
    }

    /// Returns the subgroup generators compiled to columns, identity words omitted.
    #[must_use]
    pub fn subgroup_columns(&self) -> &[ColumnWord] {
        &self.subgroup_columns
    }

    /// Compiles an arbitrary word to columns of this alphabet.
    ///
    /// Identity letters are dropped.
    ///
    /// # Errors
    ///
    /// Fails with `UnknownGenerator` for letters outside the alphabet.
    pub fn compile(&self, word: &Word) -> Result<ColumnWord, MalformedPresentation> {
        compile(&self.alphabet, word)
    }
}

fn parse_words(words: &[&str]) -> Result<Vec<Word>, MalformedPresentation> {
    words.iter().map(|s| Word::from_letters(s)).collect()
}

fn check_words(words: &[Word]) -> Result<(), MalformedPresentation> {
    for word in words {
        if word.is_empty() {
            return Err(MalformedPresentation::EmptyWord);
        }
        if word.len() > 1 && word.contains_identity() {
            return Err(MalformedPresentation::MisplacedIdentity(word.to_string()));
        }
    }
    Ok(())
}

fn compile_all(alphabet: &Alphabet, words: &[Word]) -> Result<Vec<ColumnWord>, MalformedPresentation> {
    words
        .iter()
        .filter(|w| !w.is_identity_word())
        .map(|w| compile(alphabet, w))
        .collect()
}

fn compile(alphabet: &Alphabet, word: &Word) -> Result<ColumnWord, MalformedPresentation> {
    word.letters()
        .iter()
        .filter(|l| !l.is_identity())
        .map(|&l| alphabet.column(l).ok_or(MalformedPresentation::UnknownGenerator(l)))
        .collect()
}
