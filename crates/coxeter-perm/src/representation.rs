//! Permutation representations of a group on the cosets of a subgroup.

use coxeter_enum::{enumerate, CosetTable, EnumerationConfig};
use coxeter_words::{Alphabet, Letter, Presentation, Word};
use dashu::integer::UBig;

use crate::error::PermError;
use crate::group::PermGroup;
use crate::permutation::Permutation;

/// The action of each generator on the cosets of a closed table.
///
/// Coset id `c` becomes point `c - 1`, so the base coset is point 0.
#[derive(Clone, Debug)]
pub struct PermutationRepresentation {
    alphabet: Alphabet,
    generators: Vec<Permutation>,
}

impl PermutationRepresentation {
    /// Reads the generator permutations off a closed coset table.
    ///
    /// # Errors
    ///
    /// Returns `NotClosed` if the table has undefined edges or unresolved
    /// scan lines.
    pub fn from_table(table: &CosetTable) -> Result<Self, PermError> {
        if !table.is_closed() {
            return Err(PermError::NotClosed);
        }

        let alphabet = table.alphabet().clone();
        let generators = (0..alphabet.len())
            .step_by(2)
            .map(|column| {
                let images = table
                    .rows()
                    .map(|(_, row)| row[column].get() - 1)
                    .collect();
                Permutation::from_images(images)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            alphabet,
            generators,
        })
    }

    /// Returns the number of points (the subgroup index).
    #[must_use]
    pub fn degree(&self) -> usize {
        self.generators.first().map_or(0, Permutation::degree)
    }

    /// Returns the alphabet of the presentation.
    #[must_use]
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Returns one permutation per generator, in alphabet order.
    #[must_use]
    pub fn generators(&self) -> &[Permutation] {
        &self.generators
    }

    /// Returns the permutation of a letter; inverse letters give inverses.
    ///
    /// # Errors
    ///
    /// Returns `UnknownLetter` for letters outside the alphabet.
    pub fn letter(&self, letter: Letter) -> Result<Permutation, PermError> {
        if letter.is_identity() {
            return Ok(Permutation::identity(self.degree()));
        }
        let column = self
            .alphabet
            .column(letter)
            .ok_or(PermError::UnknownLetter(letter))?;
        let gen = &self.generators[column / 2];
        Ok(if letter.is_inverse() { gen.inverse() } else { gen.clone() })
    }

    /// Returns the permutation induced by a word.
    ///
    /// # Errors
    ///
    /// Returns `UnknownLetter` for letters outside the alphabet.
    pub fn image_of_word(&self, word: &Word) -> Result<Permutation, PermError> {
        word.letters()
            .iter()
            .try_fold(Permutation::identity(self.degree()), |acc, &letter| {
                Ok(acc.compose(&self.letter(letter)?))
            })
    }

    /// Returns true if the word acts trivially on every coset.
    ///
    /// # Errors
    ///
    /// Returns `UnknownLetter` for letters outside the alphabet.
    pub fn satisfies(&self, word: &Word) -> Result<bool, PermError> {
        Ok(self.image_of_word(word)?.is_identity())
    }

    /// Returns the permutation group generated by the representation.
    ///
    /// # Errors
    ///
    /// Never fails for a representation built from a table.
    pub fn group(&self) -> Result<PermGroup, PermError> {
        PermGroup::new(self.degree(), self.generators.clone())
    }
}

/// Returns the order of the group acting on the cosets of the presentation's subgroup.
///
/// For the trivial subgroup the action is regular and this is `|G|`.
///
/// # Errors
///
/// Returns an enumeration error if the table does not close within `config`.
pub fn group_order(presentation: &Presentation, config: EnumerationConfig) -> Result<UBig, PermError> {
    let table = enumerate(presentation, config)?;
    let rep = PermutationRepresentation::from_table(&table)?;
    Ok(rep.group()?.order())
}

/// Returns `|G|` for the group with the given relators, written as letters.
///
/// # Errors
///
/// Returns `Presentation` if a relator is malformed, or an enumeration
/// error if the table does not close within `config`.
pub fn order_of_relators(relators: &[&str], config: EnumerationConfig) -> Result<UBig, PermError> {
    let presentation = Presentation::parse(relators, &["1"])?;
    group_order(&presentation, config)
}
