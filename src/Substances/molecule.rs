//! Molecule composition model: an immutable element -> count mapping with
//! derived molar mass and particle counts.
//!
//! A `Molecule` is a value object. It carries no identity beyond its
//! composition, equality is composition equality, and there are no mutation
//! methods after construction. Queries that need atomic data (element set,
//! molar mass, particles) resolve symbols against an [`ElementRegistry`]
//! passed in by the caller and fail with `UnknownElement` when a symbol has
//! no catalog entry.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::Substances::elements::{ElementData, ElementError, ElementRegistry};
use crate::Substances::formula::{FormulaError, Groups, parse_formula, parse_formula_with_groups};

/// Particle totals of a molecule. Neutron counts use the isotope-averaged
/// atomic mass rounded to the nearest integer as the mass number, a
/// whole-number approximation rather than exact isotopic accounting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Particles {
    pub electrons: usize,
    pub protons: usize,
    pub neutrons: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Molecule {
    composition: HashMap<String, usize>,
}

impl Molecule {
    /// Molecule from a formula string, e.g. "Ca(NO3)2".
    pub fn parse(formula: &str) -> Result<Self, FormulaError> {
        Ok(Self {
            composition: parse_formula(formula)?,
        })
    }

    /// Molecule from a formula string with named chemical groups, e.g.
    /// "C6H5Me" with { "Me": {"C": 1, "H": 3} }.
    pub fn parse_with_groups(formula: &str, groups: Option<&Groups>) -> Result<Self, FormulaError> {
        Ok(Self {
            composition: parse_formula_with_groups(formula, groups)?,
        })
    }

    /// Molecule directly from an element -> count mapping.
    pub fn from_composition(composition: HashMap<String, usize>) -> Self {
        Self { composition }
    }

    pub fn composition(&self) -> &HashMap<String, usize> {
        &self.composition
    }

    pub fn has_element(&self, symbol: &str) -> bool {
        self.composition.contains_key(symbol)
    }

    /// Count of the given element; 0 when the element is absent.
    pub fn element_count(&self, symbol: &str) -> usize {
        self.composition.get(symbol).copied().unwrap_or(0)
    }

    /// Atomic data of every element present, resolved against the catalog.
    pub fn elements<'a>(
        &self,
        registry: &'a ElementRegistry,
    ) -> Result<Vec<&'a ElementData>, ElementError> {
        self.composition
            .keys()
            .map(|symbol| registry.get(symbol))
            .collect()
    }

    /// Molar mass in g/mol.
    pub fn molar_mass(&self, registry: &ElementRegistry) -> Result<f64, ElementError> {
        let mut total = 0.0;
        for (symbol, &count) in &self.composition {
            total += registry.atomic_mass(symbol)? * count as f64;
        }
        Ok(total)
    }

    /// Electron, proton and neutron totals. Electrons equal protons, the
    /// molecule is treated as neutral.
    pub fn particles(&self, registry: &ElementRegistry) -> Result<Particles, ElementError> {
        let mut protons = 0;
        let mut neutrons = 0;
        for (symbol, &count) in &self.composition {
            let data = registry.get(symbol)?;
            let mass_number = data.atomic_mass.round() as usize;
            protons += data.number * count;
            neutrons += mass_number.saturating_sub(data.number) * count;
        }
        Ok(Particles {
            electrons: protons,
            protons,
            neutrons,
        })
    }
}
