//! Stoichiometry helpers: moles/grams conversion and limiting reactant
//! selection.
//!
//! The limiting reactant of a reaction is the reactant whose available
//! moles, divided by its balanced coefficient, is smallest. The
//! `*_without_coefficients` variants balance the reaction first and use the
//! reactant prefix of the resulting coefficient vector.

use log::debug;
use thiserror::Error;

use crate::Balance::balancer::{BalanceError, balance_molecules};
use crate::Substances::elements::{ElementError, ElementRegistry};
use crate::Substances::formula::FormulaError;
use crate::Substances::molecule::Molecule;

#[derive(Debug, Error)]
pub enum StoichError {
    #[error("Size of reactants array ({reactants}) does not match that of the {what} array ({got})")]
    SizeMismatch {
        reactants: usize,
        what: &'static str,
        got: usize,
    },
    #[error("No reactants given")]
    NoReactants,
    #[error("Formula error: {0}")]
    Formula(#[from] FormulaError),
    #[error("Element error: {0}")]
    Element(#[from] ElementError),
    #[error("Balance error: {0}")]
    Balance(#[from] BalanceError),
}

/// Grams of `moles` of the given formula.
pub fn moles_to_grams(
    moles: f64,
    formula: &str,
    registry: &ElementRegistry,
) -> Result<f64, StoichError> {
    let molecule = Molecule::parse(formula)?;
    Ok(moles * molecule.molar_mass(registry)?)
}

/// Moles of `grams` of the given formula.
pub fn grams_to_moles(
    grams: f64,
    formula: &str,
    registry: &ElementRegistry,
) -> Result<f64, StoichError> {
    let molecule = Molecule::parse(formula)?;
    Ok(grams / molecule.molar_mass(registry)?)
}

/// Per-molecule grams -> moles conversion.
pub fn grams_to_moles_vec(
    molecules: &[Molecule],
    grams: &[f64],
    registry: &ElementRegistry,
) -> Result<Vec<f64>, StoichError> {
    if molecules.len() != grams.len() {
        return Err(StoichError::SizeMismatch {
            reactants: molecules.len(),
            what: "grams",
            got: grams.len(),
        });
    }
    molecules
        .iter()
        .zip(grams)
        .map(|(molecule, &g)| Ok(g / molecule.molar_mass(registry)?))
        .collect()
}

/// Limiting reactant given balanced coefficients and available moles.
pub fn limiting_reactant_moles(
    reactants: &[Molecule],
    coefficients: &[f64],
    moles: &[f64],
) -> Result<Molecule, StoichError> {
    if reactants.len() != moles.len() {
        return Err(StoichError::SizeMismatch {
            reactants: reactants.len(),
            what: "moles",
            got: moles.len(),
        });
    }
    if reactants.len() != coefficients.len() {
        return Err(StoichError::SizeMismatch {
            reactants: reactants.len(),
            what: "coefficients",
            got: coefficients.len(),
        });
    }
    if reactants.is_empty() {
        return Err(StoichError::NoReactants);
    }
    let mut limiting = 0;
    for i in 1..reactants.len() {
        if moles[i] / coefficients[i] < moles[limiting] / coefficients[limiting] {
            limiting = i;
        }
    }
    debug!(
        "limiting reactant index {} of {} reactants",
        limiting,
        reactants.len()
    );
    Ok(reactants[limiting].clone())
}

/// Limiting reactant from moles when the balanced coefficients are not
/// known: balances the reaction first.
pub fn limiting_reactant_moles_without_coefficients(
    reactants: &[Molecule],
    products: &[Molecule],
    moles: &[f64],
    registry: &ElementRegistry,
) -> Result<Molecule, StoichError> {
    let coefficients = balance_molecules(reactants, products, registry)?;
    let reactant_coefficients: Vec<f64> = coefficients[..reactants.len()]
        .iter()
        .map(|&c| c as f64)
        .collect();
    limiting_reactant_moles(reactants, &reactant_coefficients, moles)
}

/// Limiting reactant given balanced coefficients and available grams.
pub fn limiting_reactant_grams(
    reactants: &[Molecule],
    coefficients: &[f64],
    grams: &[f64],
    registry: &ElementRegistry,
) -> Result<Molecule, StoichError> {
    let moles = grams_to_moles_vec(reactants, grams, registry)?;
    limiting_reactant_moles(reactants, coefficients, &moles)
}

/// Limiting reactant from grams when the balanced coefficients are not
/// known: converts to moles and balances the reaction first.
pub fn limiting_reactant_grams_without_coefficients(
    reactants: &[Molecule],
    products: &[Molecule],
    grams: &[f64],
    registry: &ElementRegistry,
) -> Result<Molecule, StoichError> {
    let moles = grams_to_moles_vec(reactants, grams, registry)?;
    limiting_reactant_moles_without_coefficients(reactants, products, &moles, registry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn molecules(formulas: &[&str]) -> Vec<Molecule> {
        formulas
            .iter()
            .map(|formula| Molecule::parse(formula).unwrap())
            .collect()
    }

    #[test]
    fn test_moles_to_grams_and_back() {
        let registry = ElementRegistry::new();
        let grams = moles_to_grams(2.0, "H2O", &registry).unwrap();
        assert_relative_eq!(grams, 36.03, epsilon = 1e-2);
        let moles = grams_to_moles(grams, "H2O", &registry).unwrap();
        assert_relative_eq!(moles, 2.0, epsilon = 1e-9);
    }

    #[test]
    fn test_grams_to_moles_vec() {
        let registry = ElementRegistry::new();
        let reactants = molecules(&["H2O", "NaCl"]);
        let moles = grams_to_moles_vec(&reactants, &[18.015, 116.89], &registry).unwrap();
        assert_relative_eq!(moles[0], 1.0, epsilon = 1e-3);
        assert_relative_eq!(moles[1], 2.0, epsilon = 1e-3);
    }

    #[test]
    fn test_limiting_reactant_moles() {
        // C2H6 + O2 with coefficients [2, 7]: 2 mol / 2 vs 3.5 mol / 7
        let reactants = molecules(&["C2H6", "O2"]);
        let limiting =
            limiting_reactant_moles(&reactants, &[2.0, 7.0], &[2.0, 3.5]).unwrap();
        assert_eq!(limiting, reactants[1]);
    }

    #[test]
    fn test_limiting_reactant_moles_without_coefficients() {
        let registry = ElementRegistry::new();
        let reactants = molecules(&["C2H6", "O2"]);
        let products = molecules(&["CO2", "H2O"]);
        // equal moles: 1/2 > 1/7, oxygen runs out first
        let limiting = limiting_reactant_moles_without_coefficients(
            &reactants,
            &products,
            &[1.0, 1.0],
            &registry,
        )
        .unwrap();
        assert_eq!(limiting, reactants[1]);
    }

    #[test]
    fn test_limiting_reactant_grams() {
        let registry = ElementRegistry::new();
        let reactants = molecules(&["H2", "O2"]);
        // 4 g H2 ~ 1.98 mol over coefficient 2, 32 g O2 ~ 1.0 mol over 1
        let limiting =
            limiting_reactant_grams(&reactants, &[2.0, 1.0], &[4.0, 32.0], &registry).unwrap();
        assert_eq!(limiting, reactants[0]);
    }

    #[test]
    fn test_limiting_reactant_grams_without_coefficients() {
        let registry = ElementRegistry::new();
        let reactants = molecules(&["H2", "O2"]);
        let products = molecules(&["H2O"]);
        let limiting = limiting_reactant_grams_without_coefficients(
            &reactants,
            &products,
            &[1.0, 64.0],
            &registry,
        )
        .unwrap();
        // ~0.5 mol H2 / 2 is far smaller than 2 mol O2 / 1
        assert_eq!(limiting, reactants[0]);
    }

    #[test]
    fn test_size_mismatch() {
        let reactants = molecules(&["H2", "O2"]);
        let err = limiting_reactant_moles(&reactants, &[2.0, 1.0], &[1.0]).unwrap_err();
        assert!(matches!(
            err,
            StoichError::SizeMismatch { reactants: 2, what: "moles", got: 1 }
        ));
        let err = limiting_reactant_moles(&reactants, &[2.0], &[1.0, 1.0]).unwrap_err();
        assert!(matches!(
            err,
            StoichError::SizeMismatch { what: "coefficients", .. }
        ));
    }
}
