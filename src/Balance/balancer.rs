//! Chemical equation balancing.
//!
//! The pipeline: collect the union of elements over all molecules of the
//! reaction, build one signed count row per element (reactants positive,
//! products negative), pin the first reactant's coefficient to 1 by moving
//! its column, negated, to the right-hand side, solve the reduced system by
//! least squares and reconstruct the smallest proportional integer vector
//! from the real-valued solution.
//!
//! The least-squares step returns the minimum-residual, minimum-norm
//! solution for rectangular and rank-deficient systems, so a reaction that
//! cannot be balanced at all is NOT rejected: the solver still produces a
//! best-fit vector and normalization emits a well-formed but meaningless
//! integer vector. Callers that want detection opt in via
//! [`verify_balance`] which re-checks atom conservation against the output.

use log::debug;
use nalgebra::{DMatrix, DVector};
use std::collections::BTreeSet;
use thiserror::Error;

use crate::Balance::rational::{MAX_DENOMINATOR, normalize_to_integers};
use crate::Substances::elements::{ElementError, ElementRegistry};
use crate::Substances::formula::FormulaError;
use crate::Substances::molecule::Molecule;

// singular values below this cutoff are treated as zero by the solver
const SVD_EPS: f64 = 1e-12;

#[derive(Debug, Error)]
pub enum BalanceError {
    #[error("Formula error: {0}")]
    Formula(#[from] FormulaError),
    #[error("Element error: {0}")]
    Element(#[from] ElementError),
    #[error("Least-squares solve failed: {0}")]
    Solver(String),
}

/// Union of element symbols appearing anywhere in the reaction, each one
/// resolved against the catalog. Any unknown symbol aborts the whole
/// collection before matrix construction.
pub fn elements_in_reaction(
    reactants: &[Molecule],
    products: &[Molecule],
    registry: &ElementRegistry,
) -> Result<BTreeSet<String>, ElementError> {
    let mut universe = BTreeSet::new();
    for molecule in reactants.iter().chain(products) {
        for data in molecule.elements(registry)? {
            universe.insert(data.symbol.clone());
        }
    }
    Ok(universe)
}

/// One signed count row per element of the universe: `+count` per reactant
/// in order, then `-count` per product in order. The i-th entry of every row
/// corresponds to the i-th molecule of the reactants-then-products sequence.
/// Rows are kept as built; two elements with identical rows lower the
/// numerical rank, which the solver tolerates.
pub fn conservation_rows(
    universe: &BTreeSet<String>,
    reactants: &[Molecule],
    products: &[Molecule],
) -> Vec<Vec<i64>> {
    let mut rows = Vec::with_capacity(universe.len());
    for element in universe {
        let mut row = Vec::with_capacity(reactants.len() + products.len());
        for molecule in reactants {
            row.push(molecule.element_count(element) as i64);
        }
        for molecule in products {
            row.push(-(molecule.element_count(element) as i64));
        }
        rows.push(row);
    }
    rows
}

// Pin the first molecule's coefficient to 1: its column becomes, negated,
// the right-hand side; the remaining columns are solved for by SVD-based
// least squares (minimum-norm solution on rank deficiency).
fn solve_pinned(rows: &[Vec<i64>], n_molecules: usize) -> Result<DVector<f64>, BalanceError> {
    let n_rows = rows.len();
    if n_molecules <= 1 || n_rows == 0 {
        // nothing left to solve for once the pivot is fixed
        return Ok(DVector::zeros(n_molecules.saturating_sub(1)));
    }
    let rhs = DVector::from_iterator(n_rows, rows.iter().map(|row| -(row[0] as f64)));
    let lhs = DMatrix::from_fn(n_rows, n_molecules - 1, |r, c| rows[r][c + 1] as f64);
    let svd = lhs.svd(true, true);
    let solution = svd
        .solve(&rhs, SVD_EPS)
        .map_err(|e| BalanceError::Solver(e.to_string()))?;
    Ok(solution)
}

/// Balance a reaction given as parsed molecules. Returns one integer
/// coefficient per molecule, reactants first, in caller order.
pub fn balance_molecules(
    reactants: &[Molecule],
    products: &[Molecule],
    registry: &ElementRegistry,
) -> Result<Vec<i64>, BalanceError> {
    let n_molecules = reactants.len() + products.len();
    if n_molecules == 0 {
        return Ok(Vec::new());
    }
    let universe = elements_in_reaction(reactants, products, registry)?;
    let rows = conservation_rows(&universe, reactants, products);
    debug!(
        "balancing {} molecules over {} elements",
        n_molecules,
        universe.len()
    );
    let solved = solve_pinned(&rows, n_molecules)?;
    let mut coefficients = Vec::with_capacity(n_molecules);
    coefficients.push(1.0);
    coefficients.extend(solved.iter().copied());
    debug!("real-valued coefficients: {:?}", coefficients);
    Ok(normalize_to_integers(&coefficients, MAX_DENOMINATOR))
}

/// Balance a reaction given as formula strings, resolved against the shared
/// element catalog. Coefficients come back in the same order as the
/// concatenated input.
pub fn balance(
    reactant_formulas: &[&str],
    product_formulas: &[&str],
) -> Result<Vec<i64>, BalanceError> {
    let reactants = reactant_formulas
        .iter()
        .map(|formula| Molecule::parse(formula))
        .collect::<Result<Vec<_>, _>>()?;
    let products = product_formulas
        .iter()
        .map(|formula| Molecule::parse(formula))
        .collect::<Result<Vec<_>, _>>()?;
    balance_molecules(&reactants, &products, ElementRegistry::global())
}

/// Opt-in post-hoc check that a coefficient vector conserves atoms. The
/// balancer never calls this itself; it exists for callers that want to
/// detect unbalanceable input after the fact.
pub fn verify_balance(
    coefficients: &[i64],
    reactants: &[Molecule],
    products: &[Molecule],
    registry: &ElementRegistry,
) -> Result<bool, ElementError> {
    if coefficients.len() != reactants.len() + products.len() {
        return Ok(false);
    }
    let universe = elements_in_reaction(reactants, products, registry)?;
    let rows = conservation_rows(&universe, reactants, products);
    for row in &rows {
        let total: i64 = row
            .iter()
            .zip(coefficients)
            .map(|(count, coefficient)| count * coefficient)
            .sum();
        if total != 0 {
            return Ok(false);
        }
    }
    Ok(true)
}
