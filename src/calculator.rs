//! # Calculator Facade
//!
//! ## Purpose
//! One entry point over the whole crate: element data lookup, molar masses
//! and particle counts, equation balancing, limiting reactant analysis and
//! the gas law solvers. A `Calculator` is a thin handle around an element
//! catalog; everything it does delegates to the topic modules.
//!
//! ## Usage Pattern
//! ```rust
//! use ChemEq::calculator::Calculator;
//! let calc = Calculator::new();
//! let coefficients = calc.balance(&["H2", "O2"], &["H2O"]).unwrap();
//! assert_eq!(coefficients, vec![2, 1, 2]);
//! println!("molar mass of water: {}", calc.molar_mass("H2O").unwrap());
//! ```
//!
//! ## Catalog Injection
//! `Calculator::new()` uses the shared built-in catalog;
//! `Calculator::with_registry` takes any explicitly constructed
//! `ElementRegistry` (e.g. one loaded from JSON), so atomic data can be
//! overridden without touching global state.

use thiserror::Error;

use crate::Balance::balancer::{BalanceError, balance_molecules, verify_balance};
use crate::GasLaws::{self, GasLawError};
use crate::Stoichiometry::{self, StoichError};
use crate::Substances::elements::{ElementData, ElementError, ElementRegistry};
use crate::Substances::formula::FormulaError;
use crate::Substances::molecule::{Molecule, Particles};

/// error type of the facade: whatever a delegated operation raised
#[derive(Debug, Error)]
pub enum CalcError {
    #[error("Formula error: {0}")]
    Formula(#[from] FormulaError),
    #[error("Element error: {0}")]
    Element(#[from] ElementError),
    #[error("Balance error: {0}")]
    Balance(#[from] BalanceError),
    #[error("Stoichiometry error: {0}")]
    Stoich(#[from] StoichError),
    #[error("Gas law error: {0}")]
    GasLaw(#[from] GasLawError),
}

pub struct Calculator<'a> {
    registry: &'a ElementRegistry,
}

impl Calculator<'static> {
    /// Calculator over the shared built-in element catalog.
    pub fn new() -> Self {
        Self {
            registry: ElementRegistry::global(),
        }
    }
}

impl Default for Calculator<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> Calculator<'a> {
    /// Calculator over an explicitly constructed catalog.
    pub fn with_registry(registry: &'a ElementRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &'a ElementRegistry {
        self.registry
    }

    ///////////////////////////////// ELEMENTS AND MOLECULES /////////////////////////////////

    /// Atomic mass of an element given its symbol.
    pub fn atomic_mass(&self, symbol: &str) -> Result<f64, CalcError> {
        Ok(self.registry.atomic_mass(symbol)?)
    }

    /// Full atomic data record of an element given its symbol.
    pub fn element_properties(&self, symbol: &str) -> Result<&'a ElementData, CalcError> {
        Ok(self.registry.get(symbol)?)
    }

    /// Molar mass of a molecule given its formula.
    pub fn molar_mass(&self, formula: &str) -> Result<f64, CalcError> {
        let molecule = Molecule::parse(formula)?;
        Ok(molecule.molar_mass(self.registry)?)
    }

    /// Electron, proton and neutron totals of a molecule.
    pub fn particles(&self, molecule: &Molecule) -> Result<Particles, CalcError> {
        Ok(molecule.particles(self.registry)?)
    }

    ///////////////////////////////// BALANCING /////////////////////////////////

    /// Balance a reaction given as formula strings; coefficients come back
    /// reactants first, in input order.
    pub fn balance(
        &self,
        reactant_formulas: &[&str],
        product_formulas: &[&str],
    ) -> Result<Vec<i64>, CalcError> {
        let reactants = reactant_formulas
            .iter()
            .map(|formula| Molecule::parse(formula))
            .collect::<Result<Vec<_>, _>>()?;
        let products = product_formulas
            .iter()
            .map(|formula| Molecule::parse(formula))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(balance_molecules(&reactants, &products, self.registry)?)
    }

    /// Balance a reaction given as already-parsed molecules.
    pub fn balance_reaction(
        &self,
        reactants: &[Molecule],
        products: &[Molecule],
    ) -> Result<Vec<i64>, CalcError> {
        Ok(balance_molecules(reactants, products, self.registry)?)
    }

    /// Opt-in check that a coefficient vector conserves atoms; `balance`
    /// itself never performs it.
    pub fn check_balance(
        &self,
        coefficients: &[i64],
        reactants: &[Molecule],
        products: &[Molecule],
    ) -> Result<bool, CalcError> {
        Ok(verify_balance(
            coefficients,
            reactants,
            products,
            self.registry,
        )?)
    }

    ///////////////////////////////// STOICHIOMETRY /////////////////////////////////

    pub fn moles_to_grams(&self, moles: f64, formula: &str) -> Result<f64, CalcError> {
        Ok(Stoichiometry::moles_to_grams(moles, formula, self.registry)?)
    }

    pub fn grams_to_moles(&self, grams: f64, formula: &str) -> Result<f64, CalcError> {
        Ok(Stoichiometry::grams_to_moles(grams, formula, self.registry)?)
    }

    pub fn grams_to_moles_vec(
        &self,
        molecules: &[Molecule],
        grams: &[f64],
    ) -> Result<Vec<f64>, CalcError> {
        Ok(Stoichiometry::grams_to_moles_vec(
            molecules,
            grams,
            self.registry,
        )?)
    }

    pub fn limiting_reactant_moles(
        &self,
        reactants: &[Molecule],
        coefficients: &[f64],
        moles: &[f64],
    ) -> Result<Molecule, CalcError> {
        Ok(Stoichiometry::limiting_reactant_moles(
            reactants,
            coefficients,
            moles,
        )?)
    }

    pub fn limiting_reactant_moles_without_coefficients(
        &self,
        reactants: &[Molecule],
        products: &[Molecule],
        moles: &[f64],
    ) -> Result<Molecule, CalcError> {
        Ok(Stoichiometry::limiting_reactant_moles_without_coefficients(
            reactants,
            products,
            moles,
            self.registry,
        )?)
    }

    pub fn limiting_reactant_grams(
        &self,
        reactants: &[Molecule],
        coefficients: &[f64],
        grams: &[f64],
    ) -> Result<Molecule, CalcError> {
        Ok(Stoichiometry::limiting_reactant_grams(
            reactants,
            coefficients,
            grams,
            self.registry,
        )?)
    }

    pub fn limiting_reactant_grams_without_coefficients(
        &self,
        reactants: &[Molecule],
        products: &[Molecule],
        grams: &[f64],
    ) -> Result<Molecule, CalcError> {
        Ok(Stoichiometry::limiting_reactant_grams_without_coefficients(
            reactants,
            products,
            grams,
            self.registry,
        )?)
    }

    ///////////////////////////////// GAS LAWS /////////////////////////////////

    pub fn solve_boyle_law(
        &self,
        p1: Option<f64>,
        v1: Option<f64>,
        p2: Option<f64>,
        v2: Option<f64>,
    ) -> Result<f64, CalcError> {
        Ok(GasLaws::solve_boyle(p1, v1, p2, v2)?)
    }

    pub fn solve_charles_law(
        &self,
        v1: Option<f64>,
        t1: Option<f64>,
        v2: Option<f64>,
        t2: Option<f64>,
    ) -> Result<f64, CalcError> {
        Ok(GasLaws::solve_charles(v1, t1, v2, t2)?)
    }

    pub fn solve_gay_lussac_law(
        &self,
        p1: Option<f64>,
        t1: Option<f64>,
        p2: Option<f64>,
        t2: Option<f64>,
    ) -> Result<f64, CalcError> {
        Ok(GasLaws::solve_gay_lussac(p1, t1, p2, t2)?)
    }

    #[allow(clippy::too_many_arguments)]
    pub fn solve_combined_gas_law(
        &self,
        p1: Option<f64>,
        v1: Option<f64>,
        t1: Option<f64>,
        p2: Option<f64>,
        v2: Option<f64>,
        t2: Option<f64>,
    ) -> Result<f64, CalcError> {
        Ok(GasLaws::solve_combined(p1, v1, t1, p2, v2, t2)?)
    }

    pub fn solve_ideal_gas_law(
        &self,
        p: Option<f64>,
        v: Option<f64>,
        n: Option<f64>,
        r: Option<f64>,
        t: Option<f64>,
    ) -> Result<f64, CalcError> {
        Ok(GasLaws::solve_ideal(p, v, n, r, t)?)
    }
}
