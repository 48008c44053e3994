//! Element catalog: atomic data keyed by element symbol.
//!
//! The built-in table covers all 118 IUPAC elements with their standard
//! atomic weights (isotope-averaged, abridged to five significant figures).
//! The catalog is wrapped into an immutable [`ElementRegistry`]; a shared
//! process-wide instance is available through [`ElementRegistry::global`],
//! and custom catalogs can be constructed from a JSON document of the form
//! `{ "Hydrogen": { "symbol": "H", "number": 1, "atomic_mass": 1.008 }, ... }`.

use prettytable::{Cell, Row, Table};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::OnceLock;
use thiserror::Error;

/// error types for catalog construction and symbol lookup
#[derive(Debug, Error)]
pub enum ElementError {
    #[error("Unknown element: {0}")]
    UnknownElement(String),
    #[error("Invalid element catalog: {0}")]
    InvalidCatalog(#[from] serde_json::Error),
}

/// Atomic data of a single element. Read-only after catalog construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementData {
    pub symbol: String,
    pub name: String,
    /// atomic number = proton count
    pub number: usize,
    /// standard atomic weight, g/mol
    pub atomic_mass: f64,
}

// Built-in records live in the binary; they are turned into owned entries
// when a registry is constructed.
struct ElementRecord {
    symbol: &'static str,
    name: &'static str,
    number: usize,
    atomic_mass: f64,
}

const ELEMENT_TABLE: &[ElementRecord] = &[
    ElementRecord { symbol: "H", name: "Hydrogen", number: 1, atomic_mass: 1.008 },
    ElementRecord { symbol: "He", name: "Helium", number: 2, atomic_mass: 4.0026 },
    ElementRecord { symbol: "Li", name: "Lithium", number: 3, atomic_mass: 6.94 },
    ElementRecord { symbol: "Be", name: "Beryllium", number: 4, atomic_mass: 9.0122 },
    ElementRecord { symbol: "B", name: "Boron", number: 5, atomic_mass: 10.81 },
    ElementRecord { symbol: "C", name: "Carbon", number: 6, atomic_mass: 12.011 },
    ElementRecord { symbol: "N", name: "Nitrogen", number: 7, atomic_mass: 14.007 },
    ElementRecord { symbol: "O", name: "Oxygen", number: 8, atomic_mass: 15.999 },
    ElementRecord { symbol: "F", name: "Fluorine", number: 9, atomic_mass: 18.998 },
    ElementRecord { symbol: "Ne", name: "Neon", number: 10, atomic_mass: 20.180 },
    ElementRecord { symbol: "Na", name: "Sodium", number: 11, atomic_mass: 22.990 },
    ElementRecord { symbol: "Mg", name: "Magnesium", number: 12, atomic_mass: 24.305 },
    ElementRecord { symbol: "Al", name: "Aluminium", number: 13, atomic_mass: 26.982 },
    ElementRecord { symbol: "Si", name: "Silicon", number: 14, atomic_mass: 28.085 },
    ElementRecord { symbol: "P", name: "Phosphorus", number: 15, atomic_mass: 30.974 },
    ElementRecord { symbol: "S", name: "Sulfur", number: 16, atomic_mass: 32.06 },
    ElementRecord { symbol: "Cl", name: "Chlorine", number: 17, atomic_mass: 35.45 },
    ElementRecord { symbol: "Ar", name: "Argon", number: 18, atomic_mass: 39.948 },
    ElementRecord { symbol: "K", name: "Potassium", number: 19, atomic_mass: 39.098 },
    ElementRecord { symbol: "Ca", name: "Calcium", number: 20, atomic_mass: 40.078 },
    ElementRecord { symbol: "Sc", name: "Scandium", number: 21, atomic_mass: 44.956 },
    ElementRecord { symbol: "Ti", name: "Titanium", number: 22, atomic_mass: 47.867 },
    ElementRecord { symbol: "V", name: "Vanadium", number: 23, atomic_mass: 50.942 },
    ElementRecord { symbol: "Cr", name: "Chromium", number: 24, atomic_mass: 51.996 },
    ElementRecord { symbol: "Mn", name: "Manganese", number: 25, atomic_mass: 54.938 },
    ElementRecord { symbol: "Fe", name: "Iron", number: 26, atomic_mass: 55.845 },
    ElementRecord { symbol: "Co", name: "Cobalt", number: 27, atomic_mass: 58.933 },
    ElementRecord { symbol: "Ni", name: "Nickel", number: 28, atomic_mass: 58.693 },
    ElementRecord { symbol: "Cu", name: "Copper", number: 29, atomic_mass: 63.546 },
    ElementRecord { symbol: "Zn", name: "Zinc", number: 30, atomic_mass: 65.38 },
    ElementRecord { symbol: "Ga", name: "Gallium", number: 31, atomic_mass: 69.723 },
    ElementRecord { symbol: "Ge", name: "Germanium", number: 32, atomic_mass: 72.630 },
    ElementRecord { symbol: "As", name: "Arsenic", number: 33, atomic_mass: 74.922 },
    ElementRecord { symbol: "Se", name: "Selenium", number: 34, atomic_mass: 78.971 },
    ElementRecord { symbol: "Br", name: "Bromine", number: 35, atomic_mass: 79.904 },
    ElementRecord { symbol: "Kr", name: "Krypton", number: 36, atomic_mass: 83.798 },
    ElementRecord { symbol: "Rb", name: "Rubidium", number: 37, atomic_mass: 85.468 },
    ElementRecord { symbol: "Sr", name: "Strontium", number: 38, atomic_mass: 87.62 },
    ElementRecord { symbol: "Y", name: "Yttrium", number: 39, atomic_mass: 88.906 },
    ElementRecord { symbol: "Zr", name: "Zirconium", number: 40, atomic_mass: 91.224 },
    ElementRecord { symbol: "Nb", name: "Niobium", number: 41, atomic_mass: 92.906 },
    ElementRecord { symbol: "Mo", name: "Molybdenum", number: 42, atomic_mass: 95.95 },
    ElementRecord { symbol: "Tc", name: "Technetium", number: 43, atomic_mass: 98.0 },
    ElementRecord { symbol: "Ru", name: "Ruthenium", number: 44, atomic_mass: 101.07 },
    ElementRecord { symbol: "Rh", name: "Rhodium", number: 45, atomic_mass: 102.91 },
    ElementRecord { symbol: "Pd", name: "Palladium", number: 46, atomic_mass: 106.42 },
    ElementRecord { symbol: "Ag", name: "Silver", number: 47, atomic_mass: 107.87 },
    ElementRecord { symbol: "Cd", name: "Cadmium", number: 48, atomic_mass: 112.41 },
    ElementRecord { symbol: "In", name: "Indium", number: 49, atomic_mass: 114.82 },
    ElementRecord { symbol: "Sn", name: "Tin", number: 50, atomic_mass: 118.71 },
    ElementRecord { symbol: "Sb", name: "Antimony", number: 51, atomic_mass: 121.76 },
    ElementRecord { symbol: "Te", name: "Tellurium", number: 52, atomic_mass: 127.60 },
    ElementRecord { symbol: "I", name: "Iodine", number: 53, atomic_mass: 126.90 },
    ElementRecord { symbol: "Xe", name: "Xenon", number: 54, atomic_mass: 131.29 },
    ElementRecord { symbol: "Cs", name: "Caesium", number: 55, atomic_mass: 132.91 },
    ElementRecord { symbol: "Ba", name: "Barium", number: 56, atomic_mass: 137.33 },
    ElementRecord { symbol: "La", name: "Lanthanum", number: 57, atomic_mass: 138.91 },
    ElementRecord { symbol: "Ce", name: "Cerium", number: 58, atomic_mass: 140.12 },
    ElementRecord { symbol: "Pr", name: "Praseodymium", number: 59, atomic_mass: 140.91 },
    ElementRecord { symbol: "Nd", name: "Neodymium", number: 60, atomic_mass: 144.24 },
    ElementRecord { symbol: "Pm", name: "Promethium", number: 61, atomic_mass: 145.0 },
    ElementRecord { symbol: "Sm", name: "Samarium", number: 62, atomic_mass: 150.36 },
    ElementRecord { symbol: "Eu", name: "Europium", number: 63, atomic_mass: 151.96 },
    ElementRecord { symbol: "Gd", name: "Gadolinium", number: 64, atomic_mass: 157.25 },
    ElementRecord { symbol: "Tb", name: "Terbium", number: 65, atomic_mass: 158.93 },
    ElementRecord { symbol: "Dy", name: "Dysprosium", number: 66, atomic_mass: 162.50 },
    ElementRecord { symbol: "Ho", name: "Holmium", number: 67, atomic_mass: 164.93 },
    ElementRecord { symbol: "Er", name: "Erbium", number: 68, atomic_mass: 167.26 },
    ElementRecord { symbol: "Tm", name: "Thulium", number: 69, atomic_mass: 168.93 },
    ElementRecord { symbol: "Yb", name: "Ytterbium", number: 70, atomic_mass: 173.05 },
    ElementRecord { symbol: "Lu", name: "Lutetium", number: 71, atomic_mass: 174.97 },
    ElementRecord { symbol: "Hf", name: "Hafnium", number: 72, atomic_mass: 178.49 },
    ElementRecord { symbol: "Ta", name: "Tantalum", number: 73, atomic_mass: 180.95 },
    ElementRecord { symbol: "W", name: "Tungsten", number: 74, atomic_mass: 183.84 },
    ElementRecord { symbol: "Re", name: "Rhenium", number: 75, atomic_mass: 186.21 },
    ElementRecord { symbol: "Os", name: "Osmium", number: 76, atomic_mass: 190.23 },
    ElementRecord { symbol: "Ir", name: "Iridium", number: 77, atomic_mass: 192.22 },
    ElementRecord { symbol: "Pt", name: "Platinum", number: 78, atomic_mass: 195.08 },
    ElementRecord { symbol: "Au", name: "Gold", number: 79, atomic_mass: 196.97 },
    ElementRecord { symbol: "Hg", name: "Mercury", number: 80, atomic_mass: 200.59 },
    ElementRecord { symbol: "Tl", name: "Thallium", number: 81, atomic_mass: 204.38 },
    ElementRecord { symbol: "Pb", name: "Lead", number: 82, atomic_mass: 207.2 },
    ElementRecord { symbol: "Bi", name: "Bismuth", number: 83, atomic_mass: 208.98 },
    ElementRecord { symbol: "Po", name: "Polonium", number: 84, atomic_mass: 209.0 },
    ElementRecord { symbol: "At", name: "Astatine", number: 85, atomic_mass: 210.0 },
    ElementRecord { symbol: "Rn", name: "Radon", number: 86, atomic_mass: 222.0 },
    ElementRecord { symbol: "Fr", name: "Francium", number: 87, atomic_mass: 223.0 },
    ElementRecord { symbol: "Ra", name: "Radium", number: 88, atomic_mass: 226.0 },
    ElementRecord { symbol: "Ac", name: "Actinium", number: 89, atomic_mass: 227.0 },
    ElementRecord { symbol: "Th", name: "Thorium", number: 90, atomic_mass: 232.04 },
    ElementRecord { symbol: "Pa", name: "Protactinium", number: 91, atomic_mass: 231.04 },
    ElementRecord { symbol: "U", name: "Uranium", number: 92, atomic_mass: 238.03 },
    ElementRecord { symbol: "Np", name: "Neptunium", number: 93, atomic_mass: 237.0 },
    ElementRecord { symbol: "Pu", name: "Plutonium", number: 94, atomic_mass: 244.0 },
    ElementRecord { symbol: "Am", name: "Americium", number: 95, atomic_mass: 243.0 },
    ElementRecord { symbol: "Cm", name: "Curium", number: 96, atomic_mass: 247.0 },
    ElementRecord { symbol: "Bk", name: "Berkelium", number: 97, atomic_mass: 247.0 },
    ElementRecord { symbol: "Cf", name: "Californium", number: 98, atomic_mass: 251.0 },
    ElementRecord { symbol: "Es", name: "Einsteinium", number: 99, atomic_mass: 252.0 },
    ElementRecord { symbol: "Fm", name: "Fermium", number: 100, atomic_mass: 257.0 },
    ElementRecord { symbol: "Md", name: "Mendelevium", number: 101, atomic_mass: 258.0 },
    ElementRecord { symbol: "No", name: "Nobelium", number: 102, atomic_mass: 259.0 },
    ElementRecord { symbol: "Lr", name: "Lawrencium", number: 103, atomic_mass: 262.0 },
    ElementRecord { symbol: "Rf", name: "Rutherfordium", number: 104, atomic_mass: 267.0 },
    ElementRecord { symbol: "Db", name: "Dubnium", number: 105, atomic_mass: 268.0 },
    ElementRecord { symbol: "Sg", name: "Seaborgium", number: 106, atomic_mass: 269.0 },
    ElementRecord { symbol: "Bh", name: "Bohrium", number: 107, atomic_mass: 270.0 },
    ElementRecord { symbol: "Hs", name: "Hassium", number: 108, atomic_mass: 269.0 },
    ElementRecord { symbol: "Mt", name: "Meitnerium", number: 109, atomic_mass: 278.0 },
    ElementRecord { symbol: "Ds", name: "Darmstadtium", number: 110, atomic_mass: 281.0 },
    ElementRecord { symbol: "Rg", name: "Roentgenium", number: 111, atomic_mass: 282.0 },
    ElementRecord { symbol: "Cn", name: "Copernicium", number: 112, atomic_mass: 285.0 },
    ElementRecord { symbol: "Nh", name: "Nihonium", number: 113, atomic_mass: 286.0 },
    ElementRecord { symbol: "Fl", name: "Flerovium", number: 114, atomic_mass: 289.0 },
    ElementRecord { symbol: "Mc", name: "Moscovium", number: 115, atomic_mass: 290.0 },
    ElementRecord { symbol: "Lv", name: "Livermorium", number: 116, atomic_mass: 293.0 },
    ElementRecord { symbol: "Ts", name: "Tennessine", number: 117, atomic_mass: 294.0 },
    ElementRecord { symbol: "Og", name: "Oganesson", number: 118, atomic_mass: 294.0 },
];

// serde shape of one catalog entry in a user-supplied JSON document; the
// element name is the key of the outer map
#[derive(Deserialize)]
struct JsonElement {
    symbol: String,
    number: usize,
    atomic_mass: f64,
}

/// Immutable mapping from element symbol to atomic data.
///
/// Constructed once and read-only afterwards; the balancer, the molecule
/// model and the stoichiometry helpers all take a reference to a registry
/// instead of reaching for hidden global state.
#[derive(Debug, Clone)]
pub struct ElementRegistry {
    elements: HashMap<String, ElementData>,
}

impl ElementRegistry {
    /// Registry over the built-in periodic table.
    pub fn new() -> Self {
        let elements = ELEMENT_TABLE
            .iter()
            .map(|record| {
                (
                    record.symbol.to_string(),
                    ElementData {
                        symbol: record.symbol.to_string(),
                        name: record.name.to_string(),
                        number: record.number,
                        atomic_mass: record.atomic_mass,
                    },
                )
            })
            .collect();
        Self { elements }
    }

    /// Registry from a JSON catalog keyed by element name, e.g.
    /// `{ "Hydrogen": { "symbol": "H", "number": 1, "atomic_mass": 1.008 } }`
    pub fn from_json_str(data: &str) -> Result<Self, ElementError> {
        let parsed: HashMap<String, JsonElement> = serde_json::from_str(data)?;
        let elements = parsed
            .into_iter()
            .map(|(name, entry)| {
                (
                    entry.symbol.clone(),
                    ElementData {
                        symbol: entry.symbol,
                        name,
                        number: entry.number,
                        atomic_mass: entry.atomic_mass,
                    },
                )
            })
            .collect();
        Ok(Self { elements })
    }

    /// Shared registry over the built-in table. Initialized on first use;
    /// the `OnceLock` guarantees the catalog is fully populated before any
    /// lookup can observe it.
    pub fn global() -> &'static ElementRegistry {
        static GLOBAL_REGISTRY: OnceLock<ElementRegistry> = OnceLock::new();
        GLOBAL_REGISTRY.get_or_init(ElementRegistry::new)
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.elements.contains_key(symbol)
    }

    pub fn get(&self, symbol: &str) -> Result<&ElementData, ElementError> {
        self.elements
            .get(symbol)
            .ok_or_else(|| ElementError::UnknownElement(symbol.to_string()))
    }

    pub fn atomic_mass(&self, symbol: &str) -> Result<f64, ElementError> {
        Ok(self.get(symbol)?.atomic_mass)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ElementData> {
        self.elements.values()
    }

    /// print the catalog as a table, ordered by atomic number
    pub fn pretty_print(&self) {
        let mut table = Table::new();
        table.add_row(Row::new(vec![
            Cell::new("Z"),
            Cell::new("symbol"),
            Cell::new("name"),
            Cell::new("atomic mass, g/mol"),
        ]));
        let mut entries: Vec<&ElementData> = self.elements.values().collect();
        entries.sort_by_key(|data| data.number);
        for data in entries {
            table.add_row(Row::new(vec![
                Cell::new(&data.number.to_string()),
                Cell::new(&data.symbol),
                Cell::new(&data.name),
                Cell::new(&data.atomic_mass.to_string()),
            ]));
        }
        table.printstd();
    }
}

impl Default for ElementRegistry {
    fn default() -> Self {
        Self::new()
    }
}
