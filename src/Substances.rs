/// Element catalog: the read-only reference table of atomic data (standard
/// atomic weight, atomic number) keyed by element symbol. The built-in table
/// covers all 118 elements; custom catalogs can be loaded from JSON. The
/// catalog is exposed as an immutable `ElementRegistry` instance which is
/// passed explicitly into everything that resolves symbols.
///
///  # Examples
/// ```
/// use ChemEq::Substances::elements::ElementRegistry;
/// let registry = ElementRegistry::global();
/// let iron = registry.get("Fe").unwrap();
/// println!("{} has atomic mass {} g/mol", iron.name, iron.atomic_mass);
/// ```
pub mod elements;
/// Parsing of chemical formula strings into an element -> count mapping:
/// element symbols with multipliers, one level of parenthesized groups,
/// named chemical groups (e.g. Me for methyl) and phase-mark filtering.
///
///  # Examples
/// ```
/// use ChemEq::Substances::formula::parse_formula;
/// let composition = parse_formula("Ca(NO3)2").unwrap();
/// assert_eq!(composition["O"], 6);
/// ```
pub mod formula;
/// The Molecule composition model: an immutable value object mapping element
/// symbols to counts, with derived molar mass and particle counts resolved
/// against the element catalog.
///
///  # Examples
/// ```
/// use ChemEq::Substances::elements::ElementRegistry;
/// use ChemEq::Substances::molecule::Molecule;
/// let registry = ElementRegistry::global();
/// let glucose = Molecule::parse("C6H12O6").unwrap();
/// println!("molar mass: {} g/mol", glucose.molar_mass(registry).unwrap());
/// ```
pub mod molecule;
