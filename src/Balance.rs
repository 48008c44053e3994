/// eng
/// The module takes as input ordered lists of reactant and product molecules
/// (or formula strings) and produces the smallest positive integer
/// coefficients that conserve atoms across the reaction:
/// 1) the union of elements over both sides of the reaction
/// 2) a signed count matrix, one row per element, reactants positive and
///    products negative
/// 3) a real-valued coefficient vector from a pinned least-squares solve
/// 4) the integer coefficient vector, reactants first, in caller order
///
/// Note:
/// 1) the first reactant's coefficient is fixed to 1 and its column moved to
///    the right-hand side, which removes the scale freedom of the null space
/// 2) chemically inconsistent input is not detected: the least-squares solve
///    returns a best-fit vector for it and normalization emits a well-formed
///    but meaningless result; `verify_balance` is the opt-in check
///
/// # Examples
/// ```
/// use ChemEq::Balance::balancer::balance;
/// let coefficients = balance(&["C2H6", "O2"], &["CO2", "H2O"]).unwrap();
/// assert_eq!(coefficients, vec![2, 7, 4, 6]);
/// ```
pub mod balancer;
pub mod balancer_tests;
/// Bounded-denominator rational reconstruction of integer coefficients from
/// the real-valued least-squares solution. The denominator bound is the
/// `MAX_DENOMINATOR` constant; ratios past the bound degrade as documented
/// there.
pub mod rational;
