#[allow(non_snake_case)]
pub mod Balance;
#[allow(non_snake_case)]
pub mod Examples;
#[allow(non_snake_case)]
pub mod GasLaws;
#[allow(non_snake_case)]
pub mod Stoichiometry;
#[allow(non_snake_case)]
pub mod Substances;
pub mod calculator;
