use log::info;
use prettytable::{Cell, Row, Table};

use crate::GasLaws;
use crate::Stoichiometry;
use crate::Substances::elements::ElementRegistry;
use crate::Substances::molecule::Molecule;
use crate::calculator::Calculator;

pub fn chem_examples(task: usize) {
    //

    match task {
        0 => {
            // BALANCING OF REFERENCE REACTIONS
            let calc = Calculator::new();
            let reactions: Vec<(Vec<&str>, Vec<&str>)> = vec![
                (vec!["H2", "O2"], vec!["H2O"]),
                (vec!["C2H6", "O2"], vec!["CO2", "H2O"]),
                (vec!["C4H10", "O2"], vec!["CO2", "H2O"]),
                (vec!["Ba(OH)2", "H3PO4"], vec!["Ba3(PO4)2", "H2O"]),
                (vec!["Ga", "CuBr2"], vec!["GaBr3", "Cu"]),
            ];
            let mut table = Table::new();
            table.add_row(Row::new(vec![
                Cell::new("reaction"),
                Cell::new("coefficients"),
            ]));
            for (reactants, products) in reactions {
                match calc.balance(&reactants, &products) {
                    Ok(coefficients) => {
                        let equation =
                            format!("{} = {}", reactants.join(" + "), products.join(" + "));
                        table.add_row(Row::new(vec![
                            Cell::new(&equation),
                            Cell::new(&format!("{:?}", coefficients)),
                        ]));
                    }
                    Err(e) => info!("balancing failed: {}", e),
                }
            }
            table.printstd();
        }
        1 => {
            // MOLAR MASSES AND PARTICLE COUNTS
            let registry = ElementRegistry::global();
            let formulae = vec!["H2O", "NaCl", "C6H8O6", "Ca(NO3)2"];
            for formula in formulae {
                let molecule = match Molecule::parse(formula) {
                    Ok(molecule) => molecule,
                    Err(e) => {
                        info!("parsing {} failed: {}", formula, e);
                        continue;
                    }
                };
                println!("composition of {}: {:?}", formula, molecule.composition());
                if let Ok(molar_mass) = molecule.molar_mass(registry) {
                    println!("molar mass: {:?} g/mol", molar_mass);
                }
                if let Ok(particles) = molecule.particles(registry) {
                    println!(
                        "protons: {}, electrons: {}, neutrons: {}",
                        particles.protons, particles.electrons, particles.neutrons
                    );
                }
            }
        }
        2 => {
            // LIMITING REACTANT AND GAS LAWS
            let registry = ElementRegistry::global();
            let reactants = vec![
                Molecule::parse("C2H6").expect("valid formula"),
                Molecule::parse("O2").expect("valid formula"),
            ];
            let products = vec![
                Molecule::parse("CO2").expect("valid formula"),
                Molecule::parse("H2O").expect("valid formula"),
            ];
            let limiting = Stoichiometry::limiting_reactant_moles_without_coefficients(
                &reactants,
                &products,
                &[2.0, 3.5],
                registry,
            );
            println!("limiting reactant: {:?}", limiting);

            let t2 = GasLaws::solve_combined(
                Some(1.0),
                Some(1.0),
                Some(1.0),
                Some(5.0),
                Some(3.0),
                None,
            );
            println!("combined gas law, T2 = {:?}", t2);
        }
        _ => {
            println!("no such example task: {}", task);
        }
    }
}
