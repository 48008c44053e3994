use ChemEq::Examples::chem_examples::chem_examples;
use log::LevelFilter;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

pub fn main() {
    //
    let _ = TermLogger::init(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    );
    let task: usize = 0;
    chem_examples(task);
}
