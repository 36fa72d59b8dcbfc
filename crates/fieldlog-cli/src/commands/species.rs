use fieldlog_core::models::COMMON_SPECIES;

pub fn run_species() {
    for species in COMMON_SPECIES {
        println!("{species}");
    }
}
