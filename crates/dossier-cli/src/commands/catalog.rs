use dossier_core::region::{ARCHETYPES, sorted_regions};
use dossier_core::synthesis::WILDCARD;

pub fn regions() {
    println!("{}", WILDCARD);
    for region in sorted_regions() {
        println!("{}", region);
    }
}

pub fn archetypes() {
    for archetype in ARCHETYPES {
        println!("{}", archetype);
    }
}
