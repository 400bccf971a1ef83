//! Static reference data shown in the information panel.
//!
//! All values are descriptive. Nothing here is computed at runtime.

use super::species::Species;
use super::step::Step;

/// Fixed-format property record for one species.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeciesRecord {
    /// Display name.
    pub name: &'static str,
    /// Molecular formula (Unicode sub/superscripts).
    pub formula: &'static str,
    /// Molar mass in g/mol.
    pub molar_mass: f32,
    /// Net formal charge.
    pub charge: i8,
    /// Role in the sequence.
    pub role: &'static str,
    /// Where or how it exists during the process.
    pub state: &'static str,
}

/// Descriptive prose for one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepText {
    /// Short heading.
    pub title: &'static str,
    /// Explanatory paragraph.
    pub body: &'static str,
    /// Reaction equation for the step.
    pub equation: &'static str,
}

const RECORDS: [SpeciesRecord; 4] = [
    SpeciesRecord {
        name: "Sodium nitrite",
        formula: "NaNO₂",
        molar_mass: 68.995,
        charge: 0,
        role: "Precursor (curing salt)",
        state: "Dissolved in food, ionises to Na⁺ + NO₂⁻",
    },
    SpeciesRecord {
        name: "Nitrous acid",
        formula: "HNO₂",
        molar_mass: 47.013,
        charge: 0,
        role: "Protonated intermediate",
        state: "Unstable weak acid (pKa ≈ 3.3) in gastric fluid",
    },
    SpeciesRecord {
        name: "Nitrosonium ion",
        formula: "NO⁺",
        molar_mass: 30.006,
        charge: 1,
        role: "Electrophilic nitrosating agent",
        state: "Transient cation released with water",
    },
    SpeciesRecord {
        name: "N-Nitrosodimethylamine",
        formula: "C₂H₆N₂O",
        molar_mass: 74.083,
        charge: 0,
        role: "Product (probable carcinogen)",
        state: "Formed on a secondary amine of dietary protein",
    },
];

const TEXTS: [StepText; 4] = [
    StepText {
        title: "Sodium nitrite enters the stomach",
        body: "Nitrite is added to cured meats to keep them pink and to \
               suppress bacteria. Once eaten, the salt dissolves and \
               separates into sodium and nitrite ions.",
        equation: "NaNO₂ → Na⁺ + NO₂⁻",
    },
    StepText {
        title: "Stomach acid protonates nitrite",
        body: "Gastric fluid is strongly acidic. The nitrite ion picks up \
               a proton and becomes nitrous acid, a short-lived weak acid.",
        equation: "NO₂⁻ + H⁺ → HNO₂",
    },
    StepText {
        title: "Nitrous acid breaks down",
        body: "A second proton turns nitrous acid into a good leaving \
               group. Water departs and leaves behind the nitrosonium ion, \
               a strong electrophile.",
        equation: "HNO₂ + H⁺ → NO⁺ + H₂O",
    },
    StepText {
        title: "Nitrosonium attacks an amine",
        body: "Secondary amines from digested protein donate their lone \
               pair to NO⁺. After losing a proton the result is an \
               N-nitrosamine, a compound class linked to cancer risk.",
        equation: "R₂NH + NO⁺ → R₂N–N=O + H⁺",
    },
];

/// The property record for `species`.
#[must_use]
pub fn record(species: Species) -> &'static SpeciesRecord {
    &RECORDS[species as usize]
}

/// The descriptive text for `step`.
#[must_use]
pub fn text(step: Step) -> &'static StepText {
    &TEXTS[step.index()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_follow_species_order() {
        assert_eq!(record(Species::SodiumNitrite).formula, "NaNO₂");
        assert_eq!(record(Species::Nitrosonium).charge, 1);
        assert_eq!(record(Species::Nitrosamine).name, "N-Nitrosodimethylamine");
    }

    #[test]
    fn every_step_has_text() {
        for step in Step::all() {
            let t = text(step);
            assert!(!t.title.is_empty());
            assert!(!t.body.is_empty());
            assert!(t.equation.contains('→'));
        }
    }
}
