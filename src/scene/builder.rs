//! Builds the static molecule and environment geometry once at startup.
//!
//! Coordinates are hand-placed in Ångström around each molecule's local
//! origin. Anchors lay the four species out left to right so the camera
//! travels along the reaction as the steps advance.

use glam::Vec3;

use super::environment::Environment;
use super::molecule::{Atom, Bond, Element, Molecule, Visual};
use crate::chemistry::Species;
use crate::options::DisplayOptions;

/// Spacing between neighbouring molecule anchors.
const ANCHOR_SPACING: f32 = 6.0;

/// World-space anchor of a species.
#[must_use]
pub fn anchor(species: Species) -> Vec3 {
    let i = species as usize as f32;
    Vec3::new((i - 1.5) * ANCHOR_SPACING, 0.0, 0.0)
}

/// Accumulates atoms and bonds, optionally dropping hydrogens.
struct GeometryBuilder {
    atoms: Vec<Atom>,
    bonds: Vec<Bond>,
    keep_hydrogens: bool,
    atom_scale: f32,
}

impl GeometryBuilder {
    fn new(display: &DisplayOptions) -> Self {
        Self {
            atoms: Vec::new(),
            bonds: Vec::new(),
            keep_hydrogens: display.show_hydrogens,
            atom_scale: display.atom_scale,
        }
    }

    fn atom(&mut self, element: Element, x: f32, y: f32, z: f32) -> Option<usize> {
        self.charged(element, x, y, z, 0)
    }

    fn charged(
        &mut self,
        element: Element,
        x: f32,
        y: f32,
        z: f32,
        charge: i8,
    ) -> Option<usize> {
        if element == Element::H && !self.keep_hydrogens {
            return None;
        }
        self.atoms.push(Atom {
            element,
            position: Vec3::new(x, y, z),
            radius: element.covalent_radius() * self.atom_scale,
            charge,
        });
        Some(self.atoms.len() - 1)
    }

    fn bond(&mut self, a: Option<usize>, b: Option<usize>, order: u8) {
        if let (Some(a), Some(b)) = (a, b) {
            self.bonds.push(Bond { a, b, order });
        }
    }

    fn finish(self) -> Visual {
        Visual::new(self.atoms, self.bonds)
    }
}

/// Geometry for one species.
#[must_use]
pub fn build_visual(species: Species, display: &DisplayOptions) -> Visual {
    let mut g = GeometryBuilder::new(display);
    match species {
        Species::SodiumNitrite => {
            // Ion pair: Na⁺ sits beside the bent nitrite anion.
            let _ = g.charged(Element::Na, -2.4, 0.0, 0.0, 1);
            let n = g.atom(Element::N, 0.3, 0.45, 0.0);
            let o1 = g.charged(Element::O, -0.8, -0.25, 0.0, -1);
            let o2 = g.atom(Element::O, 1.4, -0.25, 0.0);
            g.bond(n, o1, 1);
            g.bond(n, o2, 2);
        }
        Species::NitrousAcid => {
            let h = g.atom(Element::H, -1.9, 0.35, 0.0);
            let o1 = g.atom(Element::O, -1.0, -0.3, 0.0);
            let n = g.atom(Element::N, 0.1, 0.4, 0.0);
            let o2 = g.atom(Element::O, 1.15, -0.15, 0.0);
            g.bond(h, o1, 1);
            g.bond(o1, n, 1);
            g.bond(n, o2, 2);
        }
        Species::Nitrosonium => {
            let n = g.charged(Element::N, -0.53, 0.0, 0.0, 1);
            let o = g.atom(Element::O, 0.53, 0.0, 0.0);
            g.bond(n, o, 3);
        }
        Species::Nitrosamine => {
            // N-nitrosodimethylamine, (CH₃)₂N–N=O
            let n1 = g.atom(Element::N, -0.4, 0.0, 0.0);
            let n2 = g.atom(Element::N, 0.92, 0.0, 0.0);
            let o = g.atom(Element::O, 1.55, 1.05, 0.0);
            let c1 = g.atom(Element::C, -1.15, 1.25, 0.0);
            let c2 = g.atom(Element::C, -1.15, -1.25, 0.0);
            g.bond(n1, n2, 1);
            g.bond(n2, o, 2);
            g.bond(n1, c1, 1);
            g.bond(n1, c2, 1);
            for (c, sign) in [(c1, 1.0f32), (c2, -1.0)] {
                let h1 = g.atom(Element::H, -2.2, sign * 1.05, 0.0);
                let h2 = g.atom(Element::H, -0.85, sign * 1.85, 0.85);
                let h3 = g.atom(Element::H, -0.85, sign * 1.85, -0.85);
                g.bond(c, h1, 1);
                g.bond(c, h2, 1);
                g.bond(c, h3, 1);
            }
        }
    }
    g.finish()
}

/// A fully built, hidden molecule for `species`.
#[must_use]
pub fn build_molecule(species: Species, display: &DisplayOptions) -> Molecule {
    Molecule::new(species, build_visual(species, display), anchor(species))
}

/// The shared stomach environment: a protein strand running beneath the
/// molecules with a secondary amine under the final anchor.
#[must_use]
pub fn build_environment(display: &DisplayOptions) -> Environment {
    let mut g = GeometryBuilder::new(display);
    let amine_x = anchor(Species::Nitrosamine).x;
    let start = anchor(Species::SodiumNitrite).x - 3.0;
    let mut prev = None;
    let mut x = start;
    let mut amine_site = Vec3::new(amine_x, -3.0, 0.0);
    let mut i = 0u32;
    while x <= amine_x + 3.0 {
        let y = -3.5 + 0.35 * (i as f32 * 0.9).sin();
        let element = if i % 3 == 0 { Element::N } else { Element::C };
        let atom = g.atom(element, x, y, 0.0);
        g.bond(prev, atom, 1);
        if element == Element::N && (x - amine_x).abs() < 1.0 {
            amine_site = Vec3::new(x, y, 0.0);
        }
        prev = atom;
        x += 1.45;
        i += 1;
    }
    Environment::new(g.finish(), amine_site, display.show_environment)
}
