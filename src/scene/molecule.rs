//! Uniform molecule record shared by every species.

use glam::{Quat, Vec3};

use crate::chemistry::Species;

/// Chemical element of a display atom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
    /// Hydrogen.
    H,
    /// Carbon.
    C,
    /// Nitrogen.
    N,
    /// Oxygen.
    O,
    /// Sodium.
    Na,
}

impl Element {
    /// Standard CPK color.
    #[must_use]
    pub fn cpk_color(self) -> [f32; 3] {
        match self {
            Element::H => [0.95, 0.95, 0.95],
            Element::C => [0.35, 0.35, 0.35],
            Element::N => [0.19, 0.31, 0.97],
            Element::O => [1.0, 0.05, 0.05],
            Element::Na => [0.67, 0.36, 0.95],
        }
    }

    /// Covalent radius in Ångström.
    #[must_use]
    pub fn covalent_radius(self) -> f32 {
        match self {
            Element::H => 0.31,
            Element::C => 0.76,
            Element::N => 0.71,
            Element::O => 0.66,
            Element::Na => 1.66,
        }
    }

    /// Element symbol.
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Element::H => "H",
            Element::C => "C",
            Element::N => "N",
            Element::O => "O",
            Element::Na => "Na",
        }
    }

    /// Element name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Element::H => "Hydrogen",
            Element::C => "Carbon",
            Element::N => "Nitrogen",
            Element::O => "Oxygen",
            Element::Na => "Sodium",
        }
    }
}

/// One sphere of a ball-and-stick model, in molecule-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Atom {
    /// Element.
    pub element: Element,
    /// Local position.
    pub position: Vec3,
    /// Display radius.
    pub radius: f32,
    /// Formal charge label shown in tooltips, if any.
    pub charge: i8,
}

/// A bond between two atoms of the same visual.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bond {
    /// Index of the first atom.
    pub a: usize,
    /// Index of the second atom.
    pub b: usize,
    /// Bond order (1–3).
    pub order: u8,
}

/// Color and strength of an emissive highlight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Glow {
    /// Linear RGB color.
    pub color: [f32; 3],
    /// Emission strength.
    pub intensity: f32,
}

/// Geometry plus the animatable presentation state of one group.
#[derive(Debug, Clone, PartialEq)]
pub struct Visual {
    /// Atom spheres.
    pub atoms: Vec<Atom>,
    /// Bond sticks.
    pub bonds: Vec<Bond>,
    /// 0.0 = transparent, 1.0 = opaque.
    pub opacity: f32,
    /// Uniform scale around the anchor.
    pub scale: f32,
    /// Orientation around the anchor.
    pub rotation: Quat,
    /// Active highlight, if any.
    pub glow: Option<Glow>,
}

impl Visual {
    /// Visual at rest (opaque, unit scale, identity rotation).
    #[must_use]
    pub fn new(atoms: Vec<Atom>, bonds: Vec<Bond>) -> Self {
        Self {
            atoms,
            bonds,
            opacity: 1.0,
            scale: 1.0,
            rotation: Quat::IDENTITY,
            glow: None,
        }
    }

    /// Visual with no geometry.
    #[must_use]
    pub fn empty() -> Self {
        Self::new(Vec::new(), Vec::new())
    }

    /// Restore opacity, scale and glow to rest. Rotation is kept.
    pub fn reset_presentation(&mut self) {
        self.opacity = 1.0;
        self.scale = 1.0;
        self.glow = None;
    }
}

/// The single record type for every species in the scene.
#[derive(Debug, Clone, PartialEq)]
pub struct Molecule {
    /// Which species this is.
    pub id: Species,
    /// Geometry and presentation.
    pub visual: Visual,
    /// World-space center the camera frames for this molecule.
    pub anchor: Vec3,
    /// Whether the renderer should draw it.
    pub visible: bool,
}

impl Molecule {
    /// Hidden molecule with the given geometry.
    #[must_use]
    pub fn new(id: Species, visual: Visual, anchor: Vec3) -> Self {
        Self {
            id,
            visual,
            anchor,
            visible: false,
        }
    }

    /// Empty stand-in used when a species was never built.
    #[must_use]
    pub fn placeholder(id: Species, anchor: Vec3) -> Self {
        Self::new(id, Visual::empty(), anchor)
    }

    /// Whether this molecule has no geometry.
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        self.visual.atoms.is_empty()
    }

    /// Whether the renderer would show anything for this molecule.
    #[must_use]
    pub fn is_shown(&self) -> bool {
        self.visible && self.visual.opacity > 0.0
    }

    /// World-space position of a local point.
    #[must_use]
    pub fn to_world(&self, local: Vec3) -> Vec3 {
        self.anchor + self.visual.rotation * (local * self.visual.scale)
    }

    /// World-space atom centers and scaled radii.
    pub fn world_atoms(&self) -> impl Iterator<Item = (&Atom, Vec3, f32)> + '_ {
        self.visual.atoms.iter().map(move |atom| {
            (atom, self.to_world(atom.position), atom.radius * self.visual.scale)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Molecule {
        let atoms = vec![Atom {
            element: Element::N,
            position: Vec3::X,
            radius: 0.4,
            charge: 0,
        }];
        Molecule::new(Species::Nitrosonium, Visual::new(atoms, Vec::new()), Vec3::new(0.0, 2.0, 0.0))
    }

    #[test]
    fn new_molecules_start_hidden() {
        assert!(!sample().visible);
        assert!(!sample().is_shown());
    }

    #[test]
    fn world_transform_applies_scale_rotation_anchor() {
        let mut m = sample();
        m.visual.scale = 2.0;
        m.visual.rotation = Quat::from_rotation_z(std::f32::consts::FRAC_PI_2);
        let (_, center, radius) = m.world_atoms().next().unwrap();
        assert!((center - Vec3::new(0.0, 4.0, 0.0)).length() < 1e-5);
        assert!((radius - 0.8).abs() < 1e-6);
    }

    #[test]
    fn placeholder_is_empty() {
        let p = Molecule::placeholder(Species::Nitrosamine, Vec3::ZERO);
        assert!(p.is_placeholder());
        assert_eq!(p.visual.opacity, 1.0);
    }

    #[test]
    fn reset_presentation_keeps_rotation() {
        let mut m = sample();
        m.visual.rotation = Quat::from_rotation_y(1.0);
        m.visual.opacity = 0.2;
        m.visual.glow = Some(Glow { color: [1.0; 3], intensity: 2.0 });
        m.visual.reset_presentation();
        assert_eq!(m.visual.opacity, 1.0);
        assert!(m.visual.glow.is_none());
        assert_eq!(m.visual.rotation, Quat::from_rotation_y(1.0));
    }
}
