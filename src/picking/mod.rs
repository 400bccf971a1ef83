//! CPU hover picking: cast a ray through the cursor and find the nearest
//! visible atom it hits.

use glam::{Vec2, Vec3};

use crate::camera::Ray;
use crate::chemistry::Species;
use crate::scene::{Element, Scene};

/// The atom under the cursor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AtomHit {
    /// Molecule the atom belongs to.
    pub species: Species,
    /// Index into the molecule's atom list.
    pub atom: usize,
    /// The atom's element.
    pub element: Element,
    /// Distance along the pick ray.
    pub distance: f32,
}

impl AtomHit {
    /// Tooltip text, e.g. `"Nitrogen (N) in Nitrous acid"`.
    #[must_use]
    pub fn tooltip(&self) -> String {
        format!(
            "{} ({}) in {}",
            self.element.name(),
            self.element.symbol(),
            self.species
        )
    }
}

/// Distance along `ray` to the first intersection with a sphere, if any.
/// Hits behind the ray origin are ignored.
#[must_use]
pub fn ray_sphere(ray: &Ray, center: Vec3, radius: f32) -> Option<f32> {
    let to_center = center - ray.origin;
    let t = ray.direction.dot(to_center);
    if t < 0.0 {
        return None;
    }
    let closest = ray.origin + ray.direction * t;
    let dist_sq = center.distance_squared(closest);
    let radius_sq = radius * radius;
    if dist_sq > radius_sq {
        return None;
    }
    // Back off from the closest approach to the entry point.
    Some((t - (radius_sq - dist_sq).sqrt()).max(0.0))
}

/// Nearest atom of any shown molecule under `ndc` (x right, y up, both in
/// `[-1, 1]`).
#[must_use]
pub fn pick_atom(scene: &Scene, ndc: Vec2) -> Option<AtomHit> {
    let ray = scene.camera.camera.ray_through(ndc.x, ndc.y);

    let mut best: Option<AtomHit> = None;
    for molecule in scene.molecules().filter(|m| m.is_shown()) {
        for (index, (atom, center, radius)) in molecule.world_atoms().enumerate() {
            let Some(distance) = ray_sphere(&ray, center, radius) else {
                continue;
            };
            match best {
                Some(hit) if distance >= hit.distance => {}
                _ => {
                    best = Some(AtomHit {
                        species: molecule.id,
                        atom: index,
                        element: atom.element,
                        distance,
                    });
                }
            }
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::Options;

    #[test]
    fn ray_hits_sphere_front_face() {
        let ray = Ray {
            origin: Vec3::new(0.0, 0.0, 10.0),
            direction: Vec3::NEG_Z,
        };
        let t = ray_sphere(&ray, Vec3::ZERO, 1.0);
        assert!(t.is_some_and(|t| (t - 9.0).abs() < 1e-5));
        assert!(ray_sphere(&ray, Vec3::new(3.0, 0.0, 0.0), 1.0).is_none());
        assert!(ray_sphere(&ray, Vec3::new(0.0, 0.0, 20.0), 1.0).is_none());
    }

    #[test]
    fn picks_visible_molecule_at_screen_center() {
        let mut scene = Scene::new(&Options::default());
        let anchor = scene
            .molecule(Species::SodiumNitrite)
            .map_or(Vec3::ZERO, |m| m.anchor);
        // Aim at the molecule's first atom.
        let first = scene
            .molecule(Species::SodiumNitrite)
            .and_then(|m| m.world_atoms().next().map(|(_, c, _)| c))
            .unwrap_or(anchor);
        let distance = scene.camera.distance();
        scene.camera.set_view(first, distance);

        let hit = pick_atom(&scene, Vec2::ZERO);
        assert!(hit.is_some_and(|h| h.species == Species::SodiumNitrite));
    }

    #[test]
    fn hidden_molecules_are_not_picked() {
        let mut scene = Scene::new(&Options::default());
        scene.hide_all_except(&[]);
        assert!(pick_atom(&scene, Vec2::ZERO).is_none());
    }

    #[test]
    fn tooltip_names_element_and_species() {
        let hit = AtomHit {
            species: Species::NitrousAcid,
            atom: 0,
            element: Element::N,
            distance: 1.0,
        };
        assert_eq!(hit.tooltip(), "Nitrogen (N) in Nitrous acid");
    }
}
