//! Scene graph: every molecule group, the shared environment, the camera
//! and live effects.
//!
//! The scene is plain data. It is mutated only by the step-transition
//! engine and the effect factories, between frames, and read by the
//! renderer once per frame.

pub mod builder;
pub mod environment;
pub mod molecule;

use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;
use rustc_hash::FxHashMap;

pub use self::environment::Environment;
pub use self::molecule::{Atom, Bond, Element, Glow, Molecule, Visual};
use crate::camera::CameraController;
use crate::chemistry::Species;
use crate::effects::{Effect, EffectHandle, EffectId, GlowTarget};
use crate::options::Options;

/// Default viewport aspect before the first resize.
const DEFAULT_ASPECT: f32 = 16.0 / 9.0;

/// All visual state the renderer draws.
#[derive(Debug)]
pub struct Scene {
    molecules: FxHashMap<Species, Molecule>,
    /// Shared stomach/protein backdrop.
    pub environment: Environment,
    /// Orbit camera.
    pub camera: CameraController,
    effects: FxHashMap<EffectId, Effect>,
    next_effect_id: u64,
    rng: StdRng,
}

impl Scene {
    /// Fully built scene with the first species visible and framed.
    #[must_use]
    pub fn new(options: &Options) -> Self {
        let mut scene = Self::empty(options);
        for species in Species::ALL {
            let _ = scene.molecules.insert(
                species,
                builder::build_molecule(species, &options.display),
            );
        }
        if let Some(first) = scene.molecules.get_mut(&Species::SodiumNitrite) {
            first.visible = true;
        }
        scene
    }

    /// Scene with the environment and camera but no molecules. Missing
    /// molecules are created as placeholders on demand.
    #[must_use]
    pub fn empty(options: &Options) -> Self {
        let focus = builder::anchor(Species::SodiumNitrite);
        Self {
            molecules: FxHashMap::default(),
            environment: builder::build_environment(&options.display),
            camera: CameraController::new(&options.camera, focus, DEFAULT_ASPECT),
            effects: FxHashMap::default(),
            next_effect_id: 0,
            rng: StdRng::seed_from_u64(options.effects.seed),
        }
    }

    // ── Molecules ────────────────────────────────────────────────────────

    /// Molecule for `species`, if built.
    #[must_use]
    pub fn molecule(&self, species: Species) -> Option<&Molecule> {
        self.molecules.get(&species)
    }

    /// Mutable molecule for `species`, if built.
    pub fn molecule_mut(&mut self, species: Species) -> Option<&mut Molecule> {
        self.molecules.get_mut(&species)
    }

    /// Molecule for `species`, building an empty placeholder if the
    /// species was never constructed.
    pub fn ensure_molecule(&mut self, species: Species) -> &mut Molecule {
        self.molecules.entry(species).or_insert_with(|| {
            log::warn!(
                "molecule `{}` missing at transition time, using placeholder",
                species.data_key()
            );
            Molecule::placeholder(species, builder::anchor(species))
        })
    }

    /// All molecules in species order.
    pub fn molecules(&self) -> impl Iterator<Item = &Molecule> + '_ {
        Species::ALL
            .into_iter()
            .filter_map(|species| self.molecules.get(&species))
    }

    /// Species whose molecule is currently flagged visible, in step order.
    #[must_use]
    pub fn visible_species(&self) -> Vec<Species> {
        self.molecules()
            .filter(|m| m.visible)
            .map(|m| m.id)
            .collect()
    }

    /// Hide every molecule not listed in `keep`. Listed molecules keep
    /// their current visibility.
    pub fn hide_all_except(&mut self, keep: &[Species]) {
        for molecule in self.molecules.values_mut() {
            if !keep.contains(&molecule.id) {
                molecule.visible = false;
            }
        }
    }

    // ── Effects ──────────────────────────────────────────────────────────

    pub(crate) fn insert_effect(&mut self, effect: Effect) -> EffectHandle {
        let id = EffectId(self.next_effect_id);
        self.next_effect_id += 1;
        log::trace!("spawn {id} ({})", effect.name());
        let _ = self.effects.insert(id, effect);
        EffectHandle::new(id)
    }

    pub(crate) fn rng_mut(&mut self) -> &mut StdRng {
        &mut self.rng
    }

    pub(crate) fn glow_slot_mut(
        &mut self,
        target: GlowTarget,
    ) -> Option<&mut Option<Glow>> {
        match target {
            GlowTarget::Molecule(species) => self
                .molecules
                .get_mut(&species)
                .map(|m| &mut m.visual.glow),
            GlowTarget::Environment => Some(&mut self.environment.visual.glow),
        }
    }

    /// Live effect by id.
    #[must_use]
    pub fn effect(&self, id: EffectId) -> Option<&Effect> {
        self.effects.get(&id)
    }

    /// Mutable live effect by id.
    pub fn effect_mut(&mut self, id: EffectId) -> Option<&mut Effect> {
        self.effects.get_mut(&id)
    }

    /// All live effects.
    pub fn effects(&self) -> impl Iterator<Item = (EffectId, &Effect)> + '_ {
        self.effects.iter().map(|(id, effect)| (*id, effect))
    }

    /// Number of live effects.
    #[must_use]
    pub fn effect_count(&self) -> usize {
        self.effects.len()
    }

    /// Remove an effect. Glows are cleared from their target.
    pub fn dispose(&mut self, handle: EffectHandle) {
        let Some(effect) = self.effects.remove(&handle.id()) else {
            return;
        };
        log::trace!("dispose {} ({})", handle.id(), effect.name());
        if let Effect::Glow(glow) = effect {
            if let Some(slot) = self.glow_slot_mut(glow.target) {
                *slot = None;
            }
        }
    }

    /// Advance time-driven effects to `now`.
    pub fn update_effects(&mut self, now: Duration) {
        for effect in self.effects.values_mut() {
            match effect {
                Effect::Particles(burst) => burst.advance(now),
                Effect::CameraPan(pan) => pan.advance(now, &mut self.camera),
                Effect::Glow(_) => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_scene_shows_only_first_species() {
        let scene = Scene::new(&Options::default());
        assert_eq!(scene.visible_species(), vec![Species::SodiumNitrite]);
        assert_eq!(scene.molecules().count(), 4);
        assert!(scene.environment.visible);
    }

    #[test]
    fn ensure_molecule_builds_placeholder() {
        let mut scene = Scene::empty(&Options::default());
        assert!(scene.molecule(Species::Nitrosamine).is_none());
        let m = scene.ensure_molecule(Species::Nitrosamine);
        assert!(m.is_placeholder());
        assert_eq!(m.anchor, builder::anchor(Species::Nitrosamine));
        assert!(scene.molecule(Species::Nitrosamine).is_some());
    }

    #[test]
    fn ensure_molecule_keeps_existing() {
        let mut scene = Scene::new(&Options::default());
        assert!(!scene.ensure_molecule(Species::NitrousAcid).is_placeholder());
    }

    #[test]
    fn hide_all_except_keeps_listed() {
        let mut scene = Scene::new(&Options::default());
        for species in Species::ALL {
            if let Some(m) = scene.molecule_mut(species) {
                m.visible = true;
            }
        }
        scene.hide_all_except(&[Species::NitrousAcid, Species::Nitrosonium]);
        assert_eq!(
            scene.visible_species(),
            vec![Species::NitrousAcid, Species::Nitrosonium]
        );
    }

    #[test]
    fn disposing_twice_is_harmless() {
        let mut scene = Scene::new(&Options::default());
        let handle = crate::effects::apply_glow(
            &mut scene,
            GlowTarget::Environment,
            [1.0; 3],
            1.0,
        );
        let id = handle.id();
        scene.dispose(handle);
        scene.dispose(EffectHandle::new(id));
        assert_eq!(scene.effect_count(), 0);
    }
}
