//! Command dispatch for NitrosoEngine.

use super::command::ExplainerCommand;
use super::NitrosoEngine;
use crate::input::InputEvent;
use crate::picking::pick_atom;

impl NitrosoEngine {
    /// Execute a command. Returns `true` if it had an effect.
    ///
    /// Step commands return `false` when dropped (out of range, at a
    /// boundary, or while a transition is in flight).
    pub fn execute(&mut self, cmd: ExplainerCommand) -> bool {
        let now = self.clock.now();
        match cmd {
            ExplainerCommand::Next => self.steps.next(&mut self.scene, now),
            ExplainerCommand::Previous => self.steps.previous(&mut self.scene, now),
            ExplainerCommand::GoToStep { index } => {
                self.steps.go_to_step(index, &mut self.scene, now)
            }
            ExplainerCommand::RecenterCamera => {
                let species = self.steps.current().species();
                let positions: Vec<_> = self
                    .scene
                    .molecule(species)
                    .map(|m| m.world_atoms().map(|(_, center, _)| center).collect())
                    .unwrap_or_default();
                if positions.is_empty() {
                    return false;
                }
                self.scene.camera.fit_to_positions(&positions);
                true
            }
            ExplainerCommand::ToggleAutoRotate => {
                self.auto_rotate = !self.auto_rotate;
                log::debug!("auto-rotate {}", if self.auto_rotate { "on" } else { "off" });
                true
            }
            ExplainerCommand::RotateCamera { delta } => {
                self.scene.camera.rotate(delta);
                true
            }
            ExplainerCommand::Zoom { delta } => {
                self.scene.camera.zoom(delta);
                true
            }
            ExplainerCommand::Resize { width, height } => {
                self.scene.camera.resize(width, height);
                self.input.set_viewport(width, height);
                true
            }
            ExplainerCommand::Hover { ndc } => {
                self.hover = pick_atom(&self.scene, ndc);
                self.hover.is_some()
            }
            ExplainerCommand::ClearHover => self.hover.take().is_some(),
        }
    }

    /// Process a platform-agnostic input event. Returns `true` if the
    /// resulting command had an effect.
    pub fn handle_input(&mut self, event: InputEvent) -> bool {
        self.input
            .handle_event(event)
            .is_some_and(|cmd| self.execute(cmd))
    }

    /// Process a key press by `KeyboardEvent.code` string. Returns `true`
    /// if the key is bound and its command had an effect.
    pub fn handle_key_press(&mut self, key: &str) -> bool {
        self.input
            .handle_key_press(key)
            .is_some_and(|cmd| self.execute(cmd))
    }
}
