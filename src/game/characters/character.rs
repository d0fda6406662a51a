// Character entity and roster

use glam::Vec2;
use log::{debug, info};

use crate::core::Direction;
use crate::engine::input::InputSource;
use crate::engine::renderer::Renderer;

use super::animation::{CharacterSheet, FrameTables, InvalidAnimationConfig};
use super::body::{AnimatedBody, CollisionQuery, MoveOutcome};
use super::state::Activity;
use super::stats::BodyStats;

/// Index of a character in its roster
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CharacterId(usize);

impl CharacterId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A named, optionally player-controlled body with its sprite sheet
#[derive(Debug, Clone)]
pub struct Character {
    id: CharacterId,
    /// Character name (for logs and display)
    name: String,
    /// Input slot controlling this character, or None if nobody steers it
    player_slot: Option<usize>,
    body: AnimatedBody,
    sheet: CharacterSheet,
}

impl Character {
    pub fn id(&self) -> CharacterId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn player_slot(&self) -> Option<usize> {
        self.player_slot
    }

    pub fn body(&self) -> &AnimatedBody {
        &self.body
    }

    pub fn body_mut(&mut self) -> &mut AnimatedBody {
        &mut self.body
    }

    pub fn sheet(&self) -> &CharacterSheet {
        &self.sheet
    }

    /// Map a directional intent onto the body
    pub fn apply_intent(&mut self, intent: Option<Direction>) {
        let before = self.body.activity();
        match intent {
            Some(direction) => self.body.intent_move(direction),
            None => self.body.intent_stop(),
        }
        self.log_activity_change(before);
    }

    /// Advance this character by one tick
    pub fn update<Q>(&mut self, delta: f32, collision: &Q) -> MoveOutcome
    where
        Q: CollisionQuery + ?Sized,
    {
        let before = self.body.activity();
        let outcome = self.body.advance(delta, collision);
        self.log_activity_change(before);
        outcome
    }

    /// Draw the current frame at the body's truncated pixel position
    pub fn draw(&self, renderer: &mut dyn Renderer) {
        // Frames are validated against the sheet at spawn
        if let Some(clip) = self.sheet.clip(self.body.current_frame()) {
            let position = self.body.position();
            renderer.draw_texture(
                self.sheet.texture(),
                position.x as i32,
                position.y as i32,
                clip,
            );
        }
    }

    fn log_activity_change(&self, before: Activity) {
        let after = self.body.activity();
        if before != after {
            debug!(
                "{} {} -> {}",
                self.name,
                before.animation_name(),
                after.animation_name()
            );
        }
    }
}

/// Owns every character; iteration order is spawn order
#[derive(Debug, Default)]
pub struct CharacterRoster {
    characters: Vec<Character>,
}

impl CharacterRoster {
    pub fn new() -> Self {
        Self {
            characters: Vec::new(),
        }
    }

    /// Spawn a character at `position` (top-left of its hitbox)
    ///
    /// Fails if the frame tables reference frames the sheet does not have.
    pub fn spawn(
        &mut self,
        name: &str,
        player_slot: Option<usize>,
        stats: BodyStats,
        frames: FrameTables,
        sheet: CharacterSheet,
        position: Vec2,
    ) -> Result<CharacterId, InvalidAnimationConfig> {
        frames.validate_against(sheet.frame_count())?;

        let id = CharacterId(self.characters.len());
        self.characters.push(Character {
            id,
            name: name.to_string(),
            player_slot,
            body: AnimatedBody::new(position, stats, frames),
            sheet,
        });

        info!(
            "Spawned {} (slot {:?}) at ({}, {})",
            name, player_slot, position.x, position.y
        );
        Ok(id)
    }

    pub fn get(&self, id: CharacterId) -> Option<&Character> {
        self.characters.get(id.0)
    }

    pub fn get_mut(&mut self, id: CharacterId) -> Option<&mut Character> {
        self.characters.get_mut(id.0)
    }

    /// Get the character steered by a player slot
    pub fn get_by_player(&self, player_slot: usize) -> Option<&Character> {
        self.characters
            .iter()
            .find(|c| c.player_slot == Some(player_slot))
    }

    pub fn all(&self) -> &[Character] {
        &self.characters
    }

    pub fn count(&self) -> usize {
        self.characters.len()
    }

    pub fn is_player_taken(&self, player_slot: usize) -> bool {
        self.characters
            .iter()
            .any(|c| c.player_slot == Some(player_slot))
    }

    /// Poll each player-controlled character's intent and apply it
    ///
    /// Characters without a slot keep whatever intent they had.
    pub fn apply_input(&mut self, input: &mut dyn InputSource) {
        for character in &mut self.characters {
            if let Some(slot) = character.player_slot {
                let intent = input.poll_directional_intent(slot);
                character.apply_intent(intent);
            }
        }
    }

    /// Advance every character against the same collision query, in spawn order
    pub fn update<Q>(&mut self, delta: f32, collision: &Q)
    where
        Q: CollisionQuery + ?Sized,
    {
        for character in &mut self.characters {
            character.update(delta, collision);
        }
    }

    /// Draw every character in spawn order
    pub fn draw(&self, renderer: &mut dyn Renderer) {
        for character in &self.characters {
            character.draw(renderer);
        }
    }
}
