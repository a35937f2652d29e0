// Player animation selection and playback

use std::collections::HashMap;
use std::fmt;

use super::species::Species;
use super::state::PlayerAction;

/// Composite lookup key for a (species, action) pair
///
/// Pure data; the controller builds a fresh one every tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnimationKey {
    pub species: Species,
    pub action: PlayerAction,
}

impl AnimationKey {
    pub fn new(species: Species, action: PlayerAction) -> Self {
        Self { species, action }
    }
}

impl fmt::Display for AnimationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.species, self.action.animation_name())
    }
}

/// A single animation clip
#[derive(Debug, Clone)]
pub struct AnimationClip {
    /// Number of frames in the animation
    pub frame_count: usize,
    /// Duration of each frame in seconds
    pub frame_duration: f32,
    /// Whether the animation loops
    pub looping: bool,
}

impl AnimationClip {
    /// Create a new animation clip
    pub fn new(frame_count: usize, fps: f32, looping: bool) -> Self {
        Self {
            frame_count: frame_count.max(1),
            frame_duration: 1.0 / fps,
            looping,
        }
    }

    /// Create a looping animation
    pub fn looping(frame_count: usize, fps: f32) -> Self {
        Self::new(frame_count, fps, true)
    }

    /// Create a one-shot animation (plays once)
    pub fn one_shot(frame_count: usize, fps: f32) -> Self {
        Self::new(frame_count, fps, false)
    }

    /// Get the total duration of one animation cycle
    pub fn total_duration(&self) -> f32 {
        self.frame_count as f32 * self.frame_duration
    }

    /// Standard clip for an action (same timings for every species)
    pub fn for_action(action: PlayerAction) -> Self {
        match action {
            PlayerAction::Stand => Self::one_shot(1, 10.0),
            PlayerAction::Jump => Self::one_shot(1, 10.0),
            PlayerAction::Hurt => Self::one_shot(1, 5.0),
            PlayerAction::Walk => Self::looping(2, 7.0),
            PlayerAction::Sprint => Self::looping(2, 11.0),
        }
    }
}

const ALL_ACTIONS: [PlayerAction; 5] = [
    PlayerAction::Stand,
    PlayerAction::Walk,
    PlayerAction::Jump,
    PlayerAction::Hurt,
    PlayerAction::Sprint,
];

/// Manages animation playback for the player
#[derive(Debug)]
pub struct AnimationPlayer {
    /// All available animations
    animations: HashMap<AnimationKey, AnimationClip>,
    /// Currently playing animation
    current: AnimationKey,
    /// Current frame index
    current_frame: usize,
    /// Time elapsed in current frame
    frame_timer: f32,
    /// Whether the animation is playing
    playing: bool,
    /// Whether the sprite should be flipped horizontally
    flip_horizontal: bool,
}

impl Default for AnimationPlayer {
    fn default() -> Self {
        Self::with_species_animations()
    }
}

impl AnimationPlayer {
    /// Create an animation player with a clip for every species and action
    pub fn with_species_animations() -> Self {
        let mut animations = HashMap::new();
        for species in Species::ALL {
            for action in ALL_ACTIONS {
                animations.insert(
                    AnimationKey::new(species, action),
                    AnimationClip::for_action(action),
                );
            }
        }

        Self {
            animations,
            current: AnimationKey::new(Species::Green, PlayerAction::Stand),
            current_frame: 0,
            frame_timer: 0.0,
            playing: true,
            flip_horizontal: false,
        }
    }

    /// Play an animation; replaying the current one keeps its progress
    pub fn play(&mut self, key: AnimationKey) {
        if self.current != key {
            self.current = key;
            self.current_frame = 0;
            self.frame_timer = 0.0;
            self.playing = true;
        }
    }

    /// Set horizontal flip state
    pub fn set_flip_horizontal(&mut self, flip: bool) {
        self.flip_horizontal = flip;
    }

    /// Get horizontal flip state
    pub fn is_flipped_horizontal(&self) -> bool {
        self.flip_horizontal
    }

    /// Advance the animation (called every frame)
    pub fn update(&mut self, dt: f32) {
        if !self.playing {
            return;
        }

        let Some(clip) = self.animations.get(&self.current) else {
            return;
        };

        self.frame_timer += dt;

        while self.frame_timer >= clip.frame_duration {
            self.frame_timer -= clip.frame_duration;
            self.current_frame += 1;

            if self.current_frame >= clip.frame_count {
                if clip.looping {
                    self.current_frame = 0;
                } else {
                    // Stay on last frame
                    self.current_frame = clip.frame_count - 1;
                    self.playing = false;
                    break;
                }
            }
        }
    }

    /// Get the current animation key
    pub fn current(&self) -> AnimationKey {
        self.current
    }

    /// Get the current frame index
    pub fn current_frame(&self) -> usize {
        self.current_frame
    }

    /// Check if the animation is playing
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Get the clip info for the current animation
    pub fn current_clip(&self) -> Option<&AnimationClip> {
        self.animations.get(&self.current)
    }

    /// Get animation data for the renderer
    pub fn frame_data(&self) -> AnimationFrameData {
        AnimationFrameData {
            key: self.current,
            frame_index: self.current_frame,
            flip_horizontal: self.flip_horizontal,
        }
    }
}

/// Data needed to draw the current animation frame
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationFrameData {
    pub key: AnimationKey,
    pub frame_index: usize,
    pub flip_horizontal: bool,
}
