use serde::{Deserialize, Serialize};
use smart_default::SmartDefault;

// Sprite sheets are a single horizontal strip of equally sized frames. The renderer shifts the
// sheet left by `background_offset_pixels` to show the current frame.
#[derive(SmartDefault, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SpriteAnimation {
    pub ms_since_last_sprite: f64,
    #[default = 100.]
    pub ms_between_sprites: f64,
    // Width of one frame in pixels
    pub measurement: f64,
    #[default = 1]
    pub sprite_frames: u32,
    pub background_offset_pixels: f64,
    #[default = true]
    pub animate: bool,
    #[default = true]
    pub loop_animation: bool,
}

impl SpriteAnimation {
    // Moves to the next frame once enough time has passed since the last one. A non-looping
    // animation holds on its last frame.
    pub fn advance(self) -> Self {
        if !self.animate || self.ms_since_last_sprite <= self.ms_between_sprites {
            return self;
        }

        let last_frame_offset = self.measurement * self.sprite_frames.saturating_sub(1) as f64;
        let background_offset_pixels = if self.background_offset_pixels < last_frame_offset {
            self.background_offset_pixels + self.measurement
        } else if self.loop_animation {
            0.
        } else {
            self.background_offset_pixels
        };

        Self { ms_since_last_sprite: 0., background_offset_pixels, ..self }
    }

    pub fn tick(self, elapsed_ms: f64) -> Self {
        Self { ms_since_last_sprite: self.ms_since_last_sprite + elapsed_ms, ..self }.advance()
    }

    pub fn frame_index(&self) -> u32 {
        if self.measurement <= 0. {
            return 0;
        }
        (self.background_offset_pixels / self.measurement).floor() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn four_frames() -> SpriteAnimation {
        SpriteAnimation { measurement: 16., sprite_frames: 4, ..SpriteAnimation::default() }
    }

    #[test]
    fn waits_for_frame_time() {
        let anim = SpriteAnimation { ms_since_last_sprite: 100., ..four_frames() };
        assert_eq!(anim.advance(), anim);

        let anim = anim.tick(1.);
        assert_eq!(anim.frame_index(), 1);
        assert_eq!(anim.background_offset_pixels, 16.);
        assert_eq!(anim.ms_since_last_sprite, 0.);
    }

    #[test]
    fn loops_back_to_first_frame() {
        let mut anim = four_frames();
        let mut frames = Vec::new();
        for _ in 0..5 {
            anim = anim.tick(101.);
            frames.push(anim.frame_index());
        }
        assert_eq!(frames, vec![1, 2, 3, 0, 1]);
    }

    #[test]
    fn non_looping_holds_last_frame() {
        let mut anim = SpriteAnimation { loop_animation: false, ..four_frames() };
        for _ in 0..6 {
            anim = anim.tick(150.);
        }
        assert_eq!(anim.frame_index(), 3);
        assert_eq!(anim.ms_since_last_sprite, 0.);
    }

    #[test]
    fn stopped_animation_keeps_counting_time() {
        let anim = SpriteAnimation { animate: false, ..four_frames() }.tick(500.);
        assert_eq!(anim.frame_index(), 0);
        assert_eq!(anim.ms_since_last_sprite, 500.);
    }
}
