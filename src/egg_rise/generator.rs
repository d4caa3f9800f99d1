//! Platform generation
//!
//! Platforms are created bottom-up with a fixed gap between them. A finite
//! climb is generated once; an infinite climb keeps a sliding window, dropping
//! the oldest platforms and stacking new ones on top.

use glam::Vec2;
use rand::Rng;

use super::state::{Direction, Platform};
use crate::host::Color;
use crate::settings::EggRiseSettings;

#[derive(Debug, Clone)]
pub struct PlatformGenerator {
    /// Platforms kept alive at once
    window: usize,
    screen_width: f32,
    screen_height: f32,
    size: Vec2,
    gap: f32,
    base_offset: f32,
    min_speed: f32,
    max_speed: f32,
    color: Color,
    /// Color of the final platform; only set for a finite climb
    last_color: Option<Color>,
    next_index: u64,
    /// Ordered by index, lowest platform first
    platforms: Vec<Platform>,
}

impl PlatformGenerator {
    pub fn new(settings: &EggRiseSettings) -> Self {
        Self {
            window: settings.num_platforms,
            screen_width: settings.width as f32,
            screen_height: settings.height as f32,
            size: Vec2::new(settings.platform_width, settings.platform_height),
            gap: settings.platform_gap,
            base_offset: settings.platform_base_offset,
            min_speed: settings.platform_min_speed,
            max_speed: settings.platform_max_speed,
            color: settings.platform_color,
            last_color: (!settings.infinite).then_some(settings.last_platform_color),
            next_index: 0,
            platforms: Vec::with_capacity(settings.num_platforms),
        }
    }

    /// Drop every platform and start numbering from 0 again
    pub fn reset(&mut self) {
        self.platforms.clear();
        self.next_index = 0;
    }

    /// Generate platforms above the highest one until the window is full
    pub fn fill<R: Rng>(&mut self, rng: &mut R) {
        while self.platforms.len() < self.window {
            let platform = self.generate(rng);
            self.platforms.push(platform);
        }
    }

    /// Drop the `amount` lowest platforms
    pub fn remove(&mut self, amount: usize) {
        let amount = amount.min(self.platforms.len());
        self.platforms.drain(..amount);
    }

    /// Swap the `amount` lowest platforms for as many new ones on top
    pub fn recycle<R: Rng>(&mut self, amount: usize, rng: &mut R) {
        self.remove(amount);
        self.fill(rng);
    }

    fn generate<R: Rng>(&mut self, rng: &mut R) -> Platform {
        let index = self.next_index;
        self.next_index += 1;

        let y = match self.platforms.last() {
            Some(top) => top.pos.y - self.gap,
            None => self.screen_height - self.base_offset,
        };
        let max_x = (self.screen_width - self.size.x).max(0.0) as u32;
        let x = rng.random_range(0..=max_x) as f32;
        let speed = rng.random_range(self.min_speed..=self.max_speed);
        let direction = if rng.random_bool(0.5) {
            Direction::Right
        } else {
            Direction::Left
        };

        let color = match self.last_color {
            Some(last) if index + 1 == self.window as u64 => last,
            _ => self.color,
        };

        Platform {
            index,
            pos: Vec2::new(x, y),
            size: self.size,
            color,
            speed,
            direction,
        }
    }

    pub fn get(&self, index: u64) -> Option<&Platform> {
        // Indices are contiguous, so the offset from the first is the slot
        let first = self.platforms.first()?.index;
        let slot = usize::try_from(index.checked_sub(first)?).ok()?;
        self.platforms.get(slot)
    }

    pub fn first(&self) -> Option<&Platform> {
        self.platforms.first()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Platform> {
        self.platforms.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Platform> {
        self.platforms.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.platforms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.platforms.is_empty()
    }

    pub fn window(&self) -> usize {
        self.window
    }
}
