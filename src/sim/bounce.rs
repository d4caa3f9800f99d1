//! Sectioned paddle bounce
//!
//! A paddle face is split into equal-width sections, each mapped to a fixed
//! outgoing angle. This gives the discretized arcade bounce all paddle games
//! share instead of true reflection.

use std::cmp::Ordering;

/// Number of sections a paddle face is split into
pub const SECTIONS: usize = 5;
/// Section that sends the ball straight back
pub const CENTER_SECTION: usize = SECTIONS / 2;

/// Outgoing angle (radians) per section
pub type AngleTable = [f32; SECTIONS];

/// Section hit at `contact` on a surface starting at `start` and `span` long.
///
/// Contacts outside the surface clamp to the end sections.
pub fn section_at(contact: f32, start: f32, span: f32) -> usize {
    if span <= 0.0 || !contact.is_finite() {
        return CENTER_SECTION;
    }
    let section_width = span / SECTIONS as f32;
    let section = ((contact - start) / section_width).floor();
    section.clamp(0.0, (SECTIONS - 1) as f32) as usize
}

/// Look up the outgoing angle for a section
#[inline]
pub fn bounce_angle(table: &AngleTable, section: usize) -> f32 {
    table[section.min(SECTIONS - 1)]
}

/// Which half of the paddle a section lies in, relative to the center
#[inline]
pub fn section_side(section: usize) -> Ordering {
    section.cmp(&CENTER_SECTION)
}
