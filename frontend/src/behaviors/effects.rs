use crate::config::PageConfig;

pub const CONFETTI_COLORS: [&str; 6] = ["#667eea", "#764ba2", "#f093fb", "#f5576c", "#4facfe", "#00f2fe"];

/// Sections whose background image is checked on load.
pub const IMAGE_SECTIONS: [&str; 2] = ["nosotros", "servicios"];

pub fn section_image_url(section_id: &str) -> String {
    format!("img/{}.jpg", section_id)
}

pub fn parallax_position(scroll_y: f64, speed: f64) -> String {
    format!("center {}px", 0.0 - scroll_y * speed)
}

/// Styles for the hero block before and after its entrance transition.
pub fn hero_style(entered: bool) -> &'static str {
    if entered {
        "transition: all 1.2s cubic-bezier(0.175, 0.885, 0.32, 1.275); opacity: 1; transform: scale(1) translateY(0);"
    } else {
        "opacity: 0; transform: scale(0.8) translateY(50px);"
    }
}

/// Delay before typing the character at `index`.
pub fn typing_delay(index: usize, config: &PageConfig) -> u32 {
    if index == 0 {
        config.typing_start_delay_ms
    } else {
        config.typing_step_ms
    }
}

/// Delay before the next character, or `None` once `typed` covers the whole text.
pub fn next_typing_delay(typed: usize, total: usize, config: &PageConfig) -> Option<u32> {
    (typed < total).then(|| typing_delay(typed, config))
}

/// The first `count` characters of `text`.
pub fn typed_prefix(text: &str, count: usize) -> String {
    text.chars().take(count).collect()
}

#[derive(Clone, Debug, PartialEq)]
pub struct ConfettiPiece {
    pub color: &'static str,
    pub left_pct: f64,
    pub opacity: f64,
    pub rotation_deg: f64,
    pub fall_secs: f64,
    pub final_rotation_deg: f64,
}

impl ConfettiPiece {
    fn generate(rng: &mut impl FnMut() -> f64) -> Self {
        let color_idx = ((rng() * CONFETTI_COLORS.len() as f64) as usize).min(CONFETTI_COLORS.len() - 1);
        Self {
            color: CONFETTI_COLORS[color_idx],
            left_pct: rng() * 100.0,
            opacity: rng() + 0.5,
            rotation_deg: rng() * 360.0,
            fall_secs: 2.0 + rng() * 2.0,
            final_rotation_deg: rng() * 720.0,
        }
    }

    pub fn initial_style(&self) -> String {
        format!(
            "position: fixed; width: 10px; height: 10px; background-color: {}; left: {}%; top: -10px; \
             opacity: {}; transform: rotate({}deg); transition: all {}s ease-out; z-index: 9999;",
            self.color, self.left_pct, self.opacity, self.rotation_deg, self.fall_secs
        )
    }

    pub fn falling_style(&self) -> String {
        format!(
            "{} top: 100%; transform: rotate({}deg); opacity: 0;",
            self.initial_style(),
            self.final_rotation_deg
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfettiStep {
    Spawn,
    Fall,
    Remove,
}

/// A burst of confetti and the schedule each piece follows.
#[derive(Clone, Debug, PartialEq)]
pub struct ConfettiBurst {
    pub pieces: Vec<ConfettiPiece>,
    pub fall_delay_ms: u32,
    pub lifetime_ms: u32,
}

impl ConfettiBurst {
    pub fn generate(config: &PageConfig, rng: &mut impl FnMut() -> f64) -> Self {
        Self {
            pieces: (0..config.confetti_count).map(|_| ConfettiPiece::generate(rng)).collect(),
            fall_delay_ms: config.confetti_fall_delay_ms,
            lifetime_ms: config.confetti_lifetime_ms,
        }
    }

    /// Every piece's steps as `(delay_ms, piece_index, step)`, sorted by delay.
    pub fn timeline(&self) -> Vec<(u32, usize, ConfettiStep)> {
        let mut steps: Vec<_> = (0..self.pieces.len())
            .flat_map(|i| {
                [
                    (0, i, ConfettiStep::Spawn),
                    (self.fall_delay_ms, i, ConfettiStep::Fall),
                    (self.lifetime_ms, i, ConfettiStep::Remove),
                ]
            })
            .collect();
        steps.sort_by_key(|(delay, _, _)| *delay);
        steps
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub size_px: f64,
    pub left_pct: f64,
    pub top_pct: f64,
    pub float_secs: f64,
    pub delay_secs: f64,
}

impl Particle {
    pub fn style(&self) -> String {
        format!(
            "position: absolute; width: {size}px; height: {size}px; background-color: rgba(255, 255, 255, 0.5); \
             border-radius: 50%; left: {}%; top: {}%; animation: float {}s infinite ease-in-out; animation-delay: {}s;",
            self.left_pct,
            self.top_pct,
            self.float_secs,
            self.delay_secs,
            size = self.size_px
        )
    }
}

pub const PARTICLE_FIELD_STYLE: &str =
    "position: fixed; top: 0; left: 0; width: 100%; height: 100%; pointer-events: none; z-index: 0; overflow: hidden;";

pub fn particle_field(config: &PageConfig, rng: &mut impl FnMut() -> f64) -> Vec<Particle> {
    (0..config.particle_count)
        .map(|_| Particle {
            size_px: rng() * 5.0,
            left_pct: rng() * 100.0,
            top_pct: rng() * 100.0,
            float_secs: 5.0 + rng() * 10.0,
            delay_secs: rng() * 5.0,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    /// Deterministic stand-in for Math.random.
    fn cycling(values: &'static [f64]) -> impl FnMut() -> f64 {
        let mut i = 0;
        move || {
            let v = values[i % values.len()];
            i += 1;
            v
        }
    }

    #[test]
    fn parallax_moves_at_half_speed() {
        assert_eq!(parallax_position(0.0, 0.5), "center 0px");
        assert_eq!(parallax_position(300.0, 0.5), "center -150px");
    }

    #[test]
    fn typing_waits_before_the_first_character() {
        let config = PageConfig::default();
        assert_eq!(typing_delay(0, &config), 1000);
        assert_eq!(typing_delay(1, &config), 50);
        assert_eq!(typed_prefix("Año nuevo", 3), "Año");
        assert_eq!(typed_prefix("hi", 10), "hi");
    }

    #[test]
    fn typing_runs_until_the_text_is_complete() {
        let config = PageConfig::default();
        let text = "Hola";
        let total = text.chars().count();
        let mut typed = 0;
        let mut elapsed = 0;
        while let Some(delay) = next_typing_delay(typed, total, &config) {
            elapsed += delay;
            typed += 1;
        }
        assert_eq!(typed_prefix(text, typed), "Hola");
        assert_eq!(elapsed, 1000 + 3 * 50);
        assert_eq!(next_typing_delay(0, 0, &config), None);
    }

    #[test]
    fn confetti_pieces_stay_in_range() {
        let config = PageConfig::default();
        let burst = ConfettiBurst::generate(&config, &mut cycling(&[0.0, 0.4, 0.999]));
        assert_eq!(burst.pieces.len(), 50);
        for piece in &burst.pieces {
            assert!(CONFETTI_COLORS.contains(&piece.color));
            assert!((0.0..100.0).contains(&piece.left_pct));
            assert!((0.5..1.5).contains(&piece.opacity));
            assert!((2.0..4.0).contains(&piece.fall_secs));
            assert!(piece.fall_secs * 1000.0 < burst.lifetime_ms as f64);
        }
    }

    #[test]
    fn every_confetti_piece_is_removed_after_its_lifetime() {
        let config = PageConfig::default();
        let burst = ConfettiBurst::generate(&config, &mut cycling(&[0.25, 0.75]));
        let mut live = BTreeSet::new();
        let mut peak = 0;
        let mut last_delay = 0;
        for (delay, idx, step) in burst.timeline() {
            assert!(delay >= last_delay);
            last_delay = delay;
            match step {
                ConfettiStep::Spawn => {
                    assert!(live.insert(idx));
                }
                ConfettiStep::Fall => assert!(live.contains(&idx)),
                ConfettiStep::Remove => {
                    assert_eq!(delay, 4000);
                    assert!(live.remove(&idx));
                }
            }
            peak = peak.max(live.len());
        }
        assert_eq!(peak, 50);
        assert!(live.is_empty());
    }

    #[test]
    fn falling_style_overrides_the_start() {
        let config = PageConfig::default();
        let burst = ConfettiBurst::generate(&config, &mut cycling(&[0.5]));
        let piece = &burst.pieces[0];
        assert!(piece.initial_style().contains("top: -10px"));
        assert!(piece.falling_style().ends_with("top: 100%; transform: rotate(360deg); opacity: 0;"));
    }

    #[test]
    fn particle_field_is_generated_once_with_bounded_values() {
        let config = PageConfig::default();
        let particles = particle_field(&config, &mut cycling(&[0.1, 0.9]));
        assert_eq!(particles.len(), 30);
        for p in &particles {
            assert!(p.size_px < 5.0);
            assert!((5.0..15.0).contains(&p.float_secs));
            assert!(p.delay_secs < 5.0);
        }
        assert!(particles[0].style().contains("animation: float"));
    }

    #[test]
    fn section_image_urls() {
        let urls: Vec<String> = IMAGE_SECTIONS.iter().map(|id| section_image_url(id)).collect();
        assert_eq!(urls, vec!["img/nosotros.jpg", "img/servicios.jpg"]);
    }
}
