//! Frame composition: arena, keys, ball, shoe and HUD

use super::DrawSurface;
use crate::settings::Settings;
use crate::sim::GameState;

const BACKGROUND: &str = "#ffffff";
const KEY_FILL: &str = "#f0f0f0";
const KEY_ACTIVE_FILL: &str = "#ffe08a";
const KEY_TEXT: &str = "#333333";
const HUD_TEXT: &str = "#666666";

/// Font size of key labels
const KEY_FONT: f32 = 20.0;
const HUD_FONT: f32 = 16.0;

const BALL_GLYPH: &str = "⚽";
const SHOE_GLYPH: &str = "👟";

/// Draw the whole frame for the current state
pub fn draw_frame(surface: &mut impl DrawSurface, state: &GameState, settings: &Settings) {
    surface.clear(state.width, state.height);
    surface.fill_rect(0.0, 0.0, state.width, state.height, BACKGROUND);

    for key in state.keyboard.keys() {
        // Highlight the key the ball is sitting in
        let fill = if state.last_key == Some(key.label) {
            KEY_ACTIVE_FILL
        } else {
            KEY_FILL
        };
        surface.fill_rect(key.x, key.y, key.width, key.height, fill);
        let c = key.center();
        let mut buf = [0u8; 4];
        surface.fill_text(key.label.encode_utf8(&mut buf), c.x, c.y, KEY_FONT, KEY_TEXT);
    }

    let ball = state.ball.pos();
    surface.fill_text(BALL_GLYPH, ball.x, ball.y, state.ball.radius() * 2.0, KEY_TEXT);

    if settings.show_shoe {
        let shoe = &state.pointer;
        surface.fill_text(SHOE_GLYPH, shoe.pos.x, shoe.pos.y, shoe.radius * 2.0, KEY_TEXT);
    }

    if settings.show_hud {
        let hud = format!("Score {}  Combo x{}", state.score, state.ball.combo_count());
        surface.fill_text(&hud, state.width / 2.0, state.height - HUD_FONT, HUD_FONT, HUD_TEXT);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Physics;

    /// Records draw calls instead of drawing
    #[derive(Default)]
    struct Recorder {
        rects: Vec<(f32, f32, f32, f32, String)>,
        texts: Vec<(String, f32, f32)>,
        clears: usize,
    }

    impl DrawSurface for Recorder {
        fn clear(&mut self, _width: f32, _height: f32) {
            self.clears += 1;
        }

        fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: &str) {
            self.rects.push((x, y, width, height, color.to_string()));
        }

        fn fill_text(&mut self, text: &str, x: f32, y: f32, _size: f32, _color: &str) {
            self.texts.push((text.to_string(), x, y));
        }
    }

    #[test]
    fn test_frame_draws_every_key() {
        let state = GameState::new(800.0, 600.0, Physics::default(), 0.0);
        let mut rec = Recorder::default();

        draw_frame(&mut rec, &state, &Settings::default());

        assert_eq!(rec.clears, 1);
        // Background plus one rect per key
        assert_eq!(rec.rects.len(), 1 + state.keyboard.keys().len());
        assert!(rec.texts.iter().any(|(t, _, _)| t == "Q"));
        assert!(rec.texts.iter().any(|(t, x, y)| t == BALL_GLYPH && *x == 400.0 && *y == 300.0));
        assert!(rec.texts.iter().any(|(t, _, _)| t.starts_with("Score 0")));
    }

    #[test]
    fn test_hidden_hud_and_shoe() {
        let state = GameState::new(800.0, 600.0, Physics::default(), 0.0);
        let settings = Settings {
            show_hud: false,
            show_shoe: false,
            ..Settings::default()
        };
        let mut rec = Recorder::default();

        draw_frame(&mut rec, &state, &settings);

        assert!(!rec.texts.iter().any(|(t, _, _)| t == SHOE_GLYPH));
        assert!(!rec.texts.iter().any(|(t, _, _)| t.starts_with("Score")));
    }

    #[test]
    fn test_active_key_is_highlighted() {
        let mut state = GameState::new(800.0, 600.0, Physics::default(), 0.0);
        state.last_key = Some('A');
        let mut rec = Recorder::default();

        draw_frame(&mut rec, &state, &Settings::default());

        let highlighted: Vec<_> = rec.rects.iter().filter(|r| r.4 == KEY_ACTIVE_FILL).collect();
        assert_eq!(highlighted.len(), 1);
        assert_eq!(highlighted[0].1, 0.0);
    }
}
