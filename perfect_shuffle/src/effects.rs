use ratatui::style::Color;
use tachyonfx::fx;
use tachyonfx::{Effect, EffectManager, Interpolation, Motion};

/// Keyed effect manager; adding a key again replaces the running effect
pub type FxManager = EffectManager<&'static str>;

const DARK: Color = Color::Rgb(11, 19, 30);
const GOLD: Color = Color::Rgb(255, 183, 3);

/// New screen sweeps in from the left
pub fn screen_transition() -> Effect {
    fx::sweep_in(
        Motion::LeftToRight,
        8,
        2,
        DARK,
        (350, Interpolation::CubicOut),
    )
}

/// Slow warm shimmer over the home title
pub fn title_shimmer() -> Effect {
    let shift = fx::hsl_shift_fg([20.0, 0.1, 0.1], (1400, Interpolation::SineInOut));
    fx::repeating(fx::ping_pong(shift))
}

/// Brief gold flash confirming a card or round was placed
pub fn advance_flash() -> Effect {
    fx::fade_from_fg(GOLD, (250, Interpolation::QuadOut))
}

/// Fresh position materializes after a restart
pub fn restart_coalesce() -> Effect {
    fx::coalesce((400, Interpolation::CubicOut))
}

/// Celebration on the completion screen
pub fn celebration_shimmer() -> Effect {
    let shift = fx::hsl_shift_fg([30.0, 0.0, 0.15], (800, Interpolation::SineInOut));
    fx::ping_pong(shift)
}
