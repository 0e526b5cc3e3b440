//! UI domain: score display HUD element.

use bevy::prelude::*;

use crate::core::LevelEntity;
use crate::scoring::{RunScore, ScoringRules};

pub(crate) const HUD_PADDING: f32 = 20.0;

/// Marker for the score text
#[derive(Component)]
pub struct ScoreText;

/// Spawned per run so the level reload resets it with everything else.
pub(crate) fn spawn_score_display_ui(
    mut commands: Commands,
    rules: Res<ScoringRules>,
    score: Res<RunScore>,
) {
    if !rules.enabled {
        return;
    }

    commands.spawn((
        ScoreText,
        LevelEntity,
        Text::new(score.display_text()),
        TextFont {
            font_size: 28.0,
            ..default()
        },
        TextColor(Color::srgb(0.95, 0.95, 0.95)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(HUD_PADDING),
            top: Val::Px(HUD_PADDING),
            ..default()
        },
    ));
}

pub(crate) fn update_score_display(
    score: Res<RunScore>,
    mut query: Query<&mut Text, With<ScoreText>>,
) {
    if score.is_changed() {
        for mut text in &mut query {
            **text = score.display_text();
        }
    }
}
