//! UI domain: run outcome banner shown while the restart is pending.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::core::{LevelEntity, RestartSchedule};
use crate::scoring::RunEndedEvent;

/// Marker for the outcome overlay
#[derive(Component)]
pub struct OutcomeBannerUI;

/// Marker for the restart countdown text
#[derive(Component)]
pub struct RestartCountdownText;

pub(crate) fn show_outcome_banner(
    mut commands: Commands,
    mut run_ended: MessageReader<RunEndedEvent>,
    existing_banner: Query<Entity, With<OutcomeBannerUI>>,
) {
    let Some(event) = run_ended.read().last() else {
        return;
    };

    // Only one banner per run
    if !existing_banner.is_empty() {
        return;
    }

    let headline_color = if event.outcome.is_win() {
        Color::srgb(0.3, 0.85, 0.4)
    } else {
        Color::srgb(0.85, 0.2, 0.2)
    };

    commands
        .spawn((
            OutcomeBannerUI,
            LevelEntity,
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(0.0),
                right: Val::Px(0.0),
                top: Val::Px(0.0),
                bottom: Val::Px(0.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                flex_direction: FlexDirection::Column,
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.6)),
            // On top of the HUD
            ZIndex(100),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new(event.outcome.headline()),
                TextFont {
                    font_size: 72.0,
                    ..default()
                },
                TextColor(headline_color),
                Node {
                    margin: UiRect::bottom(Val::Px(24.0)),
                    ..default()
                },
            ));

            parent.spawn((
                Text::new(format!("Final score: {}", event.final_score)),
                TextFont {
                    font_size: 24.0,
                    ..default()
                },
                TextColor(Color::srgb(0.8, 0.8, 0.8)),
                Node {
                    margin: UiRect::bottom(Val::Px(16.0)),
                    ..default()
                },
            ));

            parent.spawn((
                RestartCountdownText,
                Text::new(""),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::srgb(0.5, 0.5, 0.55)),
            ));
        });
}

pub(crate) fn update_restart_countdown(
    restart: Res<RestartSchedule>,
    mut query: Query<&mut Text, With<RestartCountdownText>>,
) {
    let Some(remaining) = restart.remaining_secs() else {
        return;
    };

    for mut text in &mut query {
        **text = format!("Restarting in {:.1}s", remaining);
    }
}
