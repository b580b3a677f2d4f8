use bevy::prelude::*;
use bevy::ui::UiTransform;
use rand::Rng;

use crate::{
    game::{Answer, AnswerState, EvasionController, WidgetConfig},
    visual::{
        nodes::SlideAnimation,
        ui::{AnswerButton, spawn_answer_button},
    },
};

/// Root of the widget; its lifetime is the widget's lifetime
#[derive(Component)]
pub struct WidgetRoot;

/// The stationary "yes" button
#[derive(Component)]
pub struct ConfirmButton;

/// The button that runs from the pointer
#[derive(Component)]
pub struct EvasiveButton;

/// Line under the buttons showing the chosen answer
#[derive(Component)]
pub struct MessageText;

/// Horizontal shift of the confirm button so the pair looks centered
const CONFIRM_ROW_SHIFT: f32 = -80.0;

/// System: Mount the widget and its controller
pub fn setup_widget(mut commands: Commands, config: Res<WidgetConfig>) {
    let tilt = random_tilt(config.style.max_tilt_degrees, &mut rand::rng());

    commands.insert_resource(EvasionController::new(config.evasion));
    commands.insert_resource(AnswerState::default());

    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                overflow: Overflow::clip(),
                ..default()
            },
            BackgroundColor(Color::srgb(0.95, 0.96, 0.96)),
            WidgetRoot,
            Name::new("Widget Root"),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new(config.text.question.clone()),
                TextFont {
                    font_size: 40.0,
                    ..default()
                },
                TextColor(Color::srgb(0.07, 0.09, 0.15)),
                Node {
                    margin: UiRect::bottom(Val::Px(32.0)),
                    ..default()
                },
            ));

            parent
                .spawn(Node {
                    flex_direction: FlexDirection::Row,
                    margin: UiRect::left(Val::Px(CONFIRM_ROW_SHIFT)),
                    ..default()
                })
                .with_children(|row| {
                    spawn_answer_button(
                        row,
                        &config.text.confirm_label,
                        AnswerButton(Answer::Confirm),
                        Node::default(),
                        ConfirmButton,
                    );
                });

            parent.spawn((
                Text::new(""),
                TextFont {
                    font_size: 24.0,
                    ..default()
                },
                TextColor(Color::srgb(0.22, 0.25, 0.32)),
                Node {
                    margin: UiRect::top(Val::Px(32.0)),
                    ..default()
                },
                MessageText,
            ));

            // Absolute, so its left/top are offsets from the root's top-left corner.
            // Hidden until the first placement.
            spawn_answer_button(
                parent,
                &config.text.evasive_label,
                AnswerButton(Answer::Evasive),
                Node {
                    position_type: PositionType::Absolute,
                    ..default()
                },
                (
                    EvasiveButton,
                    Visibility::Hidden,
                    UiTransform {
                        rotation: Rot2::degrees(tilt),
                        scale: Vec2::splat(config.style.scale),
                        ..default()
                    },
                    SlideAnimation::new(config.style.slide_seconds),
                ),
            );
        });

    info!("Widget mounted (tilt {:.1} deg)", tilt);
}

/// Random tilt in `[-max, max)` degrees, fixed for the widget's lifetime
pub fn random_tilt<R: Rng + ?Sized>(max_degrees: f32, rng: &mut R) -> f32 {
    if max_degrees <= 0.0 {
        return 0.0;
    }
    rng.random_range(-max_degrees..max_degrees)
}
