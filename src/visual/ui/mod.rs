//! Button look and feel shared by both answer buttons.

use bevy::prelude::*;

use crate::game::Answer;

/// Marks a clickable answer and remembers which one it is
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerButton(pub Answer);

impl AnswerButton {
    pub fn idle_color(&self) -> Color {
        match self.0 {
            Answer::Confirm => Color::srgb(0.13, 0.77, 0.37),
            Answer::Evasive => Color::srgb(0.94, 0.27, 0.27),
        }
    }

    pub fn hover_color(&self) -> Color {
        match self.0 {
            Answer::Confirm => Color::srgb(0.09, 0.64, 0.29),
            Answer::Evasive => Color::srgb(0.86, 0.15, 0.15),
        }
    }

    pub fn pressed_color(&self) -> Color {
        match self.0 {
            Answer::Confirm => Color::srgb(0.08, 0.50, 0.24),
            Answer::Evasive => Color::srgb(0.73, 0.11, 0.11),
        }
    }

    pub fn color_for(&self, interaction: Interaction) -> Color {
        match interaction {
            Interaction::Pressed => self.pressed_color(),
            Interaction::Hovered => self.hover_color(),
            Interaction::None => self.idle_color(),
        }
    }
}

/// Spawn an answer button with a text label.
///
/// `node` controls placement; `extra` carries markers and per-button components.
pub fn spawn_answer_button(
    parent: &mut ChildSpawnerCommands,
    label: &str,
    answer: AnswerButton,
    node: Node,
    extra: impl Bundle,
) {
    parent
        .spawn((
            Button,
            Node {
                padding: UiRect::axes(Val::Px(16.0), Val::Px(8.0)),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..node
            },
            BackgroundColor(answer.idle_color()),
            answer,
            extra,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new(label),
                TextFont {
                    font_size: 22.0,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colors_follow_interaction() {
        let button = AnswerButton(Answer::Evasive);
        assert_eq!(button.color_for(Interaction::None), button.idle_color());
        assert_eq!(button.color_for(Interaction::Hovered), button.hover_color());
        assert_eq!(button.color_for(Interaction::Pressed), button.pressed_color());
    }

    #[test]
    fn test_buttons_are_distinguishable() {
        let confirm = AnswerButton(Answer::Confirm);
        let evasive = AnswerButton(Answer::Evasive);
        assert_ne!(confirm.idle_color(), evasive.idle_color());
    }
}
