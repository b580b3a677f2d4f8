use bevy::prelude::*;

use crate::{
    game::{Answer, AnswerState, WidgetConfig},
    visual::{setup::MessageText, ui::AnswerButton},
};

/// System: Pressing an answer button shows its message and hides the other
pub fn handle_answer_buttons(
    mut buttons: Query<(&Interaction, &AnswerButton, &mut BackgroundColor), Changed<Interaction>>,
    answers: Option<ResMut<AnswerState>>,
) {
    let Some(mut answers) = answers else {
        return;
    };

    for (interaction, button, mut background) in &mut buttons {
        if *interaction == Interaction::Pressed && answers.choose(button.0) {
            info!("Answered {:?}", button.0);
        }
        *background = BackgroundColor(button.color_for(*interaction));
    }
}

/// System: Mirror the chosen answer into the message line
pub fn refresh_message(
    answers: Option<Res<AnswerState>>,
    config: Res<WidgetConfig>,
    mut texts: Query<&mut Text, With<MessageText>>,
) {
    let Some(answers) = answers else {
        return;
    };
    if !answers.is_changed() {
        return;
    }

    let message = match answers.shown() {
        Some(Answer::Confirm) => config.text.confirm_message.as_str(),
        Some(Answer::Evasive) => config.text.evasive_message.as_str(),
        None => "",
    };

    for mut text in &mut texts {
        text.0 = message.to_string();
    }
}
