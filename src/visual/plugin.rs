use crate::game::WidgetConfig;
use crate::visual::interactions::{
    animate_evasive_node, evade_pointer, handle_answer_buttons, place_evasive_button,
    refresh_message, release_on_unmount, settle_on_resize, sync_evasive_node,
};
use crate::visual::setup::setup_widget;
use bevy::prelude::*;

pub struct WidgetPlugin;

impl Plugin for WidgetPlugin {
    fn build(&self, app: &mut App) {
        // Keep a config someone inserted before us (tests, embedding apps)
        if !app.world().contains_resource::<WidgetConfig>() {
            app.insert_resource(WidgetConfig::load());
        }

        // Widget state (controller, answer) is owned by mount/unmount
        app.add_systems(Startup, setup_widget)
            .add_systems(
                Update,
                (
                    // Geometry
                    place_evasive_button,
                    settle_on_resize,
                    evade_pointer,
                    // Display
                    sync_evasive_node,
                    animate_evasive_node,
                    // Answers
                    handle_answer_buttons,
                    refresh_message,
                    // Lifecycle
                    release_on_unmount,
                )
                    .chain(),
            );
    }
}
