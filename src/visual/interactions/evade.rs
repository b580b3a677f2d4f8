use bevy::prelude::*;
use bevy::ui::{ComputedNode, UiGlobalTransform};

use crate::{
    camera::Container,
    game::{AnswerState, EvasionController, EvasionOutcome, Geometry},
    input::PointerEvent,
    visual::{
        nodes::SlideAnimation,
        setup::{ConfirmButton, EvasiveButton, WidgetRoot},
        utils::{logical_rect, logical_size},
    },
};

/// Container and evasive button sizes, if both are measured
fn measure(
    container: &Container,
    evasive: &Query<&ComputedNode, With<EvasiveButton>>,
) -> Option<Geometry> {
    let container = container.size()?;
    let node = evasive.single().ok()?;
    let element = logical_size(node)?;
    Some(Geometry::new(container, element))
}

/// System: Place the evasive button beside the confirm button once layout has measured it
pub fn place_evasive_button(
    controller: Option<ResMut<EvasionController>>,
    confirm: Query<(&ComputedNode, &UiGlobalTransform), With<ConfirmButton>>,
    mut evasive: Query<&mut Visibility, With<EvasiveButton>>,
) {
    let Some(mut controller) = controller else {
        return;
    };
    if controller.is_placed() {
        return;
    }

    let Ok((node, transform)) = confirm.single() else {
        return;
    };
    // Layout hasn't run yet: try again next frame
    let Some(confirm_rect) = logical_rect(node, transform) else {
        return;
    };

    let Some(position) = controller.place_beside(confirm_rect) else {
        return;
    };

    for mut visibility in &mut evasive {
        *visibility = Visibility::Inherited;
    }
    info!("Evasive button placed at ({:.1}, {:.1})", position.x, position.y);
}

/// System: Keep the button inside the container after a resize
pub fn settle_on_resize(
    container: Res<Container>,
    controller: Option<ResMut<EvasionController>>,
    evasive: Query<&ComputedNode, With<EvasiveButton>>,
) {
    if !container.is_changed() {
        return;
    }
    let Some(mut controller) = controller else {
        return;
    };
    let Some(geometry) = measure(&container, &evasive) else {
        return;
    };

    if controller.bypass_change_detection().settle(geometry) {
        controller.set_changed();
        debug!("Evasive button settled to {:?}", controller.position());
    }
}

/// System: Run from the pointer
pub fn evade_pointer(
    mut pointer_events: MessageReader<PointerEvent>,
    container: Res<Container>,
    controller: Option<ResMut<EvasionController>>,
    evasive: Query<&ComputedNode, With<EvasiveButton>>,
) {
    let Some(mut controller) = controller else {
        pointer_events.clear();
        return;
    };

    // Missing measurements make every event below a no-op
    let geometry = measure(&container, &evasive);
    let mut rng = rand::rng();
    let mut moved = false;

    for event in pointer_events.read() {
        let outcome =
            controller
                .bypass_change_detection()
                .respond(event.position, geometry, &mut rng);

        match outcome {
            EvasionOutcome::Teleported(target) => {
                debug!(
                    "Pointer {:?} at {} too close - teleported to {}",
                    event.event_type, event.position, target
                );
                moved = true;
            }
            EvasionOutcome::Nudged(target) => {
                debug!(
                    "Pointer {:?} at {} near - nudged to {}",
                    event.event_type, event.position, target
                );
                moved = true;
            }
            EvasionOutcome::Unchanged | EvasionOutcome::Skipped => {}
        }
    }

    if moved {
        controller.set_changed();
    }
}

/// System: Point the slide animation at the controller's position
pub fn sync_evasive_node(
    controller: Option<Res<EvasionController>>,
    mut evasive: Query<(&mut Node, &mut SlideAnimation), With<EvasiveButton>>,
) {
    let Some(controller) = controller else {
        return;
    };
    if !controller.is_changed() {
        return;
    }
    let Some(position) = controller.position() else {
        return;
    };

    for (mut node, mut slide) in &mut evasive {
        slide.retarget(position);
        let drawn = slide.current();
        node.left = Val::Px(drawn.x);
        node.top = Val::Px(drawn.y);
    }
}

/// System: Advance the slide and write the drawn offsets
pub fn animate_evasive_node(
    time: Res<Time>,
    mut evasive: Query<(&mut Node, &mut SlideAnimation), With<EvasiveButton>>,
) {
    for (mut node, mut slide) in &mut evasive {
        if slide.is_finished() {
            continue;
        }
        let drawn = slide.advance(time.delta_secs());
        node.left = Val::Px(drawn.x);
        node.top = Val::Px(drawn.y);
    }
}

/// System: Drop the widget's state once the widget is gone, so a remount starts fresh
pub fn release_on_unmount(
    mut commands: Commands,
    controller: Option<Res<EvasionController>>,
    roots: Query<(), With<WidgetRoot>>,
) {
    if controller.is_some() && roots.is_empty() {
        commands.remove_resource::<EvasionController>();
        commands.remove_resource::<AnswerState>();
        info!("Widget unmounted - evasion controller and answer released");
    }
}
