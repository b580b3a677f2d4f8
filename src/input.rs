use bevy::input::touch::{TouchInput, TouchPhase};
use bevy::prelude::*;
use bevy::window::CursorMoved;

pub struct InputPlugin;
impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PrimaryTouch>()
            .add_message::<PointerEvent>()
            .add_systems(PreUpdate, collect_pointer_events);
    }
}

#[derive(Message, Debug, Clone)]
pub struct PointerEvent {
    /// Window (logical) coordinates: pixels from top-left
    pub position: Vec2,
    pub event_type: PointerEventType,
    /// 0 = mouse, otherwise the touch id
    pub id: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEventType {
    Move,
    TouchStart,
    TouchMove,
}

/// The first finger down; every other finger is ignored
#[derive(Resource, Default, Debug, Clone, Copy)]
pub struct PrimaryTouch(pub Option<u64>);

impl PrimaryTouch {
    /// Track the primary touch and map its phase to a pointer event type
    pub fn accept(&mut self, id: u64, phase: TouchPhase) -> Option<PointerEventType> {
        match phase {
            TouchPhase::Started => {
                if self.0.is_some() {
                    return None;
                }
                self.0 = Some(id);
                Some(PointerEventType::TouchStart)
            }
            TouchPhase::Moved => (self.0 == Some(id)).then_some(PointerEventType::TouchMove),
            TouchPhase::Ended | TouchPhase::Canceled => {
                if self.0 == Some(id) {
                    self.0 = None;
                }
                None
            }
        }
    }
}

fn collect_pointer_events(
    mut ev_cursor: MessageReader<CursorMoved>,
    mut touch_events: MessageReader<TouchInput>,
    mut primary: ResMut<PrimaryTouch>,
    mut out: MessageWriter<PointerEvent>,
) {
    // every hover counts, no button needs to be held
    for e in ev_cursor.read() {
        out.write(PointerEvent {
            position: e.position,
            event_type: PointerEventType::Move,
            id: 0,
        });
    }

    for ev in touch_events.read() {
        let Some(event_type) = primary.accept(ev.id, ev.phase) else {
            continue;
        };
        out.write(PointerEvent {
            position: ev.position,
            event_type,
            id: ev.id,
        });
    }
}
