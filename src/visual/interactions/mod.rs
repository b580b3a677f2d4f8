pub mod answers;
pub mod evade;

pub use answers::{handle_answer_buttons, refresh_message};
pub use evade::{
    animate_evasive_node, evade_pointer, place_evasive_button, release_on_unmount,
    settle_on_resize, sync_evasive_node,
};
