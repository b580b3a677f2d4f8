use bevy::prelude::*;
use bevy::window::PrimaryWindow;

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Container>()
            .add_systems(Startup, setup_camera)
            .add_systems(PreUpdate, update_container);
    }
}

/// The interactive area hosting both buttons: the primary window's logical size
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq)]
pub struct Container {
    size: Option<Vec2>,
}

impl Container {
    #[cfg(test)]
    pub fn new(size: Vec2) -> Self {
        Self { size: Some(size) }
    }

    /// Logical size, if the window has been measured and is not degenerate
    pub fn size(&self) -> Option<Vec2> {
        self.size.filter(|s| s.x > 0.0 && s.y > 0.0)
    }
}

#[derive(Component)]
pub struct MainCamera;

/// Bevy UI needs a camera to render into
fn setup_camera(mut commands: Commands) {
    commands.spawn((Camera2d, MainCamera));
}

/// Keep the container size in step with the window
fn update_container(
    mut container: ResMut<Container>,
    windows: Query<&Window, With<PrimaryWindow>>,
) {
    let Ok(window) = windows.single() else {
        return;
    };

    let size = Vec2::new(window.width(), window.height());

    // Only touch the resource on a real change so change detection means "resized"
    if container.size != Some(size) {
        container.size = Some(size);
        info!("Container resized: {}x{}", size.x, size.y);
    }
}
