use bevy::prelude::*;
use bevy::input::touch::Touch;
use bevy::window::PrimaryWindow;

/// Position of a press made this frame, in logical window coordinates with
/// the origin at the top-left corner.
pub fn just_pressed_screen_position(
    button_input: &ButtonInput<MouseButton>,
    touch_input: &Touches,
    windows: &Query<&Window, With<PrimaryWindow>>,
) -> Option<Vec2> {
    if button_input.just_pressed(MouseButton::Left) {
        windows.get_single().ok()?.cursor_position()
    } else {
        touch_input.iter_just_pressed().next().map(Touch::position)
    }
}
