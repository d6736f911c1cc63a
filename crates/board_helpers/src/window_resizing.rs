use bevy::prelude::*;
use bevy::window::WindowResized;

/// Size carried by the last resize event of the frame, if any.
pub fn latest_window_size(events: &mut EventReader<WindowResized>) -> Option<Vec2> {
    events
        .read()
        .last()
        .map(|event| Vec2::new(event.width, event.height))
}

// wgpu refuses surfaces larger than this on most browsers.
#[cfg(target_arch = "wasm32")]
const MAX_SURFACE_SIDE: f32 = 2048.0;

#[cfg(target_arch = "wasm32")]
fn browser_inner_size() -> Option<Vec2> {
    let window = web_sys::window()?;
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;
    Some(Vec2::new(width as f32, height as f32))
}

#[cfg(target_arch = "wasm32")]
pub fn handle_browser_resize(
    mut primary_query: Query<&mut Window, With<bevy::window::PrimaryWindow>>,
) {
    let Some(target) = browser_inner_size() else {
        return;
    };
    let target = target.min(Vec2::splat(MAX_SURFACE_SIDE));

    for mut window in &mut primary_query {
        let current = Vec2::new(window.resolution.width(), window.resolution.height());
        if (current - target).abs().max_element() > f32::EPSILON {
            window.resolution.set(target.x, target.y);
        }
    }
}
