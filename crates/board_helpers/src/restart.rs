use bevy::prelude::*;

#[derive(Component)]
pub struct RestartButton;

const BUTTON_COLOR: Color = Color::srgb(0.88, 0.88, 0.88);

pub trait Restartable: Resource {
    fn restart(&mut self);
}

pub fn handle_restart<T: Restartable>(
    mut restartable: ResMut<T>,
    interaction_query: Query<&Interaction, (Changed<Interaction>, With<RestartButton>)>,
) {
    for interaction in &interaction_query {
        if *interaction == Interaction::Pressed {
            info!("Restart requested");
            restartable.restart();
        }
    }
}

/// Absolutely positioned button; callers move it by editing its `Node`.
pub fn spawn_restart_button(commands: &mut Commands, label: &str, font_size: f32) -> Entity {
    commands
        .spawn((
            Button,
            Node {
                position_type: PositionType::Absolute,
                padding: UiRect::axes(Val::Px(12.0), Val::Px(6.0)),
                ..default()
            },
            BackgroundColor(BUTTON_COLOR),
            RestartButton,
        ))
        .with_child((
            Text::new(label),
            TextFont {
                font_size,
                ..default()
            },
            TextColor(Color::BLACK),
        ))
        .id()
}
