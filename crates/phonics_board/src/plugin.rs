use std::collections::{HashMap, HashSet};

use bevy::color::palettes::css;
use bevy::math::Isometry2d;
use bevy::prelude::*;
use bevy::window::{PrimaryWindow, WindowResized};
use board_helpers::input::just_pressed_screen_position;
use board_helpers::restart::{RestartButton, Restartable, handle_restart, spawn_restart_button};
use board_helpers::window_resizing::latest_window_size;

use crate::board::{PhonicsBoard, PressOutcome};
use crate::catalog::TileCatalog;
use crate::category::TileColor;
use crate::config::BoardConfig;
use crate::layout::Viewport;
use crate::render::HINT;
use crate::tile::TileKey;

const TEXT_COLOR: Color = Color::BLACK;
const BUILD_REGION_OUTLINE: Color = Color::srgb(0.71, 0.71, 0.71);
const BLOCK_OUTLINE: Color = Color::srgb(0.78, 0.78, 0.78);
const RESET_LABEL: &str = "Reset";
const RESET_FONT_SIZE: f32 = 18.0;

pub struct PhonicsBoardPlugin;

impl Plugin for PhonicsBoardPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<BoardConfig>()
            .init_resource::<TileVisuals>()
            .add_systems(
                Startup,
                (setup_camera, setup_board, spawn_build_region, spawn_reset_button).chain(),
            )
            .add_systems(
                Update,
                (
                    follow_window_resize,
                    handle_press,
                    handle_restart::<PhonicsBoard>,
                    advance_motion,
                    sync_tile_visuals,
                    update_build_region,
                    place_reset_button,
                    log_composed_word,
                )
                    .chain(),
            )
            .add_systems(Update, draw_frames);
    }
}

impl Restartable for PhonicsBoard {
    fn restart(&mut self) {
        self.reset();
    }
}

#[derive(Component)]
struct TileSprite;

#[derive(Component)]
struct TileLabel;

#[derive(Component)]
struct BuildBackdrop;

#[derive(Component)]
struct HintText;

#[derive(Clone, Copy)]
struct TileEntities {
    sprite: Entity,
    label: Entity,
}

/// Entities drawing each tile, keyed by tile identity.
#[derive(Resource, Default)]
struct TileVisuals {
    entities: HashMap<TileKey, TileEntities>,
}

fn tile_color(color: TileColor) -> Color {
    match color {
        TileColor::Default => css::WHITE.into(),
        TileColor::Vowel => css::LIGHT_YELLOW.into(),
        TileColor::Affix => css::LIGHT_GREEN.into(),
    }
}

/// Top-left, y-down board coordinates to the centered, y-up world.
fn to_world(point: Vec2, viewport: Viewport) -> Vec2 {
    Vec2::new(point.x - viewport.width / 2.0, viewport.height / 2.0 - point.y)
}

fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

fn setup_board(
    mut commands: Commands,
    config: Res<BoardConfig>,
    windows: Query<&Window, With<PrimaryWindow>>,
) {
    let config = match config.validate() {
        Ok(()) => config.clone(),
        Err(err) => {
            error!("Invalid board config, falling back to defaults: {err}");
            BoardConfig::default()
        }
    };
    let viewport = windows.get_single().map_or_else(
        |_| Viewport::default(),
        |window| Viewport::new(window.width(), window.height()),
    );

    let board = PhonicsBoard::new(config, &TileCatalog::standard(), viewport);
    info!(
        "Board ready with {} tiles for a {}x{} window",
        board.base_tiles().len(),
        viewport.width,
        viewport.height
    );
    commands.insert_resource(board);
}

fn spawn_build_region(mut commands: Commands) {
    commands.spawn((
        Sprite::from_color(Color::WHITE, Vec2::ONE),
        Transform::from_xyz(0.0, 0.0, -1.0),
        BuildBackdrop,
    ));
    commands.spawn((
        Text2d::new(HINT),
        TextFont::default(),
        TextColor(TEXT_COLOR),
        Transform::from_xyz(0.0, 0.0, 0.1),
        HintText,
    ));
}

fn spawn_reset_button(mut commands: Commands) {
    spawn_restart_button(&mut commands, RESET_LABEL, RESET_FONT_SIZE);
}

fn follow_window_resize(mut events: EventReader<WindowResized>, mut board: ResMut<PhonicsBoard>) {
    if let Some(size) = latest_window_size(&mut events) {
        board.resize(Viewport::new(size.x, size.y));
    }
}

fn handle_press(
    button_input: Res<ButtonInput<MouseButton>>,
    touch_input: Res<Touches>,
    windows: Query<&Window, With<PrimaryWindow>>,
    reset_buttons: Query<&Interaction, With<RestartButton>>,
    mut board: ResMut<PhonicsBoard>,
) {
    let Some(position) = just_pressed_screen_position(&button_input, &touch_input, &windows)
    else {
        return;
    };
    if reset_buttons
        .iter()
        .any(|interaction| *interaction != Interaction::None)
    {
        return;
    }

    match board.press(position) {
        PressOutcome::Miss => {}
        PressOutcome::Activated { .. } | PressOutcome::Deactivated { .. } => {
            debug!("Build box now holds {} tiles", board.active_tiles().len());
        }
    }
}

fn advance_motion(time: Res<Time>, mut board: ResMut<PhonicsBoard>) {
    board.advance(time.delta_secs());
}

fn sync_tile_visuals(
    mut commands: Commands,
    board: Res<PhonicsBoard>,
    mut visuals: ResMut<TileVisuals>,
    mut sprites: Query<(&mut Sprite, &mut Transform), With<TileSprite>>,
    mut labels: Query<
        (&mut Text2d, &mut TextFont, &mut Transform),
        (With<TileLabel>, Without<TileSprite>),
    >,
) {
    let viewport = board.layout().viewport;
    let mut live = HashSet::new();

    for tile in board.render_tiles() {
        live.insert(tile.key);
        let center = to_world(tile.rect.center(), viewport);
        let depth = if tile.in_build_box { 2.0 } else { 0.0 };
        let color = tile_color(tile.color);
        let font_size = tile.text_size.max(1.0);

        let Some(entities) = visuals.entities.get(&tile.key).copied() else {
            let sprite = commands
                .spawn((
                    Sprite::from_color(color, tile.rect.size()),
                    Transform::from_translation(center.extend(depth)),
                    TileSprite,
                ))
                .id();
            let label = commands
                .spawn((
                    Text2d::new(tile.label),
                    TextFont {
                        font_size,
                        ..default()
                    },
                    TextColor(TEXT_COLOR),
                    Transform::from_translation(center.extend(depth + 0.5)),
                    TileLabel,
                ))
                .id();
            visuals
                .entities
                .insert(tile.key, TileEntities { sprite, label });
            continue;
        };

        if let Ok((mut sprite, mut transform)) = sprites.get_mut(entities.sprite) {
            sprite.custom_size = Some(tile.rect.size());
            sprite.color = color;
            transform.translation = center.extend(depth);
        }
        if let Ok((mut text, mut font, mut transform)) = labels.get_mut(entities.label) {
            if text.0 != tile.label {
                tile.label.clone_into(&mut text.0);
            }
            font.font_size = font_size;
            transform.translation = center.extend(depth + 0.5);
        }
    }

    visuals.entities.retain(|key, entities| {
        if live.contains(key) {
            return true;
        }
        commands.entity(entities.sprite).despawn();
        commands.entity(entities.label).despawn();
        false
    });
}

fn update_build_region(
    board: Res<PhonicsBoard>,
    mut backdrop: Query<(&mut Sprite, &mut Transform), (With<BuildBackdrop>, Without<HintText>)>,
    mut hint: Query<
        (&mut TextFont, &mut Transform, &mut Visibility),
        (With<HintText>, Without<BuildBackdrop>),
    >,
) {
    let region = board.layout().build_region;
    let center = to_world(region.center(), board.layout().viewport);

    for (mut sprite, mut transform) in &mut backdrop {
        sprite.custom_size = Some(region.size());
        transform.translation = center.extend(-1.0);
    }

    for (mut font, mut transform, mut visibility) in &mut hint {
        transform.translation = center.extend(0.1);
        match board.hint_text_size() {
            Some(size) => {
                font.font_size = size.max(1.0);
                *visibility = Visibility::Inherited;
            }
            None => *visibility = Visibility::Hidden,
        }
    }
}

fn place_reset_button(
    board: Res<PhonicsBoard>,
    mut buttons: Query<&mut Node, With<RestartButton>>,
) {
    let layout = board.layout();
    let left = Val::Px(layout.viewport.width * board.config().reset_button_x);
    let top = Val::Px(layout.build_region.max.y + board.config().reset_button_gap);

    for mut node in &mut buttons {
        if node.left != left || node.top != top {
            node.left = left;
            node.top = top;
        }
    }
}

fn log_composed_word(board: Res<PhonicsBoard>, mut word: Local<String>) {
    let current = board.composed_word();
    if *word != current {
        info!("Composed word: {current:?}");
        *word = current;
    }
}

fn draw_frames(mut gizmos: Gizmos, board: Res<PhonicsBoard>) {
    let viewport = board.layout().viewport;
    let region = board.layout().build_region;
    gizmos.rect_2d(
        Isometry2d::from_translation(to_world(region.center(), viewport)),
        region.size(),
        BUILD_REGION_OUTLINE,
    );

    for border in board.block_borders() {
        gizmos.rect_2d(
            Isometry2d::from_translation(to_world(border.center(), viewport)),
            border.size(),
            BLOCK_OUTLINE,
        );
    }
}
