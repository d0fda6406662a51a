use anyhow::{Context, Result};
use glam::Vec2;
use log::{info, warn};
use winit::{
    event::{Event, WindowEvent},
    event_loop::EventLoop,
    window::WindowBuilder,
};

use tile_world::engine::assets::{AssetLoader, AssetType, ResourcePathResolver};
use tile_world::engine::game_loop::{Clock, FrameClock};
use tile_world::engine::input::{InputSource, KeyboardInput};
use tile_world::engine::renderer::{HeadlessRenderer, Renderer};
use tile_world::game::characters::{CharacterRoster, CharacterSheet, FrameTables, BASE_STATS};
use tile_world::world::config::WorldConfig;
use tile_world::world::World;

/// Environment variable overriding the resource root
const RESOURCE_ROOT_VAR: &str = "TILE_WORLD_RES";

/// Sprite sheet holding both stock characters
const PEOPLE_SHEET: &str = "people.png";

/// Edge of one character frame in the sprite sheet
const SPRITE_FRAME: u32 = 32;

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("Starting Tile World...");

    let root = std::env::var(RESOURCE_ROOT_VAR).unwrap_or_else(|_| "res".to_string());
    let resources = AssetLoader::new(&root);
    info!("Resource root: {}", resources.base_path().display());

    let mut renderer = HeadlessRenderer::new();
    let roster = spawn_characters(&resources, &mut renderer)?;

    let config = WorldConfig::default();
    let mut world = World::load(&resources, &mut renderer, &config, roster)
        .with_context(|| format!("failed to load world from {}", root))?;

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Tile World")
        .with_inner_size(winit::dpi::LogicalSize::new(
            world.pixel_width(),
            world.pixel_height(),
        ))
        .with_resizable(false)
        .build(&event_loop)?;

    info!("Window created successfully");

    let mut input = KeyboardInput::new(world.roster().count());
    let mut clock = FrameClock::new();

    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                info!("Close requested, shutting down...");
                elwt.exit();
            }
            Event::WindowEvent {
                event: WindowEvent::KeyboardInput { event, .. },
                ..
            } => {
                input.process_keyboard_event(&event);
                if input.take_pause_toggle() {
                    clock.toggle_pause();
                }
            }
            Event::WindowEvent {
                event: WindowEvent::Focused(false),
                ..
            } => {
                // Key releases are not delivered while unfocused
                input.reset_all();
            }
            Event::WindowEvent {
                event: WindowEvent::RedrawRequested,
                ..
            } => {
                let delta = clock.seconds_since_last_tick();
                world.update(delta, &mut input);

                if input.is_cancel_requested() {
                    info!(
                        "Cancel requested after {} frames ({:.1} fps), shutting down...",
                        clock.frame_count(),
                        clock.fps()
                    );
                    elwt.exit();
                    return;
                }

                renderer.begin_frame();
                world.draw(&mut renderer);
                renderer.end_frame();
            }
            Event::AboutToWait => {
                window.request_redraw();
            }
            _ => {}
        })
        .map_err(|e| anyhow::anyhow!("Event loop error: {}", e))?;

    Ok(())
}

/// Spawn the Man (player 0) and the Girl (player 1) from the shared sprite sheet
fn spawn_characters(
    resources: &AssetLoader,
    renderer: &mut dyn Renderer,
) -> Result<CharacterRoster> {
    if !resources.exists(AssetType::Sprite, PEOPLE_SHEET) {
        warn!(
            "Sprite sheet {} is missing from {}",
            PEOPLE_SHEET,
            resources.base_path().display()
        );
    }

    let sheet_path = resources.resolve(AssetType::Sprite, PEOPLE_SHEET);
    let texture = renderer
        .load_texture(&sheet_path)
        .with_context(|| format!("failed to load sprite sheet {}", sheet_path.display()))?;

    let man = CharacterSheet::new(texture, SPRITE_FRAME, SPRITE_FRAME).with_frame_block(3..=5, 4..=7);
    let girl = CharacterSheet::new(texture, SPRITE_FRAME, SPRITE_FRAME).with_frame_block(6..=8, 4..=7);

    let mut roster = CharacterRoster::new();
    roster.spawn(
        "Man",
        Some(0),
        BASE_STATS,
        FrameTables::standard(),
        man,
        Vec2::new(100.0, 100.0),
    )?;
    roster.spawn(
        "Girl",
        Some(1),
        BASE_STATS,
        FrameTables::standard(),
        girl,
        Vec2::new(150.0, 150.0),
    )?;

    Ok(roster)
}
