use anyhow::Result;
use glam::Vec2;
use log::{debug, info};
use winit::{
    event::{ElementState, Event, KeyEvent, WindowEvent},
    event_loop::EventLoop,
    keyboard::{KeyCode, PhysicalKey},
    window::WindowBuilder,
};

mod core;
mod engine;
mod game;

use engine::game_loop::{GameLoop, TICK_TIME};
use engine::input::{ControllerManager, HostInput};
use game::level::{schema, Level, LevelDefinition};
use game::player::CharacterSheet;
use game::Session;

/// Fixed logical canvas the level geometry is authored against
const VIRTUAL_SCREEN: Vec2 = Vec2::new(1920.0, 1080.0);

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("Starting Castle Runner...");

    // The built-in level goes through its JSON form on every startup, so
    // the schema can never silently drift from what the builder accepts
    let definition = schema::test_level();
    let text = definition.to_json()?;
    let definition = LevelDefinition::from_json(&text)?;
    info!("Level schema round-trip ok ({} bytes)", text.len());

    let level = Level::load(&definition, CharacterSheet::princess())?;
    let mut session = Session::new(level, ControllerManager::with_default_devices());
    let mut host = HostInput::with_gamepads();
    let mut game_loop = GameLoop::new();

    // Create event loop and window
    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Castle Runner")
        .with_inner_size(winit::dpi::LogicalSize::new(1280, 720))
        .with_resizable(true)
        .build(&event_loop)?;

    info!("Window created successfully");

    // Main event loop
    event_loop
        .run(move |event, elwt| {
            match event {
                Event::WindowEvent {
                    event: WindowEvent::CloseRequested,
                    ..
                } => {
                    info!("Close requested, shutting down...");
                    elwt.exit();
                }
                Event::WindowEvent {
                    event: WindowEvent::Resized(physical_size),
                    ..
                } => {
                    info!("Window resized to {:?}", physical_size);
                }
                Event::WindowEvent {
                    event:
                        WindowEvent::KeyboardInput {
                            event:
                                KeyEvent {
                                    physical_key: PhysicalKey::Code(code),
                                    state,
                                    ..
                                },
                            ..
                        },
                    ..
                } => match (code, state) {
                    (KeyCode::Escape, ElementState::Pressed) => {
                        info!("Escape pressed, shutting down...");
                        elwt.exit();
                    }
                    (KeyCode::KeyP, ElementState::Pressed) => {
                        game_loop.toggle_pause();
                    }
                    (code, ElementState::Pressed) => host.press_key(code),
                    (code, ElementState::Released) => host.release_key(code),
                },
                Event::WindowEvent {
                    event: WindowEvent::RedrawRequested,
                    ..
                } => {
                    let commands = session.draw_commands(VIRTUAL_SCREEN);
                    debug!(
                        "frame {}: {} draw commands, {:.1} fps",
                        game_loop.frame_count(),
                        commands.len(),
                        game_loop.fps()
                    );
                }
                Event::AboutToWait => {
                    let ticks = game_loop.begin_frame();
                    if ticks > 0 {
                        host.pump_gamepads();
                    }
                    for _ in 0..ticks {
                        session.tick(&host, TICK_TIME);
                    }
                    window.request_redraw();
                }
                _ => {}
            }
        })
        .map_err(|e| anyhow::anyhow!("Event loop error: {}", e))?;

    Ok(())
}
