use anyhow::Result;
use log::info;
use winit::{
    event::{DeviceEvent, Event, MouseScrollDelta, WindowEvent},
    event_loop::EventLoop,
    window::WindowBuilder,
};

mod core;
mod engine;
mod game;

use engine::game_loop::GameLoop;
use engine::input::{Action, InputManager};
use game::collaborators::{
    AudioSink, ConsoleUi, CountdownVideo, LessonUi, NullAudio, VideoPlayer, VideoStatus,
};
use game::events::GameEvent;
use game::session::GameSession;
use game::world::WorldConfig;

/// Fixed seed so NPC variety is reproducible across runs
const SESSION_SEED: u64 = 0x5EED;

/// Wheel lines to scroll units
const LINE_SCROLL_FACTOR: f32 = 50.0;

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("Starting Eduwalk...");

    let mut session = GameSession::new(WorldConfig::default(), SESSION_SEED)?;
    let mut input = InputManager::new();
    let mut game_loop = GameLoop::new();

    // Headless collaborator stand-ins; a real build hangs renderer, HUD
    // and video widget off these seams instead
    let mut ui = ConsoleUi;
    let mut audio = NullAudio;
    let mut video = CountdownVideo::default();

    // Create event loop and window (the input surface)
    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Eduwalk")
        .with_inner_size(winit::dpi::LogicalSize::new(1280, 720))
        .with_resizable(true)
        .build(&event_loop)?;

    info!("Window created successfully");

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
            }
            Event::WindowEvent {
                event: WindowEvent::MouseInput { button, state, .. },
                ..
            } => {
                input.process_mouse_button(button, state);
            }
            Event::WindowEvent {
                event: WindowEvent::MouseWheel { delta, .. },
                ..
            } => {
                let scroll = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y * LINE_SCROLL_FACTOR,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32,
                };
                input.process_scroll(scroll);
            }
            Event::DeviceEvent {
                event: DeviceEvent::MouseMotion { delta: (dx, dy) },
                ..
            } => {
                input.process_mouse_motion(dx as f32, dy as f32);
            }
            Event::AboutToWait => {
                if input.state().just_pressed(Action::Pause) {
                    game_loop.toggle_pause();
                }

                let ticks = game_loop.begin_frame();
                let dt = game_loop.fixed_timestep();
                for _ in 0..ticks {
                    session.tick(&mut input, dt);

                    // Video completion is the sole path back into
                    // checkpoint completion
                    if let VideoStatus::Finished = video.update(dt) {
                        if let Some(id) = session.registry().active() {
                            session.complete_checkpoint(id);
                        }
                    }
                }
                if ticks > 0 {
                    input.end_frame();
                }

                for event in session.drain_events() {
                    dispatch(event, &session, &mut ui, &mut audio, &mut video);
                }

                window.request_redraw();
            }
            _ => {}
        })
        .map_err(|e| anyhow::anyhow!("Event loop error: {}", e))?;

    Ok(())
}

/// Route simulation events to the collaborators
fn dispatch(
    event: GameEvent,
    session: &GameSession,
    ui: &mut ConsoleUi,
    audio: &mut NullAudio,
    video: &mut CountdownVideo,
) {
    match event {
        GameEvent::Cue(cue) => audio.play_cue(cue),
        GameEvent::PromptShown { npc_id } => ui.show_interaction_prompt(npc_id),
        GameEvent::PromptHidden => ui.hide_interaction_prompt(),
        GameEvent::DialogOpened { npc_id } => {
            log::debug!("Dialog opened with npc {}", npc_id);
        }
        GameEvent::DialogClosed => {
            log::debug!("Dialog closed");
        }
        GameEvent::LessonRequested { checkpoint_id } => {
            if let Some(checkpoint) = session.registry().get(checkpoint_id) {
                ui.show_learning_popup(checkpoint);
                video.load(checkpoint.lesson_id);
            }
        }
        GameEvent::ProgressChanged { completed, total } => {
            ui.update_progress(completed, total);
        }
        GameEvent::AllCompleted => {
            info!("Congratulations! Every lesson is complete.");
        }
    }
}
