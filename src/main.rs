//! R-QNT Elastic-Network Visualization
//!
//! Interactive driver for the toy-theory simulation: topological knots
//! perturb a 3D elastic network while a pool of photons propagates and
//! bends through it. The research side panel (assistant + speech) talks
//! to its external services; the simulation itself never blocks.

mod shell;

use glam::DVec3;
use knot_physics::KnotKind;
use knot_simulation::{OverlayToggles, RenderSurface, Simulation};
use shell::{ConsoleRenderer, Intent};
use std::io::{self, Write};
use theory_assistant::{AssistantError, AudioClip, ChatSession, TheoryAssistant};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logger (RUST_LOG=debug for verbose output)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting R-QNT elastic-network visualization...");

    let mut sim = Simulation::new();
    // The lab opens with a single proton knot at the origin
    sim.add_knot_at(KnotKind::Proton, DVec3::ZERO);

    let assistant = match TheoryAssistant::from_env() {
        Ok(client) => Some(client),
        Err(err) => {
            log::warn!("research assistant offline: {err}");
            None
        }
    };

    let mut session = ChatSession::new();
    let mut renderer = ConsoleRenderer::new();
    let mut overlays = OverlayToggles::default();

    println!("╭──────────────────────────────────────────╮");
    println!("│         R-QNT Engine / Research Lab      │");
    println!("│     type `help` for the command list     │");
    println!("╰──────────────────────────────────────────╯");
    println!("researcher: {}", session.last_reply().unwrap_or_default());

    loop {
        print!("rqnt> ");
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            break; // EOF
        }
        let input = input.trim();
        if input.is_empty() {
            continue;
        }

        let Some(intent) = shell::parse(input) else {
            println!("unknown command, type `help`");
            continue;
        };

        match intent {
            Intent::AddKnot(kind) => {
                let knot = sim.add_knot(kind);
                println!("{} #{} pinned into the network", knot.kind.label(), knot.id);
            }
            Intent::Clear => {
                sim.clear_knots();
                println!("network reset");
            }
            Intent::SetBranch(branch) => {
                sim.set_branch(branch);
                println!("branch {} selected", branch.label());
            }
            Intent::ToggleTorsion => {
                overlays.torsion_fields = !overlays.torsion_fields;
                println!(
                    "vector torsion fields {}",
                    if overlays.torsion_fields { "on" } else { "off" }
                );
            }
            Intent::ToggleTension => {
                overlays.tension_maps = !overlays.tension_maps;
                println!(
                    "network tension maps {}",
                    if overlays.tension_maps { "on" } else { "off" }
                );
            }
            Intent::Tick(count) => {
                for _ in 0..count {
                    sim.tick();
                }
                log::debug!("advanced {count} ticks");
                renderer.draw(&sim.scene(overlays));
            }
            Intent::ShowScene => renderer.draw(&sim.scene(overlays)),
            Intent::ShowCurve => {
                println!("local-c vs radius ({})", sim.branch().label());
                for point in sim.analysis_curve() {
                    println!("  r = {:4.1}   c = {:.4}", point.radius, point.local_c);
                }
            }
            Intent::ShowMetrics => shell::print_metrics(),
            Intent::Ask(question) => {
                if !session.begin(&question) {
                    println!("(the researcher is still thinking)");
                    continue;
                }
                let reply = match &assistant {
                    Some(client) => client.ask(&question).await,
                    None => Err(AssistantError::MissingApiKey),
                };
                session.complete(reply);
                println!("researcher: {}", session.last_reply().unwrap_or_default());
            }
            Intent::Speak(text) => {
                let text = text.or_else(|| session.last_reply().map(str::to_string));
                let Some(text) = text else {
                    println!("nothing to speak yet");
                    continue;
                };
                match &assistant {
                    Some(client) => speak(client, &text).await,
                    None => println!("(speech synthesis offline)"),
                }
            }
            Intent::Help => println!("{}", shell::HELP),
            Intent::Quit => break,
        }
    }

    log::info!("leaving the lab");
    Ok(())
}

/// Synthesize and play `text`, reporting failures without crashing.
async fn speak(client: &TheoryAssistant, text: &str) {
    let clip = match client.synthesize(text).await {
        Ok(bytes) => AudioClip::from_pcm16(&bytes),
        Err(err) => {
            log::warn!("speech synthesis failed: {err}");
            println!("(speech unavailable)");
            return;
        }
    };

    log::info!("playing {:.1}s of synthesized speech", clip.duration().as_secs_f64());
    let played = tokio::task::spawn_blocking(move || theory_assistant::play(&clip)).await;
    match played {
        Ok(Ok(())) => {}
        Ok(Err(err)) => {
            log::warn!("playback failed: {err}");
            println!("(playback unavailable)");
        }
        Err(err) => log::error!("playback task panicked: {err}"),
    }
}
