//! Command shell: user intents and the console rendering surface

use knot_physics::{Branch, KnotKind, C_VACUUM, PLANCK_LENGTH, PLANCK_TENSION};
use knot_simulation::{RenderSurface, Scene};

/// Everything the control layer can ask of the host.
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    AddKnot(KnotKind),
    Clear,
    SetBranch(Branch),
    ToggleTorsion,
    ToggleTension,
    Tick(u32),
    ShowScene,
    ShowCurve,
    ShowMetrics,
    Ask(String),
    /// Speak the given text, or the last assistant reply when omitted.
    Speak(Option<String>),
    Help,
    Quit,
}

/// Number of ticks a bare `tick` advances (one nominal second of frames).
pub const DEFAULT_TICKS: u32 = 60;

/// Parse one input line into an intent. Returns None for unknown input.
pub fn parse(line: &str) -> Option<Intent> {
    let line = line.trim();
    let (command, rest) = match line.split_once(char::is_whitespace) {
        Some((head, tail)) => (head, tail.trim()),
        None => (line, ""),
    };

    match command {
        "proton" => Some(Intent::AddKnot(KnotKind::Proton)),
        "electron" => Some(Intent::AddKnot(KnotKind::Electron)),
        "neutron" => Some(Intent::AddKnot(KnotKind::Neutron)),
        "clear" => Some(Intent::Clear),
        "branch" => match rest {
            "c" => Some(Intent::SetBranch(Branch::ConstantC)),
            "v" => Some(Intent::SetBranch(Branch::VariableC)),
            _ => None,
        },
        "torsion" => Some(Intent::ToggleTorsion),
        "tension" => Some(Intent::ToggleTension),
        "tick" => {
            if rest.is_empty() {
                Some(Intent::Tick(DEFAULT_TICKS))
            } else {
                rest.parse().ok().map(Intent::Tick)
            }
        }
        "scene" => Some(Intent::ShowScene),
        "curve" => Some(Intent::ShowCurve),
        "metrics" => Some(Intent::ShowMetrics),
        "ask" if !rest.is_empty() => Some(Intent::Ask(rest.to_string())),
        "say" => {
            if rest.is_empty() {
                Some(Intent::Speak(None))
            } else {
                Some(Intent::Speak(Some(rest.to_string())))
            }
        }
        "help" => Some(Intent::Help),
        "quit" | "exit" => Some(Intent::Quit),
        _ => None,
    }
}

pub const HELP: &str = "\
  proton | electron | neutron   add a knot at a random position
  clear                         reset the network
  branch c | branch v           select theory branch (constant / variable c)
  tick [n]                      advance n propagation steps (default 60)
  torsion | tension             toggle field overlays
  scene                         draw the current scene
  curve                         print the local-c vs radius profile
  metrics                       print the calculated metrics panel
  ask <question>                ask the physics researcher
  say [text]                    speak text (or the last reply)
  quit                          leave the lab";

/// Renders scene snapshots as console text. Owns nothing but its line
/// count; each draw rebuilds the full frame, mirroring how a graphical
/// surface would rebuild its meshes from the same snapshot.
#[derive(Debug, Default)]
pub struct ConsoleRenderer {
    frames_drawn: u64,
}

impl ConsoleRenderer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RenderSurface for ConsoleRenderer {
    fn draw(&mut self, scene: &Scene) {
        self.frames_drawn += 1;
        println!(
            "frame {} | branch {} | {} knots | grid ±{} x {:.1}",
            self.frames_drawn,
            scene.branch.label(),
            scene.knots.len(),
            scene.grid.half_dim,
            scene.grid.spacing,
        );
        for knot in &scene.knots {
            println!(
                "  {:>8} #{:<3} at ({:6.2}, {:6.2}, {:6.2})  mass {:4.1}  chirality {:+}",
                knot.kind.label(),
                knot.id,
                knot.position.x,
                knot.position.y,
                knot.position.z,
                knot.mass,
                knot.chirality,
            );
        }
        for (index, photon) in scene.photons.iter().enumerate() {
            println!(
                "  photon {} at ({:6.2}, {:6.2}, {:6.2})",
                index, photon.x, photon.y, photon.z
            );
        }
        if scene.overlays.torsion_fields {
            println!("  [overlay] vector torsion fields");
        }
        if scene.overlays.tension_maps {
            println!("  [overlay] network tension maps");
        }
    }
}

/// The static "Calculated Metrics" panel.
pub fn print_metrics() {
    println!("  Planck Tension (Tp)   {PLANCK_TENSION:.1e} N");
    println!("  Planck Length         {PLANCK_LENGTH:.6e} m");
    println!("  Vacuum c              {C_VACUUM:.0} m/s");
    println!("  Elastic Modulus (Ke)  1.025");
    println!("  Torsion Delta         dt ~ 1.0");
    println!("  Proper Time Ratio     0.99988");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_knot_commands() {
        assert_eq!(parse("proton"), Some(Intent::AddKnot(KnotKind::Proton)));
        assert_eq!(parse("electron"), Some(Intent::AddKnot(KnotKind::Electron)));
        assert_eq!(parse(" neutron "), Some(Intent::AddKnot(KnotKind::Neutron)));
    }

    #[test]
    fn test_parse_branch() {
        assert_eq!(parse("branch c"), Some(Intent::SetBranch(Branch::ConstantC)));
        assert_eq!(parse("branch v"), Some(Intent::SetBranch(Branch::VariableC)));
        assert_eq!(parse("branch x"), None);
        assert_eq!(parse("branch"), None);
    }

    #[test]
    fn test_parse_tick() {
        assert_eq!(parse("tick"), Some(Intent::Tick(DEFAULT_TICKS)));
        assert_eq!(parse("tick 5"), Some(Intent::Tick(5)));
        assert_eq!(parse("tick five"), None);
    }

    #[test]
    fn test_parse_ask_keeps_full_question() {
        assert_eq!(
            parse("ask what is torsion potential?"),
            Some(Intent::Ask("what is torsion potential?".to_string()))
        );
        // A question is required
        assert_eq!(parse("ask"), None);
    }

    #[test]
    fn test_parse_say_defaults_to_last_reply() {
        assert_eq!(parse("say"), Some(Intent::Speak(None)));
        assert_eq!(
            parse("say hello lab"),
            Some(Intent::Speak(Some("hello lab".to_string())))
        );
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert_eq!(parse("gluon"), None);
        assert_eq!(parse(""), None);
    }
}
