//! Player-facing text.
//!
//! Every line the game shows during play is rendered here from a
//! `GameEvent`, so the event log and the display never disagree.

use artillery_core::config::GameConfig;
use artillery_core::enums::{EliminationCause, PhysicsModel, ShotOutcome, UnitSystem};
use artillery_core::events::GameEvent;

/// Lines to show for one event.
pub fn describe(event: &GameEvent, config: &GameConfig) -> Vec<String> {
    let units = config.units;
    match event {
        GameEvent::RoundStarted { round } => vec![format!("ROUND {round}"), String::new()],
        GameEvent::TargetChosen { shooter, target } => {
            vec![format!("PLAYER {shooter} SHOOTING AT {target}")]
        }
        GameEvent::WindReport { player, wind } => {
            vec![format!("WIND AT {player}: {wind:+.1} {}", wind_unit(units))]
        }
        GameEvent::ShotResolved { outcome, .. } => describe_shot(outcome, config),
        GameEvent::PlayerEliminated { player, cause } => match cause {
            EliminationCause::FiredIntoGround => {
                vec![format!("ERROR--FIRED INTO GROUND. {player} NOW DEFUNCT.")]
            }
            EliminationCause::TooClose => vec![format!(" TOO CLOSE- {player} IS DEFUNCT.")],
            EliminationCause::Hit { .. } => vec![format!(" A HIT - {player} IS DEFUNCT.")],
        },
        // Drift is reported through the next round's wind report.
        GameEvent::WindChanged { .. } => Vec::new(),
        GameEvent::GameOver { winner } => match winner {
            Some(player) => vec![String::new(), format!("GAME OVER. {player} WINS.")],
            None => vec![String::new(), "GAME OVER. NO SURVIVORS.".to_string()],
        },
    }
}

fn describe_shot(outcome: &ShotOutcome, config: &GameConfig) -> Vec<String> {
    let word = config.units.distance_word();
    let mut lines = Vec::new();
    if config.model == PhysicsModel::Wind {
        if let Some(impact) = outcome.impact() {
            lines.push(format!(" IMPACT AT {impact:.0} {word}"));
        }
    }
    match outcome {
        ShotOutcome::FiredWrongWay => lines.push("ERROR--FIRED WRONG WAY, LOSE SHOT.".to_string()),
        ShotOutcome::Undershot { short_by, .. } => {
            lines.push(format!(" YOU UNDERSHOT BY {short_by:.2} {word}."))
        }
        ShotOutcome::Overshot { long_by, .. } => {
            lines.push(format!(" YOU OVERSHOT BY {long_by:.2} {word}."))
        }
        // Eliminations are reported by the elimination event that follows.
        ShotOutcome::Hit { .. } | ShotOutcome::TooClose { .. } | ShotOutcome::FiredIntoGround => {}
    }
    lines
}

fn wind_unit(units: UnitSystem) -> &'static str {
    match units {
        UnitSystem::Imperial => "FT./SEC.²",
        UnitSystem::Metric => "M/SEC.²",
    }
}

/// Title banner shown once at start-up.
pub fn banner() -> Vec<String> {
    vec![
        format!("{:>33}", "ARTILLERY 3"),
        format!("{:>38}", "CREATIVE COMPUTING"),
        format!("{:>40}", "MORRISTOWN, NEW JERSEY"),
        String::new(),
        String::new(),
        String::new(),
        "WELCOME TO 'WAR3'. TWO OR THREE HUMANS MAY PLAY!".to_string(),
    ]
}

/// Rules text for the configured model.
pub fn instructions(config: &GameConfig) -> Vec<String> {
    let hit_rule = match config.model {
        PhysicsModel::Duel => format!(
            "MOVES. A 'HIT' IS SCORED BY FIRING A SHOT WITHIN {:.0}% OF THE",
            config.physics.hit_tolerance_fraction * 100.0
        ),
        PhysicsModel::Wind => format!(
            "MOVES. A 'HIT' IS SCORED BY LANDING A SHOT WITHIN {:.0} {} OF THE",
            config.physics.hit_threshold,
            config.units.distance_word()
        ),
    };
    let mut lines = vec![
        String::new(),
        "THIS IS A WAR GAME. TWO OR THREE PLAYERS ARE GIVEN".to_string(),
        "(THEORETICAL) CANNONS WITH WHICH THEY ATTEMPT TO SHOOT EACH".to_string(),
        "OTHER. THE PARAMETERS FOR DISTANCES AND MUZZLE VELOCITIES ARE".to_string(),
        "SET AT THE BEGINNING OF THE GAME. THE SHOTS ARE FIRED BY".to_string(),
        "GIVING A FIRING ANGLE, EXPRESSED IN DEGREES FROM HORIZONTAL".to_string(),
        String::new(),
        "THE COMPUTER WILL KEEP TRACK OF THE GAME AND REPORT ALL".to_string(),
        hit_rule,
    ];
    match config.model {
        PhysicsModel::Duel => lines.push("TOTAL DISTANCE FIRED OVER. GOOD LUCK".to_string()),
        PhysicsModel::Wind => {
            lines.push("TARGET. WIND CHANGES EVERY ROUND. GOOD LUCK".to_string())
        }
    }
    lines.push(String::new());
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use artillery_core::types::PlayerId;

    fn id(n: i64) -> PlayerId {
        PlayerId::from_number(n).unwrap()
    }

    #[test]
    fn undershot_uses_unit_word() {
        let event = GameEvent::ShotResolved {
            shooter: id(1),
            target: id(2),
            angle: 30.0,
            outcome: ShotOutcome::Undershot {
                impact: 878.4,
                short_by: 121.6,
            },
        };
        let imperial = describe(&event, &GameConfig::default());
        assert_eq!(imperial, vec![" YOU UNDERSHOT BY 121.60 FEET.".to_string()]);

        let metric = GameConfig::new(PhysicsModel::Wind, UnitSystem::Metric);
        let lines = describe(&event, &metric);
        assert_eq!(lines[0], " IMPACT AT 878 METERS");
        assert_eq!(lines[1], " YOU UNDERSHOT BY 121.60 METERS.");
    }

    #[test]
    fn eliminations_name_the_player() {
        let config = GameConfig::default();
        let ground = GameEvent::PlayerEliminated {
            player: id(3),
            cause: EliminationCause::FiredIntoGround,
        };
        assert_eq!(
            describe(&ground, &config),
            vec!["ERROR--FIRED INTO GROUND. 3 NOW DEFUNCT.".to_string()]
        );
        let hit = GameEvent::PlayerEliminated {
            player: id(2),
            cause: EliminationCause::Hit { by: id(1) },
        };
        assert_eq!(describe(&hit, &config), vec![" A HIT - 2 IS DEFUNCT.".to_string()]);
    }

    #[test]
    fn game_over_names_winner() {
        let lines = describe(&GameEvent::GameOver { winner: Some(id(2)) }, &GameConfig::default());
        assert_eq!(lines.last().unwrap(), "GAME OVER. 2 WINS.");
    }

    #[test]
    fn instructions_follow_model() {
        let duel = instructions(&GameConfig::default());
        assert!(duel.iter().any(|l| l.contains("WITHIN 5% OF THE")));
        let wind = instructions(&GameConfig::new(PhysicsModel::Wind, UnitSystem::Imperial));
        assert!(wind.iter().any(|l| l.contains("WITHIN 50 FEET OF THE")));
    }
}
