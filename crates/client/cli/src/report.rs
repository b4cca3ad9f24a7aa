//! Plain-text summary printed after a run.

use std::fmt::Write;

use tactics_runtime::{Skirmish, SkirmishSummary};

pub fn render(skirmish: &Skirmish, summary: &SkirmishSummary) -> String {
    let scenario = skirmish.scenario();
    let mut out = String::new();

    let _ = writeln!(out, "Scenario: {}", scenario.name);
    let _ = writeln!(
        out,
        "Orders: {} played, {} rejected, {} skipped",
        summary.played, summary.rejected, summary.skipped
    );

    for tactician in skirmish.game().tacticians() {
        let _ = writeln!(
            out,
            "{} ({}): {}",
            tactician.name(),
            tactician.team(),
            tactician.status()
        );
        for id in tactician.units() {
            let Some(unit) = skirmish.battlefield().unit(*id) else {
                continue;
            };
            let label = scenario.label_of(*id).unwrap_or("?");
            let weapon = unit.equipped_item().map_or("-", |item| item.name());
            let _ = writeln!(
                out,
                "  {label} {} {}/{} hp at {} [{weapon}]",
                unit.kind(),
                unit.hit_points(),
                unit.max_hit_points(),
                unit.location()
            );
        }
    }

    if !summary.removed.is_empty() {
        let fallen: Vec<_> = summary
            .removed
            .iter()
            .map(|id| scenario.label_of(*id).unwrap_or("?"))
            .collect();
        let _ = writeln!(out, "Fallen: {}", fallen.join(", "));
    }

    match skirmish.winner() {
        Some(winner) if skirmish.game().is_over() => {
            let _ = writeln!(out, "Winner: {}", winner.name());
        }
        _ => {
            let _ = writeln!(out, "No winner yet");
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use tactics_content::ScenarioLoader;
    use tactics_core::CombatConfig;

    #[test]
    fn renders_standings() {
        let spec = ScenarioLoader::parse(
            r#"(
                name: "Duel",
                teams: [(id: 0, name: "Blue"), (id: 1, name: "Red")],
                units: [
                    (label: "knight", kind: "sword_master", team: 0, hit_points: 30, movement: 3,
                     position: (x: 0, y: 0),
                     items: [(kind: "sword", name: "Blade", power: 40, min_range: 1, max_range: 1)],
                     equipped: Some(0)),
                    (label: "brute", kind: "fighter", team: 1, hit_points: 20, movement: 3,
                     position: (x: 1, y: 0)),
                ],
                orders: [Attack(attacker: "knight", target: "brute")],
            )"#,
        )
        .unwrap();
        let config = CombatConfig::default();
        let mut skirmish = Skirmish::new(config.clone(), spec.build(&config).unwrap());

        // The brute has no weapon, so the only order is rejected
        let summary = skirmish.play_all();
        let text = render(&skirmish, &summary);

        assert!(text.contains("Scenario: Duel"));
        assert!(text.contains("Orders: 0 played, 1 rejected, 0 skipped"));
        assert!(text.contains("  knight sword_master 30/30 hp at (0, 0) [Blade]"));
        assert!(text.contains("  brute fighter 20/20 hp at (1, 0) [-]"));
        assert!(text.contains("No winner yet"));
    }
}
