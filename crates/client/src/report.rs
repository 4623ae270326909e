//! Rendering of ranked results.

use anyhow::Result;
use console::style;
use skilling_core::ComputedAction;
use skilling_core::data::{GameData, hrid};

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable ranked table
    Table,
    /// Full JSON output
    Json,
}

/// True when an action belongs to the requested skill.
///
/// Accepts an action type hrid (`/action_types/cooking`), its bare name
/// (`cooking`), or a skill hrid (`/skills/cooking`), case-insensitively.
pub fn matches_skill(result: &ComputedAction, skill: &str) -> bool {
    let skill = skill.to_ascii_lowercase();
    result.action_type == skill
        || hrid::action_type_name(&result.action_type) == skill
        || result.skill_hrid == skill
}

pub fn print(results: &[ComputedAction], data: &GameData, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => {
            print_table(results, data);
            Ok(())
        }
        OutputFormat::Json => print_json(results),
    }
}

fn print_json(results: &[ComputedAction]) -> Result<()> {
    let json = serde_json::to_string_pretty(results)?;
    println!("{json}");
    Ok(())
}

fn print_table(results: &[ComputedAction], data: &GameData) {
    if results.is_empty() {
        println!("{}", style("No actions to show").yellow());
        return;
    }

    println!(
        "{}",
        style(format!(
            "{:>4}  {:<32} {:<15} {:>9} {:>9} {:>7} {:>6} {:>7} {:>12}  {}",
            "#", "Action", "Skill", "Cost", "Revenue", "Act/h", "Succ", "Spread", "Profit/h", "Teas"
        ))
        .bold()
        .cyan()
    );

    for (rank, result) in results.iter().enumerate() {
        let profit = format!("{:>12}", format_coins(result.profit));
        let profit = if result.profit > 0.0 {
            style(profit).green()
        } else {
            style(profit).red()
        };
        let teas: Vec<&str> = result.teas.iter().map(|tea| data.item_name(tea)).collect();

        println!(
            "{:>4}  {:<32} {:<15} {:>9} {:>9} {:>7.1} {:>5.0}% {:>6.0}% {}  {}",
            rank + 1,
            truncate(&result.name, 32),
            hrid::action_type_name(&result.action_type),
            format_coins(result.inputs_price),
            format_coins(result.outputs_price),
            result.actions_per_hour,
            result.success_rate * 100.0,
            result.output_max_bid_ask_spread * 100.0,
            profit,
            style(teas.join(", ")).dim(),
        );
    }
}

/// Compact coin amount (`1.2k`, `3.4M`); unbuyable inputs show as `-`.
fn format_coins(value: f64) -> String {
    if !value.is_finite() {
        return "-".to_string();
    }
    let magnitude = value.abs();
    if magnitude >= 1e9 {
        format!("{:.1}B", value / 1e9)
    } else if magnitude >= 1e6 {
        format!("{:.1}M", value / 1e6)
    } else if magnitude >= 1e3 {
        format!("{:.1}k", value / 1e3)
    } else {
        format!("{value:.1}")
    }
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(width.saturating_sub(1)).collect();
    cut.push('…');
    cut
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(action_type: &str, skill_hrid: &str) -> ComputedAction {
        ComputedAction {
            id: "/actions/cooking/donut".to_string(),
            name: "Donut".to_string(),
            action_type: action_type.to_string(),
            skill_hrid: skill_hrid.to_string(),
            level_required: 1,
            teas: Vec::new(),
            inputs: Vec::new(),
            inputs_price: 0.0,
            outputs: Vec::new(),
            outputs_price: 0.0,
            output_max_bid_ask_spread: 0.0,
            success_rate: 1.0,
            actions_per_hour: 1.0,
            profit: 0.0,
        }
    }

    #[test]
    fn skill_filter_accepts_every_spelling() {
        let donut = result(hrid::COOKING, "/skills/cooking");
        assert!(matches_skill(&donut, "cooking"));
        assert!(matches_skill(&donut, "Cooking"));
        assert!(matches_skill(&donut, "/action_types/cooking"));
        assert!(matches_skill(&donut, "/skills/cooking"));
        assert!(!matches_skill(&donut, "brewing"));
    }

    #[test]
    fn coins_are_compacted() {
        assert_eq!(format_coins(12.34), "12.3");
        assert_eq!(format_coins(-2_500.0), "-2.5k");
        assert_eq!(format_coins(3_400_000.0), "3.4M");
        assert_eq!(format_coins(f64::NEG_INFINITY), "-");
    }

    #[test]
    fn json_keeps_unbuyable_costs() {
        let mut unbuyable = result(hrid::COOKING, "/skills/cooking");
        unbuyable.inputs_price = f64::INFINITY;
        unbuyable.profit = f64::NEG_INFINITY;

        let json = serde_json::to_string(&unbuyable).unwrap();
        assert!(json.contains(r#""inputsPrice":"Infinity""#));
        assert!(json.contains(r#""profit":"-Infinity""#));

        let parsed: ComputedAction = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, unbuyable);
    }

    #[test]
    fn long_names_are_truncated() {
        assert_eq!(truncate("Cheese", 10), "Cheese");
        assert_eq!(truncate("Verdant Milk (transmute)", 10), "Verdant M…");
    }
}
