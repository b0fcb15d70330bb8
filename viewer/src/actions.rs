use anyhow::Result;

use route_model::{Direction, PanelEvent};

/// Parses something like "toggle,next,next,scrub=4,previous".
pub fn parse(input: &str) -> Result<Vec<PanelEvent>> {
    let mut events = Vec::new();
    for raw in input.split(',') {
        let raw = raw.trim();
        if raw.is_empty() {
            continue;
        }
        let event = match raw {
            "toggle" => PanelEvent::ToggleMode,
            "next" => PanelEvent::Step(Direction::Next),
            "previous" | "prev" => PanelEvent::Step(Direction::Previous),
            _ => match raw.strip_prefix("scrub=") {
                Some(idx) => PanelEvent::ScrubTo(idx.parse()?),
                None => bail!("Unknown action {raw}"),
            },
        };
        events.push(event);
    }
    Ok(events)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_actions() {
        assert_eq!(
            parse("toggle, next,prev,,scrub=4,previous").unwrap(),
            vec![
                PanelEvent::ToggleMode,
                PanelEvent::Step(Direction::Next),
                PanelEvent::Step(Direction::Previous),
                PanelEvent::ScrubTo(4),
                PanelEvent::Step(Direction::Previous),
            ]
        );
        assert!(parse("").unwrap().is_empty());
    }

    #[test]
    fn bad_actions() {
        assert!(parse("jump").is_err());
        assert!(parse("scrub=-1").is_err());
        assert!(parse("scrub=x").is_err());
    }
}
