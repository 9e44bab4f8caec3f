//! Console output formatter for duel events

use super::html::{html_to_text, images};
use chrono::Utc;
use colored::Colorize;
use duel_domain::{Control, ControlView, OutputFormat, Side, Slot, VoteTally};
use serde_json::{Value, json};

/// Formats display events for the terminal
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Heading shown above a slot's contents
    pub fn slot_title(slot: Slot) -> &'static str {
        match slot {
            Slot::DogContainer => "Dog",
            Slot::CatContainer => "Cat",
            Slot::CatSingle => "Cat picture",
            Slot::Jumbotron => "Jumbotron",
        }
    }

    /// Format a fragment rendered into `slot`
    pub fn format_render(slot: Slot, html: &str, format: OutputFormat) -> String {
        match format {
            OutputFormat::Full => Self::format_render_full(slot, html),
            OutputFormat::Fragments => html.to_string(),
            OutputFormat::Json => Self::event(
                "render",
                json!({ "slot": slot.as_str(), "html": html }),
            ),
        }
    }

    fn format_render_full(slot: Slot, html: &str) -> String {
        let mut output = format!("{}\n", format!("── {} ──", Self::slot_title(slot)).yellow().bold());

        let pictures = images(html);
        if pictures.is_empty() {
            let text = html_to_text(html);
            if text.is_empty() {
                output.push_str(&format!("  {}", "(empty)".dimmed()));
            } else {
                output.push_str(&Self::indent(&text, "  "));
            }
        } else {
            let lines: Vec<String> = pictures
                .iter()
                .map(|img| match &img.alt {
                    Some(alt) => format!("  {} {}", format!("{}:", alt).cyan(), img.src),
                    None => format!("  {}", img.src),
                })
                .collect();
            output.push_str(&lines.join("\n"));
        }

        output
    }

    /// Format a slot being emptied. `None` when the format omits it.
    pub fn format_clear(slot: Slot, format: OutputFormat) -> Option<String> {
        match format {
            OutputFormat::Full => Some(
                format!("({} cleared)", Self::slot_title(slot))
                    .dimmed()
                    .to_string(),
            ),
            OutputFormat::Fragments => None,
            OutputFormat::Json => Some(Self::event("clear", json!({ "slot": slot.as_str() }))),
        }
    }

    /// Format a score update for one side
    pub fn format_score(side: Side, count: u64, format: OutputFormat) -> String {
        match format {
            OutputFormat::Json => Self::event(
                "score",
                json!({ "side": side.as_str(), "votes": count }),
            ),
            _ => {
                let noun = if count == 1 { "vote" } else { "votes" };
                format!("{} {} {}", format!("{}:", side).bold(), count, noun)
            }
        }
    }

    /// Format the running totals
    pub fn format_tally(tally: &VoteTally, format: OutputFormat) -> String {
        match format {
            OutputFormat::Json => Self::event(
                "tally",
                json!({
                    "dog": tally.dog_votes,
                    "cat": tally.cat_votes,
                    "leader": tally.leader().map(|side| side.as_str()),
                }),
            ),
            _ => format!("{} {}", "Score:".cyan().bold(), tally.summary()),
        }
    }

    /// Format a control update. Only JSON output reports these.
    pub fn format_control(
        control: Control,
        view: &ControlView,
        format: OutputFormat,
    ) -> Option<String> {
        match format {
            OutputFormat::Json => Some(Self::event(
                "control",
                json!({
                    "control": control.as_str(),
                    "label": view.label,
                    "enabled": view.enabled,
                    "visible": view.visible,
                }),
            )),
            _ => None,
        }
    }

    /// Format an error for stderr
    pub fn format_error(error: &dyn std::error::Error) -> String {
        format!("{} {}", "Error:".red().bold(), error)
    }

    fn event(kind: &str, fields: Value) -> String {
        let mut event = json!({
            "event": kind,
            "timestamp": Utc::now().to_rfc3339(),
        });
        if let (Some(target), Value::Object(extra)) = (event.as_object_mut(), fields) {
            target.extend(extra);
        }
        event.to_string()
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOG_FRAGMENT: &str =
        r#"<img class="dogImage" id="dogImage" src="http://x/dog.jpg" alt="Dog image">"#;

    fn parse(line: &str) -> Value {
        serde_json::from_str(line).unwrap()
    }

    #[test]
    fn test_render_full_shows_image_source() {
        colored::control::set_override(false);
        let output = ConsoleFormatter::format_render(Slot::DogContainer, DOG_FRAGMENT, OutputFormat::Full);
        assert!(output.starts_with("── Dog ──"));
        assert!(output.contains("Dog image: http://x/dog.jpg"));
    }

    #[test]
    fn test_render_full_text_fragment() {
        colored::control::set_override(false);
        let output = ConsoleFormatter::format_render(
            Slot::Jumbotron,
            "<div><h1>Cats or dogs?</h1></div>",
            OutputFormat::Full,
        );
        assert!(output.contains("  Cats or dogs?"));
    }

    #[test]
    fn test_render_fragments_is_verbatim() {
        let output =
            ConsoleFormatter::format_render(Slot::DogContainer, DOG_FRAGMENT, OutputFormat::Fragments);
        assert_eq!(output, DOG_FRAGMENT);
    }

    #[test]
    fn test_render_json_event() {
        let event = parse(&ConsoleFormatter::format_render(
            Slot::CatContainer,
            "<img src=\"c\">",
            OutputFormat::Json,
        ));
        assert_eq!(event["event"], "render");
        assert_eq!(event["slot"], "cat_container");
        assert_eq!(event["html"], "<img src=\"c\">");
        assert!(event["timestamp"].is_string());
    }

    #[test]
    fn test_clear_omitted_for_fragments() {
        assert!(ConsoleFormatter::format_clear(Slot::DogContainer, OutputFormat::Fragments).is_none());
        let event = parse(
            &ConsoleFormatter::format_clear(Slot::DogContainer, OutputFormat::Json).unwrap(),
        );
        assert_eq!(event["event"], "clear");
    }

    #[test]
    fn test_score() {
        colored::control::set_override(false);
        assert_eq!(
            ConsoleFormatter::format_score(Side::Dog, 1, OutputFormat::Full),
            "dog: 1 vote"
        );
        let event = parse(&ConsoleFormatter::format_score(Side::Cat, 3, OutputFormat::Json));
        assert_eq!(event["side"], "cat");
        assert_eq!(event["votes"], 3);
    }

    #[test]
    fn test_tally_json() {
        let mut tally = VoteTally::default();
        tally.record(Side::Cat);
        let event = parse(&ConsoleFormatter::format_tally(&tally, OutputFormat::Json));
        assert_eq!(event["dog"], 0);
        assert_eq!(event["cat"], 1);
        assert_eq!(event["leader"], "cat");
    }

    #[test]
    fn test_control_only_in_json() {
        let view = ControlView {
            label: "Generating images...".to_string(),
            enabled: false,
            visible: true,
        };
        assert!(ConsoleFormatter::format_control(Control::DuelButton, &view, OutputFormat::Full).is_none());
        let event = parse(
            &ConsoleFormatter::format_control(Control::DuelButton, &view, OutputFormat::Json).unwrap(),
        );
        assert_eq!(event["control"], "duel_button");
        assert_eq!(event["enabled"], false);
    }
}
