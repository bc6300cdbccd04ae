use crate::error::ParseError;
use crate::util::{Event, Resource};
use regex::Regex;
use tracing::debug;

const DIE: &str = r"\bdice_(\d+)\b";
const TILE: &str = r#"\btile_([^\s"'<>]*)"#;
const ROLL_KEYWORD: &str = "rolled";
const ROBBER_MARKER: &str = "moved Robber";

/// Turns raw log lines into [`Event`]s
pub struct LogParser {
    die: Regex,
    tile: Regex,
}

impl LogParser {
    pub fn new() -> Self {
        Self {
            die: Regex::new(DIE).unwrap(),
            tile: Regex::new(TILE).unwrap(),
        }
    }

    /// Classifies one line. Only a robber line can fail; a roll line without
    /// exactly two dice is noise.
    pub fn classify(&self, line: &str) -> Result<Event, ParseError> {
        if line.contains(ROBBER_MARKER) {
            self.robber_move(line)
        } else if line.contains(ROLL_KEYWORD) {
            Ok(self.roll(line))
        } else {
            Ok(Event::Noise)
        }
    }

    fn roll(&self, line: &str) -> Event {
        let faces = self
            .die
            .captures_iter(line)
            .map(|caps| caps[1].parse::<u32>().ok())
            .collect::<Vec<_>>();

        match faces[..] {
            [Some(a), Some(b)] => Event::Roll(a, b),
            _ => {
                debug!(line, dice = faces.len(), "ignoring roll line without two dice");
                Event::Noise
            }
        }
    }

    /// The tile is the last `tile_<n>` token; the resource name sits second to last.
    fn robber_move(&self, line: &str) -> Result<Event, ParseError> {
        let tile = self
            .tile
            .captures_iter(line)
            .last()
            .map(|caps| caps[1].to_owned())
            .unwrap_or_default();
        let resource = line
            .split_whitespace()
            .rev()
            .nth(1)
            .unwrap_or_default()
            .to_owned();

        let Ok(parsed) = Resource::try_from(resource.as_str()) else {
            return Err(ParseError::UnknownResource { tile, resource });
        };
        let Ok(number) = tile.parse::<u32>() else {
            return Err(ParseError::BadTile { tile, resource });
        };
        Ok(Event::RobberMove {
            tile: number,
            resource: parsed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roll() {
        let parser = LogParser::new();
        assert_eq!(
            parser.classify("Alice rolled dice_3 dice_4").unwrap(),
            Event::Roll(3, 4)
        );
        assert_eq!(
            parser.classify("... dice_6 dice_6 rolled ...").unwrap(),
            Event::Roll(6, 6)
        );
        assert_eq!(
            parser.classify(r#"Bob rolled <img alt="dice_1"> <img alt="dice_2">"#).unwrap(),
            Event::Roll(1, 2)
        );
    }

    #[test]
    fn test_roll_needs_two_dice() {
        let parser = LogParser::new();
        for line in [
            "Alice rolled dice_3",
            "Alice rolled dice_3 dice_4 dice_5",
            "Alice rolled",
            "Alice rolled dice_99999999999 dice_4",
        ] {
            assert_eq!(parser.classify(line).unwrap(), Event::Noise, "{line}");
        }
    }

    #[test]
    fn test_roll_keeps_odd_faces() {
        let parser = LogParser::new();
        assert_eq!(parser.classify("Alice rolled dice_7 dice_6").unwrap(), Event::Roll(7, 6));
        assert_eq!(parser.classify("Alice rolled dice_0 dice_4").unwrap(), Event::Roll(0, 4));
        assert_eq!(
            parser.classify("Alice rolled dice_999 dice_4").unwrap(),
            Event::Roll(999, 4)
        );
    }

    #[test]
    fn test_robber_marker_wins_over_roll() {
        let parser = LogParser::new();
        assert_eq!(
            parser
                .classify("Bob rolled dice_3 dice_4 and moved Robber to tile_4 brick tile")
                .unwrap(),
            Event::RobberMove {
                tile: 4,
                resource: Resource::Brick
            }
        );
    }

    #[test]
    fn test_roll_needs_keyword() {
        let parser = LogParser::new();
        assert_eq!(parser.classify("dice_3 dice_4").unwrap(), Event::Noise);
    }

    #[test]
    fn test_robber_move() {
        let parser = LogParser::new();
        assert_eq!(
            parser.classify("Bob moved Robber to tile_7 grain tile").unwrap(),
            Event::RobberMove {
                tile: 7,
                resource: Resource::Grain
            }
        );
        assert_eq!(
            parser.classify("Bob moved Robber to prob_11 tile_11 desert .").unwrap(),
            Event::RobberMove {
                tile: 11,
                resource: Resource::Desert
            }
        );
    }

    #[test]
    fn test_robber_move_unknown_resource() {
        let parser = LogParser::new();
        let err = parser
            .classify("Bob moved Robber to tile_5 unknown_resource tile")
            .unwrap_err();
        assert_eq!(
            err,
            ParseError::UnknownResource {
                tile: "5".to_owned(),
                resource: "unknown_resource".to_owned()
            }
        );
        assert!(parser.classify("Bob moved Robber to tile_5 Grain x").is_err());
    }

    #[test]
    fn test_robber_move_bad_tile() {
        let parser = LogParser::new();
        assert_eq!(
            parser.classify("Bob moved Robber to tile_x ore tile").unwrap_err(),
            ParseError::BadTile {
                tile: "x".to_owned(),
                resource: "ore".to_owned()
            }
        );
        assert_eq!(
            parser.classify("Bob moved Robber to the wool hills").unwrap_err(),
            ParseError::BadTile {
                tile: String::new(),
                resource: "wool".to_owned()
            }
        );
    }

    #[test]
    fn test_noise() {
        let parser = LogParser::new();
        assert_eq!(parser.classify("Alice got grain brick").unwrap(), Event::Noise);
        assert_eq!(parser.classify("").unwrap(), Event::Noise);
    }
}
