use crate::error::AnalyzeError;
use crate::event_parser::LogParser;
use crate::util::{Event, Resource, DESERT_SUM, MIN_SUM, N_SUMS};
use enum_map::EnumMap;
use serde_json::{json, Map, Value};
use tracing::{debug, info};

/// Where the robber currently sits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardState {
    pub blocked_sum: u32,
    pub blocked_resource: Option<Resource>,
}

impl Default for BoardState {
    // desert start, nothing produced there so nothing is blocked
    fn default() -> Self {
        Self {
            blocked_sum: DESERT_SUM,
            blocked_resource: None,
        }
    }
}

/// A roll that landed on a track's sum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    pub streak: u32,
    pub blocked: Option<Resource>,
}

impl Slot {
    fn cell(self) -> String {
        match self.blocked {
            Some(resource) => resource.code().to_string(),
            None => self.streak.to_string(),
        }
    }

    fn to_json(self) -> Value {
        json!({
            "streak": self.streak,
            "blocked": self.blocked.map(|r| r.code().to_string()),
        })
    }
}

/// Every roll seen so far, from the point of view of one sum.
/// `None` marks a roll of some other sum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    sum: u8,
    slots: Vec<Option<Slot>>,
    streak: u32,
}

impl Track {
    fn new(sum: u8) -> Self {
        Self {
            sum,
            slots: Vec::new(),
            streak: 0,
        }
    }

    pub fn sum(&self) -> u8 {
        self.sum
    }

    pub fn slots(&self) -> &[Option<Slot>] {
        &self.slots
    }

    fn hit(&mut self, blocked: Option<Resource>) -> Slot {
        self.streak += 1;
        let slot = Slot {
            streak: self.streak,
            blocked,
        };
        self.slots.push(Some(slot));
        slot
    }

    fn miss(&mut self) {
        self.slots.push(None);
    }

    fn row(&self) -> String {
        self.slots
            .iter()
            .map(|slot| slot.map_or_else(|| " ".to_owned(), |s| s.cell()))
            .collect()
    }
}

pub struct DiceTracker {
    parser: LogParser,
    board: BoardState,
    tracks: [Track; N_SUMS],
    // rolls that hit the robber, by the resource it was sitting on
    blocked: EnumMap<Resource, u32>,
    rolls: usize,
    lines: usize,
}

impl DiceTracker {
    pub fn new() -> Self {
        Self {
            parser: LogParser::new(),
            board: BoardState::default(),
            tracks: std::array::from_fn(|i| Track::new(MIN_SUM + i as u8)),
            blocked: EnumMap::default(),
            rolls: 0,
            lines: 0,
        }
    }

    pub fn board(&self) -> BoardState {
        self.board
    }

    pub fn tracks(&self) -> &[Track; N_SUMS] {
        &self.tracks
    }

    pub fn rolls(&self) -> usize {
        self.rolls
    }

    /// Parse every line of a log, stopping at the first malformed robber line
    pub fn parse_log<T: AsRef<str>>(
        &mut self,
        lines: impl IntoIterator<Item = T>,
    ) -> Result<(), AnalyzeError> {
        for line in lines {
            self.process(line.as_ref())?;
        }
        Ok(())
    }

    /// Classifies and applies a single line
    pub fn process(&mut self, line: &str) -> Result<(), AnalyzeError> {
        self.lines += 1;
        let event = self
            .parser
            .classify(line)
            .map_err(|source| AnalyzeError::MalformedRobberLine {
                line_no: self.lines,
                source,
            })?;
        self.apply(event);
        Ok(())
    }

    pub fn apply(&mut self, event: Event) {
        match event {
            Event::Roll(a, b) => self.handle_roll(a, b),
            Event::RobberMove { tile, resource } => self.handle_robber(tile, resource),
            Event::Noise => {}
        }
    }

    fn handle_roll(&mut self, a: u32, b: u32) {
        // totals outside 2..=12, or past u32, miss every track
        let total = a.checked_add(b);
        let blocked = if total == Some(self.board.blocked_sum) {
            self.board.blocked_resource
        } else {
            None
        };

        // every track grows by one so positions line up across sums
        for track in self.tracks.iter_mut() {
            if total == Some(u32::from(track.sum)) {
                let slot = track.hit(blocked);
                debug!(roll = self.rolls, a, b, sum = track.sum, streak = slot.streak, "roll");
                if let Some(resource) = blocked {
                    self.blocked[resource] += 1;
                }
            } else {
                track.miss();
            }
        }
        self.rolls += 1;
    }

    fn handle_robber(&mut self, tile: u32, resource: Resource) {
        info!(line = self.lines, tile, %resource, "robber moved");
        self.board = BoardState {
            blocked_sum: tile,
            blocked_resource: Some(resource),
        };
    }

    /// One row per sum, 2 through 12
    pub fn build_table(&self) -> String {
        let mut table = String::new();
        for track in &self.tracks {
            table.push_str(&format!("{:<2}: {}\n", track.sum, track.row()));
        }
        table
    }

    /// Tracks come out as an array in ascending sum order
    pub fn to_json(&self) -> Value {
        let tracks = self
            .tracks
            .iter()
            .map(|track| {
                let slots = track
                    .slots
                    .iter()
                    .map(|slot| slot.map_or(Value::Null, Slot::to_json))
                    .collect::<Vec<_>>();
                json!({ "sum": track.sum, "slots": slots })
            })
            .collect::<Vec<_>>();
        let blocked = self
            .blocked
            .iter()
            .map(|(resource, count)| (resource.name().to_owned(), json!(count)))
            .collect::<Map<_, _>>();

        json!({
            "rolls": self.rolls,
            "tracks": tracks,
            "blocked": blocked,
        })
    }

    pub fn log_summary(&self) {
        let blocked: u32 = self.blocked.values().sum();
        info!(
            lines = self.lines,
            rolls = self.rolls,
            blocked,
            "finished replaying roll log"
        );
    }
}
