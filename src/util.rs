use enum_map::Enum;
use scraper::{ElementRef, Html, Node, Selector};
use std::fmt;

// two six-sided dice
pub const MIN_SUM: u8 = 2;
pub const MAX_SUM: u8 = 12;
pub const N_SUMS: usize = (MAX_SUM - MIN_SUM + 1) as usize;

/// The robber starts on the desert, which sits where a 7 would be.
pub const DESERT_SUM: u32 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Enum)]
pub enum Resource {
    Grain,
    Brick,
    Lumber,
    Ore,
    Wool,
    Desert,
}

impl Resource {
    /// Single letter used in the streak table
    pub fn code(self) -> char {
        match self {
            Resource::Grain => 'G',
            Resource::Brick => 'B',
            Resource::Lumber => 'L',
            Resource::Ore => 'O',
            Resource::Wool => 'W',
            Resource::Desert => 'D',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Resource::Grain => "grain",
            Resource::Brick => "brick",
            Resource::Lumber => "lumber",
            Resource::Ore => "ore",
            Resource::Wool => "wool",
            Resource::Desert => "desert",
        }
    }
}

impl TryFrom<&str> for Resource {
    type Error = ();

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "grain" => Ok(Resource::Grain),
            "brick" => Ok(Resource::Brick),
            "lumber" => Ok(Resource::Lumber),
            "ore" => Ok(Resource::Ore),
            "wool" => Ok(Resource::Wool),
            "desert" => Ok(Resource::Desert),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// One classified log line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Roll(u32, u32),
    RobberMove { tile: u32, resource: Resource },
    Noise,
}

/// Flattens a saved game log page into one line per message.
///
/// Dice and tiles are drawn as images, so `<img>` tags contribute their
/// `alt` text (e.g. `dice_3`) in document order.
pub fn parse_html(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    let log = Selector::parse("#game-log-text > *").expect("static selector");
    let divs = Selector::parse("div").expect("static selector");

    let mut messages = document.select(&log).peekable();
    let messages: Vec<ElementRef> = if messages.peek().is_some() {
        messages.collect()
    } else {
        // no log container, fall back to innermost divs
        document.select(&divs).filter(|el| !has_nested_div(el)).collect()
    };

    messages
        .into_iter()
        .map(message_text)
        .filter(|line| !line.is_empty())
        .collect()
}

fn has_nested_div(element: &ElementRef) -> bool {
    element
        .descendants()
        .skip(1)
        .any(|node| matches!(node.value(), Node::Element(el) if el.name() == "div"))
}

fn message_text(message: ElementRef) -> String {
    let mut parts = Vec::new();
    for node in message.descendants() {
        match node.value() {
            Node::Text(text) => parts.push(text.trim().to_owned()),
            Node::Element(el) if el.name() == "img" => {
                if let Some(alt) = el.attr("alt") {
                    parts.push(alt.trim().to_owned());
                }
            }
            _ => {}
        }
    }
    parts.retain(|p| !p.is_empty());
    parts.join(" ")
}
