use crate::dice_tracker::DiceTracker;
use crate::error::AnalyzeError;
use crate::util::parse_html;
use clap::ValueEnum;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InputFormat {
    /// One log message per line
    Text,
    /// A saved game page containing the game log
    Html,
}

/// Opens the log at `path`, or stdin when there is none
pub fn open(path: Option<&Path>) -> Result<Box<dyn BufRead>, AnalyzeError> {
    match path {
        Some(path) => {
            let file = File::open(path).map_err(|source| AnalyzeError::Open {
                path: path.to_owned(),
                source,
            })?;
            Ok(Box::new(BufReader::new(file)))
        }
        None => Ok(Box::new(io::stdin().lock())),
    }
}

/// Replays a whole log into a fresh tracker.
///
/// Text logs are consumed lazily, one line at a time. HTML has to be read in
/// full before it can be split into messages.
pub fn replay(mut source: impl BufRead, format: InputFormat) -> Result<DiceTracker, AnalyzeError> {
    let mut tracker = DiceTracker::new();
    match format {
        InputFormat::Text => {
            for line in source.lines() {
                tracker.process(&line?)?;
            }
        }
        InputFormat::Html => {
            let mut html = String::new();
            source.read_to_string(&mut html)?;
            tracker
                .parse_log(parse_html(&html))
                .map_err(AnalyzeError::into_message)?;
        }
    }
    tracker.log_summary();
    Ok(tracker)
}
