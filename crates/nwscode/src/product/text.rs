//! Forecast and headline extraction
//!
//! Forecasts and headlines have no fixed grammar. Each extractor
//! is a small state machine over the lines of a segment, which
//! must already have trailing whitespace removed. Multi-line
//! spans are folded onto a single line.

use lazy_static::lazy_static;
use regex::Regex;

/// Headline delimiter
const ELLIPSIS: &str = "...";

lazy_static! {
    // .TODAY...
    static ref RE_FORECAST: Regex =
        Regex::new(r"\A\.[A-Z ]+?\.{3}").expect("bad forecast regexp");

    // * SEVERE THUNDERSTORM WARNING FOR...
    static ref RE_SHORT_FUSE: Regex = Regex::new(
        r"\A\* (?:SEVERE THUNDERSTORM|TORNADO|(?:FLASH )?FLOOD) (?:WARNING|WATCH|ADVISORY) FOR\.*\z"
    )
    .expect("bad short-fuse regexp");

    // area names following a short-fuse bullet
    static ref RE_SHORT_FUSE_AREA: Regex =
        Regex::new(r"\A[A-Z0-9 .]+\z").expect("bad short-fuse regexp");
}

// Span extraction state
#[derive(Clone, Debug, PartialEq, Eq)]
enum Span<'a> {
    // Looking for the start of a span
    Searching,

    // Accumulating the lines of a span
    Open(Vec<&'a str>),
}

/// Extract forecast paragraphs
///
/// A forecast begins with a line like `.TONIGHT...` and continues
/// through every following line which starts with an uppercase
/// letter or digit.
pub(crate) fn forecasts(lines: &[&str]) -> Vec<String> {
    let mut out = Vec::new();
    let mut state = Span::Searching;

    for &line in lines {
        if RE_FORECAST.is_match(line) {
            if let Span::Open(run) = state {
                out.push(fold(&run));
            }
            state = Span::Open(vec![line]);
            continue;
        }

        state = match state {
            Span::Open(mut run) if starts_upper_or_digit(line) => {
                run.push(line);
                Span::Open(run)
            }
            Span::Open(run) => {
                out.push(fold(&run));
                Span::Searching
            }
            Span::Searching => Span::Searching,
        };
    }

    if let Span::Open(run) = state {
        out.push(fold(&run));
    }
    out
}

/// Extract headlines
///
/// A headline begins with `...` and ends with `...`, possibly
/// several lines later. Only letters, digits, spaces, and blank
/// lines may appear between the ellipses. A line which cannot be
/// part of the headline abandons it.
pub(crate) fn headlines(lines: &[&str]) -> Vec<String> {
    let mut out = Vec::new();
    let mut state = Span::Searching;

    for &line in lines {
        if let Span::Open(mut run) = state {
            state = Span::Searching;
            match line.strip_suffix(ELLIPSIS) {
                Some(head) if is_headline_text(head) => {
                    run.push(line);
                    out.push(fold(&run));
                    continue;
                }
                _ if is_headline_text(line) => {
                    run.push(line);
                    state = Span::Open(run);
                    continue;
                }
                _ => {
                    // abandoned; this line may begin a new headline
                }
            }
        }

        if let Some(rest) = line.strip_prefix(ELLIPSIS) {
            match rest.strip_suffix(ELLIPSIS) {
                Some(body) if is_headline_text(body) => out.push(fold(&[line])),
                _ if is_headline_text(rest) => state = Span::Open(vec![line]),
                _ => {}
            }
        }
    }

    out
}

/// Synthesize headlines for short-fuse products
///
/// A bullet like `* TORNADO WARNING FOR...` and the area lines
/// which follow it become a headline like
/// `...TORNADO WARNING FOR NORTHERN WAKE COUNTY...`. A bullet with
/// no area lines produces nothing.
pub(crate) fn short_fuse_headlines(lines: &[&str]) -> Vec<String> {
    let mut out = Vec::new();
    let mut state = Span::Searching;

    for &line in lines {
        state = match state {
            Span::Open(mut run) if RE_SHORT_FUSE_AREA.is_match(line) => {
                run.push(line);
                Span::Open(run)
            }
            Span::Open(run) => {
                if run.len() > 1 {
                    out.push(synthesize(&run));
                }
                Span::Searching
            }
            Span::Searching => Span::Searching,
        };

        if state == Span::Searching && RE_SHORT_FUSE.is_match(line) {
            state = Span::Open(vec![line]);
        }
    }

    if let Span::Open(run) = state {
        if run.len() > 1 {
            out.push(synthesize(&run));
        }
    }
    out
}

// Fold lines onto a single line, one space per line break
fn fold(lines: &[&str]) -> String {
    lines.join(" ").trim().to_owned()
}

// Build a headline from a short-fuse bullet and its areas
fn synthesize(lines: &[&str]) -> String {
    let text = lines.join(" ");
    let text = text.trim_start_matches(['*', ' ']).replace(ELLIPSIS, "");
    let words: Vec<&str> = text.split_whitespace().collect();
    format!("{}{}{}", ELLIPSIS, words.join(" "), ELLIPSIS)
}

fn starts_upper_or_digit(line: &str) -> bool {
    line.starts_with(|c: char| c.is_ascii_uppercase() || c.is_ascii_digit())
}

fn is_headline_text(s: &str) -> bool {
    s.chars().all(|c| c.is_ascii_alphanumeric() || c == ' ')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forecasts() {
        let lines = [
            "800 AM EDT MON JUL 14 2006",
            "",
            ".TODAY...SUNNY. HIGHS IN THE",
            "LOWER 90S.",
            ".TONIGHT...CLEAR.",
            "",
            "LATER TEXT.",
            ".REST OF THE WEEK...HOT",
            "AND HUMID",
        ];
        assert_eq!(
            forecasts(&lines),
            vec![
                ".TODAY...SUNNY. HIGHS IN THE LOWER 90S.",
                ".TONIGHT...CLEAR.",
                ".REST OF THE WEEK...HOT AND HUMID",
            ]
        );

        // not forecasts
        assert!(forecasts(&["...HEADLINE...", ".TODAY..", "TODAY...SUNNY"]).is_empty());
    }

    #[test]
    fn test_forecast_continuation() {
        // lowercase and punctuation end the paragraph
        let lines = [".TODAY...SUNNY", "3 TO 5 MPH", "* BULLET", "MORE"];
        assert_eq!(forecasts(&lines), vec![".TODAY...SUNNY 3 TO 5 MPH"]);
    }

    #[test]
    fn test_headlines() {
        let lines = [
            "...HEAT ADVISORY IN EFFECT...",
            "",
            "...WIND ADVISORY IN EFFECT FROM NOON",
            "TODAY TO 8 PM EDT",
            "THIS EVENING...",
            "...Lowercase is fine...",
        ];
        assert_eq!(
            headlines(&lines),
            vec![
                "...HEAT ADVISORY IN EFFECT...",
                "...WIND ADVISORY IN EFFECT FROM NOON TODAY TO 8 PM EDT THIS EVENING...",
                "...Lowercase is fine...",
            ]
        );
    }

    #[test]
    fn test_headlines_blank_lines() {
        let lines = ["...HEAT ADVISORY IN EFFECT", "", "UNTIL 8 PM EDT..."];
        assert_eq!(
            headlines(&lines),
            vec!["...HEAT ADVISORY IN EFFECT  UNTIL 8 PM EDT..."]
        );

        // the blank line does not close the span
        assert!(headlines(&["...HEAT ADVISORY IN EFFECT", "", "SEE BELOW."]).is_empty());
    }

    #[test]
    fn test_headlines_abandoned() {
        let lines = [
            "...UNTERMINATED HEADLINE",
            "",
            "...HEADLINE, WITH PUNCTUATION...",
            "...ANOTHER START",
            "...RESTARTED HEADLINE...",
            ".TODAY...SUNNY...",
        ];
        assert_eq!(headlines(&lines), vec!["...RESTARTED HEADLINE..."]);
    }

    #[test]
    fn test_short_fuse() {
        let lines = [
            "THE NATIONAL WEATHER SERVICE IN RALEIGH HAS ISSUED A",
            "",
            "* TORNADO WARNING FOR...",
            "  NORTHERN WAKE COUNTY IN CENTRAL NORTH CAROLINA...",
            "  SOUTHERN GRANVILLE COUNTY...",
            "",
            "* UNTIL 400 PM EDT",
            "",
            "* FLASH FLOOD WATCH FOR",
            "  DURHAM COUNTY.",
            "* FLOOD ADVISORY FOR...",
        ];
        assert_eq!(
            short_fuse_headlines(&lines),
            vec![
                "...TORNADO WARNING FOR NORTHERN WAKE COUNTY IN CENTRAL NORTH CAROLINA SOUTHERN GRANVILLE COUNTY...",
                "...FLASH FLOOD WATCH FOR DURHAM COUNTY....",
            ]
        );

        assert!(short_fuse_headlines(&["* WINTER STORM WARNING FOR...", "WAKE COUNTY"]).is_empty());
    }

    #[test]
    fn test_fold() {
        assert_eq!("A B", fold(&["A", "B "]));
        assert_eq!("A  B", fold(&["A", "", "B"]));
        assert_eq!("", fold(&[]));
    }
}
