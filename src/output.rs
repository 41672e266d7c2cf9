//! Output formatting for ranked search hits

use crate::query::{MatchField, SearchHit};
use memchr::memmem;
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Byte window shown on each side of a highlighted match
const SNIPPET_RADIUS: usize = 40;

/// Print ranked hits, one block per hit: location line, then a text snippet
/// with the matched substring highlighted.
pub fn print_hits(hits: &[SearchHit<'_>], query: &str, color: bool) -> io::Result<()> {
    let choice = if color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(choice);

    let needle = query.to_lowercase();

    for hit in hits {
        print_hit(&mut stdout, hit, &needle)?;
    }

    Ok(())
}

fn print_hit(stdout: &mut StandardStream, hit: &SearchHit<'_>, needle: &str) -> io::Result<()> {
    // Location header
    stdout.set_color(ColorSpec::new().set_fg(Some(Color::Magenta)))?;
    write!(stdout, "{}", hit.entry.location)?;
    stdout.reset()?;
    write!(stdout, "  ")?;

    // Title, highlighted when the title is what matched
    if hit.field == MatchField::Title && !needle.is_empty() {
        print_highlighted(stdout, &hit.entry.title, needle)?;
    } else {
        stdout.set_color(ColorSpec::new().set_bold(true))?;
        write!(stdout, "{}", hit.entry.title)?;
        stdout.reset()?;
    }

    stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
    writeln!(stdout, "  [{}]", hit.entry.category)?;
    stdout.reset()?;

    // Text snippet for text-tier matches
    if hit.field == MatchField::Text && !needle.is_empty() {
        if let Some((start, end)) = find_ci(&hit.entry.text, needle) {
            print_snippet(stdout, &hit.entry.text, start, end)?;
        }
    }

    Ok(())
}

/// Print a string with every byte range matching `needle` emphasized
fn print_highlighted(stdout: &mut StandardStream, s: &str, needle: &str) -> io::Result<()> {
    match find_ci(s, needle) {
        Some((start, end)) => {
            stdout.set_color(ColorSpec::new().set_bold(true))?;
            write!(stdout, "{}", &s[..start])?;
            stdout.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
            write!(stdout, "{}", &s[start..end])?;
            stdout.set_color(ColorSpec::new().set_bold(true))?;
            write!(stdout, "{}", &s[end..])?;
            stdout.reset()?;
        }
        None => {
            stdout.set_color(ColorSpec::new().set_bold(true))?;
            write!(stdout, "{}", s)?;
            stdout.reset()?;
        }
    }
    Ok(())
}

/// Print a snippet window around a match, with the match highlighted
fn print_snippet(
    stdout: &mut StandardStream,
    text: &str,
    start: usize,
    end: usize,
) -> io::Result<()> {
    let from = clamp_boundary(text, start.saturating_sub(SNIPPET_RADIUS));
    let to = clamp_boundary(text, (end + SNIPPET_RADIUS).min(text.len()));

    write!(stdout, "    ")?;
    if from > 0 {
        write!(stdout, "…")?;
    }
    write!(stdout, "{}", &text[from..start])?;
    stdout.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
    write!(stdout, "{}", &text[start..end])?;
    stdout.reset()?;
    write!(stdout, "{}", &text[end..to])?;
    if to < text.len() {
        write!(stdout, "…")?;
    }
    writeln!(stdout)?;

    Ok(())
}

/// Print only distinct locations (for --locations)
pub fn print_locations_only(hits: &[SearchHit<'_>]) -> io::Result<()> {
    let mut stdout = StandardStream::stdout(ColorChoice::Auto);

    let mut seen = std::collections::HashSet::new();

    for hit in hits {
        if seen.insert(hit.entry.location.as_str()) {
            stdout.set_color(ColorSpec::new().set_fg(Some(Color::Magenta)))?;
            writeln!(stdout, "{}", hit.entry.location)?;
            stdout.reset()?;
        }
    }

    Ok(())
}

/// Case-insensitive byte range of `needle` within `haystack`.
///
/// Lowercasing can change byte lengths for some scripts; when it does, the
/// offsets no longer map back to the original string and highlighting is
/// skipped rather than risk slicing mid-character.
fn find_ci(haystack: &str, needle: &str) -> Option<(usize, usize)> {
    let lowered = haystack.to_lowercase();
    if lowered.len() != haystack.len() {
        return None;
    }

    let start = memmem::find(lowered.as_bytes(), needle.as_bytes())?;
    let end = start + needle.len();

    if haystack.is_char_boundary(start) && haystack.is_char_boundary(end) {
        Some((start, end))
    } else {
        None
    }
}

/// Snap a byte offset back to the nearest char boundary at or before it
fn clamp_boundary(s: &str, mut pos: usize) -> usize {
    while pos > 0 && !s.is_char_boundary(pos) {
        pos -= 1;
    }
    pos
}
