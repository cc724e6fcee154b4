use crate::{
    foundation::core::{CubicBez, Point},
    foundation::error::{ParseError, StrokeError, StrokeResult},
    geometry::segment::Segment,
    geometry::stroke::{Stroke, StrokeSet},
    path::command::{PathCommand, read_commands},
};

/// Parse one path-data string into a stroke with absolute coordinates.
///
/// Accepts `M`/`m` once, first, followed by one or more `C`/`c` sextuples.
pub fn parse(path_data: &str) -> Result<Stroke, ParseError> {
    let commands = read_commands(path_data)?;

    let mut current = Point::ZERO;
    let mut move_offset = 0;
    let mut segments = Vec::with_capacity(commands.len().saturating_sub(1));
    for located in commands {
        match located.command.resolve(current) {
            PathCommand::MoveTo { to, .. } => {
                move_offset = located.offset;
                current = to;
            }
            PathCommand::CurveTo { c1, c2, to, .. } => {
                segments.push(Segment::new(CubicBez::new(current, c1, c2, to)));
                current = to;
            }
        }
    }

    if segments.is_empty() {
        return Err(ParseError::NoSegments {
            offset: move_offset,
        });
    }
    Ok(Stroke::from_contiguous(segments))
}

/// Parse every string in order; the first failure rejects the whole list.
#[tracing::instrument(skip_all)]
pub fn parse_all<I, S>(path_data: I) -> StrokeResult<StrokeSet>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let strokes = path_data
        .into_iter()
        .enumerate()
        .map(|(index, d)| parse(d.as_ref()).map_err(|source| StrokeError::parse(index, source)))
        .collect::<StrokeResult<Vec<_>>>()?;

    tracing::debug!(strokes = strokes.len(), "parsed stroke set");
    Ok(StrokeSet::new(strokes))
}

#[cfg(test)]
#[path = "../../tests/unit/path/parser.rs"]
mod tests;
