//! Text form of polygons: `"x1,y1;x2,y2;..."`.

use crate::error::ParseError;
use crate::math::Point2;

/// Parses a polygon written as `;`-separated `x,y` pairs.
///
/// Whitespace around numbers is ignored.
///
/// # Errors
///
/// Returns a [`ParseError`] naming the first malformed vertex.
pub fn parse_polygon(text: &str) -> Result<Vec<Point2>, ParseError> {
    if text.trim().is_empty() {
        return Err(ParseError::Empty);
    }

    text.split(';')
        .enumerate()
        .map(|(index, vertex)| -> Result<Point2, ParseError> {
            let (x, y) = vertex
                .split_once(',')
                .ok_or_else(|| ParseError::MissingCoordinate {
                    index,
                    text: vertex.to_owned(),
                })?;
            Ok(Point2::new(parse_coord(index, x)?, parse_coord(index, y)?))
        })
        .collect()
}

fn parse_coord(index: usize, text: &str) -> Result<f64, ParseError> {
    text.trim()
        .parse()
        .map_err(|_| ParseError::InvalidNumber {
            index,
            text: text.to_owned(),
        })
}

/// Formats a polygon in the syntax accepted by [`parse_polygon`].
#[must_use]
pub fn format_polygon(points: &[Point2]) -> String {
    points
        .iter()
        .map(|p| format!("{},{}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(";")
}
