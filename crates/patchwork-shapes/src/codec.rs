//! Textual wire format for shapes and composites.
//!
//! Records are whitespace-separated token streams, newline-insensitive and
//! order-significant:
//!
//! ```text
//! circle <x> <y> <radius> <r> <g> <b>
//! polygon <n> <x1> <y1> ... <xn> <yn> <r> <g> <b>
//! line <x> <y> <dx> <dy> <r> <g> <b>
//! ellipse <x> <y> <rx> <ry> <r> <g> <b>
//! annotation <byte_length> <text...>
//! ```
//!
//! Floats print fixed-point with exactly two decimals; colors print as plain
//! integers. Decoding recovers per record: a malformed or truncated record
//! is skipped with a logged diagnostic and parsing continues at the next
//! token, while an unknown keyword is dropped silently.

use patchwork_core::{Color, ParseError, Vec2};
use tracing::warn;

use crate::shapes::{Circle, Ellipse, Line, Polygon, Shape};

/// Appends the textual record for `shape` to `out`.
pub fn encode_shape(shape: &Shape, out: &mut String) {
    match shape {
        Shape::Circle(c) => {
            out.push_str(&format!(
                "circle {:.2} {:.2} {:.2} {} {} {}",
                c.origin.x, c.origin.y, c.radius, c.color.r, c.color.g, c.color.b
            ));
        }
        Shape::Polygon(p) => {
            out.push_str(&format!("polygon {}", p.points.len()));
            for point in &p.points {
                out.push_str(&format!(" {:.2} {:.2}", point.x, point.y));
            }
            out.push_str(&format!(" {} {} {}", p.color.r, p.color.g, p.color.b));
        }
        Shape::Line(l) => {
            out.push_str(&format!(
                "line {:.2} {:.2} {:.2} {:.2} {} {} {}",
                l.point.x, l.point.y, l.direction.x, l.direction.y, l.color.r, l.color.g, l.color.b
            ));
        }
        Shape::Ellipse(e) => {
            out.push_str(&format!(
                "ellipse {:.2} {:.2} {:.2} {:.2} {} {} {}",
                e.origin.x, e.origin.y, e.radius.x, e.radius.y, e.color.r, e.color.g, e.color.b
            ));
        }
    }
}

/// Serializes a whole composite: every component's record space-joined,
/// followed by the annotation clause (always last).
pub fn encode_image(components: &[Shape], annotation: &str) -> String {
    let mut out = String::new();
    for shape in components {
        encode_shape(shape, &mut out);
        out.push(' ');
    }
    out.push_str(&format!("annotation {} {}", annotation.len(), annotation));
    out
}

/// Outcome of decoding a token stream.
#[derive(Debug, Default)]
pub struct Decoded {
    /// Successfully parsed shapes, in stream order.
    pub shapes: Vec<Shape>,
    /// Annotation text, when the stream carried an annotation clause.
    pub annotation: Option<String>,
}

/// Tokenizer that tracks byte positions in the raw input, so the annotation
/// clause can take an exact byte count (spaces included).
struct Tokens<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Tokens<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn next(&mut self) -> Option<&'a str> {
        let rest = &self.input[self.pos..];
        let start = rest.find(|c: char| !c.is_whitespace())?;
        let rest = &rest[start..];
        let end = rest.find(char::is_whitespace).unwrap_or(rest.len());
        self.pos += start + end;
        Some(&rest[..end])
    }

    /// Takes up to `n` raw bytes after skipping one separator byte,
    /// clamping to the end of the input and to a character boundary.
    fn take_bytes(&mut self, n: usize) -> &'a str {
        let mut start = self.pos;
        if self.input[start..].starts_with([' ', '\n', '\t', '\r']) {
            start += 1;
        }
        let mut end = (start + n).min(self.input.len());
        while !self.input.is_char_boundary(end) {
            end -= 1;
        }
        self.pos = end;
        &self.input[start..end]
    }
}

fn next_token<'a>(
    tokens: &mut Tokens<'a>,
    record: &'static str,
    field: &'static str,
) -> Result<&'a str, ParseError> {
    tokens.next().ok_or(ParseError::Truncated { record, field })
}

fn parse_f64(
    tokens: &mut Tokens<'_>,
    record: &'static str,
    field: &'static str,
) -> Result<f64, ParseError> {
    let token = next_token(tokens, record, field)?;
    token.parse().map_err(|_| ParseError::MalformedToken {
        record,
        field,
        token: token.to_string(),
    })
}

fn parse_usize(
    tokens: &mut Tokens<'_>,
    record: &'static str,
    field: &'static str,
) -> Result<usize, ParseError> {
    let token = next_token(tokens, record, field)?;
    token.parse().map_err(|_| ParseError::MalformedToken {
        record,
        field,
        token: token.to_string(),
    })
}

fn parse_channel(
    tokens: &mut Tokens<'_>,
    record: &'static str,
    field: &'static str,
) -> Result<u8, ParseError> {
    let token = next_token(tokens, record, field)?;
    token.parse().map_err(|_| ParseError::MalformedToken {
        record,
        field,
        token: token.to_string(),
    })
}

fn parse_color(tokens: &mut Tokens<'_>, record: &'static str) -> Result<Color, ParseError> {
    let r = parse_channel(tokens, record, "red")?;
    let g = parse_channel(tokens, record, "green")?;
    let b = parse_channel(tokens, record, "blue")?;
    Ok(Color::rgb(r, g, b))
}

fn parse_circle(tokens: &mut Tokens<'_>) -> Result<Shape, ParseError> {
    let x = parse_f64(tokens, "circle", "x")?;
    let y = parse_f64(tokens, "circle", "y")?;
    let radius = parse_f64(tokens, "circle", "radius")?;
    let color = parse_color(tokens, "circle")?;
    Ok(Shape::Circle(Circle::new(Vec2::new(x, y), radius, color)))
}

fn parse_polygon(tokens: &mut Tokens<'_>) -> Result<Shape, ParseError> {
    let count = parse_usize(tokens, "polygon", "count")?;
    let mut points = Vec::with_capacity(count.min(1024));
    for _ in 0..count {
        let x = parse_f64(tokens, "polygon", "x")?;
        let y = parse_f64(tokens, "polygon", "y")?;
        points.push(Vec2::new(x, y));
    }
    let color = parse_color(tokens, "polygon")?;
    Ok(Shape::Polygon(Polygon::new(points, color)))
}

fn parse_line(tokens: &mut Tokens<'_>) -> Result<Shape, ParseError> {
    let x = parse_f64(tokens, "line", "x")?;
    let y = parse_f64(tokens, "line", "y")?;
    let dx = parse_f64(tokens, "line", "dx")?;
    let dy = parse_f64(tokens, "line", "dy")?;
    let color = parse_color(tokens, "line")?;
    Ok(Shape::Line(Line::new(
        Vec2::new(x, y),
        Vec2::new(dx, dy),
        color,
    )))
}

fn parse_ellipse(tokens: &mut Tokens<'_>) -> Result<Shape, ParseError> {
    let x = parse_f64(tokens, "ellipse", "x")?;
    let y = parse_f64(tokens, "ellipse", "y")?;
    let rx = parse_f64(tokens, "ellipse", "rx")?;
    let ry = parse_f64(tokens, "ellipse", "ry")?;
    let color = parse_color(tokens, "ellipse")?;
    Ok(Shape::Ellipse(Ellipse::new(
        Vec2::new(x, y),
        Vec2::new(rx, ry),
        color,
    )))
}

/// Decodes a token stream into shapes and an optional annotation.
///
/// Malformed records are skipped with a logged diagnostic; unknown keywords
/// are dropped without comment. Never fails.
pub fn decode(input: &str) -> Decoded {
    let mut tokens = Tokens::new(input);
    let mut out = Decoded::default();

    while let Some(keyword) = tokens.next() {
        match keyword {
            "annotation" => match parse_usize(&mut tokens, "annotation", "length") {
                Ok(len) => out.annotation = Some(tokens.take_bytes(len).to_string()),
                Err(err) => warn!("skipping record: {err}"),
            },
            "circle" | "polygon" | "line" | "ellipse" => {
                let parsed = match keyword {
                    "circle" => parse_circle(&mut tokens),
                    "polygon" => parse_polygon(&mut tokens),
                    "line" => parse_line(&mut tokens),
                    _ => parse_ellipse(&mut tokens),
                };
                match parsed {
                    Ok(shape) => out.shapes.push(shape),
                    Err(err) => warn!("skipping record: {err}"),
                }
            }
            _ => {} // unknown keyword: drop the token, keep scanning
        }
    }

    out
}
