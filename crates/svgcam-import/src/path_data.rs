//! SVG path-data (`d` attribute) parsing.
//!
//! Builds a `lyon` path from the move/line/curve commands of a `d`
//! attribute. Covers M/m, L/l, H/h, V/v, C/c, Q/q and Z/z, including the
//! implicit repetition SVG allows after each command; S/s, T/t and A/a are
//! skipped along with their arguments.

use lyon::math::point;
use lyon::path::Path;

/// Split path data into command letters and numbers.
fn tokenize(data: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();

    for ch in data.chars() {
        match ch {
            'M' | 'm' | 'L' | 'l' | 'H' | 'h' | 'V' | 'v' | 'C' | 'c' | 'S' | 's' | 'Q' | 'q'
            | 'T' | 't' | 'A' | 'a' | 'Z' | 'z' => {
                if !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }
                tokens.push(ch.to_string());
            }
            ' ' | ',' | '\n' | '\r' | '\t' => {
                if !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }
            }
            _ => current.push(ch),
        }
    }

    if !current.is_empty() {
        tokens.push(current);
    }

    tokens
}

/// Token cursor over path data.
struct Cursor {
    tokens: Vec<String>,
    pos: usize,
}

impl Cursor {
    fn next_command(&mut self) -> Option<char> {
        let token = self.tokens.get(self.pos)?;
        let mut chars = token.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_alphabetic() => {
                self.pos += 1;
                Some(c)
            }
            _ => None,
        }
    }

    /// True while the upcoming token is numeric (an implicit repetition of
    /// the current command).
    fn at_number(&self) -> bool {
        self.tokens
            .get(self.pos)
            .is_some_and(|t| t.parse::<f64>().is_ok())
    }

    fn number(&mut self) -> Option<f64> {
        let value = self.tokens.get(self.pos)?.parse().ok()?;
        self.pos += 1;
        Some(value)
    }

    fn numbers<const N: usize>(&mut self) -> Option<[f64; N]> {
        if self.pos + N > self.tokens.len() {
            return None;
        }
        let mut out = [0.0; N];
        for slot in &mut out {
            *slot = self.number()?;
        }
        Some(out)
    }

    fn skip_numbers(&mut self) {
        while self.at_number() {
            self.pos += 1;
        }
    }

    fn done(&self) -> bool {
        self.pos >= self.tokens.len()
    }
}

/// Parse an SVG `d` attribute into a path.
///
/// Malformed trailing arguments terminate the current command; the path
/// built so far is kept. An empty or unusable attribute yields an empty
/// path.
pub fn parse_path_data(data: &str) -> Path {
    let mut cursor = Cursor {
        tokens: tokenize(data),
        pos: 0,
    };

    let mut builder = Path::builder();
    let mut cur = (0.0f64, 0.0f64);
    let mut subpath_start = cur;
    let mut open = false;
    let mut command = None;

    while !cursor.done() {
        if let Some(c) = cursor.next_command() {
            command = Some(c);
        } else if command.is_none() || !cursor.at_number() {
            // Stray token with no command in effect
            cursor.pos += 1;
            continue;
        }

        let Some(cmd) = command else { continue };
        let relative = cmd.is_ascii_lowercase();

        match cmd.to_ascii_uppercase() {
            'M' => {
                let Some([x, y]) = cursor.numbers::<2>() else {
                    cursor.skip_numbers();
                    continue;
                };
                cur = if relative {
                    (cur.0 + x, cur.1 + y)
                } else {
                    (x, y)
                };
                if open {
                    builder.end(false);
                }
                subpath_start = cur;
                builder.begin(point(cur.0 as f32, cur.1 as f32));
                open = true;
                // Further coordinate pairs are implicit line-tos
                command = Some(if relative { 'l' } else { 'L' });
            }
            'L' => {
                let Some([x, y]) = cursor.numbers::<2>() else {
                    cursor.skip_numbers();
                    continue;
                };
                cur = if relative {
                    (cur.0 + x, cur.1 + y)
                } else {
                    (x, y)
                };
                ensure_open(&mut builder, &mut open, cur);
                builder.line_to(point(cur.0 as f32, cur.1 as f32));
            }
            'H' => {
                let Some(x) = cursor.number() else { continue };
                cur.0 = if relative { cur.0 + x } else { x };
                ensure_open(&mut builder, &mut open, cur);
                builder.line_to(point(cur.0 as f32, cur.1 as f32));
            }
            'V' => {
                let Some(y) = cursor.number() else { continue };
                cur.1 = if relative { cur.1 + y } else { y };
                ensure_open(&mut builder, &mut open, cur);
                builder.line_to(point(cur.0 as f32, cur.1 as f32));
            }
            'C' => {
                let Some([x1, y1, x2, y2, x, y]) = cursor.numbers::<6>() else {
                    cursor.skip_numbers();
                    continue;
                };
                let (c1, c2, end) = if relative {
                    (
                        (cur.0 + x1, cur.1 + y1),
                        (cur.0 + x2, cur.1 + y2),
                        (cur.0 + x, cur.1 + y),
                    )
                } else {
                    ((x1, y1), (x2, y2), (x, y))
                };
                ensure_open(&mut builder, &mut open, cur);
                builder.cubic_bezier_to(
                    point(c1.0 as f32, c1.1 as f32),
                    point(c2.0 as f32, c2.1 as f32),
                    point(end.0 as f32, end.1 as f32),
                );
                cur = end;
            }
            'Q' => {
                let Some([x1, y1, x, y]) = cursor.numbers::<4>() else {
                    cursor.skip_numbers();
                    continue;
                };
                let (ctrl, end) = if relative {
                    ((cur.0 + x1, cur.1 + y1), (cur.0 + x, cur.1 + y))
                } else {
                    ((x1, y1), (x, y))
                };
                ensure_open(&mut builder, &mut open, cur);
                builder.quadratic_bezier_to(
                    point(ctrl.0 as f32, ctrl.1 as f32),
                    point(end.0 as f32, end.1 as f32),
                );
                cur = end;
            }
            'Z' => {
                if open {
                    builder.close();
                    open = false;
                }
                cur = subpath_start;
                command = None;
            }
            // S/s, T/t, A/a: unsupported, drop their arguments
            _ => {
                cursor.skip_numbers();
                command = None;
            }
        }
    }

    if open {
        builder.end(false);
    }
    builder.build()
}

fn ensure_open(builder: &mut lyon::path::path::Builder, open: &mut bool, at: (f64, f64)) {
    if !*open {
        builder.begin(point(at.0 as f32, at.1 as f32));
        *open = true;
    }
}
