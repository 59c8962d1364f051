//! Fluent builder for SVG path data (`d` attribute).

use std::fmt;

use crate::fmt_num;

/// One path command in absolute coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo { x: f64, y: f64 },
    LineTo { x: f64, y: f64 },
    QuadTo { cx: f64, cy: f64, x: f64, y: f64 },
    Arc {
        rx: f64,
        ry: f64,
        rotation: f64,
        large_arc: bool,
        sweep: bool,
        x: f64,
        y: f64,
    },
    Close,
}

/// Path data built command by command.
///
/// ```rust
/// use apron_svg::PathData;
///
/// let d = PathData::new().m(0.0, 0.0).l(10.0, 0.0).l(10.0, 5.0).z();
/// assert_eq!(d.to_string(), "M0,0L10,0L10,5Z");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathData {
    commands: Vec<PathCommand>,
}

impl PathData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn m(mut self, x: f64, y: f64) -> Self {
        self.commands.push(PathCommand::MoveTo { x, y });
        self
    }

    pub fn l(mut self, x: f64, y: f64) -> Self {
        self.commands.push(PathCommand::LineTo { x, y });
        self
    }

    pub fn q(mut self, cx: f64, cy: f64, x: f64, y: f64) -> Self {
        self.commands.push(PathCommand::QuadTo { cx, cy, x, y });
        self
    }

    #[allow(clippy::too_many_arguments)]
    pub fn a(
        mut self,
        rx: f64,
        ry: f64,
        rotation: f64,
        large_arc: bool,
        sweep: bool,
        x: f64,
        y: f64,
    ) -> Self {
        self.commands.push(PathCommand::Arc {
            rx,
            ry,
            rotation,
            large_arc,
            sweep,
            x,
            y,
        });
        self
    }

    pub fn z(mut self) -> Self {
        self.commands.push(PathCommand::Close);
        self
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl fmt::Display for PathData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cmd in &self.commands {
            match *cmd {
                PathCommand::MoveTo { x, y } => write!(f, "M{},{}", fmt_num(x), fmt_num(y))?,
                PathCommand::LineTo { x, y } => write!(f, "L{},{}", fmt_num(x), fmt_num(y))?,
                PathCommand::QuadTo { cx, cy, x, y } => write!(
                    f,
                    "Q{},{} {},{}",
                    fmt_num(cx),
                    fmt_num(cy),
                    fmt_num(x),
                    fmt_num(y)
                )?,
                PathCommand::Arc {
                    rx,
                    ry,
                    rotation,
                    large_arc,
                    sweep,
                    x,
                    y,
                } => write!(
                    f,
                    "A{} {} {} {} {} {},{}",
                    fmt_num(rx),
                    fmt_num(ry),
                    fmt_num(rotation),
                    large_arc as u8,
                    sweep as u8,
                    fmt_num(x),
                    fmt_num(y)
                )?,
                PathCommand::Close => f.write_str("Z")?,
            }
        }
        Ok(())
    }
}

impl From<PathData> for String {
    fn from(d: PathData) -> Self {
        d.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quad_and_arc_commands_format() {
        let d = PathData::new()
            .m(1.5, 2.0)
            .q(3.0, 4.0, 5.0, 6.0)
            .a(10.0, 10.0, 0.0, false, true, 20.0, 2.0);
        assert_eq!(d.to_string(), "M1.5,2Q3,4 5,6A10 10 0 0 1 20,2");
        assert_eq!(d.commands().len(), 3);
    }
}
