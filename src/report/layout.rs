// src/report/layout.rs

//! Declarative page description shared by both paper forms.
//!
//! Coordinates are millimetres measured from the top-left corner of the page,
//! `y` growing downwards. Text positions are baselines.

/// A4 portrait.
pub const PAGE_WIDTH: f32 = 210.0;
pub const PAGE_HEIGHT: f32 = 297.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    /// `x` is the horizontal centre of the text.
    Center,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weight {
    Normal,
    Bold,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Stroked rectangle outline.
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    },
    Line {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
    },
    Text {
        x: f32,
        y: f32,
        text: String,
        /// Font size in points.
        size: f32,
        weight: Weight,
        align: Align,
    },
}

/// One page worth of drawing commands, in paint order.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub width: f32,
    pub height: f32,
    pub commands: Vec<DrawCommand>,
}

impl Layout {
    pub fn a4() -> Self {
        Self {
            width: PAGE_WIDTH,
            height: PAGE_HEIGHT,
            commands: Vec::new(),
        }
    }

    pub fn rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.commands.push(DrawCommand::Rect {
            x,
            y,
            width,
            height,
        });
    }

    pub fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) {
        self.commands.push(DrawCommand::Line { x1, y1, x2, y2 });
    }

    pub fn text(
        &mut self,
        text: impl Into<String>,
        x: f32,
        y: f32,
        size: f32,
        weight: Weight,
        align: Align,
    ) {
        self.commands.push(DrawCommand::Text {
            x,
            y,
            text: text.into(),
            size,
            weight,
            align,
        });
    }

    /// All text strings in paint order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn rects(&self) -> impl Iterator<Item = (f32, f32, f32, f32)> + '_ {
        self.commands.iter().filter_map(|c| match *c {
            DrawCommand::Rect {
                x,
                y,
                width,
                height,
            } => Some((x, y, width, height)),
            _ => None,
        })
    }

    /// Lowest point reached by any command.
    pub fn bottom(&self) -> f32 {
        self.commands
            .iter()
            .map(|c| match *c {
                DrawCommand::Rect { y, height, .. } => y + height,
                DrawCommand::Line { y1, y2, .. } => y1.max(y2),
                DrawCommand::Text { y, .. } => y,
            })
            .fold(0.0, f32::max)
    }

    /// True when content runs past the bottom edge. Nothing paginates, so
    /// such content is cut off in the written document.
    pub fn overflows(&self) -> bool {
        self.bottom() > self.height
    }
}
